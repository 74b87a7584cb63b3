use std::collections::BTreeMap;

use chrono::NaiveDate;
use daybook_core::{Account, AccountType, Commodity};

use super::segment::{Positions, Segment};
use super::vector::Vector;

/// Positions of a slice of the ledger at a sequence of dates, arranged by account hierarchy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report<'a> {
    /// Report dates, ascending.
    pub dates: Vec<NaiveDate>,

    /// Every commodity appearing in the report, ordered and without duplicates.
    pub commodities: Vec<Commodity<'a>>,

    /// One tree per account category.
    pub segments: BTreeMap<AccountType, Segment<'a>>,

    /// Totals over all categories.
    pub positions: Positions<'a>,
}

impl<'a> Report<'a> {
    pub fn new(dates: Vec<NaiveDate>) -> Report<'a> {
        Report {
            dates,
            ..Report::default()
        }
    }

    /// Adds the amounts an account holds of a commodity, one per report date.
    pub fn add(&mut self, account: &Account<'a>, commodity: Commodity<'a>, amounts: Vector) {
        debug_assert_eq!(amounts.len(), self.dates.len());
        if let Err(i) = self.commodities.binary_search(&commodity) {
            self.commodities.insert(i, commodity.clone());
        }
        self.positions
            .entry(commodity.clone())
            .or_insert_with(|| Vector::new(amounts.len()))
            .add(&amounts);
        self.segments
            .entry(account.ty)
            .or_insert_with(|| Segment::new(account.ty.default_name()))
            .insert(&account.parts, commodity, &amounts);
    }
}
