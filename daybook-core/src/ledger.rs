use chrono::NaiveDate;

use super::directives::{Assertion, Close, Open, Price, Transaction, Value};

/// All directives of one date.
#[derive(Clone, Debug, PartialEq)]
pub struct Day<'a> {
    pub date: NaiveDate,
    pub prices: Vec<Price<'a>>,
    pub openings: Vec<Open<'a>>,
    pub transactions: Vec<Transaction<'a>>,
    pub values: Vec<Value<'a>>,
    pub assertions: Vec<Assertion<'a>>,
    pub closings: Vec<Close<'a>>,
}

impl<'a> Day<'a> {
    pub fn new(date: NaiveDate) -> Day<'a> {
        Day {
            date,
            prices: Vec::new(),
            openings: Vec::new(),
            transactions: Vec::new(),
            values: Vec::new(),
            assertions: Vec::new(),
            closings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
            && self.openings.is_empty()
            && self.transactions.is_empty()
            && self.values.is_empty()
            && self.assertions.is_empty()
            && self.closings.is_empty()
    }
}

/// Days in strictly ascending date order, none of them empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger<'a> {
    days: Vec<Day<'a>>,
}

impl<'a> Ledger<'a> {
    pub(crate) fn from_sorted(days: Vec<Day<'a>>) -> Ledger<'a> {
        debug_assert!(days.windows(2).all(|w| w[0].date < w[1].date));
        Ledger { days }
    }

    pub fn days(&self) -> &[Day<'a>] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The day of `date`, if anything happened on it.
    pub fn get(&self, date: NaiveDate) -> Option<&Day<'a>> {
        self.days
            .binary_search_by_key(&date, |day| day.date)
            .ok()
            .map(|i| &self.days[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Day<'a>> {
        self.days.iter()
    }
}

impl<'a> IntoIterator for Ledger<'a> {
    type Item = Day<'a>;
    type IntoIter = std::vec::IntoIter<Day<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

impl<'l, 'a> IntoIterator for &'l Ledger<'a> {
    type Item = &'l Day<'a>;
    type IntoIter = std::slice::Iter<'l, Day<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
