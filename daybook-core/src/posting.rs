use std::borrow::Cow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use super::account::Account;
use super::Commodity;

/// Represents a transaction posting. A posting moves `amount` units of `commodity` out of the
/// `credit` account and into the `debit` account.
///
/// ```text
/// 2021-01-05 "Groceries"
/// Assets:Checking Expenses:Food  54.20 USD
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Posting<'a> {
    /// Account the amount is taken from.
    pub credit: Account<'a>,

    /// Account the amount is booked into.
    pub debit: Account<'a>,

    /// Commodity being moved.
    #[builder(setter(into))]
    pub commodity: Commodity<'a>,

    /// Signed number of units being moved.
    pub amount: Decimal,

    /// Cost basis of the units, if tracked.
    #[builder(default, setter(strip_option))]
    pub lot: Option<Lot<'a>>,
}

/// Cost-basis annotation of a posting.
///
/// ```text
/// Assets:Cash Assets:Broker 10 AAPL { 120.50 USD, 2020-06-01 apple }
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Lot<'a> {
    /// Per-unit acquisition price.
    pub price: Decimal,

    /// Commodity the price is quoted in.
    #[builder(setter(into))]
    pub commodity: Commodity<'a>,

    /// Acquisition date.
    pub date: NaiveDate,

    #[builder(default, setter(strip_option, into))]
    pub label: Option<Cow<'a, str>>,
}
