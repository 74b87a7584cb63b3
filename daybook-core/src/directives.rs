use std::borrow::Cow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use super::accrual::Accrual;
use super::account::Account;
use super::posting::Posting;
use super::Commodity;

/// Tag associated with a transaction directive, e.g. `#vacation`.
pub type Tag<'a> = Cow<'a, str>;

/// One dated instruction of the ledger language.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive<'a> {
    Open(Open<'a>),
    Close(Close<'a>),
    Price(Price<'a>),
    Transaction(Transaction<'a>),
    Assertion(Assertion<'a>),
    Value(Value<'a>),
    Accrual(Accrual<'a>),
    /// A construct the producer of the directive stream could not classify.
    Unsupported,
}

impl Directive<'_> {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Directive::Open(open) => Some(open.date),
            Directive::Close(close) => Some(close.date),
            Directive::Price(price) => Some(price.date),
            Directive::Transaction(transaction) => Some(transaction.date),
            Directive::Assertion(assertion) => Some(assertion.date),
            Directive::Value(value) => Some(value.date),
            Directive::Accrual(accrual) => Some(accrual.transaction.date),
            Directive::Unsupported => None,
        }
    }
}

macro_rules! impl_from_directive {
    ($($variant:ident),*) => {
        $(
            impl<'a> From<$variant<'a>> for Directive<'a> {
                fn from(d: $variant<'a>) -> Self {
                    Directive::$variant(d)
                }
            }
        )*
    };
}

impl_from_directive!(Open, Close, Price, Transaction, Assertion, Value, Accrual);

/// Opens an account.
///
/// ```text
/// 2014-05-01 open Assets:US:BofA:Checking
/// ```
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Open<'a> {
    /// Date the account was opened.
    pub date: NaiveDate,

    /// Account being opened.
    pub account: Account<'a>,
}

/// Closes an account.
///
/// ```text
/// 2016-11-28 close Liabilities:CreditCard:CapitalOne
/// ```
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Close<'a> {
    /// Date the account was closed.
    pub date: NaiveDate,

    /// Account being closed.
    pub account: Account<'a>,
}

/// A price quote for a commodity, expressed in a target commodity.
///
/// ```text
/// 2014-07-09 price HOOL 579.18 USD
/// ```
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Price<'a> {
    /// Date of the quote.
    pub date: NaiveDate,

    /// The commodity being priced.
    #[builder(setter(into))]
    pub commodity: Commodity<'a>,

    /// Value of one unit of `commodity` in units of `target`.
    pub price: Decimal,

    /// The commodity the price is quoted in.
    #[builder(setter(into))]
    pub target: Commodity<'a>,
}

/// A transaction, consisting of any number of postings.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Transaction<'a> {
    /// Date of the transaction.
    pub date: NaiveDate,

    /// Free-text description.
    #[builder(setter(into))]
    pub description: Cow<'a, str>,

    /// Tags associated with the transaction.
    #[builder(default)]
    pub tags: Vec<Tag<'a>>,

    /// Postings belonging to this transaction.
    #[builder(default)]
    pub postings: Vec<Posting<'a>>,
}

/// Asserts the balance of one commodity in an account.
///
/// ```text
/// 2014-08-09 balance Assets:Cash 562.00 USD
/// ```
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Assertion<'a> {
    pub date: NaiveDate,

    pub account: Account<'a>,

    /// Expected number of units.
    pub amount: Decimal,

    #[builder(setter(into))]
    pub commodity: Commodity<'a>,
}

/// Sets the value of one commodity in an account, booking the difference.
///
/// ```text
/// 2020-12-31 value Assets:Pension 41250.00 CHF
/// ```
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Value<'a> {
    pub date: NaiveDate,

    pub account: Account<'a>,

    /// Target number of units.
    pub amount: Decimal,

    #[builder(setter(into))]
    pub commodity: Commodity<'a>,
}
