use std::collections::BTreeMap;
use std::error::Error;

use chrono::NaiveDate;
use log::debug;
use thiserror::Error;

use super::accrual::{Accrual, AccrualError};
use super::directives::{Assertion, Close, Directive, Open, Price, Transaction, Value};
use super::filter::Filter;
use super::ledger::{Day, Ledger};

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Stream(Box<dyn Error + Send + Sync>),
    #[error("unknown directive")]
    UnknownDirective,
    #[error(transparent)]
    Accrual(#[from] AccrualError),
}

/// Reads directives in order and builds a ledger from them.
///
/// The first error in the stream aborts the build; the rest of the stream is left unconsumed.
pub fn build<'a, I, E>(filter: &Filter, directives: I) -> Result<Ledger<'a>, BuildError>
where
    I: IntoIterator<Item = Result<Directive<'a>, E>>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let mut builder = Builder::new(filter.clone());
    for directive in directives {
        let result = directive
            .map_err(|e| BuildError::Stream(e.into()))
            .and_then(|d| builder.add(d));
        if let Err(e) = result {
            debug!("aborting ledger build: {}", e);
            return Err(e);
        }
    }
    Ok(builder.build())
}

macro_rules! day_insert {
    ($self:ident, $date:expr, $field:ident, $val:expr) => {{
        let date = $date;
        $self
            .days
            .entry(date)
            .or_insert_with(|| Day::new(date))
            .$field
            .push($val)
    }};
}

/// Buckets directives by date, dropping whatever the filter rejects.
#[derive(Debug)]
pub struct Builder<'a> {
    filter: Filter,
    days: BTreeMap<NaiveDate, Day<'a>>,
}

impl<'a> Builder<'a> {
    pub fn new(filter: Filter) -> Builder<'a> {
        Builder {
            filter,
            days: BTreeMap::new(),
        }
    }

    /// Dispatches a directive to the matching `add_*` method.
    pub fn add(&mut self, directive: Directive<'a>) -> Result<(), BuildError> {
        match directive {
            Directive::Open(open) => self.add_opening(open),
            Directive::Close(close) => self.add_closing(close),
            Directive::Price(price) => self.add_price(price),
            Directive::Transaction(transaction) => self.add_transaction(transaction),
            Directive::Assertion(assertion) => self.add_assertion(assertion),
            Directive::Value(value) => self.add_value(value),
            Directive::Accrual(accrual) => self.add_accrual(accrual)?,
            Directive::Unsupported => return Err(BuildError::UnknownDirective),
        }
        Ok(())
    }

    /// Adds the transaction restricted to the postings that pass the filter. A posting passes
    /// if either of its accounts and its commodity match. Transactions left without postings
    /// are dropped.
    pub fn add_transaction(&mut self, mut transaction: Transaction<'a>) {
        let filter = &self.filter;
        transaction.postings.retain(|p| {
            (filter.match_account(&p.credit) || filter.match_account(&p.debit))
                && filter.match_commodity(&p.commodity)
        });
        if !transaction.postings.is_empty() {
            day_insert!(self, transaction.date, transactions, transaction);
        }
    }

    pub fn add_accrual(&mut self, accrual: Accrual<'a>) -> Result<(), AccrualError> {
        for transaction in accrual.expand()? {
            self.add_transaction(transaction);
        }
        Ok(())
    }

    pub fn add_opening(&mut self, open: Open<'a>) {
        day_insert!(self, open.date, openings, open);
    }

    pub fn add_closing(&mut self, close: Close<'a>) {
        if !self.filter.match_account(&close.account) {
            return;
        }
        day_insert!(self, close.date, closings, close);
    }

    /// Prices are not owned by any account and are never filtered.
    pub fn add_price(&mut self, price: Price<'a>) {
        day_insert!(self, price.date, prices, price);
    }

    pub fn add_assertion(&mut self, assertion: Assertion<'a>) {
        if !self.filter.match_account(&assertion.account)
            || !self.filter.match_commodity(&assertion.commodity)
        {
            return;
        }
        day_insert!(self, assertion.date, assertions, assertion);
    }

    pub fn add_value(&mut self, value: Value<'a>) {
        if !self.filter.match_account(&value.account)
            || !self.filter.match_commodity(&value.commodity)
        {
            return;
        }
        day_insert!(self, value.date, values, value);
    }

    /// Returns the days in ascending date order.
    pub fn build(self) -> Ledger<'a> {
        let ledger = Ledger::from_sorted(self.days.into_values().collect());
        debug!(
            "built ledger with {} days and {} transactions",
            ledger.len(),
            ledger.iter().map(|d| d.transactions.len()).sum::<usize>()
        );
        ledger
    }
}
