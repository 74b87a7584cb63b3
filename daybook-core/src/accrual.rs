use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use log::trace;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use typed_builder::TypedBuilder;

use super::account::Account;
use super::directives::Transaction;
use super::posting::Posting;

/// Granularity at which an accrual spreads its amount.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Period {
    Daily,
    /// ISO weeks, ending on Sunday.
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Period {
    pub fn name(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Quarterly => "quarterly",
            Period::Yearly => "yearly",
        }
    }

    /// Last day of the period containing `date`.
    pub fn end_of(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::Daily => Some(date),
            Period::Weekly => {
                let remaining = 6 - i64::from(date.weekday().num_days_from_monday());
                date.checked_add_signed(Duration::days(remaining))
            }
            Period::Monthly => last_day_of_month(date.year(), date.month()),
            Period::Quarterly => last_day_of_month(date.year(), (date.month() - 1) / 3 * 3 + 3),
            Period::Yearly => NaiveDate::from_ymd_opt(date.year(), 12, 31),
        }
    }

    /// End dates of every period from the one containing `t0` through the one containing `t1`.
    pub fn series(&self, t0: NaiveDate, t1: NaiveDate) -> Option<Vec<NaiveDate>> {
        let mut dates = Vec::new();
        let mut t = t0;
        while t <= t1 {
            let end = self.end_of(t)?;
            dates.push(end);
            t = match end.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        Some(dates)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next?.pred_opt()
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum AccrualError {
    #[error("accrual expansion: transaction has {0} postings, must have exactly 1")]
    PostingCount(usize),
    #[error("accrual expansion: start date {t0} is after end date {t1}")]
    InvalidRange { t0: NaiveDate, t1: NaiveDate },
    #[error("accrual expansion: date out of range")]
    DateOutOfRange,
}

/// A transaction template whose single posting is spread over the periods between `t0` and
/// `t1`, using `account` as the intermediate accrual account.
///
/// ```text
/// @accrue monthly 2020-01-01 2020-12-31 Liabilities:Accruals
/// 2020-01-01 "Insurance premium"
/// Assets:Checking Expenses:Insurance 1200 USD
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Accrual<'a> {
    pub period: Period,

    /// First day of the accrual range.
    pub t0: NaiveDate,

    /// Last day of the accrual range.
    pub t1: NaiveDate,

    /// Accrual account bridging the immediate and the spread bookings.
    pub account: Account<'a>,

    /// The template; must hold exactly one posting.
    pub transaction: Transaction<'a>,
}

impl<'a> Accrual<'a> {
    /// Expands the accrual into the transactions it stands for.
    ///
    /// Depending on which side of the template posting is a balance sheet account, the amount
    /// is booked in full on the template date (the "immediate" leg), spread evenly over the
    /// period end dates (the "spread" leg), or both, with the accrual account in between.
    pub fn expand(self) -> Result<Vec<Transaction<'a>>, AccrualError> {
        let Accrual {
            period,
            t0,
            t1,
            account,
            transaction,
        } = self;
        if transaction.postings.len() != 1 {
            return Err(AccrualError::PostingCount(transaction.postings.len()));
        }
        if t0 > t1 {
            return Err(AccrualError::InvalidRange { t0, t1 });
        }
        let Transaction {
            date,
            description,
            tags,
            mut postings,
        } = transaction;
        let posting = postings.remove(0);

        let (immediate, spread) = match (
            posting.credit.ty.is_balance_sheet(),
            posting.debit.ty.is_balance_sheet(),
        ) {
            (true, false) => (
                Some((posting.credit.clone(), account.clone())),
                Some((account, posting.debit.clone())),
            ),
            (false, true) => (
                Some((account.clone(), posting.debit.clone())),
                Some((posting.credit.clone(), account)),
            ),
            (false, false) => (None, Some((posting.credit.clone(), posting.debit.clone()))),
            (true, true) => (Some((posting.credit.clone(), posting.debit.clone())), None),
        };

        let mut result = Vec::new();
        if let Some((credit, debit)) = immediate {
            result.push(Transaction {
                date,
                description: description.clone(),
                tags: tags.clone(),
                postings: vec![Posting {
                    credit,
                    debit,
                    commodity: posting.commodity.clone(),
                    amount: posting.amount,
                    lot: None,
                }],
            });
        }
        if let Some((credit, debit)) = spread {
            let dates = period.series(t0, t1).ok_or(AccrualError::DateOutOfRange)?;
            let count = Decimal::from(dates.len());
            let slice = (posting.amount / count).round_dp_with_strategy(2, RoundingStrategy::ToZero);
            let remainder = posting.amount - slice * count;
            trace!(
                "expanding {} accrual of {} {} into {} slices",
                period,
                posting.amount,
                posting.commodity,
                dates.len()
            );
            for (i, date) in dates.iter().enumerate() {
                let amount = if i == 0 { slice + remainder } else { slice };
                result.push(Transaction {
                    date: *date,
                    description: format!("{} (accrual {}/{})", description, i + 1, dates.len())
                        .into(),
                    tags: tags.clone(),
                    postings: vec![Posting {
                        credit: credit.clone(),
                        debit: debit.clone(),
                        commodity: posting.commodity.clone(),
                        amount,
                        lot: None,
                    }],
                });
            }
        }
        Ok(result)
    }
}
