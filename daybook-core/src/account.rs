use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;

use thiserror::Error;
use typed_builder::TypedBuilder;

use super::account_types::AccountType;

/// Represents an account.
///
/// An account name is a colon-separated list of components whose first component must be one
/// of the five account types.
///
/// Some example accounts:
///
/// ```text
/// Assets:US:BofA:Checking
/// Liabilities:CA:RBC:CreditCard
/// Equity:Retained-Earnings
/// Income:US:Acme:Salary
/// Expenses:Food:Groceries
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, TypedBuilder)]
pub struct Account<'a> {
    /// Type of the account.
    pub ty: AccountType,

    /// Parts of the account following the account type.
    #[builder(default)]
    pub parts: Vec<Cow<'a, str>>,
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum AccountError {
    #[error("empty account name")]
    Empty,
    #[error("invalid account type `{0}'")]
    InvalidType(String),
}

impl Account<'_> {
    /// Converts any borrowed parts into owned ones.
    pub fn into_owned(self) -> Account<'static> {
        Account {
            ty: self.ty,
            parts: self
                .parts
                .into_iter()
                .map(|p| Cow::Owned(p.into_owned()))
                .collect(),
        }
    }
}

impl fmt::Display for Account<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.default_name())?;
        for part in &self.parts {
            write!(f, ":{}", part)?;
        }
        Ok(())
    }
}

impl<'a> TryFrom<&'a str> for Account<'a> {
    type Error = AccountError;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(AccountError::Empty);
        }
        let mut components = s.split(':');
        let head = components.next().unwrap_or_default();
        let ty = AccountType::from_name(head)
            .ok_or_else(|| AccountError::InvalidType(head.to_string()))?;
        Ok(Account {
            ty,
            parts: components.map(Cow::Borrowed).collect(),
        })
    }
}
