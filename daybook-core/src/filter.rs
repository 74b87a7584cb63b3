use regex::Regex;
use thiserror::Error;
use typed_builder::TypedBuilder;

use super::account::Account;

/// Restricts a ledger to the accounts and commodities whose names match the given patterns.
/// An unset pattern matches everything.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct Filter {
    #[builder(default, setter(strip_option))]
    pub accounts: Option<Regex>,

    #[builder(default, setter(strip_option))]
    pub commodities: Option<Regex>,
}

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid account pattern")]
    Accounts(#[source] regex::Error),
    #[error("invalid commodity pattern")]
    Commodities(#[source] regex::Error),
}

impl Filter {
    /// Compiles a filter from optional account and commodity patterns.
    pub fn new(accounts: Option<&str>, commodities: Option<&str>) -> Result<Filter, FilterError> {
        Ok(Filter {
            accounts: accounts
                .map(Regex::new)
                .transpose()
                .map_err(FilterError::Accounts)?,
            commodities: commodities
                .map(Regex::new)
                .transpose()
                .map_err(FilterError::Commodities)?,
        })
    }

    pub fn match_account(&self, account: &Account<'_>) -> bool {
        match &self.accounts {
            Some(re) => re.is_match(&account.to_string()),
            None => true,
        }
    }

    pub fn match_commodity(&self, commodity: &str) -> bool {
        match &self.commodities {
            Some(re) => re.is_match(commodity),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_unset_matches_everything() -> anyhow::Result<()> {
        let filter = Filter::default();
        assert!(filter.match_account(&Account::try_from("Expenses:Food")?));
        assert!(filter.match_commodity("CHF"));
        Ok(())
    }

    #[test]
    fn test_patterns() -> anyhow::Result<()> {
        let filter = Filter::new(Some("^Assets"), Some("USD|EUR"))?;
        assert!(filter.match_account(&Account::try_from("Assets:Cash")?));
        assert!(!filter.match_account(&Account::try_from("Liabilities:Assets")?));
        assert!(filter.match_commodity("EUR"));
        assert!(!filter.match_commodity("CHF"));
        Ok(())
    }

    #[test]
    fn test_search_semantics() -> anyhow::Result<()> {
        let filter = Filter::builder().accounts(Regex::new("Cash")?).build();
        assert!(filter.match_account(&Account::try_from("Assets:Wallet:Cash")?));
        assert!(filter.commodities.is_none());
        Ok(())
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            Filter::new(None, Some("(")),
            Err(FilterError::Commodities(_))
        ));
        assert!(matches!(
            Filter::new(Some("["), None),
            Err(FilterError::Accounts(_))
        ));
    }
}
