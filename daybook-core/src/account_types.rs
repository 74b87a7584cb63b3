use std::fmt;

/// Allowed account types, in their canonical order.
///
/// The first component of every account name is one of these.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum AccountType {
    Assets,
    Liabilities,
    Equity,
    Income,
    Expenses,
}

impl AccountType {
    /// All account types in canonical order.
    pub const ALL: [AccountType; 5] = [
        AccountType::Assets,
        AccountType::Liabilities,
        AccountType::Equity,
        AccountType::Income,
        AccountType::Expenses,
    ];

    /// The name this account type carries as the first account component.
    pub fn default_name(&self) -> &'static str {
        match self {
            AccountType::Assets => "Assets",
            AccountType::Liabilities => "Liabilities",
            AccountType::Equity => "Equity",
            AccountType::Income => "Income",
            AccountType::Expenses => "Expenses",
        }
    }

    /// Whether accounts of this type appear on the balance sheet (assets and liabilities), as
    /// opposed to the income statement.
    pub fn is_balance_sheet(&self) -> bool {
        matches!(self, AccountType::Assets | AccountType::Liabilities)
    }

    pub fn from_name(name: &str) -> Option<AccountType> {
        AccountType::ALL
            .iter()
            .copied()
            .find(|ty| ty.default_name() == name)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

#[test]
fn test_canonical_order() {
    let mut types = vec![
        AccountType::Expenses,
        AccountType::Assets,
        AccountType::Income,
        AccountType::Liabilities,
        AccountType::Equity,
    ];
    types.sort();
    assert_eq!(types, AccountType::ALL.to_vec());
}

#[test]
fn test_from_name() {
    assert_eq!(AccountType::from_name("Income"), Some(AccountType::Income));
    assert_eq!(AccountType::from_name("income"), None);
}
