use std::borrow::Cow;

pub use account::{Account, AccountError};
pub use account_types::AccountType;
pub use accrual::{Accrual, AccrualError, Period};
pub use builder::{build, BuildError, Builder};
pub use directives::*;
pub use filter::{Filter, FilterError};
pub use ledger::{Day, Ledger};
pub use posting::{Lot, Posting};

pub mod account;
pub mod account_types;
pub mod accrual;
pub mod builder;
pub mod directives;
pub mod filter;
pub mod ledger;
pub mod posting;

/// A commodity, e.g. `USD` or `AAPL`. Its name is its canonical string form.
pub type Commodity<'a> = Cow<'a, str>;
