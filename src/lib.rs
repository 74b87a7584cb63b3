//! Date-ordered ledgers built from accounting directives, and multi-commodity reports over them.
//!
//! ```text
//! 2024-01-01 open Assets:Cash
//! 2024-01-05 "Salary"
//! Income:Salary Assets:Cash     100 USD
//! ```

pub use daybook_core as ledger;
pub use daybook_render as render;
pub use daybook_report as report;
