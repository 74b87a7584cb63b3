//! Multi-commodity reports over an account hierarchy, and their layout as a table.

pub use report::Report;
pub use segment::{Positions, Segment};
pub use table::{Alignment, Cell, DataRow, Row, Table};
pub use table_renderer::{Group, TableRenderer};
pub use vector::Vector;

pub mod report;
pub mod segment;
pub mod table;
pub mod table_renderer;
pub mod vector;
