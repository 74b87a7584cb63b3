use std::borrow::Cow;

use rust_decimal::Decimal;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Cell<'a> {
    Empty,
    Text {
        content: Cow<'a, str>,
        align: Alignment,
    },
    /// Left-aligned text preceded by `indent` spaces.
    Indented {
        content: Cow<'a, str>,
        indent: usize,
    },
    Number(Decimal),
}

/// The cells of a header or data row.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DataRow<'a> {
    pub cells: Vec<Cell<'a>>,
}

impl<'a> DataRow<'a> {
    pub fn add_text(&mut self, content: impl Into<Cow<'a, str>>, align: Alignment) -> &mut Self {
        self.cells.push(Cell::Text {
            content: content.into(),
            align,
        });
        self
    }

    pub fn add_indented(&mut self, content: impl Into<Cow<'a, str>>, indent: usize) -> &mut Self {
        self.cells.push(Cell::Indented {
            content: content.into(),
            indent,
        });
        self
    }

    pub fn add_number(&mut self, number: Decimal) -> &mut Self {
        self.cells.push(Cell::Number(number));
        self
    }

    pub fn add_empty(&mut self) -> &mut Self {
        self.cells.push(Cell::Empty);
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Row<'a> {
    Separator,
    Empty,
    Data(DataRow<'a>),
}

/// A grid of label columns followed by value columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Table<'a> {
    label_columns: usize,
    value_columns: usize,
    rows: Vec<Row<'a>>,
}

impl<'a> Table<'a> {
    pub fn new(label_columns: usize, value_columns: usize) -> Table<'a> {
        Table {
            label_columns,
            value_columns,
            rows: Vec::new(),
        }
    }

    pub fn label_columns(&self) -> usize {
        self.label_columns
    }

    pub fn value_columns(&self) -> usize {
        self.value_columns
    }

    /// Total number of columns.
    pub fn width(&self) -> usize {
        self.label_columns + self.value_columns
    }

    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    pub fn add_separator_row(&mut self) {
        self.rows.push(Row::Separator);
    }

    pub fn add_empty_row(&mut self) {
        self.rows.push(Row::Empty);
    }

    /// Appends a data row and returns it for filling in its cells.
    pub fn add_row(&mut self) -> &mut DataRow<'a> {
        self.rows.push(Row::Data(DataRow::default()));
        match self.rows.last_mut() {
            Some(Row::Data(row)) => row,
            _ => unreachable!("a data row was just pushed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_construction() {
        let mut table = Table::new(1, 2);
        table.add_separator_row();
        table
            .add_row()
            .add_indented("Cash", 2)
            .add_number(dec!(1.5))
            .add_empty();
        table.add_empty_row();

        assert_eq!(table.width(), 3);
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.rows()[0], Row::Separator);
        assert_eq!(
            table.rows()[1],
            Row::Data(DataRow {
                cells: vec![
                    Cell::Indented {
                        content: "Cash".into(),
                        indent: 2
                    },
                    Cell::Number(dec!(1.5)),
                    Cell::Empty,
                ]
            })
        );
        assert_eq!(table.rows()[2], Row::Empty);
    }
}
