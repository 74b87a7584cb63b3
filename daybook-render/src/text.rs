use std::io::Write;

use daybook_report::{Alignment, Cell, Row, Table};
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use super::{RenderError, Renderer};

/// Lays out a table as aligned, boxed text.
///
/// ```text
/// +---------+------------+
/// | Account | 2024-01-01 |
/// +---------+------------+
/// | Assets  |      1,000 |
/// +---------+------------+
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug, TypedBuilder)]
pub struct TextRenderer {
    /// Group integer digits by thousands.
    #[builder(default)]
    pub thousands: bool,

    /// Round numbers to this many decimal places.
    #[builder(default, setter(strip_option))]
    pub round: Option<u32>,
}

impl TextRenderer {
    fn format_number(&self, n: Decimal) -> String {
        let s = match self.round {
            Some(dp) => format!("{:.*}", dp as usize, n.round_dp(dp)),
            None => n.to_string(),
        };
        if self.thousands {
            group_thousands(&s)
        } else {
            s
        }
    }
}

fn group_thousands(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int, frac) = unsigned.split_at(unsigned.find('.').unwrap_or(unsigned.len()));
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    out.push_str(sign);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(frac);
    out
}

/// A cell reduced to its text and how to place it.
struct Laid {
    text: String,
    align: Alignment,
}

impl Laid {
    fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn pad(&self, width: usize) -> String {
        let fill = width.saturating_sub(self.width());
        let (left, right) = match self.align {
            Alignment::Left => (0, fill),
            Alignment::Right => (fill, 0),
            Alignment::Center => (fill / 2, fill - fill / 2),
        };
        format!("{}{}{}", " ".repeat(left), self.text, " ".repeat(right))
    }
}

impl<'a, W: Write> Renderer<&'a Table<'_>, W> for TextRenderer {
    type Error = RenderError;
    fn render(&self, table: &'a Table<'_>, w: &mut W) -> Result<(), Self::Error> {
        let columns = table.width();
        let rows: Vec<Option<Vec<Laid>>> = table
            .rows()
            .iter()
            .map(|row| match row {
                Row::Data(data) => Some(data.cells.iter().map(|c| self.lay(c)).collect()),
                Row::Separator | Row::Empty => None,
            })
            .collect();

        let mut widths = vec![0; columns];
        for cells in rows.iter().flatten() {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.width());
            }
        }

        for (row, cells) in table.rows().iter().zip(&rows) {
            match (row, cells) {
                (Row::Separator, _) => {
                    for width in &widths {
                        write!(w, "+{}", "-".repeat(width + 2))?;
                    }
                    writeln!(w, "+")?;
                }
                (_, Some(cells)) => {
                    for (i, width) in widths.iter().enumerate() {
                        let text = match cells.get(i) {
                            Some(cell) => cell.pad(*width),
                            None => " ".repeat(*width),
                        };
                        write!(w, "| {} ", text)?;
                    }
                    writeln!(w, "|")?;
                }
                (_, None) => {
                    for width in &widths {
                        write!(w, "|{}", " ".repeat(width + 2))?;
                    }
                    writeln!(w, "|")?;
                }
            }
        }
        Ok(())
    }
}

impl TextRenderer {
    fn lay(&self, cell: &Cell<'_>) -> Laid {
        match cell {
            Cell::Empty => Laid {
                text: String::new(),
                align: Alignment::Left,
            },
            Cell::Text { content, align } => Laid {
                text: content.to_string(),
                align: *align,
            },
            Cell::Indented { content, indent } => Laid {
                text: format!("{}{}", " ".repeat(*indent), content),
                align: Alignment::Left,
            },
            Cell::Number(n) => Laid {
                text: self.format_number(*n),
                align: Alignment::Right,
            },
        }
    }
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
    assert_eq!(group_thousands("-100"), "-100");
    assert_eq!(group_thousands("-1000"), "-1,000");
    assert_eq!(group_thousands("999999"), "999,999");
}
