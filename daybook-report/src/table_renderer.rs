use daybook_core::AccountType;
use log::debug;
use typed_builder::TypedBuilder;

use super::report::Report;
use super::segment::{Positions, Segment};
use super::table::{Alignment, DataRow, Table};
use super::vector::Vector;

const INDENT: usize = 2;

/// Display groups of account categories. Each group gets its own subtotal, and the income
/// statement group is shown with flipped signs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Group {
    BalanceSheet,
    IncomeStatement,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::BalanceSheet, Group::IncomeStatement];

    pub fn of(ty: AccountType) -> Group {
        if ty.is_balance_sheet() {
            Group::BalanceSheet
        } else {
            Group::IncomeStatement
        }
    }

    fn negated(self) -> bool {
        self == Group::IncomeStatement
    }
}

/// Lays out a report as a table.
///
/// In the default mode each segment shows the sum over all of its commodities; with
/// `commodities` set, each segment gets a label row followed by one row per commodity.
#[derive(Clone, Copy, Debug, Default, TypedBuilder)]
pub struct TableRenderer {
    #[builder(default)]
    pub commodities: bool,
}

/// Per-segment render state, passed down the recursion.
#[derive(Clone, Copy, Debug, Default)]
struct Context {
    negate: bool,
    indent: usize,
}

impl Context {
    fn nested(self) -> Context {
        Context {
            indent: self.indent + INDENT,
            ..self
        }
    }
}

impl TableRenderer {
    pub fn render<'a>(&self, report: &Report<'a>) -> Table<'a> {
        debug!(
            "rendering report with {} dates and {} categories (commodities: {})",
            report.dates.len(),
            report.segments.len(),
            self.commodities
        );
        let render: fn(&Report<'a>, &mut Table<'a>, Context, &Segment<'a>) = if self.commodities {
            render_segment_with_commodities
        } else {
            render_segment
        };

        let mut table = Table::new(1, report.dates.len());
        table.add_separator_row();
        let header = table.add_row().add_text("Account", Alignment::Center);
        for date in &report.dates {
            header.add_text(date.format("%Y-%m-%d").to_string(), Alignment::Center);
        }
        table.add_separator_row();

        for group in Group::ALL {
            let segments: Vec<&Segment<'a>> = AccountType::ALL
                .iter()
                .filter(|ty| Group::of(**ty) == group)
                .filter_map(|ty| report.segments.get(ty))
                .collect();
            if segments.is_empty() {
                continue;
            }
            let ctx = Context {
                negate: group.negated(),
                indent: 0,
            };
            for &segment in &segments {
                render(report, &mut table, ctx, segment);
                table.add_empty_row();
            }
            let mut totals = Positions::new();
            for segment in &segments {
                segment.sum(&mut totals);
            }
            render(
                report,
                &mut table,
                ctx,
                &Segment::with_positions("Total", totals),
            );
            table.add_separator_row();
        }

        render(
            report,
            &mut table,
            Context::default(),
            &Segment::with_positions("Delta", report.positions.clone()),
        );
        table.add_separator_row();
        table
    }
}

fn add_amounts(row: &mut DataRow<'_>, amounts: &Vector, negate: bool) {
    for amount in &amounts.values {
        if amount.is_zero() {
            row.add_empty();
        } else if negate {
            row.add_number(-*amount);
        } else {
            row.add_number(*amount);
        }
    }
}

fn render_segment<'a>(
    report: &Report<'a>,
    table: &mut Table<'a>,
    ctx: Context,
    segment: &Segment<'a>,
) {
    let mut total = Vector::new(report.dates.len());
    for amounts in segment.positions.values() {
        total.add(amounts);
    }
    let row = table
        .add_row()
        .add_indented(segment.key.clone(), ctx.indent);
    add_amounts(row, &total, ctx.negate);

    for subsegment in &segment.subsegments {
        render_segment(report, table, ctx.nested(), subsegment);
    }
}

fn render_segment_with_commodities<'a>(
    report: &Report<'a>,
    table: &mut Table<'a>,
    ctx: Context,
    segment: &Segment<'a>,
) {
    let header = table
        .add_row()
        .add_indented(segment.key.clone(), ctx.indent);
    for _ in &report.dates {
        header.add_empty();
    }

    // commodity rows and subsegments share one level below the label
    let nested = ctx.nested();
    for commodity in &report.commodities {
        if let Some(amounts) = segment.positions.get(commodity) {
            let row = table
                .add_row()
                .add_indented(commodity.clone(), nested.indent);
            add_amounts(row, amounts, ctx.negate);
        }
    }

    for subsegment in &segment.subsegments {
        render_segment_with_commodities(report, table, nested, subsegment);
    }
}
