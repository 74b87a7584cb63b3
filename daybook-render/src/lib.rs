use daybook_core::*;
use std::{io, io::Write};
use thiserror::Error;

pub use text::TextRenderer;

mod text;

#[cfg(test)]
mod tests;

/// Renders directives in their canonical text form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct BasicRenderer {}

impl BasicRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn render<W: Write>(w: &mut W, ledger: &Ledger<'_>) -> Result<(), RenderError> {
    BasicRenderer::default().render(ledger, w)
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
    #[error("could not render unsupported directive")]
    Unsupported,
}

pub trait Renderer<T, W: Write> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

impl<'a, W: Write> Renderer<&'a Ledger<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, ledger: &'a Ledger<'_>, write: &mut W) -> Result<(), Self::Error> {
        for day in ledger {
            self.render(day, write)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Day<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, day: &'a Day<'_>, w: &mut W) -> Result<(), Self::Error> {
        for price in &day.prices {
            self.render(price, w)?;
            writeln!(w)?;
        }
        for open in &day.openings {
            self.render(open, w)?;
            writeln!(w)?;
        }
        for transaction in &day.transactions {
            self.render(transaction, w)?;
            writeln!(w)?;
        }
        for value in &day.values {
            self.render(value, w)?;
            writeln!(w)?;
        }
        for assertion in &day.assertions {
            self.render(assertion, w)?;
            writeln!(w)?;
        }
        for close in &day.closings {
            self.render(close, w)?;
            writeln!(w)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Directive<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, directive: &'a Directive<'_>, write: &mut W) -> Result<(), Self::Error> {
        use Directive::*;
        match directive {
            Open(open) => self.render(open, write),
            Close(close) => self.render(close, write),
            Price(price) => self.render(price, write),
            Transaction(transaction) => self.render(transaction, write),
            Assertion(assertion) => self.render(assertion, write),
            Value(value) => self.render(value, write),
            Accrual(accrual) => self.render(accrual, write),
            Unsupported => Err(RenderError::Unsupported),
        }
    }
}

impl<'a, W: Write> Renderer<&'a Open<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, open: &'a Open<'_>, write: &mut W) -> Result<(), Self::Error> {
        write!(write, "{} open {}", open.date, open.account)?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Close<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, close: &'a Close<'_>, write: &mut W) -> Result<(), Self::Error> {
        write!(write, "{} close {}", close.date, close.account)?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Price<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, price: &'a Price<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(
            w,
            "{} price {} {} {}",
            price.date, price.commodity, price.price, price.target
        )?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Assertion<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, assertion: &'a Assertion<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(
            w,
            "{} balance {} {} {}",
            assertion.date, assertion.account, assertion.amount, assertion.commodity
        )?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Value<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, value: &'a Value<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(
            w,
            "{} value {} {} {}",
            value.date, value.account, value.amount, value.commodity
        )?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Accrual<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, accrual: &'a Accrual<'_>, w: &mut W) -> Result<(), Self::Error> {
        writeln!(
            w,
            "@accrue {} {} {} {}",
            accrual.period, accrual.t0, accrual.t1, accrual.account
        )?;
        self.render(&accrual.transaction, w)
    }
}

impl<'a, W: Write> Renderer<&'a Transaction<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, transaction: &'a Transaction<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "{} \"{}\"", transaction.date, transaction.description)?;
        for tag in &transaction.tags {
            write!(w, " {}", tag)?;
        }
        writeln!(w)?;
        // credit and debit columns line up within one transaction
        let width = transaction
            .postings
            .iter()
            .flat_map(|p| [&p.credit, &p.debit])
            .map(|a| a.to_string().len())
            .max()
            .unwrap_or_default();
        for posting in &transaction.postings {
            write!(
                w,
                "{:<width$} {:<width$} {:>10} {}",
                posting.credit.to_string(),
                posting.debit.to_string(),
                posting.amount.to_string(),
                posting.commodity,
                width = width
            )?;
            if let Some(lot) = &posting.lot {
                write!(w, " ")?;
                self.render(lot, w)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Lot<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, lot: &'a Lot<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "{{ {} {}, {} ", lot.price, lot.commodity, lot.date)?;
        if let Some(label) = &lot.label {
            write!(w, "{} ", label)?;
        }
        write!(w, "}}")?;
        Ok(())
    }
}
