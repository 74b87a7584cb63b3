use std::borrow::Cow;
use std::collections::HashMap;

use daybook_core::Commodity;

use super::vector::Vector;

/// Amounts per commodity.
pub type Positions<'a> = HashMap<Commodity<'a>, Vector>;

/// One level of the account hierarchy in a report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment<'a> {
    /// Display label: an account component, or a synthetic label like "Total".
    pub key: Cow<'a, str>,
    pub positions: Positions<'a>,
    /// Children, ordered by key.
    pub subsegments: Vec<Segment<'a>>,
}

impl<'a> Segment<'a> {
    pub fn new(key: impl Into<Cow<'a, str>>) -> Segment<'a> {
        Segment {
            key: key.into(),
            positions: HashMap::new(),
            subsegments: Vec::new(),
        }
    }

    pub fn with_positions(key: impl Into<Cow<'a, str>>, positions: Positions<'a>) -> Segment<'a> {
        Segment {
            key: key.into(),
            positions,
            subsegments: Vec::new(),
        }
    }

    /// Adds the positions of this segment and all of its descendants to `target`.
    pub fn sum(&self, target: &mut Positions<'a>) {
        for (commodity, amounts) in &self.positions {
            target
                .entry(commodity.clone())
                .or_insert_with(|| Vector::new(amounts.len()))
                .add(amounts);
        }
        for subsegment in &self.subsegments {
            subsegment.sum(target);
        }
    }

    /// Adds `amounts` of `commodity` to the descendant at `path`, creating missing levels.
    pub fn insert(&mut self, path: &[Cow<'a, str>], commodity: Commodity<'a>, amounts: &Vector) {
        match path.split_first() {
            None => self
                .positions
                .entry(commodity)
                .or_insert_with(|| Vector::new(amounts.len()))
                .add(amounts),
            Some((head, rest)) => {
                let i = match self
                    .subsegments
                    .binary_search_by(|s| s.key.as_ref().cmp(head.as_ref()))
                {
                    Ok(i) => i,
                    Err(i) => {
                        self.subsegments.insert(i, Segment::new(head.clone()));
                        i
                    }
                };
                self.subsegments[i].insert(rest, commodity, amounts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd(a: i64, b: i64) -> Vector {
        Vector::from(vec![a.into(), b.into()])
    }

    #[test]
    fn test_insert_builds_sorted_tree() {
        let mut root = Segment::new("Assets");
        root.insert(&["Bank".into(), "Savings".into()], "USD".into(), &usd(1, 2));
        root.insert(&["Bank".into(), "Checking".into()], "USD".into(), &usd(3, 4));
        root.insert(&["Bank".into(), "Checking".into()], "USD".into(), &usd(1, 1));
        root.insert(&["Cash".into()], "CHF".into(), &usd(5, 0));

        let keys: Vec<_> = root.subsegments.iter().map(|s| s.key.as_ref()).collect();
        assert_eq!(keys, vec!["Bank", "Cash"]);
        let bank: Vec<_> = root.subsegments[0]
            .subsegments
            .iter()
            .map(|s| s.key.as_ref())
            .collect();
        assert_eq!(bank, vec!["Checking", "Savings"]);
        assert_eq!(root.subsegments[0].subsegments[0].positions["USD"], usd(4, 5));
        assert!(root.positions.is_empty());
    }

    #[test]
    fn test_sum_is_recursive_and_accumulates() {
        let mut assets = Segment::new("Assets");
        assets.insert(&["A".into(), "B".into(), "C".into()], "USD".into(), &usd(1, 2));
        assets.insert(&[], "USD".into(), &usd(10, 20));
        let mut liabilities = Segment::new("Liabilities");
        liabilities.insert(&["Card".into()], "USD".into(), &usd(-5, -5));
        liabilities.insert(&["Card".into()], "EUR".into(), &usd(7, 0));

        let mut totals = Positions::new();
        assets.sum(&mut totals);
        assert_eq!(totals["USD"], usd(11, 22));
        liabilities.sum(&mut totals);
        assert_eq!(totals["USD"], usd(6, 17));
        assert_eq!(totals["EUR"].values, vec![dec!(7), dec!(0)]);
    }
}
