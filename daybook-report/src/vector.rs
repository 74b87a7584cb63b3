use std::ops::{AddAssign, Neg};

use rust_decimal::Decimal;

/// Amounts of one commodity, one slot per report date.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Vector {
    pub values: Vec<Decimal>,
}

impl Vector {
    /// A vector of `len` zeros.
    pub fn new(len: usize) -> Vector {
        Vector {
            values: vec![Decimal::ZERO; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds `other` elementwise.
    pub fn add(&mut self, other: &Vector) {
        debug_assert_eq!(self.len(), other.len());
        for (v, o) in self.values.iter_mut().zip(&other.values) {
            *v += *o;
        }
    }

    pub fn is_zero_at(&self, i: usize) -> bool {
        self.values[i].is_zero()
    }

    /// Whether every slot is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(Decimal::is_zero)
    }
}

impl From<Vec<Decimal>> for Vector {
    fn from(values: Vec<Decimal>) -> Self {
        Vector { values }
    }
}

impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        self.add(rhs);
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            values: self.values.into_iter().map(|v| -v).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_and_neg() {
        let mut v = Vector::new(3);
        v += &Vector::from(vec![dec!(1), dec!(0), dec!(-2.5)]);
        v.add(&Vector::from(vec![dec!(1), dec!(0), dec!(0.5)]));
        assert_eq!(v.values, vec![dec!(2), dec!(0), dec!(-2)]);
        assert!(v.is_zero_at(1));
        assert!(!v.is_zero_at(0));
        assert_eq!((-v).values, vec![dec!(-2), dec!(0), dec!(2)]);
    }

    #[test]
    fn test_zero() {
        assert!(Vector::new(2).is_zero());
        assert!(!Vector::from(vec![dec!(0), dec!(0.01)]).is_zero());
    }
}
