use std::fmt;

use crate::error::AlgebraError;

use super::{Field, Ring};

/// The field of double precision floating point numbers.
///
/// Operations are plain IEEE arithmetic and never fail. An element is zero
/// only if it compares equal to `0.0`; no tolerance is applied, so values
/// that should cancel but carry rounding noise are treated as pivots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FloatField;

impl FloatField {
    pub fn new() -> FloatField {
        FloatField
    }
}

impl Ring for FloatField {
    type Element = f64;

    #[inline(always)]
    fn add(&self, a: &f64, b: &f64) -> Result<f64, AlgebraError> {
        Ok(a + b)
    }

    #[inline(always)]
    fn sub(&self, a: &f64, b: &f64) -> Result<f64, AlgebraError> {
        Ok(a - b)
    }

    #[inline(always)]
    fn mul(&self, a: &f64, b: &f64) -> Result<f64, AlgebraError> {
        Ok(a * b)
    }

    #[inline(always)]
    fn from_i64(&self, n: i64) -> f64 {
        n as f64
    }

    #[inline(always)]
    fn is_zero(a: &f64) -> bool {
        *a == 0.
    }

    /// Six digits after the decimal point.
    fn format<W: fmt::Write>(&self, element: &f64, f: &mut W) -> fmt::Result {
        if element.is_nan() {
            f.write_str("nan")
        } else {
            write!(f, "{:.6}", element)
        }
    }
}

impl Field for FloatField {
    #[inline(always)]
    fn div(&self, a: &f64, b: &f64) -> Result<f64, AlgebraError> {
        Ok(a / b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fmt(x: f64) -> String {
        let mut s = String::new();
        FloatField.format(&x, &mut s).unwrap();
        s
    }

    #[test]
    fn arithmetic() {
        let f = FloatField::new();
        assert_eq!(f.add(&1.5, &2.).unwrap(), 3.5);
        assert_eq!(f.sub(&1.5, &2.).unwrap(), -0.5);
        assert_eq!(f.mul(&1.5, &2.).unwrap(), 3.);
        assert_eq!(f.div(&1.5, &2.).unwrap(), 0.75);
        assert_eq!(f.inv(&4.).unwrap(), 0.25);
        assert_eq!(f.one(), 1.);
    }

    #[test]
    fn division_by_zero_is_ieee() {
        let f = FloatField::new();
        assert_eq!(f.div(&1., &0.).unwrap(), f64::INFINITY);
        assert!(f.div(&0., &0.).unwrap().is_nan());
    }

    #[test]
    fn exact_zero_test() {
        assert!(FloatField::is_zero(&0.));
        assert!(FloatField::is_zero(&-0.));
        assert!(!FloatField::is_zero(&1e-300));
        // rounding noise is not absorbed
        assert!(!FloatField::is_zero(&(0.1 + 0.2 - 0.3)));
    }

    #[test]
    fn format() {
        assert_eq!(fmt(2.), "2.000000");
        assert_eq!(fmt(-0.5), "-0.500000");
        assert_eq!(fmt(1. / 3.), "0.333333");
        assert_eq!(fmt(f64::INFINITY), "inf");
        assert_eq!(fmt(f64::NAN), "nan");
    }
}
