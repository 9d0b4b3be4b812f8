//! Numeric fields the elimination engine runs over.
//!
//! As in the rest of the crate, the elements do not implement the arithmetic
//! themselves: the ring object does. This lets a field carry state that its
//! elements need, such as the [PrimeTable](primes::PrimeTable) that
//! [RationalField](rational::RationalField) borrows to reduce fractions.
//!
//! Two fields are provided:
//! - [FloatField](float::FloatField), with elements of type `f64`.
//! - [RationalField](rational::RationalField), with elements of type [Rational](rational::Rational).
pub mod float;
pub mod linear_system;
pub mod primes;
pub mod rational;

use std::fmt::{self, Debug};

use crate::error::AlgebraError;

/// A set with addition and multiplication, and the element constructors
/// needed by Gaussian elimination.
pub trait Ring: Clone + Copy + Debug {
    type Element: Clone + PartialEq + Debug;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, AlgebraError>;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, AlgebraError>;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, AlgebraError>;
    /// Embed the integer `n` into the ring.
    fn from_i64(&self, n: i64) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;

    fn zero(&self) -> Self::Element {
        self.from_i64(0)
    }

    fn one(&self) -> Self::Element {
        self.from_i64(1)
    }

    /// Write `element` in the textual form used for results.
    fn format<W: fmt::Write>(&self, element: &Self::Element, f: &mut W) -> fmt::Result;
}

/// A ring that supports division by every nonzero element.
pub trait Field: Ring {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, AlgebraError>;

    fn inv(&self, a: &Self::Element) -> Result<Self::Element, AlgebraError> {
        self.div(&self.one(), a)
    }
}
