use std::fmt::{self, Display};

use crate::error::AlgebraError;

use super::{primes::PrimeTable, Field, Ring};

/// A fraction with fixed-width numerator and denominator.
///
/// Values produced by [RationalField] are always reduced: the denominator is
/// positive, zero is stored as `0/1` and no prime from the field's
/// [PrimeTable] divides both parts. Values built with [Rational::new] are
/// taken as-is until they pass through [RationalField::reduce].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Create the fraction `numerator/denominator` without reducing it.
    ///
    /// A zero denominator is accepted here; the field operations reject it
    /// with [AlgebraError::DivisionByZero].
    pub const fn new(numerator: i64, denominator: i64) -> Rational {
        Rational {
            numerator,
            denominator,
        }
    }

    pub const fn from_integer(n: i64) -> Rational {
        Rational::new(n, 1)
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// The field of fixed-width fractions, reducing with trial division by the
/// primes of a borrowed [PrimeTable].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RationalField<'a> {
    primes: &'a PrimeTable,
}

impl<'a> RationalField<'a> {
    pub fn new(primes: &'a PrimeTable) -> RationalField<'a> {
        RationalField { primes }
    }

    pub fn primes(&self) -> &'a PrimeTable {
        self.primes
    }

    /// Bring `r` to lowest terms with a positive denominator.
    ///
    /// Only primes from the table are tried, so common factors larger than
    /// the table bound may survive, unless numerator and denominator are equal
    /// in magnitude.
    pub fn reduce(&self, r: Rational) -> Result<Rational, AlgebraError> {
        let Rational {
            mut numerator,
            mut denominator,
        } = r;

        if denominator == 0 {
            return Err(AlgebraError::DivisionByZero);
        }

        if denominator < 0 {
            numerator = numerator.checked_neg().ok_or(AlgebraError::Overflow)?;
            denominator = denominator.checked_neg().ok_or(AlgebraError::Overflow)?;
        }

        if numerator == 0 {
            return Ok(Rational::new(0, 1));
        }

        if numerator.unsigned_abs() == denominator as u64 {
            return Ok(Rational::new(numerator.signum(), 1));
        }

        for &p in self.primes {
            let p = p as i64;
            if p as u64 > numerator.unsigned_abs() || p > denominator {
                break;
            }

            while numerator % p == 0 && denominator % p == 0 {
                numerator /= p;
                denominator /= p;
            }
        }

        Ok(Rational::new(numerator, denominator))
    }

    /// Create the reduced fraction `numerator/denominator`.
    pub fn to_element(&self, numerator: i64, denominator: i64) -> Result<Rational, AlgebraError> {
        self.reduce(Rational::new(numerator, denominator))
    }
}

#[inline]
fn checked_mul(a: i64, b: i64) -> Result<i64, AlgebraError> {
    a.checked_mul(b).ok_or(AlgebraError::Overflow)
}

impl<'a> Ring for RationalField<'a> {
    type Element = Rational;

    fn add(&self, a: &Rational, b: &Rational) -> Result<Rational, AlgebraError> {
        let numerator = checked_mul(a.numerator, b.denominator)?
            .checked_add(checked_mul(b.numerator, a.denominator)?)
            .ok_or(AlgebraError::Overflow)?;
        let denominator = checked_mul(a.denominator, b.denominator)?;
        self.reduce(Rational::new(numerator, denominator))
    }

    fn sub(&self, a: &Rational, b: &Rational) -> Result<Rational, AlgebraError> {
        let numerator = checked_mul(a.numerator, b.denominator)?
            .checked_sub(checked_mul(b.numerator, a.denominator)?)
            .ok_or(AlgebraError::Overflow)?;
        let denominator = checked_mul(a.denominator, b.denominator)?;
        self.reduce(Rational::new(numerator, denominator))
    }

    fn mul(&self, a: &Rational, b: &Rational) -> Result<Rational, AlgebraError> {
        self.reduce(Rational::new(
            checked_mul(a.numerator, b.numerator)?,
            checked_mul(a.denominator, b.denominator)?,
        ))
    }

    fn from_i64(&self, n: i64) -> Rational {
        Rational::from_integer(n)
    }

    fn is_zero(a: &Rational) -> bool {
        a.is_zero()
    }

    fn format<W: fmt::Write>(&self, element: &Rational, f: &mut W) -> fmt::Result {
        write!(f, "{}", element)
    }
}

impl<'a> Field for RationalField<'a> {
    /// Multiply `a` by the reciprocal of `b`.
    fn div(&self, a: &Rational, b: &Rational) -> Result<Rational, AlgebraError> {
        if b.numerator == 0 || b.denominator == 0 {
            return Err(AlgebraError::DivisionByZero);
        }

        self.reduce(Rational::new(
            checked_mul(a.numerator, b.denominator)?,
            checked_mul(a.denominator, b.numerator)?,
        ))
    }
}
