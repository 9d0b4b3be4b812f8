//! Reading matrix dimensions and entries from text.
//!
//! Input is a stream of whitespace separated tokens. Floating point entries
//! are decimal literals such as `1.5` or `-2e3`; fractions are written `p` or
//! `p/q`, where a missing denominator means `1`.
use std::{collections::VecDeque, io::BufRead};

use thiserror::Error;

use crate::{
    error::AlgebraError,
    rings::{
        float::FloatField,
        linear_system::Matrix,
        rational::{Rational, RationalField},
        Ring,
    },
};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEnd(&'static str),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Zero denominator in {0}")]
    ZeroDenominator(String),
    #[error("Invalid matrix dimension: {0}")]
    InvalidDimension(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

/// A whitespace tokenizer that reads its input one line at a time, so that
/// prompts written between reads reach an interactive user in time.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Get the next token, or `None` at the end of the input.
    pub fn next_token(&mut self) -> Result<Option<String>, ParseError> {
        loop {
            if let Some(t) = self.pending.pop_front() {
                return Ok(Some(t));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn expect_token(&mut self, what: &'static str) -> Result<String, ParseError> {
        self.next_token()?.ok_or(ParseError::UnexpectedEnd(what))
    }
}

/// A ring whose elements can be read from a single token.
pub trait ElementParser: Ring {
    fn parse_element(&self, token: &str) -> Result<Self::Element, ParseError>;
}

impl ElementParser for FloatField {
    fn parse_element(&self, token: &str) -> Result<f64, ParseError> {
        token
            .parse()
            .map_err(|_| ParseError::InvalidNumber(token.to_owned()))
    }
}

impl<'a> ElementParser for RationalField<'a> {
    /// Parse `p` or `p/q` and reduce the result.
    fn parse_element(&self, token: &str) -> Result<Rational, ParseError> {
        let parse_int = |s: &str| {
            s.parse::<i64>()
                .map_err(|_| ParseError::InvalidNumber(token.to_owned()))
        };

        let (numerator, denominator) = match token.split_once('/') {
            Some((n, d)) => (parse_int(n)?, parse_int(d)?),
            None => (parse_int(token)?, 1),
        };

        if denominator == 0 {
            return Err(ParseError::ZeroDenominator(token.to_owned()));
        }

        Ok(self.to_element(numerator, denominator)?)
    }
}

/// Read the number of rows and columns, both of which must be positive.
pub fn read_dimensions<R: BufRead>(tokens: &mut Tokens<R>) -> Result<(usize, usize), ParseError> {
    let mut dimension = || -> Result<usize, ParseError> {
        let t = tokens.expect_token("the matrix dimensions")?;
        match t.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ParseError::InvalidDimension(t)),
        }
    };

    let rows = dimension()?;
    let cols = dimension()?;
    Ok((rows, cols))
}

/// Read `nrows × ncols` entries in row-major order.
pub fn read_matrix<R: BufRead, F: ElementParser>(
    tokens: &mut Tokens<R>,
    nrows: usize,
    ncols: usize,
    field: F,
) -> Result<Matrix<F>, ParseError> {
    let mut m = Matrix::new(nrows, ncols, field)?;
    for r in 0..nrows {
        for c in 0..ncols {
            let t = tokens.expect_token("the matrix entries")?;
            m[(r, c)] = field.parse_element(&t)?;
        }
    }
    Ok(m)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::rings::primes::PrimeTable;

    #[test]
    fn tokens_span_lines() {
        let mut t = Tokens::new(Cursor::new("2  3\n\n 1/2\t4\n"));
        let mut all = vec![];
        while let Some(s) = t.next_token().unwrap() {
            all.push(s);
        }
        assert_eq!(all, ["2", "3", "1/2", "4"]);
    }

    #[test]
    fn dimensions() {
        let mut t = Tokens::new(Cursor::new("2 3"));
        assert_eq!(read_dimensions(&mut t).unwrap(), (2, 3));

        let mut t = Tokens::new(Cursor::new("0 3"));
        assert!(matches!(
            read_dimensions(&mut t),
            Err(ParseError::InvalidDimension(s)) if s == "0"
        ));

        let mut t = Tokens::new(Cursor::new("2 x"));
        assert!(matches!(
            read_dimensions(&mut t),
            Err(ParseError::InvalidDimension(_))
        ));

        let mut t = Tokens::new(Cursor::new("2"));
        assert!(matches!(
            read_dimensions(&mut t),
            Err(ParseError::UnexpectedEnd(_))
        ));
    }

    #[test]
    fn fractions() {
        let table = PrimeTable::with_default_bound().unwrap();
        let q = RationalField::new(&table);

        assert_eq!(q.parse_element("1/2").unwrap(), Rational::new(1, 2));
        assert_eq!(q.parse_element("7").unwrap(), Rational::new(7, 1));
        assert_eq!(q.parse_element("-4/6").unwrap(), Rational::new(-2, 3));
        assert_eq!(q.parse_element("3/-9").unwrap(), Rational::new(-1, 3));
        assert!(matches!(
            q.parse_element("1/0"),
            Err(ParseError::ZeroDenominator(_))
        ));
        assert!(matches!(
            q.parse_element("1.5"),
            Err(ParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            q.parse_element("1/"),
            Err(ParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            q.parse_element("9223372036854775808"),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn floats() {
        assert_eq!(FloatField.parse_element("1.5").unwrap(), 1.5);
        assert_eq!(FloatField.parse_element("-2e3").unwrap(), -2000.);
        assert_eq!(FloatField.parse_element("4").unwrap(), 4.);
        assert!(matches!(
            FloatField.parse_element("1/2"),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn matrix() {
        let mut t = Tokens::new(Cursor::new("1 2\n3 4\n"));
        let m = read_matrix(&mut t, 2, 2, FloatField).unwrap();
        assert_eq!(m.into_rows(), vec![vec![1., 2.], vec![3., 4.]]);

        let mut t = Tokens::new(Cursor::new("1 2 3"));
        assert!(matches!(
            read_matrix(&mut t, 2, 2, FloatField),
            Err(ParseError::UnexpectedEnd(_))
        ));
    }
}
