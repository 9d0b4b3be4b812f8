//! One interactive run: prompt for and read a matrix, reduce it and print it.
use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::{
    error::AlgebraError,
    parser::{read_dimensions, read_matrix, ElementParser, ParseError, Tokens},
    rings::{float::FloatField, primes::PrimeTable, rational::RationalField, Field},
};

/// What the input matrix describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// A bare matrix to simplify.
    #[default]
    Matrix,
    /// A system of linear equations. Each row holds the coefficients of the
    /// unknowns followed by the constant term.
    Equation,
}

/// The arithmetic used for the elimination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arithmetic {
    #[default]
    Double,
    Fraction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub mode: Mode,
    pub arithmetic: Arithmetic,
    /// Print only the resulting matrix.
    pub quiet: bool,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a matrix from `input`, bring it into reduced row echelon form and
/// write it to `output`.
///
/// The prime table needed for fraction arithmetic is built at the start of a
/// fraction run and dropped when it ends.
pub fn run<R: BufRead, W: Write>(
    options: &SessionOptions,
    input: R,
    mut output: W,
) -> Result<(), SessionError> {
    let equation = options.mode == Mode::Equation;
    let fraction = options.arithmetic == Arithmetic::Fraction;

    if !options.quiet {
        writeln!(
            output,
            "{}",
            if equation {
                "Enter the number of equations and the number of unknowns:"
            } else {
                "Enter height and width of the matrix:"
            }
        )?;
        output.flush()?;
    }

    let mut tokens = Tokens::new(input);
    let (rows, mut cols) = read_dimensions(&mut tokens)?;
    if equation {
        // one more column for the constant terms
        cols = cols
            .checked_add(1)
            .ok_or_else(|| ParseError::InvalidDimension(cols.to_string()))?;
    }

    info!("Reading a {}x{} matrix", rows, cols);

    if !options.quiet {
        if equation {
            let sign = if fraction { '/' } else { '.' };
            writeln!(
                output,
                "For every equation enter coefficients of the consecutive variables and\n\
                 the constant term, e.g. for \"(1{sign}2)*a + 1*b + 2*c = 4\" enter \"1{sign}2 1 2 4\":"
            )?;
        } else if fraction {
            writeln!(
                output,
                "Enter values of matrix fields. For fractions use notation \"p/q\":"
            )?;
        } else {
            writeln!(output, "Enter values of matrix fields:")?;
        }
        output.flush()?;
    }

    if fraction {
        let primes = PrimeTable::with_default_bound()?;
        reduce_and_print(
            options,
            &mut tokens,
            &mut output,
            rows,
            cols,
            RationalField::new(&primes),
        )
    } else {
        reduce_and_print(options, &mut tokens, &mut output, rows, cols, FloatField)
    }
}

fn reduce_and_print<R: BufRead, W: Write, F: Field + ElementParser>(
    options: &SessionOptions,
    tokens: &mut Tokens<R>,
    output: &mut W,
    rows: usize,
    cols: usize,
    field: F,
) -> Result<(), SessionError> {
    let mut m = read_matrix(tokens, rows, cols, field)?;
    m.eliminate()?;

    if !options.quiet {
        writeln!(
            output,
            "{}",
            if options.mode == Mode::Equation {
                "The matrix representing this linear system is as follows:"
            } else {
                "Simplified matrix:"
            }
        )?;
    }

    write!(output, "{}", m)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    fn run_str(options: SessionOptions, input: &str) -> Result<String, SessionError> {
        let mut out = vec![];
        run(&options, Cursor::new(input), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn quiet_matrix_double() {
        let out = run_str(
            SessionOptions {
                quiet: true,
                ..Default::default()
            },
            "2 2\n1 2\n3 4\n",
        )
        .unwrap();
        assert_eq!(out, "1.000000\t0.000000\n0.000000\t1.000000\n");
    }

    #[test]
    fn prompts() {
        let out = run_str(SessionOptions::default(), "1 1\n5\n").unwrap();
        assert_eq!(
            out,
            "Enter height and width of the matrix:\n\
             Enter values of matrix fields:\n\
             Simplified matrix:\n\
             1.000000\n"
        );
    }

    #[test]
    fn truncated_input() {
        let err = run_str(
            SessionOptions {
                quiet: true,
                ..Default::default()
            },
            "2 2\n1 2\n3\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Parse(ParseError::UnexpectedEnd(_))
        ));
    }

    #[test]
    fn constant_column_does_not_overflow() {
        let err = run_str(
            SessionOptions {
                mode: Mode::Equation,
                quiet: true,
                ..Default::default()
            },
            &format!("1 {}\n", usize::MAX),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Parse(ParseError::InvalidDimension(s)) if s == usize::MAX.to_string()
        ));
    }
}
