use clap::Parser;

use matrixes::session::{Arithmetic, Mode, SessionOptions};

/// Simplifies matrices and solves systems of linear equations.
///
/// Reads the dimensions and then the entries from standard input. When two
/// flags of a pair are given, the last one wins.
#[derive(Parser, Debug)]
#[command(name = "matrixes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Solve a system of linear equations
    #[arg(short, long, overrides_with = "matrix")]
    pub equation: bool,

    /// Simplify a matrix using Gaussian elimination (default)
    #[arg(short, long, overrides_with = "equation")]
    pub matrix: bool,

    /// Use floating-point arithmetic (default)
    #[arg(short, long, overrides_with = "fraction")]
    pub double: bool,

    /// Use rational number arithmetic
    #[arg(short, long, overrides_with = "double")]
    pub fraction: bool,

    /// Display pure answer
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn options(&self) -> SessionOptions {
        SessionOptions {
            mode: if self.equation {
                Mode::Equation
            } else {
                Mode::Matrix
            },
            arithmetic: if self.fraction {
                Arithmetic::Fraction
            } else {
                Arithmetic::Double
            },
            quiet: self.quiet,
        }
    }
}
