//! Matrixes simplifies matrices and solves systems of linear equations.
//!
//! A matrix is brought into reduced row echelon form with Gaussian
//! elimination, either in floating point arithmetic or exactly, using
//! fractions of fixed-width integers.
//!
//! For example:
//!
//! ```
//! use matrixes::rings::{
//!     linear_system::Matrix,
//!     primes::PrimeTable,
//!     rational::{Rational, RationalField},
//! };
//!
//! // x + y = 3 and x - y = 1
//! let primes = PrimeTable::with_default_bound().unwrap();
//! let field = RationalField::new(&primes);
//! let q = |n: i64| Rational::from(n);
//! let mut m = Matrix::from_nested_vec(vec![vec![q(1), q(1), q(3)], vec![q(1), q(-1), q(1)]], field)
//!     .unwrap();
//!
//! m.eliminate().unwrap();
//! assert_eq!(m.row(0), &[q(1), q(0), q(2)]);
//! assert_eq!(m.row(1), &[q(0), q(1), q(1)]);
//! ```
pub mod error;
pub mod parser;
pub mod rings;
pub mod session;

pub use error::AlgebraError;
