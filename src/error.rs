use thiserror::Error;

/// Errors raised by the numeric fields and the elimination engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A rational number was divided by zero, or a zero denominator was reduced.
    #[error("Division by zero")]
    DivisionByZero,
    /// A numerator or denominator left the range of `i64`.
    #[error("Integer overflow in rational arithmetic")]
    Overflow,
    #[error("Could not allocate storage for {elements} elements")]
    AllocationFailure { elements: usize },
    #[error("A matrix needs at least one row and one column")]
    EmptyMatrix,
    #[error("Row {row} has {found} entries, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}
