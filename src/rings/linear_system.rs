use smallvec::SmallVec;
use std::{
    fmt::{self, Display, Write},
    ops::{Index, IndexMut},
};
use tracing::{debug, instrument, trace};

use crate::error::AlgebraError;

use super::{Field, Ring};

/// A dense matrix stored as a table of independently owned rows.
///
/// Swapping two rows exchanges their storage; no element is copied.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<F: Ring> {
    rows: SmallVec<[Vec<F::Element>; 8]>,
    ncols: usize,
    field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a `nrows × ncols` matrix filled with zeros.
    pub fn new(nrows: usize, ncols: usize, field: F) -> Result<Matrix<F>, AlgebraError> {
        if nrows == 0 || ncols == 0 {
            return Err(AlgebraError::EmptyMatrix);
        }

        let total = nrows
            .checked_mul(ncols)
            .ok_or(AlgebraError::AllocationFailure { elements: usize::MAX })?;

        let mut rows: SmallVec<[Vec<F::Element>; 8]> = SmallVec::new();
        rows.try_reserve_exact(nrows)
            .map_err(|_| AlgebraError::AllocationFailure { elements: total })?;

        for _ in 0..nrows {
            let mut row = Vec::new();
            row.try_reserve_exact(ncols)
                .map_err(|_| AlgebraError::AllocationFailure { elements: total })?;
            row.resize(ncols, field.zero());
            rows.push(row);
        }

        Ok(Matrix { rows, ncols, field })
    }

    /// Create a matrix from its rows, which must all have the same non-zero length.
    pub fn from_nested_vec(
        rows: Vec<Vec<F::Element>>,
        field: F,
    ) -> Result<Matrix<F>, AlgebraError> {
        let ncols = rows.first().map(|r| r.len()).unwrap_or(0);
        if ncols == 0 {
            return Err(AlgebraError::EmptyMatrix);
        }

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(AlgebraError::ShapeMismatch {
                row,
                expected: ncols,
                found: r.len(),
            });
        }

        Ok(Matrix {
            rows: rows.into_iter().collect(),
            ncols,
            field,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn row(&self, index: usize) -> &[F::Element] {
        &self.rows[index]
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[F::Element]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    pub fn into_rows(self) -> Vec<Vec<F::Element>> {
        self.rows.into_vec()
    }

    /// Exchange the storage of rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }
}

impl<F: Ring> Index<(usize, usize)> for Matrix<F> {
    type Output = F::Element;

    /// Get the element at `(row, column)`.
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<F: Ring> IndexMut<(usize, usize)> for Matrix<F> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut F::Element {
        &mut self.rows[index.0][index.1]
    }
}

/// Columns are separated by tabs and every row ends with a newline.
impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.rows {
            for (ci, c) in r.iter().enumerate() {
                self.field.format(c, f)?;
                if ci + 1 < self.ncols {
                    f.write_char('\t')?;
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Clear column `x0` of `target` using the row `pivot`, whose entry in that
/// column is one. The cleared entry is set to zero directly.
fn clear_column<F: Field>(
    field: &F,
    target: &mut [F::Element],
    pivot: &[F::Element],
    x0: usize,
) -> Result<(), AlgebraError> {
    if F::is_zero(&target[x0]) {
        return Ok(());
    }

    let multiplier = std::mem::replace(&mut target[x0], field.zero());
    for (t, p) in target[x0 + 1..].iter_mut().zip(&pivot[x0 + 1..]) {
        *t = field.sub(t, &field.mul(p, &multiplier)?)?;
    }

    Ok(())
}

impl<F: Field> Matrix<F> {
    /// Bring the matrix into reduced row echelon form in place, using
    /// Gaussian elimination followed by back substitution.
    ///
    /// A column without a pivot is skipped together with the row that would
    /// have held it; this is not an error and shows up in the result as a
    /// row without a leading one. The first arithmetic error aborts the
    /// reduction and leaves the matrix partially reduced.
    #[instrument(level = "debug", skip(self), fields(nrows = self.nrows(), ncols = self.ncols))]
    pub fn eliminate(&mut self) -> Result<(), AlgebraError> {
        let end = self.forward_elimination()?;
        self.back_substitution(end)
    }

    /// Write the matrix in echelon form with monic pivots. Returns the row
    /// cursor at which the elimination stopped.
    fn forward_elimination(&mut self) -> Result<usize, AlgebraError> {
        let nrows = self.nrows();

        let (mut x0, mut y0) = (0, 0);
        while x0 < self.ncols && y0 < nrows {
            if F::is_zero(&self.rows[y0][x0]) {
                // Select a non-zero pivot.
                if let Some(y) = (y0 + 1..nrows).find(|&y| !F::is_zero(&self.rows[y][x0])) {
                    debug!("Swapping rows {} and {} for the pivot in column {}", y0, y, x0);
                    self.rows.swap(y0, y);
                }
            }

            if F::is_zero(&self.rows[y0][x0]) {
                debug!("Missing pivot in column {}", x0);
                x0 += 1;
                y0 += 1;
                continue;
            }

            let inv_pivot = self.field.inv(&self.rows[y0][x0])?;
            for e in &mut self.rows[y0][x0..] {
                *e = self.field.mul(e, &inv_pivot)?;
            }

            let (upper, lower) = self.rows.split_at_mut(y0 + 1);
            let pivot = &upper[y0];
            for (y, row) in lower.iter_mut().enumerate() {
                trace!("Clearing column {} of row {}", x0, y0 + 1 + y);
                clear_column(&self.field, row, pivot, x0)?;
            }

            x0 += 1;
            y0 += 1;
        }

        Ok(y0)
    }

    /// Clear the entries above every pivot, walking up from row `end - 1` to row 1.
    fn back_substitution(&mut self, end: usize) -> Result<(), AlgebraError> {
        let last_col = self.ncols - 1;

        for y0 in (1..end).rev() {
            let row = &self.rows[y0];
            let x0 = row[..last_col]
                .iter()
                .position(|e| !F::is_zero(e))
                .unwrap_or(last_col);
            if F::is_zero(&row[x0]) {
                trace!("Row {} is zero", y0);
                continue;
            }

            let (upper, lower) = self.rows.split_at_mut(y0);
            let pivot = &lower[0];
            for row in upper.iter_mut().rev() {
                clear_column(&self.field, row, pivot, x0)?;
            }
        }

        Ok(())
    }
}
