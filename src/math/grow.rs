//! Structural growth: appending columns, rows and whole matrices.
//!
//! Row-wise growth is a plain buffer append. Column-wise growth has to
//! re-linearise the buffer because every row gains trailing elements.
use crate::error::{fail, MatrixError};
use crate::math::element::Element;
use crate::math::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// Rebuild the buffer with `extra` columns taken row by row from `tail`.
    fn widen(&mut self, extra: usize, tail: &[T]) {
        let (rows, cols) = self.shape();
        let new_cols = cols + extra;
        log::trace!(
            "re-linearising {}x{} {} buffer to {} columns",
            rows,
            cols,
            T::NAME,
            new_cols
        );
        let mut data = Vec::with_capacity(rows * new_cols * 2);
        for row in 0..rows {
            data.extend_from_slice(self.row_slice(row));
            data.extend_from_slice(&tail[row * extra..(row + 1) * extra]);
        }
        *self.data_mut() = data;
        self.set_shape(rows, new_cols);
    }

    /// Add a column on the right; `values` must have one entry per row.
    #[track_caller]
    pub fn append_column(&mut self, values: &[T]) -> &mut Self {
        if values.len() != self.nrows() {
            fail(MatrixError::LengthMismatch {
                op: "Matrix::append_column",
                expected: self.nrows(),
                received: values.len(),
            });
        }
        self.widen(1, values);
        self
    }

    /// Add a row at the bottom; `values` must have one entry per column.
    #[track_caller]
    pub fn append_row(&mut self, values: &[T]) -> &mut Self {
        if values.len() != self.ncols() {
            fail(MatrixError::LengthMismatch {
                op: "Matrix::append_row",
                expected: self.ncols(),
                received: values.len(),
            });
        }
        let (rows, cols) = self.shape();
        self.data_mut().extend_from_slice(values);
        self.set_shape(rows + 1, cols);
        self
    }

    /// Merge `other` to the right of the receiver. Row counts must match.
    #[track_caller]
    pub fn concat(&mut self, other: &Matrix<T>) -> &mut Self {
        if self.nrows() != other.nrows() {
            fail(MatrixError::DimensionMismatch {
                op: "Matrix::concat",
                dim: "rows",
                left: self.nrows(),
                right: other.nrows(),
            });
        }
        self.widen(other.ncols(), other.as_slice());
        self
    }

    /// Merge `other` below the receiver. Column counts must match.
    #[track_caller]
    pub fn append(&mut self, other: &Matrix<T>) -> &mut Self {
        if self.ncols() != other.ncols() {
            fail(MatrixError::DimensionMismatch {
                op: "Matrix::append",
                dim: "columns",
                left: self.ncols(),
                right: other.ncols(),
            });
        }
        let (rows, cols) = self.shape();
        self.data_mut().extend_from_slice(other.as_slice());
        self.set_shape(rows + other.nrows(), cols);
        self
    }
}
