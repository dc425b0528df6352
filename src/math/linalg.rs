use crate::error::{fail, MatrixError};
use crate::math::element::Element;
use crate::math::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::square(n);
        for i in 0..n {
            m.set(i, i, T::one());
        }
        m
    }

    /// Transposed copy; the receiver is left untouched.
    ///
    /// Row and column vectors share their linear layout with their
    /// transpose, so only the shape is swapped.
    pub fn t(&self) -> Matrix<T> {
        let (rows, cols) = self.shape();
        if self.is_vector() {
            let mut out = self.copy();
            out.set_shape(cols, rows);
            return out;
        }
        let src = self.as_slice();
        let mut data = Vec::with_capacity(rows * cols * 2);
        for col in 0..cols {
            for row in 0..rows {
                data.push(src[row * cols + col]);
            }
        }
        Matrix::from_parts(cols, rows, data)
    }

    /// Matrix product `self x other`.
    ///
    /// Element `(i, j)` is accumulated over `k` in increasing order, starting
    /// from zero, so results are reproducible bit for bit.
    #[track_caller]
    pub fn dot(&self, other: &Matrix<T>) -> Matrix<T> {
        let (rows, inner) = self.shape();
        let (other_rows, cols) = other.shape();
        if inner != other_rows {
            fail(MatrixError::DimensionMismatch {
                op: "Matrix::dot",
                dim: "columns of the receiver and rows of the argument",
                left: inner,
                right: other_rows,
            });
        }

        let lhs = self.as_slice();
        let rhs = other.as_slice();
        let mut out = Matrix::zeros(rows, cols);
        let data = out.data_mut();
        for i in 0..rows {
            for j in 0..cols {
                let mut acc = T::zero();
                for k in 0..inner {
                    acc = acc + lhs[i * inner + k] * rhs[k * cols + j];
                }
                data[i * cols + j] = acc;
            }
        }
        out
    }
}
