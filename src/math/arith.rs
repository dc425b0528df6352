//! Element-wise arithmetic.
//!
//! Every operation mutates the receiver in place and returns it for chaining.
//! Division follows IEEE-754, so a zero divisor yields infinities or NaN.
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::error::{ensure, MatrixError};
use crate::math::element::Element;
use crate::math::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// Both matrices must have the same number of rows and columns.
    pub(crate) fn check_same_shape(
        &self,
        op: &'static str,
        other: &Matrix<T>,
    ) -> Result<(), MatrixError> {
        if self.nrows() != other.nrows() {
            return Err(MatrixError::DimensionMismatch {
                op,
                dim: "rows",
                left: self.nrows(),
                right: other.nrows(),
            });
        }
        if self.ncols() != other.ncols() {
            return Err(MatrixError::DimensionMismatch {
                op,
                dim: "columns",
                left: self.ncols(),
                right: other.ncols(),
            });
        }
        Ok(())
    }

    fn zip_apply<F>(&mut self, op: &'static str, other: &Matrix<T>, f: F) -> &mut Self
    where
        F: Fn(T, T) -> T,
    {
        ensure(self.check_same_shape(op, other));
        for (lhs, &rhs) in self.data_mut().iter_mut().zip(other.as_slice()) {
            *lhs = f(*lhs, rhs);
        }
        self
    }

    fn scalar_apply<F>(&mut self, rhs: T, f: F) -> &mut Self
    where
        F: Fn(T, T) -> T,
    {
        for lhs in self.data_mut().iter_mut() {
            *lhs = f(*lhs, rhs);
        }
        self
    }

    /// Multiply element by element with a matrix of the same shape.
    ///
    /// For the matrix product see [`Matrix::dot`].
    #[track_caller]
    pub fn mul(&mut self, other: &Matrix<T>) -> &mut Self {
        self.zip_apply("Matrix::mul", other, |a, b| a * b)
    }

    #[track_caller]
    pub fn add(&mut self, other: &Matrix<T>) -> &mut Self {
        self.zip_apply("Matrix::add", other, |a, b| a + b)
    }

    #[track_caller]
    pub fn sub(&mut self, other: &Matrix<T>) -> &mut Self {
        self.zip_apply("Matrix::sub", other, |a, b| a - b)
    }

    #[track_caller]
    pub fn div(&mut self, other: &Matrix<T>) -> &mut Self {
        self.zip_apply("Matrix::div", other, |a, b| a / b)
    }

    pub fn mul_scalar(&mut self, value: T) -> &mut Self {
        self.scalar_apply(value, |a, b| a * b)
    }

    pub fn add_scalar(&mut self, value: T) -> &mut Self {
        self.scalar_apply(value, |a, b| a + b)
    }

    pub fn sub_scalar(&mut self, value: T) -> &mut Self {
        self.scalar_apply(value, |a, b| a - b)
    }

    pub fn div_scalar(&mut self, value: T) -> &mut Self {
        self.scalar_apply(value, |a, b| a / b)
    }
}

macro_rules! impl_assign_ops {
    ($($trait:ident, $method:ident, $matrix_fn:ident, $scalar_fn:ident;)*) => {
        $(
            impl<T: Element> $trait<T> for Matrix<T> {
                fn $method(&mut self, rhs: T) {
                    self.$scalar_fn(rhs);
                }
            }

            impl<'a, T: Element> $trait<&'a Matrix<T>> for Matrix<T> {
                #[track_caller]
                fn $method(&mut self, rhs: &'a Matrix<T>) {
                    self.$matrix_fn(rhs);
                }
            }
        )*
    };
}

impl_assign_ops! {
    MulAssign, mul_assign, mul, mul_scalar;
    AddAssign, add_assign, add, add_scalar;
    SubAssign, sub_assign, sub, sub_scalar;
    DivAssign, div_assign, div, div_scalar;
}
