use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{ensure, MatrixError};
use crate::math::element::Element;
use crate::random::{Bounds, UniformSource};

/// Dense row-major matrix backed by one contiguous buffer.
///
/// Element `(r, c)` lives at offset `r * cols + c`, and the buffer always
/// holds exactly `rows * cols` elements. Row and column vectors are plain
/// matrices with one row or one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Unchecked serde form of a [`Matrix`].
#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, Self::Error> {
        check_shape("Matrix::deserialize", raw.rows, raw.cols, raw.data.len())?;
        Ok(Matrix {
            rows: raw.rows,
            cols: raw.cols,
            data: raw.data,
        })
    }
}

/// Dimension arguments accepted by the constructors.
///
/// What a single dimension means depends on the constructor: a square
/// matrix for [`Matrix::new`], a column vector for [`Matrix::from_flat`]
/// and a square reshaping for [`Matrix::from_nested`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dims {
    #[default]
    Auto,
    One(usize),
    Two(usize, usize),
}

impl Dims {
    /// Convert zero, one or two integers into `Dims`.
    pub fn from_slice(dims: &[usize]) -> Result<Self, MatrixError> {
        match *dims {
            [] => Ok(Dims::Auto),
            [n] => Ok(Dims::One(n)),
            [rows, cols] => Ok(Dims::Two(rows, cols)),
            _ => Err(MatrixError::ArgumentCount {
                op: "Dims::from_slice",
                expected: "0 to 2",
                received: dims.len(),
            }),
        }
    }
}

impl From<usize> for Dims {
    fn from(n: usize) -> Self {
        Dims::One(n)
    }
}

impl From<(usize, usize)> for Dims {
    fn from((rows, cols): (usize, usize)) -> Self {
        Dims::Two(rows, cols)
    }
}

/// Number of elements in a `rows x cols` matrix.
pub(crate) fn element_count(
    op: &'static str,
    rows: usize,
    cols: usize,
) -> Result<usize, MatrixError> {
    rows.checked_mul(cols).ok_or(MatrixError::ShapeOverflow { op, rows, cols })
}

/// Check that `rows x cols` holds exactly `len` elements.
pub(crate) fn check_shape(
    op: &'static str,
    rows: usize,
    cols: usize,
    len: usize,
) -> Result<(), MatrixError> {
    match rows.checked_mul(cols) {
        Some(n) if n == len => Ok(()),
        _ => Err(MatrixError::ShapeMismatch {
            op,
            rows,
            cols,
            len,
        }),
    }
}

/// Resolve a possibly negative index against a dimension of length `len`.
pub(crate) fn resolve_index(
    op: &'static str,
    index: isize,
    len: usize,
) -> Result<usize, MatrixError> {
    let resolved = if index < 0 {
        len as isize + index
    } else {
        index
    };
    if resolved < 0 || resolved as usize >= len {
        return Err(MatrixError::IndexOutOfBounds {
            op,
            index,
            lower: -(len as isize),
            upper: len,
        });
    }
    Ok(resolved as usize)
}

impl<T: Element> Matrix<T> {
    /// Zero-filled buffer with twice the needed capacity.
    fn zeroed(len: usize) -> Vec<T> {
        let mut data = Vec::with_capacity(len.saturating_mul(2));
        data.resize(len, T::zero());
        data
    }

    fn copied(values: &[T]) -> Vec<T> {
        let mut data = Vec::with_capacity(values.len().saturating_mul(2));
        data.extend_from_slice(values);
        data
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(rows.checked_mul(cols), Some(data.len()));
        Matrix { rows, cols, data }
    }

    /// Empty `0x0` matrix, `n x n` zeros, or `rows x cols` zeros.
    #[track_caller]
    pub fn new(dims: Dims) -> Self {
        match dims {
            Dims::Auto => Self::empty(),
            Dims::One(n) => Self::zeros(n, n),
            Dims::Two(rows, cols) => Self::zeros(rows, cols),
        }
    }

    pub fn try_from_dims(dims: &[usize]) -> Result<Self, MatrixError> {
        Dims::from_slice(dims).map(Self::new)
    }

    /// Like [`Matrix::new`] but from a slice of zero to two dimensions.
    ///
    /// Panics when more than two dimensions are given.
    #[track_caller]
    pub fn from_dims(dims: &[usize]) -> Self {
        ensure(Self::try_from_dims(dims))
    }

    pub fn empty() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// `rows x cols` zeros.
    ///
    /// Panics when `rows * cols` overflows `usize`.
    #[track_caller]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = ensure(element_count("Matrix::zeros", rows, cols));
        Matrix {
            rows,
            cols,
            data: Self::zeroed(len),
        }
    }

    #[track_caller]
    pub fn square(n: usize) -> Self {
        Self::zeros(n, n)
    }

    #[track_caller]
    pub fn from_elem(shape: (usize, usize), value: T) -> Self {
        let mut m = Self::zeros(shape.0, shape.1);
        m.set_all(value);
        m
    }

    /// Build a matrix from a flat slice.
    ///
    /// * `Dims::Auto` gives a `1 x len` row vector.
    /// * `Dims::One(n)` gives an `n x 1` column vector; `n` must equal the length.
    /// * `Dims::Two(r, c)` requires `r * c` to equal the length.
    ///
    /// The values are always copied.
    pub fn try_from_flat(data: &[T], dims: Dims) -> Result<Self, MatrixError> {
        let (rows, cols) = match dims {
            Dims::Auto => (1, data.len()),
            Dims::One(n) => {
                if n != data.len() {
                    return Err(MatrixError::LengthMismatch {
                        op: "Matrix::from_flat",
                        expected: n,
                        received: data.len(),
                    });
                }
                (n, 1)
            }
            Dims::Two(rows, cols) => {
                check_shape("Matrix::from_flat", rows, cols, data.len())?;
                (rows, cols)
            }
        };
        Ok(Matrix {
            rows,
            cols,
            data: Self::copied(data),
        })
    }

    #[track_caller]
    pub fn from_flat(data: &[T], dims: Dims) -> Self {
        ensure(Self::try_from_flat(data, dims))
    }

    /// Build a matrix from nested rows, flattened row-major.
    ///
    /// * `Dims::Auto` takes the shape `(data.len(), data[0].len())`.
    /// * `Dims::One(n)` requires `n * n` elements in total and gives `n x n`.
    /// * `Dims::Two(r, c)` requires `r == data.len()` and `c == data[0].len()`.
    ///
    /// Rows are expected to share one length.
    pub fn try_from_nested<R: AsRef<[T]>>(
        data: &[R],
        dims: Dims,
    ) -> Result<Self, MatrixError> {
        let outer = data.len();
        let inner = data.first().map_or(0, |row| row.as_ref().len());

        let mut values = Vec::with_capacity(outer.saturating_mul(inner).saturating_mul(2));
        for row in data {
            values.extend_from_slice(row.as_ref());
        }

        let (rows, cols) = match dims {
            Dims::Auto => (outer, inner),
            Dims::One(n) => (n, n),
            Dims::Two(rows, cols) => {
                if rows != outer || cols != inner {
                    return Err(MatrixError::ShapeMismatch {
                        op: "Matrix::from_nested",
                        rows,
                        cols,
                        len: values.len(),
                    });
                }
                (rows, cols)
            }
        };
        check_shape("Matrix::from_nested", rows, cols, values.len())?;
        Ok(Matrix {
            rows,
            cols,
            data: values,
        })
    }

    #[track_caller]
    pub fn from_nested<R: AsRef<[T]>>(data: &[R], dims: Dims) -> Self {
        ensure(Self::try_from_nested(data, dims))
    }

    /// `rows x cols` matrix whose elements are drawn independently from `bounds`.
    pub fn try_random<S: UniformSource + ?Sized>(
        rows: usize,
        cols: usize,
        bounds: Bounds<T>,
        source: &mut S,
    ) -> Result<Self, MatrixError> {
        bounds.validate()?;
        element_count("Matrix::random", rows, cols)?;
        let mut m = Self::zeros(rows, cols);
        for value in m.data.iter_mut() {
            *value = bounds.sample(source);
        }
        Ok(m)
    }

    #[track_caller]
    pub fn random<S: UniformSource + ?Sized>(
        rows: usize,
        cols: usize,
        bounds: Bounds<T>,
        source: &mut S,
    ) -> Self {
        ensure(Self::try_random(rows, cols, bounds, source))
    }

    /// Change the shape without moving any element.
    #[track_caller]
    pub fn reshape(&mut self, rows: usize, cols: usize) -> &mut Self {
        ensure(check_shape("Matrix::reshape", rows, cols, self.data.len()));
        self.rows = rows;
        self.cols = cols;
        self
    }

    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> &mut Self {
        self[(row, col)] = value;
        self
    }

    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    pub fn set_all(&mut self, value: T) -> &mut Self {
        self.data.iter_mut().for_each(|v| *v = value);
        self
    }

    /// Apply `f` to every element in place.
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&mut T),
    {
        self.data.iter_mut().for_each(|v| f(v));
        self
    }

    /// Set every element of a column to `value`. Negative indices count from the end.
    #[track_caller]
    pub fn set_column(&mut self, index: isize, value: T) -> &mut Self {
        let col = ensure(resolve_index("Matrix::set_column", index, self.cols));
        for row in 0..self.rows {
            self.data[row * self.cols + col] = value;
        }
        self
    }

    /// Overwrite a column with `values`, whose length must equal the number of rows.
    #[track_caller]
    pub fn set_column_values(&mut self, index: isize, values: &[T]) -> &mut Self {
        let col = ensure(resolve_index("Matrix::set_column_values", index, self.cols));
        if values.len() != self.rows {
            crate::error::fail(MatrixError::LengthMismatch {
                op: "Matrix::set_column_values",
                expected: self.rows,
                received: values.len(),
            });
        }
        for (row, &value) in values.iter().enumerate() {
            self.data[row * self.cols + col] = value;
        }
        self
    }

    #[track_caller]
    pub fn set_row(&mut self, index: isize, value: T) -> &mut Self {
        let row = ensure(resolve_index("Matrix::set_row", index, self.rows));
        let start = row * self.cols;
        self.data[start..start + self.cols].fill(value);
        self
    }

    /// Overwrite a row with `values`, whose length must equal the number of columns.
    #[track_caller]
    pub fn set_row_values(&mut self, index: isize, values: &[T]) -> &mut Self {
        let row = ensure(resolve_index("Matrix::set_row_values", index, self.rows));
        if values.len() != self.cols {
            crate::error::fail(MatrixError::LengthMismatch {
                op: "Matrix::set_row_values",
                expected: self.cols,
                received: values.len(),
            });
        }
        let start = row * self.cols;
        self.data[start..start + self.cols].copy_from_slice(values);
        self
    }

    /// Copy of a column as a `rows x 1` matrix. Negative indices count from the end.
    #[track_caller]
    pub fn column(&self, index: isize) -> Matrix<T> {
        let col = ensure(resolve_index("Matrix::column", index, self.cols));
        let mut values = Vec::with_capacity(self.rows * 2);
        for row in 0..self.rows {
            values.push(self.data[row * self.cols + col]);
        }
        Matrix {
            rows: self.rows,
            cols: 1,
            data: values,
        }
    }

    /// Copy of a row as a `1 x cols` matrix. Negative indices count from the end.
    #[track_caller]
    pub fn row(&self, index: isize) -> Matrix<T> {
        let row = ensure(resolve_index("Matrix::row", index, self.rows));
        Matrix {
            rows: 1,
            cols: self.cols,
            data: Self::copied(self.row_slice(row)),
        }
    }

    /// Deep copy.
    pub fn copy(&self) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: Self::copied(&self.data),
        }
    }

    /// Same shape and every element equal under `==` (so `NaN != NaN`).
    pub fn equals(&self, other: &Matrix<T>) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }

    pub(crate) fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }
}

impl<T> Matrix<T> {
    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut Vec<T> {
        &mut self.data
    }

    pub(crate) fn set_shape(&mut self, rows: usize, cols: usize) {
        debug_assert_eq!(rows.checked_mul(cols), Some(self.data.len()));
        self.rows = rows;
        self.cols = cols;
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[track_caller]
    fn checked_offset(&self, row: usize, col: usize) -> usize {
        if row >= self.rows {
            crate::error::fail(MatrixError::IndexOutOfBounds {
                op: "Matrix::index",
                index: row as isize,
                lower: 0,
                upper: self.rows,
            });
        }
        if col >= self.cols {
            crate::error::fail(MatrixError::IndexOutOfBounds {
                op: "Matrix::index",
                index: col as isize,
                lower: 0,
                upper: self.cols,
            });
        }
        self.offset(row, col)
    }

    /// Elements of row `row`. Callers check `row < rows`.
    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Row-major copy of every element.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Copy as `rows` vectors of `cols` elements each.
    pub fn to_nested(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|row| self.row_slice(row).to_vec()).collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.checked_offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.checked_offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: Element> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
