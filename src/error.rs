use std::error::Error;
use std::fmt;

/// Precondition violations reported by matrix operations.
///
/// Each variant names the operation that rejected its input together with
/// the offending values.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Wrong number of dimension or bound arguments.
    ArgumentCount {
        op: &'static str,
        expected: &'static str,
        received: usize,
    },
    /// A requested `(rows, cols)` does not fit the number of available elements.
    ShapeMismatch {
        op: &'static str,
        rows: usize,
        cols: usize,
        len: usize,
    },
    /// `rows * cols` does not fit in a `usize`.
    ShapeOverflow {
        op: &'static str,
        rows: usize,
        cols: usize,
    },
    /// A vector argument has the wrong length.
    LengthMismatch {
        op: &'static str,
        expected: usize,
        received: usize,
    },
    /// Two matrices disagree in one dimension.
    DimensionMismatch {
        op: &'static str,
        dim: &'static str,
        left: usize,
        right: usize,
    },
    IndexOutOfBounds {
        op: &'static str,
        index: isize,
        lower: isize,
        upper: usize,
    },
    InvalidAxis { op: &'static str, axis: isize },
    InvalidRange { op: &'static str, lo: f64, hi: f64 },
    Empty { op: &'static str },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::ArgumentCount {
                op,
                expected,
                received,
            } => write!(
                f,
                "in {}: expected {} arguments, but received {}",
                op, expected, received
            ),
            MatrixError::ShapeMismatch {
                op,
                rows,
                cols,
                len,
            } => write!(
                f,
                "in {}: shape ({}, {}) does not match {} elements",
                op, rows, cols, len
            ),
            MatrixError::ShapeOverflow { op, rows, cols } => write!(
                f,
                "in {}: shape ({}, {}) has more elements than fit in memory",
                op, rows, cols
            ),
            MatrixError::LengthMismatch {
                op,
                expected,
                received,
            } => write!(
                f,
                "in {}: length mismatch, expected {} values but received {}",
                op, expected, received
            ),
            MatrixError::DimensionMismatch {
                op,
                dim,
                left,
                right,
            } => write!(
                f,
                "in {}: the number of {} must match, got {} and {}",
                op, dim, left, right
            ),
            MatrixError::IndexOutOfBounds {
                op,
                index,
                lower,
                upper,
            } => write!(
                f,
                "in {}: index {} is out of bounds [{}, {})",
                op, index, lower, upper
            ),
            MatrixError::InvalidAxis { op, axis } => {
                write!(f, "in {}: axis must be 0 or 1, got {}", op, axis)
            }
            MatrixError::InvalidRange { op, lo, hi } => write!(
                f,
                "in {}: lower bound {} must be strictly less than upper bound {}",
                op, lo, hi
            ),
            MatrixError::Empty { op } => write!(f, "in {}: the selection is empty", op),
        }
    }
}

impl Error for MatrixError {}

/// Abort the current operation on a violated precondition.
///
/// Matrix operations validate before they mutate, so a caller that catches
/// the unwind still sees a consistent matrix.
#[track_caller]
pub(crate) fn fail(err: MatrixError) -> ! {
    log::error!("{}", err);
    panic!("{}", err)
}

/// Unwrap a checked result, failing fast on error.
#[track_caller]
pub(crate) fn ensure<T>(result: Result<T, MatrixError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => fail(err),
    }
}
