//! Reductions over the whole matrix or over one row or column.
//!
//! Unlike the row/column accessors, axis selections do not accept negative
//! indices.
use std::iter::StepBy;
use std::slice::Iter;

use crate::error::{ensure, MatrixError};
use crate::math::element::Element;
use crate::math::matrix::Matrix;

/// What a reduction runs over.
///
/// `Axis { axis: 0, index }` selects row `index`, `Axis { axis: 1, index }`
/// selects column `index`. Any other axis, or an index outside the matrix,
/// is rejected when the reduction runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Axis { axis: isize, index: isize },
}

impl Selection {
    pub fn row(index: usize) -> Self {
        Selection::Axis {
            axis: 0,
            index: index as isize,
        }
    }

    pub fn column(index: usize) -> Self {
        Selection::Axis {
            axis: 1,
            index: index as isize,
        }
    }

    /// Build a selection from either no arguments or an `(axis, index)` pair.
    pub fn from_args(args: &[isize]) -> Result<Self, MatrixError> {
        match *args {
            [] => Ok(Selection::All),
            [axis, index] => Ok(Selection::Axis { axis, index }),
            _ => Err(MatrixError::ArgumentCount {
                op: "Selection::from_args",
                expected: "0 or 2",
                received: args.len(),
            }),
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Strided iterator over the selected elements.
    fn selected(
        &self,
        op: &'static str,
        selection: Selection,
    ) -> Result<StepBy<Iter<'_, T>>, MatrixError> {
        let (rows, cols) = self.shape();
        match selection {
            Selection::All => Ok(self.as_slice().iter().step_by(1)),
            Selection::Axis { axis: 0, index } => {
                if index < 0 || index as usize >= rows {
                    return Err(MatrixError::IndexOutOfBounds {
                        op,
                        index,
                        lower: 0,
                        upper: rows,
                    });
                }
                Ok(self.row_slice(index as usize).iter().step_by(1))
            }
            Selection::Axis { axis: 1, index } => {
                if index < 0 || index as usize >= cols {
                    return Err(MatrixError::IndexOutOfBounds {
                        op,
                        index,
                        lower: 0,
                        upper: cols,
                    });
                }
                Ok(self.as_slice()[index as usize..].iter().step_by(cols))
            }
            Selection::Axis { axis, .. } => Err(MatrixError::InvalidAxis { op, axis }),
        }
    }

    #[track_caller]
    fn wide_mean(&self, op: &'static str, selection: Selection) -> (f64, usize) {
        let values = ensure(self.selected(op, selection));
        let (sum, count) = values.fold((0.0f64, 0usize), |(sum, count), &v| {
            (sum + v.to_wide(), count + 1)
        });
        (sum / count as f64, count)
    }

    #[track_caller]
    pub fn sum(&self, selection: Selection) -> T {
        ensure(self.selected("Matrix::sum", selection)).fold(T::zero(), |acc, &v| acc + v)
    }

    /// Arithmetic mean, accumulated in `f64`.
    #[track_caller]
    pub fn avg(&self, selection: Selection) -> T {
        T::from_wide(self.wide_mean("Matrix::avg", selection).0)
    }

    /// Product of the selected elements, starting from one.
    #[track_caller]
    pub fn prd(&self, selection: Selection) -> T {
        ensure(self.selected("Matrix::prd", selection)).fold(T::one(), |acc, &v| acc * v)
    }

    /// Population standard deviation, accumulated in `f64`.
    ///
    /// The squared deviations are divided by the number of selected elements,
    /// so a row selection divides by `cols` and a column selection by `rows`.
    #[track_caller]
    pub fn std(&self, selection: Selection) -> T {
        let (mean, count) = self.wide_mean("Matrix::std", selection);
        let squares = ensure(self.selected("Matrix::std", selection))
            .map(|&v| {
                let d = mean - v.to_wide();
                d * d
            })
            .sum::<f64>();
        T::from_wide((squares / count as f64).sqrt())
    }

    #[track_caller]
    fn extreme<F>(&self, op: &'static str, selection: Selection, better: F) -> (usize, T)
    where
        F: Fn(T, T) -> bool,
    {
        let mut values = ensure(self.selected(op, selection)).copied().enumerate();
        let first = match values.next() {
            Some((_, v)) => v,
            None => crate::error::fail(MatrixError::Empty { op }),
        };
        values.fold((0, first), |(best_idx, best), (idx, v)| {
            if better(v, best) {
                (idx, v)
            } else {
                (best_idx, best)
            }
        })
    }

    /// Index and value of the smallest selected element.
    ///
    /// The index is linear for `Selection::All`, the column for a row
    /// selection and the row for a column selection. Ties keep the first.
    #[track_caller]
    pub fn min(&self, selection: Selection) -> (usize, T) {
        self.extreme("Matrix::min", selection, |v, best| v < best)
    }

    /// Index and value of the largest selected element, see [`Matrix::min`].
    #[track_caller]
    pub fn max(&self, selection: Selection) -> (usize, T) {
        self.extreme("Matrix::max", selection, |v, best| v > best)
    }
}
