//! Uniform random source consumed by [`Matrix::random`](crate::math::Matrix::random).
//!
//! Any `rand::Rng` is a source out of the box; seeding and determinism are
//! left to the caller.
use rand::Rng;

use crate::error::MatrixError;
use crate::math::Element;

/// Produces successive independent values uniformly distributed in `[0, 1)`.
pub trait UniformSource {
    fn next_f32(&mut self) -> f32;

    fn next_f64(&mut self) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn next_f32(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Range of the values drawn by `Matrix::random`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds<T> {
    /// `[0, 1)`
    Unit,
    /// `[0, hi)`
    Upper(T),
    /// `[lo, hi)`, `lo` strictly less than `hi`
    Range(T, T),
}

impl<T: Element> Bounds<T> {
    /// Build bounds from zero, one or two values.
    pub fn from_slice(args: &[T]) -> Result<Self, MatrixError> {
        let bounds = match *args {
            [] => Bounds::Unit,
            [hi] => Bounds::Upper(hi),
            [lo, hi] => Bounds::Range(lo, hi),
            _ => {
                return Err(MatrixError::ArgumentCount {
                    op: "Bounds::from_slice",
                    expected: "0 to 2",
                    received: args.len(),
                })
            }
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), MatrixError> {
        match *self {
            // `!(lo < hi)` also rejects NaN bounds
            Bounds::Range(lo, hi) if !(lo < hi) => Err(MatrixError::InvalidRange {
                op: "Matrix::random",
                lo: lo.to_wide(),
                hi: hi.to_wide(),
            }),
            _ => Ok(()),
        }
    }

    /// Draw one value within the bounds.
    ///
    /// Scaling the unit draw can round up onto the excluded upper bound; such
    /// a draw is replaced by the lower bound.
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> T {
        let unit = T::draw(source);
        match *self {
            Bounds::Unit => unit,
            Bounds::Upper(hi) => {
                let v = unit * hi;
                if hi > T::zero() && v >= hi {
                    T::zero()
                } else {
                    v
                }
            }
            Bounds::Range(lo, hi) => {
                let v = unit * (hi - lo) + lo;
                if v >= hi {
                    lo
                } else {
                    v
                }
            }
        }
    }
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Bounds::Unit
    }
}
