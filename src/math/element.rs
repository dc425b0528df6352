use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use num_traits::Float;

use crate::random::UniformSource;

/// Floating-point storage types a [`Matrix`](crate::math::Matrix) can hold.
///
/// Both widths share every algorithm. Averages and standard deviations are
/// accumulated in `f64` regardless of the storage width, which is what
/// `to_wide`/`from_wide` are for.
pub trait Element:
    Float
    + FromStr<Err = ParseFloatError>
    + fmt::Display
    + fmt::Debug
    + Default
    + Send
    + Sync
    + 'static
{
    /// Type name used in log messages.
    const NAME: &'static str;

    fn to_wide(self) -> f64;

    fn from_wide(value: f64) -> Self;

    /// Draw one value uniformly from `[0, 1)`.
    fn draw<S: UniformSource + ?Sized>(source: &mut S) -> Self;
}

impl Element for f32 {
    const NAME: &'static str = "f32";

    #[inline]
    fn to_wide(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_wide(value: f64) -> Self {
        value as f32
    }

    fn draw<S: UniformSource + ?Sized>(source: &mut S) -> Self {
        source.next_f32()
    }
}

impl Element for f64 {
    const NAME: &'static str = "f64";

    #[inline]
    fn to_wide(self) -> f64 {
        self
    }

    #[inline]
    fn from_wide(value: f64) -> Self {
        value
    }

    fn draw<S: UniformSource + ?Sized>(source: &mut S) -> Self {
        source.next_f64()
    }
}
