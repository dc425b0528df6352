//! Dense matrix types.
//!
//! `Matrix<T>` stores `rows * cols` elements of `f32` or `f64` in a single
//! row-major buffer. Operations are split by concern: construction and
//! access live in `matrix`, element-wise arithmetic in `arith`, reductions in
//! `reduce`, transpose and products in `linalg`, and append/concat in `grow`.
mod arith;
pub mod element;
mod grow;
mod linalg;
pub mod matrix;
pub mod predicate;
pub mod reduce;

pub use element::Element;
pub use matrix::{Dims, Matrix};
pub use predicate::{negative, non_negative, non_positive, positive};
pub use reduce::Selection;
