//! flatmat: dense 2-D matrices backed by one flat buffer.
//!
//! A `Matrix<T>` (`T` is `f32` or `f64`) keeps its elements in a single
//! row-major `Vec`, giving array-of-arrays indexing with one allocation per
//! matrix. Mutating operations work in place and return `&mut Self` so they
//! can be chained.
//!
//! Precondition violations (bad shapes, out-of-range indices, wrong argument
//! counts) are treated as programming errors: the operation logs the problem
//! and panics before touching the matrix. Constructors also come in `try_`
//! forms returning [`MatrixError`]. Reading and writing CSV files goes through
//! `anyhow::Result` instead, since malformed input is an expected failure.
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod random;
pub mod utils;

pub use error::MatrixError;
pub use math::{Dims, Element, Matrix, Selection};
pub use random::{Bounds, UniformSource};
