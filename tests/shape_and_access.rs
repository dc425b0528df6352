//! Integration tests for shape changes, element access and row/column helpers.

use std::panic::{catch_unwind, AssertUnwindSafe};

use flatmat::{Dims, Matrix};

fn counting(rows: usize, cols: usize) -> Matrix<f64> {
    let v: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
    Matrix::from_flat(&v, Dims::Two(rows, cols))
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn reshape_keeps_linear_order() {
    let v: Vec<f64> = (0..120).map(|i| (i * 3) as f64).collect();
    let mut m = Matrix::from_flat(&v, Dims::Auto);
    m.reshape(10, 12);
    assert_eq!(m.shape(), (10, 12));
    assert_eq!(m.to_vec(), v);
}

#[test]
fn reshape_mismatch_leaves_matrix_untouched() {
    let mut m = counting(10, 12);
    let before = m.copy();
    let result = catch_unwind(AssertUnwindSafe(|| {
        m.reshape(10, 10);
    }));
    assert!(result.is_err());
    assert!(m.equals(&before));
}

#[test]
fn reshape_rejects_overflowing_shape() {
    let half = 1usize << (usize::BITS / 2);
    let mut m = Matrix::<f64>::empty();
    let result = catch_unwind(AssertUnwindSafe(|| {
        m.reshape(half, half);
    }));
    assert!(result.is_err());
    assert_eq!(m.shape(), (0, 0));
}

#[test]
fn round_trip_through_flat_snapshot() {
    let m = counting(7, 3);
    let (rows, cols) = m.shape();
    let n = Matrix::from_flat(&m.to_vec(), Dims::Two(rows, cols));
    assert!(n.equals(&m));
}

#[test]
fn snapshots_are_independent_copies() {
    let m = counting(13, 21);
    let mut flat = m.to_vec();
    flat[0] = 1021.0;
    let mut nested = m.to_nested();
    nested[0][0] = 1021.0;
    assert_eq!(m.get(0, 0), 0.0);
    assert_eq!(nested.len(), 13);
    assert_eq!(nested[0].len(), 21);
    assert_eq!(nested[12][20], m.get(12, 20));
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn get_matches_row_major_offset() {
    let m = counting(17, 13);
    for r in 0..17 {
        for c in 0..13 {
            assert_eq!(m.get(r, c), (r * 13 + c) as f64);
            assert_eq!(m[(r, c)], m.get(r, c));
        }
    }
}

#[test]
fn set_chains() {
    let mut m = Matrix::<f32>::zeros(2, 2);
    m.set(0, 1, 5.0).set(1, 0, 7.0);
    assert_eq!(m.to_vec(), vec![0.0, 5.0, 7.0, 0.0]);
    m[(1, 1)] = 9.0;
    assert_eq!(m.get(1, 1), 9.0);
}

#[test]
#[should_panic(expected = "index 3 is out of bounds [0, 3)")]
fn get_out_of_bounds_panics() {
    let m = counting(3, 2);
    let _ = m.get(3, 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn set_out_of_bounds_panics() {
    let mut m = counting(3, 2);
    m.set(0, 2, 1.0);
}

#[test]
fn set_all_and_map() {
    let mut m = Matrix::<f64>::zeros(22, 22);
    m.set_all(1.0);
    assert!(m.all(|v| *v == 1.0));
    m.map(|v| *v = *v * 3.0 + 1.0);
    assert!(m.all(|v| *v == 4.0));
}

// ---------------------------------------------------------------------------
// Rows and columns
// ---------------------------------------------------------------------------

#[test]
fn column_and_row_copies() {
    let m = counting(3, 4);
    let col = m.column(1);
    assert_eq!(col.shape(), (3, 1));
    assert_eq!(col.to_vec(), vec![1.0, 5.0, 9.0]);

    let row = m.row(2);
    assert_eq!(row.shape(), (1, 4));
    assert_eq!(row.to_vec(), vec![8.0, 9.0, 10.0, 11.0]);
}

#[test]
fn negative_indexing() {
    let m = counting(3, 4);
    assert!(m.column(-1).equals(&m.column(3)));
    assert!(m.column(-4).equals(&m.column(0)));
    assert!(m.row(-1).equals(&m.row(2)));
}

#[test]
fn extracted_column_does_not_alias() {
    let m = counting(3, 4);
    let mut col = m.column(0);
    col.set_all(-1.0);
    assert_eq!(m.get(0, 0), 0.0);
}

#[test]
#[should_panic(expected = "index -5 is out of bounds [-4, 4)")]
fn column_negative_out_of_bounds_panics() {
    let m = counting(3, 4);
    let _ = m.column(-5);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn row_out_of_bounds_panics() {
    let m = counting(3, 4);
    let _ = m.row(3);
}

#[test]
fn set_column_value_and_values() {
    let mut m = Matrix::<f64>::zeros(3, 4);
    m.set_column(-1, 2.0);
    assert_eq!(m.column(3).to_vec(), vec![2.0, 2.0, 2.0]);
    m.set_column_values(0, &[1.0, 2.0, 3.0]);
    assert_eq!(m.column(0).to_vec(), vec![1.0, 2.0, 3.0]);
    assert_eq!(m.column(1).to_vec(), vec![0.0, 0.0, 0.0]);
}

#[test]
fn set_row_value_and_values() {
    let mut m = Matrix::<f32>::zeros(3, 4);
    m.set_row(-1, 2.0);
    assert_eq!(m.row(2).to_vec(), vec![2.0; 4]);
    m.set_row_values(0, &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.row(0).to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.row(1).to_vec(), vec![0.0; 4]);
}

#[test]
#[should_panic(expected = "expected 3 values but received 2")]
fn set_column_values_length_mismatch_panics() {
    let mut m = Matrix::<f64>::zeros(3, 4);
    m.set_column_values(0, &[1.0, 2.0]);
}

#[test]
fn set_row_values_length_mismatch_leaves_matrix_untouched() {
    let mut m = counting(3, 4);
    let before = m.copy();
    let result = catch_unwind(AssertUnwindSafe(|| {
        m.set_row_values(1, &[1.0, 2.0, 3.0]);
    }));
    assert!(result.is_err());
    assert!(m.equals(&before));
}

// ---------------------------------------------------------------------------
// Copy, equality, predicates
// ---------------------------------------------------------------------------

#[test]
fn copy_is_deep() {
    let m = counting(17, 13);
    let mut n = m.copy();
    assert!(n.equals(&m));
    n.set(0, 0, 100.0);
    assert!(!n.equals(&m));
    assert_eq!(m.get(0, 0), 0.0);
}

#[test]
fn equals_requires_matching_shape() {
    let m = counting(2, 3);
    let mut n = m.copy();
    n.reshape(3, 2);
    assert!(!m.equals(&n));
    assert!(m.equals(&m));
}

#[test]
fn equals_uses_native_float_equality() {
    let m = Matrix::from_flat(&[f64::NAN], Dims::Auto);
    assert!(!m.equals(&m.copy()));
    let z = Matrix::from_flat(&[0.0f64], Dims::Auto);
    let nz = Matrix::from_flat(&[-0.0f64], Dims::Auto);
    assert!(z.equals(&nz));
}

#[test]
fn all_and_any_with_stock_predicates() {
    use flatmat::math::{negative, non_negative, positive};

    let mut m = counting(100, 21);
    assert!(!m.any(negative));
    assert!(m.any(positive));
    assert!(!m.all(positive));
    assert!(m.all(non_negative));
    m.add_scalar(1.0);
    assert!(m.all(positive));
}

#[test]
fn all_short_circuits() {
    let m = counting(1, 10);
    let mut calls = 0;
    assert!(!m.all(|v| {
        calls += 1;
        *v < 2.0
    }));
    assert_eq!(calls, 3);

    let mut calls = 0;
    assert!(m.any(|v| {
        calls += 1;
        *v == 1.0
    }));
    assert_eq!(calls, 2);
}
