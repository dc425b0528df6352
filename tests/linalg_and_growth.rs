//! Integration tests for transpose, matrix products and structural growth.

use std::panic::{catch_unwind, AssertUnwindSafe};

use flatmat::{Dims, Matrix};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn counting(rows: usize, cols: usize) -> Matrix<f64> {
    let v: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
    Matrix::from_flat(&v, Dims::Two(rows, cols))
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_indices() {
    let m = counting(12, 3);
    let t = m.t();
    assert_eq!(t.shape(), (3, 12));
    for i in 0..12 {
        for j in 0..3 {
            assert_eq!(m.get(i, j), t.get(j, i));
        }
    }
}

#[test]
fn transpose_is_self_inverse() {
    let mut rng = StdRng::seed_from_u64(3);
    for &(rows, cols) in &[(1, 1), (1, 7), (7, 1), (4, 9), (9, 4), (0, 3)] {
        let m = Matrix::<f32>::random(rows, cols, Default::default(), &mut rng);
        assert!(m.t().t().equals(&m));
    }
}

#[test]
fn transpose_of_vectors() {
    let row = Matrix::from_flat(&[1.0f64, 2.0, 3.0], Dims::Auto);
    let col = row.t();
    assert_eq!(col.shape(), (3, 1));
    assert!(col.equals(&Matrix::from_flat(&[1.0, 2.0, 3.0], Dims::One(3))));
    assert_eq!(row.shape(), (1, 3));
}

// ---------------------------------------------------------------------------
// Dot
// ---------------------------------------------------------------------------

#[test]
fn dot_shape_and_zero_product() {
    let m = counting(10, 4);
    let n = counting(4, 10);
    let o = m.dot(&n);
    assert_eq!(o.shape(), (10, 10));
    let q = o.dot(&Matrix::zeros(10, 10));
    assert!(q.all(|v| *v == 0.0));
}

#[test]
fn dot_with_identity_is_noop() {
    let mut rng = StdRng::seed_from_u64(11);
    let m = Matrix::<f64>::random(6, 6, Default::default(), &mut rng);
    assert!(m.dot(&Matrix::identity(6)).equals(&m));
    assert!(Matrix::identity(6).dot(&m).equals(&m));
}

#[test]
fn dot_matches_naive_accumulation() {
    let m = counting(3, 5);
    let n = counting(5, 2);
    let o = m.dot(&n);
    for i in 0..3 {
        for j in 0..2 {
            let mut acc = 0.0;
            for k in 0..5 {
                acc += m.get(i, k) * n.get(k, j);
            }
            assert_eq!(o.get(i, j), acc);
        }
    }
}

#[test]
fn dot_row_by_column_is_inner_product() {
    let a = Matrix::from_flat(&[1.0f32, 2.0, 3.0], Dims::Auto);
    let b = a.t();
    let inner = a.dot(&b);
    assert_eq!(inner.shape(), (1, 1));
    assert_eq!(inner.get(0, 0), 14.0);
    let outer = b.dot(&a);
    assert_eq!(outer.shape(), (3, 3));
    assert_eq!(outer.get(2, 1), 6.0);
}

#[test]
#[should_panic(expected = "got 4 and 3")]
fn dot_inner_mismatch_panics() {
    let _ = counting(2, 4).dot(&counting(3, 2));
}

// ---------------------------------------------------------------------------
// append_column / append_row
// ---------------------------------------------------------------------------

#[test]
fn append_column_grows_cols() {
    let mut m = counting(10, 4);
    let v = vec![0.0; 10];
    m.append_column(&v);
    assert_eq!(m.shape(), (10, 5));
    m.append_column(&v).append_column(&v);
    assert_eq!(m.shape(), (10, 7));
}

#[test]
fn append_column_relinearises() {
    let mut m = counting(2, 2);
    m.append_column(&[10.0, 20.0]);
    assert_eq!(m.to_vec(), vec![0.0, 1.0, 10.0, 2.0, 3.0, 20.0]);
    assert_eq!(m.column(-1).to_vec(), vec![10.0, 20.0]);
}

#[test]
#[should_panic(expected = "expected 10 values but received 9")]
fn append_column_length_mismatch_panics() {
    let mut m = counting(10, 4);
    m.append_column(&[0.0; 9]);
}

#[test]
fn append_row_grows_rows() {
    let mut m = counting(3, 4);
    let v: Vec<f64> = (0..4).map(|i| (i * i * i) as f64).collect();
    m.append_row(&v);
    assert_eq!(m.shape(), (4, 4));
    m.append_row(&v).append_row(&v);
    assert_eq!(m.shape(), (6, 4));
    assert_eq!(m.row(-1).to_vec(), v);
    assert_eq!(m.row(2).to_vec(), vec![8.0, 9.0, 10.0, 11.0]);
}

#[test]
fn append_row_length_mismatch_leaves_matrix_untouched() {
    let mut m = counting(3, 4);
    let before = m.copy();
    let result = catch_unwind(AssertUnwindSafe(|| {
        m.append_row(&[1.0, 2.0, 3.0]);
    }));
    assert!(result.is_err());
    assert_eq!(m.shape(), (3, 4));
    assert!(m.equals(&before));
}

// ---------------------------------------------------------------------------
// concat / append
// ---------------------------------------------------------------------------

#[test]
fn concat_small_scenario() {
    let mut m = Matrix::from_elem((1, 2), 2.0f64);
    let n = Matrix::from_elem((1, 3), 3.0f64);
    m.concat(&n);
    assert_eq!(m.shape(), (1, 5));
    assert_eq!(m.to_vec(), vec![2.0, 2.0, 3.0, 3.0, 3.0]);
}

#[test]
fn concat_interleaves_rows() {
    let (rows, cols) = (10, 4);
    let mut m = counting(rows, cols);
    let n = counting(rows, rows);
    m.concat(&n);
    assert_eq!(m.shape(), (rows, rows + cols));

    let (mut idx1, mut idx2) = (0, 0);
    for i in 0..rows {
        for j in 0..rows + cols {
            if j < cols {
                assert_eq!(m.get(i, j), idx1 as f64);
                idx1 += 1;
            } else {
                assert_eq!(m.get(i, j), idx2 as f64);
                idx2 += 1;
            }
        }
    }
}

#[test]
#[should_panic(expected = "the number of rows must match, got 2 and 3")]
fn concat_row_mismatch_panics() {
    let mut m = counting(2, 2);
    m.concat(&counting(3, 2));
}

#[test]
fn append_stacks_below() {
    let mut m = Matrix::from_elem((1, 2), 2.0f32);
    let n = Matrix::from_elem((2, 2), 3.0f32);
    m.append(&n);
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.to_nested(), vec![vec![2.0, 2.0], vec![3.0, 3.0], vec![3.0, 3.0]]);
}

#[test]
fn append_failure_leaves_matrix_untouched() {
    let mut m = counting(2, 2);
    let before = m.copy();
    let result = catch_unwind(AssertUnwindSafe(|| {
        m.append(&counting(2, 3));
    }));
    assert!(result.is_err());
    assert!(m.equals(&before));
}
