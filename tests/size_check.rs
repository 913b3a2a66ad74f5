#![cfg(feature = "matrix-check")]

use dspmat::format::FixedScale;
use dspmat::{linalg, matrix, Complex, Matrix, MatrixError, MatrixView, Q15};

const SENTINEL: f64 = -7.25;

fn err() -> Result<(), MatrixError> {
    Err(MatrixError::SizeMismatch)
}

#[test]
fn bind_rejects_wrong_length() {
    let mut buf = [0.0_f64; 5];
    assert_eq!(Matrix::bind(2, 3, &mut buf).err(), Some(MatrixError::SizeMismatch));
    assert_eq!(MatrixView::bind(3, 2, &buf[..]).err(), Some(MatrixError::SizeMismatch));
}

#[test]
fn elementwise_shape_mismatch() {
    let a = [1.0_f64; 6];
    let b = [1.0_f64; 6];
    let a23 = MatrixView::bind(2, 3, &a).unwrap();
    let b32 = MatrixView::bind(3, 2, &b).unwrap();
    let mut out = [SENTINEL; 6];

    assert_eq!(matrix::add(&a23, &b32, &mut Matrix::bind(2, 3, &mut out).unwrap()), err());
    assert_eq!(matrix::sub(&a23, &b32, &mut Matrix::bind(2, 3, &mut out).unwrap()), err());
    // output shape wrong
    assert_eq!(
        matrix::add(&a23, &a23, &mut Matrix::bind(3, 2, &mut out).unwrap()),
        err()
    );
    assert_eq!(matrix::scale(&a23, 2.0, &mut Matrix::bind(3, 2, &mut out).unwrap()), err());
    assert_eq!(matrix::transpose(&a23, &mut Matrix::bind(2, 3, &mut out).unwrap()), err());
    assert_eq!(out, [SENTINEL; 6]);
}

#[test]
fn fixed_point_scale_mismatch() {
    let a = [Q15(100); 4];
    let mut out = [Q15(-1); 4];
    let r = matrix::scale(
        &MatrixView::bind(4, 1, &a).unwrap(),
        FixedScale::new(Q15(16384), 0),
        &mut Matrix::bind(2, 2, &mut out).unwrap(),
    );
    assert_eq!(r, err());
    assert_eq!(out, [Q15(-1); 4]);
}

#[test]
fn complex_transpose_mismatch() {
    let a = [Complex::new(1.0_f32, 2.0); 6];
    let mut out = [Complex::new(0.0_f32, 0.0); 6];
    let r = matrix::transpose_complex(
        &MatrixView::bind(2, 3, &a).unwrap(),
        &mut Matrix::bind(2, 3, &mut out).unwrap(),
    );
    assert_eq!(r, err());
    assert_eq!(out, [Complex::new(0.0_f32, 0.0); 6]);
}

#[test]
fn mult_inner_dimension_mismatch() {
    let a = [1.0_f64; 6];
    let b = [1.0_f64; 6];
    let a23 = MatrixView::bind(2, 3, &a).unwrap();
    let b23 = MatrixView::bind(2, 3, &b).unwrap();
    let b32 = MatrixView::bind(3, 2, &b).unwrap();
    let mut out = [SENTINEL; 4];
    let mut scratch = [SENTINEL; 6];

    assert_eq!(matrix::mult(&a23, &b23, &mut Matrix::bind(2, 2, &mut out).unwrap()), err());
    assert_eq!(
        matrix::mult_with_scratch(
            &a23,
            &b23,
            &mut Matrix::bind(2, 2, &mut out).unwrap(),
            &mut scratch
        ),
        err()
    );
    // scratch too short for B^T
    assert_eq!(
        matrix::mult_with_scratch(
            &a23,
            &b32,
            &mut Matrix::bind(2, 2, &mut out).unwrap(),
            &mut scratch[..5]
        ),
        err()
    );
    assert_eq!(
        matrix::mult(&a23, &b32, &mut Matrix::bind(1, 4, &mut out).unwrap()),
        err()
    );
    assert_eq!(out, [SENTINEL; 4]);
    assert_eq!(scratch, [SENTINEL; 6]);
}

#[test]
fn fast_and_complex_mult_mismatch() {
    let a = [Q15(1); 6];
    let mut out = [Q15(-1); 4];
    let av = MatrixView::bind(2, 3, &a).unwrap();
    assert_eq!(
        matrix::mult_fast(&av, &av, &mut Matrix::bind(2, 2, &mut out).unwrap()),
        err()
    );
    assert_eq!(out, [Q15(-1); 4]);

    let c = [Complex::new(1.0_f64, 1.0); 6];
    let mut cout = [Complex::new(SENTINEL, SENTINEL); 4];
    let cv = MatrixView::bind(3, 2, &c).unwrap();
    assert_eq!(
        matrix::cmplx_mult(&cv, &cv, &mut Matrix::bind(2, 2, &mut cout).unwrap()),
        err()
    );
    assert_eq!(cout, [Complex::new(SENTINEL, SENTINEL); 4]);
}

#[test]
fn decompositions_require_square_input() {
    let a = [1.0_f64; 6];
    let a23 = MatrixView::bind(2, 3, &a).unwrap();
    let mut l = [SENTINEL; 6];
    let mut d = [SENTINEL; 6];
    let mut p = [9u16; 2];

    assert_eq!(linalg::cholesky(&a23, &mut Matrix::bind(2, 3, &mut l).unwrap()), err());
    assert_eq!(
        linalg::ldlt(
            &a23,
            &mut Matrix::bind(2, 3, &mut l).unwrap(),
            &mut Matrix::bind(2, 3, &mut d).unwrap(),
            &mut p
        ),
        err()
    );
    assert_eq!(l, [SENTINEL; 6]);
    assert_eq!(d, [SENTINEL; 6]);
    assert_eq!(p, [9, 9]);

    let mut src = a;
    let mut inv = [SENTINEL; 6];
    assert_eq!(
        linalg::inverse(
            &mut Matrix::bind(2, 3, &mut src).unwrap(),
            &mut Matrix::bind(2, 3, &mut inv).unwrap()
        ),
        err()
    );
    assert_eq!(inv, [SENTINEL; 6]);
    assert_eq!(src, a);
}

#[test]
fn ldlt_permutation_length() {
    let a = [2.0_f64, 0.0, 0.0, 2.0];
    let mut l = [SENTINEL; 4];
    let mut d = [SENTINEL; 4];
    let mut p = [9u16; 3];
    let r = linalg::ldlt(
        &MatrixView::bind(2, 2, &a).unwrap(),
        &mut Matrix::bind(2, 2, &mut l).unwrap(),
        &mut Matrix::bind(2, 2, &mut d).unwrap(),
        &mut p,
    );
    assert_eq!(r, err());
    assert_eq!(p, [9; 3]);
}

#[test]
fn qr_shapes_and_scratch() {
    let a = [1.0_f64, 0.0, 0.0, 1.0, 1.0, 1.0];
    let mut r = [SENTINEL; 6];
    let mut q = [SENTINEL; 9];
    let mut tau = [SENTINEL; 2];
    let mut ta = [SENTINEL; 3];
    let mut tb = [SENTINEL; 2];

    // wide input
    let mut wide = a;
    assert_eq!(
        linalg::qr(
            &mut Matrix::bind(2, 3, &mut wide).unwrap(),
            1e-12,
            &mut Matrix::bind(2, 3, &mut r).unwrap(),
            &mut Matrix::bind(2, 2, &mut q[..4]).unwrap(),
            &mut tau,
            &mut ta,
            &mut tb,
        ),
        err()
    );
    assert_eq!(wide, a);

    // scratch `tmp_a` shorter than m
    let mut tall = a;
    assert_eq!(
        linalg::qr(
            &mut Matrix::bind(3, 2, &mut tall).unwrap(),
            1e-12,
            &mut Matrix::bind(3, 2, &mut r).unwrap(),
            &mut Matrix::bind(3, 3, &mut q).unwrap(),
            &mut tau,
            &mut ta[..2],
            &mut tb,
        ),
        err()
    );

    // Q must be m x m
    assert_eq!(
        linalg::qr(
            &mut Matrix::bind(3, 2, &mut tall).unwrap(),
            1e-12,
            &mut Matrix::bind(3, 2, &mut r).unwrap(),
            &mut Matrix::bind(2, 3, &mut q[..6]).unwrap(),
            &mut tau,
            &mut ta,
            &mut tb,
        ),
        err()
    );
    assert_eq!(tall, a);
    assert_eq!(r, [SENTINEL; 6]);
    assert_eq!(q, [SENTINEL; 9]);
    assert_eq!(tau, [SENTINEL; 2]);
}

#[test]
fn triangular_solve_shapes() {
    let t = [1.0_f64, 0.0, 0.0, 1.0];
    let b = [1.0_f64; 6];
    let tv = MatrixView::bind(2, 2, &t).unwrap();
    let b32 = MatrixView::bind(3, 2, &b).unwrap();
    let b23 = MatrixView::bind(2, 3, &b).unwrap();
    let mut x = [SENTINEL; 6];

    assert_eq!(
        linalg::solve_upper_triangular(&tv, &b32, &mut Matrix::bind(3, 2, &mut x).unwrap()),
        err()
    );
    assert_eq!(
        linalg::solve_lower_triangular(&tv, &b23, &mut Matrix::bind(3, 2, &mut x).unwrap()),
        err()
    );
    assert_eq!(x, [SENTINEL; 6]);
}
