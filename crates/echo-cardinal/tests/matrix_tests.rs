// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use echo_cardinal::{ByteMat3, IntMat3, IntVec3, MatrixError};

fn make(cells: [i32; 9]) -> IntMat3 {
    IntMat3::from_rows(
        IntVec3::new(cells[0], cells[1], cells[2]),
        IntVec3::new(cells[3], cells[4], cells[5]),
        IntVec3::new(cells[6], cells[7], cells[8]),
    )
}

#[test]
fn identity_columns_are_world_axes() {
    assert_eq!(IntMat3::IDENTITY.column(0), IntVec3::RIGHT);
    assert_eq!(IntMat3::IDENTITY.column(1), IntVec3::UP);
    assert_eq!(IntMat3::IDENTITY.column(2), IntVec3::FORWARD);
}

#[test]
fn constructor_stores_columns() {
    let m = IntMat3::from_columns(IntVec3::RIGHT, IntVec3::UP, IntVec3::FORWARD);
    assert_eq!(m.column(0), IntVec3::RIGHT);
    assert_eq!(m.column(1), IntVec3::UP);
    assert_eq!(m.column(2), IntVec3::FORWARD);
}

#[test]
fn multiply_point_uses_columns() {
    let m = IntMat3::from_columns(-IntVec3::FORWARD, IntVec3::UP, IntVec3::RIGHT);
    assert_eq!(m.multiply_point(IntVec3::FORWARD), IntVec3::RIGHT);
    assert_eq!(m * IntVec3::FORWARD, IntVec3::RIGHT);
}

#[test]
fn inverse_of_identity_is_identity() {
    assert_eq!(IntMat3::IDENTITY.inverse(), Ok(IntMat3::IDENTITY));
    assert_eq!(ByteMat3::IDENTITY.inverse(), Ok(ByteMat3::IDENTITY));
}

#[test]
fn inverse_of_quarter_turn_is_transpose() {
    let a = make([0, 0, 1, 0, 1, 0, -1, 0, 0]);
    let b = make([0, 0, -1, 0, 1, 0, 1, 0, 0]);
    assert_eq!(a.inverse(), Ok(b));
    assert_eq!(a.transpose(), b);
}

#[test]
fn inverse_of_unimodular_matrix_is_exact() {
    let a = make([1, 0, -3, 2, -2, 1, 0, -1, 3]);
    let b = make([-5, 3, -6, -6, 3, -7, -2, 1, -2]);
    assert_eq!(a.determinant(), 1);
    assert_eq!(a.inverse(), Ok(b));
    assert_eq!(a * b, IntMat3::IDENTITY);
    assert_eq!(b * a, IntMat3::IDENTITY);
}

#[test]
fn adjugate_times_matrix_is_determinant_scaled_identity() {
    let a = make([2, -1, 0, 3, 5, -2, 1, 4, 7]);
    let det = i32::try_from(a.determinant()).unwrap();
    let expected = make([det, 0, 0, 0, det, 0, 0, 0, det]);
    assert_eq!(a.adjugate().unwrap() * a, expected);
    assert_eq!(IntMat3::IDENTITY * det, expected);
}

#[test]
fn inverse_with_negative_determinant() {
    let a = make([0, 1, 0, 1, 0, 0, 0, 0, 1]);
    assert_eq!(a.determinant(), -1);
    assert_eq!(a.inverse(), Ok(a));
}

#[test]
fn singular_matrix_reports_error() {
    assert_eq!(IntMat3::ZERO.inverse(), Err(MatrixError::Singular));
    let err = make([1, 1, 1, 2, 2, 2, 0, 1, 3]).inverse().unwrap_err();
    assert_eq!(err.to_string(), "matrix is singular (determinant is zero)");
}

#[test]
fn narrow_inverse_that_overflows_reports_out_of_range() {
    // det = 1, but the adjugate carries a 200 that i8 cannot hold.
    let m = ByteMat3::try_from_rows(
        IntVec3::new(1, 100, 0),
        IntVec3::new(0, 1, 2),
        IntVec3::new(0, 0, 1),
    )
    .unwrap();
    assert!(matches!(
        m.inverse(),
        Err(MatrixError::OutOfRange { value: 200, .. })
    ));
}

#[test]
fn widen_preserves_cells() {
    let m = ByteMat3::try_from_columns(
        IntVec3::new(-128, 0, 1),
        IntVec3::new(127, -1, 0),
        IntVec3::ZERO,
    )
    .unwrap();
    let wide = m.widen();
    assert_eq!(wide.column(0), IntVec3::new(-128, 0, 1));
    assert_eq!(wide.column(1), IntVec3::new(127, -1, 0));
}

#[test]
fn large_entries_have_exact_determinant() {
    let m = make([100_000, 0, 0, 0, 100_000, 0, 0, 0, 1]);
    assert_eq!(m.cofactor(2, 2), 10_000_000_000);
    assert_eq!(m.determinant(), 10_000_000_000);
    let extreme = make([i32::MAX, 0, 0, 0, i32::MAX, 0, 0, 0, i32::MIN]);
    let expected = i128::from(i32::MAX) * i128::from(i32::MAX) * i128::from(i32::MIN);
    assert_eq!(extreme.determinant(), expected);
}

#[test]
fn adjugate_that_exceeds_i32_reports_out_of_range() {
    let m = make([100_000, 0, 0, 0, 100_000, 0, 0, 0, 1]);
    assert_eq!(
        m.adjugate(),
        Err(MatrixError::OutOfRange {
            row: 2,
            col: 2,
            value: 10_000_000_000
        })
    );
}

#[test]
fn inverse_of_large_diagonal_truncates_without_overflow() {
    // adj = diag(1e5, 1e5, 1e10), det = 1e10.
    let m = make([100_000, 0, 0, 0, 100_000, 0, 0, 0, 1]);
    assert_eq!(m.inverse(), Ok(make([0, 0, 0, 0, 0, 0, 0, 0, 1])));
    let unit = make([1, i32::MAX, 0, 0, 1, 0, 0, 0, 1]);
    assert_eq!(unit.inverse(), Ok(make([1, -i32::MAX, 0, 0, 1, 0, 0, 0, 1])));
}

#[test]
fn products_wrap_instead_of_panicking() {
    let m = make([i32::MAX, 1, 0, 0, 1, 0, 0, 0, 1]);
    let v = IntVec3::new(2, 0, 0);
    assert_eq!(m.multiply_point(v), IntVec3::new(i32::MAX.wrapping_mul(2), 0, 0));
    assert_eq!((m * m).row(0).x(), i32::MAX.wrapping_mul(i32::MAX));
    assert_eq!((m * 2).row(0), IntVec3::new(-2, 2, 0));
}

#[test]
fn scalar_division_truncates() {
    let m = make([7, -7, 6, 0, 1, -1, 3, 9, -9]);
    assert_eq!(m / 2, make([3, -3, 3, 0, 0, 0, 1, 4, -4]));
}
