use super::*;

#[test]
fn test_new() {
    let m = Matrix::new(2, 1);
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 1);
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_filled() {
    let m = Matrix::filled(2, 3, 1.0);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.to_vec(), vec![1.0; 6]);
}

#[test]
fn test_default_is_one_by_one_zero() {
    let m = Matrix::default();
    assert_eq!(m.shape(), (1, 1));
    assert_eq!(m.at(0, 0).expect("in bounds"), 0.0);
}

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.at(0, 0).expect("in bounds"), 1.0);
    assert_eq!(m.at(1, 2).expect("in bounds"), 6.0);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(LinalgError::InvalidArgument { arg: "data", .. })
    ));
}

#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(&[
        Vector::from_slice(&[1.0, 2.0]),
        Vector::from_slice(&[3.0, 4.0]),
        Vector::from_slice(&[5.0, 6.0]),
    ])
    .expect("rows have equal length");
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let ragged = Matrix::from_rows(&[Vector::new(2), Vector::new(3)]);
    assert!(ragged.is_err());
    assert_eq!(Matrix::from_rows(&[]).expect("empty").shape(), (0, 0));
}

#[test]
fn test_identity() {
    let m = Matrix::identity(5);
    assert_eq!(m.shape(), (5, 5));
    for i in 0..5 {
        for j in 0..5 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(m.at(i, j).expect("in bounds"), expected);
        }
    }
    assert_eq!(Matrix::identity(0).shape(), (0, 0));
}

#[test]
fn test_set_element() {
    let mut m = Matrix::new(2, 3);
    m.set(1, 2, 4.0).expect("in bounds");
    *m.at_mut(0, 1).expect("in bounds") = -1.0;
    assert_eq!(m.as_slice(), &[0.0, -1.0, 0.0, 0.0, 0.0, 4.0]);
}

#[test]
fn test_at_out_of_range() {
    let m = Matrix::new(2, 3);
    assert!(m.at(2, 0).is_err());
    assert_eq!(
        m.at(0, 3),
        Err(LinalgError::IndexOutOfRange {
            index: "(0, 3)".to_string(),
            len: "(2, 3)".to_string(),
        })
    );
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1).expect("row 1 exists");
    assert_eq!(row.dims(), 3);
    assert_eq!(row.as_slice(), &[4.0, 5.0, 6.0]);
    assert!(m.row(2).is_err());
}

#[test]
fn test_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let col = m.col(1).expect("column 1 exists");
    assert_eq!(col.dims(), 2);
    assert_eq!(col.as_slice(), &[2.0, 5.0]);
    assert!(m.column(3).is_err());
}

#[test]
fn test_row_is_a_copy() {
    let mut m = Matrix::filled(2, 2, 1.0);
    let row = m.row(0).expect("row 0 exists");
    m.set(0, 0, 9.0).expect("in bounds");
    assert_eq!(row.as_slice(), &[1.0, 1.0]);
}

#[test]
fn test_add() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2");
    let b = Matrix::filled(2, 2, 10.0);
    let c = a.add(&b).expect("same shape");
    assert_eq!(c.as_slice(), &[11.0, 12.0, 13.0, 14.0]);
}

#[test]
fn test_sub() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2");
    let b = Matrix::filled(2, 2, 1.0);
    let c = a.sub(&b).expect("same shape");
    assert_eq!(c.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_add_sub_reject_mismatched_shapes() {
    let a = Matrix::new(1, 2);
    let b = Matrix::new(2, 1);
    assert!(matches!(
        a.add(&b),
        Err(LinalgError::DimensionMismatch { op: "add", .. })
    ));
    assert!(matches!(
        a.sub(&b),
        Err(LinalgError::DimensionMismatch { op: "sub", .. })
    ));
}

#[test]
fn test_equality_requires_same_shape() {
    assert_ne!(Matrix::new(1, 2), Matrix::new(2, 1));
    assert_eq!(Matrix::filled(2, 2, 3.0), Matrix::filled(2, 2, 3.0));
    let mut m = Matrix::filled(2, 2, 3.0);
    m.set(1, 1, 3.5).expect("in bounds");
    assert_ne!(m, Matrix::filled(2, 2, 3.0));
}

#[test]
fn test_matmul_square() {
    let a = Matrix::filled(2, 2, 2.0);
    let b = Matrix::filled(2, 2, 3.0);
    let c = a.matmul(&b).expect("inner dims agree");
    assert_eq!(c, Matrix::filled(2, 2, 12.0));
}

#[test]
fn test_matmul() {
    // 2x3 * 3x2 = 2x2
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0])
        .expect("test data has correct dimensions: 3*2=6 elements");
    let c = a
        .matmul(&b)
        .expect("matrix dimensions are compatible for multiplication: 2x3 * 3x2");

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*7 + 2*9 + 3*11
    assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn test_matmul_dimension_mismatch() {
    let a = Matrix::new(2, 3);
    let b = Matrix::new(2, 3);
    let err = a.matmul(&b).expect_err("3 != 2");
    assert!(err.to_string().starts_with("matmul: dimension mismatch"));
}

#[test]
fn test_matmul_empty_inner_dimension() {
    let a = Matrix::new(2, 0);
    let b = Matrix::new(0, 3);
    assert_eq!(a.matmul(&b).expect("0 == 0"), Matrix::new(2, 3));
}

#[test]
fn test_matvec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("2x3");
    let v = Vector::from_slice(&[1.0, 0.0, -1.0]);
    assert_eq!(m.matvec(&v).expect("3 == 3").as_slice(), &[-2.0, -2.0]);
    assert!(m.matvec(&Vector::new(2)).is_err());
    assert_eq!(
        Matrix::new(3, 0).matvec(&Vector::new(0)).expect("0 == 0"),
        Vector::new(3)
    );
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.at(0, 1).expect("in bounds"), 4.0);
    assert_eq!(t.at(2, 1).expect("in bounds"), 6.0);
}

#[test]
fn test_mul_scalar() {
    let m = Matrix::filled(2, 3, 3.0);
    let scaled = m.mul_scalar(2.0);
    assert_eq!(scaled.shape(), (2, 3));
    assert!(scaled.as_slice().iter().all(|&x| x == 6.0));
}

#[test]
fn test_add_scalar() {
    let m = Matrix::identity(2);
    assert_eq!(m.add_scalar(1.0).as_slice(), &[2.0, 1.0, 1.0, 2.0]);
}

#[test]
fn test_clone_is_deep() {
    let a = Matrix::filled(2, 2, 1.0);
    let mut b = a.clone();
    b.set(0, 0, 999.0).expect("in bounds");
    assert_eq!(a.at(0, 0).expect("in bounds"), 1.0);
}

#[test]
fn test_display() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.5]).expect("2x2");
    assert_eq!(m.to_string(), "| 1 2 |\n| 3 4.5 |\n");
    assert_eq!(format!("{:.1}", Matrix::identity(1)), "| 1.0 |\n");
}

#[test]
fn test_shape_overflow_is_rejected() {
    let rows = usize::MAX / 2 + 1;
    assert!(matches!(
        Matrix::try_filled(rows, 2, 0.0),
        Err(LinalgError::InvalidArgument { arg: "shape", .. })
    ));
    assert!(Matrix::try_identity(usize::MAX).is_err());
    assert!(matches!(
        Matrix::from_vec(rows, 2, Vec::new()),
        Err(LinalgError::InvalidArgument { arg: "shape", .. })
    ));
}

#[test]
#[should_panic(expected = "overflows usize")]
fn test_new_panics_on_shape_overflow() {
    let _ = Matrix::new(usize::MAX / 2 + 1, 2);
}

#[test]
fn test_matmul_rejects_overflowing_result_shape() {
    let a = Matrix::new(usize::MAX, 0);
    let b = Matrix::new(0, 2);
    assert!(matches!(
        a.matmul(&b),
        Err(LinalgError::InvalidArgument { arg: "shape", .. })
    ));
}

#[test]
fn test_try_constructors_match_infallible_forms() {
    assert_eq!(Matrix::try_filled(2, 3, 1.5).expect("fits"), Matrix::filled(2, 3, 1.5));
    assert_eq!(Matrix::try_identity(4).expect("fits"), Matrix::identity(4));
}

#[test]
fn test_deserialize_rejects_mismatched_data() {
    let result = serde_json::from_str::<Matrix>(r#"{"data":[1.0],"rows":2,"cols":2}"#);
    let err = result.expect_err("1 element cannot fill a 2x2 matrix");
    assert!(err.to_string().contains("invalid argument 'data'"));

    let overflow = format!(r#"{{"data":[],"rows":{},"cols":2}}"#, usize::MAX);
    assert!(serde_json::from_str::<Matrix>(&overflow).is_err());
}

#[test]
fn test_deserialize_accepts_consistent_data() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2");
    let json = serde_json::to_string(&m).expect("serializes");
    let back: Matrix = serde_json::from_str(&json).expect("consistent payload");
    assert_eq!(back.row(1).expect("row 1 exists").as_slice(), &[3.0, 4.0]);
}
