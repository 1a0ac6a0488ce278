// =========================================================================
// Matrix primitives contract
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn sample_3x3() -> Matrix {
    Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid")
}

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    assert_eq!(a.transpose().transpose(), a);
}

/// Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::filled(2, 3, 1.0);
    let b = Matrix::filled(3, 4, 1.0);
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(c.shape(), (2, 4), "(2x3)*(3x4) shape={:?}", c.shape());
    assert!(c.as_slice().iter().all(|&x| x == 3.0));
}

/// Identity is neutral on both sides: I * A = A = A * I
#[test]
fn contract_identity_matmul() {
    let a = sample_3x3();
    let eye = Matrix::identity(3);

    assert_eq!(eye.matmul(&a).expect("compatible dims"), a);
    assert_eq!(a.matmul(&eye).expect("compatible dims"), a);
}

/// (AB)^T = B^T A^T
#[test]
fn contract_matmul_transpose() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).expect("valid");

    let lhs = a.matmul(&b).expect("compatible dims").transpose();
    let rhs = b
        .transpose()
        .matmul(&a.transpose())
        .expect("compatible dims");
    assert_eq!(lhs, rhs);
}

/// Row i of A*B equals row i of A times B
#[test]
fn contract_matmul_row_is_matvec() {
    let a = sample_3x3();
    let b = sample_3x3().add_scalar(1.0);
    let c = a.matmul(&b).expect("compatible dims");

    for i in 0..3 {
        let via_rows = b
            .transpose()
            .matvec(&a.row(i).expect("row exists"))
            .expect("compatible dims");
        assert_eq!(c.row(i).expect("row exists"), via_rows, "row {i}");
    }
}

/// (A + B) - B = A
#[test]
fn contract_add_sub_inverse() {
    let a = sample_3x3();
    let b = Matrix::filled(3, 3, 0.5);
    let back = a.add(&b).and_then(|s| s.sub(&b)).expect("same shape");
    assert_eq!(back, a);
}

/// Same element count but different shapes are never equal
#[test]
fn contract_shape_mismatch_is_inequality() {
    let a = Matrix::filled(2, 3, 1.0);
    let b = Matrix::filled(3, 2, 1.0);
    assert_eq!(a.as_slice(), b.as_slice());
    assert_ne!(a, b);
}
