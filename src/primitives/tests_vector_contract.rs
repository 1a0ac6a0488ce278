// =========================================================================
// Vector primitives contract
//
// Algebraic identities every Vector implementation must satisfy.
// =========================================================================

use super::*;

/// Dot product is commutative: dot(u,v) = dot(v,u)
#[test]
fn contract_dot_commutative() {
    let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0, 5.0, 6.0]);

    let uv = u.dot(&v).expect("same dims");
    let vu = v.dot(&u).expect("same dims");

    assert_eq!(uv, vu, "dot(u,v)={uv} != dot(v,u)={vu}");
}

/// length(v) = sqrt(dot(v, v))
#[test]
fn contract_length_is_sqrt_self_dot() {
    let v = Vector::from_slice(&[-3.0, 4.0, 12.0]);
    let len = v.length();
    let via_dot = v.dot(&v).expect("same dims").sqrt();

    assert!(
        (len - via_dot).abs() < 1e-12,
        "length={len}, sqrt(dot(v,v))={via_dot}"
    );
    assert_eq!(len, 13.0);
}

/// Distance is symmetric and zero on the diagonal
#[test]
fn contract_distance_symmetric() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]);

    assert_eq!(
        u.distance(&v).expect("same dims"),
        v.distance(&u).expect("same dims")
    );
    assert_eq!(u.distance(&u).expect("same dims"), 0.0);
}

/// (a + b) - b = a
#[test]
fn contract_add_sub_inverse() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let b = Vector::from_slice(&[0.5, 0.25, 4.0]);

    let back = a.add(&b).and_then(|s| s.sub(&b)).expect("same dims");
    assert_eq!(back, a);
}

/// Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn contract_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]);

    let dot = u.dot(&v).expect("same dims").abs();
    let bound = u.norm() * v.norm();

    assert!(dot <= bound + 1e-12, "|dot|={dot} > norm(u)*norm(v)={bound}");
}
