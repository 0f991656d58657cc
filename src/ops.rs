//! Free-function forms of the [`Vector`] arithmetic.

use crate::{vector::Vector, Result};

pub fn scalar_product(v1: &Vector, v2: &Vector) -> Result<f64> {
    v1.dot(v2)
}

pub fn add_vector(v1: &Vector, v2: &Vector) -> Result<Vector> {
    v1.checked_add(v2)
}

pub fn sub_vector(v1: &Vector, v2: &Vector) -> Result<Vector> {
    v1.checked_sub(v2)
}

pub fn vector_length(vector: &Vector) -> f64 {
    vector.length()
}

/// Angle in radians. Fails with `UndefinedAngle` if either operand has zero
/// length.
pub fn vector_angle(v1: &Vector, v2: &Vector) -> Result<f64> {
    v1.angle(v2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VectorError;

    #[test]
    fn test_free_functions_match_methods() {
        let a = Vector::from_elements(&[1.0, 2.0, 3.0]).unwrap();
        let b = Vector::from_elements(&[-2.0, 0.5, 4.0]).unwrap();

        assert_eq!(scalar_product(&a, &b), a.dot(&b));
        assert_eq!(add_vector(&a, &b), a.checked_add(&b));
        assert_eq!(sub_vector(&a, &b), a.checked_sub(&b));
        assert_eq!(vector_length(&a), a.length());
        assert_eq!(vector_angle(&a, &b), a.angle(&b));
    }

    #[test]
    fn test_mismatch_carries_dimensions() {
        let a = Vector::zeros(2).unwrap();
        let b = Vector::zeros(5).unwrap();
        match add_vector(&a, &b) {
            Err(VectorError::DimensionMismatch { left, right }) => {
                assert_eq!((left, right), (2, 5));
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }
}
