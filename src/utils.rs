use crate::{vector::Vector, Result};
use rand::Rng;

/// Cosine similarity in `[-1, 1]`.
///
/// Unlike a silent `0.0`, a zero-length operand is reported as
/// `UndefinedAngle`.
pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> Result<f64> {
    v1.cosine(v2)
}

pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    let diff = v1.checked_sub(v2)?;
    Ok(diff.length())
}

/// Vector of `dimension` coordinates drawn uniformly from `[-1, 1)`.
pub fn random_vector(dimension: usize) -> Result<Vector> {
    let mut rng = rand::thread_rng();
    Vector::try_collect(
        dimension,
        (0..dimension).map(|_| rng.gen_range(-1.0..1.0)),
    )
}

pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    (0..num).map(|_| random_vector(dim)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VectorError;

    #[test]
    fn test_cosine_similarity() {
        let v1 = Vector::from_elements(&[1.0, 0.0, 0.0]).unwrap();
        let v2 = Vector::from_elements(&[0.0, 1.0, 0.0]).unwrap();
        let v3 = Vector::from_elements(&[2.0, 0.0, 0.0]).unwrap();

        assert_eq!(cosine_similarity(&v1, &v2).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&v1, &v3).unwrap(), 1.0);
    }

    #[test]
    fn test_cosine_similarity_zero_length() {
        let v1 = Vector::from_elements(&[1.0, 0.0]).unwrap();
        let zero = Vector::zeros(2).unwrap();
        assert_eq!(
            cosine_similarity(&v1, &zero),
            Err(VectorError::UndefinedAngle)
        );
    }

    #[test]
    fn test_euclidean_distance() {
        let v1 = Vector::from_elements(&[0.0, 0.0]).unwrap();
        let v2 = Vector::from_elements(&[3.0, 4.0]).unwrap();
        assert_eq!(euclidean_distance(&v1, &v2).unwrap(), 5.0);

        let v3 = Vector::zeros(3).unwrap();
        assert!(matches!(
            euclidean_distance(&v1, &v3),
            Err(VectorError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_random_vectors() {
        let vectors = generate_random_vectors(128, 10).unwrap();
        assert_eq!(vectors.len(), 10);
        assert_eq!(vectors[0].dimension(), 128);
        assert!(vectors[0].iter().all(|x| (-1.0..1.0).contains(x)));
    }
}
