use crate::{Result, VectorError};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A real-valued vector whose dimension is fixed when it is built.
///
/// Coordinates are owned by the vector and only ever handed out read-only.
/// Every arithmetic operation returns a fresh vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    /// Copies the first `dimension` values of `elements` into a new vector.
    ///
    /// Values past `dimension` are ignored. Fails with
    /// [`VectorError::InsufficientElements`] when the slice is too short and
    /// with [`VectorError::AllocationError`] when storage can't be reserved.
    pub fn new(dimension: usize, elements: &[f64]) -> Result<Self> {
        if elements.len() < dimension {
            return Err(VectorError::InsufficientElements {
                dimension,
                supplied: elements.len(),
            });
        }
        Self::try_collect(dimension, elements[..dimension].iter().copied())
    }

    pub fn from_elements(elements: &[f64]) -> Result<Self> {
        Self::new(elements.len(), elements)
    }

    pub fn zeros(dimension: usize) -> Result<Self> {
        Self::try_collect(dimension, std::iter::repeat(0.0).take(dimension))
    }

    /// Builds a vector of `dimension` coordinates from `values`, reserving the
    /// storage up front.
    pub(crate) fn try_collect<I>(dimension: usize, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut data = Vec::new();
        data.try_reserve_exact(dimension).map_err(|_| {
            log::trace!("could not reserve storage for {} coordinates", dimension);
            VectorError::AllocationError { dimension }
        })?;
        data.extend(values.into_iter().take(dimension));
        Ok(Self {
            data: Array1::from_vec(data),
        })
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the coordinates in order.
    pub fn elements(&self) -> ArrayView1<'_, f64> {
        self.data.view()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter()
    }

    fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() != other.dimension() {
            log::debug!(
                "dimension mismatch: {} vs {}",
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_dimension(other)?;
        Self::try_collect(
            self.dimension(),
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b)),
        )
    }

    /// Dot product.
    ///
    /// The sum runs left to right from index 0 so results are reproducible
    /// bit for bit; `Array1::dot` splits the sum into lanes and would not be.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(0.0, |sum, (a, b)| sum + a * b))
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        self.data.iter().fold(0.0, |sum, x| sum + x * x).sqrt()
    }

    /// Largest coordinate magnitude, or `None` for an all-zero vector or one
    /// holding a non-finite coordinate.
    fn max_abs(&self) -> Option<f64> {
        if self.data.iter().any(|x| !x.is_finite()) {
            return None;
        }
        let max = self.data.iter().fold(0.0_f64, |max, x| max.max(x.abs()));
        (max > 0.0).then_some(max)
    }

    /// Cosine of the angle between `self` and `other`, clamped to `[-1, 1]`.
    pub(crate) fn cosine(&self, other: &Self) -> Result<f64> {
        let dot = self.dot(other)?;
        let denominator = self.length() * other.length();

        let cosine = if denominator.is_normal() && dot.is_finite() {
            dot / denominator
        } else {
            // Squared coordinates overflowed or underflowed; retry with each
            // operand scaled so its largest coordinate is 1.
            let (scale_a, scale_b) = match (self.max_abs(), other.max_abs()) {
                (Some(a), Some(b)) => (a, b),
                _ => {
                    log::debug!("angle undefined: zero-length or non-finite operand");
                    return Err(VectorError::UndefinedAngle);
                }
            };
            let (dot, sq_a, sq_b) = self.data.iter().zip(other.data.iter()).fold(
                (0.0_f64, 0.0_f64, 0.0_f64),
                |(dot, sq_a, sq_b), (a, b)| {
                    let (x, y) = (a / scale_a, b / scale_b);
                    (dot + x * y, sq_a + x * x, sq_b + y * y)
                },
            );
            dot / (sq_a.sqrt() * sq_b.sqrt())
        };

        if !cosine.is_finite() {
            log::debug!("angle undefined: cosine evaluated to {}", cosine);
            return Err(VectorError::UndefinedAngle);
        }
        // Nearly parallel operands can land just outside the acos domain.
        Ok(cosine.clamp(-1.0, 1.0))
    }

    /// Angle between the two vectors in radians, within `[0, π]`.
    pub fn angle(&self, other: &Self) -> Result<f64> {
        Ok(self.cosine(other)?.acos())
    }
}

/// Takes ownership of `elements` without copying.
impl From<Vec<f64>> for Vector {
    fn from(elements: Vec<f64>) -> Self {
        Self {
            data: Array1::from_vec(elements),
        }
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.data.into_raw_vec()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dimension: {}", self.dimension())?;
        for (i, value) in self.data.iter().enumerate() {
            writeln!(f, "Elem[{}]: {:.6}", i, value)?;
        }
        Ok(())
    }
}
