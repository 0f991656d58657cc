pub mod ops;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("Allocation Error: could not reserve storage for {dimension} coordinates")]
    AllocationError { dimension: usize },
    #[error("Dimension Mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("Undefined Angle: operand is all zeros or has a non-finite coordinate")]
    UndefinedAngle,
    #[error("Insufficient Elements: dimension {dimension} but only {supplied} supplied")]
    InsufficientElements { dimension: usize, supplied: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use ops::{add_vector, scalar_product, sub_vector, vector_angle, vector_length};
pub use utils::{cosine_similarity, euclidean_distance};
pub use vector::Vector;
