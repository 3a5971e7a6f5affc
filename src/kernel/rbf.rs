//! RBF (Radial Basis Function) kernel implementation
//!
//! The RBF kernel is defined as: k(x, y) = σ² * exp(-||x - y||² / (2 * ℓ²))
//! where ℓ (lengthscale) controls how fast covariance decays with distance
//! and σ² (variance) is the marginal variance of the process.

use crate::core::Params;
use crate::kernel::stationary::scaled_squared_distance;
use crate::kernel::Kernel;
use ndarray::ArrayView1;

/// RBF (squared exponential) kernel: k(x, y) = σ² * exp(-||(x - y) / ℓ||² / 2)
///
/// With `ndims > 1` the kernel uses Automatic Relevance Determination: one
/// lengthscale per input dimension, so irrelevant inputs can be damped by a
/// large lengthscale. Without a declared dimensionality a single lengthscale
/// is shared by all inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rbf {
    ndims: Option<usize>,
}

impl Rbf {
    /// Create a new RBF kernel with optional declared dimensionality
    ///
    /// # Panics
    /// Panics if `ndims` is `Some(0)`
    pub fn new(ndims: Option<usize>) -> Self {
        if let Some(n) = ndims {
            assert!(n > 0, "Number of dimensions must be positive, got: {}", n);
        }
        Self { ndims }
    }

    /// Create an ARD RBF kernel over `ndims` inputs
    pub fn with_ndims(ndims: usize) -> Self {
        Self::new(Some(ndims))
    }
}

impl Kernel for Rbf {
    fn name(&self) -> &'static str {
        "rbf"
    }

    fn ndims(&self) -> Option<usize> {
        self.ndims
    }

    fn evaluate(&self, x: ArrayView1<f64>, y: ArrayView1<f64>, params: &Params) -> f64 {
        let squared_distance = scaled_squared_distance(x, y, params);
        // exp underflows to 0 for far apart points, which is the correct limit
        params.variance() * (-0.5 * squared_distance).exp()
    }
}
