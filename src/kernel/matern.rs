//! Matérn family kernels
//!
//! With r = ||(x - y) / ℓ|| the scaled distance:
//! * Matérn 1/2: k = σ² * exp(-r)
//! * Matérn 3/2: k = σ² * (1 + √3 r) * exp(-√3 r)
//! * Matérn 5/2: k = σ² * (1 + √5 r + 5r²/3) * exp(-√5 r)

use crate::core::Params;
use crate::kernel::stationary::scaled_distance;
use crate::kernel::Kernel;
use ndarray::ArrayView1;

macro_rules! matern_kernel {
    ($name:ident, $id:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name {
            ndims: Option<usize>,
        }

        impl $name {
            /// Create a new kernel with optional declared dimensionality
            ///
            /// # Panics
            /// Panics if `ndims` is `Some(0)`
            pub fn new(ndims: Option<usize>) -> Self {
                if let Some(n) = ndims {
                    assert!(n > 0, "Number of dimensions must be positive, got: {}", n);
                }
                Self { ndims }
            }

            /// Create an ARD kernel over `ndims` inputs
            pub fn with_ndims(ndims: usize) -> Self {
                Self::new(Some(ndims))
            }
        }

        impl Kernel for $name {
            fn name(&self) -> &'static str {
                $id
            }

            fn ndims(&self) -> Option<usize> {
                self.ndims
            }

            fn evaluate(&self, x: ArrayView1<f64>, y: ArrayView1<f64>, params: &Params) -> f64 {
                let r = scaled_distance(x, y, params);
                params.variance() * Self::correlation(r)
            }
        }
    };
}

matern_kernel!(Matern12, "matern12", "Matérn 1/2 (exponential) kernel");
matern_kernel!(Matern32, "matern32", "Matérn 3/2 kernel, once mean-square differentiable");
matern_kernel!(Matern52, "matern52", "Matérn 5/2 kernel, twice mean-square differentiable");

// Polynomial prefactors can overflow once the exponential has underflowed,
// so a vanished exponential maps to the zero limit explicitly.

impl Matern12 {
    fn correlation(r: f64) -> f64 {
        (-r).exp()
    }
}

impl Matern32 {
    fn correlation(r: f64) -> f64 {
        let sr = 3.0_f64.sqrt() * r;
        let decay = (-sr).exp();
        if decay == 0.0 {
            return 0.0;
        }
        (1.0 + sr) * decay
    }
}

impl Matern52 {
    fn correlation(r: f64) -> f64 {
        let sr = 5.0_f64.sqrt() * r;
        let decay = (-sr).exp();
        if decay == 0.0 {
            return 0.0;
        }
        (1.0 + sr + 5.0 * r * r / 3.0) * decay
    }
}
