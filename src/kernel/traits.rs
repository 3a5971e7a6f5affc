//! Kernel trait definition

use crate::core::{KernelError, ParamBounds, Params, Result};
use ndarray::{arr0, Array0, ArrayView1, ArrayView2, Axis};

/// Default lower bound for every hyperparameter
pub const DEFAULT_LOWER_BOUND: f64 = 1e-6;
/// Default upper bound for lengthscales
pub const DEFAULT_LENGTHSCALE_UPPER: f64 = 1e2;
/// Default upper bound for the variance
pub const DEFAULT_VARIANCE_UPPER: f64 = 1e6;

/// Covariance function trait
///
/// A kernel k(x, y) must be symmetric and positive semi-definite so that
/// any gram matrix it produces is a valid covariance matrix.
/// Implementations only provide [`Kernel::evaluate`] and the declared
/// dimensionality; validation is shared through the provided methods.
pub trait Kernel: Send + Sync {
    /// Short identifier of the kernel
    fn name(&self) -> &'static str;

    /// Declared input dimensionality, if any
    fn ndims(&self) -> Option<usize>;

    /// Compute k(x, y) for two points without validation
    ///
    /// Callers must have checked `params` and the point dimensions beforehand,
    /// see [`Kernel::check_params`] and [`Kernel::check_points`].
    fn evaluate(&self, x: ArrayView1<f64>, y: ArrayView1<f64>, params: &Params) -> f64;

    /// Whether the kernel uses one lengthscale per input dimension
    fn ard(&self) -> bool {
        matches!(self.ndims(), Some(n) if n > 1)
    }

    /// Number of lengthscale entries this kernel expects
    fn n_lengthscales(&self) -> usize {
        if self.ard() {
            self.ndims().unwrap_or(1)
        } else {
            1
        }
    }

    /// Default hyperparameters: all ones
    fn init_params(&self) -> Params {
        Params::ones(self.n_lengthscales())
    }

    /// Default (lower, upper) hyperparameter bounds
    fn param_bounds(&self) -> (ParamBounds, ParamBounds) {
        let n = self.n_lengthscales();
        (
            ParamBounds::constant(n, DEFAULT_LOWER_BOUND, DEFAULT_LOWER_BOUND),
            ParamBounds::constant(n, DEFAULT_LENGTHSCALE_UPPER, DEFAULT_VARIANCE_UPPER),
        )
    }

    /// Check that the lengthscale length matches the ARD mode
    fn check_params(&self, params: &Params) -> Result<()> {
        let expected = self.n_lengthscales();
        if params.n_lengthscales() != expected {
            return Err(KernelError::InvalidParameter(format!(
                "{} kernel (ard={}) expects {} lengthscale(s), got {}",
                self.name(),
                self.ard(),
                expected,
                params.n_lengthscales()
            )));
        }
        Ok(())
    }

    /// Check that a point set is finite and has the dimensionality the kernel
    /// and its parameters expect
    fn check_points(&self, x: ArrayView2<f64>, params: &Params) -> Result<()> {
        let dim = x.ncols();
        if let Some(n) = self.ndims() {
            if dim != n {
                return Err(KernelError::DimensionMismatch {
                    expected: n,
                    actual: dim,
                });
            }
        }
        if !params.is_isotropic() && params.n_lengthscales() != dim {
            return Err(KernelError::DimensionMismatch {
                expected: params.n_lengthscales(),
                actual: dim,
            });
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(KernelError::NonFinite(
                "point set contains NaN or infinite coordinates".to_string(),
            ));
        }
        Ok(())
    }

    /// Evaluate the kernel on two single points given as 1xd matrices
    ///
    /// Returns a zero-dimensional array holding k(x, y).
    fn call(&self, x: ArrayView2<f64>, y: ArrayView2<f64>, params: &Params) -> Result<Array0<f64>> {
        for rows in [x.nrows(), y.nrows()] {
            if rows != 1 {
                return Err(KernelError::NotSinglePoint { rows });
            }
        }
        if x.ncols() != y.ncols() {
            return Err(KernelError::DimensionMismatch {
                expected: x.ncols(),
                actual: y.ncols(),
            });
        }
        self.check_params(params)?;
        self.check_points(x, params)?;
        self.check_points(y, params)?;

        let value = self.evaluate(
            x.index_axis(Axis(0), 0),
            y.index_axis(Axis(0), 0),
            params,
        );
        if !value.is_finite() {
            return Err(KernelError::NonFinite(format!(
                "{} kernel evaluated to {value}",
                self.name()
            )));
        }
        Ok(arr0(value))
    }
}
