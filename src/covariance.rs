//! Gram and cross-covariance matrix construction
//!
//! Both builders validate parameters and point sets once, then evaluate the
//! kernel without further checks.

use crate::core::{KernelError, Params, Result};
use crate::kernel::Kernel;
use log::debug;
use ndarray::{Array2, ArrayBase, Axis, Data, Ix2};

/// Covariance between two point sets
///
/// Returns a matrix of shape `(n1, n2)` where `n1 = x1.nrows()` and
/// `n2 = x2.nrows()`: the *second* point set indexes rows and the *first*
/// indexes columns, so entry `(i, j)` is `k(x1[i], x2[j])`.
pub fn cross_covariance<K: Kernel + ?Sized>(
    kernel: &K,
    x2: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    x1: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    params: &Params,
) -> Result<Array2<f64>> {
    kernel.check_params(params)?;
    if x1.ncols() != x2.ncols() {
        return Err(KernelError::DimensionMismatch {
            expected: x1.ncols(),
            actual: x2.ncols(),
        });
    }
    kernel.check_points(x1.view(), params)?;
    kernel.check_points(x2.view(), params)?;

    let (n1, n2) = (x1.nrows(), x2.nrows());
    debug!("Building {} cross-covariance of shape ({n1}, {n2})", kernel.name());

    let k = Array2::from_shape_fn((n1, n2), |(i, j)| {
        kernel.evaluate(x1.index_axis(Axis(0), i), x2.index_axis(Axis(0), j), params)
    });
    ensure_finite(kernel, &k)?;
    Ok(k)
}

/// Covariance of a point set with itself
///
/// Only the lower triangle is evaluated and then mirrored, so the result is
/// exactly symmetric.
pub fn gram<K: Kernel + ?Sized>(
    kernel: &K,
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    params: &Params,
) -> Result<Array2<f64>> {
    kernel.check_params(params)?;
    kernel.check_points(x.view(), params)?;

    let n = x.nrows();
    debug!("Building {} gram matrix of shape ({n}, {n})", kernel.name());

    let mut k = Array2::zeros((n, n));
    for i in 0..n {
        let xi = x.index_axis(Axis(0), i);
        for j in 0..=i {
            let value = kernel.evaluate(xi, x.index_axis(Axis(0), j), params);
            k[[i, j]] = value;
            k[[j, i]] = value;
        }
    }
    ensure_finite(kernel, &k)?;
    Ok(k)
}

fn ensure_finite<K: Kernel + ?Sized>(kernel: &K, k: &Array2<f64>) -> Result<()> {
    if let Some(value) = k.iter().find(|v| !v.is_finite()) {
        return Err(KernelError::NonFinite(format!(
            "{} covariance contains {value}",
            kernel.name()
        )));
    }
    Ok(())
}
