//! Matrix utilities: identity, diagonal jitter and covariance diagnostics

use crate::core::{KernelError, Result};
use ndarray::Array2;

/// Default diagonal jitter used to stabilise gram matrices
pub const DEFAULT_JITTER: f64 = 1e-6;

/// The `n x n` identity matrix
pub fn identity(n: usize) -> Array2<f64> {
    Array2::eye(n)
}

/// `eps * I(n)`
pub fn jitter(n: usize, eps: f64) -> Array2<f64> {
    identity(n) * eps
}

/// Add `eps` to the diagonal of a square matrix in place
pub fn add_jitter(matrix: &mut Array2<f64>, eps: f64) -> Result<()> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(KernelError::NotSquare { rows, cols });
    }
    if !eps.is_finite() || eps < 0.0 {
        return Err(KernelError::InvalidParameter(format!(
            "jitter must be finite and non-negative, got: {eps}"
        )));
    }
    matrix.diag_mut().mapv_inplace(|v| v + eps);
    Ok(())
}

/// Structural and numerical checks on covariance matrices
pub mod diagnostics {
    use super::*;
    use linfa_linalg::{cholesky::*, eigh::*};
    use log::{debug, warn};

    /// Summary of the checks run on a covariance matrix
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct CovarianceReport {
        pub size: usize,
        pub symmetric: bool,
        pub positive_definite: bool,
        pub min_eigenvalue: f64,
    }

    /// Whether `matrix` is square and equal to its transpose within `tol`
    pub fn is_symmetric(matrix: &Array2<f64>, tol: f64) -> bool {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return false;
        }
        (0..rows).all(|i| (0..i).all(|j| (matrix[[i, j]] - matrix[[j, i]]).abs() <= tol))
    }

    /// Whether `matrix` admits a Cholesky factorization
    pub fn is_positive_definite(matrix: &Array2<f64>) -> bool {
        match matrix.cholesky() {
            Ok(_) => true,
            Err(e) => {
                debug!("Cholesky factorization failed: {e}");
                false
            }
        }
    }

    /// Smallest eigenvalue of a symmetric matrix
    pub fn min_eigenvalue(matrix: &Array2<f64>) -> Result<f64> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(KernelError::NotSquare { rows, cols });
        }
        if rows == 0 {
            return Err(KernelError::EmptyDataset);
        }
        let (eigenvalues, _) = matrix.to_owned().eigh_into()?;
        Ok(eigenvalues.iter().copied().fold(f64::INFINITY, f64::min))
    }

    /// Run every check on `matrix`
    pub fn report(matrix: &Array2<f64>) -> Result<CovarianceReport> {
        let min_eigenvalue = min_eigenvalue(matrix)?;
        let positive_definite = is_positive_definite(matrix);
        if !positive_definite {
            warn!(
                "Matrix of size {} is not positive definite (min eigenvalue {min_eigenvalue:e})",
                matrix.nrows()
            );
        }
        Ok(CovarianceReport {
            size: matrix.nrows(),
            symmetric: is_symmetric(matrix, 1e-12),
            positive_definite,
            min_eigenvalue,
        })
    }
}
