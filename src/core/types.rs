//! Core type definitions for kernel hyperparameters

use crate::core::{KernelError, Result};
use ndarray::{arr1, Array1};

/// Kernel hyperparameters: `lengthscale` and `variance`
///
/// The lengthscale holds either a single entry (isotropic kernel, broadcast to
/// every input dimension) or one entry per input dimension (ARD kernel).
/// All values are strictly positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    lengthscale: Array1<f64>,
    variance: f64,
}

impl Params {
    /// Parameter names, in creation order
    pub const KEYS: [&'static str; 2] = ["lengthscale", "variance"];

    /// Create a validated parameter set
    pub fn new(lengthscale: Array1<f64>, variance: f64) -> Result<Self> {
        if lengthscale.is_empty() {
            return Err(KernelError::MissingParameter(
                "lengthscale must have at least one entry".to_string(),
            ));
        }
        for (i, &l) in lengthscale.iter().enumerate() {
            check_positive(&format!("lengthscale[{i}]"), l)?;
        }
        check_positive("variance", variance)?;

        Ok(Self {
            lengthscale,
            variance,
        })
    }

    /// Create a parameter set from a plain vector of lengthscales
    pub fn from_vec(lengthscale: Vec<f64>, variance: f64) -> Result<Self> {
        Self::new(Array1::from(lengthscale), variance)
    }

    /// Unit parameters with `n_lengthscales` lengthscale entries
    pub fn ones(n_lengthscales: usize) -> Self {
        Self {
            lengthscale: Array1::ones(n_lengthscales.max(1)),
            variance: 1.0,
        }
    }

    pub fn lengthscale(&self) -> &Array1<f64> {
        &self.lengthscale
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Variance as a length-1 array, matching the shape of the lengthscale entry
    pub fn variance_array(&self) -> Array1<f64> {
        arr1(&[self.variance])
    }

    /// Number of lengthscale entries
    pub fn n_lengthscales(&self) -> usize {
        self.lengthscale.len()
    }

    /// True when a single lengthscale is shared by all dimensions
    pub fn is_isotropic(&self) -> bool {
        self.lengthscale.len() == 1
    }

    pub fn keys(&self) -> [&'static str; 2] {
        Self::KEYS
    }

    /// Named entries as arrays, in key order
    pub fn entries(&self) -> Vec<(&'static str, Array1<f64>)> {
        vec![
            (Self::KEYS[0], self.lengthscale.clone()),
            (Self::KEYS[1], self.variance_array()),
        ]
    }

    /// Lengthscale for input dimension `dim`, broadcasting an isotropic value
    #[inline]
    pub fn lengthscale_at(&self, dim: usize) -> f64 {
        if self.is_isotropic() {
            self.lengthscale[0]
        } else {
            self.lengthscale[dim]
        }
    }
}

/// Lower or upper bounds on each hyperparameter, shaped like [`Params`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParamBounds {
    pub lengthscale: Array1<f64>,
    pub variance: f64,
}

impl ParamBounds {
    /// Bounds with the same value for every lengthscale entry
    pub fn constant(n_lengthscales: usize, lengthscale: f64, variance: f64) -> Self {
        Self {
            lengthscale: Array1::from_elem(n_lengthscales.max(1), lengthscale),
            variance,
        }
    }

    /// Check whether `params` lies inside these bounds, assuming `self` is a lower bound
    pub fn is_below(&self, params: &Params) -> bool {
        self.lengthscale.len() == params.n_lengthscales()
            && self
                .lengthscale
                .iter()
                .zip(params.lengthscale().iter())
                .all(|(b, v)| b <= v)
            && self.variance <= params.variance()
    }

    /// Check whether `params` lies inside these bounds, assuming `self` is an upper bound
    pub fn is_above(&self, params: &Params) -> bool {
        self.lengthscale.len() == params.n_lengthscales()
            && self
                .lengthscale
                .iter()
                .zip(params.lengthscale().iter())
                .all(|(b, v)| b >= v)
            && self.variance >= params.variance()
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(KernelError::InvalidParameter(format!(
            "{name} must be finite, got: {value}"
        )));
    }
    if value <= 0.0 {
        return Err(KernelError::InvalidParameter(format!(
            "{name} must be positive, got: {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_params_creation() {
        let params = Params::new(array![0.5, 2.0], 1.5).unwrap();
        assert_eq!(params.n_lengthscales(), 2);
        assert!(!params.is_isotropic());
        assert_eq!(params.variance(), 1.5);
        assert_eq!(params.variance_array(), array![1.5]);
        assert_eq!(params.keys(), ["lengthscale", "variance"]);
    }

    #[test]
    fn test_params_ones() {
        let params = Params::ones(3);
        assert_eq!(params.lengthscale(), &array![1.0, 1.0, 1.0]);
        assert_eq!(params.variance(), 1.0);

        // Zero collapses to an isotropic lengthscale
        assert_eq!(Params::ones(0).n_lengthscales(), 1);
    }

    #[test]
    fn test_params_rejects_non_positive() {
        assert!(matches!(
            Params::from_vec(vec![0.0], 1.0),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            Params::from_vec(vec![1.0, -0.1], 1.0),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            Params::from_vec(vec![1.0], 0.0),
            Err(KernelError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_params_rejects_non_finite() {
        assert!(matches!(
            Params::from_vec(vec![f64::NAN], 1.0),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            Params::from_vec(vec![1.0], f64::INFINITY),
            Err(KernelError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_params_rejects_empty_lengthscale() {
        assert!(matches!(
            Params::from_vec(vec![], 1.0),
            Err(KernelError::MissingParameter(_))
        ));
    }

    #[test]
    fn test_lengthscale_broadcast() {
        let iso = Params::from_vec(vec![0.3], 1.0).unwrap();
        assert_eq!(iso.lengthscale_at(0), 0.3);
        assert_eq!(iso.lengthscale_at(4), 0.3);

        let ard = Params::from_vec(vec![0.1, 0.2], 1.0).unwrap();
        assert_eq!(ard.lengthscale_at(1), 0.2);
    }

    #[test]
    fn test_entries_order() {
        let params = Params::ones(2);
        let names: Vec<_> = params.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["lengthscale", "variance"]);
    }

    #[test]
    fn test_bounds_containment() {
        let params = Params::from_vec(vec![0.5, 2.0], 3.0).unwrap();
        let lower = ParamBounds::constant(2, 1e-6, 1e-6);
        let upper = ParamBounds::constant(2, 1e2, 1e6);
        assert!(lower.is_below(&params));
        assert!(upper.is_above(&params));

        let tight = ParamBounds::constant(2, 1.0, 1.0);
        assert!(!tight.is_below(&params));
        assert!(!ParamBounds::constant(3, 1e-6, 1e-6).is_below(&params));
    }
}
