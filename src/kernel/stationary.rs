//! Distance helpers shared by stationary kernels

use crate::core::Params;
use ndarray::ArrayView1;

/// Squared distance after dividing each dimension by its lengthscale
///
/// ||(x - y) / l||² = Σᵢ ((xᵢ - yᵢ) / lᵢ)²
///
/// An isotropic lengthscale is broadcast to every dimension.
pub(crate) fn scaled_squared_distance(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
    params: &Params,
) -> f64 {
    x.iter()
        .zip(y.iter())
        .enumerate()
        .map(|(i, (&xi, &yi))| {
            let diff = (xi - yi) / params.lengthscale_at(i);
            diff * diff
        })
        .sum()
}

/// Euclidean distance after lengthscale scaling
pub(crate) fn scaled_distance(x: ArrayView1<f64>, y: ArrayView1<f64>, params: &Params) -> f64 {
    scaled_squared_distance(x, y, params).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_isotropic_distance() {
        let params = Params::from_vec(vec![2.0], 1.0).unwrap();
        let x = array![1.0, 3.0];
        let y = array![3.0, 3.0];

        // ((1 - 3) / 2)² = 1
        assert_eq!(scaled_squared_distance(x.view(), y.view(), &params), 1.0);
    }

    #[test]
    fn test_ard_distance() {
        let params = Params::from_vec(vec![1.0, 0.5], 1.0).unwrap();
        let x = array![0.0, 0.0];
        let y = array![1.0, 1.0];

        // 1² + 2² = 5
        assert_eq!(scaled_squared_distance(x.view(), y.view(), &params), 5.0);
        assert_eq!(scaled_distance(x.view(), y.view(), &params), 5.0_f64.sqrt());
    }

    #[test]
    fn test_identical_points() {
        let params = Params::ones(1);
        let x = array![0.3, -1.2, 4.0];
        assert_eq!(scaled_squared_distance(x.view(), x.view(), &params), 0.0);
    }
}
