//! Hyperparameter initialisation

use crate::core::{ParamBounds, Params};
use crate::kernel::Kernel;
use log::debug;

/// Default hyperparameters of a kernel along with their (lower, upper) bounds
///
/// Lengthscales default to one entry per declared dimension for ARD kernels
/// and a single entry otherwise; every value starts at `1.0`.
pub fn initialise<K: Kernel + ?Sized>(kernel: &K) -> (Params, ParamBounds, ParamBounds) {
    let params = kernel.init_params();
    let (lower, upper) = kernel.param_bounds();
    debug!(
        "Initialised {} parameters: ard={}, lengthscale={}, variance={}",
        kernel.name(),
        kernel.ard(),
        params.lengthscale(),
        params.variance()
    );
    (params, lower, upper)
}
