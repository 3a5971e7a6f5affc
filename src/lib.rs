//! Kernel evaluation and covariance matrix construction for Gaussian Processes
//!
//! Provides parametrized covariance functions (RBF and the Matérn family,
//! with optional Automatic Relevance Determination), gram and cross-covariance
//! builders, and the identity/jitter helpers used to stabilise them.

pub mod core;
pub mod covariance;
pub mod data;
pub mod kernel;
pub mod parameters;
pub mod persistence;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::*;
pub use crate::covariance::{cross_covariance, gram};
pub use crate::data::PointSet;
pub use crate::kernel::{Kernel, KernelKind, Matern12, Matern32, Matern52, Rbf};
pub use crate::parameters::initialise;
pub use crate::persistence::SerializableParams;
pub use crate::utils::{add_jitter, identity, jitter};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
