//! Covariance kernels for Gaussian Processes

pub mod matern;
pub mod rbf;
mod stationary;
pub mod traits;

pub use self::matern::*;
pub use self::rbf::*;
pub use self::traits::*;

use crate::core::{KernelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a built-in kernel, used by persistence and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelKind {
    Rbf,
    Matern12,
    Matern32,
    Matern52,
}

impl KernelKind {
    pub const ALL: [KernelKind; 4] = [
        KernelKind::Rbf,
        KernelKind::Matern12,
        KernelKind::Matern32,
        KernelKind::Matern52,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KernelKind::Rbf => "rbf",
            KernelKind::Matern12 => "matern12",
            KernelKind::Matern32 => "matern32",
            KernelKind::Matern52 => "matern52",
        }
    }

    /// Instantiate the kernel with an optional declared dimensionality
    pub fn build(&self, ndims: Option<usize>) -> Result<Box<dyn Kernel>> {
        if ndims == Some(0) {
            return Err(KernelError::InvalidParameter(
                "ndims must be positive".to_string(),
            ));
        }
        Ok(match self {
            KernelKind::Rbf => Box::new(Rbf::new(ndims)),
            KernelKind::Matern12 => Box::new(Matern12::new(ndims)),
            KernelKind::Matern32 => Box::new(Matern32::new(ndims)),
            KernelKind::Matern52 => Box::new(Matern52::new(ndims)),
        })
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KernelKind {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        KernelKind::ALL
            .iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                KernelError::InvalidParameter(format!(
                    "Unknown kernel: {s}. Use one of rbf, matern12, matern32, matern52"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_kind_parse() {
        assert_eq!("rbf".parse::<KernelKind>().unwrap(), KernelKind::Rbf);
        assert_eq!(" Matern32 ".parse::<KernelKind>().unwrap(), KernelKind::Matern32);
        assert!("cosine".parse::<KernelKind>().is_err());
    }

    #[test]
    fn test_kernel_kind_build() {
        for kind in KernelKind::ALL {
            let kernel = kind.build(Some(3)).unwrap();
            assert_eq!(kernel.name(), kind.as_str());
            assert!(kernel.ard());
        }
        assert!(KernelKind::Rbf.build(Some(0)).is_err());
    }

    #[test]
    fn test_kernel_kind_serde_name() {
        let json = serde_json::to_string(&KernelKind::Matern52).unwrap();
        assert_eq!(json, "\"matern52\"");
    }
}
