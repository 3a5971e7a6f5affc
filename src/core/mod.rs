//! Core types for kernel parametrization

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
