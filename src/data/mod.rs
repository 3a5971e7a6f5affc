//! Point set loading and matrix output
//!
//! This module reads point sets from the CSV layout used by the command line
//! interface and writes covariance matrices back out.

pub mod csv;

pub use self::csv::*;
