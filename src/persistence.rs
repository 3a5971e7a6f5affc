//! Parameter serialization and persistence
//!
//! This module saves and loads kernel hyperparameters, together with the
//! kernel they belong to, so the CLI can reuse them across invocations.

use crate::core::{KernelError, Params, Result};
use crate::kernel::{Kernel, KernelKind};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Serializable representation of a kernel and its hyperparameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableParams {
    /// Kernel identifier
    pub kernel: KernelKind,
    /// Declared input dimensionality
    pub ndims: Option<usize>,
    /// Lengthscale entries (one, or one per dimension for ARD)
    pub lengthscale: Vec<f64>,
    /// Kernel variance
    pub variance: f64,
    /// File metadata
    pub metadata: ParamsMetadata,
}

/// On-disk layout with every field optional, so absent keys can be reported
/// by name
#[derive(Deserialize)]
struct StoredParams {
    kernel: Option<KernelKind>,
    ndims: Option<usize>,
    lengthscale: Option<Vec<f64>>,
    variance: Option<f64>,
    metadata: Option<ParamsMetadata>,
}

impl TryFrom<StoredParams> for SerializableParams {
    type Error = KernelError;

    fn try_from(stored: StoredParams) -> Result<Self> {
        let missing = |key: &str| KernelError::MissingParameter(format!("missing key `{key}`"));
        Ok(Self {
            kernel: stored.kernel.ok_or_else(|| missing("kernel"))?,
            ndims: stored.ndims,
            lengthscale: stored.lengthscale.ok_or_else(|| missing("lengthscale"))?,
            variance: stored.variance.ok_or_else(|| missing("variance"))?,
            metadata: stored.metadata.ok_or_else(|| missing("metadata"))?,
        })
    }
}

/// Metadata for tracking and validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsMetadata {
    /// Library version used to write the file
    pub library_version: String,
    /// Creation timestamp
    pub created_at: String,
}

impl SerializableParams {
    /// Capture a kernel and a parameter set
    pub fn new(kind: KernelKind, ndims: Option<usize>, params: &Params) -> Self {
        Self {
            kernel: kind,
            ndims,
            lengthscale: params.lengthscale().to_vec(),
            variance: params.variance(),
            metadata: ParamsMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Rebuild the kernel described by this file
    pub fn build_kernel(&self) -> Result<Box<dyn Kernel>> {
        self.kernel.build(self.ndims)
    }

    /// Rebuild and validate the parameter set against the stored kernel
    pub fn to_params(&self) -> Result<Params> {
        let params = Params::from_vec(self.lengthscale.clone(), self.variance)?;
        self.build_kernel()?.check_params(&params)?;
        Ok(params)
    }

    /// Save parameters to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(KernelError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| KernelError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load parameters from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(KernelError::IoError)?;
        let reader = BufReader::new(file);
        let stored: StoredParams = serde_json::from_reader(reader)
            .map_err(|e| KernelError::SerializationError(e.to_string()))?;
        Self::try_from(stored)
    }

    /// Print parameter summary
    pub fn print_summary(&self) {
        println!("=== Kernel Parameters ===");
        println!("Kernel: {}", self.kernel);
        match self.ndims {
            Some(n) => println!("Dimensions: {n}"),
            None => println!("Dimensions: any"),
        }
        println!("ARD: {}", matches!(self.ndims, Some(n) if n > 1));
        println!("Lengthscale: {:?}", self.lengthscale);
        println!("Variance: {}", self.variance);
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_params_serialization() -> Result<()> {
        let params = Params::from_vec(vec![0.5, 2.0, 1.0], 3.0)?;
        let serializable = SerializableParams::new(KernelKind::Matern52, Some(3), &params);

        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        serializable.save_to_file(temp_file.path())?;

        let loaded = SerializableParams::load_from_file(temp_file.path())?;
        assert_eq!(loaded.kernel, KernelKind::Matern52);
        assert_eq!(loaded.ndims, Some(3));
        assert_eq!(loaded.to_params()?, params);
        assert_eq!(loaded.build_kernel()?.name(), "matern52");

        Ok(())
    }

    #[test]
    fn test_to_params_rejects_ard_mismatch() {
        let mut serializable =
            SerializableParams::new(KernelKind::Rbf, Some(3), &Params::ones(3));
        serializable.lengthscale = vec![1.0, 1.0];

        assert!(matches!(
            serializable.to_params(),
            Err(KernelError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_load_rejects_missing_key() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(
            temp_file,
            r#"{{"kernel": "rbf", "ndims": null, "lengthscale": [1.0],
               "metadata": {{"library_version": "0.1.0", "created_at": ""}}}}"#
        )
        .expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        match SerializableParams::load_from_file(temp_file.path()) {
            Err(KernelError::MissingParameter(msg)) => assert!(msg.contains("variance")),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_missing_lengthscale() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(
            temp_file,
            r#"{{"kernel": "matern32", "ndims": 2, "variance": 1.0,
               "metadata": {{"library_version": "0.1.0", "created_at": ""}}}}"#
        )
        .expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        match SerializableParams::load_from_file(temp_file.path()) {
            Err(KernelError::MissingParameter(msg)) => assert!(msg.contains("lengthscale")),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, r#"{{"kernel": "rbf", "variance": "#).expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        assert!(matches!(
            SerializableParams::load_from_file(temp_file.path()),
            Err(KernelError::SerializationError(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_kernel() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(
            temp_file,
            r#"{{"kernel": "cosine", "ndims": null, "lengthscale": [1.0], "variance": 1.0,
               "metadata": {{"library_version": "0.1.0", "created_at": ""}}}}"#
        )
        .expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        assert!(SerializableParams::load_from_file(temp_file.path()).is_err());
    }
}
