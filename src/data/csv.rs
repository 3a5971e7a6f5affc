//! CSV point sets
//!
//! Supports loading point sets from CSV files where:
//! - Every column is a coordinate
//! - First row can be headers (automatically detected)
//! - Lines starting with `#` and blank lines are ignored

use crate::core::{KernelError, Result};
use ndarray::Array2;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// An `n x d` set of points read from CSV
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Array2<f64>,
}

impl PointSet {
    /// Load a point set from a CSV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(KernelError::IoError)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Load a point set from a reader, detecting a header row
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, true)
    }

    /// Load a point set from a reader with explicit header option
    pub fn from_reader_with_options<R: BufRead>(
        reader: R,
        auto_detect_header: bool,
    ) -> Result<Self> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut first_data_line = true;

        for line in reader.lines() {
            let line = line.map_err(KernelError::IoError)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if first_data_line {
                first_data_line = false;
                if auto_detect_header && Self::is_header_line(line) {
                    continue;
                }
            }

            let row = Self::parse_data_line(line)?;
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(KernelError::ParseError(format!(
                        "Row {} has {} columns, expected {}",
                        rows.len() + 1,
                        row.len(),
                        first.len()
                    )));
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(KernelError::EmptyDataset);
        }

        let n = rows.len();
        let d = rows[0].len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let points = Array2::from_shape_vec((n, d), flat)
            .map_err(|e| KernelError::ParseError(e.to_string()))?;

        Ok(PointSet { points })
    }

    /// Check if a line appears to be a header
    fn is_header_line(line: &str) -> bool {
        let fields: Vec<&str> = line.split(',').collect();
        let non_numeric_count = fields
            .iter()
            .filter(|field| field.trim().parse::<f64>().is_err())
            .count();

        non_numeric_count * 2 > fields.len()
    }

    /// Parse a CSV data line into coordinates
    fn parse_data_line(line: &str) -> Result<Vec<f64>> {
        line.split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<f64>()
                    .map_err(|_| KernelError::ParseError(format!("Invalid value: {field}")))
            })
            .collect()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    /// Dimensionality of each point
    pub fn dim(&self) -> usize {
        self.points.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    pub fn points(&self) -> &Array2<f64> {
        &self.points
    }

    pub fn into_array(self) -> Array2<f64> {
        self.points
    }
}

impl From<Array2<f64>> for PointSet {
    fn from(points: Array2<f64>) -> Self {
        Self { points }
    }
}

/// Write a matrix as CSV, one row per line
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Array2<f64>) -> Result<()> {
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", line.join(",")).map_err(KernelError::IoError)?;
    }
    Ok(())
}
