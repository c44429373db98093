use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One matrix shape to profile.
///
/// The row-major matrix is `rows × cols`; its col-major counterpart is
/// `cols × rows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeConfig {
    pub label: String,
    pub rows: usize,
    pub cols: usize,
    pub iterations: usize,
}

impl ShapeConfig {
    pub fn new(label: impl Into<String>, rows: usize, cols: usize, iterations: usize) -> Self {
        Self {
            label: label.into(),
            rows,
            cols,
            iterations,
        }
    }

    /// Iterations for the file write/read operations. Never zero.
    pub fn io_iterations(&self, divisor: usize) -> usize {
        (self.iterations / divisor.max(1)).max(1)
    }
}

/// Shapes, generation bounds and temp-file placement for a whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub seed: u64,
    pub min_value: i32,
    pub max_value: i32,
    /// Column count for the reshape benchmark; the row count is inferred.
    pub reshape_cols: usize,
    pub io_iteration_divisor: usize,
    /// Left-pad width for operation names in console output.
    pub name_width: usize,
    pub temp_dir: PathBuf,
    pub file_prefix: String,
    pub shapes: Vec<ShapeConfig>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            min_value: 0,
            max_value: 100,
            reshape_cols: 50,
            io_iteration_divisor: 10,
            name_width: 25,
            temp_dir: std::env::temp_dir(),
            file_prefix: "temp".to_string(),
            shapes: vec![
                ShapeConfig::new("Tiny", 100, 100, 100_000),
                ShapeConfig::new("Small", 1_000, 1_000, 10_000),
                ShapeConfig::new("Medium", 10_000, 1_000, 1_000),
                ShapeConfig::new("Large", 100_000, 1_000, 100),
            ],
        }
    }
}

impl SuiteConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_value > self.max_value {
            return Err(ConfigError::Invalid(format!(
                "min_value {} is greater than max_value {}",
                self.min_value, self.max_value
            )));
        }
        if self.reshape_cols == 0 {
            return Err(ConfigError::Invalid("reshape_cols must be positive".into()));
        }
        if self.io_iteration_divisor == 0 {
            return Err(ConfigError::Invalid(
                "io_iteration_divisor must be positive".into(),
            ));
        }
        if self.shapes.is_empty() {
            return Err(ConfigError::Invalid("no shapes configured".into()));
        }
        for s in &self.shapes {
            if s.rows == 0 || s.cols == 0 || s.iterations == 0 {
                return Err(ConfigError::Invalid(format!(
                    "shape '{}' needs non-zero rows, cols and iterations",
                    s.label
                )));
            }
            let elements = s.rows.checked_mul(s.cols).ok_or_else(|| {
                ConfigError::Invalid(format!("shape '{}' is too large", s.label))
            })?;
            if elements % self.reshape_cols != 0 {
                return Err(ConfigError::Invalid(format!(
                    "shape '{}' ({} elements) cannot be reshaped to {} columns",
                    s.label, elements, self.reshape_cols
                )));
            }
        }
        Ok(())
    }

    /// Keep only shapes whose label matches one of `labels`, ignoring case.
    pub fn retain_labels(&mut self, labels: &[String]) {
        if labels.is_empty() {
            return;
        }
        self.shapes
            .retain(|s| labels.iter().any(|l| l.eq_ignore_ascii_case(&s.label)));
    }

    pub fn cap_iterations(&mut self, max: usize) {
        for s in &mut self.shapes {
            s.iterations = s.iterations.min(max);
        }
    }
}
