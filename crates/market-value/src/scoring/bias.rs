//! Perceived-bias reference data keyed by self-reported ethnicity.
//!
//! This table is loaded from an operator-supplied file and is never bundled.
//! It only feeds the optional "perceived market bias" factor; the real value
//! estimate does not read it. Remove the file from configuration to disable it.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum BiasTableError {
    #[error("bias table could not be parsed: {0}")]
    Csv(#[from] csv::Error),
    #[error("bias table lists '{0}' more than once")]
    Duplicate(String),
    #[error("bias for '{label}' must be a finite number")]
    NonFinite { label: String },
    #[error("failed to open bias table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct BiasRow {
    ethnicity: String,
    bias: f64,
}

/// Signed bias per ethnicity label, matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EthnicityBiasTable {
    entries: HashMap<String, f64>,
}

impl EthnicityBiasTable {
    pub fn from_entries<I, S>(entries: I) -> Result<Self, BiasTableError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = HashMap::new();
        for (label, bias) in entries {
            let label = label.into();
            if !bias.is_finite() {
                return Err(BiasTableError::NonFinite { label });
            }
            let key = normalize_label(&label);
            if table.insert(key, bias).is_some() {
                return Err(BiasTableError::Duplicate(label));
            }
        }
        Ok(Self { entries: table })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BiasTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let rows = csv_reader
            .deserialize::<BiasRow>()
            .map(|record| record.map(|row| (row.ethnicity, row.bias)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(rows)
    }

    pub fn from_path(path: &Path) -> Result<Self, BiasTableError> {
        let file = File::open(path).map_err(|source| BiasTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn bias_for(&self, ethnicity: &str) -> Option<f64> {
        self.entries.get(&normalize_label(ethnicity)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Collapse a signed bias into the factor scale: tailwind 2, headwind -1.
pub fn bias_bucket(bias: f64) -> i8 {
    if bias > 0.0 {
        2
    } else if bias < 0.0 {
        -1
    } else {
        0
    }
}
