// src/error.rs

use std::fmt;
use std::io;
use std::path::PathBuf;

// --- 1. CATALOG CONSTRUCTION ---

/// Integrity violations found while indexing a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Empty,
    DuplicateAtomicNumber(u32),
    DuplicateSymbol(String),
    DuplicateName(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "Dataset contains no elements"),
            CatalogError::DuplicateAtomicNumber(z) => {
                write!(f, "Duplicate atomic number {} in dataset", z)
            }
            CatalogError::DuplicateSymbol(s) => write!(f, "Duplicate symbol '{}' in dataset", s),
            CatalogError::DuplicateName(n) => write!(f, "Duplicate name '{}' in dataset", n),
        }
    }
}

impl std::error::Error for CatalogError {}

// --- 2. DATASET DECODING ---

#[derive(Debug)]
pub enum DatasetError {
    Io { path: PathBuf, source: io::Error },
    Parse { line: usize, column: usize, message: String },
    Invalid { atomic_number: u32, reason: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::Io { path, source } => {
                write!(f, "Could not read dataset {:?}: {}", path, source)
            }
            DatasetError::Parse { line, column, message } => write!(
                f,
                "Malformed dataset at line {}, column {}: {}",
                line, column, message
            ),
            DatasetError::Invalid { atomic_number, reason } => {
                write!(f, "Invalid record for element {}: {}", atomic_number, reason)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Parse {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

// --- 3. LOAD PIPELINE (decode + build) ---

#[derive(Debug)]
pub enum LoadError {
    Dataset(DatasetError),
    Catalog(CatalogError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Dataset(e) => write!(f, "{}", e),
            LoadError::Catalog(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Dataset(e) => Some(e),
            LoadError::Catalog(e) => Some(e),
        }
    }
}

impl From<DatasetError> for LoadError {
    fn from(e: DatasetError) -> Self {
        LoadError::Dataset(e)
    }
}

impl From<CatalogError> for LoadError {
    fn from(e: CatalogError) -> Self {
        LoadError::Catalog(e)
    }
}
