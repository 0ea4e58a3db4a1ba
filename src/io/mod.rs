// src/io/mod.rs
pub mod json;

use std::path::PathBuf;

use crate::error::DatasetError;
use crate::model::ElementRecord;

/// The 118-element dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../assets/elements.json");

/// Where element records come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Bundled,
    File(PathBuf),
}

impl DataSource {
    /// A configured path wins over the bundled document.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => DataSource::File(p),
            None => DataSource::Bundled,
        }
    }

    pub fn load(&self) -> Result<Vec<ElementRecord>, DatasetError> {
        match self {
            DataSource::Bundled => load_bundled(),
            DataSource::File(path) => {
                log::debug!("Reading dataset from {:?}", path);
                json::parse_file(path)
            }
        }
    }
}

pub fn load_bundled() -> Result<Vec<ElementRecord>, DatasetError> {
    json::parse_str(BUNDLED_DATASET)
}
