// src/state.rs
use std::path::PathBuf;

use crate::catalog::{CatalogHandle, ElementCatalog};
use crate::config::Config;
use crate::error::LoadError;
use crate::io::DataSource;
use crate::layout::BohrLayout;
use crate::model::ElementRecord;

/// Everything a front end needs: settings plus the (possibly still loading) catalog.
/// Built once at startup and passed down instead of living in a global.
pub struct AppState {
    pub config: Config,
    pub catalog: CatalogHandle,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let catalog = start_load(&config, config.dataset_path.clone());
        Self { config, catalog }
    }

    /// Same as `new`, but `dataset` overrides the configured path.
    pub fn with_dataset(config: Config, dataset: Option<PathBuf>) -> Self {
        let path = dataset.or_else(|| config.dataset_path.clone());
        let catalog = start_load(&config, path);
        Self { config, catalog }
    }

    /// Wraps a catalog that is already built (tests, embedding).
    pub fn with_catalog(config: Config, catalog: ElementCatalog) -> Self {
        Self {
            config,
            catalog: CatalogHandle::ready(catalog),
        }
    }

    pub fn wait_catalog(&self) -> Result<&ElementCatalog, &LoadError> {
        self.catalog.wait()
    }

    pub fn bohr_layout(&self, element: &ElementRecord) -> BohrLayout {
        BohrLayout::for_element(element, self.config.display.bohr_orbit_radius)
    }
}

fn start_load(config: &Config, path: Option<PathBuf>) -> CatalogHandle {
    let source = DataSource::from_path(path);
    let options = config.catalog_options();
    if config.search.background_load {
        CatalogHandle::spawn_load(source, options)
    } else {
        CatalogHandle::load_blocking(source, options)
    }
}
