// src/catalog/loader.rs
// Background loading with an observable ready state.

use std::sync::{Arc, Condvar, Mutex, OnceLock};
use std::time::Instant;

use super::{CatalogOptions, ElementCatalog};
use crate::error::LoadError;
use crate::io::DataSource;
use crate::model::ElementRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Result of a search issued through a handle.
/// Lets a front end tell "loading" apart from "no matches".
#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    NotReady,
    Failed,
    Results(Vec<&'a ElementRecord>),
}

#[derive(Debug, Default)]
struct Shared {
    slot: OnceLock<Result<ElementCatalog, LoadError>>,
    gate: Mutex<()>,
    done: Condvar,
}

impl Shared {
    fn publish(&self, outcome: Result<ElementCatalog, LoadError>) {
        let _guard = self.gate.lock().unwrap_or_else(|e| e.into_inner());
        if self.slot.set(outcome).is_err() {
            log::warn!("Catalog already published; ignoring second load");
        }
        self.done.notify_all();
    }
}

/// Cheap-to-clone handle to a catalog that may still be loading.
/// Clones share the same slot, so one load serves every holder.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    shared: Arc<Shared>,
}

impl CatalogHandle {
    /// Wraps an already-built catalog.
    pub fn ready(catalog: ElementCatalog) -> Self {
        let handle = Self::pending();
        handle.shared.publish(Ok(catalog));
        handle
    }

    fn pending() -> Self {
        Self {
            shared: Arc::new(Shared::default()),
        }
    }

    /// Decodes and indexes `source` on the current thread.
    pub fn load_blocking(source: DataSource, options: CatalogOptions) -> Self {
        let handle = Self::pending();
        handle.shared.publish(load(&source, options));
        handle
    }

    /// Decodes and indexes `source` on a rayon worker. Returns immediately.
    pub fn spawn_load(source: DataSource, options: CatalogOptions) -> Self {
        let handle = Self::pending();
        let shared = Arc::clone(&handle.shared);
        rayon::spawn(move || {
            shared.publish(load(&source, options));
        });
        handle
    }

    pub fn status(&self) -> CatalogStatus {
        match self.shared.slot.get() {
            None => CatalogStatus::Loading,
            Some(Ok(_)) => CatalogStatus::Ready,
            Some(Err(e)) => CatalogStatus::Failed(e.to_string()),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.shared.slot.get(), Some(Ok(_)))
    }

    /// The catalog, if loading has finished successfully.
    pub fn catalog(&self) -> Option<&ElementCatalog> {
        match self.shared.slot.get() {
            Some(Ok(c)) => Some(c),
            _ => None,
        }
    }

    /// Non-blocking search.
    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        match self.shared.slot.get() {
            None => SearchOutcome::NotReady,
            Some(Err(_)) => SearchOutcome::Failed,
            Some(Ok(c)) => SearchOutcome::Results(c.search(query)),
        }
    }

    /// Blocks until loading finishes.
    pub fn wait(&self) -> Result<&ElementCatalog, &LoadError> {
        let mut guard = self.shared.gate.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if let Some(outcome) = self.shared.slot.get() {
                return outcome.as_ref();
            }
            guard = self
                .shared
                .done
                .wait(guard)
                .unwrap_or_else(|e| e.into_inner());
        }
    }
}

fn load(source: &DataSource, options: CatalogOptions) -> Result<ElementCatalog, LoadError> {
    let started = Instant::now();
    let records = source.load()?;
    let catalog = ElementCatalog::build_with(records, options)?;
    log::info!(
        "Catalog ready: {} elements in {:.1} ms",
        catalog.len(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::io::Write;

    #[test]
    fn test_ready_handle_serves_queries() {
        let catalog = ElementCatalog::build(crate::io::load_bundled().unwrap()).unwrap();
        let handle = CatalogHandle::ready(catalog);
        assert_eq!(handle.status(), CatalogStatus::Ready);
        match handle.search("6") {
            SearchOutcome::Results(found) => assert_eq!(found[0].symbol, "C"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_no_match_differs_from_not_ready() {
        let pending = CatalogHandle::pending();
        assert_eq!(pending.status(), CatalogStatus::Loading);
        assert_eq!(pending.search("xyzzy"), SearchOutcome::NotReady);
        assert!(pending.catalog().is_none());

        let ready = CatalogHandle::load_blocking(DataSource::Bundled, CatalogOptions::default());
        assert_eq!(ready.search("xyzzy"), SearchOutcome::Results(Vec::new()));
    }

    #[test]
    fn test_background_load_reaches_ready() {
        let handle = CatalogHandle::spawn_load(DataSource::Bundled, CatalogOptions::default());
        let clone = handle.clone();
        let catalog = clone.wait().expect("bundled dataset loads");
        assert_eq!(catalog.len(), 118);
        assert!(handle.is_ready());
        assert_eq!(handle.status(), CatalogStatus::Ready);
    }

    #[test]
    fn test_duplicate_dataset_fails_the_handle() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        let rec = r#"{"name":"Carbon","symbol":"C","atomicNumber":6,"atomicWeight":12.011,
            "category":"Nonmetal","fact":"","wikipediaLink":"","applications":[],
            "roomTempState":"Solid","history":""}"#;
        let twin = rec.replace("\"Carbon\"", "\"Carbonium\"").replace("\"C\"", "\"Cx\"");
        write!(tmp, "[{},{}]", rec, twin).unwrap();

        let handle = CatalogHandle::spawn_load(
            DataSource::File(tmp.path().to_path_buf()),
            CatalogOptions::default(),
        );
        match handle.wait() {
            Err(LoadError::Catalog(CatalogError::DuplicateAtomicNumber(6))) => {}
            other => panic!("unexpected {:?}", other.map(|c| c.len())),
        }
        assert!(matches!(handle.status(), CatalogStatus::Failed(_)));
        assert_eq!(handle.search("c"), SearchOutcome::Failed);
    }
}
