// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogOptions, EvictionPolicy};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
  Error,
  Warn,
  Info,
  Debug,
  Trace,
}

impl LogLevel {
  pub fn to_filter(self) -> log::LevelFilter {
    match self {
      LogLevel::Error => log::LevelFilter::Error,
      LogLevel::Warn => log::LevelFilter::Warn,
      LogLevel::Info => log::LevelFilter::Info,
      LogLevel::Debug => log::LevelFilter::Debug,
      LogLevel::Trace => log::LevelFilter::Trace,
    }
  }

  /// One step more verbose per count, saturating at Trace.
  pub fn raised(self, steps: u8) -> Self {
    let order = [LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug, LogLevel::Trace];
    let current = order.iter().position(|l| *l == self).unwrap_or(0);
    order[(current + steps as usize).min(order.len() - 1)]
  }
}

// --- Search ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
  pub cache_entries: usize,
  pub max_cached_query_len: usize,
  pub eviction: EvictionPolicy,
  /// Build the index on a background worker instead of blocking startup.
  pub background_load: bool,
}

impl Default for SearchSettings {
  fn default() -> Self {
    let opts = CatalogOptions::default();
    Self {
      cache_entries: opts.cache_entries,
      max_cached_query_len: opts.max_cached_query_len,
      eviction: opts.eviction,
      background_load: true,
    }
  }
}

// --- Display ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
  pub bohr_orbit_radius: f64,
  pub max_results: usize,
  pub use_color: bool,
}

impl Default for DisplaySettings {
  fn default() -> Self {
    Self {
      bohr_orbit_radius: 160.0,
      max_results: 50,
      use_color: true,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  /// Replaces the bundled dataset when set.
  #[serde(default)]
  pub dataset_path: Option<PathBuf>,

  #[serde(default)]
  pub search: SearchSettings,

  #[serde(default)]
  pub display: DisplaySettings,

  #[serde(default = "default_log_level")]
  pub log_level: LogLevel,
}

fn default_log_level() -> LogLevel {
  LogLevel::Warn
}

impl Default for Config {
  fn default() -> Self {
    Self {
      dataset_path: None,
      search: SearchSettings::default(),
      display: DisplaySettings::default(),
      log_level: default_log_level(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/elementii/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> Result<String, String> {
    self.save_to(&Self::get_path())
  }

  /// Ok carries the confirmation, Err the reason the write failed.
  pub fn save_to(&self, path: &Path) -> Result<String, String> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)
        .map_err(|e| format!("Could not create config directory: {}", e))?;
    }

    let file = File::create(path).map_err(|e| format!("Could not create config file: {}", e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, self)
      .map_err(|e| format!("Failed to save config: {}", e))?;
    Ok(format!("Config saved to {:?}", path))
  }

  pub fn catalog_options(&self) -> CatalogOptions {
    CatalogOptions {
      cache_entries: self.search.cache_entries,
      max_cached_query_len: self.search.max_cached_query_len,
      eviction: self.search.eviction,
    }
  }

  pub fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "elementii", "elementii") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (cfg, msg) = Config::load_from(&dir.path().join("settings.json"));
    assert_eq!(cfg, Config::default());
    assert!(msg.contains("defaults"));
  }

  #[test]
  fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut cfg = Config::default();
    cfg.search.cache_entries = 32;
    cfg.search.eviction = EvictionPolicy::Lfu;
    cfg.dataset_path = Some(PathBuf::from("/data/elements.json"));
    cfg.log_level = LogLevel::Debug;

    cfg.save_to(&path).unwrap();

    let (loaded, _) = Config::load_from(&path);
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.catalog_options().cache_entries, 32);
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "log_level": "Info" }"#).unwrap();

    let (cfg, _) = Config::load_from(&path);
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.search, SearchSettings::default());
  }

  #[test]
  fn test_garbage_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "not json").unwrap();

    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));
  }

  #[test]
  fn test_save_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    // parent "directory" is a regular file, so nothing can be created under it
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let err = Config::default().save_to(&blocker.join("settings.json")).unwrap_err();
    assert!(err.starts_with("Could not create config directory"), "{}", err);
  }

  #[test]
  fn test_log_level_raise_saturates() {
    assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
    assert_eq!(LogLevel::Warn.raised(9), LogLevel::Trace);
    assert_eq!(LogLevel::Error.raised(0), LogLevel::Error);
  }
}
