// src/layout/mod.rs
pub mod bohr;
pub mod grid;

pub use bohr::{BohrLayout, ElectronPosition, Ring};
pub use grid::{row_label, PeriodicGrid, Tile};
