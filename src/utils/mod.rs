// src/utils/mod.rs
pub mod geometry;
pub mod logger;
pub mod report;
