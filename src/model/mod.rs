//src/model/mod.rs
pub mod category;
pub mod electrons;
pub mod element;
pub mod positions;

// Re-exports for cleaner imports
pub use category::Category;
pub use electrons::{Orbital, Subshell};
pub use element::{Compound, ElementRecord};
pub use positions::{get_position, Position};
