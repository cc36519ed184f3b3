//src/model/mod.rs
pub mod elements;
pub mod shells;

// Re-exports for cleaner imports
pub use elements::{get_element, ElementInfo};
pub use shells::{Shell, SHELLS};
