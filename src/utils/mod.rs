pub mod geometry;
pub mod logger;
