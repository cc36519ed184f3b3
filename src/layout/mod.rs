pub mod nucleus;
pub mod shells;

pub use nucleus::{NucleonKind, Particle};
pub use shells::ElectronPosition;
