pub mod export;
pub mod painter;
pub mod scene;

// Re-export specific items to keep the API clean for the rest of the app
pub use export::{export_png, save_png};
pub use scene::AtomRenderer;
