use super::{painter, scene::AtomRenderer};
use crate::state::{AppState, AtomState};
use std::path::Path;
use thiserror::Error;

const NO_LABEL: &str = "No_Guess";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cairo drawing failed: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),
    #[error("could not write image: {0}")]
    Io(#[from] std::io::Error),
}

/// A rendered still, ready to be handed to a save dialog.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub filename: String,
    pub png: Vec<u8>,
}

/// Trimmed label, or the placeholder when the user left it blank.
pub fn caption_label(label: &str) -> &str {
    match label.trim() {
        "" => NO_LABEL,
        trimmed => trimmed,
    }
}

/// Every character outside [A-Za-z0-9] becomes '_'.
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

pub fn export_filename(label: &str, atom: &AtomState) -> String {
    format!(
        "{}_(P{}-N{}-E{}).png",
        sanitize_label(caption_label(label)),
        atom.protons,
        atom.neutrons,
        atom.electrons
    )
}

pub fn caption_lines(label: &str, atom: &AtomState) -> Vec<String> {
    vec![
        format!("Element Guess: {}", caption_label(label)),
        format!("Configuration: {}", atom.configuration()),
    ]
}

/// Renders the frozen (t = 0) frame with the caption overlay and encodes it.
/// The live view draws on its own surface, so it is untouched by this.
pub fn export_png(state: &AppState) -> Result<ExportedImage, ExportError> {
    let settings = &state.config.export;
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, settings.width, settings.height)?;
    {
        let cr = cairo::Context::new(&surface)?;
        AtomRenderer::new(&state.config.style, state.nucleus_seed).draw(
            &cr,
            settings.width as f64,
            settings.height as f64,
            &state.atom,
            state.clock_ms,
            true,
        )?;
        painter::draw_caption(&cr, &caption_lines(&state.label, &state.atom), settings)?;
    }

    let mut png = Vec::new();
    surface.write_to_png(&mut png)?;

    Ok(ExportedImage {
        filename: export_filename(&state.label, &state.atom),
        png,
    })
}

pub fn save_png(image: &ExportedImage, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, &image.png)?;
    log::info!("Exported {} ({} bytes)", path.display(), image.png.len());
    Ok(())
}
