// src/rendering/painter.rs
// Cairo primitives for the atom frame: orbits, nucleons, electrons & captions

use crate::config::{ExportSettings, RenderStyle, Rgb};
use crate::layout::{ElectronPosition, NucleonKind, Particle};
use crate::model::Shell;
use crate::utils::geometry::ORBIT_ROTATION;
use cairo::{FontSlant, FontWeight};
use std::f64::consts::TAU;

const GLYPH_FONT: &str = "Arial";
const LABEL_FONT: &str = "Montserrat";

fn set_rgb(cr: &cairo::Context, (r, g, b): Rgb) {
    cr.set_source_rgb(r, g, b);
}

/// Draws `text` with its ink box centered on (x, y).
fn draw_centered_text(cr: &cairo::Context, text: &str, x: f64, y: f64) -> Result<(), cairo::Error> {
    let ext = cr.text_extents(text)?;
    cr.move_to(
        x - (ext.width() / 2.0 + ext.x_bearing()),
        y - (ext.height() / 2.0 + ext.y_bearing()),
    );
    cr.show_text(text)
}

// ============================================================================
// BACKGROUND
// ============================================================================

pub fn clear(cr: &cairo::Context, style: &RenderStyle) -> Result<(), cairo::Error> {
    set_rgb(cr, style.background_color);
    cr.paint()
}

// ============================================================================
// ORBITS
// ============================================================================

pub fn draw_orbit(
    cr: &cairo::Context,
    center: (f64, f64),
    shell: &Shell,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    // Build the path in a scaled frame, stroke in the normal one so the
    // line width stays uniform around the ellipse.
    cr.save()?;
    cr.translate(center.0, center.1);
    cr.rotate(ORBIT_ROTATION);
    cr.scale(shell.rx, shell.ry);
    cr.new_sub_path();
    cr.arc(0.0, 0.0, 1.0, 0.0, TAU);
    cr.restore()?;

    set_rgb(cr, style.orbit_color);
    cr.set_line_width(style.orbit_line_width);
    cr.stroke()
}

// ============================================================================
// NUCLEUS
// ============================================================================

pub fn draw_nucleon(
    cr: &cairo::Context,
    particle: &Particle,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    let (x, y) = particle.position;
    let fill = match particle.kind {
        NucleonKind::Proton => style.proton_color,
        NucleonKind::Neutron => style.neutron_color,
    };

    cr.new_path();
    cr.arc(x, y, style.particle_radius, 0.0, TAU);
    set_rgb(cr, fill);
    cr.fill_preserve()?;

    let (r, g, b, a) = style.nucleon_outline;
    cr.set_source_rgba(r, g, b, a);
    cr.set_line_width(1.0);
    cr.stroke()?;

    set_rgb(cr, style.nucleon_glyph_color);
    cr.select_font_face(GLYPH_FONT, FontSlant::Normal, FontWeight::Bold);
    cr.set_font_size(style.glyph_font_size);
    draw_centered_text(cr, particle.kind.glyph(), x, y)
}

// ============================================================================
// ELECTRONS
// ============================================================================

pub fn draw_electron(
    cr: &cairo::Context,
    electron: &ElectronPosition,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    let (x, y) = electron.position;

    cr.new_path();
    cr.arc(x, y, style.electron_radius, 0.0, TAU);
    set_rgb(cr, style.electron_color);
    cr.fill()?;

    set_rgb(cr, style.electron_glyph_color);
    cr.select_font_face(GLYPH_FONT, FontSlant::Normal, FontWeight::Bold);
    cr.set_font_size(style.glyph_font_size);
    draw_centered_text(cr, "-", x, y + 1.0)
}

// ============================================================================
// CAPTIONS (export overlay)
// ============================================================================

/// Left-aligned caption lines, top baseline at (20, 20) and 30 px apart.
pub fn draw_caption(
    cr: &cairo::Context,
    lines: &[String],
    settings: &ExportSettings,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = settings.label_color;
    cr.set_source_rgba(r, g, b, a);
    cr.select_font_face(LABEL_FONT, FontSlant::Normal, FontWeight::Bold);
    cr.set_font_size(settings.label_font_size);

    let ascent = cr.font_extents()?.ascent();
    for (i, line) in lines.iter().enumerate() {
        // cairo positions text by baseline; shift down so the top edge lands on y
        cr.move_to(20.0, 20.0 + 30.0 * i as f64 + ascent);
        cr.show_text(line)?;
    }
    Ok(())
}
