// src/rendering/scene.rs

use super::painter;
use crate::config::RenderStyle;
use crate::layout::{nucleus, shells};
use crate::model::SHELLS;
use crate::state::AtomState;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Composes a full atom frame: orbits, then nucleus, then electrons on top.
pub struct AtomRenderer<'a> {
  style: &'a RenderStyle,
  nucleus_seed: u64,
}

impl<'a> AtomRenderer<'a> {
  pub fn new(style: &'a RenderStyle, nucleus_seed: u64) -> Self {
    Self { style, nucleus_seed }
  }

  /// Static frames are pinned to t = 0 so exports are reproducible.
  pub fn effective_time(time_ms: f64, is_static: bool) -> f64 {
    if is_static {
      0.0
    } else {
      time_ms
    }
  }

  pub fn draw(
    &self,
    cr: &cairo::Context,
    width: f64,
    height: f64,
    atom: &AtomState,
    time_ms: f64,
    is_static: bool,
  ) -> Result<(), cairo::Error> {
    let center = (width / 2.0, height / 2.0);
    let time = Self::effective_time(time_ms, is_static);

    painter::clear(cr, self.style)?;

    // Orbit outlines only for shells that hold at least one electron
    let occupancy = shells::partition(atom.electrons);
    for (shell, &count) in SHELLS.iter().zip(occupancy.iter()) {
      if count > 0 {
        painter::draw_orbit(cr, center, shell, self.style)?;
      }
    }

    let mut rng = StdRng::seed_from_u64(self.nucleus_seed);
    let particles = nucleus::layout(
      atom.protons,
      atom.neutrons,
      center,
      self.style.particle_radius,
      &mut rng,
    );
    for particle in &particles {
      painter::draw_nucleon(cr, particle, self.style)?;
    }

    for electron in &shells::layout(atom.electrons, time, center) {
      painter::draw_electron(cr, electron, self.style)?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::geometry::orbit_point;
  use cairo::{Format, ImageSurface};
  use std::f64::consts::PI;

  fn render_png(atom: &AtomState, time_ms: f64, is_static: bool, seed: u64) -> Vec<u8> {
    let style = RenderStyle::default();
    let surface = ImageSurface::create(Format::ARgb32, 800, 800).unwrap();
    {
      let cr = cairo::Context::new(&surface).unwrap();
      AtomRenderer::new(&style, seed)
        .draw(&cr, 800.0, 800.0, atom, time_ms, is_static)
        .unwrap();
    }
    let mut png = Vec::new();
    surface.write_to_png(&mut png).unwrap();
    png
  }

  #[test]
  fn test_effective_time() {
    assert_eq!(AtomRenderer::effective_time(1234.5, true), 0.0);
    assert_eq!(AtomRenderer::effective_time(1234.5, false), 1234.5);
  }

  #[test]
  fn test_static_render_ignores_time() {
    let atom = AtomState::new(6, 6, 6);
    let a = render_png(&atom, 0.0, true, 9);
    let b = render_png(&atom, 987_654.0, true, 9);
    assert_eq!(a, b);
  }

  #[test]
  fn test_animated_render_moves_electrons() {
    let atom = AtomState::new(1, 0, 1);
    let a = render_png(&atom, 0.0, false, 9);
    let b = render_png(&atom, 1500.0, false, 9);
    assert_ne!(a, b);
  }

  #[test]
  fn test_same_seed_is_stable() {
    let atom = AtomState::new(8, 9, 0);
    assert_eq!(render_png(&atom, 0.0, false, 5), render_png(&atom, 40.0, false, 5));
  }

  /// For each shell, whether the pixel at angle pi/8 on its tilted ellipse
  /// carries the orbit colour. No electron sits at that angle at t = 0.
  fn orbits_drawn(electrons: u32) -> [bool; 3] {
    let style = RenderStyle::default();
    let mut surface = ImageSurface::create(Format::Rgb24, 800, 800).unwrap();
    {
      let cr = cairo::Context::new(&surface).unwrap();
      AtomRenderer::new(&style, 0)
        .draw(&cr, 800.0, 800.0, &AtomState::new(0, 0, electrons), 0.0, true)
        .unwrap();
    }
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();

    let to_byte = |c: f64| (c * 255.0).round() as i32;
    let (or, og, ob) = style.orbit_color;
    let orbit = [to_byte(or), to_byte(og), to_byte(ob)];

    let mut drawn = [false; 3];
    for (i, shell) in SHELLS.iter().enumerate() {
      let (dx, dy) = orbit_point(shell.rx, shell.ry, PI / 8.0);
      let (x, y) = ((400.0 + dx) as usize, (400.0 + dy) as usize);
      let at = y * stride + x * 4;
      let px = u32::from_ne_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);
      let rgb = [((px >> 16) & 0xff) as i32, ((px >> 8) & 0xff) as i32, (px & 0xff) as i32];
      drawn[i] = rgb.iter().zip(orbit.iter()).all(|(a, b)| (a - b).abs() <= 8);
    }
    drawn
  }

  #[test]
  fn test_orbits_follow_shell_occupancy() {
    assert_eq!(orbits_drawn(0), [false, false, false]);
    assert_eq!(orbits_drawn(1), [true, false, false]);
    assert_eq!(orbits_drawn(2), [true, false, false]);
    assert_eq!(orbits_drawn(3), [true, true, false]);
    assert_eq!(orbits_drawn(10), [true, true, false]);
    assert_eq!(orbits_drawn(11), [true, true, true]);
    assert_eq!(orbits_drawn(25), [true, true, true]);
  }

  #[test]
  fn test_empty_atom_is_plain_background() {
    let style = RenderStyle::default();
    let mut surface = ImageSurface::create(Format::Rgb24, 64, 64).unwrap();
    {
      let cr = cairo::Context::new(&surface).unwrap();
      AtomRenderer::new(&style, 0)
        .draw(&cr, 64.0, 64.0, &AtomState::default(), 0.0, false)
        .unwrap();
    }
    let data = surface.data().unwrap();
    let first = &data[0..4];
    assert!(data.chunks(4).all(|px| px == first));
  }
}
