// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub type Rgb = (f64, f64, f64);
pub type Rgba = (f64, f64, f64, f64);

/// Converts "#rrggbb" literals used for the palette below
fn hex(rgb: u32) -> Rgb {
  (
    ((rgb >> 16) & 0xff) as f64 / 255.0,
    ((rgb >> 8) & 0xff) as f64 / 255.0,
    (rgb & 0xff) as f64 / 255.0,
  )
}

// --- RenderStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
  pub background_color: Rgb,
  pub proton_color: Rgb,
  pub neutron_color: Rgb,
  pub nucleon_outline: Rgba,
  pub nucleon_glyph_color: Rgb,
  pub electron_color: Rgb,
  pub electron_glyph_color: Rgb,
  pub orbit_color: Rgb,
  pub orbit_line_width: f64,
  pub particle_radius: f64,
  pub electron_radius: f64,
  pub glyph_font_size: f64,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      background_color: hex(0x081424),
      proton_color: hex(0xff6347),
      neutron_color: hex(0x6495ed),
      nucleon_outline: (1.0, 1.0, 1.0, 0.5),
      nucleon_glyph_color: (1.0, 1.0, 1.0),
      electron_color: hex(0xffd700),
      electron_glyph_color: hex(0x081424),
      orbit_color: hex(0x87ceeb),
      orbit_line_width: 3.0,
      particle_radius: 12.0,
      electron_radius: 8.0,
      glyph_font_size: 12.0,
    }
  }
}

// --- ExportSettings ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
  pub width: i32,
  pub height: i32,
  pub label_font_size: f64,
  pub label_color: Rgba,
}

impl Default for ExportSettings {
  fn default() -> Self {
    Self {
      width: 800,
      height: 800,
      label_font_size: 20.0,
      label_color: (1.0, 1.0, 1.0, 0.9),
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub style: RenderStyle,

  #[serde(default)]
  pub export: ExportSettings,
}

impl Config {
  /// Loads overrides from the standard OS location (e.g., ~/.config/atomview/settings.json).
  /// The file is optional and never written by the application.
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if !path.exists() {
      return (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      );
    }
    match File::open(path) {
      Ok(file) => {
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
          Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
          Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
        }
      }
      Err(e) => (Self::default(), format!("Error opening config: {}", e)),
    }
  }

  fn get_path() -> PathBuf {
    // Must match the application id in main.rs
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "atomview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_palette_matches_hex() {
    let style = RenderStyle::default();
    assert_eq!(style.proton_color, (1.0, 99.0 / 255.0, 71.0 / 255.0));
    assert_eq!(style.electron_color, (1.0, 215.0 / 255.0, 0.0));
  }

  #[test]
  fn test_partial_json_keeps_defaults() {
    let cfg: Config = serde_json::from_str(r#"{ "style": { "particle_radius": 10.0 } }"#).unwrap();
    assert_eq!(cfg.style.particle_radius, 10.0);
    assert_eq!(cfg.style.electron_radius, 8.0);
    assert_eq!(cfg.export, ExportSettings::default());
  }

  #[test]
  fn test_missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("atomview_missing_settings_0f3a.json");
    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.contains("defaults"));
  }

  #[test]
  fn test_malformed_file_gives_defaults() {
    let path = std::env::temp_dir().join("atomview_bad_settings_test.json");
    std::fs::write(&path, "{ not json").unwrap();
    let (cfg, msg) = Config::load_from(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));
  }
}
