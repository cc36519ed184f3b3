// src/model/shells.rs

/// One fixed elliptical orbit. Radii are in canvas pixels before the
/// orbit tilt is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shell {
  pub rx: f64,
  pub ry: f64,
  pub capacity: u32,
  /// Milliseconds of clock time per radian of rotation.
  pub speed_divisor: f64,
}

pub const SHELLS: [Shell; 3] = [
  Shell { rx: 120.0, ry: 100.0, capacity: 2, speed_divisor: 2000.0 },
  Shell { rx: 220.0, ry: 180.0, capacity: 8, speed_divisor: 4000.0 },
  Shell { rx: 320.0, ry: 260.0, capacity: 8, speed_divisor: 6000.0 },
];

/// Number of electrons that get a position on screen (2 + 8 + 8).
pub fn drawable_capacity() -> u32 {
  SHELLS.iter().map(|s| s.capacity).sum()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_total_capacity() {
    assert_eq!(drawable_capacity(), 18);
  }

  #[test]
  fn test_outer_shells_are_slower_and_wider() {
    for pair in SHELLS.windows(2) {
      assert!(pair[1].speed_divisor > pair[0].speed_divisor);
      assert!(pair[1].rx > pair[0].rx && pair[1].ry > pair[0].ry);
    }
  }
}
