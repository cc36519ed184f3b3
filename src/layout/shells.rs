// src/layout/shells.rs
// Electron placement on the three tilted orbits

use crate::model::shells::SHELLS;
use crate::utils::geometry::orbit_point;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronPosition {
    pub shell_index: usize,
    /// Angle on the untilted ellipse, radians
    pub angle: f64,
    pub position: (f64, f64),
}

/// Per-shell electron counts, inner to outer. Electrons beyond the total
/// capacity are dropped.
pub fn partition(electrons: u32) -> [u32; 3] {
    let mut remaining = electrons;
    let mut counts = [0; 3];
    for (count, shell) in counts.iter_mut().zip(SHELLS.iter()) {
        *count = remaining.min(shell.capacity);
        remaining -= *count;
    }
    counts
}

/// Electron positions at clock time `time_ms`. Each shell spreads its
/// electrons evenly and rotates at its own rate.
pub fn layout(electrons: u32, time_ms: f64, center: (f64, f64)) -> Vec<ElectronPosition> {
    let counts = partition(electrons);
    let mut out = Vec::with_capacity(counts.iter().sum::<u32>() as usize);

    for (shell_index, (&n, shell)) in counts.iter().zip(SHELLS.iter()).enumerate() {
        if n == 0 {
            break;
        }
        let phase = time_ms / shell.speed_divisor;
        for i in 0..n {
            let angle = (i as f64 / n as f64) * TAU + phase;
            let (dx, dy) = orbit_point(shell.rx, shell.ry, angle);
            out.push(ElectronPosition {
                shell_index,
                angle,
                position: (center.0 + dx, center.1 + dy),
            });
        }
    }
    out
}
