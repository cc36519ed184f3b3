// src/layout/nucleus.rs
// Spiral-packed nucleus: protons & neutrons in shuffled order

use crate::utils::geometry::{polar_offset, spiral_point};
use rand::seq::SliceRandom;
use rand::Rng;

/// Spiral tightness relative to the particle radius. Below 2.0 the
/// discs overlap, which is what gives the nucleus its clumped look.
pub const PACKING_FACTOR: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NucleonKind {
    Proton,
    Neutron,
}

impl NucleonKind {
    pub fn glyph(self) -> &'static str {
        match self {
            NucleonKind::Proton => "+",
            NucleonKind::Neutron => "N",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub kind: NucleonKind,
    pub position: (f64, f64),
}

/// Places `protons + neutrons` nucleons on a golden-angle spiral around
/// `center`. Kinds are shuffled first so identical nucleons don't bunch up.
pub fn layout<R: Rng + ?Sized>(
    protons: u32,
    neutrons: u32,
    center: (f64, f64),
    particle_radius: f64,
    rng: &mut R,
) -> Vec<Particle> {
    let mut kinds: Vec<NucleonKind> = std::iter::repeat(NucleonKind::Proton)
        .take(protons as usize)
        .chain(std::iter::repeat(NucleonKind::Neutron).take(neutrons as usize))
        .collect();

    // Fisher-Yates
    kinds.shuffle(rng);

    let radius_scale = particle_radius * PACKING_FACTOR;
    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            let (angle, radius) = spiral_point(i, radius_scale);
            Particle {
                kind,
                position: polar_offset(center, angle, radius),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn count(particles: &[Particle], kind: NucleonKind) -> usize {
        particles.iter().filter(|p| p.kind == kind).count()
    }

    #[test]
    fn test_counts_preserved() {
        let mut rng = StdRng::seed_from_u64(7);
        for (p, n) in [(0, 0), (1, 0), (0, 3), (6, 6), (11, 12), (18, 22)] {
            let nucleus = layout(p, n, (400.0, 400.0), 12.0, &mut rng);
            assert_eq!(nucleus.len(), (p + n) as usize);
            assert_eq!(count(&nucleus, NucleonKind::Proton), p as usize);
            assert_eq!(count(&nucleus, NucleonKind::Neutron), n as usize);
        }
    }

    #[test]
    fn test_empty_nucleus() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(layout(0, 0, (0.0, 0.0), 12.0, &mut rng).is_empty());
    }

    #[test]
    fn test_single_proton_at_center() {
        let mut rng = StdRng::seed_from_u64(1);
        let nucleus = layout(1, 0, (400.0, 300.0), 12.0, &mut rng);
        assert_eq!(nucleus.len(), 1);
        assert_eq!(nucleus[0].kind, NucleonKind::Proton);
        assert_eq!(nucleus[0].position, (400.0, 300.0));
    }

    #[test]
    fn test_positions_follow_spiral() {
        let mut rng = StdRng::seed_from_u64(3);
        let nucleus = layout(2, 2, (0.0, 0.0), 12.0, &mut rng);
        for (i, p) in nucleus.iter().enumerate() {
            let r = p.position.0.hypot(p.position.1);
            let expected = 12.0 * PACKING_FACTOR * (i as f64).sqrt();
            assert!((r - expected).abs() < 1e-9, "index {} r = {}", i, r);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = layout(5, 7, (10.0, 10.0), 12.0, &mut StdRng::seed_from_u64(42));
        let b = layout(5, 7, (10.0, 10.0), 12.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_uniform() {
        // 1 proton among 3 slots: each slot should hold it ~1/3 of the time
        let trials = 30_000;
        let mut hits = [0usize; 3];
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..trials {
            let nucleus = layout(1, 2, (0.0, 0.0), 12.0, &mut rng);
            let slot = nucleus
                .iter()
                .position(|p| p.kind == NucleonKind::Proton)
                .unwrap();
            hits[slot] += 1;
        }
        for (slot, &h) in hits.iter().enumerate() {
            let freq = h as f64 / trials as f64;
            assert!((freq - 1.0 / 3.0).abs() < 0.02, "slot {} freq {}", slot, freq);
        }
    }
}
