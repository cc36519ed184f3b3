// src/state.rs
use crate::config::Config;
use crate::model::{get_element, ElementInfo};
use crate::model::shells::drawable_capacity;

/// The three adjustable counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleType {
    Proton,
    Neutron,
    Electron,
}

impl ParticleType {
    pub fn label(self) -> &'static str {
        match self {
            ParticleType::Proton => "proton",
            ParticleType::Neutron => "neutron",
            ParticleType::Electron => "electron",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtomState {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
}

impl AtomState {
    pub fn new(protons: u32, neutrons: u32, electrons: u32) -> Self {
        Self { protons, neutrons, electrons }
    }

    fn slot(&mut self, kind: ParticleType) -> &mut u32 {
        match kind {
            ParticleType::Proton => &mut self.protons,
            ParticleType::Neutron => &mut self.neutrons,
            ParticleType::Electron => &mut self.electrons,
        }
    }

    pub fn add(&mut self, kind: ParticleType) {
        let slot = self.slot(kind);
        *slot = slot.saturating_add(1);
    }

    /// Returns false (and leaves the state untouched) when the count is already 0.
    pub fn remove(&mut self, kind: ParticleType) -> bool {
        let slot = self.slot(kind);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn mass_number(&self) -> u32 {
        self.protons + self.neutrons
    }

    /// Net charge: positive for cations, negative for anions.
    pub fn charge(&self) -> i64 {
        self.protons as i64 - self.electrons as i64
    }

    pub fn element(&self) -> ElementInfo {
        get_element(self.protons)
    }

    /// "P:x, N:y, E:z" as printed on exported images
    pub fn configuration(&self) -> String {
        format!("P:{}, N:{}, E:{}", self.protons, self.neutrons, self.electrons)
    }
}

pub struct AppState {
    pub atom: AtomState,
    /// Free-text element guess, printed on exports.
    pub label: String,
    pub config: Config,
    /// Seed for the nucleus shuffle. Re-rolled whenever the counts change.
    pub nucleus_seed: u64,
    /// Frame clock time (ms) of the latest animation tick.
    pub clock_ms: f64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            atom: AtomState::default(),
            label: String::new(),
            config: Config::default(),
            nucleus_seed: rand::random(),
            clock_ms: 0.0,
        }
    }

    pub fn load_config(&mut self) {
        let (config, msg) = Config::load();
        log::info!("{}", msg);
        self.config = config;
    }

    pub fn add_particle(&mut self, kind: ParticleType) {
        self.atom.add(kind);
        self.nucleus_seed = rand::random();
        log::info!("Added {} ({})", kind.label(), self.atom.configuration());

        if kind == ParticleType::Electron && self.atom.electrons > drawable_capacity() {
            log::warn!(
                "{} electrons exceed the {} drawable shell slots; extras are not shown",
                self.atom.electrons,
                drawable_capacity()
            );
        }
    }

    /// Returns true when something changed and a redraw is needed.
    pub fn remove_particle(&mut self, kind: ParticleType) -> bool {
        if !self.atom.remove(kind) {
            return false;
        }
        self.nucleus_seed = rand::random();
        log::info!("Removed {} ({})", kind.label(), self.atom.configuration());
        true
    }

    pub fn reset(&mut self) {
        self.atom.reset();
        self.label.clear();
        self.nucleus_seed = rand::random();
        log::info!("Atom reset");
    }

    /// Text for the read-out panel, refreshed after every mutation.
    pub fn summary(&self) -> String {
        let element = self.atom.element();
        format!(
            "Protons: {}\nNeutrons: {}\nElectrons: {}\nMass number: {}\nCharge: {:+}\nElement: {} ({})",
            self.atom.protons,
            self.atom.neutrons,
            self.atom.electrons,
            self.atom.mass_number(),
            self.atom.charge(),
            element.name,
            element.symbol,
        )
    }
}
