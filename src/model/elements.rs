/// Element names & symbols for the first three periods, indexed by
/// atomic number (proton count). Index 0 stands for "no protons yet".
const ELEMENTS: [(&str, &str); 19] = [
    ("None", "-"),
    // --- Period 1 ---
    ("Hydrogen", "H"), ("Helium", "He"),
    // --- Period 2 ---
    ("Lithium", "Li"), ("Beryllium", "Be"), ("Boron", "B"), ("Carbon", "C"),
    ("Nitrogen", "N"), ("Oxygen", "O"), ("Fluorine", "F"), ("Neon", "Ne"),
    // --- Period 3 ---
    ("Sodium", "Na"), ("Magnesium", "Mg"), ("Aluminum", "Al"), ("Silicon", "Si"),
    ("Phosphorus", "P"), ("Sulfur", "S"), ("Chlorine", "Cl"), ("Argon", "Ar"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Returns the element for a given atomic number (Z)
pub fn get_element(atomic_number: u32) -> ElementInfo {
    match ELEMENTS.get(atomic_number as usize) {
        Some(&(name, symbol)) => ElementInfo { name, symbol },
        None => ElementInfo { name: "Unknown", symbol: "?" },
    }
}
