//! # Materials Catalog
//!
//! Fixed catalog of structural materials with the mechanical properties
//! the simulation needs: elastic modulus, strengths, and the empirical
//! non-linearity coefficient used by the correction model.
//!
//! ## Lookup Policy
//!
//! The catalog is defined once at first use and never mutated. Lookup by
//! name is split in two:
//!
//! - [`lookup`] returns `Option<&Material>` for an exact name match
//! - [`resolve`] falls back to the first catalog entry (Structural Steel)
//!   when the name is unknown
//!
//! The fallback is a deliberate policy, not an error: input forms pass
//! free-form material names and the engine must always produce a result.
//!
//! ## Example
//!
//! ```rust
//! use sim_core::materials::{lookup, resolve};
//!
//! let steel = resolve("Structural Steel");
//! assert_eq!(steel.yield_strength_mpa, 250.0);
//!
//! // Unknown names fall back silently
//! let fallback = resolve("Unobtainium");
//! assert_eq!(fallback.name, "Structural Steel");
//! assert!(lookup("Unobtainium").is_none());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Mechanical properties of a structural material.
///
/// Immutable record; catalog entries live for the life of the process.
/// Invariant: `yield_strength_mpa <= ultimate_strength_mpa`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name, also the lookup key (e.g., "Structural Steel")
    pub name: String,

    /// Elastic modulus E (GPa)
    pub elastic_modulus_gpa: f64,

    /// Yield strength (MPa)
    pub yield_strength_mpa: f64,

    /// Ultimate strength (MPa)
    pub ultimate_strength_mpa: f64,

    /// Poisson ratio (0 - 0.5)
    pub poisson_ratio: f64,

    /// Density (kg/m³)
    pub density_kg_m3: f64,

    /// Coefficient of thermal expansion (µm/m·°C)
    pub thermal_expansion: f64,

    /// Empirical non-linearity coefficient (0 - 1)
    ///
    /// Drives the plastic-strain and large-deflection amplification in
    /// the non-linear correction model. Higher values mean the material
    /// departs from linear behavior more aggressively near yield.
    pub non_linear_factor: f64,
}

impl Material {
    fn new(
        name: &str,
        elastic_modulus_gpa: f64,
        yield_strength_mpa: f64,
        ultimate_strength_mpa: f64,
        poisson_ratio: f64,
        density_kg_m3: f64,
        thermal_expansion: f64,
        non_linear_factor: f64,
    ) -> Self {
        Material {
            name: name.to_string(),
            elastic_modulus_gpa,
            yield_strength_mpa,
            ultimate_strength_mpa,
            poisson_ratio,
            density_kg_m3,
            thermal_expansion,
            non_linear_factor,
        }
    }

    /// Yield strength adjusted for elevated temperature (MPa).
    ///
    /// Above 100 °C the yield strength degrades linearly, floored at 50%
    /// of the room-temperature value:
    ///
    /// ```text
    /// factor = max(0.5, 1 - (t - 100)/1000)
    /// ```
    ///
    /// At or below 100 °C the reference value is returned unchanged.
    /// Both the non-linear correction model and the safety assessment
    /// use this same adjustment.
    pub fn yield_strength_at(&self, temperature_c: f64) -> f64 {
        if temperature_c > 100.0 {
            let factor = (1.0 - (temperature_c - 100.0) / 1000.0).max(0.5);
            self.yield_strength_mpa * factor
        } else {
            self.yield_strength_mpa
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The fixed material catalog.
///
/// The first entry is the default returned by [`resolve`] for unknown
/// names. Properties are representative textbook values, suitable for
/// preliminary estimation rather than certified design.
static CATALOG: Lazy<Vec<Material>> = Lazy::new(|| {
    vec![
        Material::new("Structural Steel", 200.0, 250.0, 400.0, 0.30, 7850.0, 12.0, 0.15),
        Material::new("Aluminum Alloy", 69.0, 276.0, 310.0, 0.33, 2700.0, 23.1, 0.20),
        Material::new("Concrete", 30.0, 25.0, 30.0, 0.20, 2400.0, 10.0, 0.40),
        Material::new("Wood (Pine)", 9.0, 30.0, 40.0, 0.30, 500.0, 5.0, 0.35),
        Material::new("Titanium Alloy", 114.0, 880.0, 950.0, 0.34, 4430.0, 8.6, 0.10),
        Material::new("Reinforced Concrete", 32.0, 50.0, 65.0, 0.20, 2500.0, 10.0, 0.30),
        Material::new("Custom Material", 100.0, 200.0, 300.0, 0.30, 5000.0, 10.0, 0.25),
    ]
});

/// Exact-name lookup into the catalog.
pub fn lookup(name: &str) -> Option<&'static Material> {
    CATALOG.iter().find(|m| m.name == name)
}

/// Resolve a free-form material name, falling back to the first catalog
/// entry when the name is unknown. Never fails.
pub fn resolve(name: &str) -> &'static Material {
    lookup(name).unwrap_or(&CATALOG[0])
}

/// Names of all catalog entries, in catalog order (for selection UIs).
pub fn names() -> Vec<&'static str> {
    CATALOG.iter().map(|m| m.name.as_str()).collect()
}
