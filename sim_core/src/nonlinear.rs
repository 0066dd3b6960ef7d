//! # Non-linear Correction Model
//!
//! Empirical amplification of the linear solver's peak stress and
//! deflection, approximating plasticity near yield and geometric
//! stiffening loss at large deflections without numerical iteration.
//!
//! Both corrections are pass-through below their activation thresholds:
//! stress below half the (temperature-adjusted) yield strength and
//! deflection below the L/250 serviceability limit are returned
//! unchanged, since materials behave linearly well inside those bounds.
//!
//! ## Example
//! ```
//! use sim_core::materials::resolve;
//! use sim_core::nonlinear::correct_stress;
//!
//! let steel = resolve("Structural Steel");
//! // Well below yield: no correction
//! let corrected = correct_stress(50.0, 0.00025, steel, 20.0);
//! assert_eq!(corrected, 50.0);
//! ```

use crate::materials::Material;

/// Apply the empirical plastic-strain amplification to a peak stress.
///
/// `strain` is the nominal extreme-fiber strain, σ/E in consistent units.
/// Below 0.5× the temperature-adjusted yield strength the input passes
/// through unchanged. Above it:
///
/// ```text
/// ratio      = σ / σ_yield_eff
/// plastic    = ratio^(1/k) · (strain/10)
/// σ'         = σ · (1 + plastic·k)       (k = material non-linear factor)
/// ```
///
/// The result never exceeds the material's ultimate strength.
pub fn correct_stress(
    linear_stress_mpa: f64,
    strain: f64,
    material: &Material,
    temperature_c: f64,
) -> f64 {
    let effective_yield = material.yield_strength_at(temperature_c);
    if linear_stress_mpa < 0.5 * effective_yield {
        return linear_stress_mpa;
    }

    let stress_ratio = linear_stress_mpa / effective_yield;
    let plastic_strain = stress_ratio.powf(1.0 / material.non_linear_factor) * (strain / 10.0);
    let corrected = linear_stress_mpa * (1.0 + plastic_strain * material.non_linear_factor);

    corrected.min(material.ultimate_strength_mpa)
}

/// Apply geometric and stress-level amplification to a peak deflection.
///
/// Below the L/250 serviceability threshold the input passes through
/// unchanged. Above it, two multiplicative amplifications apply:
///
/// ```text
/// r           = δ / L            (both in mm)
/// geometric   = 1 + (25r)²·k
/// stress_amp  = 1 + max(0, σ/σ_yield - 0.7)·0.5
/// δ'          = δ · geometric · stress_amp
/// ```
pub fn correct_deflection(
    linear_deflection_mm: f64,
    length_mm: f64,
    material: &Material,
    stress_mpa: f64,
) -> f64 {
    if linear_deflection_mm < length_mm / 250.0 {
        return linear_deflection_mm;
    }

    let deflection_ratio = linear_deflection_mm / length_mm;
    let geometric = 1.0 + (deflection_ratio * 25.0).powi(2) * material.non_linear_factor;
    let stress_ratio = stress_mpa / material.yield_strength_mpa;
    let stress_amplification = 1.0 + (stress_ratio - 0.7).max(0.0) * 0.5;

    linear_deflection_mm * geometric * stress_amplification
}
