//! # Safety Assessment
//!
//! Computes a safety factor from the corrected peak stress against the
//! temperature-adjusted yield strength, scaled by load-duration and
//! safety-class factors, and classifies the dominant failure mode.
//!
//! ```text
//! SF = (σ_yield(t) / σ') × C_duration × C_class
//! ```
//!
//! ## Example
//! ```
//! use sim_core::materials::resolve;
//! use sim_core::safety::{safety_factor, LoadDuration, SafetyClass};
//!
//! let steel = resolve("Structural Steel");
//! let sf = safety_factor(100.0, steel, 20.0, LoadDuration::Sustained, SafetyClass::Normal);
//! assert!((sf - 2.5).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::Material;

/// Load duration factor.
///
/// Short-duration loads permit a small strength bonus; permanent loads
/// take a penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoadDuration {
    /// Short-term loading: factor 1.1
    Temporary,

    /// Standard service loading: factor 1.0
    #[default]
    Sustained,

    /// Load present for the structure's life: factor 0.9
    Permanent,
}

impl LoadDuration {
    /// All duration variants for UI selection
    pub const ALL: [LoadDuration; 3] = [
        LoadDuration::Temporary,
        LoadDuration::Sustained,
        LoadDuration::Permanent,
    ];

    /// Get the duration factor value
    pub fn factor(&self) -> f64 {
        match self {
            LoadDuration::Temporary => 1.1,
            LoadDuration::Sustained => 1.0,
            LoadDuration::Permanent => 0.9,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadDuration::Temporary => "Temporary (1.10)",
            LoadDuration::Sustained => "Sustained (1.00)",
            LoadDuration::Permanent => "Permanent (0.90)",
        }
    }
}

impl std::fmt::Display for LoadDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Consequence-of-failure class.
///
/// Higher classes demand more reserve, expressed as a penalty on the
/// computed safety factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SafetyClass {
    /// Ordinary structures: factor 1.0
    #[default]
    Normal,

    /// Elevated consequence of failure: factor 0.9
    High,

    /// Critical infrastructure: factor 0.8
    Exceptional,
}

impl SafetyClass {
    /// All class variants for UI selection
    pub const ALL: [SafetyClass; 3] = [
        SafetyClass::Normal,
        SafetyClass::High,
        SafetyClass::Exceptional,
    ];

    /// Get the class factor value
    pub fn factor(&self) -> f64 {
        match self {
            SafetyClass::Normal => 1.0,
            SafetyClass::High => 0.9,
            SafetyClass::Exceptional => 0.8,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SafetyClass::Normal => "Normal (1.00)",
            SafetyClass::High => "High (0.90)",
            SafetyClass::Exceptional => "Exceptional (0.80)",
        }
    }
}

impl std::fmt::Display for SafetyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Dominant classified risk at the current load state.
///
/// Serializes to the exact report strings consumed by result renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureMode {
    /// Corrected stress above 90% of yield strength
    #[serde(rename = "Material yielding")]
    Yielding,

    /// Deflection ratio beyond the L/250 serviceability limit
    #[serde(rename = "Excessive deflection")]
    ExcessiveDeflection,

    /// Neither strength nor serviceability threshold crossed
    #[serde(rename = "No imminent failure mode")]
    NoImminent,
}

impl FailureMode {
    /// Report text for this mode
    pub fn description(&self) -> &'static str {
        match self {
            FailureMode::Yielding => "Material yielding",
            FailureMode::ExcessiveDeflection => "Excessive deflection",
            FailureMode::NoImminent => "No imminent failure mode",
        }
    }
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Safety factor of the corrected stress state.
///
/// Capacity is the temperature-adjusted yield strength; demand is the
/// corrected peak stress. Zero demand (e.g., an unsupported solver
/// combination) yields an infinite factor rather than a division error.
pub fn safety_factor(
    corrected_stress_mpa: f64,
    material: &Material,
    temperature_c: f64,
    duration: LoadDuration,
    class: SafetyClass,
) -> f64 {
    let adjusted_yield = material.yield_strength_at(temperature_c);
    let base = if corrected_stress_mpa > 0.0 {
        adjusted_yield / corrected_stress_mpa
    } else {
        f64::INFINITY
    };
    base * duration.factor() * class.factor()
}

/// Classify the dominant failure mode, strength first.
///
/// Yield proximity is checked against the room-temperature yield strength
/// (the reported material property), not the temperature-adjusted value.
pub fn classify_failure_mode(
    corrected_stress_mpa: f64,
    material: &Material,
    deflection_ratio: f64,
) -> FailureMode {
    if corrected_stress_mpa > 0.9 * material.yield_strength_mpa {
        FailureMode::Yielding
    } else if deflection_ratio > 1.0 / 250.0 {
        FailureMode::ExcessiveDeflection
    } else {
        FailureMode::NoImminent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::resolve;

    #[test]
    fn test_safety_factor_basic() {
        let steel = resolve("Structural Steel");
        // 250 / 100 = 2.5 with neutral factors
        let sf = safety_factor(100.0, steel, 20.0, LoadDuration::Sustained, SafetyClass::Normal);
        assert!((sf - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_safety_factor_duration_and_class() {
        let steel = resolve("Structural Steel");
        let sf = safety_factor(
            100.0,
            steel,
            20.0,
            LoadDuration::Permanent,
            SafetyClass::Exceptional,
        );
        // 2.5 * 0.9 * 0.8 = 1.8
        assert!((sf - 1.8).abs() < 1e-9);

        let temporary = safety_factor(
            100.0,
            steel,
            20.0,
            LoadDuration::Temporary,
            SafetyClass::Normal,
        );
        assert!((temporary - 2.75).abs() < 1e-9);
    }

    #[test]
    fn test_safety_factor_temperature_degradation() {
        let steel = resolve("Structural Steel");
        // At 200 degrees C the yield drops to 225 MPa
        let sf = safety_factor(100.0, steel, 200.0, LoadDuration::Sustained, SafetyClass::Normal);
        assert!((sf - 2.25).abs() < 1e-9);
    }

    #[test]
    fn test_safety_factor_strictly_decreasing_in_stress() {
        let steel = resolve("Structural Steel");
        let mut previous = f64::INFINITY;
        for stress in [10.0, 50.0, 100.0, 200.0, 400.0] {
            let sf = safety_factor(stress, steel, 20.0, LoadDuration::Sustained, SafetyClass::Normal);
            assert!(sf < previous);
            previous = sf;
        }
    }

    #[test]
    fn test_safety_factor_zero_demand() {
        let steel = resolve("Structural Steel");
        let sf = safety_factor(0.0, steel, 20.0, LoadDuration::Sustained, SafetyClass::Normal);
        assert!(sf.is_infinite());
    }

    #[test]
    fn test_failure_mode_priority() {
        let steel = resolve("Structural Steel");

        // Above 0.9 * 250 = 225 MPa: yielding wins even with bad deflection
        assert_eq!(
            classify_failure_mode(230.0, steel, 0.01),
            FailureMode::Yielding
        );

        // Below yield threshold, deflection ratio above 1/250
        assert_eq!(
            classify_failure_mode(100.0, steel, 0.005),
            FailureMode::ExcessiveDeflection
        );

        // Neither threshold crossed
        assert_eq!(
            classify_failure_mode(100.0, steel, 0.001),
            FailureMode::NoImminent
        );
    }

    #[test]
    fn test_failure_mode_report_strings() {
        assert_eq!(FailureMode::Yielding.to_string(), "Material yielding");
        assert_eq!(
            FailureMode::ExcessiveDeflection.to_string(),
            "Excessive deflection"
        );
        assert_eq!(
            FailureMode::NoImminent.to_string(),
            "No imminent failure mode"
        );

        // Serialized form matches the report text
        let json = serde_json::to_string(&FailureMode::Yielding).unwrap();
        assert_eq!(json, "\"Material yielding\"");
        let roundtrip: FailureMode = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, FailureMode::Yielding);
    }

    #[test]
    fn test_factor_enums() {
        assert_eq!(LoadDuration::default(), LoadDuration::Sustained);
        assert_eq!(SafetyClass::default(), SafetyClass::Normal);
        assert_eq!(LoadDuration::ALL.len(), 3);
        assert_eq!(SafetyClass::ALL.len(), 3);
        assert!((LoadDuration::Temporary.factor() - 1.1).abs() < 1e-12);
        assert!((SafetyClass::Exceptional.factor() - 0.8).abs() < 1e-12);
    }
}
