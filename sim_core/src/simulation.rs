//! # Simulation Orchestrator
//!
//! Composes the material catalog, linear solver, non-linear correction
//! model, safety assessment, and recommendation generator into one result
//! record per run.
//!
//! The pipeline is a pure function of its inputs: validate → resolve
//! material → solve linear response → correct stress and deflection →
//! assess safety → classify failure mode → generate recommendation →
//! assemble. No I/O, no shared mutable state beyond the immutable
//! catalog; runs may execute concurrently without coordination.
//!
//! ## Example
//!
//! ```rust
//! use sim_core::beam::{BeamGeometry, BeamType, LoadCase, LoadType};
//! use sim_core::simulation::{simulate, SimulationInput};
//!
//! let input = SimulationInput::new(
//!     BeamGeometry::new(5.0, 0.2, 0.3),
//!     LoadCase::new(BeamType::SimplySupported, LoadType::Point, 10.0),
//!     200.0,
//!     "Structural Steel",
//! );
//!
//! let result = simulate(&input).unwrap();
//! assert!(result.safety_factor > 1.2);
//! println!("Max stress: {:.2} MPa", result.max_stress_mpa);
//! println!("{}", result.recommendation);
//! ```

use serde::{Deserialize, Serialize};

use crate::beam::{BeamGeometry, LoadCase};
use crate::errors::{SimError, SimResult};
use crate::materials;
use crate::nonlinear::{correct_deflection, correct_stress};
use crate::recommendation::recommend;
use crate::safety::{classify_failure_mode, safety_factor, FailureMode, LoadDuration, SafetyClass};
use crate::solver::{solve, SolverCoverage};
use crate::units::{Gigapascals, Megapascals};

/// Input parameters for one simulation run.
///
/// The elastic modulus is supplied by the caller (input forms expose it
/// as an editable field) while strength properties come from the named
/// catalog material. Unknown material names resolve to the default
/// catalog entry; see [`crate::materials::resolve`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "geometry": { "length_m": 5.0, "width_m": 0.2, "height_m": 0.3 },
///   "load_case": {
///     "beam_type": "SimplySupported",
///     "load_type": "Point",
///     "magnitude_kn": 10.0,
///     "temperature_c": 20.0
///   },
///   "elastic_modulus_gpa": 200.0,
///   "material": "Structural Steel"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// User label for this run (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Span and rectangular cross-section
    pub geometry: BeamGeometry,

    /// Support configuration, load shape, magnitude, and temperature
    pub load_case: LoadCase,

    /// Elastic modulus E (GPa) used by the solver
    pub elastic_modulus_gpa: f64,

    /// Free-form material name, resolved against the catalog
    pub material: String,

    /// Load duration factor selection
    #[serde(default)]
    pub load_duration: LoadDuration,

    /// Safety class factor selection
    #[serde(default)]
    pub safety_class: SafetyClass,
}

impl SimulationInput {
    /// Create an input with default duration (sustained), class (normal),
    /// and an empty label.
    pub fn new(
        geometry: BeamGeometry,
        load_case: LoadCase,
        elastic_modulus_gpa: f64,
        material: impl Into<String>,
    ) -> Self {
        SimulationInput {
            label: String::new(),
            geometry,
            load_case,
            elastic_modulus_gpa,
            material: material.into(),
            load_duration: LoadDuration::default(),
            safety_class: SafetyClass::default(),
        }
    }

    /// Validate geometry, load, and modulus before any arithmetic.
    pub fn validate(&self) -> SimResult<()> {
        self.geometry.validate()?;
        self.load_case.validate()?;
        if !self.elastic_modulus_gpa.is_finite() || self.elastic_modulus_gpa <= 0.0 {
            return Err(SimError::invalid_input(
                "elastic_modulus_gpa",
                self.elastic_modulus_gpa.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        Ok(())
    }
}

/// Support reactions (kN); start is the fixed end for cantilevers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionForces {
    pub start_kn: f64,
    pub end_kn: f64,
}

/// How much the non-linear model amplified the linear response.
///
/// Both multipliers are 1.0 when the corrections were pass-through or
/// the linear baseline was zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonLinearEffects {
    pub stress_multiplier: f64,
    pub deflection_multiplier: f64,
}

/// Complete outcome of one simulation run.
///
/// Produced fresh per run and never mutated afterwards; diagram arrays
/// always hold [`crate::solver::SAMPLE_POINTS`] samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Peak stress after non-linear correction (MPa)
    pub max_stress_mpa: f64,

    /// Peak deflection after non-linear correction (mm)
    pub max_deflection_mm: f64,

    /// Capacity-to-demand ratio; values below 1 indicate failure
    pub safety_factor: f64,

    /// Rule-based engineering recommendation text
    pub recommendation: String,

    /// Sampled bending stress along the span (MPa)
    pub stress_distribution: Vec<f64>,

    /// Sampled deflection along the span (mm)
    pub deflection_curve: Vec<f64>,

    /// Support reactions (kN)
    pub reaction_forces: ReactionForces,

    /// Sampled bending moment along the span (kN·m)
    pub moment_diagram: Vec<f64>,

    /// Sampled shear force along the span (kN)
    pub shear_diagram: Vec<f64>,

    /// Dominant classified risk
    pub failure_mode: FailureMode,

    /// Amplification applied by the non-linear model
    pub non_linear_effects: NonLinearEffects,

    /// Which parts of the linear response carry real values
    pub solver_coverage: SolverCoverage,
}

/// Run one complete simulation.
///
/// Never fails for in-domain inputs (positive geometry, non-negative
/// load); unsupported beam/load combinations produce a zeroed result
/// rather than an error.
pub fn simulate(input: &SimulationInput) -> SimResult<SimulationResult> {
    input.validate()?;

    let material = materials::resolve(&input.material);
    let case = &input.load_case;

    let linear = solve(
        case.beam_type,
        case.load_type,
        &input.geometry,
        input.elastic_modulus_gpa,
        case.magnitude_kn,
    );

    // Nominal extreme-fiber strain, σ/E with both sides in MPa
    let e_mpa = Megapascals::from(Gigapascals(input.elastic_modulus_gpa)).value();
    let strain = linear.linear_stress_mpa / e_mpa;

    let corrected_stress = correct_stress(
        linear.linear_stress_mpa,
        strain,
        material,
        case.temperature_c,
    );

    let length_mm = input.geometry.length_mm();
    let corrected_deflection = correct_deflection(
        linear.linear_deflection_mm,
        length_mm,
        material,
        corrected_stress,
    );

    let sf = safety_factor(
        corrected_stress,
        material,
        case.temperature_c,
        input.load_duration,
        input.safety_class,
    );

    let deflection_ratio = corrected_deflection / length_mm;
    let failure_mode = classify_failure_mode(corrected_stress, material, deflection_ratio);
    let recommendation = recommend(sf, deflection_ratio, material, corrected_stress);

    let multiplier = |corrected: f64, linear: f64| {
        if linear > 0.0 {
            corrected / linear
        } else {
            1.0
        }
    };

    Ok(SimulationResult {
        max_stress_mpa: corrected_stress,
        max_deflection_mm: corrected_deflection,
        safety_factor: sf,
        recommendation,
        stress_distribution: linear.stress_distribution,
        deflection_curve: linear.deflection_curve,
        reaction_forces: ReactionForces {
            start_kn: linear.reaction_start_kn,
            end_kn: linear.reaction_end_kn,
        },
        moment_diagram: linear.moment_diagram,
        shear_diagram: linear.shear_diagram,
        failure_mode,
        non_linear_effects: NonLinearEffects {
            stress_multiplier: multiplier(corrected_stress, linear.linear_stress_mpa),
            deflection_multiplier: multiplier(corrected_deflection, linear.linear_deflection_mm),
        },
        solver_coverage: linear.coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::{BeamType, LoadType};
    use crate::solver::SAMPLE_POINTS;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    /// Steel beam from the reference scenario: 5 m span, 0.2 x 0.3
    /// section, centered point load.
    fn steel_point_input(load_kn: f64) -> SimulationInput {
        SimulationInput::new(
            BeamGeometry::new(5.0, 0.2, 0.3),
            LoadCase::new(BeamType::SimplySupported, LoadType::Point, load_kn),
            200.0,
            "Structural Steel",
        )
    }

    #[test]
    fn test_conservative_steel_beam() {
        // 10 kN at midspan of a stout section:
        // sigma = PL/4 * (h/2)/I = 12.5 kN·m * 0.15 / 4.5e-4 = 4.17 MPa
        // Far below half yield, so no correction applies.
        let result = simulate(&steel_point_input(10.0)).unwrap();

        assert!(approx_eq(result.max_stress_mpa, 4.1667, 0.01));
        assert!(approx_eq(result.max_deflection_mm, 0.2894, 0.01));
        assert!(result.safety_factor > 1.2);
        assert_eq!(result.failure_mode, FailureMode::NoImminent);
        assert_eq!(result.non_linear_effects.stress_multiplier, 1.0);
        assert_eq!(result.non_linear_effects.deflection_multiplier, 1.0);

        // SF = 250 / 4.17 = 60: heavily overdesigned
        assert!(result.safety_factor > 4.0);
        assert!(result.recommendation.contains("INEFFICIENT"));
    }

    #[test]
    fn test_reactions_propagated() {
        let result = simulate(&steel_point_input(10.0)).unwrap();
        assert!(approx_eq(result.reaction_forces.start_kn, 5.0, 0.01));
        assert!(approx_eq(result.reaction_forces.end_kn, 5.0, 0.01));
    }

    #[test]
    fn test_overload_flips_to_yielding() {
        // 600 kN drives the linear stress to 250 MPa (at yield). The
        // corrected stress exceeds 0.9 * 250 = 225 MPa, so the failure
        // mode flips and the recommendation names the yield value.
        let result = simulate(&steel_point_input(600.0)).unwrap();

        assert!(result.max_stress_mpa > 225.0);
        assert_eq!(result.failure_mode, FailureMode::Yielding);
        assert!(result.recommendation.contains("250 MPa"));
        assert!(result.recommendation.contains("CRITICAL"));
        assert!(result.safety_factor < 1.2);

        // Correction is active but clamped by ultimate strength
        assert!(result.non_linear_effects.stress_multiplier >= 1.0);
        assert!(result.max_stress_mpa <= 400.0);
    }

    #[test]
    fn test_slender_beam_excessive_deflection() {
        // 10 m span under 30 kN/m uniform load:
        // delta_lin = 5wL⁴/(384EI) = 43.4 mm > L/250 = 40 mm
        // sigma = wL²/8 * (h/2)/I = 125 MPa, well under the 225 MPa
        // yield proximity threshold, so deflection governs.
        let input = SimulationInput::new(
            BeamGeometry::new(10.0, 0.2, 0.3),
            LoadCase::new(BeamType::SimplySupported, LoadType::Uniform, 30.0),
            200.0,
            "Structural Steel",
        );
        let result = simulate(&input).unwrap();

        assert_eq!(result.failure_mode, FailureMode::ExcessiveDeflection);
        assert!(result.non_linear_effects.deflection_multiplier > 1.0);
        assert!(result.recommendation.contains("L/250"));
    }

    #[test]
    fn test_unknown_material_falls_back() {
        let mut input = steel_point_input(10.0);
        input.material = "Unobtainium".to_string();
        let result = simulate(&input).unwrap();

        // Fallback is Structural Steel, so the outcome matches exactly
        let reference = simulate(&steel_point_input(10.0)).unwrap();
        assert_eq!(result.safety_factor, reference.safety_factor);
        assert_eq!(result.failure_mode, reference.failure_mode);
    }

    #[test]
    fn test_unsupported_combination_completes() {
        let input = SimulationInput::new(
            BeamGeometry::new(5.0, 0.2, 0.3),
            LoadCase::new(BeamType::Continuous, LoadType::Uniform, 10.0),
            200.0,
            "Structural Steel",
        );
        let result = simulate(&input).unwrap();

        assert_eq!(result.solver_coverage, SolverCoverage::Unsupported);
        assert_eq!(result.max_stress_mpa, 0.0);
        assert_eq!(result.max_deflection_mm, 0.0);
        assert!(result.safety_factor.is_infinite());
        assert_eq!(result.failure_mode, FailureMode::NoImminent);
        assert_eq!(result.non_linear_effects.stress_multiplier, 1.0);
        assert_eq!(result.shear_diagram.len(), SAMPLE_POINTS);
    }

    #[test]
    fn test_elevated_temperature_lowers_safety_factor() {
        let cold = simulate(&steel_point_input(100.0)).unwrap();

        let mut input = steel_point_input(100.0);
        input.load_case = input.load_case.with_temperature(300.0);
        let hot = simulate(&input).unwrap();

        assert!(hot.safety_factor < cold.safety_factor);
    }

    #[test]
    fn test_duration_and_class_overrides() {
        let mut input = steel_point_input(100.0);
        let baseline = simulate(&input).unwrap();

        input.load_duration = LoadDuration::Permanent;
        input.safety_class = SafetyClass::Exceptional;
        let penalized = simulate(&input).unwrap();

        // 0.9 * 0.8 = 0.72 combined penalty
        assert!(approx_eq(
            penalized.safety_factor,
            baseline.safety_factor * 0.72,
            1e-6
        ));
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let mut input = steel_point_input(10.0);
        input.geometry.length_m = 0.0;
        let error = simulate(&input).unwrap_err();
        assert_eq!(error.error_code(), "INVALID_INPUT");

        let mut input = steel_point_input(10.0);
        input.geometry.height_m = -0.3;
        assert!(simulate(&input).is_err());

        let mut input = steel_point_input(-5.0);
        input.label = "negative load".to_string();
        assert!(simulate(&input).is_err());
    }

    #[test]
    fn test_safety_factor_decreases_with_load() {
        let mut previous = f64::INFINITY;
        for load in [10.0, 50.0, 150.0, 400.0] {
            let result = simulate(&steel_point_input(load)).unwrap();
            assert!(result.safety_factor < previous);
            previous = result.safety_factor;
        }
    }

    #[test]
    fn test_input_serde_defaults() {
        let json = r#"{
            "geometry": { "length_m": 5.0, "width_m": 0.2, "height_m": 0.3 },
            "load_case": {
                "beam_type": "SimplySupported",
                "load_type": "Point",
                "magnitude_kn": 10.0
            },
            "elastic_modulus_gpa": 200.0,
            "material": "Structural Steel"
        }"#;
        let input: SimulationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.load_duration, LoadDuration::Sustained);
        assert_eq!(input.safety_class, SafetyClass::Normal);
        assert_eq!(input.load_case.temperature_c, 20.0);
        assert!(simulate(&input).is_ok());
    }

    #[test]
    fn test_result_serialization() {
        let result = simulate(&steel_point_input(10.0)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("max_stress_mpa"));
        assert!(json.contains("No imminent failure mode"));
        assert!(json.contains("reaction_forces"));

        let roundtrip: SimulationResult = serde_json::from_str(&json).unwrap();
        assert!(approx_eq(roundtrip.max_stress_mpa, result.max_stress_mpa, 1e-9));
        assert_eq!(roundtrip.stress_distribution.len(), SAMPLE_POINTS);
    }
}
