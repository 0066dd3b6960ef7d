//! # Linear Beam Solver
//!
//! Closed-form Euler-Bernoulli analysis of a single-span rectangular beam
//! under one load. Produces peak stress and deflection plus four sampled
//! diagrams (shear, moment, deflection, bending stress) of fixed length
//! [`SAMPLE_POINTS`], evaluated at uniform positions x_i = i/(N-1)·L.
//!
//! ## Coverage
//!
//! Only a subset of (beam type, load type) pairs has closed forms:
//!
//! | Beam            | Point | Uniform | Triangular |
//! |-----------------|-------|---------|------------|
//! | SimplySupported | Full  | Full    | PeakOnly   |
//! | Cantilever      | Full  | Full    | -          |
//! | FixedEnds       | Peak  | Peak    | -          |
//!
//! Every other combination returns a zeroed response tagged
//! [`SolverCoverage::Unsupported`]. The solver never fails: uncovered
//! inputs are a documented limitation of the model, not an error.
//!
//! ## Units
//!
//! Loads enter in kN (or kN/m), lengths in m, modulus in GPa. Diagrams
//! report shear in kN, moment in kN·m, deflection in mm, and stress in
//! MPa. Bending stress everywhere derives from the moment diagram via
//! σ = M·(h/2)/I.
//!
//! ## Example
//! ```
//! use sim_core::beam::{BeamGeometry, BeamType, LoadType};
//! use sim_core::solver::{solve, SAMPLE_POINTS};
//!
//! let geometry = BeamGeometry::new(5.0, 0.2, 0.3);
//! let response = solve(BeamType::SimplySupported, LoadType::Point, &geometry, 200.0, 10.0);
//!
//! // Centered 10 kN point load: reactions split evenly
//! assert_eq!(response.reaction_start_kn, 5.0);
//! assert_eq!(response.reaction_end_kn, 5.0);
//! assert_eq!(response.moment_diagram.len(), SAMPLE_POINTS);
//! ```

use serde::{Deserialize, Serialize};

use crate::beam::{BeamGeometry, BeamType, LoadType};
use crate::units::{
    Gigapascals, KilonewtonMeters, Kilonewtons, Megapascals, Meters, Millimeters, NewtonMeters,
    Newtons, Pascals,
};

/// Number of samples in each diagram
pub const SAMPLE_POINTS: usize = 50;

/// How much of the response the solver was able to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverCoverage {
    /// Peak values and all four diagrams populated
    Full,
    /// Peak values and the stress distribution only; shear, moment, and
    /// deflection diagrams remain zero-filled
    PeakOnly,
    /// No closed form for this combination; everything is zero
    Unsupported,
}

/// Linear response of the beam: peaks, reactions, and sampled diagrams.
///
/// Diagram arrays always have [`SAMPLE_POINTS`] entries regardless of
/// coverage, so renderers can index them unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearBeamResponse {
    /// Peak bending stress (MPa)
    pub linear_stress_mpa: f64,
    /// Peak deflection (mm)
    pub linear_deflection_mm: f64,
    /// Reaction at the start support (kN); the fixed end for cantilevers
    pub reaction_start_kn: f64,
    /// Reaction at the end support (kN); zero for cantilevers
    pub reaction_end_kn: f64,
    /// Sampled shear force (kN)
    pub shear_diagram: Vec<f64>,
    /// Sampled bending moment (kN·m)
    pub moment_diagram: Vec<f64>,
    /// Sampled deflection (mm)
    pub deflection_curve: Vec<f64>,
    /// Sampled bending stress (MPa)
    pub stress_distribution: Vec<f64>,
    /// Which parts of this response carry real values
    pub coverage: SolverCoverage,
}

impl LinearBeamResponse {
    fn unsupported() -> Self {
        LinearBeamResponse {
            linear_stress_mpa: 0.0,
            linear_deflection_mm: 0.0,
            reaction_start_kn: 0.0,
            reaction_end_kn: 0.0,
            shear_diagram: vec![0.0; SAMPLE_POINTS],
            moment_diagram: vec![0.0; SAMPLE_POINTS],
            deflection_curve: vec![0.0; SAMPLE_POINTS],
            stress_distribution: vec![0.0; SAMPLE_POINTS],
            coverage: SolverCoverage::Unsupported,
        }
    }
}

/// Sample a per-position function at the uniform diagram positions.
///
/// Diagrams are generated from closed-form per-index functions rather
/// than accumulated in a loop, so each array is a pure function of the
/// inputs.
fn sampled(length_m: f64, f: impl Fn(f64) -> f64) -> Vec<f64> {
    (0..SAMPLE_POINTS)
        .map(|index| {
            let x = length_m * index as f64 / (SAMPLE_POINTS - 1) as f64;
            f(x)
        })
        .collect()
}

/// Solve the linear response for one (beam type, load type) combination.
///
/// `load_value_kn` is kN for point loads and kN/m for distributed loads.
/// Geometry must be pre-validated; see [`BeamGeometry::validate`].
pub fn solve(
    beam_type: BeamType,
    load_type: LoadType,
    geometry: &BeamGeometry,
    elastic_modulus_gpa: f64,
    load_value_kn: f64,
) -> LinearBeamResponse {
    let e_pa = Pascals::from(Gigapascals(elastic_modulus_gpa)).value();
    let inertia = geometry.moment_of_inertia();

    match (beam_type, load_type) {
        (BeamType::SimplySupported, LoadType::Point) => {
            ss_point(geometry, e_pa, inertia, load_value_kn)
        }
        (BeamType::SimplySupported, LoadType::Uniform) => {
            ss_uniform(geometry, e_pa, inertia, load_value_kn)
        }
        (BeamType::SimplySupported, LoadType::Triangular) => {
            ss_triangular(geometry, e_pa, inertia, load_value_kn)
        }
        (BeamType::Cantilever, LoadType::Point) => {
            cantilever_point(geometry, e_pa, inertia, load_value_kn)
        }
        (BeamType::Cantilever, LoadType::Uniform) => {
            cantilever_uniform(geometry, e_pa, inertia, load_value_kn)
        }
        (BeamType::FixedEnds, LoadType::Point) => {
            fixed_point(geometry, e_pa, inertia, load_value_kn)
        }
        (BeamType::FixedEnds, LoadType::Uniform) => {
            fixed_uniform(geometry, e_pa, inertia, load_value_kn)
        }
        // Continuous and overhanging beams, applied moments, and partial
        // uniform loads have no closed form in this model.
        _ => LinearBeamResponse::unsupported(),
    }
}

/// Bending stress (MPa) from a moment in kN·m: σ = M·(h/2)/I
fn stress_from_moment(geometry: &BeamGeometry, inertia: f64, moment_knm: f64) -> f64 {
    let moment_nm = NewtonMeters::from(KilonewtonMeters(moment_knm)).value();
    let stress_pa = moment_nm * (geometry.height_m / 2.0) / inertia;
    Megapascals::from(Pascals(stress_pa)).value()
}

fn mm(meters: f64) -> f64 {
    Millimeters::from(Meters(meters)).value()
}

/// Simply supported, concentrated load P at midspan.
///
/// R = P/2, M_max = PL/4 at midspan, δ_max = PL³/(48EI).
fn ss_point(geometry: &BeamGeometry, e_pa: f64, inertia: f64, p_kn: f64) -> LinearBeamResponse {
    let l = geometry.length_m;
    let p_n = Newtons::from(Kilonewtons(p_kn)).value();
    let r_kn = p_kn / 2.0;

    // Moment rises linearly to midspan, then mirrors
    let moment = |x: f64| if x <= l / 2.0 { r_kn * x } else { r_kn * (l - x) };

    // δ(x) = Px(3L² - 4x²)/(48EI), mirrored about midspan
    let deflection = |x: f64| {
        let xe = x.min(l - x);
        mm(p_n * xe * (3.0 * l * l - 4.0 * xe * xe) / (48.0 * e_pa * inertia))
    };

    LinearBeamResponse {
        linear_stress_mpa: stress_from_moment(geometry, inertia, p_kn * l / 4.0),
        linear_deflection_mm: mm(p_n * l.powi(3) / (48.0 * e_pa * inertia)),
        reaction_start_kn: r_kn,
        reaction_end_kn: r_kn,
        shear_diagram: sampled(l, |x| if x <= l / 2.0 { r_kn } else { -r_kn }),
        moment_diagram: sampled(l, moment),
        deflection_curve: sampled(l, deflection),
        stress_distribution: sampled(l, |x| stress_from_moment(geometry, inertia, moment(x))),
        coverage: SolverCoverage::Full,
    }
}

/// Simply supported, uniform load w over the full span.
///
/// R = wL/2, M_max = wL²/8 at midspan, δ_max = 5wL⁴/(384EI).
fn ss_uniform(geometry: &BeamGeometry, e_pa: f64, inertia: f64, w_kn: f64) -> LinearBeamResponse {
    let l = geometry.length_m;
    let w_n = Newtons::from(Kilonewtons(w_kn)).value();
    let r_kn = w_kn * l / 2.0;

    let moment = |x: f64| r_kn * x - w_kn * x * x / 2.0;

    // δ(x) = wx(L³ - 2Lx² + x³)/(24EI)
    let deflection = |x: f64| {
        mm(w_n * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * e_pa * inertia))
    };

    LinearBeamResponse {
        linear_stress_mpa: stress_from_moment(geometry, inertia, w_kn * l * l / 8.0),
        linear_deflection_mm: mm(5.0 * w_n * l.powi(4) / (384.0 * e_pa * inertia)),
        reaction_start_kn: r_kn,
        reaction_end_kn: r_kn,
        shear_diagram: sampled(l, |x| r_kn - w_kn * x),
        moment_diagram: sampled(l, moment),
        deflection_curve: sampled(l, deflection),
        stress_distribution: sampled(l, |x| stress_from_moment(geometry, inertia, moment(x))),
        coverage: SolverCoverage::Full,
    }
}

/// Simply supported, triangular load rising from zero at the start to
/// peak intensity w at the end.
///
/// R_start = wL/6, R_end = wL/3, M_max = wL²/(9√3) at x = L/√3,
/// δ_max ≈ 0.00652·wL⁴/(EI).
///
/// Only the peaks and a parabolic stress-distribution approximation are
/// modeled; shear, moment, and deflection diagrams stay zero.
fn ss_triangular(
    geometry: &BeamGeometry,
    e_pa: f64,
    inertia: f64,
    w_kn: f64,
) -> LinearBeamResponse {
    let l = geometry.length_m;
    let w_n = Newtons::from(Kilonewtons(w_kn)).value();

    let max_moment_knm = w_kn * l * l / (9.0 * 3.0_f64.sqrt());
    let max_stress = stress_from_moment(geometry, inertia, max_moment_knm);

    LinearBeamResponse {
        linear_stress_mpa: max_stress,
        linear_deflection_mm: mm(0.00652 * w_n * l.powi(4) / (e_pa * inertia)),
        reaction_start_kn: w_kn * l / 6.0,
        reaction_end_kn: w_kn * l / 3.0,
        shear_diagram: vec![0.0; SAMPLE_POINTS],
        moment_diagram: vec![0.0; SAMPLE_POINTS],
        deflection_curve: vec![0.0; SAMPLE_POINTS],
        // Parabolic approximation: zero at the supports, peak between
        stress_distribution: sampled(l, |x| {
            let xi = x / l;
            max_stress * 4.0 * xi * (1.0 - xi)
        }),
        coverage: SolverCoverage::PeakOnly,
    }
}

/// Cantilever, concentrated load P at the free end. Position x runs from
/// the fixed end.
///
/// R = P at the fixed end, M_max = PL at the fixed end,
/// δ_max = PL³/(3EI) at the tip.
fn cantilever_point(
    geometry: &BeamGeometry,
    e_pa: f64,
    inertia: f64,
    p_kn: f64,
) -> LinearBeamResponse {
    let l = geometry.length_m;
    let p_n = Newtons::from(Kilonewtons(p_kn)).value();

    let moment = |x: f64| p_kn * (l - x);

    // δ(x) = Px²(3L - x)/(6EI)
    let deflection = |x: f64| mm(p_n * x * x * (3.0 * l - x) / (6.0 * e_pa * inertia));

    LinearBeamResponse {
        linear_stress_mpa: stress_from_moment(geometry, inertia, p_kn * l),
        linear_deflection_mm: mm(p_n * l.powi(3) / (3.0 * e_pa * inertia)),
        reaction_start_kn: p_kn,
        reaction_end_kn: 0.0,
        shear_diagram: sampled(l, |_| p_kn),
        moment_diagram: sampled(l, moment),
        deflection_curve: sampled(l, deflection),
        stress_distribution: sampled(l, |x| stress_from_moment(geometry, inertia, moment(x))),
        coverage: SolverCoverage::Full,
    }
}

/// Cantilever, uniform load w over the full span. Position x runs from
/// the fixed end.
///
/// R = wL, M_max = wL²/2 at the fixed end, δ_max = wL⁴/(8EI) at the tip.
fn cantilever_uniform(
    geometry: &BeamGeometry,
    e_pa: f64,
    inertia: f64,
    w_kn: f64,
) -> LinearBeamResponse {
    let l = geometry.length_m;
    let w_n = Newtons::from(Kilonewtons(w_kn)).value();

    let moment = |x: f64| w_kn * (l - x).powi(2) / 2.0;

    // δ(x) = wx²(6L² - 4Lx + x²)/(24EI)
    let deflection = |x: f64| {
        mm(w_n * x * x * (6.0 * l * l - 4.0 * l * x + x * x) / (24.0 * e_pa * inertia))
    };

    LinearBeamResponse {
        linear_stress_mpa: stress_from_moment(geometry, inertia, w_kn * l * l / 2.0),
        linear_deflection_mm: mm(w_n * l.powi(4) / (8.0 * e_pa * inertia)),
        reaction_start_kn: w_kn * l,
        reaction_end_kn: 0.0,
        shear_diagram: sampled(l, |x| w_kn * (l - x)),
        moment_diagram: sampled(l, moment),
        deflection_curve: sampled(l, deflection),
        stress_distribution: sampled(l, |x| stress_from_moment(geometry, inertia, moment(x))),
        coverage: SolverCoverage::Full,
    }
}

/// Fixed at both ends, concentrated load P at midspan.
///
/// M_max = PL/8 (equal magnitude at the ends and midspan),
/// δ_max = PL³/(192EI). Diagrams are out of scope for fixed-end beams;
/// the stress distribution uses the normalized moment magnitude |1 - 4ξ|
/// (mirrored about midspan) scaled to the peak.
fn fixed_point(geometry: &BeamGeometry, e_pa: f64, inertia: f64, p_kn: f64) -> LinearBeamResponse {
    let l = geometry.length_m;
    let p_n = Newtons::from(Kilonewtons(p_kn)).value();

    let max_stress = stress_from_moment(geometry, inertia, p_kn * l / 8.0);

    LinearBeamResponse {
        linear_stress_mpa: max_stress,
        linear_deflection_mm: mm(p_n * l.powi(3) / (192.0 * e_pa * inertia)),
        reaction_start_kn: p_kn / 2.0,
        reaction_end_kn: p_kn / 2.0,
        shear_diagram: vec![0.0; SAMPLE_POINTS],
        moment_diagram: vec![0.0; SAMPLE_POINTS],
        deflection_curve: vec![0.0; SAMPLE_POINTS],
        stress_distribution: sampled(l, |x| {
            let xi = (x / l).min(1.0 - x / l);
            max_stress * (1.0 - 4.0 * xi).abs()
        }),
        coverage: SolverCoverage::PeakOnly,
    }
}

/// Fixed at both ends, uniform load w over the full span.
///
/// M_max = wL²/12 at the ends, δ_max = wL⁴/(384EI). Stress distribution
/// uses the normalized moment magnitude |1 - 6ξ + 6ξ²| scaled to the peak.
fn fixed_uniform(
    geometry: &BeamGeometry,
    e_pa: f64,
    inertia: f64,
    w_kn: f64,
) -> LinearBeamResponse {
    let l = geometry.length_m;
    let w_n = Newtons::from(Kilonewtons(w_kn)).value();

    let max_stress = stress_from_moment(geometry, inertia, w_kn * l * l / 12.0);

    LinearBeamResponse {
        linear_stress_mpa: max_stress,
        linear_deflection_mm: mm(w_n * l.powi(4) / (384.0 * e_pa * inertia)),
        reaction_start_kn: w_kn * l / 2.0,
        reaction_end_kn: w_kn * l / 2.0,
        shear_diagram: vec![0.0; SAMPLE_POINTS],
        moment_diagram: vec![0.0; SAMPLE_POINTS],
        deflection_curve: vec![0.0; SAMPLE_POINTS],
        stress_distribution: sampled(l, |x| {
            let xi = x / l;
            max_stress * (1.0 - 6.0 * xi + 6.0 * xi * xi).abs()
        }),
        coverage: SolverCoverage::PeakOnly,
    }
}
