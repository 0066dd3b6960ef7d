//! # Beam Definitions
//!
//! Support configurations, load shapes, rectangular section geometry, and
//! the load case record that ties them together.
//!
//! ## Sign Convention
//!
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//! - Positive deflection: downward
//! - Position x measured from the start support (fixed end for cantilevers)
//!
//! ## Example
//! ```
//! use sim_core::beam::{BeamGeometry, BeamType, LoadCase, LoadType};
//!
//! let geometry = BeamGeometry::new(5.0, 0.2, 0.3);
//! // I = wh^3/12 = 0.2 * 0.3^3 / 12 = 4.5e-4 m^4
//! assert!((geometry.moment_of_inertia() - 4.5e-4).abs() < 1e-12);
//!
//! let case = LoadCase::new(BeamType::SimplySupported, LoadType::Point, 10.0);
//! assert_eq!(case.temperature_c, 20.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SimError, SimResult};
use crate::units::{Meters, Millimeters};

/// Support configuration of the beam.
///
/// The set is closed: input forms may submit any of these values, but only
/// simply-supported, cantilever, and fixed-end beams have closed-form
/// solver coverage. The remaining configurations produce an explicit
/// unsupported response rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BeamType {
    /// Pin-roller supports at both ends
    #[default]
    SimplySupported,
    /// Fixed at the start, free at the end
    Cantilever,
    /// Rotationally fixed at both ends
    FixedEnds,
    /// Multiple spans over intermediate supports (no closed form here)
    Continuous,
    /// Span with a cantilevered extension (no closed form here)
    Overhanging,
}

impl BeamType {
    /// All beam types in presentation order
    pub const ALL: [BeamType; 5] = [
        BeamType::SimplySupported,
        BeamType::Cantilever,
        BeamType::FixedEnds,
        BeamType::Continuous,
        BeamType::Overhanging,
    ];

    /// Short code for compact labels
    pub fn code(&self) -> &'static str {
        match self {
            BeamType::SimplySupported => "SS",
            BeamType::Cantilever => "CL",
            BeamType::FixedEnds => "FE",
            BeamType::Continuous => "CO",
            BeamType::Overhanging => "OH",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BeamType::SimplySupported => "Simply supported",
            BeamType::Cantilever => "Cantilever",
            BeamType::FixedEnds => "Fixed at both ends",
            BeamType::Continuous => "Continuous",
            BeamType::Overhanging => "Overhanging",
        }
    }
}

impl std::fmt::Display for BeamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Shape of the applied load.
///
/// The magnitude unit depends on the shape; see [`LoadType::unit_label`].
/// Point, uniform, and triangular loads have solver coverage; moment and
/// partial-uniform loads are accepted but produce an explicit unsupported
/// response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoadType {
    /// Concentrated load (midspan, or at the free end of a cantilever)
    #[default]
    Point,
    /// Uniformly distributed over the full span
    Uniform,
    /// Linearly increasing from zero at the start to peak at the end
    Triangular,
    /// Concentrated applied moment (no closed form here)
    Moment,
    /// Uniform load over part of the span (no closed form here)
    PartialUniform,
}

impl LoadType {
    /// All load types in presentation order
    pub const ALL: [LoadType; 5] = [
        LoadType::Point,
        LoadType::Uniform,
        LoadType::Triangular,
        LoadType::Moment,
        LoadType::PartialUniform,
    ];

    /// Short code for compact labels
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Point => "P",
            LoadType::Uniform => "U",
            LoadType::Triangular => "T",
            LoadType::Moment => "M",
            LoadType::PartialUniform => "PU",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Point => "Point load",
            LoadType::Uniform => "Uniform load",
            LoadType::Triangular => "Triangular load",
            LoadType::Moment => "Applied moment",
            LoadType::PartialUniform => "Partial uniform load",
        }
    }

    /// Unit of the load magnitude for this shape
    pub fn unit_label(&self) -> &'static str {
        match self {
            LoadType::Point => "kN",
            LoadType::Uniform | LoadType::Triangular | LoadType::PartialUniform => "kN/m",
            LoadType::Moment => "kN·m",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Rectangular beam cross-section and span, all in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamGeometry {
    /// Span length (m)
    pub length_m: f64,
    /// Section width (m)
    pub width_m: f64,
    /// Section height (m)
    pub height_m: f64,
}

impl BeamGeometry {
    pub fn new(length_m: f64, width_m: f64, height_m: f64) -> Self {
        BeamGeometry {
            length_m,
            width_m,
            height_m,
        }
    }

    /// Validate that all dimensions are positive, finite reals.
    ///
    /// The solver divides by I and by span length, so degenerate geometry
    /// is rejected at the boundary rather than propagated as NaN/inf.
    pub fn validate(&self) -> SimResult<()> {
        let fields = [
            ("length_m", self.length_m),
            ("width_m", self.width_m),
            ("height_m", self.height_m),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SimError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be a finite number",
                ));
            }
            if value <= 0.0 {
                return Err(SimError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Moment of inertia I = wh³/12 (m⁴)
    pub fn moment_of_inertia(&self) -> f64 {
        self.width_m * self.height_m.powi(3) / 12.0
    }

    /// Section modulus S = I/(h/2) (m³)
    pub fn section_modulus(&self) -> f64 {
        self.moment_of_inertia() / (self.height_m / 2.0)
    }

    /// Cross-sectional area A = wh (m²)
    pub fn area(&self) -> f64 {
        self.width_m * self.height_m
    }

    /// Span length in millimeters (serviceability thresholds work in mm)
    pub fn length_mm(&self) -> f64 {
        Millimeters::from(Meters(self.length_m)).value()
    }
}

fn default_temperature() -> f64 {
    20.0
}

/// A load applied to a beam: support configuration, load shape, magnitude,
/// and service temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Support configuration
    pub beam_type: BeamType,

    /// Load shape
    pub load_type: LoadType,

    /// Load magnitude; kN, kN/m, or kN·m depending on `load_type`
    pub magnitude_kn: f64,

    /// Service temperature (°C); drives yield-strength degradation
    #[serde(default = "default_temperature")]
    pub temperature_c: f64,
}

impl LoadCase {
    /// Create a load case at the default service temperature (20 °C).
    pub fn new(beam_type: BeamType, load_type: LoadType, magnitude_kn: f64) -> Self {
        LoadCase {
            beam_type,
            load_type,
            magnitude_kn,
            temperature_c: default_temperature(),
        }
    }

    /// Override the service temperature.
    pub fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = temperature_c;
        self
    }

    /// Validate the load magnitude (non-negative, finite).
    pub fn validate(&self) -> SimResult<()> {
        if !self.magnitude_kn.is_finite() {
            return Err(SimError::invalid_input(
                "magnitude_kn",
                self.magnitude_kn.to_string(),
                "Load magnitude must be a finite number",
            ));
        }
        if self.magnitude_kn < 0.0 {
            return Err(SimError::invalid_input(
                "magnitude_kn",
                self.magnitude_kn.to_string(),
                "Load magnitude must be non-negative",
            ));
        }
        if !self.temperature_c.is_finite() {
            return Err(SimError::invalid_input(
                "temperature_c",
                self.temperature_c.to_string(),
                "Temperature must be a finite number",
            ));
        }
        Ok(())
    }
}
