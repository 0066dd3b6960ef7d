//! # sim_core - Structural Beam Load Simulation Engine
//!
//! `sim_core` computes internal force distributions, stresses, and
//! deflections for single-span beams under simple load shapes, applies an
//! empirical non-linear correction near yield, and produces a safety
//! assessment with an engineering recommendation. All inputs and outputs
//! are JSON-serializable, making it easy to drive from forms, scripts, or
//! assistants.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Permissive**: unknown materials and uncovered beam/load
//!   combinations degrade explicitly instead of erroring
//! - **Preliminary estimation**: classical closed forms with simplified
//!   non-linear and thermal treatment, not certified design
//!
//! ## Quick Start
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
//! println!("Max stress: {:.2} MPa", result.max_stress_mpa);
//! println!("Safety factor: {:.1}", result.safety_factor);
//! println!("{}", result.recommendation);
//! ```
//!
//! ## Modules
//!
//! - [`simulation`] - Orchestrator: one call, one complete result
//! - [`solver`] - Closed-form linear beam analysis and diagrams
//! - [`nonlinear`] - Empirical plasticity/large-deflection corrections
//! - [`safety`] - Safety factor and failure-mode classification
//! - [`recommendation`] - Rule-based recommendation text
//! - [`materials`] - Fixed material catalog with silent-fallback lookup
//! - [`beam`] - Beam/load enumerations and section geometry
//! - [`units`] - Type-safe SI unit wrappers
//! - [`errors`] - Structured error types
//! - [`record`] - Run history container for shells

pub mod beam;
pub mod errors;
pub mod materials;
pub mod nonlinear;
pub mod record;
pub mod recommendation;
pub mod safety;
pub mod simulation;
pub mod solver;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{SimError, SimResult};
pub use materials::Material;
pub use simulation::{simulate, SimulationInput, SimulationResult};
pub use solver::{LinearBeamResponse, SolverCoverage, SAMPLE_POINTS};
