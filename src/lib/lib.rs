// Note: //! indicates crate level documentation
//
//! A library for simulating one-dimensional thermo-hydraulic pipe flow:
//! temperature, pressure and freeze-risk profiles along an insulated or
//! bare pipe carrying water.
//!
//! The engine chains a per-segment solver ([`segment_solver`]) across a
//! pipe divided into `N` equal-length segments ([`network_integrator`]),
//! then post-processes the resulting temperature profile for freeze risk
//! ([`freeze_analyzer`]). Property lookups ([`property_tables`]),
//! material data ([`materials`]) and the underlying hydraulic and
//! heat-transfer correlations ([`hydraulics`], [`heat_transfer`]) are
//! the building blocks the solver composes.
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod freeze_analyzer;
pub mod heat_transfer;
pub mod hydraulics;
pub mod materials;
pub mod model;
pub mod network_integrator;
pub mod property_tables;
pub mod segment_solver;
pub mod units;
pub mod warnings;

pub use errors::{EngineError, EngineResult};
pub use freeze_analyzer::{FreezeAnalysis, FreezeSeverity};
pub use model::{Ambient, FluidInlet, GeometrySpec, InsulationLayer, NetworkConfig};
pub use network_integrator::{NetworkIntegrator, NetworkResult};
pub use segment_solver::SegmentResult;
pub use warnings::{CollectingSink, LogSink, NullSink, SegmentWarning, Warning, WarningSink};

/// Runs a configured network and analyzes it for freeze risk in one
/// call, using the default freeze point and safety margin. Equivalent to
/// `NetworkIntegrator::new().run(config, sink)` followed by
/// `freeze_analyzer::analyze_default`.
///
/// ```rust
/// use pipe_freeze_rust::{simulate, Ambient, FluidInlet, GeometrySpec, NetworkConfig, NullSink};
///
/// let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 50.0, "steel").unwrap();
/// let inlet = FluidInlet::new(60.0, 3.0, 1.5).unwrap();
/// let ambient = Ambient::new(-10.0, 3.0).unwrap();
/// let config = NetworkConfig::new(geometry, 10, inlet, ambient, None).unwrap();
///
/// let mut sink = NullSink;
/// let (result, freeze) = pipe_freeze_rust::simulate(&config, &mut sink).unwrap();
/// assert!(result.outlet_temperature_c < 60.0);
/// assert!(!freeze.freeze_detected);
/// ```
pub fn simulate(
    config: &NetworkConfig,
    sink: &mut dyn WarningSink,
) -> EngineResult<(NetworkResult, FreezeAnalysis)> {
    let result = NetworkIntegrator::new().run(config, sink)?;
    let freeze = freeze_analyzer::analyze_default(&result);
    Ok((result, freeze))
}
