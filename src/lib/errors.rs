//! Error taxonomy for the pipe-flow engine.
//!
//! Every fallible boundary in this crate returns [`EngineResult`] rather
//! than panicking. The variants below mirror the five error kinds the
//! engine distinguishes: a bad input, a property lookup outside its
//! tabulated domain, an unknown material id, a network run that exhausts
//! its driving pressure, and a friction-factor iteration that fails to
//! converge.

use thiserror::Error;

/// Crate-wide result alias.
pub type EngineResult<T> = Result<T, EngineError>;

/// The error taxonomy described in the engine's contracts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A contract violation on an input value: non-finite, wrong sign, or
    /// wrong category for the quantity it represents.
    #[error("invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        /// Name of the offending field or quantity.
        field: &'static str,
        /// The offending value, formatted for display.
        value: String,
        /// Human-readable statement of the violated contract.
        reason: &'static str,
    },

    /// A property lookup fell outside the tabulated domain of a property
    /// table (air or water).
    #[error("{table} property lookup out of range: {axis} = {value} (valid range [{min}, {max}])")]
    OutOfRange {
        /// Which table was queried (`"water"` or `"air"`).
        table: &'static str,
        /// Which axis was out of range (`"temperature_C"` or `"pressure_bar"`).
        axis: &'static str,
        /// The offending value.
        value: f64,
        /// Lower bound of the valid domain.
        min: f64,
        /// Upper bound of the valid domain.
        max: f64,
    },

    /// The material id was not found in the [`crate::materials::MaterialRegistry`].
    #[error("unknown material id: {id}")]
    UnknownMaterial {
        /// The id that was looked up.
        id: String,
    },

    /// Cumulative pressure drop drove the running pressure to zero or
    /// below during network integration.
    #[error(
        "pressure exhausted at segment {segment_index}: cumulative ΔP = {cumulative_drop_bar} bar, initial P = {initial_pressure_bar} bar"
    )]
    PressureExhausted {
        /// Index of the segment where the pressure first reached zero.
        segment_index: usize,
        /// Total pressure drop accumulated up to and including that segment, in bar.
        cumulative_drop_bar: f64,
        /// The network's initial inlet pressure, in bar.
        initial_pressure_bar: f64,
    },

    /// Colebrook–White iteration failed to converge within its fixed cap
    /// and the Churchill fallback also failed. Non-fatal occurrences are
    /// handled internally (see `hydraulics::friction_factor`); this
    /// variant is only surfaced when both paths fail.
    #[error("friction factor iteration failed to converge for Re = {reynolds}, eps/D = {relative_roughness}")]
    NumericFailure {
        /// Reynolds number the iteration was attempted at.
        reynolds: f64,
        /// Relative roughness (ε/D) the iteration was attempted at.
        relative_roughness: f64,
    },
}

impl EngineError {
    /// True when this is the specific `OutOfRange` shape the network
    /// integrator recognizes as a frozen-water signal: a water-table
    /// rejection whose low axis bound is the freezing point.
    ///
    /// This is the single documented bridge from an error back into a
    /// state-machine transition (the freeze clamp) — it is deliberately
    /// narrow so that no other `OutOfRange` is ever silently swallowed.
    pub fn is_water_table_rejection_below_freezing(&self) -> bool {
        matches!(
            self,
            EngineError::OutOfRange {
                table: "water",
                axis: "temperature_C",
                value,
                min,
                ..
            } if *value <= *min
        )
    }
}
