//! The observation sink: a capability the host passes into the solver
//! rather than a global logger. Every non-fatal physical approximation the solver
//! makes — a transition-zone friction interpolation, an omitted
//! Gnielinski friction factor, an estimated radiation linearization —
//! is reported through this channel instead of being silently absorbed.

/// A single non-fatal observation raised during a segment or network
/// computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Warning {
    /// Friction factor was computed by linear interpolation across the
    /// transitional regime (2300 ≤ Re ≤ 4000), which carries inherent
    /// physical uncertainty.
    TransitionZoneFriction {
        /// Reynolds number at which the interpolation fired.
        reynolds: f64,
    },
    /// Gnielinski's correlation was evaluated without a caller-supplied
    /// friction factor; the Petukhov smooth-pipe estimate was substituted,
    /// which biases Nu low for rough pipes.
    GnielinskiFrictionFactorOmitted {
        /// Reynolds number at which the substitution fired.
        reynolds: f64,
    },
    /// The linearized radiation coefficient was evaluated using the
    /// estimated surface temperature (T_in + T_amb) / 2 rather than a
    /// solved wall temperature.
    RadiationLinearizationEstimate {
        /// Estimated surface temperature used, in °C.
        surface_temp_c: f64,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::TransitionZoneFriction { reynolds } => write!(
                f,
                "friction factor interpolated across transitional regime at Re = {reynolds:.1}"
            ),
            Warning::GnielinskiFrictionFactorOmitted { reynolds } => write!(
                f,
                "Gnielinski Nu evaluated without a supplied friction factor at Re = {reynolds:.1}; used Petukhov estimate"
            ),
            Warning::RadiationLinearizationEstimate { surface_temp_c } => write!(
                f,
                "radiation coefficient used estimated surface temperature {surface_temp_c:.1} °C"
            ),
        }
    }
}

/// A warning tagged with the index of the segment that raised it, as
/// reported by the network integrator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentWarning {
    /// Index of the segment (0-based) that raised the warning.
    pub segment_index: usize,
    /// The warning itself.
    pub warning: Warning,
}

/// A capability for receiving [`Warning`]s as they are raised.
///
/// Implementations are not required to be thread-safe; the engine's
/// single-threaded, sequential segment loop never calls a sink
/// concurrently with itself.
pub trait WarningSink {
    /// Receive one warning.
    fn warn(&mut self, warning: Warning);
}

/// Discards every warning. Useful for tests and callers that don't care.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn warn(&mut self, _warning: Warning) {}
}

/// Collects every warning into a `Vec` in arrival order, for test
/// assertions or batch inspection after a run.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    /// Warnings collected so far, in the order they were raised.
    pub warnings: Vec<Warning>,
}

impl WarningSink for CollectingSink {
    fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }
}

/// Forwards every warning to the `log` crate at `warn` level. This is the
/// "host observation sink" concrete implementation used by the demo
/// binary; library callers embedded in a larger application are expected
/// to supply their own sink (or reuse this one if they already use `log`).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
    }
}
