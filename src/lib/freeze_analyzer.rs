//! Post-processes a [`NetworkResult`] into a freeze-risk verdict: where
//! along the run the fluid is coldest, whether it ever reaches the
//! freezing point, and how much margin separates the run from that
//! outcome.

use crate::network_integrator::NetworkResult;

/// Freezing point of the working fluid, °C. Fixed at the nominal value
/// for water; a different fluid's freeze point is not modeled.
pub const DEFAULT_FREEZE_POINT_C: f64 = 0.0;

/// Default safety margin above the freeze point, °C: a run whose minimum
/// temperature falls within this band of freezing is flagged as marginal
/// even if it never actually reaches 0 °C.
pub const DEFAULT_SAFETY_MARGIN_C: f64 = 5.0;

/// Freeze-risk classification for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FreezeSeverity {
    /// The run's minimum temperature stays above the safety margin.
    Safe,
    /// The run's minimum temperature is within the safety margin of
    /// freezing but never reaches it.
    Marginal,
    /// The run reached the freezing point somewhere along its length.
    Critical,
}

/// Freeze-risk analysis of a completed network run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreezeAnalysis {
    /// True if the run reached the freezing point anywhere.
    pub freeze_detected: bool,
    /// Distance from the inlet at which the fluid first crosses the
    /// freezing point, m. `None` if the run never freezes.
    pub freeze_position_m: Option<f64>,
    /// The minimum fluid temperature anywhere in the run, °C.
    pub min_temperature_c: f64,
    /// Distance from the inlet at which the minimum temperature occurs, m.
    pub min_temperature_position_m: f64,
    /// `min_temperature_c - freeze_point_c`. Negative once frozen.
    pub margin_to_freeze_c: f64,
    /// `min_temperature_c - (freeze_point_c + safety_margin_c)`. Negative
    /// once inside the safety margin, whether or not actually frozen.
    pub margin_to_safety_c: f64,
    /// Overall severity classification.
    pub severity: FreezeSeverity,
}

/// Performs freeze-risk analysis over a network run's temperature
/// profile, using explicit freeze-point and safety-margin thresholds.
pub fn analyze(result: &NetworkResult, freeze_point_c: f64, safety_margin_c: f64) -> FreezeAnalysis {
    let (min_index, &min_temperature_c) = result
        .temperatures_c
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).expect("temperatures are always finite"))
        .expect("a network run always has at least one temperature sample");
    let min_temperature_position_m = result.positions_m[min_index];

    let freeze_position_m = freeze_crossing_position(result, freeze_point_c);
    let freeze_detected = freeze_position_m.is_some();

    let margin_to_freeze_c = min_temperature_c - freeze_point_c;
    let margin_to_safety_c = min_temperature_c - (freeze_point_c + safety_margin_c);

    let severity = if freeze_detected {
        FreezeSeverity::Critical
    } else if margin_to_safety_c <= 0.0 {
        FreezeSeverity::Marginal
    } else {
        FreezeSeverity::Safe
    };

    FreezeAnalysis {
        freeze_detected,
        freeze_position_m,
        min_temperature_c,
        min_temperature_position_m,
        margin_to_freeze_c,
        margin_to_safety_c,
        severity,
    }
}

/// Performs freeze-risk analysis using the default freeze point (0 °C)
/// and default safety margin (5 °C).
pub fn analyze_default(result: &NetworkResult) -> FreezeAnalysis {
    analyze(result, DEFAULT_FREEZE_POINT_C, DEFAULT_SAFETY_MARGIN_C)
}

/// Finds the distance from the inlet at which the temperature profile
/// first crosses `freeze_point_c`, interpolating linearly between the
/// bracketing samples. Returns the inlet position if the run starts at
/// or below the freeze point already.
fn freeze_crossing_position(result: &NetworkResult, freeze_point_c: f64) -> Option<f64> {
    let temperatures = &result.temperatures_c;
    let positions = &result.positions_m;

    if temperatures[0] <= freeze_point_c {
        return Some(positions[0]);
    }

    for window in temperatures.windows(2).enumerate() {
        let (i, pair) = window;
        let (t_lo, t_hi) = (pair[0], pair[1]);
        if t_lo > freeze_point_c && t_hi <= freeze_point_c {
            let fraction = (t_lo - freeze_point_c) / (t_lo - t_hi);
            let position = positions[i] + fraction * (positions[i + 1] - positions[i]);
            return Some(position);
        }
    }
    None
}
