//! Reynolds number, flow-regime classification and friction-factor
//! correlations.

use crate::errors::{EngineError, EngineResult};
use crate::warnings::{Warning, WarningSink};
use std::f64::consts::PI;

/// Upper bound of the laminar regime. Re < this value is laminar. Fixed;
/// no other component may redefine it.
pub const RE_LAMINAR_MAX: f64 = 2300.0;

/// Lower bound of the turbulent regime. Re > this value is turbulent.
/// Fixed; no other component may redefine it.
pub const RE_TURBULENT_MIN: f64 = 4000.0;

/// Iteration cap for Colebrook–White fixed-point iteration.
pub const COLEBROOK_MIN_ITERATIONS: usize = 20;

/// Convergence tolerance for Colebrook–White fixed-point iteration.
pub const COLEBROOK_TOLERANCE: f64 = 1e-6;

/// Flow-regime classification, extended with the `Frozen` tag a segment
/// is given once its outlet has been clamped to the freezing point.
/// The three hydraulic regimes are assigned only by [`regime`]; `Frozen`
/// is assigned downstream, by the network integrator's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowRegime {
    /// Re < [`RE_LAMINAR_MAX`].
    Laminar,
    /// [`RE_LAMINAR_MAX`] ≤ Re ≤ [`RE_TURBULENT_MIN`].
    Transitional,
    /// Re > [`RE_TURBULENT_MIN`].
    Turbulent,
    /// The segment's outlet reached the freezing point and was clamped.
    Frozen,
}

/// Which method was used to evaluate a turbulent friction factor, exposed
/// so callers/tests can inspect the dispatch instead of it being opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrictionMethod {
    /// `f = 64 / Re`.
    Laminar,
    /// Explicit Churchill (1977) correlation, valid across all regimes.
    Churchill,
    /// Iterative Colebrook–White fixed-point solve.
    Colebrook,
    /// Linear interpolation across the transitional band.
    TransitionalInterpolation,
}

/// Caller's choice of turbulent friction-factor method. Ignored outside
/// the turbulent regime (laminar always uses `64/Re`; the transitional
/// band always interpolates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurbulentFrictionMethod {
    /// Explicit Churchill correlation (default).
    #[default]
    Churchill,
    /// Iterative Colebrook–White solve.
    Colebrook,
}

/// Reynolds number: Re = ρVD/μ. All inputs must be finite; V may be zero
/// but not negative (negative velocity has no meaning for this scalar
/// formulation — direction is not modeled).
pub fn reynolds(density_kg_m3: f64, velocity_m_s: f64, diameter_m: f64, viscosity_pa_s: f64) -> EngineResult<f64> {
    require_positive("density_kg_m3", density_kg_m3)?;
    require_non_negative("velocity_m_s", velocity_m_s)?;
    require_positive("diameter_m", diameter_m)?;
    require_positive("viscosity_pa_s", viscosity_pa_s)?;
    Ok(density_kg_m3 * velocity_m_s * diameter_m / viscosity_pa_s)
}

/// Classifies a Reynolds number into a flow regime using the fixed
/// thresholds [`RE_LAMINAR_MAX`]/[`RE_TURBULENT_MIN`].
pub fn regime(re: f64) -> FlowRegime {
    if re < RE_LAMINAR_MAX {
        FlowRegime::Laminar
    } else if re <= RE_TURBULENT_MIN {
        FlowRegime::Transitional
    } else {
        FlowRegime::Turbulent
    }
}

fn churchill_darcy(re: f64, relative_roughness: f64) -> f64 {
    let re = re.abs();
    let a_term = {
        let seven_over_re = 7.0 / re;
        let reynolds_term = seven_over_re.powf(0.9);
        let roughness_term = 0.27 * relative_roughness;
        let log_fraction = 1.0 / (reynolds_term + roughness_term);
        (2.457 * log_fraction.ln()).powf(16.0)
    };
    let b_term = (37530.0_f64 / re).powf(16.0);
    let laminar_term = (8.0 / re).powf(12.0);
    let turbulent_term = (1.0 / (a_term + b_term)).powf(1.5);
    8.0 * (laminar_term + turbulent_term).powf(1.0 / 12.0)
}

/// Colebrook–White implicit equation, solved by fixed-point iteration
/// starting from the Churchill estimate. Runs for at least
/// [`COLEBROOK_MIN_ITERATIONS`] iterations or until successive friction
/// factors differ by less than [`COLEBROOK_TOLERANCE`].
fn colebrook_darcy(re: f64, relative_roughness: f64) -> EngineResult<f64> {
    let mut f = churchill_darcy(re, relative_roughness);
    for _ in 0..COLEBROOK_MIN_ITERATIONS {
        let rhs = -2.0 * ((relative_roughness / 3.7) + (2.51 / (re * f.sqrt()))).log10();
        let f_next = 1.0 / (rhs * rhs);
        if (f_next - f).abs() < COLEBROOK_TOLERANCE {
            return Ok(f_next);
        }
        f = f_next;
    }
    if f.is_finite() && f > 0.0 {
        Ok(f)
    } else {
        Err(EngineError::NumericFailure {
            reynolds: re,
            relative_roughness,
        })
    }
}

/// Computes the Darcy friction factor for the regime implied by `re`,
/// using `method` to pick between Churchill and Colebrook–White in the
/// turbulent branch (ignored elsewhere). The transitional band
/// interpolates linearly between the laminar value at Re = 2300 and the
/// turbulent value at Re = 4000, and raises
/// [`Warning::TransitionZoneFriction`] on `sink` to flag the physical
/// uncertainty this entails.
pub fn friction_factor(
    re: f64,
    relative_roughness: f64,
    method: TurbulentFrictionMethod,
    sink: &mut dyn WarningSink,
) -> EngineResult<(f64, FrictionMethod)> {
    require_non_negative("relative_roughness", relative_roughness)?;
    if re == 0.0 {
        return Err(EngineError::InvalidInput {
            field: "reynolds_number",
            value: "0".to_string(),
            reason: "friction factor is undefined at Re = 0",
        });
    }

    match regime(re) {
        FlowRegime::Laminar => Ok((64.0 / re, FrictionMethod::Laminar)),
        FlowRegime::Turbulent => turbulent_friction_factor(re, relative_roughness, method),
        FlowRegime::Transitional => {
            let f_lo = 64.0 / RE_LAMINAR_MAX;
            let (f_hi, _) = turbulent_friction_factor(RE_TURBULENT_MIN, relative_roughness, method)?;
            let t = (re - RE_LAMINAR_MAX) / (RE_TURBULENT_MIN - RE_LAMINAR_MAX);
            sink.warn(Warning::TransitionZoneFriction { reynolds: re });
            Ok((f_lo + t * (f_hi - f_lo), FrictionMethod::TransitionalInterpolation))
        }
        FlowRegime::Frozen => unreachable!("regime() never returns Frozen"),
    }
}

fn turbulent_friction_factor(
    re: f64,
    relative_roughness: f64,
    method: TurbulentFrictionMethod,
) -> EngineResult<(f64, FrictionMethod)> {
    match method {
        TurbulentFrictionMethod::Churchill => Ok((churchill_darcy(re, relative_roughness), FrictionMethod::Churchill)),
        TurbulentFrictionMethod::Colebrook => match colebrook_darcy(re, relative_roughness) {
            Ok(f) => Ok((f, FrictionMethod::Colebrook)),
            Err(_) => Ok((churchill_darcy(re, relative_roughness), FrictionMethod::Churchill)),
        },
    }
}

/// Mean velocity from mass flow rate: V = ṁ / (ρ·π·D²/4).
pub fn velocity_from_mdot(mass_flow_kg_s: f64, density_kg_m3: f64, diameter_m: f64) -> EngineResult<f64> {
    require_positive("mass_flow_kg_s", mass_flow_kg_s)?;
    require_positive("density_kg_m3", density_kg_m3)?;
    require_positive("diameter_m", diameter_m)?;
    let area = PI * diameter_m * diameter_m / 4.0;
    Ok(mass_flow_kg_s / (density_kg_m3 * area))
}

/// Darcy–Weisbach pressure drop: ΔP = f·(L/D)·(ρV²/2).
pub fn pressure_drop_darcy(
    friction_factor: f64,
    length_m: f64,
    diameter_m: f64,
    density_kg_m3: f64,
    velocity_m_s: f64,
) -> EngineResult<f64> {
    require_non_negative("friction_factor", friction_factor)?;
    require_non_negative("length_m", length_m)?;
    require_positive("diameter_m", diameter_m)?;
    require_non_negative("density_kg_m3", density_kg_m3)?;
    require_non_negative("velocity_m_s", velocity_m_s)?;
    Ok(friction_factor * (length_m / diameter_m) * (density_kg_m3 * velocity_m_s * velocity_m_s / 2.0))
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> EngineResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::InvalidInput {
            field,
            value: format!("{value}"),
            reason: "must be finite and strictly positive",
        });
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> EngineResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::InvalidInput {
            field,
            value: format!("{value}"),
            reason: "must be finite and non-negative",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warnings::NullSink;
    use approx::assert_relative_eq;

    #[test]
    fn regime_thresholds_match_spec() {
        assert_eq!(regime(2299.0), FlowRegime::Laminar);
        assert_eq!(regime(2300.0), FlowRegime::Transitional);
        assert_eq!(regime(4000.0), FlowRegime::Transitional);
        assert_eq!(regime(4001.0), FlowRegime::Turbulent);
    }

    #[test]
    fn laminar_friction_factor_is_64_over_re() {
        let mut sink = NullSink;
        let (f, method) = friction_factor(1000.0, 0.001, TurbulentFrictionMethod::Churchill, &mut sink).unwrap();
        assert_relative_eq!(f, 64.0 / 1000.0, max_relative = 1e-9);
        assert_eq!(method, FrictionMethod::Laminar);
    }

    #[test]
    fn friction_factor_continuity_near_laminar_boundary() {
        let mut sink = NullSink;
        let (f_lo, _) = friction_factor(2299.0, 0.0001, TurbulentFrictionMethod::Churchill, &mut sink).unwrap();
        let (f_hi, _) = friction_factor(2301.0, 0.0001, TurbulentFrictionMethod::Churchill, &mut sink).unwrap();
        assert!((f_lo - f_hi).abs() / f_lo < 0.05);
    }

    #[test]
    fn friction_factor_continuity_near_turbulent_boundary() {
        let mut sink = NullSink;
        let (f_lo, _) = friction_factor(3999.0, 0.0001, TurbulentFrictionMethod::Churchill, &mut sink).unwrap();
        let (f_hi, _) = friction_factor(4001.0, 0.0001, TurbulentFrictionMethod::Churchill, &mut sink).unwrap();
        assert!((f_lo - f_hi).abs() / f_lo < 0.05);
    }

    #[test]
    fn transitional_band_emits_warning() {
        use crate::warnings::CollectingSink;
        let mut sink = CollectingSink::default();
        let (_, method) = friction_factor(3000.0, 0.0001, TurbulentFrictionMethod::Churchill, &mut sink).unwrap();
        assert_eq!(method, FrictionMethod::TransitionalInterpolation);
        assert_eq!(sink.warnings.len(), 1);
        assert!(matches!(sink.warnings[0], Warning::TransitionZoneFriction { .. }));
    }

    #[test]
    fn colebrook_and_churchill_agree_closely() {
        let mut sink = NullSink;
        let (f_churchill, _) = friction_factor(50000.0, 0.0002, TurbulentFrictionMethod::Churchill, &mut sink).unwrap();
        let (f_colebrook, _) = friction_factor(50000.0, 0.0002, TurbulentFrictionMethod::Colebrook, &mut sink).unwrap();
        assert_relative_eq!(f_churchill, f_colebrook, max_relative = 0.05);
    }

    #[test]
    fn velocity_and_pressure_drop_are_positive() {
        let v = velocity_from_mdot(2.0, 983.0, 0.0525).unwrap();
        assert!(v > 0.0);
        let dp = pressure_drop_darcy(0.02, 5.0, 0.0525, 983.0, v).unwrap();
        assert!(dp > 0.0);
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(reynolds(-1.0, 1.0, 0.05, 1e-3).is_err());
        assert!(velocity_from_mdot(-1.0, 1000.0, 0.05).is_err());
        assert!(pressure_drop_darcy(-0.1, 1.0, 0.05, 1000.0, 1.0).is_err());
    }
}
