//! Internal forced-convection Nusselt-number correlations (fluid → wall).

use crate::hydraulics::FlowRegime;
use crate::warnings::{Warning, WarningSink};

/// Which Nusselt correlation fired, exposed as a tagged variant so the
/// auto-selection logic is inspectable instead of opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Correlation {
    /// Fully developed laminar flow, constant wall temperature, Nu = 3.66.
    LaminarIsothermal,
    /// Fully developed laminar flow, constant heat flux, Nu = 4.36.
    LaminarUniformFlux,
    /// Hausen's entrance-effect correlation.
    Hausen,
    /// Dittus–Boelter turbulent correlation.
    DittusBoelter,
    /// Gnielinski turbulent correlation.
    Gnielinski,
}

/// Thermal boundary condition assumed for the internal wall, selecting
/// between the two fully-developed-laminar Nusselt constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallCondition {
    /// Constant wall temperature (default).
    #[default]
    Isothermal,
    /// Constant heat flux.
    UniformFlux,
}

/// Direction of heat transfer, selecting the Dittus–Boelter exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalDirection {
    /// Fluid is being heated (n = 0.4).
    Heating,
    /// Fluid is being cooled (n = 0.3).
    Cooling,
}

/// Fully developed laminar Nusselt number: 3.66 (isothermal) or 4.36
/// (uniform flux).
pub fn nu_laminar(wall_condition: WallCondition) -> f64 {
    match wall_condition {
        WallCondition::Isothermal => 3.66,
        WallCondition::UniformFlux => 4.36,
    }
}

/// Hausen's entrance-effect correlation. Valid for Pr ≥ 0.6.
pub fn nu_hausen(diameter_m: f64, length_m: f64, re: f64, pr: f64) -> f64 {
    let d_over_l = diameter_m / length_m;
    let graetz_like = d_over_l * re * pr;
    3.66 + (0.0668 * graetz_like) / (1.0 + 0.04 * graetz_like.powf(2.0 / 3.0))
}

/// Dittus–Boelter turbulent correlation. Valid for Re > 10000,
/// 0.7 ≤ Pr ≤ 160.
pub fn nu_dittus_boelter(re: f64, pr: f64, direction: ThermalDirection) -> f64 {
    let n = match direction {
        ThermalDirection::Heating => 0.4,
        ThermalDirection::Cooling => 0.3,
    };
    0.023 * re.powf(0.8) * pr.powf(n)
}

/// Gnielinski turbulent correlation. Valid for 3000 < Re < 5e6,
/// 0.5 ≤ Pr ≤ 2000. If `friction_factor` is omitted, the Petukhov
/// smooth-pipe estimate `f = (0.79 ln(Re) − 1.64)^-2` is substituted and
/// [`Warning::GnielinskiFrictionFactorOmitted`] is raised, since the
/// omission biases Nu low for rough pipes.
pub fn nu_gnielinski(re: f64, pr: f64, friction_factor: Option<f64>, sink: &mut dyn WarningSink) -> f64 {
    let f = friction_factor.unwrap_or_else(|| {
        sink.warn(Warning::GnielinskiFrictionFactorOmitted { reynolds: re });
        (0.79 * re.ln() - 1.64).powi(-2)
    });
    let f_over_8 = f / 8.0;
    let numerator = f_over_8 * (re - 1000.0) * pr;
    let denominator = 1.0 + 12.7 * f_over_8.sqrt() * (pr.powf(2.0 / 3.0) - 1.0);
    numerator / denominator
}

/// Auto-selects an internal-convection Nusselt correlation by regime and
/// Re range: laminar uses the fully-developed constant (Hausen
/// when entrance effects are requested via `use_entrance_effect`);
/// turbulent uses Gnielinski.
#[allow(clippy::too_many_arguments)]
pub fn auto_select_nu(
    regime: FlowRegime,
    diameter_m: f64,
    length_m: f64,
    re: f64,
    pr: f64,
    wall_condition: WallCondition,
    use_entrance_effect: bool,
    friction_factor: Option<f64>,
    sink: &mut dyn WarningSink,
) -> (f64, Correlation) {
    match regime {
        FlowRegime::Laminar | FlowRegime::Transitional => {
            if use_entrance_effect {
                (nu_hausen(diameter_m, length_m, re, pr), Correlation::Hausen)
            } else {
                (nu_laminar(wall_condition), match wall_condition {
                    WallCondition::Isothermal => Correlation::LaminarIsothermal,
                    WallCondition::UniformFlux => Correlation::LaminarUniformFlux,
                })
            }
        }
        FlowRegime::Turbulent => (nu_gnielinski(re, pr, friction_factor, sink), Correlation::Gnielinski),
        FlowRegime::Frozen => (0.0, Correlation::LaminarIsothermal),
    }
}
