//! Couples hydraulics and heat transfer into the T_mean fixed-point
//! iteration that solves one pipe segment: friction factor, convective
//! coefficients, series thermal resistance, and the NTU outlet model,
//! repeated until the mean bulk temperature guess stabilizes.

use crate::errors::{EngineError, EngineResult};
use crate::heat_transfer::{
    self, auto_select_nu, h_external_combined, overall_conductance, total_resistance, WallCondition,
};
use crate::hydraulics::{
    friction_factor, pressure_drop_darcy, regime, reynolds, velocity_from_mdot, FlowRegime,
    TurbulentFrictionMethod,
};
use crate::materials::MaterialRegistry;
use crate::model::{Ambient, FluidInlet, GeometrySpec, InsulationLayer};
use crate::property_tables::PropertyTables;
use crate::warnings::{Warning, WarningSink};
use std::f64::consts::PI;

/// Outcome of solving one pipe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentResult {
    /// Outlet temperature, °C. Never below 0 — the network integrator
    /// clamps and reclassifies the segment as [`FlowRegime::Frozen`]
    /// instead of letting it go negative.
    pub t_out_c: f64,
    /// Pressure drop across the segment, Pa.
    pub delta_p_pa: f64,
    /// Heat lost to ambient over the segment, W.
    pub q_loss_w: f64,
    /// Internal convective coefficient, W/(m²·K).
    pub h_int_w_m2_k: f64,
    /// External convective + radiative coefficient, W/(m²·K), referenced
    /// to the segment's outer diameter (pipe or insulation jacket).
    pub h_ext_w_m2_k: f64,
    /// Overall conductance per unit area, W/(m²·K), referenced to the
    /// outer diameter: UA / (π·D_outer·L).
    pub u_w_m2_k: f64,
    /// Number of transfer units for this segment.
    pub ntu: f64,
    /// Reynolds number of the internal flow.
    pub reynolds: f64,
    /// Darcy friction factor used for the pressure drop.
    pub friction_factor: f64,
    /// Mean internal flow velocity, m/s.
    pub velocity_m_s: f64,
    /// Flow regime classification (never [`FlowRegime::Frozen`] — the
    /// network integrator assigns that downstream).
    pub regime: FlowRegime,
    /// Total series thermal resistance for the segment, K/W.
    pub r_total_k_per_w: f64,
}

/// Solves a single pipe segment by T_mean fixed-point iteration.
///
/// `iterations` repeats the loop: estimate the segment's mean bulk
/// temperature, evaluate fluid properties and heat-transfer
/// coefficients there, solve the NTU outlet model, and feed the new
/// outlet estimate back in. One iteration skips the averaging and uses
/// the inlet temperature directly; two (the default) is enough for the
/// coefficients to stop moving appreciably, since none of the
/// correlations used here are strongly nonlinear over the temperature
/// range a single segment spans.
#[allow(clippy::too_many_arguments)]
pub fn solve_segment(
    geometry: &GeometrySpec,
    inlet: &FluidInlet,
    ambient: &Ambient,
    insulation: Option<&InsulationLayer>,
    iterations: usize,
    turbulent_method: TurbulentFrictionMethod,
    sink: &mut dyn WarningSink,
) -> EngineResult<SegmentResult> {
    if !(1..=10).contains(&iterations) {
        return Err(EngineError::InvalidInput {
            field: "iterations",
            value: format!("{iterations}"),
            reason: "must lie in [1, 10]",
        });
    }

    let tables = PropertyTables::new();
    let registry = MaterialRegistry::new();
    let pipe_material = registry.get(&geometry.material_id)?;

    let outer_diameter_m = match insulation {
        Some(layer) => geometry.outer_diameter_m + 2.0 * layer.thickness_m,
        None => geometry.outer_diameter_m,
    };
    let surface_emissivity = match insulation {
        Some(layer) => registry.get(&layer.material_id)?.emissivity,
        None => pipe_material.emissivity,
    };

    let air = tables.get_air_properties(ambient.temperature_c)?;
    let surface_temp_estimate_c = (inlet.temperature_c + ambient.temperature_c) / 2.0;
    let h_ext_w_m2_k = h_external_combined(
        surface_temp_estimate_c,
        ambient.temperature_c,
        outer_diameter_m,
        ambient.wind_speed_m_s,
        air.density_kg_m3,
        air.viscosity_pa_s,
        air.thermal_conductivity_w_m_k,
        air.specific_heat_j_kg_k,
        air.prandtl,
        surface_emissivity,
    );

    let mut t_out_guess = if iterations == 1 {
        inlet.temperature_c
    } else {
        ((inlet.temperature_c + ambient.temperature_c) / 2.0).max(0.0)
    };

    let mut result = None;
    for _ in 0..iterations {
        let t_avg = if iterations == 1 {
            inlet.temperature_c
        } else {
            (inlet.temperature_c + t_out_guess) / 2.0
        }
        .max(0.0);

        let water = tables.get_water_properties(t_avg, inlet.pressure_bar)?;

        let velocity_m_s =
            velocity_from_mdot(inlet.mass_flow_kg_s, water.density_kg_m3, geometry.inner_diameter_m)?;
        let re = reynolds(water.density_kg_m3, velocity_m_s, geometry.inner_diameter_m, water.viscosity_pa_s)?;
        let flow_regime = regime(re);

        let (f, _friction_method) =
            friction_factor(re, geometry.relative_roughness(), turbulent_method, sink)?;
        let delta_p_pa =
            pressure_drop_darcy(f, geometry.length_m, geometry.inner_diameter_m, water.density_kg_m3, velocity_m_s)?;

        let pr_water = water.viscosity_pa_s * water.specific_heat_j_kg_k / water.thermal_conductivity_w_m_k;
        let (nu_int, _correlation) = auto_select_nu(
            flow_regime,
            geometry.inner_diameter_m,
            geometry.length_m,
            re,
            pr_water,
            WallCondition::Isothermal,
            true,
            Some(f),
            sink,
        );
        let h_int_w_m2_k = nu_int * water.thermal_conductivity_w_m_k / geometry.inner_diameter_m;

        let mut layers = vec![heat_transfer::ResistanceLayer::Convection {
            h_w_m2_k: h_int_w_m2_k,
            diameter_m: geometry.inner_diameter_m,
            length_m: geometry.length_m,
        }];
        layers.push(heat_transfer::ResistanceLayer::Conduction {
            r_inner_m: geometry.inner_diameter_m / 2.0,
            r_outer_m: geometry.outer_diameter_m / 2.0,
            k_w_m_k: pipe_material.thermal_conductivity_w_m_k,
            length_m: geometry.length_m,
        });
        if let Some(layer) = insulation {
            let insulation_material = registry.get(&layer.material_id)?;
            layers.push(heat_transfer::ResistanceLayer::Conduction {
                r_inner_m: geometry.outer_diameter_m / 2.0,
                r_outer_m: outer_diameter_m / 2.0,
                k_w_m_k: insulation_material.thermal_conductivity_w_m_k,
                length_m: geometry.length_m,
            });
        }
        layers.push(heat_transfer::ResistanceLayer::Convection {
            h_w_m2_k: h_ext_w_m2_k,
            diameter_m: outer_diameter_m,
            length_m: geometry.length_m,
        });

        let r_total_k_per_w = total_resistance(&layers);
        let ua_w_per_k = overall_conductance(r_total_k_per_w);
        let ntu_value =
            heat_transfer::number_of_transfer_units(ua_w_per_k, inlet.mass_flow_kg_s, water.specific_heat_j_kg_k);
        let t_out_c = heat_transfer::outlet_temperature(inlet.temperature_c, ambient.temperature_c, ntu_value);
        let q_loss_w =
            heat_transfer::heat_loss(inlet.mass_flow_kg_s, water.specific_heat_j_kg_k, inlet.temperature_c, t_out_c);

        t_out_guess = t_out_c.max(0.0);

        result = Some(SegmentResult {
            t_out_c,
            delta_p_pa,
            q_loss_w,
            h_int_w_m2_k,
            h_ext_w_m2_k,
            u_w_m2_k: ua_w_per_k / (PI * outer_diameter_m * geometry.length_m),
            ntu: ntu_value,
            reynolds: re,
            friction_factor: f,
            velocity_m_s,
            regime: flow_regime,
            r_total_k_per_w,
        });
    }

    sink.warn(Warning::RadiationLinearizationEstimate {
        surface_temp_c: surface_temp_estimate_c,
    });

    Ok(result.expect("loop runs at least once since iterations >= 1"))
}
