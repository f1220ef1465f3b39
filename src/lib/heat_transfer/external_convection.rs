//! External convection over a horizontal cylinder (wall to air).

use crate::constants::{celsius_to_kelvin, GRAVITY_M_S2};

/// Wind speed below which external convection is treated as natural
/// rather than forced.
pub const FORCED_CONVECTION_WIND_THRESHOLD_M_S: f64 = 0.1;

/// Churchill–Bernstein correlation for forced convection over a
/// horizontal cylinder.
pub fn nu_churchill_bernstein(re: f64, pr: f64) -> f64 {
    let base = 0.62 * re.sqrt() * pr.powf(1.0 / 3.0)
        / (1.0 + (0.4 / pr).powf(2.0 / 3.0)).powf(0.25);
    let tail = (1.0 + (re / 282_000.0).powf(5.0 / 8.0)).powf(4.0 / 5.0);
    0.3 + base * tail
}

/// Churchill–Chu correlation for natural convection over a horizontal
/// cylinder, valid across the full Rayleigh-number range.
pub fn nu_churchill_chu(rayleigh: f64, pr: f64) -> f64 {
    let pr_term = (1.0 + (0.559 / pr).powf(9.0 / 16.0)).powf(8.0 / 27.0);
    (0.60 + 0.387 * rayleigh.powf(1.0 / 6.0) / pr_term).powi(2)
}

/// Rayleigh number: Ra = gβΔT·D³ / (ν·α), with β = 1/T_film[K].
pub fn rayleigh(
    surface_temp_c: f64,
    ambient_temp_c: f64,
    diameter_m: f64,
    air_density_kg_m3: f64,
    air_viscosity_pa_s: f64,
    air_thermal_conductivity_w_m_k: f64,
    air_specific_heat_j_kg_k: f64,
) -> f64 {
    let delta_t = (surface_temp_c - ambient_temp_c).abs();
    let t_film_k = celsius_to_kelvin((surface_temp_c + ambient_temp_c) / 2.0);
    let beta = 1.0 / t_film_k;
    let kinematic_viscosity = air_viscosity_pa_s / air_density_kg_m3;
    let thermal_diffusivity =
        air_thermal_conductivity_w_m_k / (air_density_kg_m3 * air_specific_heat_j_kg_k);
    GRAVITY_M_S2 * beta * delta_t * diameter_m.powi(3) / (kinematic_viscosity * thermal_diffusivity)
}

/// Whether external convection should be treated as forced given the
/// wind speed.
pub fn is_forced(wind_speed_m_s: f64) -> bool {
    wind_speed_m_s > FORCED_CONVECTION_WIND_THRESHOLD_M_S
}

/// Computes the external convective coefficient h_conv_ext [W/(m²·K)] for
/// a horizontal cylinder, selecting forced (Churchill–Bernstein) or
/// natural (Churchill–Chu / Rayleigh) convection by wind speed.
#[allow(clippy::too_many_arguments)]
pub fn h_external_convection(
    surface_temp_c: f64,
    ambient_temp_c: f64,
    diameter_m: f64,
    wind_speed_m_s: f64,
    air_density_kg_m3: f64,
    air_viscosity_pa_s: f64,
    air_thermal_conductivity_w_m_k: f64,
    air_specific_heat_j_kg_k: f64,
    air_prandtl: f64,
) -> f64 {
    if is_forced(wind_speed_m_s) {
        let re = air_density_kg_m3 * wind_speed_m_s * diameter_m / air_viscosity_pa_s;
        let nu = nu_churchill_bernstein(re, air_prandtl);
        nu * air_thermal_conductivity_w_m_k / diameter_m
    } else {
        let ra = rayleigh(
            surface_temp_c,
            ambient_temp_c,
            diameter_m,
            air_density_kg_m3,
            air_viscosity_pa_s,
            air_thermal_conductivity_w_m_k,
            air_specific_heat_j_kg_k,
        );
        let nu = nu_churchill_chu(ra, air_prandtl);
        nu * air_thermal_conductivity_w_m_k / diameter_m
    }
}
