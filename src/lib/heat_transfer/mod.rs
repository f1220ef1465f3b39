//! Nusselt correlations, radiation linearization, cylindrical resistance
//! composition and the NTU-effectiveness outlet model.

pub mod external_convection;
pub mod internal_convection;
pub mod ntu;
pub mod radiation;
pub mod resistance;

pub use external_convection::{h_external_convection, is_forced};
pub use internal_convection::{auto_select_nu, Correlation, ThermalDirection, WallCondition};
pub use ntu::{effectiveness, heat_loss, ntu as number_of_transfer_units, outlet_temperature};
pub use radiation::h_radiation;
pub use resistance::{overall_conductance, total_resistance, ResistanceLayer};

/// Combined external coefficient: h_ext = h_conv_ext + h_rad.
#[allow(clippy::too_many_arguments)]
pub fn h_external_combined(
    surface_temp_c: f64,
    ambient_temp_c: f64,
    diameter_m: f64,
    wind_speed_m_s: f64,
    air_density_kg_m3: f64,
    air_viscosity_pa_s: f64,
    air_thermal_conductivity_w_m_k: f64,
    air_specific_heat_j_kg_k: f64,
    air_prandtl: f64,
    surface_emissivity: f64,
) -> f64 {
    let h_conv = h_external_convection(
        surface_temp_c,
        ambient_temp_c,
        diameter_m,
        wind_speed_m_s,
        air_density_kg_m3,
        air_viscosity_pa_s,
        air_thermal_conductivity_w_m_k,
        air_specific_heat_j_kg_k,
        air_prandtl,
    );
    let h_rad = h_radiation(surface_temp_c, ambient_temp_c, surface_emissivity);
    h_conv + h_rad
}
