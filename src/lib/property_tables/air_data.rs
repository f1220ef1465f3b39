//! Tabulated dry-air properties at 1 atm, −40 °C to 50 °C, from standard
//! air-property references.

/// Temperature grid, °C, ascending, 10 nodes.
pub const TEMPERATURE_GRID_C: [f64; 10] = [
    -40.0, -30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 40.0, 50.0,
];

/// Density, kg/m³, indexed by [`TEMPERATURE_GRID_C`].
pub const DENSITY_KG_M3: [f64; 10] = [
    1.520, 1.453, 1.394, 1.341, 1.292, 1.246, 1.204, 1.164, 1.127, 1.092,
];

/// Dynamic viscosity, Pa·s, indexed by [`TEMPERATURE_GRID_C`].
pub const VISCOSITY_PA_S: [f64; 10] = [
    1.51e-5, 1.56e-5, 1.62e-5, 1.67e-5, 1.72e-5, 1.76e-5, 1.81e-5, 1.86e-5, 1.91e-5, 1.95e-5,
];

/// Thermal conductivity, W/(m·K), indexed by [`TEMPERATURE_GRID_C`].
pub const THERMAL_CONDUCTIVITY_W_M_K: [f64; 10] = [
    0.0201, 0.0208, 0.0215, 0.0223, 0.0243, 0.0250, 0.0257, 0.0265, 0.0272, 0.0279,
];

/// Specific heat capacity, J/(kg·K), indexed by [`TEMPERATURE_GRID_C`].
pub const SPECIFIC_HEAT_J_KG_K: [f64; 10] = [
    1006.0, 1006.0, 1006.0, 1006.0, 1006.0, 1007.0, 1007.0, 1007.0, 1007.0, 1007.0,
];

/// Prandtl number, dimensionless, indexed by [`TEMPERATURE_GRID_C`].
pub const PRANDTL: [f64; 10] = [
    0.728, 0.728, 0.727, 0.726, 0.715, 0.713, 0.711, 0.709, 0.707, 0.705,
];
