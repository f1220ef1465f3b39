//! Tabulated saturated-liquid water properties, 0–100 °C at 1 bar, from
//! standard steam-table references. The pressure axis (1–10 bar) carries
//! a small compressed-liquid correction to density; viscosity, thermal
//! conductivity and specific heat are, as for any near-incompressible
//! liquid in this pressure band, treated as pressure-independent.

/// Temperature grid, °C, ascending, 10 nodes.
pub const TEMPERATURE_GRID_C: [f64; 11] = [
    0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

/// Pressure grid, bar, ascending, 10 nodes.
pub const PRESSURE_GRID_BAR: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

/// Density at 1 bar, kg/m³, indexed by [`TEMPERATURE_GRID_C`].
pub const DENSITY_KG_M3: [f64; 11] = [
    999.8, 999.7, 998.2, 995.6, 992.2, 988.0, 983.2, 977.7, 971.6, 965.3, 958.3,
];

/// Dynamic viscosity, Pa·s, indexed by [`TEMPERATURE_GRID_C`].
pub const VISCOSITY_PA_S: [f64; 11] = [
    1.787e-3, 1.307e-3, 1.002e-3, 0.798e-3, 0.653e-3, 0.547e-3, 0.467e-3, 0.404e-3, 0.355e-3,
    0.315e-3, 0.282e-3,
];

/// Thermal conductivity, W/(m·K), indexed by [`TEMPERATURE_GRID_C`].
pub const THERMAL_CONDUCTIVITY_W_M_K: [f64; 11] = [
    0.561, 0.580, 0.598, 0.615, 0.630, 0.643, 0.653, 0.662, 0.669, 0.673, 0.679,
];

/// Specific heat capacity, J/(kg·K), indexed by [`TEMPERATURE_GRID_C`].
pub const SPECIFIC_HEAT_J_KG_K: [f64; 11] = [
    4217.0, 4192.0, 4182.0, 4178.0, 4179.0, 4181.0, 4185.0, 4190.0, 4196.0, 4205.0, 4216.0,
];

/// Isothermal compressibility correction applied to density per bar above
/// the 1 bar reference column, 1/bar. Liquid water's actual compressibility
/// is about 4.5e-5 per bar; the effect across the full 1–10 bar domain is
/// under 0.05% of density, consistent with treating liquid water as
/// effectively incompressible over this range.
pub const DENSITY_COMPRESSIBILITY_PER_BAR: f64 = 4.5e-5;
