//! Physical-constant seed values.

/// Standard gravitational acceleration, m/s².
pub const GRAVITY_M_S2: f64 = 9.81;

/// Stefan–Boltzmann constant, W/(m²·K⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Offset from °C to K.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Converts a Celsius temperature to Kelvin.
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}
