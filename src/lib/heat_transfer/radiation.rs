//! Linearized thermal radiation coefficient.
//!
//! The linearization `h_rad = ε·σ·(Ts² + Ta²)(Ts + Ta)` (all temperatures
//! in Kelvin) is an exact restatement of `εσ(Ts⁴ − Ta⁴)` as a linear
//! coefficient — `(Ts² + Ta²)(Ts + Ta)(Ts − Ta) = Ts⁴ − Ta⁴` by the
//! difference-of-squares identity applied twice — so it composes with
//! convection in a single `h_ext` without approximation error against the
//! exact radiation law.

use crate::constants::{celsius_to_kelvin, STEFAN_BOLTZMANN};

/// Linearized radiation coefficient, W/(m²·K), between a surface at
/// `surface_temp_c` with emissivity `emissivity` and surroundings at
/// `ambient_temp_c`.
pub fn h_radiation(surface_temp_c: f64, ambient_temp_c: f64, emissivity: f64) -> f64 {
    let t_s = celsius_to_kelvin(surface_temp_c);
    let t_a = celsius_to_kelvin(ambient_temp_c);
    emissivity * STEFAN_BOLTZMANN * (t_s * t_s + t_a * t_a) * (t_s + t_a)
}
