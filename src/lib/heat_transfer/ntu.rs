//! NTU–ε outlet-temperature model for a segment exchanging heat with a
//! constant-temperature ambient (capacity-rate ratio C_r = 0).

/// Number of transfer units: NTU = UA / (ṁ·cp).
pub fn ntu(ua_w_per_k: f64, mass_flow_kg_s: f64, cp_j_kg_k: f64) -> f64 {
    ua_w_per_k / (mass_flow_kg_s * cp_j_kg_k)
}

/// Heat-exchanger effectiveness for C_r = 0: ε = 1 − exp(−NTU).
pub fn effectiveness(ntu: f64) -> f64 {
    1.0 - (-ntu).exp()
}

/// Outlet temperature: T_out = T_amb + (T_in − T_amb)·exp(−NTU).
pub fn outlet_temperature(inlet_temp_c: f64, ambient_temp_c: f64, ntu: f64) -> f64 {
    ambient_temp_c + (inlet_temp_c - ambient_temp_c) * (-ntu).exp()
}

/// Heat lost over the segment: Q_loss = ṁ·cp·(T_in − T_out).
pub fn heat_loss(mass_flow_kg_s: f64, cp_j_kg_k: f64, inlet_temp_c: f64, outlet_temp_c: f64) -> f64 {
    mass_flow_kg_s * cp_j_kg_k * (inlet_temp_c - outlet_temp_c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_ntu_means_no_change() {
        assert_relative_eq!(outlet_temperature(60.0, -10.0, 0.0), 60.0, max_relative = 1e-12);
        assert_relative_eq!(effectiveness(0.0), 0.0, max_relative = 1e-12);
    }

    #[test]
    fn large_ntu_approaches_ambient() {
        let t_out = outlet_temperature(60.0, -10.0, 50.0);
        assert_relative_eq!(t_out, -10.0, max_relative = 1e-6);
        assert_relative_eq!(effectiveness(50.0), 1.0, max_relative = 1e-6);
    }

    #[test]
    fn heat_loss_matches_enthalpy_drop() {
        let q = heat_loss(2.0, 4180.0, 60.0, 55.0);
        assert_relative_eq!(q, 2.0 * 4180.0 * 5.0, max_relative = 1e-12);
    }
}
