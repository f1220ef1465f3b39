//! Cylindrical thermal resistance composition in series.

use std::f64::consts::PI;

/// One layer in a series thermal-resistance stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResistanceLayer {
    /// Convective film at a given diameter, over the segment length.
    Convection {
        /// Convective coefficient, W/(m²·K).
        h_w_m2_k: f64,
        /// Diameter at which the film acts, m.
        diameter_m: f64,
        /// Segment length, m.
        length_m: f64,
    },
    /// Conductive shell from inner to outer radius.
    Conduction {
        /// Inner radius, m.
        r_inner_m: f64,
        /// Outer radius, m.
        r_outer_m: f64,
        /// Conductivity, W/(m·K).
        k_w_m_k: f64,
        /// Segment length, m.
        length_m: f64,
    },
}

impl ResistanceLayer {
    /// Thermal resistance of this layer, K/W.
    pub fn resistance_k_per_w(&self) -> f64 {
        match *self {
            ResistanceLayer::Convection {
                h_w_m2_k,
                diameter_m,
                length_m,
            } => 1.0 / (h_w_m2_k * PI * diameter_m * length_m),
            ResistanceLayer::Conduction {
                r_inner_m,
                r_outer_m,
                k_w_m_k,
                length_m,
            } => (r_outer_m / r_inner_m).ln() / (2.0 * PI * k_w_m_k * length_m),
        }
    }
}

/// Sums a series of resistance layers into R_total, K/W.
pub fn total_resistance(layers: &[ResistanceLayer]) -> f64 {
    layers.iter().map(ResistanceLayer::resistance_k_per_w).sum()
}

/// Overall thermal conductance, W/K: UA = 1 / R_total.
pub fn overall_conductance(r_total_k_per_w: f64) -> f64 {
    1.0 / r_total_k_per_w
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn series_resistance_is_sum_of_layers() {
        let layers = [
            ResistanceLayer::Convection {
                h_w_m2_k: 500.0,
                diameter_m: 0.05,
                length_m: 5.0,
            },
            ResistanceLayer::Conduction {
                r_inner_m: 0.025,
                r_outer_m: 0.03,
                k_w_m_k: 45.0,
                length_m: 5.0,
            },
            ResistanceLayer::Convection {
                h_w_m2_k: 15.0,
                diameter_m: 0.06,
                length_m: 5.0,
            },
        ];
        let manual_sum: f64 = layers.iter().map(|l| l.resistance_k_per_w()).sum();
        assert_relative_eq!(total_resistance(&layers), manual_sum, max_relative = 1e-12);
    }

    #[test]
    fn ua_is_inverse_of_r_total() {
        let r_total = 0.05;
        assert_relative_eq!(overall_conductance(r_total), 20.0, max_relative = 1e-9);
    }

    #[test]
    fn more_layers_means_more_resistance_and_less_conductance() {
        let base = [ResistanceLayer::Convection {
            h_w_m2_k: 500.0,
            diameter_m: 0.05,
            length_m: 5.0,
        }];
        let extra = [
            base[0],
            ResistanceLayer::Conduction {
                r_inner_m: 0.025,
                r_outer_m: 0.045,
                k_w_m_k: 0.04,
                length_m: 5.0,
            },
        ];
        assert!(total_resistance(&extra) > total_resistance(&base));
        assert!(overall_conductance(total_resistance(&extra)) < overall_conductance(total_resistance(&base)));
    }
}
