//! Unit-conversion helpers for presenting results in units other than
//! this engine's internal convention (bar, °C, m³/h).

/// 1 m³/h expressed in US gallons per minute.
pub const M3_PER_H_TO_USGPM: f64 = 4.40286745;

/// 1 bar expressed in pounds per square inch, used to derive the kPa↔psi
/// factor below (1 bar = 100 kPa).
const PSI_PER_BAR: f64 = 14.5037738;

/// 1 kPa expressed in psi.
pub const KPA_TO_PSI: f64 = PSI_PER_BAR / 100.0;

/// Converts a volumetric flow rate from m³/h to US gallons per minute.
pub fn m3_per_h_to_usgpm(flow_m3_h: f64) -> f64 {
    flow_m3_h * M3_PER_H_TO_USGPM
}

/// Converts a volumetric flow rate from US gallons per minute to m³/h.
pub fn usgpm_to_m3_per_h(flow_usgpm: f64) -> f64 {
    flow_usgpm / M3_PER_H_TO_USGPM
}

/// Converts a pressure from kPa to psi.
pub fn kpa_to_psi(pressure_kpa: f64) -> f64 {
    pressure_kpa * KPA_TO_PSI
}

/// Converts a pressure from psi to kPa.
pub fn psi_to_kpa(pressure_psi: f64) -> f64 {
    pressure_psi / KPA_TO_PSI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flow_round_trips_through_usgpm() {
        let original = 12.5;
        let round_tripped = usgpm_to_m3_per_h(m3_per_h_to_usgpm(original));
        assert_relative_eq!(round_tripped, original, max_relative = 1e-9);
    }

    #[test]
    fn pressure_round_trips_through_psi() {
        let original = 350.0;
        let round_tripped = psi_to_kpa(kpa_to_psi(original));
        assert_relative_eq!(round_tripped, original, max_relative = 1e-9);
    }

    #[test]
    fn known_conversion_values() {
        assert_relative_eq!(m3_per_h_to_usgpm(1.0), 4.40286745, max_relative = 1e-9);
        assert_relative_eq!(kpa_to_psi(100.0), 14.5037738, max_relative = 1e-9);
    }
}
