//! Chains [`crate::segment_solver::solve_segment`] across a pipe run: one
//! segment's outlet state becomes the next segment's inlet state.
//! Carries the freeze clamp and the pressure-exhaustion guard that keep
//! the chain from producing an unphysical state (negative temperature or
//! pressure) partway through a run.

use crate::errors::{EngineError, EngineResult};
use crate::hydraulics::{FlowRegime, TurbulentFrictionMethod};
use crate::model::{FluidInlet, NetworkConfig};
use crate::segment_solver::{solve_segment, SegmentResult};
use crate::warnings::{CollectingSink, SegmentWarning, WarningSink};

/// Full result of integrating a [`NetworkConfig`] across its segments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkResult {
    /// Cumulative distance from the inlet at each segment boundary, m.
    /// Length `segments + 1`; `positions_m[0] == 0.0`.
    pub positions_m: Vec<f64>,
    /// Fluid temperature at each segment boundary, °C. Length
    /// `segments + 1`; `temperatures_c[0]` is the network's inlet
    /// temperature.
    pub temperatures_c: Vec<f64>,
    /// Fluid pressure at each segment boundary, bar. Length
    /// `segments + 1`; `pressures_bar[0]` is the network's inlet
    /// pressure.
    pub pressures_bar: Vec<f64>,
    /// Per-segment solver output, in flow order.
    pub segments: Vec<SegmentResult>,
    /// The network's inlet temperature, °C.
    pub inlet_temperature_c: f64,
    /// The final segment's outlet temperature, °C.
    pub outlet_temperature_c: f64,
    /// Total pressure drop across the whole run, bar.
    pub total_pressure_drop_bar: f64,
    /// Total heat lost to ambient across the whole run, W.
    pub total_heat_loss_w: f64,
    /// True if any segment reached the freeze clamp.
    pub any_segment_frozen: bool,
    /// The minimum fluid temperature reached anywhere in the run, °C,
    /// taken over `temperatures_c`.
    pub min_temperature_c: f64,
    /// Distance from the inlet at which `min_temperature_c` occurs, m.
    pub min_temperature_position_m: f64,
    /// Distance from the inlet of the first segment whose outlet was
    /// clamped to the freeze point, m. `None` if no segment froze.
    pub frozen_at_position_m: Option<f64>,
    /// Every non-fatal warning raised while solving the network, tagged
    /// with the segment index that raised it. Also forwarded, untagged,
    /// to the [`WarningSink`] passed into [`NetworkIntegrator::run`].
    pub warnings: Vec<SegmentWarning>,
}

/// Chains segment solves into a full network run, threading a sink for
/// [`Warning`]s tagged with the segment that raised them.
pub struct NetworkIntegrator {
    turbulent_method: TurbulentFrictionMethod,
}

impl Default for NetworkIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkIntegrator {
    /// Creates an integrator using the default turbulent friction method
    /// (Churchill).
    pub fn new() -> Self {
        NetworkIntegrator {
            turbulent_method: TurbulentFrictionMethod::Churchill,
        }
    }

    /// Creates an integrator using an explicit turbulent friction method.
    pub fn with_turbulent_method(turbulent_method: TurbulentFrictionMethod) -> Self {
        NetworkIntegrator { turbulent_method }
    }

    /// Runs the configured network, segment by segment, chaining each
    /// segment's outlet state into the next segment's inlet.
    ///
    /// Two recovery paths keep the chain from aborting on an ordinary
    /// freeze: if a segment's solved outlet temperature drops to or below
    /// 0 °C, it is clamped to 0 °C and the segment is reclassified as
    /// [`FlowRegime::Frozen`] before moving on; and if the water property
    /// table rejects a segment whose inlet is already at or below 0 °C
    /// (the one documented bridge from an error back into this state
    /// machine — see [`EngineError::is_water_table_rejection_below_freezing`]),
    /// the segment is synthesized as a frozen pass-through with zero flux
    /// instead of the error propagating. Any other error — an out-of-range
    /// ambient temperature, an unknown material, a numeric failure —
    /// propagates unchanged. Running out of driving pressure partway
    /// through the run is reported as [`EngineError::PressureExhausted`].
    pub fn run(
        &self,
        config: &NetworkConfig,
        sink: &mut dyn WarningSink,
    ) -> EngineResult<NetworkResult> {
        let segment_length_m = config.segment_length_m();

        let mut positions_m = vec![0.0];
        let mut temperatures_c = vec![config.inlet.temperature_c];
        let mut pressures_bar = vec![config.inlet.pressure_bar];
        let mut segments = Vec::with_capacity(config.segments);

        let mut current_temperature_c = config.inlet.temperature_c;
        let mut current_pressure_bar = config.inlet.pressure_bar;
        let mut total_heat_loss_w = 0.0;
        let mut any_segment_frozen = false;
        let mut warnings = Vec::new();
        let mut min_temperature_c = config.inlet.temperature_c;
        let mut min_temperature_position_m = 0.0;
        let mut frozen_at_position_m = None;

        for index in 0..config.segments {
            let segment_geometry = config.geometry.with_length(segment_length_m);
            let segment_inlet = FluidInlet::new(current_temperature_c, current_pressure_bar, config.inlet.mass_flow_kg_s)?;

            let mut segment_sink = CollectingSink::default();

            let solved = solve_segment(
                &segment_geometry,
                &segment_inlet,
                &config.ambient,
                config.insulation.as_ref(),
                config.iterations,
                self.turbulent_method,
                &mut segment_sink,
            );

            for warning in segment_sink.warnings {
                sink.warn(warning.clone());
                warnings.push(SegmentWarning {
                    segment_index: index,
                    warning,
                });
            }

            let mut result = match solved {
                Ok(result) => result,
                Err(err) if err.is_water_table_rejection_below_freezing() && current_temperature_c <= 0.0 => {
                    SegmentResult {
                        t_out_c: 0.0,
                        delta_p_pa: 0.0,
                        q_loss_w: 0.0,
                        h_int_w_m2_k: 0.0,
                        h_ext_w_m2_k: 0.0,
                        u_w_m2_k: 0.0,
                        ntu: 0.0,
                        reynolds: 0.0,
                        friction_factor: 0.0,
                        velocity_m_s: 0.0,
                        regime: FlowRegime::Frozen,
                        r_total_k_per_w: 0.0,
                    }
                }
                Err(err) => return Err(err),
            };

            let segment_end_position_m = (index + 1) as f64 * segment_length_m;

            if result.t_out_c <= 0.0 {
                result.t_out_c = 0.0;
                result.regime = FlowRegime::Frozen;
                if frozen_at_position_m.is_none() {
                    frozen_at_position_m = Some(segment_end_position_m);
                }
                any_segment_frozen = true;
            }

            let delta_p_bar = result.delta_p_pa / 1.0e5;
            let next_pressure_bar = current_pressure_bar - delta_p_bar;
            if next_pressure_bar <= 0.0 {
                return Err(EngineError::PressureExhausted {
                    segment_index: index,
                    cumulative_drop_bar: config.inlet.pressure_bar - next_pressure_bar,
                    initial_pressure_bar: config.inlet.pressure_bar,
                });
            }

            total_heat_loss_w += result.q_loss_w;
            current_temperature_c = result.t_out_c;
            current_pressure_bar = next_pressure_bar;

            if current_temperature_c < min_temperature_c {
                min_temperature_c = current_temperature_c;
                min_temperature_position_m = segment_end_position_m;
            }

            positions_m.push(segment_end_position_m);
            temperatures_c.push(current_temperature_c);
            pressures_bar.push(current_pressure_bar);
            segments.push(result);
        }

        Ok(NetworkResult {
            positions_m,
            temperatures_c,
            pressures_bar,
            segments,
            inlet_temperature_c: config.inlet.temperature_c,
            outlet_temperature_c: current_temperature_c,
            total_pressure_drop_bar: config.inlet.pressure_bar - current_pressure_bar,
            total_heat_loss_w,
            any_segment_frozen,
            min_temperature_c,
            min_temperature_position_m,
            frozen_at_position_m,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ambient, FluidInlet, GeometrySpec};
    use crate::warnings::NullSink;

    fn config(segments: usize, inlet_temp_c: f64, ambient_temp_c: f64) -> NetworkConfig {
        let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 100.0, "steel").unwrap();
        let inlet = FluidInlet::new(inlet_temp_c, 3.0, 1.5).unwrap();
        let ambient = Ambient::new(ambient_temp_c, 3.0).unwrap();
        NetworkConfig::new(geometry, segments, inlet, ambient, None).unwrap()
    }

    #[test]
    fn network_result_has_one_more_boundary_than_segments() {
        let integrator = NetworkIntegrator::new();
        let mut sink = NullSink;
        let result = integrator.run(&config(10, 60.0, -5.0), &mut sink).unwrap();
        assert_eq!(result.positions_m.len(), 11);
        assert_eq!(result.temperatures_c.len(), 11);
        assert_eq!(result.segments.len(), 10);
        assert_eq!(result.positions_m[0], 0.0);
        assert_eq!(*result.positions_m.last().unwrap(), 100.0);
    }

    #[test]
    fn temperature_decreases_monotonically_toward_cold_ambient() {
        let integrator = NetworkIntegrator::new();
        let mut sink = NullSink;
        let result = integrator.run(&config(10, 60.0, -5.0), &mut sink).unwrap();
        for window in result.temperatures_c.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn long_enough_cold_run_triggers_freeze_clamp() {
        let integrator = NetworkIntegrator::new();
        let mut sink = NullSink;
        let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 5000.0, "steel").unwrap();
        let inlet = FluidInlet::new(5.0, 6.0, 0.3).unwrap();
        let ambient = Ambient::new(-30.0, 3.0).unwrap();
        let long_config = NetworkConfig::new(geometry, 200, inlet, ambient, None).unwrap();
        let result = integrator.run(&long_config, &mut sink).unwrap();
        assert!(result.any_segment_frozen);
        assert_eq!(result.outlet_temperature_c, 0.0);
        assert!(result
            .segments
            .iter()
            .any(|segment| segment.regime == FlowRegime::Frozen));
        assert_eq!(result.min_temperature_c, 0.0);
        let frozen_at = result.frozen_at_position_m.expect("a frozen run reports where it first froze");
        assert!(frozen_at > 0.0 && frozen_at <= *result.positions_m.last().unwrap());
        // Temperature is clamped to 0 from the first freeze onward, so the
        // first strictly-smaller reading (the recorded minimum) coincides
        // with the first freeze position.
        assert_eq!(result.min_temperature_position_m, frozen_at);
    }

    #[test]
    fn non_frozen_run_reports_min_temperature_and_no_frozen_position() {
        let integrator = NetworkIntegrator::new();
        let mut sink = NullSink;
        let result = integrator.run(&config(10, 60.0, -5.0), &mut sink).unwrap();
        assert!(result.frozen_at_position_m.is_none());
        assert_eq!(result.min_temperature_c, result.outlet_temperature_c);
        assert_eq!(result.min_temperature_position_m, *result.positions_m.last().unwrap());
    }

    #[test]
    fn pressure_exhaustion_is_reported() {
        let integrator = NetworkIntegrator::new();
        let mut sink = NullSink;
        let geometry = GeometrySpec::new(0.01, 0.015, 0.0005, 5000.0, "steel").unwrap();
        let inlet = FluidInlet::new(60.0, 1.5, 2.0).unwrap();
        let ambient = Ambient::new(-10.0, 3.0).unwrap();
        let long_config = NetworkConfig::new(geometry, 500, inlet, ambient, None).unwrap();
        let err = integrator.run(&long_config, &mut sink).unwrap_err();
        assert!(matches!(err, EngineError::PressureExhausted { .. }));
    }
}
