use pipe_freeze_rust::errors::EngineError;
use pipe_freeze_rust::freeze_analyzer::{self, FreezeSeverity};
use pipe_freeze_rust::network_integrator::NetworkIntegrator;
use pipe_freeze_rust::units::{kpa_to_psi, m3_per_h_to_usgpm, psi_to_kpa, usgpm_to_m3_per_h};
use pipe_freeze_rust::warnings::CollectingSink;
use pipe_freeze_rust::{simulate, Ambient, FluidInlet, GeometrySpec, InsulationLayer, NetworkConfig, NullSink};

#[test]
fn warm_bare_pipe_cools_monotonically_and_stays_safe() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 100.0, "steel").unwrap();
    let inlet = FluidInlet::new(60.0, 3.0, 1.5).unwrap();
    let ambient = Ambient::new(-5.0, 3.0).unwrap();
    let config = NetworkConfig::new(geometry, 20, inlet, ambient, None).unwrap();

    let mut sink = NullSink;
    let (result, freeze) = simulate(&config, &mut sink).unwrap();

    assert!(result.outlet_temperature_c < result.inlet_temperature_c);
    assert!(result.outlet_temperature_c > 0.0);
    assert!(result.total_heat_loss_w > 0.0);
    assert!(result.total_pressure_drop_bar > 0.0);
    assert_eq!(freeze.severity, FreezeSeverity::Safe);
    assert!(!freeze.freeze_detected);

    for window in result.temperatures_c.windows(2) {
        assert!(window[1] <= window[0]);
    }
}

#[test]
fn insulation_reduces_total_heat_loss_over_a_full_run() {
    let inlet = FluidInlet::new(55.0, 3.0, 1.2).unwrap();
    let ambient = Ambient::new(-15.0, 4.0).unwrap();

    let bare_geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 150.0, "steel").unwrap();
    let bare_config = NetworkConfig::new(bare_geometry, 15, inlet, ambient, None).unwrap();

    let insulated_geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 150.0, "steel").unwrap();
    let insulation = InsulationLayer::new("mineral_wool", 0.04).unwrap();
    let insulated_config = NetworkConfig::new(insulated_geometry, 15, inlet, ambient, Some(insulation)).unwrap();

    let mut sink = NullSink;
    let (bare_result, _) = simulate(&bare_config, &mut sink).unwrap();
    let (insulated_result, _) = simulate(&insulated_config, &mut sink).unwrap();

    assert!(insulated_result.total_heat_loss_w < bare_result.total_heat_loss_w);
    assert!(insulated_result.outlet_temperature_c > bare_result.outlet_temperature_c);
}

#[test]
fn long_bare_run_in_severe_cold_freezes_and_clamps() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 6000.0, "steel").unwrap();
    let inlet = FluidInlet::new(4.0, 6.0, 0.3).unwrap();
    let ambient = Ambient::new(-30.0, 5.0).unwrap();
    let config = NetworkConfig::new(geometry, 300, inlet, ambient, None).unwrap();

    let mut sink = NullSink;
    let (result, freeze) = simulate(&config, &mut sink).unwrap();

    assert!(result.any_segment_frozen);
    assert_eq!(result.outlet_temperature_c, 0.0);
    assert_eq!(freeze.severity, FreezeSeverity::Critical);
    assert!(freeze.freeze_detected);
    let freeze_position = freeze.freeze_position_m.expect("a detected freeze reports a position");
    assert!(freeze_position > 0.0);
    assert!(freeze_position <= *result.positions_m.last().unwrap());
}

#[test]
fn marginal_run_stays_above_freezing_but_inside_safety_margin() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 300.0, "steel").unwrap();
    let inlet = FluidInlet::new(8.0, 5.0, 1.0).unwrap();
    let ambient = Ambient::new(-10.0, 2.0).unwrap();
    let config = NetworkConfig::new(geometry, 30, inlet, ambient, None).unwrap();

    let mut sink = NullSink;
    let (result, freeze) = simulate(&config, &mut sink).unwrap();

    assert!(!freeze.freeze_detected);
    assert!(result.outlet_temperature_c > 0.0);
    // Either comfortably safe or marginal, but never silently critical
    // without the clamp having fired.
    assert_ne!(freeze.severity, FreezeSeverity::Critical);
}

#[test]
fn narrow_long_run_exhausts_driving_pressure() {
    let geometry = GeometrySpec::new(0.01, 0.015, 0.0005, 5000.0, "steel").unwrap();
    let inlet = FluidInlet::new(60.0, 1.5, 2.0).unwrap();
    let ambient = Ambient::new(-10.0, 3.0).unwrap();
    let config = NetworkConfig::new(geometry, 500, inlet, ambient, None).unwrap();

    let mut sink = NullSink;
    let err = simulate(&config, &mut sink).unwrap_err();
    assert!(matches!(err, EngineError::PressureExhausted { .. }));
}

#[test]
fn unknown_material_propagates_through_the_full_network() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 50.0, "unobtainium").unwrap();
    let inlet = FluidInlet::new(60.0, 3.0, 1.5).unwrap();
    let ambient = Ambient::new(-10.0, 3.0).unwrap();
    let config = NetworkConfig::new(geometry, 5, inlet, ambient, None).unwrap();

    let integrator = NetworkIntegrator::new();
    let mut sink = NullSink;
    let err = integrator.run(&config, &mut sink).unwrap_err();
    assert!(matches!(err, EngineError::UnknownMaterial { .. }));
}

#[test]
fn warnings_are_collected_and_tagged_with_segment_index() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 50.0, "steel").unwrap();
    let inlet = FluidInlet::new(60.0, 3.0, 1.5).unwrap();
    let ambient = Ambient::new(-10.0, 3.0).unwrap();
    let config = NetworkConfig::new(geometry, 5, inlet, ambient, None).unwrap();

    let integrator = NetworkIntegrator::new();
    let mut sink = CollectingSink::default();
    let result = integrator.run(&config, &mut sink).unwrap();

    assert!(!result.warnings.is_empty());
    assert!(result.warnings.iter().all(|w| w.segment_index < 5));
    // Every warning forwarded to the tagged list was also forwarded,
    // untagged, to the caller's sink.
    assert_eq!(sink.warnings.len(), result.warnings.len());
}

#[test]
fn freeze_analyzer_agrees_with_the_network_integrators_own_clamp() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 6000.0, "steel").unwrap();
    let inlet = FluidInlet::new(4.0, 6.0, 0.3).unwrap();
    let ambient = Ambient::new(-30.0, 5.0).unwrap();
    let config = NetworkConfig::new(geometry, 300, inlet, ambient, None).unwrap();

    let integrator = NetworkIntegrator::new();
    let mut sink = NullSink;
    let result = integrator.run(&config, &mut sink).unwrap();
    let freeze = freeze_analyzer::analyze_default(&result);

    assert_eq!(result.any_segment_frozen, freeze.freeze_detected);
}

#[test]
fn unit_conversions_round_trip() {
    assert!((usgpm_to_m3_per_h(m3_per_h_to_usgpm(37.5)) - 37.5).abs() < 1e-9);
    assert!((psi_to_kpa(kpa_to_psi(500.0)) - 500.0).abs() < 1e-9);
}

#[test]
fn invalid_geometry_is_rejected_before_any_simulation_runs() {
    let result = GeometrySpec::new(0.06, 0.05, 0.0, 10.0, "steel");
    assert!(result.is_err());
}

// Scenarios S1-S4 below follow the exact inputs and expected envelopes from
// the engine's test-scenario table, to pin down the end-to-end behavior the
// unit tests above only probe piecewise.

#[test]
fn s1_well_insulated_pipe_stays_warm_and_loses_little_heat() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 100.0, "steel").unwrap();
    let inlet = FluidInlet::new(60.0, 3.0, 2.0).unwrap();
    let ambient = Ambient::new(-10.0, 5.0).unwrap();
    let insulation = InsulationLayer::new("fiberglass", 0.020).unwrap();
    let config = NetworkConfig::new(geometry, 20, inlet, ambient, Some(insulation)).unwrap();

    let mut sink = NullSink;
    let (result, freeze) = simulate(&config, &mut sink).unwrap();

    assert!(!freeze.freeze_detected);
    assert!(result.outlet_temperature_c > 55.0 && result.outlet_temperature_c < 60.0);
    assert!(result.total_heat_loss_w < 8000.0);
}

#[test]
fn s2_bare_pipe_loses_more_heat_than_s1_but_stays_above_forty() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 100.0, "steel").unwrap();
    let inlet = FluidInlet::new(60.0, 3.0, 2.0).unwrap();
    let ambient = Ambient::new(-10.0, 5.0).unwrap();

    let insulated_geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 100.0, "steel").unwrap();
    let insulated_config = NetworkConfig::new(
        insulated_geometry,
        20,
        inlet,
        ambient,
        Some(InsulationLayer::new("fiberglass", 0.020).unwrap()),
    )
    .unwrap();
    let bare_config = NetworkConfig::new(geometry, 20, inlet, ambient, None).unwrap();

    let mut sink = NullSink;
    let (insulated_result, _) = simulate(&insulated_config, &mut sink).unwrap();
    let (bare_result, bare_freeze) = simulate(&bare_config, &mut sink).unwrap();

    assert!(bare_result.outlet_temperature_c < insulated_result.outlet_temperature_c);
    assert!(bare_result.total_heat_loss_w > insulated_result.total_heat_loss_w);
    assert!(!bare_freeze.freeze_detected);
    assert!(bare_result.outlet_temperature_c > 40.0);
}

#[test]
fn s3_long_low_flow_run_cools_below_inlet_with_minimum_at_the_outlet() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 500.0, "steel").unwrap();
    let inlet = FluidInlet::new(40.0, 3.0, 0.5).unwrap();
    let ambient = Ambient::new(-20.0, 10.0).unwrap();
    let insulation = InsulationLayer::new("fiberglass", 0.020).unwrap();
    let config = NetworkConfig::new(geometry, 50, inlet, ambient, Some(insulation)).unwrap();

    let mut sink = NullSink;
    let (result, freeze) = simulate(&config, &mut sink).unwrap();

    assert!(result.outlet_temperature_c < 40.0);
    assert_eq!(freeze.min_temperature_position_m, *result.positions_m.last().unwrap());
}

#[test]
fn s4_short_high_flow_run_barely_cools() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 10.0, "steel").unwrap();
    let inlet = FluidInlet::new(60.0, 3.0, 5.0).unwrap();
    let ambient = Ambient::new(-10.0, 5.0).unwrap();
    let insulation = InsulationLayer::new("fiberglass", 0.020).unwrap();
    let config = NetworkConfig::new(geometry, 5, inlet, ambient, Some(insulation)).unwrap();

    let mut sink = NullSink;
    let (result, freeze) = simulate(&config, &mut sink).unwrap();

    assert!(result.outlet_temperature_c > 59.0);
    assert!(!freeze.freeze_detected);
}

#[test]
fn energy_balance_holds_within_ten_percent_per_segment() {
    let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 100.0, "steel").unwrap();
    let inlet = FluidInlet::new(60.0, 3.0, 1.5).unwrap();
    let ambient = Ambient::new(-10.0, 3.0).unwrap();
    let config = NetworkConfig::new(geometry, 10, inlet, ambient, None).unwrap();

    let mut sink = NullSink;
    let (result, _) = simulate(&config, &mut sink).unwrap();

    let mut t_in = result.inlet_temperature_c;
    for segment in &result.segments {
        let implied_q = inlet.mass_flow_kg_s * 4180.0 * (t_in - segment.t_out_c);
        if segment.q_loss_w.abs() > 1e-9 {
            let relative_error = (segment.q_loss_w - implied_q).abs() / segment.q_loss_w.abs();
            assert!(relative_error <= 0.10, "relative error {relative_error} exceeds 10%");
        }
        t_in = segment.t_out_c;
    }
}

#[test]
fn segment_refinement_converges_as_segment_count_grows() {
    let inlet = FluidInlet::new(55.0, 3.0, 1.5).unwrap();
    let ambient = Ambient::new(-10.0, 4.0).unwrap();

    let run_with = |segments: usize| -> f64 {
        let geometry = GeometrySpec::new(0.0525, 0.0603, 0.000045, 100.0, "steel").unwrap();
        let config = NetworkConfig::new(geometry, segments, inlet, ambient, None).unwrap();
        let mut sink = NullSink;
        simulate(&config, &mut sink).unwrap().0.outlet_temperature_c
    };

    let t_1 = run_with(1);
    let t_10 = run_with(10);
    let t_100 = run_with(100);

    assert!((t_100 - t_10).abs() < 0.1, "N=100 vs N=10 differ by {}", (t_100 - t_10).abs());
    assert!((t_10 - t_1).abs() < 0.5, "N=10 vs N=1 differ by {}", (t_10 - t_1).abs());
}
