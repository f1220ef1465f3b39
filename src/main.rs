//! Demo binary: runs a handful of representative pipe scenarios and
//! prints their temperature, pressure and freeze-risk outcomes. Warnings
//! raised during the solve are forwarded to `log`, so run with
//! `RUST_LOG=warn` to see them.

use pipe_freeze_rust::{simulate, Ambient, FluidInlet, GeometrySpec, InsulationLayer, LogSink, NetworkConfig};

fn main() {
    env_logger::init();

    run_scenario(
        "bare steel pipe, mild cold",
        GeometrySpec::new(0.0525, 0.0603, 0.000045, 100.0, "steel").unwrap(),
        FluidInlet::new(60.0, 3.0, 1.5).unwrap(),
        Ambient::new(-5.0, 3.0).unwrap(),
        None,
        20,
    );

    run_scenario(
        "insulated pipe, severe cold",
        GeometrySpec::new(0.0525, 0.0603, 0.000045, 200.0, "steel").unwrap(),
        FluidInlet::new(50.0, 3.0, 1.0).unwrap(),
        Ambient::new(-25.0, 6.0).unwrap(),
        Some(InsulationLayer::new("polyurethane_foam", 0.05).unwrap()),
        40,
    );

    run_scenario(
        "bare plastic pipe, marginal low flow",
        GeometrySpec::new(0.02, 0.025, 0.0000015, 80.0, "pvc").unwrap(),
        FluidInlet::new(10.0, 2.0, 0.05).unwrap(),
        Ambient::new(-15.0, 1.0).unwrap(),
        None,
        20,
    );

    run_scenario(
        "long rural run, already-cold inlet",
        GeometrySpec::new(0.0525, 0.0603, 0.000045, 3000.0, "steel").unwrap(),
        FluidInlet::new(3.0, 5.0, 0.4).unwrap(),
        Ambient::new(-30.0, 4.0).unwrap(),
        None,
        150,
    );
}

fn run_scenario(
    name: &str,
    geometry: GeometrySpec,
    inlet: FluidInlet,
    ambient: Ambient,
    insulation: Option<InsulationLayer>,
    segments: usize,
) {
    println!("--- {name} ---");
    let config = match NetworkConfig::new(geometry, segments, inlet, ambient, insulation) {
        Ok(config) => config,
        Err(err) => {
            println!("invalid configuration: {err}");
            return;
        }
    };

    let mut sink = LogSink;
    match simulate(&config, &mut sink) {
        Ok((result, freeze)) => {
            println!(
                "inlet {:.1} C -> outlet {:.1} C, total dP = {:.3} bar, total heat loss = {:.0} W",
                result.inlet_temperature_c, result.outlet_temperature_c, result.total_pressure_drop_bar, result.total_heat_loss_w
            );
            println!(
                "freeze risk: {:?} (min {:.1} C at {:.1} m, margin to freeze {:.1} C)",
                freeze.severity, freeze.min_temperature_c, freeze.min_temperature_position_m, freeze.margin_to_freeze_c
            );
            if let Some(position) = freeze.freeze_position_m {
                println!("freezes at {position:.1} m from inlet");
            }
        }
        Err(err) => println!("simulation failed: {err}"),
    }
    println!();
}
