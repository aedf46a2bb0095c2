//! Prints axis tick readouts for one dimension in linear and log mode.
//!
//! Run with `cargo run --example axis_readout`.

use plot_dimension::{Axis, DimensionResult, ValueDimension, telemetry};

fn main() -> DimensionResult<()> {
    let _ = telemetry::init_default_tracing();

    let mut dimension = ValueDimension::new();
    dimension.set_domain(1.0, 1000.0)?;
    dimension.set_range(480.0, 0.0)?;

    let mut axis = Axis::new();

    println!("linear axis:");
    dimension.format(&mut axis, 640.0);
    for tick in axis.ticks(dimension.scale()) {
        println!("  {:>10}  at {:7.1}px", tick.label, tick.offset);
    }

    dimension.set_log_scale(true);
    dimension.format(&mut axis, 640.0);

    println!("log axis (unlabeled ticks are gridlines):");
    for tick in axis.ticks(dimension.scale()) {
        let label = if tick.label.is_empty() { "·" } else { &tick.label };
        println!("  {label:>10}  at {:7.1}px", tick.offset);
    }

    Ok(())
}
