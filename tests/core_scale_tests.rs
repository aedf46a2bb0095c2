use approx::assert_relative_eq;
use plot_dimension::{LinearScale, LogScale, Scale};

#[test]
fn linear_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 600.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.apply(original);
    let recovered = scale.invert(px);

    assert_relative_eq!(recovered, original, max_relative = 1e-12);
}

#[test]
fn linear_inverted_range_reverses_outputs() {
    let scale = LinearScale::new((0.0, 10.0), (600.0, 0.0)).expect("valid scale");

    assert_eq!(scale.apply(0.0), 600.0);
    assert_eq!(scale.apply(10.0), 0.0);
    assert_eq!(scale.apply(5.0), 300.0);
}

#[test]
fn linear_nice_rounds_the_domain_only() {
    let mut scale = LinearScale::new((0.1234, 0.9876), (0.0, 417.0)).expect("valid scale");
    scale.nice();

    assert_eq!(scale.domain(), (0.1, 1.0));
    assert_eq!(scale.range(), (0.0, 417.0));
}

#[test]
fn linear_degenerate_domain_maps_to_range_start() {
    let scale = LinearScale::new((5.0, 5.0), (13.0, 200.0)).expect("valid scale");

    assert_eq!(scale.apply(-100.0), 13.0);
    assert_eq!(scale.apply(5.0), 13.0);
    assert_eq!(scale.apply(100.0), 13.0);
}

#[test]
fn linear_degenerate_range_inverts_to_domain_start() {
    let scale = LinearScale::new((5.0, 10.0), (42.0, 42.0)).expect("valid scale");
    assert_eq!(scale.invert(0.0), 5.0);
}

#[test]
fn linear_ticks_are_round_and_direction_preserving() {
    let ascending = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("valid scale");
    let ticks = ascending.ticks(10);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(100.0));
    assert!(ticks.windows(2).all(|pair| pair[1] - pair[0] == 10.0));

    let descending = LinearScale::new((100.0, 0.0), (0.0, 1.0)).expect("valid scale");
    let reversed = descending.ticks(10);
    assert_eq!(reversed.first().copied(), Some(100.0));
    assert_eq!(reversed.last().copied(), Some(0.0));
}

#[test]
fn non_finite_bounds_are_rejected() {
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());
    assert!(LogScale::new((f64::NEG_INFINITY, 1.0), (0.0, 1.0)).is_err());

    let mut scale = LinearScale::new((0.0, 1.0), (0.0, 1.0)).expect("valid scale");
    assert!(scale.set_domain(f64::NAN, 1.0).is_err());
    assert!(scale.set_range(0.0, f64::NAN).is_err());
}

#[test]
fn log_round_trip_within_tolerance() {
    let scale = LogScale::new((1.0, 1000.0), (0.0, 480.0)).expect("valid scale");

    let original = 31.6;
    let px = scale.apply(original);
    let recovered = scale.invert(px);

    assert_relative_eq!(recovered, original, max_relative = 1e-9);
}

#[test]
fn log_apply_spaces_decades_evenly() {
    let scale = LogScale::new((1.0, 1000.0), (0.0, 3.0)).expect("valid scale");

    assert_relative_eq!(scale.apply(1.0), 0.0, epsilon = 1e-12);
    assert_relative_eq!(scale.apply(10.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(scale.apply(100.0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(scale.apply(1000.0), 3.0, epsilon = 1e-12);
}

#[test]
fn log_apply_yields_nan_outside_the_positive_region() {
    let scale = LogScale::new((1.0, 1000.0), (0.0, 1.0)).expect("valid scale");
    assert!(scale.apply(0.0).is_nan());
    assert!(scale.apply(-5.0).is_nan());

    let zero_domain = LogScale::new((0.0, 1000.0), (0.0, 1.0)).expect("valid scale");
    assert!(zero_domain.apply(10.0).is_nan());
}

#[test]
fn log_nice_rounds_to_whole_decades() {
    let mut scale = LogScale::new((3.0, 400.0), (0.0, 1.0)).expect("valid scale");
    scale.nice();
    assert_eq!(scale.domain(), (1.0, 1000.0));

    let mut non_positive = LogScale::new((0.0, 400.0), (0.0, 1.0)).expect("valid scale");
    non_positive.nice();
    assert_eq!(non_positive.domain(), (0.0, 400.0));
}

#[test]
fn log_ticks_emit_the_clamped_sub_decade_ladder() {
    let scale = LogScale::new((1.0, 100.0), (0.0, 1.0)).expect("valid scale");
    let ticks = scale.ticks();

    // 1..9, 10..90 by tens, then 100.
    assert_eq!(ticks.len(), 19);
    assert_eq!(ticks.first().copied(), Some(1.0));
    assert_eq!(ticks.last().copied(), Some(100.0));
    assert!(ticks.contains(&30.0));
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn log_ticks_preserve_descending_direction() {
    let scale = LogScale::new((100.0, 1.0), (0.0, 1.0)).expect("valid scale");
    let ticks = scale.ticks();
    assert_eq!(ticks.first().copied(), Some(100.0));
    assert_eq!(ticks.last().copied(), Some(1.0));
}

#[test]
fn scale_enum_dispatches_to_the_active_variant() {
    let linear = LinearScale::new((0.0, 10.0), (0.0, 1.0)).expect("valid scale");
    let log = LogScale::new((1.0, 100.0), (0.0, 1.0)).expect("valid scale");

    let as_linear = Scale::Linear(linear);
    assert!(!as_linear.is_log());
    assert_eq!(as_linear.apply(5.0), 0.5);
    assert_eq!(as_linear.domain(), (0.0, 10.0));
    assert_eq!(as_linear.ticks(10).len(), 11);

    let as_log = Scale::Log(log);
    assert!(as_log.is_log());
    assert_eq!(as_log.range(), (0.0, 1.0));
    // Log scales ignore the requested count and emit the full ladder.
    assert_eq!(as_log.ticks(1).len(), 19);
    assert_eq!(as_log.ticks(50).len(), 19);
}
