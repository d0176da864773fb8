// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over line and bar series.

use chart_core::{Axis, Chart, Series, SeriesType};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();
    chart.y_axis = Axis::new("Y", 0.0, 1.0);
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data(SeriesType::Histogram, vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    // Histograms always include zero in the range
    assert!(chart.y_axis.min <= 0.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_y_keeps_categorical_slots() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("Month", vec!["a".into(), "b".into(), "c".into()]);
    chart.y_axis = Axis::new("kg", 0.0, 1.0).from_zero();
    chart.add_series(Series::from_values(SeriesType::Line, &[10.0, 20.0, 15.0]));

    chart.autoscale_y(0.05);

    assert_eq!(chart.x_axis.min, -0.5);
    assert_eq!(chart.x_axis.max, 2.5);
    // begin_at_zero pins the floor even with padding
    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max > 20.0);
}

#[test]
fn autoscale_empty_chart_is_unit_box() {
    let mut chart = Chart::new();
    chart.autoscale_axes(0.0);
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
}
