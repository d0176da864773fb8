// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, Color, RenderOptions, Series, SeriesType};

#[test]
fn render_smoke_png() {
    let months: Vec<String> = ["Jan", "Feb", "Mar", "Apr", "May"].iter().map(|s| s.to_string()).collect();
    let mut chart = Chart::new().with_title("Harvest");
    chart.x_axis = Axis::categorical("Month", months);
    chart.y_axis = Axis::new("kg", 0.0, 4.0);
    chart.add_series(
        Series::from_values(SeriesType::Line, &[0.0, 2.0, 1.0, 3.5, 2.5])
            .with_label("Olivo")
            .with_color(Color::from_argb(255, 0x00, 0xBF, 0xFF)),
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_empty_chart() {
    // zero series is a valid state (everything deselected)
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("Month", vec!["Jan".into(), "Feb".into()]);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
