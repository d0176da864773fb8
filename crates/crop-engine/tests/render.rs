// File: crates/crop-engine/tests/render.rs
// Purpose: Skia surface redraw bookkeeping and the static dashboard charts.
#![cfg(feature = "render")]

mod common;

use chart_core::Theme;
use crop_engine::render::{aggregate_chart, cost_gain_chart, render_options, to_skia, SkiaChartSurface};
use crop_engine::{CategoryRegistry, CropsView, DashboardConfig, Rgba, WaterUsage};

fn view() -> CropsView<SkiaChartSurface> {
    let data = common::dataset(vec![common::ramp("Olivo", 0.0), common::ramp("Uva", 50.0)]);
    let mut opts = render_options(&DashboardConfig::default().render);
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false;
    let surface = SkiaChartSurface::new(data.months(), opts).expect("surface");
    CropsView::new(data, CategoryRegistry::new(), surface)
}

#[test]
fn redraw_only_when_dirty() {
    let mut v = view();
    assert!(v.surface().is_dirty());
    assert!(v.surface_mut().render_pending());
    assert!(!v.surface_mut().render_pending());
    assert_eq!(v.surface().frames(), 1);

    v.toggle("Uva");
    assert!(v.surface().is_dirty());
    assert_eq!(v.surface().chart().series.len(), 1);
    let (px, w, h, _) = v.surface_mut().rgba8().expect("pixels");
    assert_eq!(px.len(), (w * h * 4) as usize);
    assert_eq!(v.surface().frames(), 2);
}

#[test]
fn y_axis_follows_selection() {
    let mut v = view();
    let both = v.surface().chart().y_axis.max;
    v.toggle("Uva");
    let olivo_only = v.surface().chart().y_axis.max;
    assert!(olivo_only < both);
    assert_eq!(v.surface().chart().y_axis.min, 0.0);
}

#[test]
fn settings_pick_theme() {
    let opts = render_options(&DashboardConfig::default().render);
    assert_eq!(opts.theme.name, Theme::light().name);
    assert_eq!(to_skia(Rgba::opaque(1, 2, 3)).g(), 2);
}

#[test]
fn dashboard_charts_render() {
    let v = view();
    let dash = v.dashboard(&WaterUsage::default());
    let agg = aggregate_chart(&dash.aggregates);
    assert_eq!(agg.series.len(), 2);
    assert_eq!(agg.x_axis.ticks, ["Olivo", "Uva"]);

    let costs = cost_gain_chart(&dash.costs);
    let png = costs.render_to_png_bytes(&render_options(&DashboardConfig::default().render)).expect("png");
    assert_eq!(&png[1..4], b"PNG");
}
