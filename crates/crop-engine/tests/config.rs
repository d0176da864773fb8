// File: crates/crop-engine/tests/config.rs
// Purpose: Dashboard TOML parsing and how it feeds registry, water usage and month labels.

mod common;

use crop_engine::{DashboardConfig, EngineError, Rgba};

#[test]
fn empty_file_is_default() {
    let cfg = DashboardConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, DashboardConfig::default());
    assert_eq!(cfg.render.width, 1024);
    assert_eq!(cfg.render.theme, "light");
}

#[test]
fn sections_apply() {
    let cfg = DashboardConfig::from_toml_str(
        r##"
months = ["Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic"]

[colors]
"Mais" = "#FFAA00"

[water]
"Mais" = 1.8
"Olivo" = 4.0

[render]
theme = "dark"
draw_labels = false
"##,
    )
    .unwrap();

    assert_eq!(cfg.registry().color_for("Mais"), Rgba::opaque(255, 170, 0));
    let water = cfg.water_usage();
    assert_eq!(water.coefficient("Mais"), 1.8);
    assert_eq!(water.coefficient("Olivo"), 4.0);
    assert_eq!(water.coefficient("Uva"), 2.5);
    assert_eq!(cfg.render.theme, "dark");
    assert!(!cfg.render.draw_labels);
    assert_eq!(cfg.render.height, 640);

    let data = cfg.apply_months(common::dataset(vec![common::ramp("A", 0.0)])).unwrap();
    assert_eq!(data.months()[4], "Mag");
}

#[test]
fn wrong_month_count_is_rejected() {
    let cfg = DashboardConfig::from_toml_str(r#"months = ["Gen"]"#).unwrap();
    let err = cfg.apply_months(common::dataset(vec![common::ramp("A", 0.0)])).unwrap_err();
    assert!(matches!(err, EngineError::LabelCountMismatch { .. }));
}

#[test]
fn bad_colour_is_a_config_error() {
    let err = DashboardConfig::from_toml_str("[colors]\nMais = \"orange\"").unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}
