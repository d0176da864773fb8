// File: crates/crop-engine/tests/registry.rs
// Purpose: Colour lookup and hex colour parsing.

use crop_engine::{CategoryRegistry, KnownCrop, Rgba, FALLBACK_COLOR};

#[test]
fn catalogue_colours() {
    let reg = CategoryRegistry::new();
    assert_eq!(reg.color_for("Pomodoro").to_hex(), "#FF0000");
    assert_eq!(reg.color_for("Limone").to_hex(), "#FFFF00");
    assert_eq!(reg.color_for("Uva").to_hex(), "#00008B");
    assert_eq!(reg.color_for("Olivo").to_hex(), "#00BFFF");
    assert_eq!(reg.color_for("Grano Duro").to_hex(), "#008000");
    assert_eq!(reg.color_for("Nocciola").to_hex(), "#C8A2C8");
    assert_eq!(reg.color_for("Pesche").to_hex(), "#000000");
}

#[test]
fn unknown_name_falls_back() {
    let reg = CategoryRegistry::new();
    assert_eq!(reg.color_for("Mais"), FALLBACK_COLOR);
    assert_eq!(reg.color_for(""), FALLBACK_COLOR);
    // lookup is case sensitive
    assert_eq!(reg.color_for("pomodoro"), FALLBACK_COLOR);
}

#[test]
fn override_wins_over_catalogue() {
    let white = Rgba::opaque(255, 255, 255);
    let reg = CategoryRegistry::new().with_color("Pomodoro", white);
    assert_eq!(reg.color_for("Pomodoro"), white);
    assert_eq!(reg.color_for("Limone"), KnownCrop::Limone.color());
}

#[test]
fn hex_parsing() {
    assert_eq!(Rgba::from_hex("#00bfff").unwrap(), Rgba::opaque(0, 191, 255));
    assert_eq!(Rgba::from_hex("FF000080").unwrap(), Rgba::opaque(255, 0, 0).with_alpha(128));
    assert_eq!(Rgba::opaque(255, 0, 0).with_alpha(128).to_hex(), "#FF000080");
    assert!(Rgba::from_hex("#12345").is_err());
    assert!(Rgba::from_hex("#GG0000").is_err());
}
