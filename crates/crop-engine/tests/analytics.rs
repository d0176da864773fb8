// File: crates/crop-engine/tests/analytics.rs
// Purpose: Monthly totals, water use, thresholds and production snapshots.

mod common;

use crop_engine::analytics::{annual_snapshot, mean, monthly_snapshot, monthly_totals, threshold_payload, water_consumption};
use crop_engine::{Category, EngineError, KnownCrop, WaterUsage};

#[test]
fn totals_sum_every_category() {
    let cats = vec![common::flat("Olivo", 10.0, 5.0, 2.0), common::flat("Uva", 4.0, 1.0, 3.0)];
    let t = monthly_totals(&cats);
    assert_eq!(t.harvest, vec![14.0; 12]);
    assert_eq!(t.cost, vec![6.0; 12]);
    // (10*2 - 5) + (4*3 - 1)
    assert_eq!(t.profit, vec![26.0; 12]);
    assert_eq!(t.gains(), vec![32.0; 12]);
}

#[test]
fn water_uses_catalogue_coefficients() {
    let cats = vec![common::flat("Olivo", 10.0, 5.0, 2.0), common::flat("Mais", 100.0, 1.0, 1.0)];
    let water = water_consumption(&cats, &WaterUsage::default());
    assert_eq!(water, vec![10.0 * KnownCrop::Olivo.water_per_unit(); 12]);
    assert_eq!(WaterUsage::default().coefficient("Olivo"), 3.0);
}

#[test]
fn mean_and_threshold() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);

    let labels: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    let p = threshold_payload(&labels, vec![2.0, 4.0]);
    assert_eq!(p.threshold, 3.0);
    assert_eq!(p.labels, labels);
}

#[test]
fn snapshots() {
    let cats = vec![common::flat("Olivo", 10.0, 5.0, 2.0)];
    let usage = WaterUsage::default();

    let march = monthly_snapshot(&cats, &usage, 3).unwrap();
    assert_eq!(march.month, 3);
    assert_eq!(march.harvest, 10.0);
    assert_eq!(march.profit, 15.0);
    assert_eq!(march.water, 30.0);

    let year = annual_snapshot(&cats, &usage).unwrap();
    assert_eq!(year.month, 0);
    assert_eq!(year.harvest, 120.0);
    assert_eq!(year.cost, 60.0);
    assert_eq!(year.profit, 180.0);
}

#[test]
fn snapshot_month_out_of_range() {
    let cats = vec![common::flat("Olivo", 10.0, 5.0, 2.0)];
    let usage = WaterUsage::default();
    assert!(matches!(monthly_snapshot(&cats, &usage, 0), Err(EngineError::MonthOutOfRange { month: 0, months: 12 })));
    assert!(matches!(monthly_snapshot(&cats, &usage, 13), Err(EngineError::MonthOutOfRange { .. })));
}

#[test]
fn ragged_categories_are_reported_not_indexed() {
    let short = Category::new("Short", vec![1.0; 6], vec![1.0; 6], 1.0).unwrap();
    let cats = vec![common::flat("Olivo", 10.0, 5.0, 2.0), short];
    let usage = WaterUsage::default();

    // months both categories cover still work
    assert_eq!(monthly_snapshot(&cats, &usage, 6).unwrap().harvest, 11.0);

    let err = monthly_snapshot(&cats, &usage, 12).unwrap_err();
    assert!(matches!(err, EngineError::LabelCountMismatch { ref name, len: 6, labels: 12 } if name == "Short"));
    assert!(matches!(annual_snapshot(&cats, &usage), Err(EngineError::LabelCountMismatch { .. })));
}
