// File: crates/crop-engine/tests/aggregates.rs
// Purpose: Annual cost/revenue rows and per-category annual figures.

mod common;

use crop_engine::{derive_aggregates, AggregatePayload, Category, CategoryRegistry, MemorySurface, CropsView};

#[test]
fn olivo_annual_figures() {
    let rows = derive_aggregates(&[common::flat("Olivo", 10.0, 5.0, 2.0)]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "Olivo");
    assert_eq!(rows[0].annual_cost, 60.0);
    assert_eq!(rows[0].annual_revenue, 240.0);
}

#[test]
fn rows_follow_input_order() {
    let cats = vec![common::flat("B", 1.0, 1.0, 1.0), common::flat("A", 2.0, 2.0, 2.0)];
    let payload = AggregatePayload::from(derive_aggregates(&cats).as_slice());
    assert_eq!(payload.labels, ["B", "A"]);
    assert_eq!(payload.annual_cost, [12.0, 24.0]);
    assert_eq!(payload.annual_revenue, [12.0, 48.0]);
}

#[test]
fn aggregates_ignore_selection() {
    let data = common::dataset(vec![common::flat("A", 1.0, 1.0, 1.0), common::flat("B", 2.0, 1.0, 3.0)]);
    let mut view = CropsView::new(data, CategoryRegistry::new(), MemorySurface::default());
    let before = view.aggregate_payload().clone();
    view.toggle("A");
    view.toggle("B");
    assert_eq!(view.aggregate_payload(), &before);
    assert_eq!(before.labels.len(), 2);
}

#[test]
fn profit_and_margin() {
    let c = common::flat("Olivo", 10.0, 5.0, 2.0);
    assert_eq!(c.annual_profit(), 180.0);
    assert_eq!(c.margin_per_unit(), 1.5);

    let idle = Category::new("Idle", vec![0.0; 12], vec![1.0; 12], 2.0).unwrap();
    assert_eq!(idle.margin_per_unit(), 0.0);
}

#[test]
fn aggregate_json_uses_camel_case() {
    let payload = AggregatePayload::from(derive_aggregates(&[common::flat("Olivo", 10.0, 5.0, 2.0)]).as_slice());
    let v = serde_json::to_value(&payload).unwrap();
    assert_eq!(v["annualCost"][0], 60.0);
    assert_eq!(v["annualRevenue"][0], 240.0);
}

#[test]
fn revenue_multiplies_the_annual_sum() {
    let c = Category::new("Grano Duro", vec![0.1; 12], vec![0.0; 12], 1.2).unwrap();
    let summed_first = [0.1f64; 12].iter().sum::<f64>() * 1.2;
    let per_month: f64 = [0.1f64; 12].iter().map(|y| y * 1.2).sum();
    // the two orders round differently for these values
    assert_ne!(summed_first.to_bits(), per_month.to_bits());

    assert_eq!(c.annual_revenue().to_bits(), summed_first.to_bits());
    assert_eq!(derive_aggregates(&[c])[0].annual_revenue.to_bits(), summed_first.to_bits());
}
