// Host-side tests for per-card projection.

use coverflow_core::*;

fn projector() -> Projector {
    Projector::from_config(&CarouselConfig::default())
}

#[test]
fn cards_beyond_cull_distance_are_hidden() {
    let table = InterpolationTable::coverflow();
    let p = projector();
    assert_eq!(p.card(&table, 4, 0.0), CardCommand::Hidden);
    assert_eq!(p.card(&table, 0, 3.01), CardCommand::Hidden);
    assert!(p.card(&table, 3, 0.0).is_visible());
}

#[test]
fn visible_card_uses_table_style_at_its_offset() {
    let table = InterpolationTable::coverflow();
    let p = projector();
    for (index, progress) in [(0, 0.0), (2, 0.5), (3, 0.0), (1, 2.75)] {
        let diff = index as f64 - progress;
        let visual = *p.card(&table, index, progress).visual().unwrap();
        assert_eq!(visual.style, table.style_at(diff), "index {} at {}", index, progress);
    }
}

#[test]
fn stacking_falls_off_with_distance() {
    assert_eq!(stacking_order(0.0), 100);
    assert_eq!(stacking_order(0.5), 95);
    assert_eq!(stacking_order(1.25), 88);
    assert_eq!(stacking_order(3.0), 70);

    let table = InterpolationTable::coverflow();
    let p = projector();
    let center = p.card(&table, 2, 2.2).visual().unwrap().stacking;
    let side = p.card(&table, 3, 2.2).visual().unwrap().stacking;
    assert!(center > side);
}

#[test]
fn only_cards_near_center_are_active() {
    let table = InterpolationTable::coverflow();
    let p = projector();
    assert!(p.card(&table, 1, 1.0).visual().unwrap().active);
    assert!(p.card(&table, 1, 0.71).visual().unwrap().active);
    assert!(!p.card(&table, 1, 0.7).visual().unwrap().active);
    assert!(!p.card(&table, 1, 1.5).visual().unwrap().active);
}

#[test]
fn active_index_rounds_clamped_progress() {
    let p = projector();
    assert_eq!(p.active_index(-0.7, 5), 0);
    assert_eq!(p.active_index(5.6, 5), 4);
    assert_eq!(p.active_index(1.5, 5), 2);
    assert_eq!(p.active_index(1.49, 5), 1);
    assert_eq!(p.active_index(3.0, 5), 3);
}
