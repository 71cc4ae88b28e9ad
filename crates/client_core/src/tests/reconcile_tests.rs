use super::*;
use crate::layout::LayoutConfig;

fn registry(floor_count: usize) -> WidgetRegistry {
    WidgetRegistry::build(&LayoutConfig::new(800.0, 700.0, floor_count)).expect("registry")
}

fn states(widgets: &[crate::widgets::Widget]) -> Vec<bool> {
    widgets.iter().map(|w| w.visual_state).collect()
}

#[test]
fn three_floor_scenario_lights_middle_cabin_button() {
    let mut registry = registry(3);
    let mut snapshot = ElevatorSnapshot::idle(3);
    snapshot.cabin_buttons = vec![false, true, false];
    snapshot.current_floor = 1;
    snapshot.position = 1.0;

    let outcome = RenderReconciler::new().reconcile(&mut registry, Some(&snapshot));

    assert_eq!(outcome, ReconcileOutcome::Applied);
    assert_eq!(states(registry.cabin_buttons()), vec![false, true, false]);
    assert_eq!(
        registry.cabin().geometry.y,
        registry.mapper().floor_position(1)
    );
}

#[test]
fn down_widgets_read_array_index_equal_to_floor() {
    let mut registry = registry(4);
    let mut snapshot = ElevatorSnapshot::idle(4);
    snapshot.down_buttons = vec![true, false, true, false];
    snapshot.down_lamps = vec![true, false, false, true];

    RenderReconciler::new().reconcile(&mut registry, Some(&snapshot));

    // widgets are floors 1, 2, 3; index 0 of the snapshot is ignored
    assert_eq!(states(registry.down_buttons()), vec![false, true, false]);
    assert_eq!(states(registry.down_lamps()), vec![false, false, true]);
    assert!(registry.down_button(2).expect("down 2").visual_state);
}

#[test]
fn up_widgets_ignore_padded_top_slot() {
    let mut registry = registry(3);
    let mut snapshot = ElevatorSnapshot::idle(3);
    snapshot.up_buttons = vec![true, false, true];
    snapshot.up_lamps = vec![false, true, true];

    RenderReconciler::new().reconcile(&mut registry, Some(&snapshot));

    assert_eq!(states(registry.up_buttons()), vec![true, false]);
    assert_eq!(states(registry.up_lamps()), vec![false, true]);
}

#[test]
fn indicator_and_door_follow_snapshot() {
    let mut registry = registry(4);
    let mut snapshot = ElevatorSnapshot::idle(4);
    snapshot.indicator_lamp = 2;
    snapshot.door_lamp = true;
    snapshot.cabin_lamps = vec![true, false, false, true];
    snapshot.position = 2.5;

    RenderReconciler::new().reconcile(&mut registry, Some(&snapshot));

    assert_eq!(
        states(registry.floor_indicators()),
        vec![false, false, true, false]
    );
    assert_eq!(states(registry.cabin_lamps()), vec![true, false, false, true]);
    assert!(registry.cabin().door_open);
    assert_eq!(registry.cabin().geometry.y, registry.mapper().position(2.5));
}

#[test]
fn absent_snapshot_leaves_widgets_untouched() {
    let mut registry = registry(3);
    let mut snapshot = ElevatorSnapshot::idle(3);
    snapshot.cabin_lamps = vec![true, true, true];
    let mut reconciler = RenderReconciler::new();
    reconciler.reconcile(&mut registry, Some(&snapshot));

    assert_eq!(
        reconciler.reconcile(&mut registry, None),
        ReconcileOutcome::Absent
    );
    assert_eq!(
        reconciler.reconcile(&mut registry, None),
        ReconcileOutcome::Absent
    );
    assert_eq!(states(registry.cabin_lamps()), vec![true, true, true]);
}

#[test]
fn floor_bands_straddle_each_floor_line() {
    let registry = registry(4);
    let mut snapshot = ElevatorSnapshot::idle(4);
    snapshot.margin = 0.1;
    snapshot.current_floor = 3;

    let bands = floor_bands(registry.mapper(), &snapshot);

    assert_eq!(bands.len(), 4);
    for band in &bands {
        let line = registry.mapper().floor_position(band.floor);
        assert!(band.top < line && line < band.bottom);
        assert_eq!(band.current, band.floor == 3);
    }
}

#[test]
fn no_band_is_current_between_floors() {
    let registry = registry(4);
    let mut snapshot = ElevatorSnapshot::idle(4);
    snapshot.current_floor = -1;

    assert!(floor_bands(registry.mapper(), &snapshot)
        .iter()
        .all(|band| !band.current));
}
