use std::collections::BTreeSet;

use serde_json::json;

use super::*;
use crate::catalog::{Catalog, CatalogItem};
use crate::year::AdmissionYearConfig;

fn criteria() -> Catalog {
    Catalog::new(
        Category::Criteria,
        vec![
            CatalogItem::new("A", "Academic"),
            CatalogItem::new("B", "Athletic"),
            CatalogItem::new("C", "Community service"),
        ],
    )
}

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_toggle_is_idempotent() {
    for category in Category::ALL {
        let mut once = SelectionState::new();
        once.toggle(category, "X", true);

        let mut twice = once.clone();
        assert!(!twice.toggle(category, "X", true));
        assert_eq!(once, twice);

        assert!(twice.toggle(category, "X", false));
        assert!(!twice.toggle(category, "X", false));
        assert_eq!(twice.count(category), 0);
    }
}

#[test]
fn test_categories_are_independent() {
    let mut state = SelectionState::new();
    state.toggle(Category::Major, "M1", true);
    assert!(state.contains(Category::Major, "M1"));
    assert!(!state.contains(Category::Region, "M1"));
}

#[test]
fn test_total_is_sum_of_counts() {
    let mut state = SelectionState::new();
    state.toggle(Category::Criteria, "A", true);
    state.toggle(Category::Major, "M1", true);
    state.toggle(Category::Major, "M2", true);
    state.toggle(Category::Region, "R1", true);
    state.toggle(Category::Major, "M2", false);

    let sum: usize = Category::ALL.iter().map(|c| state.count(*c)).sum();
    assert_eq!(state.total_count(), sum);
    assert_eq!(state.total_count(), 3);
}

#[test]
fn test_hydrate_drops_null_references() {
    let config = AdmissionYearConfig::from_value(
        "2025",
        &json!({"majors": [{"majorId": "M1"}, null, {"majorId": "M2"}]}),
    );
    let state = SelectionState::from_config(&config);
    assert_eq!(state.ids(Category::Major), &set(&["M1", "M2"]));
    assert_eq!(state.total_count(), 2);
}

#[test]
fn test_hydrate_is_idempotent() {
    let config = AdmissionYearConfig::new("2025")
        .with_ids(Category::Criteria, ["A", "B"])
        .with_ids(Category::Region, ["R1"]);

    let mut state = SelectionState::new();
    state.hydrate(&config);
    let once = state.clone();
    state.hydrate(&config);
    assert_eq!(state, once);
}

#[test]
fn test_hydrate_replaces_all_sets() {
    let mut state = SelectionState::new();
    state.toggle(Category::Object, "stale", true);
    state.hydrate(&AdmissionYearConfig::new("2025").with_ids(Category::Major, ["M1"]));
    assert_eq!(state.count(Category::Object), 0);
    assert_eq!(state.count(Category::Major), 1);
}

#[test]
fn test_hydrate_keeps_ids_missing_from_catalog() {
    let config = AdmissionYearConfig::new("2025").with_ids(Category::Criteria, ["A", "GONE"]);
    let state = SelectionState::from_config(&config);
    assert!(state.contains(Category::Criteria, "GONE"));
}

#[test]
fn test_toggle_all_selects_then_deselects() {
    let catalog = Catalog::new(
        Category::Criteria,
        vec![CatalogItem::new("A", "Academic"), CatalogItem::new("B", "Athletic")],
    );
    let mut state = SelectionState::new();
    state.toggle(Category::Criteria, "A", true);

    state.toggle_all(&catalog, "");
    assert_eq!(state.ids(Category::Criteria), &set(&["A", "B"]));

    state.toggle_all(&catalog, "");
    assert!(state.ids(Category::Criteria).is_empty());
}

#[test]
fn test_toggle_all_twice_restores_selection() {
    let catalog = criteria();
    for query in ["", "a", "ath", "COMM"] {
        for initial in [set(&[]), set(&["A"]), set(&["A", "B", "C"]), set(&["B", "Z"])] {
            let once = toggle_all(&catalog, query, &initial);
            let twice = toggle_all(&catalog, query, &once);
            if select_all_state(&catalog, query, &initial) == SelectAllState::All {
                assert_eq!(twice, initial, "query {query:?}");
            } else {
                // the first toggle selects everything visible, the second
                // clears it; hidden ids survive both
                let visible: BTreeSet<_> = catalog.visible(query).map(|i| i.id.clone()).collect();
                let expected: BTreeSet<_> = initial.difference(&visible).cloned().collect();
                assert_eq!(twice, expected, "query {query:?}");
            }
        }
    }
}

#[test]
fn test_toggle_all_twice_from_all_visible_is_identity() {
    let catalog = criteria();
    let initial = set(&["A", "B", "C", "extra"]);
    let twice = toggle_all(&catalog, "", &toggle_all(&catalog, "", &initial));
    assert_eq!(twice, initial);
}

#[test]
fn test_toggle_all_only_touches_visible_items() {
    let catalog = criteria();
    let initial = set(&["C"]);
    let next = toggle_all(&catalog, "aca", &initial);
    assert_eq!(next, set(&["A", "C"]));

    let next = toggle_all(&catalog, "aca", &next);
    assert_eq!(next, set(&["C"]));
}

#[test]
fn test_toggle_all_with_empty_visible_set_is_noop() {
    let catalog = criteria();
    let initial = set(&["A", "B"]);
    assert_eq!(toggle_all(&catalog, "zzz", &initial), initial);
    assert_eq!(
        toggle_all(&Catalog::empty(Category::Criteria), "", &initial),
        initial
    );
    assert_eq!(
        select_all_state(&catalog, "zzz", &initial),
        SelectAllState::Empty
    );
}

#[test]
fn test_select_all_state() {
    let catalog = criteria();
    assert_eq!(
        select_all_state(&catalog, "", &set(&[])),
        SelectAllState::None
    );
    assert_eq!(
        select_all_state(&catalog, "", &set(&["A"])),
        SelectAllState::Partial
    );
    assert_eq!(
        select_all_state(&catalog, "aca", &set(&["A"])),
        SelectAllState::All
    );
}

#[test]
fn test_serializes_as_category_map() {
    let mut state = SelectionState::new();
    state.toggle(Category::Major, "M2", true);
    state.toggle(Category::Major, "M1", true);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["major"], json!(["M1", "M2"]));
    assert_eq!(json["criteria"], json!([]));
}
