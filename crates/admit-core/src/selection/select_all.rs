//! "Select all" over the visible subset of a catalog
//!
//! Only items passing the current search are touched. Items hidden by the
//! search keep whatever state they had.

use std::collections::BTreeSet;

use serde::Serialize;

use super::SelectionState;
use crate::catalog::{filter, Catalog};

/// State of the header checkbox for the visible subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllState {
    /// Nothing is visible; the checkbox is disabled
    Empty,
    /// No visible item is selected
    None,
    /// Some but not all visible items are selected (indeterminate)
    Partial,
    /// Every visible item is selected
    All,
}

pub fn select_all_state(
    catalog: &Catalog,
    query: &str,
    selected: &BTreeSet<String>,
) -> SelectAllState {
    let (visible, chosen) = filter(catalog, query).fold((0usize, 0usize), |(v, c), item| {
        (v + 1, c + usize::from(selected.contains(&item.id)))
    });

    match (visible, chosen) {
        (0, _) => SelectAllState::Empty,
        (_, 0) => SelectAllState::None,
        (v, c) if v == c => SelectAllState::All,
        _ => SelectAllState::Partial,
    }
}

/// Toggle every visible item at once.
///
/// When every visible item is already selected they are all deselected;
/// otherwise they are all added to the selection. With nothing visible the
/// selection is returned unchanged, since "every item of nothing is
/// selected" must not be read as a request to deselect.
pub fn toggle_all(catalog: &Catalog, query: &str, selected: &BTreeSet<String>) -> BTreeSet<String> {
    let mut next = selected.clone();
    match select_all_state(catalog, query, selected) {
        SelectAllState::Empty => {}
        SelectAllState::All => {
            for item in filter(catalog, query) {
                next.remove(&item.id);
            }
        }
        SelectAllState::None | SelectAllState::Partial => {
            next.extend(filter(catalog, query).map(|item| item.id.clone()));
        }
    }
    next
}

impl SelectionState {
    /// Apply [`toggle_all`] to the catalog's own category
    pub fn toggle_all(&mut self, catalog: &Catalog, query: &str) {
        let next = toggle_all(catalog, query, self.ids(catalog.category));
        self.replace(catalog.category, next);
    }

    pub fn select_all_state(&self, catalog: &Catalog, query: &str) -> SelectAllState {
        select_all_state(catalog, query, self.ids(catalog.category))
    }
}
