//! Per-category sets of selected item ids

pub mod select_all;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::category::Category;
use crate::year::AdmissionYearConfig;

pub use select_all::{select_all_state, toggle_all, SelectAllState};

/// The administrator's in-progress selection, one id set per category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    sets: [BTreeSet<String>; 4],
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AdmissionYearConfig) -> Self {
        let mut state = Self::new();
        state.hydrate(config);
        state
    }

    /// Replace every category's set from a persisted configuration.
    ///
    /// Malformed references are dropped. Ids are not checked against the
    /// current catalogs, so ids of items removed since the configuration was
    /// saved stay selected until deselected.
    pub fn hydrate(&mut self, config: &AdmissionYearConfig) {
        self.sets = Category::ALL.map(|category| config.selected_ids(category).collect());
    }

    /// Include or exclude one id. Returns whether the set changed.
    pub fn toggle(&mut self, category: Category, id: &str, included: bool) -> bool {
        let set = &mut self.sets[category.index()];
        if included {
            set.insert(id.to_string())
        } else {
            set.remove(id)
        }
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.sets[category.index()].contains(id)
    }

    pub fn ids(&self, category: Category) -> &BTreeSet<String> {
        &self.sets[category.index()]
    }

    /// Replace one category's set wholesale
    pub fn replace(&mut self, category: Category, ids: BTreeSet<String>) {
        self.sets[category.index()] = ids;
    }

    pub fn clear(&mut self, category: Category) {
        self.sets[category.index()].clear();
    }

    pub fn count(&self, category: Category) -> usize {
        self.sets[category.index()].len()
    }

    pub fn total_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }
}

impl Serialize for SelectionState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<Category, &BTreeSet<String>> =
            Category::ALL.iter().map(|c| (*c, self.ids(*c))).collect();
        map.serialize(serializer)
    }
}

#[cfg(test)]
mod tests;
