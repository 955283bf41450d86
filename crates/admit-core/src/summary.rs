//! Derived counts for the configuration modal
//!
//! Always recomputed from the current state; nothing here is cached.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalogs;
use crate::category::Category;
use crate::search::SearchState;
use crate::selection::{SelectAllState, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub selected: usize,
    /// Items passing the current search, when a search state was supplied
    pub visible: Option<usize>,
    pub total_in_catalog: usize,
    pub select_all: Option<SelectAllState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub categories: BTreeMap<Category, CategorySummary>,
    pub total_selected: usize,
}

impl Summary {
    pub fn compute(
        selection: &SelectionState,
        catalogs: &Catalogs,
        search: Option<&SearchState>,
    ) -> Self {
        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let catalog = catalogs.get(category);
                let query = search.map(|s| s.query(category));
                let summary = CategorySummary {
                    selected: selection.count(category),
                    visible: query.map(|q| catalog.visible(q).count()),
                    total_in_catalog: catalog.len(),
                    select_all: query.map(|q| selection.select_all_state(catalog, q)),
                };
                (category, summary)
            })
            .collect();

        Self {
            categories,
            total_selected: selection.total_count(),
        }
    }

    pub fn get(&self, category: Category) -> CategorySummary {
        self.categories[&category]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogItem};

    fn catalogs() -> Catalogs {
        vec![
            Catalog::new(
                Category::Criteria,
                vec![
                    CatalogItem::new("A", "Academic"),
                    CatalogItem::new("B", "Athletic"),
                ],
            ),
            Catalog::new(Category::Region, vec![CatalogItem::new("R1", "North")]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_counts_without_search() {
        let mut selection = SelectionState::new();
        selection.toggle(Category::Criteria, "A", true);
        selection.toggle(Category::Region, "R1", true);
        selection.toggle(Category::Region, "R-ghost", true);

        let summary = Summary::compute(&selection, &catalogs(), None);
        let criteria = summary.get(Category::Criteria);
        assert_eq!(criteria.selected, 1);
        assert_eq!(criteria.visible, None);
        assert_eq!(criteria.total_in_catalog, 2);
        assert_eq!(summary.get(Category::Region).selected, 2);
        assert_eq!(summary.total_selected, 3);
    }

    #[test]
    fn test_visible_counts_follow_search() {
        let selection = SelectionState::new();
        let mut search = SearchState::new();
        search.set(Category::Criteria, "ath");

        let summary = Summary::compute(&selection, &catalogs(), Some(&search));
        let criteria = summary.get(Category::Criteria);
        assert_eq!(criteria.visible, Some(1));
        assert_eq!(criteria.select_all, Some(SelectAllState::None));
        assert_eq!(
            summary.get(Category::Major).select_all,
            Some(SelectAllState::Empty)
        );
    }

    #[test]
    fn test_total_matches_sum_of_categories() {
        let mut selection = SelectionState::new();
        selection.toggle(Category::Major, "M1", true);
        selection.toggle(Category::Object, "O1", true);
        let summary = Summary::compute(&selection, &catalogs(), None);
        let sum: usize = summary.categories.values().map(|c| c.selected).sum();
        assert_eq!(summary.total_selected, sum);
    }
}
