//! Free-text search query per category

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    queries: [String; 4],
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self, category: Category) -> &str {
        &self.queries[category.index()]
    }

    pub fn set(&mut self, category: Category, query: impl Into<String>) {
        self.queries[category.index()] = query.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.queries.iter().all(String::is_empty)
    }
}

impl Serialize for SearchState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<Category, &str> =
            Category::ALL.iter().map(|c| (*c, self.query(*c))).collect();
        map.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_empty() {
        let search = SearchState::new();
        assert!(search.is_empty());
        assert_eq!(search.query(Category::Region), "");
    }

    #[test]
    fn test_reset_clears_every_category() {
        let mut search = SearchState::new();
        search.set(Category::Major, "eng");
        search.set(Category::Object, "vet");
        search.reset();
        assert!(search.is_empty());
    }
}
