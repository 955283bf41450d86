//! Catalog items and the search filter
//!
//! Catalogs come from the admissions API and are treated as untrusted:
//! entries without an id are kept as parsed but never surface through
//! [`filter`].

use serde::Serialize;
use serde_json::{Map, Value};

use crate::category::Category;

/// A single selectable entity of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: String,
    /// Display name (may be empty)
    pub display_name: String,
    /// Category-specific fields not used by the selection machinery
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Read an id field, accepting non-empty strings and numbers
pub(crate) fn read_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            extra: Map::new(),
        }
    }

    /// Build an item from a raw API object using the category's accessors.
    ///
    /// Never fails: a value that is not an object, or that has no usable
    /// id, yields an item with an empty id.
    pub fn from_value(category: Category, value: &Value) -> Self {
        let descriptor = category.descriptor();
        let Some(obj) = value.as_object() else {
            return Self::new("", "");
        };

        let id = obj
            .get(descriptor.id_field)
            .and_then(read_id)
            .unwrap_or_default();
        let display_name = obj
            .get(descriptor.name_field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let extra = obj
            .iter()
            .filter(|(k, _)| *k != descriptor.id_field && *k != descriptor.name_field)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            id,
            display_name,
            extra,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.display_name.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}

/// The full list of available items for one category
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub category: Category,
    pub items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(category: Category, items: Vec<CatalogItem>) -> Self {
        Self { category, items }
    }

    pub fn empty(category: Category) -> Self {
        Self::new(category, Vec::new())
    }

    pub fn from_values(category: Category, values: &[Value]) -> Self {
        let items = values
            .iter()
            .map(|v| CatalogItem::from_value(category, v))
            .collect();
        Self::new(category, items)
    }

    /// Items with a usable id
    pub fn len(&self) -> usize {
        self.items.iter().filter(|i| !i.id.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| !i.id.is_empty() && i.id == id)
    }

    pub fn visible<'a>(&'a self, query: &str) -> Visible<'a> {
        filter(self, query)
    }
}

/// All four catalogs, addressed by category
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogs {
    by_category: [Catalog; 4],
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            by_category: Category::ALL.map(Catalog::empty),
        }
    }
}

impl Catalogs {
    pub fn get(&self, category: Category) -> &Catalog {
        &self.by_category[category.index()]
    }

    /// Replace the catalog for its own category
    pub fn insert(&mut self, catalog: Catalog) {
        let index = catalog.category.index();
        self.by_category[index] = catalog;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.by_category.iter()
    }
}

impl FromIterator<Catalog> for Catalogs {
    fn from_iter<T: IntoIterator<Item = Catalog>>(iter: T) -> Self {
        let mut catalogs = Catalogs::default();
        for catalog in iter {
            catalogs.insert(catalog);
        }
        catalogs
    }
}

/// Lazy view over the items of a catalog that pass a search query.
///
/// A clone continues from the same position; call [`filter`] again to start
/// over from the first item.
#[derive(Debug, Clone)]
pub struct Visible<'a> {
    items: std::slice::Iter<'a, CatalogItem>,
    needle: Option<String>,
}

impl<'a> Iterator for Visible<'a> {
    type Item = &'a CatalogItem;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_deref();
        self.items
            .by_ref()
            .find(|item| !item.id.is_empty() && needle.map_or(true, |needle| item.matches(needle)))
    }
}

/// Items of `catalog` visible under `query`, in catalog order.
///
/// An empty query shows every item with an id. Otherwise an item is shown
/// when its display name or its id contains the query, ignoring case.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Visible<'a> {
    let needle = if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    };
    Visible {
        items: catalog.items.iter(),
        needle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn criteria() -> Catalog {
        Catalog::new(
            Category::Criteria,
            vec![
                CatalogItem::new("A", "Academic"),
                CatalogItem::new("B", "Athletic"),
            ],
        )
    }

    fn ids<'a>(visible: Visible<'a>) -> Vec<&'a str> {
        visible.map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_search_matches_display_name() {
        assert_eq!(ids(filter(&criteria(), "aca")), vec!["A"]);
    }

    #[test]
    fn test_search_matches_id_case_insensitively() {
        assert_eq!(ids(filter(&criteria(), "b")), vec!["B"]);
    }

    #[test]
    fn test_empty_query_shows_everything_in_order() {
        assert_eq!(ids(filter(&criteria(), "")), vec!["A", "B"]);
    }

    #[test]
    fn test_entries_without_id_are_dropped() {
        let catalog = Catalog::from_values(
            Category::Major,
            &[
                json!({"majorId": "M1", "majorName": "Math"}),
                json!(null),
                json!({"majorName": "Orphan"}),
                json!({"majorId": "", "majorName": "Blank"}),
                json!({"majorId": 42, "majorName": "Numeric"}),
            ],
        );
        assert_eq!(ids(filter(&catalog, "")), vec!["M1", "42"]);
        assert_eq!(ids(filter(&catalog, "orphan")), Vec::<&str>::new());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_display_name_is_tolerated() {
        let catalog = Catalog::from_values(Category::Region, &[json!({"regionId": "R9"})]);
        let item = &catalog.items[0];
        assert_eq!(item.display_name, "");
        assert_eq!(ids(filter(&catalog, "r9")), vec!["R9"]);
        assert_eq!(ids(filter(&catalog, "north")), Vec::<&str>::new());
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let item = CatalogItem::from_value(
            Category::Object,
            &json!({"objectId": "O1", "objectName": "Veteran", "quota": 3}),
        );
        assert_eq!(item.extra.get("quota"), Some(&json!(3)));
        assert!(!item.extra.contains_key("objectId"));
    }

    #[test]
    fn test_filter_is_restartable() {
        let catalog = criteria();
        let visible = filter(&catalog, "");
        assert_eq!(visible.clone().count(), 2);
        assert_eq!(visible.count(), 2);
        assert_eq!(catalog.visible("").count(), 2);
    }

    #[test]
    fn test_catalogs_insert_by_category() {
        let catalogs: Catalogs = vec![criteria()].into_iter().collect();
        assert_eq!(catalogs.get(Category::Criteria).len(), 2);
        assert!(catalogs.get(Category::Region).is_empty());
    }
}
