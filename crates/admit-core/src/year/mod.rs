//! Admission years: persisted configuration and listing summaries

pub mod metadata;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::read_id;
use crate::category::Category;

pub use metadata::{YearDraft, YearField, YearMetadata};

/// The persisted per-year configuration edited by the configuration modal.
///
/// Item references are kept exactly as the server sent them; malformed
/// references are only discarded when ids are read out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdmissionYearConfig {
    pub year_id: String,
    references: BTreeMap<Category, Vec<Value>>,
}

impl AdmissionYearConfig {
    pub fn new(year_id: impl Into<String>) -> Self {
        Self {
            year_id: year_id.into(),
            references: BTreeMap::new(),
        }
    }

    /// Parse a configuration document.
    ///
    /// Each category's list is read from its `config_field`; a missing or
    /// non-array field counts as an empty list.
    pub fn from_value(year_id: impl Into<String>, value: &Value) -> Self {
        let mut config = Self::new(year_id);
        for category in Category::ALL {
            let field = category.descriptor().config_field;
            if let Some(list) = value.get(field).and_then(Value::as_array) {
                config.references.insert(category, list.clone());
            }
        }
        config
    }

    /// Builder used when the selected ids are already known
    pub fn with_ids<I, S>(mut self, category: Category, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = ids.into_iter().map(|id| Value::String(id.into())).collect();
        self.references.insert(category, list);
        self
    }

    /// Raw references for a category, including malformed ones
    pub fn references(&self, category: Category) -> &[Value] {
        self.references
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ids of the usable references for a category.
    ///
    /// A reference is either a bare id or an object carrying the category's
    /// id field. `null`, `false`, empty strings and objects without an id
    /// are skipped.
    pub fn selected_ids(&self, category: Category) -> impl Iterator<Item = String> + '_ {
        let id_field = category.descriptor().id_field;
        self.references(category)
            .iter()
            .filter_map(move |reference| match reference {
                Value::Object(obj) => obj.get(id_field).and_then(read_id),
                other => read_id(other),
            })
    }
}

/// One row of the admission year listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub year_id: String,
    #[serde(default)]
    pub year_name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
