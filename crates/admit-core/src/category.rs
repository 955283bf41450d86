//! Configurable entity kinds and their static descriptor table
//!
//! Each category knows which JSON fields hold an item's id and display name,
//! where its catalog lives on the API, how it appears in a persisted year
//! configuration and in the save payload, and which colour the UI uses for it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdmitError;

/// One of the four configurable entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Criteria,
    Major,
    Object,
    Region,
}

/// Colour theme used when rendering a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Blue,
    Green,
    Orange,
    Purple,
}

/// Static per-category field accessors and presentation data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub category: Category,
    /// Human label (plural)
    pub label: &'static str,
    /// Catalog endpoint path segment
    pub endpoint: &'static str,
    /// Field holding an item's id
    pub id_field: &'static str,
    /// Field holding an item's display name
    pub name_field: &'static str,
    /// Field of a persisted year configuration listing selected items
    pub config_field: &'static str,
    /// Field of the save payload listing selected ids
    pub save_field: &'static str,
    pub theme: Theme,
}

static DESCRIPTORS: [CategoryDescriptor; 4] = [
    CategoryDescriptor {
        category: Category::Criteria,
        label: "Criteria",
        endpoint: "criteria",
        id_field: "criteriaId",
        name_field: "criteriaName",
        config_field: "criteria",
        save_field: "criteriaIds",
        theme: Theme::Blue,
    },
    CategoryDescriptor {
        category: Category::Major,
        label: "Majors",
        endpoint: "majors",
        id_field: "majorId",
        name_field: "majorName",
        config_field: "majors",
        save_field: "majorIds",
        theme: Theme::Green,
    },
    CategoryDescriptor {
        category: Category::Object,
        label: "Objects",
        endpoint: "objects",
        id_field: "objectId",
        name_field: "objectName",
        config_field: "objects",
        save_field: "objectIds",
        theme: Theme::Orange,
    },
    CategoryDescriptor {
        category: Category::Region,
        label: "Regions",
        endpoint: "regions",
        id_field: "regionId",
        name_field: "regionName",
        config_field: "regions",
        save_field: "regionIds",
        theme: Theme::Purple,
    },
];

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [
        Category::Criteria,
        Category::Major,
        Category::Object,
        Category::Region,
    ];

    pub fn descriptor(self) -> &'static CategoryDescriptor {
        &DESCRIPTORS[self.index()]
    }

    /// Dense index in `0..4`, matching `Category::ALL`
    pub fn index(self) -> usize {
        match self {
            Category::Criteria => 0,
            Category::Major => 1,
            Category::Object => 2,
            Category::Region => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Criteria => "criteria",
            Category::Major => "major",
            Category::Object => "object",
            Category::Region => "region",
        }
    }
}

impl FromStr for Category {
    type Err = AdmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "criteria" | "criterion" => Ok(Category::Criteria),
            "major" | "majors" => Ok(Category::Major),
            "object" | "objects" => Ok(Category::Object),
            "region" | "regions" => Ok(Category::Region),
            other => Err(AdmitError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
