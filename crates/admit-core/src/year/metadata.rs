//! New admission year metadata and its submit-time validation

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AdmitError, FieldIssue, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Editable fields of the year creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearField {
    YearId,
    Name,
    StartDate,
    EndDate,
    Description,
}

impl YearField {
    pub const ALL: [YearField; 5] = [
        YearField::YearId,
        YearField::Name,
        YearField::StartDate,
        YearField::EndDate,
        YearField::Description,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            YearField::YearId => "year_id",
            YearField::Name => "name",
            YearField::StartDate => "start_date",
            YearField::EndDate => "end_date",
            YearField::Description => "description",
        }
    }
}

impl fmt::Display for YearField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YearField {
    type Err = AdmitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.replace('-', "_").as_str() {
            "year_id" | "id" => Ok(YearField::YearId),
            "name" => Ok(YearField::Name),
            "start_date" | "start" => Ok(YearField::StartDate),
            "end_date" | "end" => Ok(YearField::EndDate),
            "description" => Ok(YearField::Description),
            _ => Err(AdmitError::invalid_value("year field", s)),
        }
    }
}

/// Validated metadata for a new admission year, as sent to the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearMetadata {
    pub year_id: String,
    #[serde(rename = "yearName")]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
}

/// Field values exactly as entered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YearDraft {
    pub year_id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl YearDraft {
    pub fn get(&self, field: YearField) -> &str {
        match field {
            YearField::YearId => &self.year_id,
            YearField::Name => &self.name,
            YearField::StartDate => &self.start_date,
            YearField::EndDate => &self.end_date,
            YearField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: YearField, value: impl Into<String>) {
        let value = value.into();
        match field {
            YearField::YearId => self.year_id = value,
            YearField::Name => self.name = value,
            YearField::StartDate => self.start_date = value,
            YearField::EndDate => self.end_date = value,
            YearField::Description => self.description = value,
        }
    }

    /// Validate the draft into submittable metadata.
    ///
    /// All problems are collected, not just the first one.
    pub fn validate(&self) -> Result<YearMetadata> {
        let mut issues = Vec::new();

        let year_id = required(&self.year_id, YearField::YearId, &mut issues);
        let name = required(&self.name, YearField::Name, &mut issues);
        let start_date = date(&self.start_date, YearField::StartDate, &mut issues);
        let end_date = date(&self.end_date, YearField::EndDate, &mut issues);

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                issues.push(FieldIssue::new(
                    YearField::EndDate.as_str(),
                    "must not be earlier than start date",
                ));
            }
        }

        match (year_id, name, start_date, end_date) {
            (Some(year_id), Some(name), Some(start_date), Some(end_date)) if issues.is_empty() => {
                let description = self.description.trim();
                Ok(YearMetadata {
                    year_id,
                    name,
                    start_date,
                    end_date,
                    description: (!description.is_empty()).then(|| description.to_string()),
                })
            }
            _ => Err(AdmitError::ValidationFailed { issues }),
        }
    }
}

fn required(value: &str, field: YearField, issues: &mut Vec<FieldIssue>) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        issues.push(FieldIssue::new(field.as_str(), "is required"));
        None
    } else {
        Some(value.to_string())
    }
}

fn date(value: &str, field: YearField, issues: &mut Vec<FieldIssue>) -> Option<NaiveDate> {
    let value = required(value, field, issues)?;
    match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            issues.push(FieldIssue::new(
                field.as_str(),
                "must be a date in YYYY-MM-DD format",
            ));
            None
        }
    }
}
