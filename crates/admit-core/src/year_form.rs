//! Year creation form controller
//!
//! Shares the open/submit/cancel lifecycle of the configuration modal:
//! `Closed → Editing → Submitting → Closed` on success, back to `Editing`
//! with the entered values intact on any failure.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::api::{with_timeout, AdmissionsApi};
use crate::config::DEFAULT_TIMEOUT_SECONDS;
use crate::error::{AdmitError, FieldIssue, Result};
use crate::year::{YearDraft, YearField, YearMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    Closed,
    Editing,
    Submitting,
}

impl FormState {
    pub fn as_str(self) -> &'static str {
        match self {
            FormState::Closed => "closed",
            FormState::Editing => "editing",
            FormState::Submitting => "submitting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    metadata: YearMetadata,
}

impl SubmitTicket {
    pub fn metadata(&self) -> &YearMetadata {
        &self.metadata
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Created and closed; the caller should refresh its year list
    Created { year_id: String },
    Stale,
}

#[derive(Debug)]
pub struct YearFormController {
    state: FormState,
    generation: u64,
    draft: YearDraft,
    error: Option<AdmitError>,
    timeout: Duration,
}

impl Default for YearFormController {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl YearFormController {
    pub fn new(timeout: Duration) -> Self {
        Self {
            state: FormState::Closed,
            generation: 0,
            draft: YearDraft::default(),
            error: None,
            timeout,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &YearDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&AdmitError> {
        self.error.as_ref()
    }

    /// Validation problem recorded for `field` by the last submit
    pub fn issue(&self, field: YearField) -> Option<&FieldIssue> {
        self.error
            .as_ref()?
            .field_issues()
            .iter()
            .find(|i| i.field == field.as_str())
    }

    /// Start a fresh form session
    pub fn open(&mut self) {
        self.generation += 1;
        self.draft = YearDraft::default();
        self.error = None;
        self.state = FormState::Editing;
        debug!(generation = self.generation, "year_form_open");
    }

    pub fn edit_field(&mut self, field: YearField, value: &str) -> Result<()> {
        if self.state != FormState::Editing {
            return Err(AdmitError::NotEditable {
                action: format!("edit {}", field),
                state: self.state.as_str().to_string(),
            });
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// Validate the draft and move to `Submitting`.
    ///
    /// A validation failure keeps the form open and records the offending
    /// fields; no ticket is issued, so no request can be made.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket> {
        if self.state != FormState::Editing {
            return Err(AdmitError::NotEditable {
                action: "submit".to_string(),
                state: self.state.as_str().to_string(),
            });
        }

        match self.draft.validate() {
            Ok(metadata) => {
                self.error = None;
                self.state = FormState::Submitting;
                debug!(year = %metadata.year_id, "year_form_submitting");
                Ok(SubmitTicket {
                    generation: self.generation,
                    metadata,
                })
            }
            Err(err) => {
                debug!(error = %err, "year_form_invalid");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<()>,
    ) -> Result<SubmitOutcome> {
        if ticket.generation != self.generation || self.state != FormState::Submitting {
            debug!(year = %ticket.metadata.year_id, "year_form_stale_submit");
            return Ok(SubmitOutcome::Stale);
        }

        match result {
            Ok(()) => {
                self.close();
                Ok(SubmitOutcome::Created {
                    year_id: ticket.metadata.year_id,
                })
            }
            Err(err) => {
                let err = AdmitError::operation("create admission year", err);
                warn!(year = %ticket.metadata.year_id, error = %err, "year_form_submit_failed");
                self.state = FormState::Editing;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub async fn submit<A: AdmissionsApi>(&mut self, api: &A) -> Result<SubmitOutcome> {
        let ticket = self.begin_submit()?;
        let result = with_timeout(
            "create year",
            self.timeout,
            api.create_year(&ticket.metadata),
        )
        .await;
        self.finish_submit(ticket, result)
    }

    pub fn cancel(&mut self) {
        debug!(state = self.state.as_str(), "year_form_cancel");
        self.close();
    }

    fn close(&mut self) {
        self.generation += 1;
        self.draft = YearDraft::default();
        self.error = None;
        self.state = FormState::Closed;
    }
}
