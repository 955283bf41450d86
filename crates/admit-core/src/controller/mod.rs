//! Configuration modal controller
//!
//! Lifecycle: `Closed → Loading → Ready → Saving → Closed` on a successful
//! save, `Ready → Closed` on cancel, `Saving → Ready` when a save fails and
//! `Loading → Failed` when the open-time fetch fails.
//!
//! Remote work is split into `begin_*` / `finish_*` pairs. Each open cycle
//! gets a new generation number and every ticket carries the generation it
//! was issued in; a response whose generation is no longer current is
//! dropped without touching state.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, warn};

use crate::api::{fetch_snapshot, with_timeout, AdmissionsApi, YearSnapshot};
use crate::catalog::{Catalog, Catalogs, Visible};
use crate::category::Category;
use crate::config::DEFAULT_TIMEOUT_SECONDS;
use crate::error::{AdmitError, Result};
use crate::search::SearchState;
use crate::selection::{SelectAllState, SelectionState};
use crate::summary::Summary;
use crate::trace_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalState {
    Closed,
    Loading,
    Ready,
    Saving,
    /// The open-time fetch failed; the modal must be reopened
    Failed,
}

impl ModalState {
    pub fn as_str(self) -> &'static str {
        match self {
            ModalState::Closed => "closed",
            ModalState::Loading => "loading",
            ModalState::Ready => "ready",
            ModalState::Saving => "saving",
            ModalState::Failed => "failed",
        }
    }
}

/// Issued by [`ConfigController::begin_open`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTicket {
    generation: u64,
    year_id: String,
}

impl OpenTicket {
    pub fn year_id(&self) -> &str {
        &self.year_id
    }
}

/// Issued by [`ConfigController::begin_save`]; carries the exact selection
/// to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    generation: u64,
    year_id: String,
    selection: SelectionState,
}

impl SaveTicket {
    pub fn year_id(&self) -> &str {
        &self.year_id
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Ready,
    /// The modal was closed or reopened while loading
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Saved and closed; the caller should refresh its view of the year
    Saved { year_id: String },
    /// Another save was already in flight, or nothing was open to save
    Rejected,
    /// The modal was closed or reopened while saving
    Stale,
}

/// Everything the presentation layer renders
#[derive(Debug, Clone, Serialize)]
pub struct ModalView<'a> {
    pub state: ModalState,
    pub year_id: Option<&'a str>,
    pub selection: &'a SelectionState,
    pub search: &'a SearchState,
    pub summary: Summary,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ConfigController {
    state: ModalState,
    generation: u64,
    year_id: Option<String>,
    catalogs: Catalogs,
    selection: SelectionState,
    search: SearchState,
    error: Option<AdmitError>,
    timeout: Duration,
}

impl Default for ConfigController {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl ConfigController {
    pub fn new(timeout: Duration) -> Self {
        Self {
            state: ModalState::Closed,
            generation: 0,
            year_id: None,
            catalogs: Catalogs::default(),
            selection: SelectionState::new(),
            search: SearchState::new(),
            error: None,
            timeout,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn year_id(&self) -> Option<&str> {
        self.year_id.as_deref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn catalog(&self, category: Category) -> &Catalog {
        self.catalogs.get(category)
    }

    pub fn error(&self) -> Option<&AdmitError> {
        self.error.as_ref()
    }

    /// Items of a category passing its current search
    pub fn visible(&self, category: Category) -> Visible<'_> {
        self.catalogs
            .get(category)
            .visible(self.search.query(category))
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.selection, &self.catalogs, Some(&self.search))
    }

    pub fn view(&self) -> ModalView<'_> {
        ModalView {
            state: self.state,
            year_id: self.year_id(),
            selection: &self.selection,
            search: &self.search,
            summary: self.summary(),
            error: self.error.as_ref().map(ToString::to_string),
        }
    }

    fn discard(&mut self) {
        self.catalogs = Catalogs::default();
        self.selection = SelectionState::new();
        self.search.reset();
    }

    /// Start a new open cycle for `year_id`, invalidating anything in flight
    pub fn begin_open(&mut self, year_id: &str) -> OpenTicket {
        self.generation += 1;
        self.discard();
        self.error = None;
        self.year_id = Some(year_id.to_string());
        self.state = ModalState::Loading;
        debug!(
            generation = self.generation,
            year = year_id,
            "config_modal_loading"
        );

        OpenTicket {
            generation: self.generation,
            year_id: year_id.to_string(),
        }
    }

    /// Apply the result of the open-time fetch.
    ///
    /// On failure the modal moves to `Failed` and the error is kept for
    /// display; nothing from the failed fetch is exposed.
    pub fn finish_open(
        &mut self,
        ticket: OpenTicket,
        result: Result<YearSnapshot>,
    ) -> Result<OpenOutcome> {
        if ticket.generation != self.generation || self.state != ModalState::Loading {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                year = %ticket.year_id,
                "config_modal_stale_load"
            );
            return Ok(OpenOutcome::Stale);
        }

        match result {
            Ok(snapshot) => {
                self.selection.hydrate(&snapshot.config);
                self.catalogs = snapshot.catalogs;
                self.search.reset();
                self.state = ModalState::Ready;
                debug!(
                    year = %ticket.year_id,
                    selected = self.selection.total_count(),
                    "config_modal_ready"
                );
                Ok(OpenOutcome::Ready)
            }
            Err(err) => {
                let err = err.into_fetch_failed();
                warn!(year = %ticket.year_id, error = %err, "config_modal_load_failed");
                self.state = ModalState::Failed;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Open the modal for `year_id`: fetch everything, then hydrate
    pub async fn open<A: AdmissionsApi>(&mut self, api: &A, year_id: &str) -> Result<OpenOutcome> {
        let start = Instant::now();
        let ticket = self.begin_open(year_id);
        let result = with_timeout(
            "load configuration",
            self.timeout,
            fetch_snapshot(api, year_id),
        )
        .await;
        trace_time!(start, "config_modal_fetch", year = year_id);
        self.finish_open(ticket, result)
    }

    fn ensure_ready(&self, action: &str) -> Result<()> {
        if self.state == ModalState::Ready {
            Ok(())
        } else {
            Err(AdmitError::NotEditable {
                action: action.to_string(),
                state: self.state.as_str().to_string(),
            })
        }
    }

    /// Check or uncheck one item. Returns whether the selection changed.
    pub fn toggle(&mut self, category: Category, id: &str, included: bool) -> Result<bool> {
        self.ensure_ready("toggle")?;
        Ok(self.selection.toggle(category, id, included))
    }

    /// Set a category's search query. Selection is never affected.
    pub fn search(&mut self, category: Category, query: &str) -> Result<()> {
        self.ensure_ready("search")?;
        self.search.set(category, query);
        Ok(())
    }

    /// Toggle every visible item of a category; returns the new header state
    pub fn toggle_all(&mut self, category: Category) -> Result<SelectAllState> {
        self.ensure_ready("toggle all")?;
        let catalog = self.catalogs.get(category);
        let query = self.search.query(category);
        self.selection.toggle_all(catalog, query);
        Ok(self.selection.select_all_state(catalog, query))
    }

    /// Deselect everything in a category, visible or not
    pub fn clear(&mut self, category: Category) -> Result<()> {
        self.ensure_ready("clear")?;
        self.selection.clear(category);
        Ok(())
    }

    /// Move to `Saving` and snapshot the selection to submit.
    ///
    /// Returns `None` when a save is already in flight or the modal is not
    /// ready; nothing must be dispatched in that case.
    pub fn begin_save(&mut self) -> Option<SaveTicket> {
        if self.state != ModalState::Ready {
            debug!(state = self.state.as_str(), "config_modal_save_rejected");
            return None;
        }
        let year_id = self.year_id.clone()?;

        self.state = ModalState::Saving;
        self.error = None;
        debug!(generation = self.generation, year = %year_id, "config_modal_saving");

        Some(SaveTicket {
            generation: self.generation,
            year_id,
            selection: self.selection.clone(),
        })
    }

    /// Apply the result of a save.
    ///
    /// Success closes the modal. Failure returns to `Ready` with every edit
    /// intact so the save can be retried as is.
    pub fn finish_save(&mut self, ticket: SaveTicket, result: Result<()>) -> Result<SaveOutcome> {
        if ticket.generation != self.generation || self.state != ModalState::Saving {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                year = %ticket.year_id,
                "config_modal_stale_save"
            );
            return Ok(SaveOutcome::Stale);
        }

        match result {
            Ok(()) => {
                debug!(year = %ticket.year_id, "config_modal_saved");
                self.close();
                Ok(SaveOutcome::Saved {
                    year_id: ticket.year_id,
                })
            }
            Err(err) => {
                let err = err.into_save_failed();
                warn!(year = %ticket.year_id, error = %err, "config_modal_save_failed");
                self.state = ModalState::Ready;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Submit the current selection as a wholesale replacement
    pub async fn save<A: AdmissionsApi>(&mut self, api: &A) -> Result<SaveOutcome> {
        let Some(ticket) = self.begin_save() else {
            return Ok(SaveOutcome::Rejected);
        };
        let result = with_timeout(
            "save configuration",
            self.timeout,
            api.save_year_config(&ticket.year_id, &ticket.selection),
        )
        .await;
        self.finish_save(ticket, result)
    }

    /// Discard all uncommitted edits and close. Anything in flight becomes
    /// stale.
    pub fn cancel(&mut self) {
        debug!(state = self.state.as_str(), year = ?self.year_id, "config_modal_cancel");
        self.close();
    }

    fn close(&mut self) {
        self.generation += 1;
        self.discard();
        self.error = None;
        self.year_id = None;
        self.state = ModalState::Closed;
    }
}
