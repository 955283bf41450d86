//! Admit Core Library
//!
//! Selection, search and form state behind the admission year configuration
//! workflow, plus the client for the admissions API it talks to.

pub mod api;
pub mod catalog;
pub mod category;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod logging;
pub mod search;
pub mod selection;
pub mod summary;
pub mod year;
pub mod year_form;
