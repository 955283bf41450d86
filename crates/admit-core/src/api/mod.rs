//! Capabilities consumed from the admissions API

pub mod http;
pub mod session;

use std::future::Future;
use std::time::Duration;

use crate::catalog::{Catalog, Catalogs};
use crate::category::Category;
use crate::error::{AdmitError, Result};
use crate::selection::SelectionState;
use crate::year::{AdmissionYearConfig, YearMetadata, YearSummary};

pub use http::HttpApi;
pub use session::Session;

/// Remote operations the controllers depend on.
///
/// Implementations report transport and server failures as plain errors;
/// the controllers classify them (fetch vs. save).
#[allow(async_fn_in_trait)]
pub trait AdmissionsApi {
    async fn fetch_catalog(&self, category: Category) -> Result<Catalog>;

    async fn fetch_year_config(&self, year_id: &str) -> Result<AdmissionYearConfig>;

    /// Replace the year's configuration with `selection`
    async fn save_year_config(&self, year_id: &str, selection: &SelectionState) -> Result<()>;

    async fn create_year(&self, metadata: &YearMetadata) -> Result<()>;

    async fn list_years(&self) -> Result<Vec<YearSummary>>;
}

/// Everything the configuration modal needs before it can be edited
#[derive(Debug, Clone, PartialEq)]
pub struct YearSnapshot {
    pub config: AdmissionYearConfig,
    pub catalogs: Catalogs,
}

/// Fetch the year's configuration and all four catalogs concurrently.
///
/// Fails as soon as any request fails; no partial snapshot is returned.
pub async fn fetch_snapshot<A: AdmissionsApi>(api: &A, year_id: &str) -> Result<YearSnapshot> {
    let (config, criteria, majors, objects, regions) = tokio::try_join!(
        api.fetch_year_config(year_id),
        api.fetch_catalog(Category::Criteria),
        api.fetch_catalog(Category::Major),
        api.fetch_catalog(Category::Object),
        api.fetch_catalog(Category::Region),
    )?;

    let catalogs = [criteria, majors, objects, regions].into_iter().collect();
    Ok(YearSnapshot { config, catalogs })
}

/// Fail with `Timeout` when `call` outlives `limit`
pub async fn with_timeout<T>(
    operation: &str,
    limit: Duration,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| AdmitError::Timeout {
            operation: operation.to_string(),
            seconds: limit.as_secs(),
        })?
}
