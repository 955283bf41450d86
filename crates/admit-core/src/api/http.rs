//! reqwest-backed admissions API client
//!
//! Wire format:
//! - `GET  {base}/{category endpoint}` → array of catalog objects
//! - `GET  {base}/admission-years` → array of year summaries
//! - `GET  {base}/admission-years/{year}/config` → configuration object
//! - `PUT  {base}/admission-years/{year}/config` ← selected ids per category
//! - `POST {base}/admission-years` ← new year metadata

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{AdmissionsApi, Session};
use crate::catalog::Catalog;
use crate::category::Category;
use crate::config::ClientConfig;
use crate::error::{AdmitError, Result};
use crate::selection::SelectionState;
use crate::year::{AdmissionYearConfig, YearMetadata, YearSummary};

/// Longest response body excerpt carried into an error message
const MAX_ERROR_BODY: usize = 200;

/// Path below the base URL, one entry per segment
const YEARS: &[&str] = &["admission-years"];

pub struct HttpApi {
    client: reqwest::Client,
    base_url: Url,
    session: Session,
}

impl HttpApi {
    pub fn new(base_url: &str, session: Session, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| AdmitError::invalid_value("api url", base_url))?;
        let user_agent = format!(
            "admit/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AdmitError::operation("build HTTP client", e))?;

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.api_url, config.session(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Append `segments` to the base URL, percent-encoding each one
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.url(segments);
        debug!(%method, path = url.path(), "api_request");
        let builder = self.client.request(method, url);
        match self.session.authorization() {
            Some(header) => builder.header(reqwest::header::AUTHORIZATION, header),
            None => builder,
        }
    }

    async fn send(&self, label: &str, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| AdmitError::operation(label, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, label, "api_request_failed");
        Err(AdmitError::operation(label, describe_status(status, &body)))
    }

    async fn get_json(&self, segments: &[&str]) -> Result<Value> {
        let label = label(&Method::GET, segments);
        let response = self.send(&label, self.request(Method::GET, segments)).await?;
        response
            .json()
            .await
            .map_err(|e| AdmitError::operation(&label, format!("invalid JSON response: {}", e)))
    }
}

fn describe_status(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status.to_string();
    }
    let excerpt: String = body.chars().take(MAX_ERROR_BODY).collect();
    format!("{}: {}", status, excerpt)
}

fn label(method: &Method, segments: &[&str]) -> String {
    format!("{} /{}", method, segments.join("/"))
}

fn year_config(year_id: &str) -> [&str; 3] {
    [YEARS[0], year_id, "config"]
}

/// Body of a replace-configuration request: sorted ids under each
/// category's save field
pub fn save_payload(selection: &SelectionState) -> Value {
    let body: Map<String, Value> = Category::ALL
        .iter()
        .map(|&category| {
            let ids = selection
                .ids(category)
                .iter()
                .map(|id| Value::String(id.clone()))
                .collect();
            (category.descriptor().save_field.to_string(), Value::Array(ids))
        })
        .collect();
    Value::Object(body)
}

fn as_list(label: &str, value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        // some deployments wrap lists as {"data": [...]}
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(AdmitError::operation(label, "expected a JSON array")),
        },
        _ => Err(AdmitError::operation(label, "expected a JSON array")),
    }
}

impl AdmissionsApi for HttpApi {
    async fn fetch_catalog(&self, category: Category) -> Result<Catalog> {
        let endpoint = category.descriptor().endpoint;
        let value = self.get_json(&[endpoint]).await?;
        let items = as_list(&label(&Method::GET, &[endpoint]), value)?;
        Ok(Catalog::from_values(category, &items))
    }

    async fn fetch_year_config(&self, year_id: &str) -> Result<AdmissionYearConfig> {
        let value = self.get_json(&year_config(year_id)).await?;
        Ok(AdmissionYearConfig::from_value(year_id, &value))
    }

    async fn save_year_config(&self, year_id: &str, selection: &SelectionState) -> Result<()> {
        let path = year_config(year_id);
        let builder = self
            .request(Method::PUT, &path)
            .json(&save_payload(selection));
        self.send(&label(&Method::PUT, &path), builder).await?;
        Ok(())
    }

    async fn create_year(&self, metadata: &YearMetadata) -> Result<()> {
        let builder = self.request(Method::POST, YEARS).json(metadata);
        self.send(&label(&Method::POST, YEARS), builder).await?;
        Ok(())
    }

    async fn list_years(&self) -> Result<Vec<YearSummary>> {
        let label = label(&Method::GET, YEARS);
        let value = self.get_json(YEARS).await?;
        as_list(&label, value)?
            .into_iter()
            .filter(|v| !v.is_null())
            .map(|v| serde_json::from_value(v).map_err(|e| AdmitError::operation(&label, e)))
            .collect()
    }
}
