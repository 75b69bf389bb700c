//! `get_seo_page_report` — SEO audit lookup via RapidAPI.
//!
//! One awaited GET to the website-seo-analyzer service per invocation. The
//! parsed JSON body is returned verbatim as the action result; failures
//! propagate with no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::config::Settings;

use super::errors::ActionError;
use super::registry::Action;

// ─── Constants ──────────────────────────────────────────────────────────────

/// The action name the model uses in descriptors.
pub const SEO_PAGE_REPORT: &str = "get_seo_page_report";

/// Audit service endpoint.
const AUDIT_URL: &str = "https://website-seo-analyzer.p.rapidapi.com/seo/seo-audit-basic";

/// RapidAPI host header value (required alongside the key).
const RAPIDAPI_HOST: &str = "website-seo-analyzer.p.rapidapi.com";

/// TCP connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout — audits crawl the target page server-side.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ─── Parameters ─────────────────────────────────────────────────────────────

/// Typed parameter contract for `get_seo_page_report`.
#[derive(Debug, Deserialize)]
struct SeoReportParams {
    /// The site to audit, e.g. `"example.com"`.
    url: String,
}

// ─── Action ─────────────────────────────────────────────────────────────────

/// The bundled SEO audit action.
pub struct SeoPageReport {
    http: HttpClient,
    api_key: String,
}

impl SeoPageReport {
    /// Create the action from settings.
    pub fn new(settings: &Settings) -> Result<Self, ActionError> {
        let http = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ActionError::RequestFailed {
                endpoint: AUDIT_URL.to_string(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            api_key: settings.rapidapi_key.clone(),
        })
    }

    /// Decode the generic parameter bag into the typed contract.
    fn parse_params(params: &serde_json::Value) -> Result<SeoReportParams, ActionError> {
        serde_json::from_value(params.clone()).map_err(|e| ActionError::InvalidParameters {
            action: SEO_PAGE_REPORT.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl Action for SeoPageReport {
    fn name(&self) -> &str {
        SEO_PAGE_REPORT
    }

    async fn invoke(&self, params: &serde_json::Value) -> Result<serde_json::Value, ActionError> {
        let params = Self::parse_params(params)?;

        tracing::info!(url = %params.url, "fetching SEO page report");

        let response = self
            .http
            .get(AUDIT_URL)
            .query(&[("url", params.url.as_str())])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .send()
            .await
            .map_err(|e| ActionError::RequestFailed {
                endpoint: AUDIT_URL.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ActionError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ActionError::MalformedPayload {
                reason: e.to_string(),
            })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
