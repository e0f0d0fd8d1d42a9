use std::{future::Future, time::Duration};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Operation, Result};
use crate::model::{AnalysisRequest, FullAnalysisResult, QuickScanResult, RiskAssessmentResult};

/// The three remote calls the checker relies on.
pub trait ComplianceApi {
    fn quick_scan(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<QuickScanResult>> + Send;

    fn full_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<FullAnalysisResult>> + Send;

    fn business_risk(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<RiskAssessmentResult>> + Send;
}

#[derive(Clone)]
pub struct HttpComplianceClient {
    client: Client,
    quick_scan_url: String,
    full_analysis_url: String,
    business_risk_url: String,
}

impl HttpComplianceClient {
    pub fn setup(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.service.timeout_secs))
            .user_agent(concat!("adacheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        let endpoints = &config.service.endpoints;

        Ok(Self {
            client,
            quick_scan_url: config.endpoint_url(&endpoints.quick_scan),
            full_analysis_url: config.endpoint_url(&endpoints.full_analysis),
            business_risk_url: config.endpoint_url(&endpoints.business_risk),
        })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        operation: Operation,
        url: &str,
        request: &AnalysisRequest,
    ) -> Result<T> {
        debug!(%operation, url, target = %request.url, "sending request");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(%operation, error = %e, "request failed");
                Error::transport(operation, e)
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(operation, e))?;

        debug!(%operation, status, bytes = body.len(), "response received");

        interpret_response(operation, status, &body)
    }
}

impl ComplianceApi for HttpComplianceClient {
    async fn quick_scan(&self, request: &AnalysisRequest) -> Result<QuickScanResult> {
        self.post(Operation::QuickScan, &self.quick_scan_url, request)
            .await
    }

    async fn full_analysis(&self, request: &AnalysisRequest) -> Result<FullAnalysisResult> {
        self.post(Operation::FullAnalysis, &self.full_analysis_url, request)
            .await
    }

    async fn business_risk(&self, request: &AnalysisRequest) -> Result<RiskAssessmentResult> {
        self.post(Operation::RiskAssessment, &self.business_risk_url, request)
            .await
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Maps a raw response onto a typed result or one of the dispatcher's error kinds.
///
/// A body that is not JSON is a transport error. Otherwise an `error` field always
/// wins, whatever the status, and a non-success status without one yields the
/// operation's fallback message. Mis-shaped bodies are transport errors too.
pub fn interpret_response<T: DeserializeOwned>(
    operation: Operation,
    status: u16,
    body: &[u8],
) -> Result<T> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        Error::transport(operation, format!("malformed response (HTTP {status}): {e}"))
    })?;

    if let Some(error) = value.get("error").filter(|error| !error.is_null()) {
        let message = error
            .as_str()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| operation.fallback_message().to_string());

        return Err(Error::Application {
            operation,
            status: Some(status),
            message,
        });
    }

    if !is_success(status) {
        return Err(fallback_error(operation, status));
    }

    serde_json::from_value(value)
        .map_err(|e| Error::transport(operation, format!("unexpected response: {e}")))
}

fn fallback_error(operation: Operation, status: u16) -> Error {
    Error::Application {
        operation,
        status: Some(status),
        message: format!("{} (HTTP {})", operation.fallback_message(), status),
    }
}
