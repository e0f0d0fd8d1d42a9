use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_QUICK_SCAN_PATH: &str = "/api/compliance/quick-scan";
pub const DEFAULT_FULL_ANALYSIS_PATH: &str = "/api/compliance/analyze";
pub const DEFAULT_BUSINESS_RISK_PATH: &str = "/api/compliance/business-risk";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EndpointsConfig {
    pub quick_scan: String,
    pub full_analysis: String,
    pub business_risk: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            quick_scan: DEFAULT_QUICK_SCAN_PATH.to_string(),
            full_analysis: DEFAULT_FULL_ANALYSIS_PATH.to_string(),
            business_risk: DEFAULT_BUSINESS_RISK_PATH.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub endpoints: EndpointsConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
            endpoints: EndpointsConfig::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AdvanceMode {
    #[default]
    Fixed,
    Random,
}

impl std::fmt::Display for AdvanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvanceMode::Fixed => write!(f, "fixed"),
            AdvanceMode::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProgressConfig {
    pub mode: AdvanceMode,
    pub tick_ms: u64,
    pub quick_scan_ms: u64,
    pub full_analysis_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            mode: AdvanceMode::Fixed,
            tick_ms: 100,
            quick_scan_ms: 3_000,
            full_analysis_ms: 8_000,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Results page rewritten after every request.
    pub page: PathBuf,

    /// Directory downloaded reports are written into.
    pub report_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            page: PathBuf::from("ada-results.html"),
            report_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub progress: ProgressConfig,
    pub output: OutputConfig,
}
