//! Wire types exchanged with the compliance service.
//!
//! Decoding accepts the superset of the shapes the service has produced over time:
//! optional panels may be missing, `wcag_reference` is read as `wcag_guideline`,
//! and a bare `fix_suggestion` string stands in for structured fix instructions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Business types offered by the interactive session. Free-form values are accepted too.
pub const BUSINESS_TYPES: &[&str] = &[
    "general",
    "restaurant",
    "retail",
    "ecommerce",
    "real estate",
    "healthcare",
    "professional",
    "legal",
    "service",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
}

impl AnalysisRequest {
    /// Builds a request from raw form input, rejecting a blank URL before any I/O.
    pub fn new(url: &str, business_type: Option<&str>) -> Result<Self> {
        let url = url.trim();

        if url.is_empty() {
            return Err(Error::EmptyUrl);
        }

        let business_type = business_type
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(Self {
            url: url.to_string(),
            business_type,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickScanResult {
    #[serde(default)]
    pub url: Option<String>,
    pub risk_level: String,
    #[serde(default)]
    pub missing_alt_text: u64,
    #[serde(default)]
    pub total_images: u64,
    #[serde(default)]
    pub potential_contrast_issues: u64,
    #[serde(default)]
    pub recommendation: String,
}

/// Numeric compliance score, rendered without a trailing `.0` for whole values
/// and unrounded otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(pub f64);

impl Score {
    /// Width of the score bar, clamped to the 0..=100 range.
    pub fn bar_width(&self) -> f64 {
        self.0.clamp(0.0, 100.0)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysisResult {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub critical_issues: u64,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub detailed_analysis: Option<DetailedAnalysis>,
    #[serde(default)]
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub title: String,
    pub lang_attribute: Option<String>,
    pub total_images: u64,
    pub total_links: u64,
    pub total_headings: u64,
    pub total_forms: u64,
    pub has_skip_links: bool,
    pub viewport_meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Critical,
    Warning,
    #[default]
    #[serde(other)]
    Info,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Critical => "critical",
            IssueType::Warning => "warning",
            IssueType::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FixInstructions {
    #[serde(default)]
    pub immediate: String,
    #[serde(default)]
    pub code_example: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
}

/// An example attached to an issue: either a plain snippet or a structured record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Example {
    Text(String),
    Structured(serde_json::Value),
}

impl Example {
    pub fn display_text(&self) -> String {
        match self {
            Example::Text(text) => text.clone(),
            Example::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type", default)]
    pub kind: IssueType,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "wcag_reference")]
    pub wcag_guideline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub business_impact: Option<String>,
    #[serde(default)]
    pub fix_instructions: Option<FixInstructions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_suggestion: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Issue {
    pub fn heading(&self) -> &str {
        [self.title.as_deref(), self.category.as_deref()]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .unwrap_or("Accessibility issue")
    }

    /// Fix guidance, falling back to the legacy one-line suggestion.
    pub fn fix_guidance(&self) -> Option<FixInstructions> {
        if let Some(fix) = &self.fix_instructions {
            return Some(fix.clone());
        }

        self.fix_suggestion
            .as_ref()
            .filter(|value| !value.trim().is_empty())
            .map(|immediate| FixInstructions {
                immediate: immediate.clone(),
                ..Default::default()
            })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedAnalysis {
    pub images: ImageAnalysis,
    pub headings: HeadingAnalysis,
    pub color_contrast: ContrastAnalysis,
    pub forms: FormAnalysis,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAnalysis {
    pub total: u64,
    pub missing_alt: u64,
    pub decorative: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingAnalysis {
    pub missing_h1: bool,
    pub sequence_errors: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastAnalysis {
    pub total_checked: u64,
    pub failed_aa: u64,
    pub failed_aaa: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormAnalysis {
    pub unlabeled_inputs: u64,
    pub missing_fieldsets: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub legal_risk_assessment: String,
    pub total_issues: u64,
    pub estimated_fix_time: String,
    pub priority_actions: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentResult {
    #[serde(default)]
    pub url: Option<String>,
    pub overall_risk: String,
    #[serde(default)]
    pub risk_factors: RiskFactors,
    #[serde(default)]
    pub recommendations: Vec<Option<String>>,
    #[serde(default)]
    pub compliance_summary: Option<ComplianceSummary>,
}

impl RiskAssessmentResult {
    /// Recommendations with the server's `null` placeholders removed.
    pub fn active_recommendations(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFactors {
    pub accessibility_score: Score,
    pub critical_issues: u64,
    pub business_type_risk: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceSummary {
    pub score: Score,
    pub grade: String,
    pub critical_issues: u64,
    pub warnings: u64,
}

/// A completed full analysis together with the risk panel shown alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub analysis: FullAnalysisResult,
    #[serde(default)]
    pub risk: Option<RiskAssessmentResult>,
}
