//! View models: the presentation-ready shape of each response.
//!
//! Every optional sub-section becomes an `Option` or an empty collection here, so
//! the templates never print a missing value.

use crate::error::Error;
use crate::model::{
    ComplianceSummary, DetailedAnalysis, FullAnalysisResult, Issue, IssueType, PageInfo,
    QuickScanResult, RiskAssessmentResult, Summary,
};

use super::classes::{grade_classes, risk_classes};

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub label: String,
    pub classes: String,
}

impl Badge {
    pub fn risk(raw: &str) -> Self {
        Self {
            label: non_blank(Some(raw)).unwrap_or_else(|| "Unknown".to_string()),
            classes: risk_classes(raw),
        }
    }

    pub fn grade(raw: &str) -> Self {
        Self {
            label: non_blank(Some(raw)).unwrap_or_else(|| "?".to_string()),
            classes: grade_classes(raw),
        }
    }

    fn uppercase(mut self) -> Self {
        self.label = self.label.to_uppercase();
        self
    }
}

#[derive(Debug, Clone)]
pub struct QuickScanView {
    pub url: Option<String>,
    pub risk: Badge,
    pub missing_alt_text: u64,
    pub total_images: u64,
    pub potential_contrast_issues: u64,
    pub recommendation: String,
}

impl From<&QuickScanResult> for QuickScanView {
    fn from(result: &QuickScanResult) -> Self {
        Self {
            url: non_blank(result.url.as_deref()),
            risk: Badge::risk(&result.risk_level),
            missing_alt_text: result.missing_alt_text,
            total_images: result.total_images,
            potential_contrast_issues: result.potential_contrast_issues,
            recommendation: result.recommendation.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FixView {
    pub immediate: String,
    pub code_example: Option<String>,
    pub estimated_time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IssueView {
    /// Stable position in the list; addresses the `examples-{index}` block.
    pub index: usize,
    pub kind: &'static str,
    pub icon: &'static str,
    pub heading: String,
    pub wcag_guideline: String,
    pub description: String,
    pub impact: String,
    pub business_impact: Option<String>,
    pub fix: Option<FixView>,
    pub count: Option<u64>,
    pub examples: Vec<String>,
}

impl IssueView {
    pub fn new(index: usize, issue: &Issue) -> Self {
        let icon = match issue.kind {
            IssueType::Critical => "⚠",
            IssueType::Warning => "!",
            IssueType::Info => "ℹ",
        };

        let fix = issue
            .fix_guidance()
            .filter(|fix| !fix.immediate.trim().is_empty() || fix.code_example.is_some())
            .map(|fix| FixView {
                immediate: fix.immediate,
                code_example: non_blank(fix.code_example.as_deref()),
                estimated_time: non_blank(fix.estimated_time.as_deref()),
            });

        Self {
            index,
            kind: issue.kind.as_str(),
            icon,
            heading: issue.heading().to_string(),
            wcag_guideline: issue.wcag_guideline.clone(),
            description: issue.description.clone(),
            impact: issue.impact.clone(),
            business_impact: non_blank(issue.business_impact.as_deref()),
            fix,
            count: issue.count,
            examples: issue.examples.iter().map(|e| e.display_text()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageInfoView {
    pub title: String,
    pub language: String,
    pub total_images: u64,
    pub total_links: u64,
    pub total_headings: u64,
    pub total_forms: u64,
    pub skip_links: &'static str,
    pub viewport_meta: &'static str,
}

fn presence(flag: bool) -> &'static str {
    if flag { "Present" } else { "Missing" }
}

impl From<&PageInfo> for PageInfoView {
    fn from(info: &PageInfo) -> Self {
        Self {
            title: info.title.clone(),
            language: non_blank(info.lang_attribute.as_deref())
                .unwrap_or_else(|| "Not specified".to_string()),
            total_images: info.total_images,
            total_links: info.total_links,
            total_headings: info.total_headings,
            total_forms: info.total_forms,
            skip_links: presence(info.has_skip_links),
            viewport_meta: presence(info.viewport_meta),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailView {
    pub images_total: u64,
    pub images_missing_alt: u64,
    pub images_decorative: u64,
    pub missing_h1: &'static str,
    pub missing_h1_class: &'static str,
    pub sequence_errors: usize,
    pub contrast_checked: u64,
    pub contrast_failed_aa: u64,
    pub contrast_failed_aaa: u64,
    pub unlabeled_inputs: u64,
    pub missing_fieldsets: u64,
}

impl From<&DetailedAnalysis> for DetailView {
    fn from(detail: &DetailedAnalysis) -> Self {
        let missing_h1 = detail.headings.missing_h1;

        Self {
            images_total: detail.images.total,
            images_missing_alt: detail.images.missing_alt,
            images_decorative: detail.images.decorative,
            missing_h1: if missing_h1 { "Yes" } else { "No" },
            missing_h1_class: if missing_h1 { "text-bad" } else { "text-good" },
            sequence_errors: detail.headings.sequence_errors.len(),
            contrast_checked: detail.color_contrast.total_checked,
            contrast_failed_aa: detail.color_contrast.failed_aa,
            contrast_failed_aaa: detail.color_contrast.failed_aaa,
            unlabeled_inputs: detail.forms.unlabeled_inputs,
            missing_fieldsets: detail.forms.missing_fieldsets,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FullAnalysisView {
    pub url: String,
    pub timestamp: String,
    pub grade: Badge,
    pub status: String,
    pub score: String,
    pub score_width: String,
    pub critical_issues: u64,
    pub risk: Badge,
    pub page_info: Option<PageInfoView>,
    pub issues: Vec<IssueView>,
    pub detail: Option<DetailView>,
    pub summary: Option<Summary>,
}

impl From<&FullAnalysisResult> for FullAnalysisView {
    fn from(result: &FullAnalysisResult) -> Self {
        Self {
            url: result.url.clone(),
            timestamp: result.timestamp.clone(),
            grade: Badge::grade(&result.grade),
            status: result.status.clone(),
            score: result.score.to_string(),
            score_width: format!("{}", result.score.bar_width()),
            critical_issues: result.critical_issues,
            risk: Badge::risk(result.risk_level.as_deref().unwrap_or_default()),
            page_info: result.page_info.as_ref().map(PageInfoView::from),
            issues: result
                .issues
                .iter()
                .enumerate()
                .map(|(index, issue)| IssueView::new(index, issue))
                .collect(),
            detail: result.detailed_analysis.as_ref().map(DetailView::from),
            summary: result.summary.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RiskView {
    pub overall: Badge,
    pub accessibility_score: String,
    pub critical_issues: u64,
    pub business_type_risk: String,
    pub recommendations: Vec<String>,
    pub compliance: Option<ComplianceSummary>,
}

impl From<&RiskAssessmentResult> for RiskView {
    fn from(result: &RiskAssessmentResult) -> Self {
        let factors = &result.risk_factors;

        Self {
            overall: Badge::risk(&result.overall_risk).uppercase(),
            accessibility_score: factors.accessibility_score.to_string(),
            critical_issues: factors.critical_issues,
            business_type_risk: non_blank(Some(&factors.business_type_risk))
                .map(|value| value.to_uppercase())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            recommendations: result
                .active_recommendations()
                .into_iter()
                .map(str::to_string)
                .collect(),
            compliance: result.compliance_summary.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorView {
    /// Omitted when the message already opens with it.
    pub heading: Option<String>,
    pub message: String,
}

impl From<&Error> for ErrorView {
    fn from(error: &Error) -> Self {
        let heading = match error.operation() {
            Some(operation) => operation.fallback_message(),
            None => "Something went wrong",
        };

        let message = error.to_string();

        Self {
            heading: Some(heading)
                .filter(|heading| !message.starts_with(heading))
                .map(str::to_string),
            message,
        }
    }
}
