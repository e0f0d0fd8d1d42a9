//! Response to HTML fragment rendering.
//!
//! Templates live under `templates/` and are compiled by askama. `.html`
//! templates escape every interpolated value, which is the only path server text
//! takes into markup.

use askama::Template;

use crate::error::{Error, Result};
use crate::model::{AnalysisSnapshot, FullAnalysisResult, QuickScanResult, RiskAssessmentResult};

pub mod classes;
pub mod terminal;
pub mod view;

use self::view::{ErrorView, FullAnalysisView, QuickScanView, RiskView};

// ============================================================================
// Askama Templates
// ============================================================================

#[derive(Template)]
#[template(path = "fragments/quick_scan.html")]
struct QuickScanTemplate<'a> {
    view: &'a QuickScanView,
}

#[derive(Template)]
#[template(path = "fragments/full_results.html")]
struct FullResultsTemplate<'a> {
    view: &'a FullAnalysisView,
}

#[derive(Template)]
#[template(path = "fragments/risk.html")]
struct RiskTemplate<'a> {
    view: &'a RiskView,
}

#[derive(Template)]
#[template(path = "fragments/error.html")]
struct ErrorTemplate<'a> {
    view: &'a ErrorView,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    page: &'a ResultsPage,
}

// ============================================================================
// Fragments
// ============================================================================

pub fn render_quick_scan(result: &QuickScanResult) -> Result<String> {
    let view = QuickScanView::from(result);
    Ok(QuickScanTemplate { view: &view }.render()?)
}

pub fn render_full_analysis(result: &FullAnalysisResult) -> Result<String> {
    let view = FullAnalysisView::from(result);
    Ok(FullResultsTemplate { view: &view }.render()?)
}

pub fn render_risk_assessment(result: &RiskAssessmentResult) -> Result<String> {
    let view = RiskView::from(result);
    Ok(RiskTemplate { view: &view }.render()?)
}

pub fn render_error(error: &Error) -> Result<String> {
    let view = ErrorView::from(error);
    Ok(ErrorTemplate { view: &view }.render()?)
}

// ============================================================================
// Results Page
// ============================================================================

/// The results area: one slot per panel, each holding an already rendered fragment.
///
/// Showing an error hides every result panel, so stale results never sit next
/// to a failure.
#[derive(Debug, Clone, Default)]
pub struct ResultsPage {
    pub error: Option<String>,
    pub quick_scan: Option<String>,
    pub full_results: Option<String>,
    pub risk: Option<String>,
}

impl ResultsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_quick_scan(&mut self, result: &QuickScanResult) -> Result<()> {
        *self = Self {
            quick_scan: Some(render_quick_scan(result)?),
            ..Self::default()
        };
        Ok(())
    }

    /// Shows a full analysis; the risk panel appears only when one was received.
    pub fn show_analysis(&mut self, snapshot: &AnalysisSnapshot) -> Result<()> {
        let risk = snapshot
            .risk
            .as_ref()
            .map(render_risk_assessment)
            .transpose()?;

        *self = Self {
            full_results: Some(render_full_analysis(&snapshot.analysis)?),
            risk,
            ..Self::default()
        };
        Ok(())
    }

    pub fn show_error(&mut self, error: &Error) -> Result<()> {
        *self = Self {
            error: Some(render_error(error)?),
            ..Self::default()
        };
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none()
            && self.quick_scan.is_none()
            && self.full_results.is_none()
            && self.risk.is_none()
    }

    pub fn render(&self) -> Result<String> {
        Ok(PageTemplate { page: self }.render()?)
    }
}
