//! Terminal summaries printed after each command, rendered as markdown.

use std::path::Path;

use askama::Template;
use termimad::MadSkin;

use crate::error::Result;
use crate::model::{AnalysisSnapshot, QuickScanResult};

use super::view::{FullAnalysisView, QuickScanView, RiskView};

#[derive(Template)]
#[template(path = "summary/quick_scan.md")]
struct QuickScanSummary<'a> {
    view: &'a QuickScanView,
    page_path: String,
}

#[derive(Template)]
#[template(path = "summary/full_analysis.md")]
struct AnalysisSummary<'a> {
    view: &'a FullAnalysisView,
    risk: Option<&'a RiskView>,
    page_path: String,
}

pub fn quick_scan_markdown(result: &QuickScanResult, page_path: &Path) -> Result<String> {
    let view = QuickScanView::from(result);

    let summary = QuickScanSummary {
        view: &view,
        page_path: page_path.display().to_string(),
    };

    Ok(summary.render()?)
}

pub fn analysis_markdown(snapshot: &AnalysisSnapshot, page_path: &Path) -> Result<String> {
    let view = FullAnalysisView::from(&snapshot.analysis);
    let risk = snapshot.risk.as_ref().map(RiskView::from);

    let summary = AnalysisSummary {
        view: &view,
        risk: risk.as_ref(),
        page_path: page_path.display().to_string(),
    };

    Ok(summary.render()?)
}

pub fn print_quick_scan(result: &QuickScanResult, page_path: &Path) -> Result<()> {
    let markdown = quick_scan_markdown(result, page_path)?;
    MadSkin::default().print_text(&markdown);
    Ok(())
}

pub fn print_analysis(snapshot: &AnalysisSnapshot, page_path: &Path) -> Result<()> {
    let markdown = analysis_markdown(snapshot, page_path)?;
    MadSkin::default().print_text(&markdown);
    Ok(())
}
