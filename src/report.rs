//! Standalone HTML report for the most recent full analysis.

use std::path::{Path, PathBuf};

use askama::Template;
use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::AnalysisSnapshot;
use crate::render::view::{FullAnalysisView, RiskView};
use crate::store::AnalysisStore;

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    view: &'a FullAnalysisView,
    risk: Option<&'a RiskView>,
    generated_on: String,
}

pub fn report_file_name(date: NaiveDate) -> String {
    format!("ada-compliance-report-{}.html", date.format("%Y-%m-%d"))
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn generate_report_html(snapshot: &AnalysisSnapshot, date: NaiveDate) -> Result<String> {
    let view = FullAnalysisView::from(&snapshot.analysis);
    let risk = snapshot.risk.as_ref().map(RiskView::from);

    let template = ReportTemplate {
        view: &view,
        risk: risk.as_ref(),
        generated_on: date.format("%Y-%m-%d").to_string(),
    };

    Ok(template.render()?)
}

/// Writes the report for the stored analysis into `dir`.
///
/// Fails with [`Error::MissingAnalysis`] when nothing has been analyzed, in which
/// case no file is created.
pub fn export_report(store: &AnalysisStore, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let snapshot = store.current().ok_or(Error::MissingAnalysis)?;

    let html = generate_report_html(snapshot, date)?;
    let path = dir.join(report_file_name(date));

    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, html)?;

    debug!(path = %path.display(), "report exported");
    Ok(path)
}

/// Reads a snapshot previously written with `analyze --save-json`.
///
/// An unreadable file means there is nothing to report on.
pub fn load_snapshot(path: &Path) -> Result<AnalysisSnapshot> {
    let contents = std::fs::read_to_string(path).map_err(|error| {
        debug!(path = %path.display(), %error, "snapshot not readable");
        Error::MissingAnalysis
    })?;

    Ok(serde_json::from_str(&contents)?)
}

pub fn save_snapshot(snapshot: &AnalysisSnapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, serde_json::to_string_pretty(snapshot)?)?;
    Ok(())
}
