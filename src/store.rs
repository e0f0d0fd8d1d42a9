use tracing::debug;

use crate::model::AnalysisSnapshot;

/// Holds the most recent successful full analysis.
///
/// A new analysis replaces the previous one; failures never touch the slot, so a
/// report exported from it is never stale or partial.
#[derive(Debug, Default, Clone)]
pub struct AnalysisStore {
    last: Option<AnalysisSnapshot>,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: AnalysisSnapshot) -> Self {
        Self {
            last: Some(snapshot),
        }
    }

    pub fn replace(&mut self, snapshot: AnalysisSnapshot) -> Option<AnalysisSnapshot> {
        debug!(url = %snapshot.analysis.url, "storing latest analysis");
        self.last.replace(snapshot)
    }

    pub fn current(&self) -> Option<&AnalysisSnapshot> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }
}
