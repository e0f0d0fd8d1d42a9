//! Turns form input into remote calls and keeps the last full analysis.

use tracing::{debug, warn};

use crate::client::ComplianceApi;
use crate::error::{Operation, Result};
use crate::model::{AnalysisRequest, AnalysisSnapshot, QuickScanResult};
use crate::progress::ProgressFactory;
use crate::store::AnalysisStore;

pub struct Dispatcher<A> {
    api: A,
    progress: ProgressFactory,
    store: AnalysisStore,
}

impl<A: ComplianceApi> Dispatcher<A> {
    pub fn new(api: A, progress: ProgressFactory) -> Self {
        Self {
            api,
            progress,
            store: AnalysisStore::new(),
        }
    }

    pub fn store(&self) -> &AnalysisStore {
        &self.store
    }

    /// Whether a progress indicator is still showing.
    pub fn is_loading(&self) -> bool {
        self.progress.active() > 0
    }

    pub async fn quick_scan(
        &self,
        url: &str,
        business_type: Option<&str>,
    ) -> Result<QuickScanResult> {
        let request = AnalysisRequest::new(url, business_type)?;

        let progress = self.progress.start(Operation::QuickScan);
        let result = self.api.quick_scan(&request).await;
        progress.stop().await;

        debug!(url = %request.url, ok = result.is_ok(), "quick scan finished");
        result
    }

    /// Runs the full analysis and, only once it succeeds, the risk assessment.
    ///
    /// A failed risk assessment leaves the panel out without failing the analysis.
    /// The stored snapshot is replaced only on success.
    pub async fn full_analysis(
        &mut self,
        url: &str,
        business_type: Option<&str>,
    ) -> Result<AnalysisSnapshot> {
        let request = AnalysisRequest::new(url, business_type)?;

        let progress = self.progress.start(Operation::FullAnalysis);
        let result = self.run_full_analysis(&request).await;
        progress.stop().await;

        let snapshot = result?;
        self.store.replace(snapshot.clone());

        Ok(snapshot)
    }

    async fn run_full_analysis(&self, request: &AnalysisRequest) -> Result<AnalysisSnapshot> {
        let analysis = self.api.full_analysis(request).await?;

        let risk = match self.api.business_risk(request).await {
            Ok(risk) => Some(risk),
            Err(error) => {
                warn!(%error, "risk assessment failed, omitting risk panel");
                None
            }
        };

        Ok(AnalysisSnapshot { analysis, risk })
    }
}
