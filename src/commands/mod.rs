use std::path::{Path, PathBuf};

use tracing::debug;

use crate::client::HttpComplianceClient;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::{Error, Result};
use crate::progress::ProgressFactory;
use crate::render::ResultsPage;

pub mod analyze;
pub mod init;
pub mod quick_scan;
pub mod report;
pub mod session;

/// Resolved configuration plus the output switches shared by every command.
pub struct Context {
    pub config: Config,
    pub quiet: bool,
}

impl Context {
    pub fn new(config: Config, quiet: bool) -> Self {
        Self { config, quiet }
    }

    pub fn dispatcher(&self) -> Result<Dispatcher<HttpComplianceClient>> {
        let api = HttpComplianceClient::setup(&self.config)?;
        let progress = ProgressFactory::new(self.config.progress.clone(), !self.quiet);

        Ok(Dispatcher::new(api, progress))
    }

    pub fn page_path(&self) -> &Path {
        &self.config.output.page
    }

    pub fn report_dir(&self) -> &Path {
        &self.config.output.report_dir
    }

    pub fn write_page(&self, page: &ResultsPage) -> Result<PathBuf> {
        let path = self.page_path().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, page.render()?)?;
        debug!(path = %path.display(), "results page written");

        Ok(path)
    }

    /// Shows a failed operation in the page's error area, then hands the error back.
    pub fn publish_error(&self, page: &mut ResultsPage, error: Error) -> Error {
        let published = page
            .show_error(&error)
            .and_then(|_| self.write_page(page).map(|_| ()));

        if let Err(render_error) = published {
            debug!(error = %render_error, "could not publish error to results page");
        }

        error
    }
}
