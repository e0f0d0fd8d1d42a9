//! Interactive session: one store shared by every action until the user quits.

use std::fmt;

use clap::Args as ClapArgs;
use inquire::{Select, Text};
use miette::IntoDiagnostic;
use tracing::debug;

use crate::client::ComplianceApi;
use crate::dispatcher::Dispatcher;
use crate::error::{Error, Result};
use crate::model::BUSINESS_TYPES;
use crate::render::{ResultsPage, terminal};
use crate::report as exporter;

use super::Context;

const NO_BUSINESS_TYPE: &str = "(not specified)";

#[derive(ClapArgs)]
pub struct Args {
    /// Address to start with; prompted for when omitted
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    QuickScan,
    FullAnalysis,
    DownloadReport,
    ChangeSite,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::QuickScan,
        Action::FullAnalysis,
        Action::DownloadReport,
        Action::ChangeSite,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::QuickScan => "Quick scan",
            Action::FullAnalysis => "Full analysis",
            Action::DownloadReport => "Download report",
            Action::ChangeSite => "Change website",
            Action::Quit => "Quit",
        };

        write!(f, "{label}")
    }
}

struct Site {
    url: String,
    business_type: Option<String>,
}

fn prompt_site(initial: Option<&str>) -> miette::Result<Site> {
    let mut prompt = Text::new("Website URL:");

    if let Some(initial) = initial {
        prompt = prompt.with_initial_value(initial);
    }

    let url = prompt.prompt().into_diagnostic()?;

    let mut options = vec![NO_BUSINESS_TYPE];
    options.extend_from_slice(BUSINESS_TYPES);

    let business_type = Select::new("Business type:", options)
        .prompt()
        .into_diagnostic()?;

    Ok(Site {
        url,
        business_type: Some(business_type)
            .filter(|value| *value != NO_BUSINESS_TYPE)
            .map(str::to_string),
    })
}

async fn perform<A: ComplianceApi>(
    action: Action,
    site: &Site,
    dispatcher: &mut Dispatcher<A>,
    page: &mut ResultsPage,
    ctx: &Context,
) -> Result<()> {
    let business_type = site.business_type.as_deref();

    match action {
        Action::QuickScan => {
            let result = dispatcher.quick_scan(&site.url, business_type).await?;
            page.show_quick_scan(&result)?;
            let path = ctx.write_page(page)?;
            terminal::print_quick_scan(&result, &path)?;
        }
        Action::FullAnalysis => {
            let snapshot = dispatcher.full_analysis(&site.url, business_type).await?;
            page.show_analysis(&snapshot)?;
            let path = ctx.write_page(page)?;
            terminal::print_analysis(&snapshot, &path)?;
        }
        Action::DownloadReport => {
            let path =
                exporter::export_report(dispatcher.store(), ctx.report_dir(), exporter::today())?;
            println!("Report saved to {}", path.display());
        }
        Action::ChangeSite | Action::Quit => {}
    }

    Ok(())
}

pub async fn run(args: Args, ctx: &Context) -> miette::Result<()> {
    let mut dispatcher = ctx.dispatcher()?;
    let mut page = ResultsPage::new();
    let mut site = prompt_site(args.url.as_deref())?;

    loop {
        let action = Select::new("What next?", Action::ALL.to_vec())
            .prompt()
            .into_diagnostic()?;

        debug!(?action, url = %site.url, "session action");

        match action {
            Action::Quit => break,
            Action::ChangeSite => {
                site = prompt_site(Some(&site.url))?;
            }
            _ => {
                if let Err(error) = perform(action, &site, &mut dispatcher, &mut page, ctx).await {
                    let error = if error.is_remote() {
                        ctx.publish_error(&mut page, error)
                    } else {
                        error
                    };

                    report_error(error);
                }
            }
        }
    }

    Ok(())
}

fn report_error(error: Error) {
    eprintln!("{:?}", miette::Report::new(error));
}
