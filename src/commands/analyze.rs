use std::path::PathBuf;

use clap::Args as ClapArgs;

use crate::render::{ResultsPage, terminal};
use crate::report as exporter;

use super::Context;

#[derive(ClapArgs)]
pub struct Args {
    /// Address of the page to analyze
    pub url: String,

    /// Kind of business the site belongs to (e.g. restaurant, retail)
    #[arg(long, short)]
    pub business_type: Option<String>,

    /// Also export a standalone HTML report into the report directory
    #[arg(long)]
    pub report: bool,

    /// Save the analysis as JSON so `adacheck report --from` can export it later
    #[arg(long)]
    pub save_json: Option<PathBuf>,
}

pub async fn run(args: Args, ctx: &Context) -> miette::Result<()> {
    let mut dispatcher = ctx.dispatcher()?;
    let mut page = ResultsPage::new();

    let snapshot = match dispatcher
        .full_analysis(&args.url, args.business_type.as_deref())
        .await
    {
        Ok(snapshot) => snapshot,
        Err(error) if error.is_remote() => return Err(ctx.publish_error(&mut page, error).into()),
        Err(error) => return Err(error.into()),
    };

    page.show_analysis(&snapshot)?;
    let page_path = ctx.write_page(&page)?;

    if let Some(path) = &args.save_json {
        exporter::save_snapshot(&snapshot, path)?;
    }

    if !ctx.quiet {
        terminal::print_analysis(&snapshot, &page_path)?;
    }

    if args.report {
        let path =
            exporter::export_report(dispatcher.store(), ctx.report_dir(), exporter::today())?;

        if !ctx.quiet {
            println!("Report saved to {}", path.display());
        }
    }

    Ok(())
}
