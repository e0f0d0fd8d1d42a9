use std::path::PathBuf;

use clap::Args as ClapArgs;

use crate::error::Error;
use crate::report as exporter;
use crate::store::AnalysisStore;

use super::Context;

#[derive(ClapArgs)]
pub struct Args {
    /// Snapshot written by `adacheck analyze --save-json`
    #[arg(long)]
    pub from: PathBuf,

    /// Directory to write the report into (defaults to output.report_dir)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub fn run(args: Args, ctx: &Context) -> miette::Result<()> {
    let store = match exporter::load_snapshot(&args.from) {
        Ok(snapshot) => AnalysisStore::with_snapshot(snapshot),
        Err(Error::MissingAnalysis) => AnalysisStore::new(),
        Err(error) => return Err(error.into()),
    };

    let dir = args.dir.as_deref().unwrap_or(ctx.report_dir());
    let path = exporter::export_report(&store, dir, exporter::today())?;

    if !ctx.quiet {
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
