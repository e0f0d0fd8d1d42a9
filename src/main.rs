use adacheck::cli::{Cli, Commands};
use adacheck::commands::{self, Context};
use adacheck::config;
use clap::Parser;
use miette::Result;
use tracing::Level;

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = config::resolve(cli.config.as_deref())?;

    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
    }

    let ctx = Context::new(config, cli.quiet);

    match cli.command {
        Commands::QuickScan(args) => commands::quick_scan::run(args, &ctx).await,
        Commands::Analyze(args) => commands::analyze::run(args, &ctx).await,
        Commands::Report(args) => commands::report::run(args, &ctx),
        Commands::Session(args) => commands::session::run(args, &ctx).await,
        Commands::Init(args) => commands::init::run(args, &ctx),
    }
}
