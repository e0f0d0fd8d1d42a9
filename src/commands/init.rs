use std::path::Path;

use clap::Args as ClapArgs;
use inquire::{Select, Text};
use miette::IntoDiagnostic;

use crate::config::{AdvanceMode, Config, LOCAL_CONFIG_FILE};

use super::Context;

#[derive(ClapArgs)]
pub struct Args {
    /// Accept every default without prompting
    #[arg(long, short)]
    pub yes: bool,

    /// Overwrite an existing adacheck.toml
    #[arg(long)]
    pub force: bool,
}

fn prompt_config(mut config: Config) -> miette::Result<Config> {
    let base_url = Text::new("Compliance service URL:")
        .with_default(&config.service.base_url)
        .prompt()
        .into_diagnostic()?;

    let page = config.output.page.display().to_string();
    let page = Text::new("Results page file:")
        .with_default(&page)
        .prompt()
        .into_diagnostic()?;

    config.service.base_url = base_url;
    config.output.page = page.into();

    config.progress.mode = Select::new(
        "Progress simulation:",
        vec![AdvanceMode::Fixed, AdvanceMode::Random],
    )
    .prompt()
    .into_diagnostic()?;

    Ok(config)
}

pub fn run(args: Args, ctx: &Context) -> miette::Result<()> {
    let path = Path::new(LOCAL_CONFIG_FILE);

    if path.exists() && !args.force {
        miette::bail!("{LOCAL_CONFIG_FILE} already exists, pass --force to overwrite it");
    }

    // starts from the resolved config so --base-url is honoured
    let config = Config {
        service: ctx.config.service.clone(),
        ..Config::default()
    };

    let config = if args.yes {
        config
    } else {
        prompt_config(config)?
    };

    config.save(path)?;

    if !ctx.quiet {
        println!("Wrote {LOCAL_CONFIG_FILE}");
    }

    Ok(())
}
