use clap::Args as ClapArgs;

use crate::render::{ResultsPage, terminal};

use super::Context;

#[derive(ClapArgs)]
pub struct Args {
    /// Address of the page to scan
    pub url: String,

    /// Kind of business the site belongs to (e.g. restaurant, retail)
    #[arg(long, short)]
    pub business_type: Option<String>,
}

pub async fn run(args: Args, ctx: &Context) -> miette::Result<()> {
    let dispatcher = ctx.dispatcher()?;
    let mut page = ResultsPage::new();

    let result = match dispatcher
        .quick_scan(&args.url, args.business_type.as_deref())
        .await
    {
        Ok(result) => result,
        Err(error) if error.is_remote() => return Err(ctx.publish_error(&mut page, error).into()),
        Err(error) => return Err(error.into()),
    };

    page.show_quick_scan(&result)?;
    let page_path = ctx.write_page(&page)?;

    if !ctx.quiet {
        terminal::print_quick_scan(&result, &page_path)?;
    }

    Ok(())
}
