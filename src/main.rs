use akleg_scraping::akleg::parser::member_list;
use akleg_scraping::akleg::Chamber;
use akleg_scraping::api::LegClient;
use akleg_scraping::fs_json_util::write_json;
use clap::Parser;
use log::info;
use log::LevelFilter;
use scraper::Html;

/// Scrapes one Alaska Legislature chamber roster into a JSON file.
#[derive(Parser)]
struct Opts {
    /// Chamber to scrape (`senate` or `house`).
    #[arg(long)]
    chamber: Option<String>,
    /// Bare chamber tokens are accepted too; anything else is ignored.
    tokens: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    let opts = Opts::parse();

    let chamber = Chamber::resolve(opts.chamber.as_deref(), &opts.tokens);
    info!("Using chamber: {chamber} (fetching {})", chamber.page_path());

    let client = LegClient::new()?;
    let html = client.fetch_chamber_page(chamber).await?;
    let records = member_list::parse(&Html::parse_document(&html));

    info!("Finished.  Writing JSON to {} ...", chamber.output_file());
    write_json(chamber.output_file(), &records)?;
    info!("Wrote {}", chamber.output_file());
    Ok(())
}
