use std::path::PathBuf;

use akleg_scraping::akleg::parser::member_list;
use clap::Parser;
use scraper::Html;

#[derive(Parser)]
struct Opts {
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let html = Html::parse_document(&fs_err::read_to_string(opts.input)?);
    let res = member_list::parse(&html);
    println!("{res:#?}");
    Ok(())
}
