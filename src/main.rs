use clap::Parser;

use finfeed::cli::Cli;
use finfeed::config::Config;
use finfeed::errors::FinFeedResult;
use finfeed::output::{write_feed, write_json};
use finfeed::services::CollectService;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> FinFeedResult<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let service = CollectService::with_defaults();
    let entries = service.collect_recent(
        &config.sources,
        chrono::Duration::hours(config.window_hours),
    );

    println!("Found {} recent entries.", entries.len());

    write_feed(&entries, &config.xml_output)?;
    println!("RSS feed written: {}", config.xml_output);

    write_json(&entries, &config.json_output)?;
    println!("JSON written: {}", config.json_output);

    Ok(())
}
