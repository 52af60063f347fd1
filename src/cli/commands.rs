use clap::Parser;

#[derive(Parser)]
#[command(name = "finfeed")]
#[command(about = "Aggregate finance news feeds into one combined feed")]
#[command(version)]
pub struct Cli {
    /// Recency window in hours; older feed items are dropped
    #[arg(long, default_value_t = 72, env = "FINFEED_HOURS")]
    pub hours: i64,

    /// Path for the combined RSS output
    #[arg(long, default_value = "finance_combined.xml")]
    pub xml_output: String,

    /// Path for the combined JSON output
    #[arg(long, default_value = "finance_combined.json")]
    pub json_output: String,

    /// JSON file with the source table (array of {"name", "url"} objects);
    /// the built-in finance sources are used if omitted
    #[arg(long)]
    pub sources: Option<String>,
}
