use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medz")]
#[command(about = "Interactive drilldown shell for media metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The JSON catalog file backing the metadata source
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}
