use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "prlyzer")]
#[clap(about = "AI-powered pull request analysis", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
