use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "usage-dashboard")]
#[clap(about = "App usage dashboard in the terminal", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
