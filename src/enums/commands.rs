use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::screen_kind::ScreenKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Load and check the configuration
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// List the tabs and the endpoint each one reads
    Tabs {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Fetch and render one tab, or all of them
    Show {
        #[clap(short, long, value_enum)]
        tab: Option<ScreenKind>,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}
