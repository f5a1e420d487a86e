use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The four dashboard tabs, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Daily,
    Weekly,
    Category,
    Features,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 4] = [Self::Daily, Self::Weekly, Self::Category, Self::Features];

    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Category => "Category",
            Self::Features => "Features",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Daily => "Daily App Usage",
            Self::Weekly => "Weekly Usage",
            Self::Category => "App Usage by Category",
            Self::Features => "Feature Completion Progress",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tab_label())
    }
}
