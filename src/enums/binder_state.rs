use std::fmt;
use serde::{Deserialize, Serialize};

/// Lifecycle of one screen's data. `Loaded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinderState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl BinderState {
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Loaded | Self::Failed)
    }
}

impl fmt::Display for BinderState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}
