use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Nominal chart height in points; the text renderer scales it down to rows.
    #[serde(default = "ConfigHelper::default_chart_height")]
    pub chart_height: u16,

    /// Charts are drawn `terminal width - width_margin` columns wide.
    #[serde(default = "ConfigHelper::default_width_margin")]
    pub width_margin: u16,

    /// Used when stdout is not a terminal.
    #[serde(default = "ConfigHelper::default_fallback_width")]
    pub fallback_width: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chart_height: ConfigHelper::default_chart_height(),
            width_margin: ConfigHelper::default_width_margin(),
            fallback_width: ConfigHelper::default_fallback_width(),
        }
    }
}
