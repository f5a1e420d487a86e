use serde::{Deserialize, Serialize};
use crate::enums::screen_kind::ScreenKind;
use crate::helpers::config_helper::ConfigHelper;

/// Where each tab fetches its payload from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EndpointsConfig {
    #[serde(default = "ConfigHelper::default_daily_url")]
    pub daily: String,

    #[serde(default = "ConfigHelper::default_weekly_url")]
    pub weekly: String,

    #[serde(default = "ConfigHelper::default_category_url")]
    pub category: String,

    #[serde(default = "ConfigHelper::default_features_url")]
    pub features: String,
}

impl EndpointsConfig {
    pub fn url_for(&self, screen: ScreenKind) -> &str {
        match screen {
            ScreenKind::Daily => &self.daily,
            ScreenKind::Weekly => &self.weekly,
            ScreenKind::Category => &self.category,
            ScreenKind::Features => &self.features,
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            daily: ConfigHelper::default_daily_url(),
            weekly: ConfigHelper::default_weekly_url(),
            category: ConfigHelper::default_category_url(),
            features: ConfigHelper::default_features_url(),
        }
    }
}
