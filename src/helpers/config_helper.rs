use crate::config::constants::{
    default_category_url, default_daily_url, default_features_url, default_weekly_url,
    DEFAULT_CHART_HEIGHT, DEFAULT_FALLBACK_WIDTH, DEFAULT_LOG_LEVEL, DEFAULT_WIDTH_MARGIN,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_daily_url() -> String {
        default_daily_url()
    }

    pub fn default_weekly_url() -> String {
        default_weekly_url()
    }

    pub fn default_category_url() -> String {
        default_category_url()
    }

    pub fn default_features_url() -> String {
        default_features_url()
    }

    pub fn default_chart_height() -> u16 {
        DEFAULT_CHART_HEIGHT
    }

    pub fn default_width_margin() -> u16 {
        DEFAULT_WIDTH_MARGIN
    }

    pub fn default_fallback_width() -> u16 {
        DEFAULT_FALLBACK_WIDTH
    }

    pub fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }
}
