use std::path::PathBuf;

pub const CONFIG_DIR_NAME: &str = "usage-dashboard";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const BUCKET_BASE_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud";

pub fn default_daily_url() -> String {
    format!("{}/ZA40HNE2G0l7ZUgnq5VO4Q/dataoveraweek.json", BUCKET_BASE_URL)
}

pub fn default_weekly_url() -> String {
    format!("{}/4vOv2DroCvrpvIqvHjRq3w/weeklydata.json", BUCKET_BASE_URL)
}

pub fn default_category_url() -> String {
    format!("{}/Q4E2g7pKaK__9XII3C1GEQ/socialmedia.json", BUCKET_BASE_URL)
}

pub fn default_features_url() -> String {
    format!("{}/tY7RUI7a7CsHkyatn10gJQ/progress-chart%20-1-", BUCKET_BASE_URL)
}

// Pie legend styling applied to every category slice.
pub const LEGEND_FONT_COLOR: &str = "#7F7F7F";
pub const LEGEND_FONT_SIZE: u32 = 12;

// Static chart colors. These never come from the payloads.
pub const LINE_COLOR: &str = "#1e90ff";
pub const LINE_POINT_COLOR: &str = "#ff6347";
pub const BAR_COLOR: &str = "#8ccf9e";
pub const BAR_DECIMAL_PLACES: usize = 0;
pub const PROGRESS_COLOR: &str = "#1e90ff";
pub const TAB_ACTIVE_TINT: &str = "#1e90ff";
pub const TAB_INACTIVE_TINT: &str = "#808080";

pub const DEFAULT_CHART_HEIGHT: u16 = 220;
pub const DEFAULT_WIDTH_MARGIN: u16 = 32;
pub const DEFAULT_FALLBACK_WIDTH: u16 = 80;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}
