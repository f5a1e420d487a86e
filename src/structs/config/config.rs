use serde::{Deserialize, Serialize};
use crate::structs::config::display_config::DisplayConfig;
use crate::structs::config::endpoints_config::EndpointsConfig;
use crate::structs::config::logging_config::LoggingConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
