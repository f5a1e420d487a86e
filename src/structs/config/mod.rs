pub mod config;
pub mod endpoints_config;
pub mod display_config;
pub mod logging_config;
