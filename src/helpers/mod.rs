pub mod config_helper;
pub mod color_helper;
