pub mod commands;
pub mod screen_kind;
pub mod binder_state;
pub mod config_source;
