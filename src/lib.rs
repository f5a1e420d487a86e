//! Chart data for the app usage dashboard: fetch, normalize, hold per-screen
//! state, and compose the four tabs.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;

pub use enums::binder_state::BinderState;
pub use enums::screen_kind::ScreenKind;
pub use errors::{DashboardError, DashboardResult, FetchError};
pub use services::http_fetch_client::HttpFetchClient;
pub use services::normalizer::{normalize_category, normalize_daily, normalize_progress, normalize_weekly};
pub use services::presentation_binder::PresentationBinder;
pub use services::screen_composer::ScreenComposer;
pub use traits::chart_normalizer::ChartNormalizer;
pub use traits::fetch_client::FetchClient;
