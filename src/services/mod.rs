pub mod http_fetch_client;
pub mod normalizer;
pub mod presentation_binder;
pub mod screen_composer;
