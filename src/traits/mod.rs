pub mod fetch_client;
pub mod chart_normalizer;
