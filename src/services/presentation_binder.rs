use std::sync::Arc;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use crate::enums::binder_state::BinderState;
use crate::enums::screen_kind::ScreenKind;
use crate::errors::FetchError;
use crate::traits::chart_normalizer::ChartNormalizer;
use crate::traits::fetch_client::FetchClient;

#[derive(Debug, Clone)]
enum Phase<T> {
    Idle,
    Loading,
    Loaded { data: T, fetched_at: DateTime<Utc> },
    Failed(FetchError),
}

impl<T> Phase<T> {
    fn state(&self) -> BinderState {
        match self {
            Self::Idle => BinderState::Idle,
            Self::Loading => BinderState::Loading,
            Self::Loaded { .. } => BinderState::Loaded,
            Self::Failed(_) => BinderState::Failed,
        }
    }
}

/// Holds one screen's data through `Idle -> Loading -> Loaded | Failed`.
///
/// The fetch runs once, on the first [`mount`](Self::mount), as a spawned
/// task that publishes its outcome over a watch channel. Dropping the binder
/// does not cancel an in-flight fetch; its result is simply never read.
pub struct PresentationBinder<N: ChartNormalizer> {
    screen: ScreenKind,
    url: String,
    client: Arc<dyn FetchClient>,
    pending: Option<(N, watch::Sender<Phase<N::Output>>)>,
    receiver: watch::Receiver<Phase<N::Output>>,
}

impl<N: ChartNormalizer> PresentationBinder<N> {
    pub fn new(screen: ScreenKind, url: impl Into<String>, client: Arc<dyn FetchClient>, normalizer: N) -> Self {
        let (sender, receiver) = watch::channel(Phase::Idle);
        Self {
            screen,
            url: url.into(),
            client,
            pending: Some((normalizer, sender)),
            receiver,
        }
    }

    pub fn screen(&self) -> ScreenKind {
        self.screen
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Starts the fetch if this is the first mount. Returns whether a fetch
    /// was started; later calls do nothing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) -> bool {
        let Some((mut normalizer, sender)) = self.pending.take() else {
            return false;
        };

        sender.send_replace(Phase::Loading);
        log::debug!("{} screen: idle -> loading", self.screen);

        let screen = self.screen;
        let url = self.url.clone();
        let client = Arc::clone(&self.client);

        tokio::spawn(async move {
            log::debug!("{} screen: fetching {}", screen, url);
            let phase = match client.fetch(&url).await {
                Ok(raw) => {
                    log::debug!("{} screen: loading -> loaded", screen);
                    Phase::Loaded {
                        data: normalizer.normalize(&raw),
                        fetched_at: Utc::now(),
                    }
                }
                Err(error) => {
                    log::error!("Error fetching {} data: {}", screen, error);
                    Phase::Failed(error)
                }
            };
            sender.send_replace(phase);
        });

        true
    }

    pub fn current_state(&self) -> BinderState {
        self.receiver.borrow().state()
    }

    /// The normalized data, only while `Loaded`. Every other state returns
    /// `None`; use [`display_data`](Self::display_data) for what the screen
    /// actually shows.
    pub fn current_data(&self) -> Option<N::Output> {
        match &*self.receiver.borrow() {
            Phase::Loaded { data, .. } => Some(data.clone()),
            _ => None,
        }
    }

    /// The fetch error, only while `Failed`.
    pub fn current_error(&self) -> Option<FetchError> {
        match &*self.receiver.borrow() {
            Phase::Failed(error) => Some(error.clone()),
            _ => None,
        }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match &*self.receiver.borrow() {
            Phase::Loaded { fetched_at, .. } => Some(*fetched_at),
            _ => None,
        }
    }

    /// Loaded data, or the chart's empty value in any other state.
    pub fn display_data(&self) -> N::Output {
        self.current_data().unwrap_or_default()
    }

    /// Waits for the fetch to finish and returns the final state. Returns
    /// `Idle` at once if the binder was never mounted.
    pub async fn settled(&mut self) -> BinderState {
        if self.pending.is_some() {
            return BinderState::Idle;
        }

        let settled = self
            .receiver
            .wait_for(|phase| phase.state().is_settled())
            .await
            .map(|phase| phase.state());

        // Err means the fetch task went away without publishing (it panicked)
        settled.unwrap_or_else(|_| self.current_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalizer::{CategoryNormalizer, DailyNormalizer, ProgressNormalizer};
    use crate::structs::charts::daily_series::DailySeries;
    use crate::traits::fetch_client::MockFetchClient;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn daily_binder(mock: MockFetchClient) -> PresentationBinder<DailyNormalizer> {
        PresentationBinder::new(ScreenKind::Daily, "http://test/daily.json", Arc::new(mock), DailyNormalizer)
    }

    #[test]
    fn new_binder_is_idle_with_nothing_to_show() {
        let binder = daily_binder(MockFetchClient::new());

        assert_eq!(binder.current_state(), BinderState::Idle);
        assert!(binder.current_data().is_none());
        assert!(binder.current_error().is_none());
        assert_eq!(binder.display_data(), DailySeries::default());
    }

    #[tokio::test]
    async fn successful_fetch_reaches_loaded() {
        let mut mock = MockFetchClient::new();
        mock.expect_fetch()
            .withf(|url| url.to_string() == "http://test/daily.json")
            .times(1)
            .returning(|_| Ok(json!({"values": [1, 2, 3], "labels": ["Mon", "Tue", "Wed"]})));

        let mut binder = daily_binder(mock);
        assert!(binder.mount());
        assert_eq!(binder.current_state(), BinderState::Loading);

        assert_eq!(binder.settled().await, BinderState::Loaded);
        let data = binder.current_data().unwrap();
        assert_eq!(data.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(data.labels, vec!["Mon", "Tue", "Wed"]);
        assert!(binder.fetched_at().is_some());
        assert!(binder.current_error().is_none());
    }

    #[tokio::test]
    async fn failed_fetch_is_terminal_and_hides_data() {
        let mut mock = MockFetchClient::new();
        mock.expect_fetch()
            .times(1)
            .returning(|_| Err(FetchError::new("http://test/daily.json returned 500 Internal Server Error")));

        let mut binder = daily_binder(mock);
        binder.mount();

        assert_eq!(binder.settled().await, BinderState::Failed);
        assert!(binder.current_data().is_none());
        assert_eq!(binder.display_data(), DailySeries::default());
        let error = binder.current_error().unwrap();
        assert!(!error.message.is_empty());

        // no retry on remount
        assert!(!binder.mount());
        assert_eq!(binder.current_state(), BinderState::Failed);
    }

    #[tokio::test]
    async fn mount_fetches_only_once() {
        let mut mock = MockFetchClient::new();
        mock.expect_fetch()
            .times(1)
            .returning(|_| Ok(json!({"labels": ["A"], "data": [0.5]})));

        let mut binder =
            PresentationBinder::new(ScreenKind::Features, "http://test/p", Arc::new(mock), ProgressNormalizer);

        assert!(binder.mount());
        assert!(!binder.mount());
        assert_eq!(binder.settled().await, BinderState::Loaded);
        assert!(!binder.mount());
        assert_eq!(binder.current_data().unwrap().data, vec![0.5]);
    }

    #[tokio::test]
    async fn malformed_payload_still_loads_as_empty() {
        let mut mock = MockFetchClient::new();
        mock.expect_fetch().returning(|_| Ok(json!({"unexpected": true})));

        let mut binder = daily_binder(mock);
        binder.mount();

        assert_eq!(binder.settled().await, BinderState::Loaded);
        assert_eq!(binder.current_data(), Some(DailySeries::default()));
    }

    #[test]
    fn settled_without_mount_returns_idle() {
        let mut binder = daily_binder(MockFetchClient::new());
        assert_eq!(tokio_test::block_on(binder.settled()), BinderState::Idle);
    }

    #[tokio::test]
    async fn category_binder_uses_its_color_source() {
        let mut mock = MockFetchClient::new();
        mock.expect_fetch()
            .returning(|_| Ok(json!([{"name": "Social", "population": 3}, {"name": "Games", "population": 1}])));

        let normalizer = CategoryNormalizer::with_rng(StdRng::seed_from_u64(5));
        let mut binder = PresentationBinder::new(ScreenKind::Category, "http://test/c", Arc::new(mock), normalizer);
        binder.mount();
        binder.settled().await;

        let slices = binder.current_data().unwrap();
        let expected = CategoryNormalizer::with_rng(StdRng::seed_from_u64(5))
            .normalize(&json!([{"name": "Social", "population": 3}, {"name": "Games", "population": 1}]));
        assert_eq!(slices, expected);
    }
}
