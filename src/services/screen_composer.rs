use std::sync::Arc;
use rand::rngs::StdRng;
use crate::config::constants::{TAB_ACTIVE_TINT, TAB_INACTIVE_TINT};
use crate::enums::binder_state::BinderState;
use crate::enums::screen_kind::ScreenKind;
use crate::errors::FetchError;
use crate::services::normalizer::{CategoryNormalizer, DailyNormalizer, ProgressNormalizer, WeeklyNormalizer};
use crate::services::presentation_binder::PresentationBinder;
use crate::structs::config::endpoints_config::EndpointsConfig;
use crate::traits::fetch_client::FetchClient;
use crate::ui::chart_renderer::{render_bar, render_line, render_pie, render_progress, RenderOptions};

/// The tab shell. Each tab has its own binder; selecting a tab mounts it
/// once and never touches the others.
pub struct ScreenComposer {
    daily: PresentationBinder<DailyNormalizer>,
    weekly: PresentationBinder<WeeklyNormalizer>,
    category: PresentationBinder<CategoryNormalizer<StdRng>>,
    features: PresentationBinder<ProgressNormalizer>,
    active: Option<ScreenKind>,
}

impl ScreenComposer {
    pub fn new(client: Arc<dyn FetchClient>, endpoints: &EndpointsConfig) -> Self {
        Self::with_category_normalizer(client, endpoints, CategoryNormalizer::new())
    }

    pub fn with_category_normalizer(
        client: Arc<dyn FetchClient>,
        endpoints: &EndpointsConfig,
        category: CategoryNormalizer<StdRng>,
    ) -> Self {
        Self {
            daily: PresentationBinder::new(ScreenKind::Daily, &endpoints.daily, Arc::clone(&client), DailyNormalizer),
            weekly: PresentationBinder::new(ScreenKind::Weekly, &endpoints.weekly, Arc::clone(&client), WeeklyNormalizer),
            category: PresentationBinder::new(ScreenKind::Category, &endpoints.category, Arc::clone(&client), category),
            features: PresentationBinder::new(ScreenKind::Features, &endpoints.features, client, ProgressNormalizer),
            active: None,
        }
    }

    /// Makes `screen` the visible tab, mounting it on first selection.
    /// Returns whether a fetch was started.
    pub fn select_tab(&mut self, screen: ScreenKind) -> bool {
        self.active = Some(screen);
        match screen {
            ScreenKind::Daily => self.daily.mount(),
            ScreenKind::Weekly => self.weekly.mount(),
            ScreenKind::Category => self.category.mount(),
            ScreenKind::Features => self.features.mount(),
        }
    }

    pub fn active_tab(&self) -> Option<ScreenKind> {
        self.active
    }

    /// Mounts every tab without changing the active one.
    pub fn mount_all(&mut self) {
        self.daily.mount();
        self.weekly.mount();
        self.category.mount();
        self.features.mount();
    }

    pub fn state(&self, screen: ScreenKind) -> BinderState {
        match screen {
            ScreenKind::Daily => self.daily.current_state(),
            ScreenKind::Weekly => self.weekly.current_state(),
            ScreenKind::Category => self.category.current_state(),
            ScreenKind::Features => self.features.current_state(),
        }
    }

    pub fn error(&self, screen: ScreenKind) -> Option<FetchError> {
        match screen {
            ScreenKind::Daily => self.daily.current_error(),
            ScreenKind::Weekly => self.weekly.current_error(),
            ScreenKind::Category => self.category.current_error(),
            ScreenKind::Features => self.features.current_error(),
        }
    }

    pub fn url(&self, screen: ScreenKind) -> &str {
        match screen {
            ScreenKind::Daily => self.daily.url(),
            ScreenKind::Weekly => self.weekly.url(),
            ScreenKind::Category => self.category.url(),
            ScreenKind::Features => self.features.url(),
        }
    }

    pub fn daily(&self) -> &PresentationBinder<DailyNormalizer> {
        &self.daily
    }

    pub fn weekly(&self) -> &PresentationBinder<WeeklyNormalizer> {
        &self.weekly
    }

    pub fn category(&self) -> &PresentationBinder<CategoryNormalizer<StdRng>> {
        &self.category
    }

    pub fn features(&self) -> &PresentationBinder<ProgressNormalizer> {
        &self.features
    }

    pub async fn settle(&mut self, screen: ScreenKind) -> BinderState {
        match screen {
            ScreenKind::Daily => self.daily.settled().await,
            ScreenKind::Weekly => self.weekly.settled().await,
            ScreenKind::Category => self.category.settled().await,
            ScreenKind::Features => self.features.settled().await,
        }
    }

    /// Waits for every mounted tab; tabs never mounted report `Idle`.
    pub async fn settle_all(&mut self) -> [BinderState; 4] {
        let (daily, weekly, category, features) = futures::join!(
            self.daily.settled(),
            self.weekly.settled(),
            self.category.settled(),
            self.features.settled(),
        );
        [daily, weekly, category, features]
    }

    pub fn render_tab_bar(&self, options: &RenderOptions) -> String {
        let tabs: Vec<String> = ScreenKind::ALL
            .iter()
            .map(|tab| {
                if Some(*tab) == self.active {
                    options.paint(&format!("[{}]", tab.tab_label()), TAB_ACTIVE_TINT)
                } else {
                    options.paint(&format!(" {} ", tab.tab_label()), TAB_INACTIVE_TINT)
                }
            })
            .collect();
        tabs.join(" | ")
    }

    /// Title plus chart for one tab. A tab that is not loaded renders its
    /// empty chart.
    pub fn render_tab(&self, screen: ScreenKind, options: &RenderOptions) -> String {
        let chart = match screen {
            ScreenKind::Daily => render_line(&self.daily.display_data(), options),
            ScreenKind::Weekly => render_bar(&self.weekly.display_data(), options),
            ScreenKind::Category => render_pie(&self.category.display_data(), options),
            ScreenKind::Features => render_progress(&self.features.display_data(), options),
        };
        format!("{}\n{}", screen.title(), chart)
    }
}
