use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use terminal_size::{terminal_size, Width};
use crate::config::config_manager::ConfigManager;
use crate::config::constants::DEFAULT_LOG_LEVEL;
use crate::enums::commands::Commands;
use crate::enums::config_source::ConfigSource;
use crate::enums::screen_kind::ScreenKind;
use crate::errors::DashboardResult;
use crate::logger;
use crate::services::http_fetch_client::HttpFetchClient;
use crate::services::screen_composer::ScreenComposer;
use crate::structs::config::config::Config;
use crate::structs::config::display_config::DisplayConfig;
use crate::ui::chart_renderer::RenderOptions;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> DashboardResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate { config } => self.validate_command(config.as_deref()),
            Commands::Tabs { config } => self.tabs_command(config.as_deref()),
            Commands::Show { tab, config } => self.show_command(tab, config.as_deref()).await,
        };

        if let Err(e) = &result {
            log::error!("❌ {}", e.user_message());
        }

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> DashboardResult<()> {
        logger::init(DEFAULT_LOG_LEVEL);
        log::info!("🚀 Initializing usage-dashboard configuration...");

        let path = ConfigManager::create_sample_config(None)?;
        log::info!("✅ Configuration file created at {}", path.display());
        log::info!("🔧 Run 'usage-dashboard validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self, config_path: Option<&Path>) -> DashboardResult<()> {
        let config = Self::load_config(config_path)?;
        ConfigManager::validate_config(&config)?;
        log::info!("✅ Configuration is valid");
        Ok(())
    }

    fn tabs_command(&self, config_path: Option<&Path>) -> DashboardResult<()> {
        let config = Self::load_config(config_path)?;
        for screen in ScreenKind::ALL {
            println!("{:<10} {:<28} {}", screen.tab_label(), screen.title(), config.endpoints.url_for(screen));
        }
        Ok(())
    }

    async fn show_command(&self, tab: Option<ScreenKind>, config_path: Option<&Path>) -> DashboardResult<()> {
        let config = Self::load_config(config_path)?;
        ConfigManager::validate_config(&config)?;

        let client = Arc::new(HttpFetchClient::new());
        let mut composer = ScreenComposer::new(client, &config.endpoints);

        let screens: Vec<ScreenKind> = match tab {
            Some(screen) => vec![screen],
            None => ScreenKind::ALL.to_vec(),
        };

        match tab {
            Some(screen) => {
                composer.select_tab(screen);
            }
            None => {
                composer.mount_all();
                composer.select_tab(ScreenKind::Daily);
            }
        }

        log::info!("📡 Fetching {} tab(s)...", screens.len());
        composer.settle_all().await;

        let options = Self::render_options(&config.display);
        print!("{}", Self::render_report(&composer, &screens, &options));

        Ok(())
    }

    /// Tab bar followed by each requested tab. A failed tab shows its empty
    /// chart; the failure itself only goes to the log.
    fn render_report(composer: &ScreenComposer, screens: &[ScreenKind], options: &RenderOptions) -> String {
        let mut report = format!("{}\n\n", composer.render_tab_bar(options));
        for screen in screens {
            report.push_str(&composer.render_tab(*screen, options));
            report.push('\n');
        }
        report
    }

    fn load_config(config_path: Option<&Path>) -> DashboardResult<Config> {
        match ConfigManager::load_with_source(config_path) {
            Ok((config, source)) => {
                logger::init(&config.logging.level);
                match &source {
                    ConfigSource::File(path) => log::info!("📋 Loaded config from {}", path.display()),
                    ConfigSource::Defaults(_) => log::info!("📋 Using {}", source),
                }
                Ok(config)
            }
            Err(e) => {
                logger::init(DEFAULT_LOG_LEVEL);
                log::error!("💡 Run 'usage-dashboard init' to create a configuration file.");
                Err(e)
            }
        }
    }

    fn render_options(display: &DisplayConfig) -> RenderOptions {
        let columns = terminal_size().map_or(display.fallback_width, |(Width(w), _)| w);
        let width = columns.saturating_sub(display.width_margin);
        RenderOptions::new(usize::from(width), display.chart_height).with_color(terminal_size().is_some())
    }
}
