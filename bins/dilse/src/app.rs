//! Shared command context: configuration, logging, store and client.

use crate::Cli;
use dilse_api_client::{ClientConfig, QuoteClient};
use dilse_core::config::Config;
use dilse_core::preferences::PreferencesStore;
use dilse_core::{Error, ResultExt, Scope};
use dilse_store::{QuoteRepository, QuoteStore};
use dilse_telemetry::{TelemetryConfig, WorkerGuard};
use std::sync::Arc;

/// Everything a command needs
pub struct App {
    pub config: Config,
    pub repo: QuoteRepository,
    pub client: Arc<QuoteClient>,
    pub prefs: PreferencesStore,
    /// Language chosen on the command line or in preferences
    pub language: String,
    /// False when `--offline` was given
    pub connected: bool,
    _log_guard: Option<WorkerGuard>,
}

impl App {
    /// Load configuration, start logging and open the store
    pub fn open(cli: &Cli) -> anyhow::Result<Self> {
        let config =
            Config::load(cli.config.as_deref()).context("While loading configuration")?;
        let schema = &config.schema;

        let level = if cli.verbose { "debug" } else { schema.telemetry.log_level.as_str() };
        let log_guard = dilse_telemetry::init_with_config(
            TelemetryConfig::default()
                .with_log_level(level)
                .with_log_file(schema.telemetry.log_file.clone()),
        )?;

        let db_path = cli.db.clone().unwrap_or_else(|| schema.store.database_path.clone());
        let store = QuoteStore::open(&db_path)
            .map_err(Error::from)
            .with_suggestion("Pass --db with a writable database path")?;

        let client_config = ClientConfig::from_schema(&schema.api)
            .with_env_overrides()
            .map_err(Error::from)?;
        let client = Arc::new(QuoteClient::with_config(client_config).map_err(Error::from)?);
        let repo = QuoteRepository::new(store, client.clone());

        let prefs = cli
            .prefs
            .clone()
            .map_or_else(PreferencesStore::default_location, PreferencesStore::new);
        let language = match &cli.lang {
            Some(lang) => lang.trim().to_lowercase(),
            None if prefs.path().exists() => {
                prefs.load().context("While reading the saved language")?.app_language
            }
            None => schema.general.default_language.clone(),
        };

        tracing::debug!(
            db = %db_path.display(),
            config = ?config.path,
            %language,
            "Application context ready"
        );

        Ok(Self {
            config,
            repo,
            client,
            prefs,
            language,
            connected: !cli.offline,
            _log_guard: log_guard,
        })
    }

    /// Seed the sample quotes on first use, when enabled
    pub fn ensure_seeded(&self) -> dilse_core::Result<()> {
        if self.config.schema.store.seed_on_empty {
            let inserted = self.repo.seed_if_empty()?;
            if inserted > 0 {
                tracing::info!(inserted, "Seeded empty store");
            }
        }
        Ok(())
    }

    /// Scope of a category in the selected language.
    ///
    /// A missing category is reported as a missing argument.
    pub fn scope(&self, category: Option<&str>) -> dilse_core::Result<Scope> {
        match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(category) => Ok(Scope::new(category, &self.language)),
            None => Err(Error::missing_argument("--category")
                .with_suggestion("Run `dilse categories` to see the available keys")),
        }
    }
}
