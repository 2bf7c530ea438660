//! DilSe Quotes command line
//!
//! Browse quotes by category and language, keep favorites, and render
//! quotes onto shareable image cards.

use clap::{Parser, Subcommand, ValueEnum};
use dilse_cli::OutputFormat;
use dilse_store::Feed;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod app;
mod commands;

use app::App;
use commands::{categories, favorites, prefs, quotes, render};

/// Multilingual quotes, favorites and quote cards
#[derive(Parser)]
#[command(name = "dilse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to dilse.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Quote database file
    #[arg(long, global = true, env = "DILSE_DB")]
    db: Option<PathBuf>,

    /// Preferences file
    #[arg(long, global = true, env = "DILSE_PREFS")]
    prefs: Option<PathBuf>,

    /// Language code (en, hi, gu); defaults to the saved preference
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Do not contact the remote source
    #[arg(long, global = true)]
    offline: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print collected counters and timings to stderr when done
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List quote categories
    Categories,

    /// Show the quotes of one category, refreshed from the remote source
    #[command(visible_alias = "sync")]
    List {
        /// Category key (e.g. love, sad, motivation)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Remote document to sync from
        #[arg(long, value_enum, default_value_t = FeedArg::All)]
        feed: FeedArg,
    },

    /// Show favorite quotes
    Favorites,

    /// Toggle the favorite flag of a quote
    Favorite {
        /// Quote id
        id: i64,
    },

    /// Show every detail of a quote
    Show {
        /// Quote id
        id: i64,
    },

    /// Print a quote as shareable text
    Share {
        /// Quote id
        id: i64,
    },

    /// Show a random quote
    Random {
        /// Ask the remote source instead of the local store
        #[arg(long)]
        remote: bool,
    },

    /// Show the quote of the day
    Today,

    /// Fetch every remote quote, keeping favorites
    Refresh,

    /// Delete a quote from the local store
    Remove {
        /// Quote id
        id: i64,
    },

    /// Insert the bundled sample quotes into an empty store
    Seed,

    /// Render a quote card image
    Render(render::RenderArgs),

    /// Show or change preferences
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },
}

/// Remote document read by `list`
#[derive(Clone, Copy, ValueEnum)]
enum FeedArg {
    /// quotes.json, every quote
    All,
    /// categories/<key>.json, one category
    Category,
}

impl From<FeedArg> for Feed {
    fn from(arg: FeedArg) -> Self {
        match arg {
            FeedArg::All => Feed::All,
            FeedArg::Category => Feed::Category,
        }
    }
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print current preferences
    Show,

    /// Select the app language
    Language {
        /// Language code (en, hi, gu)
        code: String,
    },

    /// Select the theme mode
    Theme {
        /// light, dark or system
        mode: String,
    },

    /// Set a profile field
    Profile {
        /// Field name
        key: String,
        /// Field value
        value: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;
    let show_metrics = cli.metrics;

    let result = run(cli).await;

    if show_metrics {
        let snapshot = dilse_telemetry::metrics().export_json();
        eprintln!("{}", serde_json::to_string_pretty(&snapshot).unwrap_or_default());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let core = e.downcast_ref::<dilse_core::Error>();
            match (format, core) {
                (OutputFormat::Json, Some(err)) => {
                    let report = serde_json::to_string_pretty(&err.to_report())
                        .unwrap_or_else(|_| err.to_string());
                    eprintln!("{report}");
                }
                _ => eprintln!("{} {}", "Error:".red().bold(), e),
            }
            let code = core.map_or(dilse_core::error::exit_codes::FAILURE, dilse_core::Error::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let app = App::open(&cli)?;
    let format = cli.format;

    let result = match cli.command {
        Commands::Categories => categories::run(&app, format),
        Commands::List { category, feed } => {
            quotes::list(&app, category.as_deref(), feed.into(), format).await
        }
        Commands::Favorites => favorites::list(&app, format),
        Commands::Favorite { id } => favorites::toggle(&app, id, format),
        Commands::Show { id } => quotes::show(&app, id, format),
        Commands::Share { id } => quotes::share(&app, id),
        Commands::Random { remote } => quotes::random(&app, remote, format).await,
        Commands::Today => quotes::today(&app, format).await,
        Commands::Refresh => quotes::refresh(&app, format).await,
        Commands::Remove { id } => quotes::remove(&app, id),
        Commands::Seed => quotes::seed(&app),
        Commands::Render(args) => render::run(&app, &args, format),
        Commands::Prefs { action } => match action.unwrap_or(PrefsAction::Show) {
            PrefsAction::Show => prefs::show(&app, format),
            PrefsAction::Language { code } => prefs::set_language(&app, &code),
            PrefsAction::Theme { mode } => prefs::set_theme(&app, &mode),
            PrefsAction::Profile { key, value } => prefs::set_profile(&app, &key, &value),
        },
    };

    result.map_err(anyhow::Error::from)
}
