//! Favorite-preserving sync between the remote source and the local store.
//!
//! The remote source is authoritative for quote content; the local store is
//! authoritative for the favorite flag. A sync replaces the content of every
//! fetched record while keeping whatever flag the user last set for its id.

use crate::error::StoreResult;
use crate::seed;
use crate::store::QuoteStore;
use async_trait::async_trait;
use dilse_api_client::{ApiError, ApiResult, QuoteClient};
use dilse_core::{Quote, Scope};
use dilse_telemetry::metrics;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Read-only source of quotes.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Every quote the source knows
    async fn fetch_all(&self) -> ApiResult<Vec<Quote>>;

    /// Quotes published under one category, in every language
    async fn fetch_category(&self, category: &str) -> ApiResult<Vec<Quote>>;

    /// The quote of the day
    async fn quote_of_the_day(&self) -> ApiResult<Quote>;
}

#[async_trait]
impl QuoteSource for QuoteClient {
    async fn fetch_all(&self) -> ApiResult<Vec<Quote>> {
        self.quotes().all().await
    }

    async fn fetch_category(&self, category: &str) -> ApiResult<Vec<Quote>> {
        self.quotes().by_category(category).await
    }

    async fn quote_of_the_day(&self) -> ApiResult<Quote> {
        self.quotes().today().await
    }
}

/// Remote document a scope sync reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feed {
    /// The full collection, filtered down to the scope
    #[default]
    All,
    /// The category's own file, filtered by language
    Category,
}

/// Why local rows were served instead of fresh remote ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Caller reported no connectivity
    Offline,
    /// Remote fetch succeeded but nothing matched the scope
    EmptyRemote,
    /// Remote reported the resource as missing
    NotFound,
    /// Any other fetch failure
    FetchFailed(String),
}

impl FallbackReason {
    fn from_error(err: &ApiError) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else {
            Self::FetchFailed(err.to_string())
        }
    }

    /// Label used in metric names
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::EmptyRemote => "empty",
            Self::NotFound => "not_found",
            Self::FetchFailed(_) => "error",
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offline => f.write_str("offline"),
            Self::EmptyRemote => f.write_str("no remote quotes for this scope"),
            Self::NotFound => f.write_str("not found on the remote source"),
            Self::FetchFailed(reason) => write!(f, "fetch failed: {reason}"),
        }
    }
}

/// Where returned quotes came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Freshly fetched and merged
    Remote,
    /// Local rows, for the given reason
    LocalFallback(FallbackReason),
}

impl Origin {
    /// Whether the data came from the remote source
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote)
    }
}

/// Quotes of one scope and their origin
#[derive(Debug, Clone)]
pub struct ScopeQuotes {
    /// The quotes, each carrying the current favorite flag
    pub quotes: Vec<Quote>,
    /// Where they came from
    pub origin: Origin,
}

/// A quote of the day and its origin
#[derive(Debug, Clone)]
pub struct DailyQuote {
    /// The quote, labelled with the requested language
    pub quote: Quote,
    /// Where it came from
    pub origin: Origin,
}

/// Result of a bulk refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Number of quotes written
    Refreshed(usize),
    /// Nothing written
    Skipped(FallbackReason),
}

/// Keep the quotes of one scope.
#[must_use]
pub fn filter_scope(quotes: Vec<Quote>, scope: &Scope) -> Vec<Quote> {
    quotes.into_iter().filter(|q| scope.contains(q)).collect()
}

/// Replace each remote record's favorite flag with the locally known one.
///
/// Ids unknown locally come out as not favorite, whatever the remote says.
#[must_use]
pub fn merge_favorites(remote: Vec<Quote>, local: &[Quote]) -> Vec<Quote> {
    let favorites: HashMap<i64, bool> = local.iter().map(|q| (q.id, q.is_favorite)).collect();

    remote
        .into_iter()
        .map(|mut quote| {
            quote.is_favorite = favorites.get(&quote.id).copied().unwrap_or(false);
            quote
        })
        .collect()
}

/// Quote operations over an injected store and source.
#[derive(Clone)]
pub struct QuoteRepository {
    store: QuoteStore,
    source: Arc<dyn QuoteSource>,
}

impl QuoteRepository {
    /// Create a repository
    pub fn new(store: QuoteStore, source: Arc<dyn QuoteSource>) -> Self {
        Self { store, source }
    }

    /// The underlying store
    #[must_use]
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Quotes of a scope, refreshed from the full collection when `connected`.
    ///
    /// Fetch failures never surface here: they are logged and the local rows
    /// of the scope are returned instead. Store failures are returned.
    ///
    /// Favorite flags are carried over from the scope's own local rows only.
    /// A quote that moved to another category or language arrives here as
    /// not favorite; [`QuoteRepository::refresh_all`] merges across every
    /// stored row instead.
    pub async fn quotes_for_scope(&self, scope: &Scope, connected: bool) -> StoreResult<ScopeQuotes> {
        self.quotes_for_scope_from(scope, Feed::All, connected).await
    }

    /// Same as [`QuoteRepository::quotes_for_scope`], reading `feed`.
    #[instrument(skip(self, scope), fields(scope = %scope))]
    pub async fn quotes_for_scope_from(
        &self,
        scope: &Scope,
        feed: Feed,
        connected: bool,
    ) -> StoreResult<ScopeQuotes> {
        let reason = if connected {
            let fetched = match feed {
                Feed::All => self.source.fetch_all().await,
                Feed::Category => self.source.fetch_category(scope.category()).await,
            };
            match fetched {
                Ok(all) => {
                    let fetched = all.len();
                    let remote = filter_scope(all, scope);
                    debug!(fetched, matched = remote.len(), "Fetched remote quotes");

                    if remote.is_empty() {
                        FallbackReason::EmptyRemote
                    } else {
                        let local = self.store.by_scope(scope)?;
                        let merged = merge_favorites(remote, &local);
                        self.store.upsert_all(&merged)?;

                        metrics().increment("sync.remote");
                        info!(count = merged.len(), "Scope synced from remote");
                        return Ok(ScopeQuotes {
                            quotes: merged,
                            origin: Origin::Remote,
                        });
                    }
                }
                Err(e) => {
                    let reason = FallbackReason::from_error(&e);
                    if reason == FallbackReason::NotFound {
                        warn!(error = %e, "Remote quotes not found, using local data");
                    } else {
                        error!(error = %e, kind = e.kind(), "Remote fetch failed, using local data");
                    }
                    reason
                }
            }
        } else {
            warn!("No network available, using local data");
            FallbackReason::Offline
        };

        let quotes = self.store.by_scope(scope)?;
        if quotes.is_empty() {
            warn!(%reason, "No local quotes for scope");
        }
        metrics().increment(&format!("sync.fallback.{}", reason.label()));

        Ok(ScopeQuotes {
            quotes,
            origin: Origin::LocalFallback(reason),
        })
    }

    /// Flip the favorite flag of one quote
    pub fn toggle_favorite(&self, id: i64) -> StoreResult<Quote> {
        let quote = self.store.toggle_favorite(id)?;
        metrics().increment("favorites.toggled");
        debug!(id, is_favorite = quote.is_favorite, "Toggled favorite");
        Ok(quote)
    }

    /// Flip the favorite flag and reload the scope the caller is showing
    pub async fn toggle_favorite_in_scope(
        &self,
        id: i64,
        scope: &Scope,
        connected: bool,
    ) -> StoreResult<(Quote, ScopeQuotes)> {
        let quote = self.toggle_favorite(id)?;
        let reloaded = self.quotes_for_scope(scope, connected).await?;
        Ok((quote, reloaded))
    }

    /// Favorite quotes across every scope
    pub fn favorites(&self) -> StoreResult<Vec<Quote>> {
        self.store.favorites()
    }

    /// Number of favorite quotes
    pub fn favorites_count(&self) -> StoreResult<usize> {
        self.store.favorites_count()
    }

    /// Fetch every remote quote and store it, keeping all favorite flags
    #[instrument(skip(self))]
    pub async fn refresh_all(&self, connected: bool) -> StoreResult<RefreshOutcome> {
        if !connected {
            return Ok(RefreshOutcome::Skipped(FallbackReason::Offline));
        }

        let remote = match self.source.fetch_all().await {
            Ok(remote) => remote,
            Err(e) => {
                error!(error = %e, "Bulk refresh failed");
                return Ok(RefreshOutcome::Skipped(FallbackReason::from_error(&e)));
            }
        };
        if remote.is_empty() {
            return Ok(RefreshOutcome::Skipped(FallbackReason::EmptyRemote));
        }

        let local = self.store.all()?;
        let merged = merge_favorites(remote, &local);
        self.store.upsert_all(&merged)?;
        info!(count = merged.len(), "Refreshed all quotes");
        Ok(RefreshOutcome::Refreshed(merged.len()))
    }

    /// A random stored quote of one language
    pub fn random_quote(&self, language: &str) -> StoreResult<Option<Quote>> {
        self.store.random_by_language(language)
    }

    /// Quote of the day, labelled with `language`.
    ///
    /// Uses the source when `connected`, otherwise (or when that fails) a
    /// random local quote of the language.
    #[instrument(skip(self))]
    pub async fn quote_of_the_day(
        &self,
        language: &str,
        connected: bool,
    ) -> StoreResult<Option<DailyQuote>> {
        let reason = if connected {
            match self.source.quote_of_the_day().await {
                Ok(mut quote) => {
                    quote.language = language.to_string();
                    return Ok(Some(DailyQuote {
                        quote,
                        origin: Origin::Remote,
                    }));
                }
                Err(e) => {
                    warn!(error = %e, "Quote of the day unavailable, using a local quote");
                    FallbackReason::from_error(&e)
                }
            }
        } else {
            FallbackReason::Offline
        };

        let daily = self.store.random_by_language(language)?.map(|mut quote| {
            quote.language = language.to_string();
            DailyQuote {
                quote,
                origin: Origin::LocalFallback(reason),
            }
        });
        Ok(daily)
    }

    /// Insert the bundled sample quotes when the store is empty
    pub fn seed_if_empty(&self) -> StoreResult<usize> {
        seed::seed_if_empty(&self.store)
    }

    /// A stored quote by id
    pub fn get(&self, id: i64) -> StoreResult<Quote> {
        self.store.get(id)
    }

    /// Delete a quote. Returns whether it existed.
    pub fn remove(&self, id: i64) -> StoreResult<bool> {
        let removed = self.store.remove(id)?;
        if removed {
            info!(id, "Removed quote");
        }
        Ok(removed)
    }
}
