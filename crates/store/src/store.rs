//! SQLite-backed quote store.

use crate::error::{StoreError, StoreResult};
use crate::watch::{ScopeSubscription, CHANNEL_CAPACITY};
use dilse_core::{Quote, Scope};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;

const COLUMNS: &str =
    "id, text, author_name, category, language, source, likes, date_added, emoji, is_favorite";

/// Thread-safe handle to the quote table.
///
/// Cloning is cheap; all clones share one connection and one change channel.
#[derive(Clone)]
pub struct QuoteStore {
    conn: Arc<Mutex<Connection>>,
    changes: broadcast::Sender<Scope>,
}

impl QuoteStore {
    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "Opened quote database");
        Self::with_connection(conn)
    }

    /// Create an in-memory store for testing
    pub fn in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        let (changes, _) = broadcast::channel(CHANNEL_CAPACITY);
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            changes,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS quotes (
                id INTEGER PRIMARY KEY,
                text TEXT NOT NULL,
                author_name TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL,
                category_key TEXT NOT NULL,
                language TEXT NOT NULL,
                source TEXT,
                likes INTEGER NOT NULL DEFAULT 0,
                date_added INTEGER NOT NULL,
                emoji TEXT NOT NULL DEFAULT '',
                is_favorite INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_quotes_scope ON quotes(category_key, language);
            CREATE INDEX IF NOT EXISTS idx_quotes_favorite ON quotes(is_favorite);
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    fn notify<'a>(&self, scopes: impl IntoIterator<Item = &'a Scope>) {
        for scope in scopes {
            // No receivers is not an error
            let _ = self.changes.send(scope.clone());
        }
    }

    /// Watch writes to one scope
    #[must_use]
    pub fn subscribe(&self, scope: &Scope) -> ScopeSubscription {
        ScopeSubscription::new(Some(scope.clone()), self.changes.subscribe())
    }

    /// Watch writes to any scope
    #[must_use]
    pub fn subscribe_all(&self) -> ScopeSubscription {
        ScopeSubscription::new(None, self.changes.subscribe())
    }

    /// Number of stored quotes
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Insert or replace quotes by id, in one transaction
    pub fn upsert_all(&self, quotes: &[Quote]) -> StoreResult<()> {
        if quotes.is_empty() {
            return Ok(());
        }

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO quotes
                    (id, text, author_name, category, category_key, language, source,
                     likes, date_added, emoji, is_favorite)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for q in quotes {
                stmt.execute(params![
                    q.id,
                    q.text,
                    q.author_name,
                    q.category,
                    q.category_key(),
                    q.language,
                    q.source,
                    q.likes,
                    q.date_added,
                    q.emoji,
                    q.is_favorite,
                ])?;
            }
        }
        tx.commit()?;
        drop(conn);

        let scopes: BTreeSet<(String, String)> = quotes
            .iter()
            .map(|q| (q.category_key(), q.language.clone()))
            .collect();
        let scopes: Vec<Scope> = scopes.iter().map(|(c, l)| Scope::new(c, l)).collect();
        tracing::debug!(count = quotes.len(), scopes = scopes.len(), "Upserted quotes");
        self.notify(&scopes);
        Ok(())
    }

    /// Replace an existing quote
    pub fn update(&self, quote: &Quote) -> StoreResult<()> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE quotes SET text = ?2, author_name = ?3, category = ?4, category_key = ?5,
                language = ?6, source = ?7, likes = ?8, date_added = ?9, emoji = ?10,
                is_favorite = ?11
             WHERE id = ?1",
            params![
                quote.id,
                quote.text,
                quote.author_name,
                quote.category,
                quote.category_key(),
                quote.language,
                quote.source,
                quote.likes,
                quote.date_added,
                quote.emoji,
                quote.is_favorite,
            ],
        )?;
        drop(conn);

        if changed == 0 {
            return Err(StoreError::NotFound(format!("Quote {}", quote.id)));
        }
        self.notify([&quote.scope()]);
        Ok(())
    }

    /// Flip the favorite flag of one quote and return the updated record
    pub fn toggle_favorite(&self, id: i64) -> StoreResult<Quote> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE quotes SET is_favorite = NOT is_favorite WHERE id = ?1",
            params![id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(format!("Quote {id}")));
        }
        let quote = get_row(&conn, id)?;
        drop(conn);

        self.notify([&quote.scope()]);
        Ok(quote)
    }

    /// Quote by id
    pub fn get(&self, id: i64) -> StoreResult<Quote> {
        let conn = self.lock()?;
        get_row(&conn, id)
    }

    /// Quote by id, `None` when absent
    pub fn find(&self, id: i64) -> StoreResult<Option<Quote>> {
        let conn = self.lock()?;
        let quote = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM quotes WHERE id = ?1"),
                params![id],
                row_to_quote,
            )
            .optional()?;
        Ok(quote)
    }

    /// Quotes of one scope, newest first
    pub fn by_scope(&self, scope: &Scope) -> StoreResult<Vec<Quote>> {
        self.query(
            &format!(
                "SELECT {COLUMNS} FROM quotes WHERE category_key = ?1 AND language = ?2
                 ORDER BY date_added DESC, id"
            ),
            params![scope.category(), scope.language()],
        )
    }

    /// Favorite quotes across all scopes
    pub fn favorites(&self) -> StoreResult<Vec<Quote>> {
        self.query(
            &format!("SELECT {COLUMNS} FROM quotes WHERE is_favorite = 1 ORDER BY date_added DESC, id"),
            [],
        )
    }

    /// Number of favorite quotes
    pub fn favorites_count(&self) -> StoreResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM quotes WHERE is_favorite = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Quotes of one language
    pub fn by_language(&self, language: &str) -> StoreResult<Vec<Quote>> {
        self.query(
            &format!("SELECT {COLUMNS} FROM quotes WHERE language = ?1 ORDER BY id"),
            params![language],
        )
    }

    /// A random quote of one language
    pub fn random_by_language(&self, language: &str) -> StoreResult<Option<Quote>> {
        let conn = self.lock()?;
        let quote = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM quotes WHERE language = ?1 ORDER BY RANDOM() LIMIT 1"),
                params![language],
                row_to_quote,
            )
            .optional()?;
        Ok(quote)
    }

    /// Every stored quote
    pub fn all(&self) -> StoreResult<Vec<Quote>> {
        self.query(&format!("SELECT {COLUMNS} FROM quotes ORDER BY id"), [])
    }

    /// Delete a quote. Returns whether a row was removed.
    pub fn remove(&self, id: i64) -> StoreResult<bool> {
        let conn = self.lock()?;
        let existing = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM quotes WHERE id = ?1"),
                params![id],
                row_to_quote,
            )
            .optional()?;
        let Some(quote) = existing else {
            return Ok(false);
        };
        conn.execute("DELETE FROM quotes WHERE id = ?1", params![id])?;
        drop(conn);

        self.notify([&quote.scope()]);
        Ok(true)
    }

    fn query<P: rusqlite::Params>(&self, sql: &str, params: P) -> StoreResult<Vec<Quote>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, row_to_quote)?;
        let quotes = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(quotes)
    }
}

fn get_row(conn: &Connection, id: i64) -> StoreResult<Quote> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM quotes WHERE id = ?1"),
        params![id],
        row_to_quote,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound(format!("Quote {id}")),
        _ => StoreError::Database(e),
    })
}

fn row_to_quote(row: &Row) -> rusqlite::Result<Quote> {
    Ok(Quote {
        id: row.get(0)?,
        text: row.get(1)?,
        author_name: row.get(2)?,
        category: row.get(3)?,
        language: row.get(4)?,
        source: row.get(5)?,
        likes: row.get(6)?,
        date_added: row.get(7)?,
        emoji: row.get(8)?,
        is_favorite: row.get(9)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn quote(id: i64, category: &str, language: &str) -> Quote {
        Quote::new(id, format!("Quote number {id}"), category, language)
    }

    #[test]
    fn test_upsert_and_get() {
        let store = QuoteStore::in_memory().unwrap();
        store
            .upsert_all(&[quote(1, "love", "en").with_author("Rumi"), quote(2, "sad", "hi")])
            .unwrap();

        assert_eq!(store.count().unwrap(), 2);
        let q = store.get(1).unwrap();
        assert_eq!(q.author_name, "Rumi");
        assert_eq!(q.emoji, "❤️");
        assert!(matches!(store.get(99), Err(StoreError::NotFound(_))));
        assert!(store.find(99).unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let store = QuoteStore::in_memory().unwrap();
        store.upsert_all(&[quote(1, "love", "en")]).unwrap();
        store
            .upsert_all(&[Quote::new(1, "Replaced", "love", "en")])
            .unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.get(1).unwrap().text, "Replaced");
    }

    #[test]
    fn test_by_scope_normalizes_category() {
        let store = QuoteStore::in_memory().unwrap();
        store
            .upsert_all(&[
                quote(1, "Best Friend", "en"),
                quote(2, "best_friend", "en"),
                quote(3, "bestfriend", "hi"),
                quote(4, "love", "en"),
            ])
            .unwrap();

        let ids: Vec<i64> = store
            .by_scope(&Scope::new("BestFriend", "en"))
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1) && ids.contains(&2));
    }

    #[test]
    fn test_toggle_favorite_twice_is_identity() {
        let store = QuoteStore::in_memory().unwrap();
        store.upsert_all(&[quote(5, "life", "gu")]).unwrap();

        assert!(store.toggle_favorite(5).unwrap().is_favorite);
        assert_eq!(store.favorites_count().unwrap(), 1);
        assert!(!store.toggle_favorite(5).unwrap().is_favorite);
        assert_eq!(store.favorites_count().unwrap(), 0);
        assert!(matches!(store.toggle_favorite(6), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let store = QuoteStore::in_memory().unwrap();
        let err = store.update(&quote(1, "love", "en")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_favorites_and_language_queries() {
        let store = QuoteStore::in_memory().unwrap();
        store
            .upsert_all(&[
                quote(1, "love", "en").with_favorite(true),
                quote(2, "love", "hi"),
                quote(3, "sad", "hi").with_favorite(true),
            ])
            .unwrap();

        assert_eq!(store.favorites().unwrap().len(), 2);
        assert_eq!(store.by_language("hi").unwrap().len(), 2);
        assert_eq!(store.random_by_language("en").unwrap().map(|q| q.id), Some(1));
        assert!(store.random_by_language("gu").unwrap().is_none());
        assert_eq!(store.all().unwrap().len(), 3);
    }

    #[test]
    fn test_remove() {
        let store = QuoteStore::in_memory().unwrap();
        store.upsert_all(&[quote(1, "love", "en")]).unwrap();

        assert!(store.remove(1).unwrap());
        assert!(!store.remove(1).unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_open_persists_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("quotes.sqlite");
        {
            let store = QuoteStore::open(&path).unwrap();
            store.upsert_all(&[quote(1, "daily", "en")]).unwrap();
        }

        let reopened = QuoteStore::open(&path).unwrap();
        assert_eq!(reopened.get(1).unwrap().category, "daily");
    }

    #[tokio::test]
    async fn test_subscription_sees_scope_writes() {
        let store = QuoteStore::in_memory().unwrap();
        let love = Scope::new("love", "en");
        let mut sub = store.subscribe(&love);

        store.upsert_all(&[quote(1, "sad", "en")]).unwrap();
        store.upsert_all(&[quote(2, "Love", "en")]).unwrap();

        let changed = tokio::time::timeout(Duration::from_secs(1), sub.changed())
            .await
            .unwrap();
        assert!(changed);
        assert_eq!(sub.scope(), Some(&love));
    }

    #[tokio::test]
    async fn test_subscription_ignores_other_scopes() {
        let store = QuoteStore::in_memory().unwrap();
        let mut sub = store.subscribe(&Scope::new("love", "en"));

        store.upsert_all(&[quote(1, "sad", "en")]).unwrap();

        let waited = tokio::time::timeout(Duration::from_millis(50), sub.changed()).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn test_subscription_ends_when_store_dropped() {
        let store = QuoteStore::in_memory().unwrap();
        let mut sub = store.subscribe_all();
        store.toggle_favorite(1).unwrap_err();
        drop(store);

        assert!(!sub.changed().await);
    }
}
