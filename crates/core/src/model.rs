//! Quote records and the scope they are partitioned by.

use crate::category::{self, normalize_category_key};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author shown when a quote has no attribution.
pub const ANONYMOUS: &str = "Anonymous";

/// A single quote record.
///
/// The serialized form matches the remote JSON schema (`camelCase` keys,
/// `author` accepted as an alias of `authorName`, optional metadata).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Stable identifier, unique within the store
    pub id: i64,
    /// Quote body
    pub text: String,
    /// Attribution, may be empty
    #[serde(default, alias = "author")]
    pub author_name: String,
    /// Category key
    pub category: String,
    /// Language code (`en`, `hi`, `gu`, ...)
    pub language: String,
    /// Optional source such as a book or film
    #[serde(default)]
    pub source: Option<String>,
    /// Like counter
    #[serde(default)]
    pub likes: i64,
    /// Creation time in epoch milliseconds
    #[serde(default = "now_millis")]
    pub date_added: i64,
    /// Emoji of the category
    #[serde(default)]
    pub emoji: String,
    /// Whether the user marked this quote as a favorite
    #[serde(default)]
    pub is_favorite: bool,
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl Quote {
    /// Create a quote with default metadata.
    ///
    /// The emoji is taken from the category table when the key is known.
    pub fn new(
        id: i64,
        text: impl Into<String>,
        category: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        let category = category.into();
        let emoji = category::find(&category)
            .map(|c| c.emoji.to_string())
            .unwrap_or_default();

        Self {
            id,
            text: text.into(),
            author_name: String::new(),
            category,
            language: language.into(),
            source: None,
            likes: 0,
            date_added: now_millis(),
            emoji,
            is_favorite: false,
        }
    }

    /// Builder-style method to set the author
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author_name = author.into();
        self
    }

    /// Builder-style method to set the favorite flag
    #[must_use]
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Author for display, `Anonymous` when empty
    #[must_use]
    pub fn display_author(&self) -> &str {
        let author = self.author_name.trim();
        if author.is_empty() { ANONYMOUS } else { author }
    }

    /// Normalized category key of this quote
    #[must_use]
    pub fn category_key(&self) -> String {
        normalize_category_key(&self.category)
    }

    /// Scope this quote belongs to
    #[must_use]
    pub fn scope(&self) -> Scope {
        Scope::new(&self.category, &self.language)
    }

    /// Plain-text form used when sharing a quote as text
    #[must_use]
    pub fn share_text(&self) -> String {
        format!("\"{}\"\n- {}", self.text, self.display_author())
    }
}

/// A `(category, language)` partition of the quote collection.
///
/// The category is stored in normalized form so that `"Love"`, `"love "` and
/// `"lo_ve"` all address the same scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    category: String,
    language: String,
}

impl Scope {
    /// Create a scope, normalizing the category key
    pub fn new(category: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Self {
            category: normalize_category_key(category.as_ref()),
            language: language.as_ref().trim().to_string(),
        }
    }

    /// Normalized category key
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Language code
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether a quote falls inside this scope
    #[must_use]
    pub fn contains(&self, quote: &Quote) -> bool {
        quote.language == self.language && quote.category_key() == self.category
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_remote_quote() {
        let json = r#"{
            "id": 7,
            "text": "Dil se dil tak",
            "author": "Ghalib",
            "category": "love",
            "language": "hi",
            "likes": 12
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.id, 7);
        assert_eq!(quote.author_name, "Ghalib");
        assert_eq!(quote.likes, 12);
        assert!(!quote.is_favorite);
        assert!(quote.source.is_none());
        assert!(quote.date_added > 0);
    }

    #[test]
    fn test_deserialize_author_name_key() {
        let json = r#"{"id":1,"text":"A","authorName":"Rumi","category":"life","language":"en","isFavorite":true}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.author_name, "Rumi");
        assert!(quote.is_favorite);
    }

    #[test]
    fn test_display_author_defaults_to_anonymous() {
        let quote = Quote::new(1, "text", "sad", "en");
        assert_eq!(quote.display_author(), "Anonymous");

        let quote = quote.with_author("  ");
        assert_eq!(quote.display_author(), "Anonymous");

        let quote = quote.with_author("Kabir");
        assert_eq!(quote.display_author(), "Kabir");
    }

    #[test]
    fn test_new_uses_category_emoji() {
        assert_eq!(Quote::new(1, "t", "love", "en").emoji, "❤️");
        assert_eq!(Quote::new(1, "t", "unknown", "en").emoji, "");
    }

    #[test]
    fn test_scope_normalizes_category() {
        let scope = Scope::new(" Best_Friend ", "en");
        assert_eq!(scope.category(), "bestfriend");
        assert_eq!(scope.to_string(), "bestfriend/en");
    }

    #[test]
    fn test_scope_contains() {
        let scope = Scope::new("love", "en");
        assert!(scope.contains(&Quote::new(1, "t", "Love", "en")));
        assert!(!scope.contains(&Quote::new(2, "t", "love", "hi")));
        assert!(!scope.contains(&Quote::new(3, "t", "sad", "en")));
    }

    #[test]
    fn test_share_text() {
        let quote = Quote::new(1, "Be kind", "life", "en").with_author("Anon E. Mouse");
        assert_eq!(quote.share_text(), "\"Be kind\"\n- Anon E. Mouse");
    }
}
