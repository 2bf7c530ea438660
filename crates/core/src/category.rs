//! The fixed category table.

use serde::Serialize;

/// A quote category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Lowercase key, matches the remote category file names
    pub key: &'static str,
    /// English display name
    pub name: &'static str,
    /// Emoji shown next to the name
    pub emoji: &'static str,
}

/// All known categories, in display order.
pub const CATEGORIES: [Category; 11] = [
    Category { key: "friendship", name: "Friendship", emoji: "🤝" },
    Category { key: "love", name: "Love", emoji: "❤️" },
    Category { key: "sad", name: "Sad", emoji: "😢" },
    Category { key: "motivation", name: "Motivation", emoji: "💪" },
    Category { key: "attitude", name: "Attitude", emoji: "😎" },
    Category { key: "breakup", name: "Breakup", emoji: "💔" },
    Category { key: "romantic", name: "Romantic", emoji: "🌹" },
    Category { key: "life", name: "Life", emoji: "🌟" },
    Category { key: "alone", name: "Alone", emoji: "🚶" },
    Category { key: "daily", name: "Daily", emoji: "📅" },
    Category { key: "festival", name: "Festival", emoji: "🎉" },
];

/// Normalize a category key for comparison.
///
/// Lowercases and strips whitespace and underscores, so `"Best Friend"`,
/// `"best_friend"` and `" BESTFRIEND "` compare equal.
///
/// ```
/// use dilse_core::normalize_category_key;
///
/// assert_eq!(normalize_category_key("Motivation "), "motivation");
/// assert_eq!(normalize_category_key("best_friend"), "bestfriend");
/// ```
#[must_use]
pub fn normalize_category_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Look up a category by (unnormalized) key.
#[must_use]
pub fn find(key: &str) -> Option<&'static Category> {
    let key = normalize_category_key(key);
    CATEGORIES.iter().find(|c| c.key == key)
}

impl Category {
    /// Display label with emoji, e.g. `❤️ Love`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_keys_are_normalized() {
        for category in &CATEGORIES {
            assert_eq!(normalize_category_key(category.key), category.key);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("LOVE").map(|c| c.emoji), Some("❤️"));
        assert_eq!(find(" daily ").map(|c| c.name), Some("Daily"));
        assert!(find("poetry").is_none());
    }

    #[test]
    fn test_label() {
        assert_eq!(find("festival").unwrap().label(), "🎉 Festival");
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(key in "[A-Za-z _]{0,24}") {
            let once = normalize_category_key(&key);
            prop_assert_eq!(normalize_category_key(&once), once.clone());
            prop_assert!(!once.contains(' ') && !once.contains('_'));
        }
    }
}
