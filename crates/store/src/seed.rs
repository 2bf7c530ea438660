//! Sample quotes inserted into an empty store.

use crate::error::StoreResult;
use crate::store::QuoteStore;
use dilse_core::Quote;

/// First id of the bundled sample set. Remote ids stay well below it.
pub const SEED_ID_BASE: i64 = 1_000_000;

const SAMPLES: &[(&str, &str, &str)] = &[
    ("love", "hi", "प्रेम ही सबसे बड़ी शक्ति है।"),
    ("love", "hi", "दिल की सुनो, दिमाग की मत सुनो।"),
    ("love", "gu", "તમારો પ્રેમ મારું જીવન છે."),
    ("love", "en", "Love is the greatest power in the world."),
    ("love", "hi", "दो दिल एक साथ हो सकते हैं।"),
    ("sad", "hi", "दुःख जीवन का हिस्सा है।"),
    ("sad", "hi", "हर आँसू में एक कहानी है।"),
    ("sad", "gu", "દર્દ આપણને મજબૂત બનાવે છે."),
    ("sad", "en", "Sometimes, sadness is the price of love."),
    ("motivation", "hi", "हर दिन एक नया अवसर है।"),
    ("motivation", "hi", "सफलता का कोई शॉर्टकट नहीं है।"),
    ("motivation", "gu", "તમે જે વિચાર કરો છો તે બનો છો."),
    ("motivation", "en", "Success is not final, failure is not fatal."),
    ("motivation", "hi", "मंजिल उन्हीं को मिलती है।"),
    ("friendship", "hi", "दोस्ती एक सुंदर रिश्ता है।"),
    ("friendship", "hi", "सच्चा दोस्त दुर्लभ होता है।"),
    ("friendship", "gu", "મિત્રતા જીવનનો સૌથી મોટો આશીર્વાદ છે."),
    ("friendship", "en", "A friend in need is a friend indeed."),
    ("festival", "hi", "त्योहार खुशियों का संगम है।"),
    ("festival", "hi", "रंगों का त्योहार है होली।"),
    ("festival", "gu", "દિવાળી પ્રકાશ અને આનંદનો પર્વ છે."),
    ("festival", "en", "Festivals bring people together."),
    ("daily", "hi", "आज एक नई शुरुआत है।"),
    ("daily", "hi", "जीवन को जियो, सोचो मत।"),
    ("daily", "gu", "દરેક દિવસ એક નવી તક છે."),
    ("daily", "en", "Every day is a new beginning."),
];

/// The bundled sample quotes
#[must_use]
pub fn sample_quotes() -> Vec<Quote> {
    SAMPLES
        .iter()
        .zip(SEED_ID_BASE..)
        .map(|(&(category, language, text), id)| Quote::new(id, text, category, language))
        .collect()
}

/// Insert the sample quotes when the store holds no rows.
///
/// Returns the number of inserted quotes (0 when the store was not empty).
pub fn seed_if_empty(store: &QuoteStore) -> StoreResult<usize> {
    if store.count()? > 0 {
        return Ok(0);
    }

    let quotes = sample_quotes();
    store.upsert_all(&quotes)?;
    tracing::info!(count = quotes.len(), "Seeded sample quotes");
    Ok(quotes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dilse_core::{category, Scope};

    #[test]
    fn test_samples_cover_all_languages() {
        let quotes = sample_quotes();
        for lang in ["en", "hi", "gu"] {
            assert!(quotes.iter().any(|q| q.language == lang));
        }
        assert!(quotes.iter().all(|q| q.id >= SEED_ID_BASE));
        assert!(quotes.iter().all(|q| category::find(&q.category).is_some()));
    }

    #[test]
    fn test_seed_only_once() {
        let store = QuoteStore::in_memory().unwrap();
        let inserted = seed_if_empty(&store).unwrap();
        assert_eq!(inserted, SAMPLES.len());
        assert_eq!(seed_if_empty(&store).unwrap(), 0);
        assert_eq!(store.count().unwrap(), SAMPLES.len());

        let love_en = store.by_scope(&Scope::new("love", "en")).unwrap();
        assert_eq!(love_en.len(), 1);
    }

    #[test]
    fn test_seed_skips_non_empty_store() {
        let store = QuoteStore::in_memory().unwrap();
        store.upsert_all(&[Quote::new(1, "Existing", "love", "en")]).unwrap();
        assert_eq!(seed_if_empty(&store).unwrap(), 0);
        assert_eq!(store.count().unwrap(), 1);
    }
}
