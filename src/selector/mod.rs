// Topic selection: themed random draws with exclusion and exhaustion recovery.
//
// The selector owns an immutable catalog and an injected random source. It
// keeps no per-caller state: callers pass in the labels they've already shown
// and get told (via the reset notice) when a theme has run dry and they
// should start their list over.

pub mod aliases;
pub mod random;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{placeholder_topic, Catalog, TopicRecord, GENERAL_THEME};
use self::random::{ThreadRngSource, UniformSource};

pub use aliases::fuzzy_match_theme;

/// The outcome of a single draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    #[serde(flatten)]
    pub record: TopicRecord,
    /// Set when every topic of the requested theme had been used and the
    /// draw restarted from the full theme pool.
    #[serde(rename = "resetNotice", skip_serializing_if = "Option::is_none")]
    pub reset_notice: Option<String>,
}

impl Selection {
    fn fresh(record: TopicRecord) -> Self {
        Self {
            record,
            reset_notice: None,
        }
    }

    pub fn was_reset(&self) -> bool {
        self.reset_notice.is_some()
    }
}

/// Message attached to a selection when a theme's pool restarts.
pub fn reset_notice(theme: &str) -> String {
    format!("🔄 All {theme} topics completed! Starting fresh.")
}

/// Random topic picker over a fixed catalog.
pub struct TopicSelector {
    catalog: Catalog,
    source: Box<dyn UniformSource>,
}

impl TopicSelector {
    /// Build a selector that draws with the thread-local RNG.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_source(catalog, ThreadRngSource)
    }

    /// Build a selector with an explicit random source.
    pub fn with_source(catalog: Catalog, source: impl UniformSource + 'static) -> Self {
        debug!(topics = catalog.len(), "Topic selector initialized");
        Self {
            catalog,
            source: Box::new(source),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// See [`aliases::fuzzy_match_theme`].
    pub fn fuzzy_match_theme(&self, input: &str) -> String {
        fuzzy_match_theme(input)
    }

    /// Draw a topic for `theme`, skipping labels listed in `used_topics`.
    ///
    /// Falls back in order: the theme's unused topics, the theme's full pool
    /// (with a reset notice), then a General topic. Only a misbehaving random
    /// source can make this fail.
    pub fn get_topic(&self, theme: &str, used_topics: &[String]) -> Result<Selection> {
        let matched_theme = fuzzy_match_theme(theme);
        let themed = is_specific_theme(&matched_theme);

        let available: Vec<&TopicRecord> = self
            .theme_pool(&matched_theme)
            .into_iter()
            .filter(|t| !is_used(t, used_topics))
            .collect();

        debug!(
            theme = %matched_theme,
            available = available.len(),
            excluded = used_topics.len(),
            "Filtered topic pool"
        );

        if !available.is_empty() {
            let record = self.pick(&available)?;
            return Ok(Selection::fresh(record.clone()));
        }

        if themed {
            let full_pool = self.theme_pool(&matched_theme);
            if !full_pool.is_empty() {
                warn!(
                    theme = %matched_theme,
                    pool = full_pool.len(),
                    "All theme topics used, restarting theme"
                );
                let record = self.pick(&full_pool)?;
                return Ok(Selection {
                    record: record.clone(),
                    reset_notice: Some(reset_notice(&matched_theme)),
                });
            }
        }

        debug!(theme = %matched_theme, "Falling back to General topics");
        self.get_random_general_topic(used_topics).map(Selection::fresh)
    }

    /// Draw an unused General topic.
    ///
    /// When every General topic is used (or there are none), returns the first
    /// catalog record regardless of exclusions, and as a last resort a fixed
    /// placeholder so this never comes back empty-handed.
    pub fn get_random_general_topic(&self, used_topics: &[String]) -> Result<TopicRecord> {
        let general: Vec<&TopicRecord> = self
            .catalog
            .iter()
            .filter(|t| t.is_general() && !is_used(t, used_topics))
            .collect();

        if !general.is_empty() {
            return self.pick(&general).cloned();
        }

        Ok(self
            .catalog
            .first()
            .cloned()
            .unwrap_or_else(placeholder_topic))
    }

    /// Distinct non-General themes in the catalog, sorted ascending.
    pub fn get_themes(&self) -> Vec<String> {
        let mut themes: Vec<String> = self
            .catalog
            .iter()
            .filter(|t| !t.is_general())
            .map(|t| t.theme.clone())
            .collect();
        themes.sort();
        themes.dedup();
        themes
    }

    /// Number of topics a theme would draw from, ignoring exclusions.
    ///
    /// Blank input counts exact General topics. Anything else is resolved with
    /// fuzzy matching and counted by case-insensitive substring, including
    /// input that happens to resolve to "General".
    pub fn get_topic_count(&self, theme: &str) -> usize {
        if theme.trim().is_empty() {
            return self.catalog.general_count();
        }

        let matched_theme = fuzzy_match_theme(theme);
        self.catalog
            .iter()
            .filter(|t| theme_contains(t, &matched_theme))
            .count()
    }

    /// All records for a resolved theme, ignoring exclusions.
    fn theme_pool(&self, matched_theme: &str) -> Vec<&TopicRecord> {
        if is_specific_theme(matched_theme) {
            self.catalog
                .iter()
                .filter(|t| theme_contains(t, matched_theme))
                .collect()
        } else {
            self.catalog.iter().filter(|t| t.is_general()).collect()
        }
    }

    fn pick<'a>(&self, pool: &[&'a TopicRecord]) -> Result<&'a TopicRecord> {
        let index = self.source.pick_index(pool.len());
        match pool.get(index) {
            Some(record) => Ok(*record),
            None => anyhow::bail!(
                "Random source returned index {index} for a pool of {} topics",
                pool.len()
            ),
        }
    }
}

fn is_specific_theme(matched_theme: &str) -> bool {
    !matched_theme.is_empty() && matched_theme != GENERAL_THEME
}

fn theme_contains(record: &TopicRecord, matched_theme: &str) -> bool {
    record
        .theme
        .to_lowercase()
        .contains(&matched_theme.to_lowercase())
}

fn is_used(record: &TopicRecord, used_topics: &[String]) -> bool {
    used_topics.iter().any(|u| *u == record.topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(topic: &str, theme: &str) -> TopicRecord {
        TopicRecord {
            category: "Test".to_string(),
            emoji: "🧪".to_string(),
            topic: topic.to_string(),
            difficulty: "Easy".to_string(),
            constraint: "None".to_string(),
            theme: theme.to_string(),
        }
    }

    /// Always picks the last element, or a fixed out-of-range index.
    struct FixedSource(Option<usize>);

    impl UniformSource for FixedSource {
        fn pick_index(&self, len: usize) -> usize {
            self.0.unwrap_or(len - 1)
        }
    }

    fn selector(source: FixedSource) -> TopicSelector {
        TopicSelector::with_source(
            Catalog::new(vec![
                record("G1", "General"),
                record("A", "Animals"),
                record("G2", "General"),
                record("B", "Animals"),
            ]),
            source,
        )
    }

    #[test]
    fn test_pick_follows_source() {
        let s = selector(FixedSource(None));
        let picked = s.get_topic("animals", &[]).unwrap();
        assert_eq!(picked.record.topic, "B");
        assert!(!picked.was_reset());
    }

    #[test]
    fn test_out_of_range_source_is_an_error() {
        let s = selector(FixedSource(Some(99)));
        let err = s.get_topic("", &[]).unwrap_err();
        assert!(err.to_string().contains("index 99"));
    }

    #[test]
    fn test_reset_notice_text() {
        assert_eq!(
            reset_notice("Animals"),
            "🔄 All Animals topics completed! Starting fresh."
        );
    }

    #[test]
    fn test_selection_json_shape() {
        let selection = Selection {
            record: record("A", "Animals"),
            reset_notice: Some(reset_notice("Animals")),
        };
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["topic"], "A");
        assert_eq!(json["theme"], "Animals");
        assert!(json["resetNotice"].as_str().unwrap().contains("Animals"));

        let plain = serde_json::to_value(Selection::fresh(record("A", "Animals"))).unwrap();
        assert!(plain.get("resetNotice").is_none());
    }

    #[test]
    fn test_general_exhausted_returns_first_record() {
        let s = selector(FixedSource(None));
        let used = vec!["G1".to_string(), "G2".to_string()];
        let picked = s.get_topic("", &used).unwrap();
        assert_eq!(picked.record.topic, "G1");
        assert!(!picked.was_reset());
    }

    #[test]
    fn test_empty_catalog_gives_placeholder() {
        let s = TopicSelector::with_source(Catalog::default(), FixedSource(None));
        assert!(s.catalog().is_empty());
        let picked = s.get_topic("animals", &[]).unwrap();
        assert_eq!(picked.record, placeholder_topic());
    }
}
