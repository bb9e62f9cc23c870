// Topic catalog: the fixed list of charades prompts the selector draws from.
//
// A catalog is loaded once at startup (built-in or from a JSON file) and is
// never mutated afterwards. The selector borrows it read-only.

pub mod loader;

use serde::{Deserialize, Serialize};

/// Theme tag for theme-less topics. Also the ultimate fallback pool.
pub const GENERAL_THEME: &str = "General";

/// A single charades prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    /// Descriptive grouping, e.g. "Movie" or "Animal"
    pub category: String,
    pub emoji: String,
    /// The label players act out. Used as the identity key for exclusion lists.
    pub topic: String,
    /// Free-form difficulty label (the shipped data uses Easy/Medium/Hard)
    pub difficulty: String,
    /// Gameplay modifier, e.g. "Only use one hand"
    pub constraint: String,
    /// Theme tag; "General" marks default topics
    pub theme: String,
}

impl TopicRecord {
    pub fn is_general(&self) -> bool {
        self.theme == GENERAL_THEME
    }
}

/// Last-resort record returned when the catalog has nothing at all to offer.
pub fn placeholder_topic() -> TopicRecord {
    TopicRecord {
        category: "Movie".to_string(),
        emoji: "🎬".to_string(),
        topic: "The Wizard of Oz".to_string(),
        difficulty: "Medium".to_string(),
        constraint: "Skip and lock arms".to_string(),
        theme: GENERAL_THEME.to_string(),
    }
}

/// An ordered, immutable sequence of topics.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    topics: Vec<TopicRecord>,
}

impl Catalog {
    pub fn new(topics: Vec<TopicRecord>) -> Self {
        Self { topics }
    }

    pub fn records(&self) -> &[TopicRecord] {
        &self.topics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TopicRecord> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn first(&self) -> Option<&TopicRecord> {
        self.topics.first()
    }

    /// Number of records tagged exactly "General".
    pub fn general_count(&self) -> usize {
        self.topics.iter().filter(|t| t.is_general()).count()
    }
}
