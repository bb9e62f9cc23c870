// In-memory play session: the caller side of the exclusion-list contract.
//
// The selector is stateless, so whoever calls it has to remember which topics
// were already shown and wipe that memory when a reset notice comes back.
// This helper does exactly that for one theme. Nothing is persisted; a new
// process starts a new session.

use anyhow::Result;
use tracing::info;

use crate::selector::{Selection, TopicSelector};

/// Tracks the topics dealt for one theme.
#[derive(Debug, Clone, Default)]
pub struct Session {
    theme: String,
    used: Vec<String>,
}

impl Session {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            used: Vec::new(),
        }
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Labels dealt since the last reset, oldest first.
    pub fn used(&self) -> &[String] {
        &self.used
    }

    /// Deal the next topic, honouring the reset notice.
    pub fn deal(&mut self, selector: &TopicSelector) -> Result<Selection> {
        let selection = selector.get_topic(&self.theme, &self.used)?;

        if selection.was_reset() {
            info!(
                theme = %self.theme,
                cleared = self.used.len(),
                "Theme exhausted, clearing used topics"
            );
            self.used.clear();
        }

        self.used.push(selection.record.topic.clone());
        Ok(selection)
    }
}
