use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::{Config, DEFAULT_HISTORY_LIMIT};
use crate::names::{named, NamedColor};

/// Recently viewed colors, most recent first, without duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Color>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// An empty history that remembers at most `limit` colors.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// An empty history capped at [`Config::history_limit`].
    pub fn from_config(config: &Config) -> Self {
        Self::with_limit(config.history_limit)
    }

    /// Record a viewed color. A color already present moves to the front.
    pub fn push(&mut self, color: Color) {
        self.entries.retain(|c| c != &color);
        self.entries.insert(0, color);
        self.entries.truncate(self.limit);
    }

    /// The remembered colors, most recent first.
    pub fn entries(&self) -> &[Color] {
        &self.entries
    }

    /// The entries paired with their nearest names.
    pub fn named(&self) -> Vec<NamedColor> {
        named(&self.entries)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
