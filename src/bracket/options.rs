use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::resolver::DescriptionMatcher;

/// Byes are only synthesized for divisions with more matches than this
pub const DEFAULT_BYE_THRESHOLD: usize = 4;

/// Which builder reconstructs the division
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Sequential when any match carries a sequence number, heuristic otherwise
    #[default]
    Auto,
    Sequential,
    Heuristic,
}

impl BuildMode {
    pub fn as_str(&self) -> &str {
        match self {
            BuildMode::Auto => "auto",
            BuildMode::Sequential => "sequential",
            BuildMode::Heuristic => "heuristic",
        }
    }
}

/// Policy knobs for the heuristic builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Fill unresolved slots with the next matches in date order and never
    /// stop early. When off, building stops once the pool cannot supply a
    /// full round and unresolved slots stay empty.
    pub allow_date_order_fallback: bool,
    pub bye_threshold: usize,
    pub matcher: DescriptionMatcher,
}

impl BuildOptions {
    /// Stops on insufficient data; never guesses
    pub fn strict() -> Self {
        Self {
            allow_date_order_fallback: false,
            bye_threshold: DEFAULT_BYE_THRESHOLD,
            matcher: DescriptionMatcher::default(),
        }
    }

    /// Always builds down to the leaves, guessing by date where links are missing
    pub fn lenient() -> Self {
        Self {
            allow_date_order_fallback: true,
            ..Self::strict()
        }
    }

    pub fn with_fallback(mut self, allow: bool) -> Self {
        self.allow_date_order_fallback = allow;
        self
    }

    pub fn byes_allowed(&self, total_matches: usize) -> bool {
        total_matches > self.bye_threshold
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::strict()
    }
}
