//! Tracker configuration
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! id_strategy = "sequential"     # or "ulid"
//! comment_mode = "extended"      # or "simple"
//! progress_policy = "reject"     # or "clamp"
//! default_author = "Me"
//!
//! [[trend]]
//! label = "Jan"
//! value = 20
//! ```

use crate::error::ConfigError;
use goal_intake::ProgressPolicy;
use goal_model::{CommentMode, IdStrategy};
use goal_progress::{default_trend, ChartPoint};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Author recorded on comments submitted through the form
pub const DEFAULT_AUTHOR: &str = "You";

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How goal ids are minted
    pub id_strategy: IdStrategy,
    /// Where submitted comments are stored
    pub comment_mode: CommentMode,
    /// Out-of-range progress handling
    pub progress_policy: ProgressPolicy,
    /// Author for comments created from a submission in extended mode
    pub default_author: String,
    /// Points of the collection trend chart
    pub trend: Vec<ChartPoint>,
}

impl TrackerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML or out-of-range values,
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`TrackerConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading tracker config");
        Self::from_toml_str(&text)
    }

    /// Check field constraints
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] if `default_author` is blank or a trend
    /// label is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_author.trim().is_empty() {
            return Err(ConfigError::Invalid("default_author must not be empty".to_string()));
        }
        if let Some(i) = self.trend.iter().position(|p| p.label.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("trend point {i} has an empty label")));
        }
        Ok(())
    }

    /// With id strategy
    #[inline]
    #[must_use]
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// With comment mode
    #[inline]
    #[must_use]
    pub fn with_comment_mode(mut self, mode: CommentMode) -> Self {
        self.comment_mode = mode;
        self
    }

    /// With progress policy
    #[inline]
    #[must_use]
    pub fn with_progress_policy(mut self, policy: ProgressPolicy) -> Self {
        self.progress_policy = policy;
        self
    }

    /// With default author
    #[inline]
    #[must_use]
    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = author.into();
        self
    }

    /// With trend points
    #[inline]
    #[must_use]
    pub fn with_trend(mut self, trend: Vec<ChartPoint>) -> Self {
        self.trend = trend;
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            comment_mode: CommentMode::default(),
            progress_policy: ProgressPolicy::default(),
            default_author: DEFAULT_AUTHOR.to_string(),
            trend: default_trend(),
        }
    }
}
