//! Settings for the check entry point.

use crate::context::{Context, Location, Reporting};
use serde::{Deserialize, Serialize};

/// Label used for the owner of a checked value when none is given.
pub const DEFAULT_LABEL: &str = "value check";

/// Errors raised while loading a [`CheckConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid check configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("check label must not be empty")]
    EmptyLabel,
}

/// Configuration for [`check`](crate::check::check)-style calls.
///
/// Every field has a default, so `{}` is a valid document:
///
/// ```rust,ignore
/// let config = CheckConfig::from_json(r#"{"label": "Profile", "reporting": "collect_all"}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Owner label used in messages.
    pub label: String,
    pub location: Location,
    pub reporting: Reporting,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_owned(),
            location: Location::Prop,
            reporting: Reporting::FailFast,
        }
    }
}

impl CheckConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.label.is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        Ok(config)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_reporting(mut self, reporting: Reporting) -> Self {
        self.reporting = reporting;
        self
    }

    /// Evaluation context described by this configuration.
    #[must_use]
    pub fn context(&self) -> Context<'_> {
        Context::new(&self.label)
            .with_location(self.location)
            .with_reporting(self.reporting)
    }
}
