//! Naming context threaded through evaluation.
//!
//! A [`Context`] never changes whether a subject passes, only how failures
//! are worded and how much detail they carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the validated value lives on its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    #[serde(rename = "prop")]
    Prop,
    #[serde(rename = "context")]
    Context,
    #[serde(rename = "child context")]
    ChildContext,
}

impl Location {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prop => "prop",
            Self::Context => "context",
            Self::ChildContext => "child context",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a shape reports failing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reporting {
    /// Stop at the first failing field.
    #[default]
    FailFast,
    /// Evaluate every field and nest all failures.
    CollectAll,
}

/// Ancillary naming information for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context<'a> {
    component: &'a str,
    location: Location,
    reporting: Reporting,
}

impl<'a> Context<'a> {
    /// A prop-location, fail-fast context for the named component.
    #[must_use]
    pub fn new(component: &'a str) -> Self {
        Self {
            component,
            location: Location::Prop,
            reporting: Reporting::FailFast,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_reporting(mut self, reporting: Reporting) -> Self {
        self.reporting = reporting;
        self
    }

    #[must_use]
    pub fn component(&self) -> &'a str {
        self.component
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub fn reporting(&self) -> Reporting {
        self.reporting
    }
}
