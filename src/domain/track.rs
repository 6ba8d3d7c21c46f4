// Track domain models
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of tracked user activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackId {
    Template,
    Query,
    Login,
    Search,
    ListExecution,
    ListCreation,
}

impl TrackId {
    pub const ALL: [TrackId; 6] = [
        TrackId::Template,
        TrackId::Query,
        TrackId::Login,
        TrackId::Search,
        TrackId::ListExecution,
        TrackId::ListCreation,
    ];

    /// Identifier used by callers and by the tracking service paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Query => "query",
            Self::Login => "login",
            Self::Search => "search",
            Self::ListExecution => "listExecution",
            Self::ListCreation => "listCreation",
        }
    }

    /// Exact, case-sensitive match against the known identifiers
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|track| track.as_str() == id)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque bound on which tracks get aggregated. Passed through to the
/// tracking service untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeRange(String);

impl TimeRange {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
