//! Record types and parsing for the static resources consumed by counterdex.
//!
//! Four JSON resources feed the engine:
//!
//! ```text
//! dex.json      (stat pool)   ─┐
//! usage.json    (usage pool)  ─┼─> counterdex-data (records + validation) ← THIS CRATE
//! atkType.json  (type table)  ─┤          │
//! moves.json    (move dex)    ─┘          ▼
//!                                  counterdex-engine (domain types + analysis)
//! ```
//!
//! Parsing is pure: callers hand in the raw text, this crate hands back typed
//! records or a single [`ResourceError`] naming the resource that failed.

use thiserror::Error;

pub mod moves;
pub mod stats;
pub mod type_table;
pub mod usage;

pub use moves::{MoveDex, MoveEntry, MoveRecord, parse_move_dex, to_id};
pub use stats::{BaseStatsRecord, StatPoolEntry, parse_stat_pool};
pub use type_table::{TYPE_TAGS, TypeTable, canonical_tag, parse_type_table};
pub use usage::{AbilityField, ItemField, SpreadRecord, UsageEntry, parse_spread, parse_usage_pool};

/// The resource a record or failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    StatPool,
    UsagePool,
    TypeTable,
    MoveDex,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::StatPool,
        ResourceKind::UsagePool,
        ResourceKind::TypeTable,
        ResourceKind::MoveDex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::StatPool => "stat pool",
            ResourceKind::UsagePool => "usage pool",
            ResourceKind::TypeTable => "type table",
            ResourceKind::MoveDex => "move dex",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("{resource} unavailable: {reason}")]
    Unavailable {
        resource: ResourceKind,
        reason: String,
    },

    #[error("{resource} is malformed: {source}")]
    Malformed {
        resource: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("{resource} rejected: {reason}")]
    Invalid {
        resource: ResourceKind,
        reason: String,
    },
}

impl ResourceError {
    pub fn unavailable(resource: ResourceKind, reason: impl Into<String>) -> Self {
        ResourceError::Unavailable {
            resource,
            reason: reason.into(),
        }
    }

    pub fn invalid(resource: ResourceKind, reason: impl Into<String>) -> Self {
        ResourceError::Invalid {
            resource,
            reason: reason.into(),
        }
    }

    /// Which resource this failure concerns
    pub fn resource(&self) -> ResourceKind {
        match self {
            ResourceError::Unavailable { resource, .. }
            | ResourceError::Malformed { resource, .. }
            | ResourceError::Invalid { resource, .. } => *resource,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResourceError>;

pub(crate) fn from_json<T: serde::de::DeserializeOwned>(
    resource: ResourceKind,
    json: &str,
) -> Result<T> {
    serde_json::from_str(json).map_err(|source| ResourceError::Malformed { resource, source })
}
