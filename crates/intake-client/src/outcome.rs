//! Tagged result of a collaborator call.

use serde::{Deserialize, Serialize};

/// Where a value came from.
///
/// Collaborator failures never propagate as errors; the call site turns
/// them into `Fallback` (static or locally generated data) or `Unreachable`
/// (nothing to substitute).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "data", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The collaborator answered.
    Live(T),
    /// The collaborator failed and a substitute was used.
    Fallback(T),
    /// The collaborator failed and there is no substitute.
    Unreachable,
}

impl<T> Outcome<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Outcome::Unreachable)
    }

    /// Borrow the value regardless of its source.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Live(v) | Outcome::Fallback(v) => Some(v),
            Outcome::Unreachable => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Live(v) | Outcome::Fallback(v) => Some(v),
            Outcome::Unreachable => None,
        }
    }

    /// Short tag for logs.
    pub fn source(&self) -> &'static str {
        match self {
            Outcome::Live(_) => "live",
            Outcome::Fallback(_) => "fallback",
            Outcome::Unreachable => "unreachable",
        }
    }
}
