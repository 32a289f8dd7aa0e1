//! Goal identifiers
//!
//! Every identifier that enters or leaves the model passes through
//! [`GoalId::parse`] (or `From<u64>`, which renders the decimal form), so a
//! numeric `1` and a string `"1"` always compare equal and nothing else is
//! coerced.

use crate::error::IdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Canonical goal identifier (opaque string token)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GoalId(String);

impl GoalId {
    /// Normalize a raw identifier
    ///
    /// Surrounding whitespace is trimmed. The remaining token is taken
    /// verbatim, so `"01"` and `"1"` stay distinct.
    ///
    /// # Errors
    /// [`IdError::Empty`] if nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, IdError> {
        let token = raw.trim();
        if token.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(token.to_string()))
    }

    /// Borrow the token
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for GoalId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for GoalId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GoalId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GoalId> for String {
    fn from(id: GoalId) -> Self {
        id.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh goal identifiers
///
/// Implementations must never hand out the same id twice for the lifetime
/// of the generator.
pub trait IdGenerator: fmt::Debug {
    /// Mint the next identifier
    fn next_id(&mut self) -> GoalId;
}

/// Monotonic counter: "1", "2", "3", ...
///
/// Once `u64::MAX` has been handed out the counter is exhausted and every
/// further id is a ULID token. A ULID is 26 characters and a decimal `u64`
/// at most 20, so the two ranges never overlap.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    /// `None` once the counter has run past `u64::MAX`
    next: Option<u64>,
}

impl SequentialIds {
    /// Counter starting at 1
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Counter starting at an arbitrary value
    #[inline]
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Whether the numeric range is used up
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> GoalId {
        let Some(current) = self.next else {
            return UlidIds.next_id();
        };
        self.next = current.checked_add(1);
        if self.next.is_none() {
            tracing::warn!(last = current, "sequential ids exhausted, falling back to ULIDs");
        }
        GoalId::from(current)
    }
}

/// Random ULID tokens (80 bits of randomness per millisecond)
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidIds;

impl IdGenerator for UlidIds {
    fn next_id(&mut self) -> GoalId {
        GoalId(Ulid::new().to_string())
    }
}

/// Identifier strategy selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// [`SequentialIds`]
    Sequential,
    /// [`UlidIds`]
    #[default]
    Ulid,
}

impl IdStrategy {
    /// Build a generator for this strategy
    #[must_use]
    pub fn generator(self) -> Box<dyn IdGenerator + Send> {
        match self {
            Self::Sequential => Box::new(SequentialIds::new()),
            Self::Ulid => Box::new(UlidIds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn numeric_and_string_ids_normalize_identically() {
        assert_eq!(GoalId::from(1), GoalId::parse("1").unwrap());
        assert_eq!(GoalId::from(7), GoalId::parse("  7 ").unwrap());
        assert_ne!(GoalId::from(1), GoalId::parse("01").unwrap());
    }

    #[test]
    fn empty_id_rejected() {
        assert_eq!(GoalId::parse("   "), Err(IdError::Empty));
        assert_eq!("".parse::<GoalId>(), Err(IdError::Empty));
    }

    #[test]
    fn serde_goes_through_parse() {
        let id: GoalId = serde_json::from_str("\" 42 \"").unwrap();
        assert_eq!(id, GoalId::from(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
        assert!(serde_json::from_str::<GoalId>("\"\"").is_err());
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new();
        let minted: Vec<String> = (0..3).map(|_| ids.next_id().to_string()).collect();
        assert_eq!(minted, vec!["1", "2", "3"]);
    }

    #[test]
    fn sequential_ids_fall_back_after_max() {
        let mut ids = SequentialIds::starting_at(u64::MAX - 1);
        assert_eq!(ids.next_id().as_str(), "18446744073709551614");
        assert!(!ids.is_exhausted());
        assert_eq!(ids.next_id().as_str(), "18446744073709551615");
        assert!(ids.is_exhausted());

        let after: HashSet<GoalId> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(after.len(), 100);
        assert!(after.iter().all(|id| id.as_str().len() == 26));
        assert!(!after.contains(&GoalId::from(u64::MAX)));
    }

    #[test]
    fn ulid_ids_are_unique() {
        let mut ids = UlidIds;
        let minted: HashSet<GoalId> = (0..1_000).map(|_| ids.next_id()).collect();
        assert_eq!(minted.len(), 1_000);
    }

    #[test]
    fn strategy_builds_matching_generator() {
        let mut seq = IdStrategy::Sequential.generator();
        assert_eq!(seq.next_id().as_str(), "1");

        let mut random = IdStrategy::Ulid.generator();
        assert_eq!(random.next_id().as_str().len(), 26);
    }
}
