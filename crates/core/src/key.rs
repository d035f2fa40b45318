//! Namespaced item keys.
//!
//! Authored data names item types with stable string keys (e.g.
//! `stk:iron_ore`). Keys are validated on parse and ordered lexically so
//! registries iterate deterministically.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace assumed when a key omits an explicit one.
pub const DEFAULT_NAMESPACE: &str = "stk";

const MAX_NAMESPACE_LEN: usize = 64;
const MAX_PATH_LEN: usize = 128;

/// Error returned when parsing an invalid [`ItemKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ItemKeyError(String);

/// A validated key of the form `namespace:path`.
///
/// Ordering is lexical by `(namespace, path)` and stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    namespace: String,
    path: String,
}

impl ItemKey {
    /// Parse a key, applying [`DEFAULT_NAMESPACE`] when the input has no
    /// `namespace:` prefix.
    pub fn parse(input: &str) -> Result<Self, ItemKeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ItemKeyError("item key cannot be empty".into()));
        }

        let (namespace, path) = match input.split_once(':') {
            Some((ns, p)) => (ns.trim(), p.trim()),
            None => (DEFAULT_NAMESPACE, input),
        };

        validate_segment("namespace", namespace, MAX_NAMESPACE_LEN, false)?;
        validate_segment("path", path, MAX_PATH_LEN, true)?;

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Key namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn validate_segment(
    what: &str,
    segment: &str,
    max_len: usize,
    allow_slash: bool,
) -> Result<(), ItemKeyError> {
    if segment.is_empty() {
        return Err(ItemKeyError(format!("item key {what} cannot be empty")));
    }
    if segment.len() > max_len {
        return Err(ItemKeyError(format!(
            "item key {what} too long (max {max_len})"
        )));
    }
    let valid = segment.chars().all(|c| {
        matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.') || (allow_slash && c == '/')
    });
    if !valid {
        let allowed = if allow_slash { "a-z0-9_./-" } else { "a-z0-9_.-" };
        return Err(ItemKeyError(format!(
            "item key {what} has invalid characters (allowed: {allowed})"
        )));
    }
    Ok(())
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ItemKey {
    type Err = ItemKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Keys serialize as their string form so authored JSON reads naturally
// ("item": "stk:iron_ore" rather than a namespace/path map).
impl Serialize for ItemKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ItemKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}
