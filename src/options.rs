#![forbid(unsafe_code)]

//! Flat options mapping produced by the argument parser
//!
//! Keys follow the docopt convention: long flags and options are keyed with
//! their leading dashes (`--verbose`), subcommands by their bare name
//! (`hello`). The mapping is ordered by key, which is also the order the
//! dispatcher scans it in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single parsed value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
    None,
}

impl OptionValue {
    /// Truthiness as the dispatcher sees it
    ///
    /// `Bool(true)` and non-empty strings are truthy; everything else is not.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Str(s) => !s.is_empty(),
            OptionValue::None => false,
        }
    }
}

/// Immutable mapping from flag/command name to its parsed value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

impl Options {
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Returns true if `key` is present and truthy
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(OptionValue::is_truthy)
    }

    /// Iterates `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Renders the mapping as pretty-printed JSON with sorted keys
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<(String, OptionValue)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        Options {
            values: iter.into_iter().collect(),
        }
    }
}
