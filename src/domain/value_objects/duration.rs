use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::errors::CollectionError;

/// A movie runtime, either in its raw text form or normalized to minutes.
///
/// The accepted text grammar is `"<N>h <M>min"`, `"<N>h"`, or `"<M>min"`,
/// with optional whitespace around each token. Anything else is rejected by
/// [`Duration::as_minutes`] with [`CollectionError::InvalidDuration`].
///
/// Untagged serde representation: a JSON dataset may carry `"2h 15min"` or
/// the already-normalized `135` in the same field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Duration {
    Minutes(u32),
    Text(String),
}

impl Duration {
    /// Total minutes. Text durations are parsed with the documented grammar;
    /// already normalized values are returned as-is.
    pub fn as_minutes(&self) -> Result<u32, CollectionError> {
        match self {
            Duration::Minutes(minutes) => Ok(*minutes),
            Duration::Text(raw) => parse_minutes(raw),
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duration::Minutes(minutes) => write!(f, "{}min", minutes),
            Duration::Text(raw) => write!(f, "{}", raw),
        }
    }
}

fn parse_minutes(raw: &str) -> Result<u32, CollectionError> {
    let re = Regex::new(r"^\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*min)?\s*$").unwrap();
    let invalid = || CollectionError::InvalidDuration(raw.to_string());

    let caps = re.captures(raw).ok_or_else(invalid)?;

    let hours = match caps.get(1) {
        Some(m) => Some(m.as_str().parse::<u32>().map_err(|_| invalid())?),
        None => None,
    };
    let minutes = match caps.get(2) {
        Some(m) => Some(m.as_str().parse::<u32>().map_err(|_| invalid())?),
        None => None,
    };

    // Both components are optional in the pattern, so an empty or
    // whitespace-only string still matches; require at least one.
    match (hours, minutes) {
        (None, None) => Err(invalid()),
        (h, m) => Ok(h.unwrap_or(0) * 60 + m.unwrap_or(0)),
    }
}
