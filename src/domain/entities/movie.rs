use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Duration;
use crate::shared::errors::CollectionError;

/// A single film record. Collections of these are the sole input to every
/// query operation; no operation ever mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub director: String,
    /// Ordered genre tags. A movie may carry several, and a tag may itself be
    /// a composite string such as "Crime Drama".
    pub genre: Vec<String>,
    pub score: Option<f32>,
    pub year: i32,
    pub duration: Duration,
}

/// An ordered sequence of movies, constructed by the caller.
pub type MovieCollection = Vec<Movie>;

impl Movie {
    /// True when any genre tag contains `tag` as a substring.
    ///
    /// Containment rather than equality, so "Crime Drama" counts for "Drama".
    pub fn has_genre_tag(&self, tag: &str) -> bool {
        self.genre.iter().any(|g| g.contains(tag))
    }

    /// Score with a missing value treated as 0.
    pub fn effective_score(&self) -> f32 {
        self.score.unwrap_or(0.0)
    }
}

/// Parses a JSON array of movie records into a collection.
///
/// Durations may appear either as text (`"2h 15min"`) or as already
/// normalized integer minutes.
pub fn collection_from_json(json: &str) -> Result<MovieCollection, CollectionError> {
    Ok(serde_json::from_str(json)?)
}
