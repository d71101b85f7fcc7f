use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Movie;

use super::DRAMA_TAG;

/// Average score across the whole collection, rounded to two decimals.
///
/// Movies without a score count as 0; an empty collection averages to 0.
pub fn average_score(movies: &[Movie]) -> f32 {
    if movies.is_empty() {
        return 0.0;
    }
    let total: f32 = movies.iter().map(Movie::effective_score).sum();
    round_two(total / movies.len() as f32)
}

/// Average score of the movies whose genre tags include "Drama", rounded to
/// two decimals. Returns 0 when the collection has no dramas.
pub fn drama_average_score(movies: &[Movie]) -> f32 {
    let dramas: Vec<Movie> = movies
        .iter()
        .filter(|m| m.has_genre_tag(DRAMA_TAG))
        .cloned()
        .collect();
    average_score(&dramas)
}

/// The year with the highest average score and that average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearAverage {
    pub year: i32,
    pub average: f32,
}

impl fmt::Display for YearAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The best year was {} with an average score of {}",
            self.year, self.average
        )
    }
}

/// Year with the highest average score, or `None` for an empty collection.
///
/// Scores are grouped under integer year keys and ties resolve to the
/// numerically smallest year. The embedded average is the exact group mean,
/// not the two-decimal rounded form.
pub fn best_average_year(movies: &[Movie]) -> Option<YearAverage> {
    if movies.is_empty() {
        return None;
    }

    let mut scores_by_year: BTreeMap<i32, Vec<f32>> = BTreeMap::new();
    for movie in movies {
        scores_by_year
            .entry(movie.year)
            .or_default()
            .push(movie.effective_score());
    }

    let mut best: Option<YearAverage> = None;
    for (year, scores) in scores_by_year {
        let average = scores.iter().sum::<f32>() / scores.len() as f32;
        // Ascending iteration plus a strict comparison keeps the earliest
        // tied year.
        if best.as_ref().map_or(true, |b| average > b.average) {
            best = Some(YearAverage { year, average });
        }
    }

    if let Some(ref selected) = best {
        log::debug!(
            "best average year {} (average {})",
            selected.year,
            selected.average
        );
    }
    best
}

fn round_two(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
