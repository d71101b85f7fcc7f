//! Pure query operations over a movie collection.
//!
//! Each operation is an independent single- or two-pass computation with no
//! shared state; the only ordering among them is the shared data model.

mod catalog;
mod ordering;
mod runtime;
mod scoring;

pub use catalog::{count_drama_movies_by_director, unique_directors};
pub use ordering::{sort_by_year_then_title, top_titles_alphabetically};
pub use runtime::normalize_durations;
pub use scoring::{average_score, best_average_year, drama_average_score, YearAverage};

/// Genre tag matched (by containment) by the drama-specific queries.
pub const DRAMA_TAG: &str = "Drama";
