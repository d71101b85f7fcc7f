//! Pure query and aggregation operations over in-memory movie collections.
//!
//! Every operation takes the collection by reference, allocates its own
//! output, and never mutates its input, so calls can be issued from any
//! number of callers without coordination.

pub mod domain;
pub mod shared;

pub use domain::entities::{collection_from_json, Movie, MovieCollection};
pub use domain::services::{
    average_score, best_average_year, count_drama_movies_by_director, drama_average_score,
    normalize_durations, sort_by_year_then_title, top_titles_alphabetically, unique_directors,
    YearAverage, DRAMA_TAG,
};
pub use domain::value_objects::Duration;
pub use shared::errors::CollectionError;
