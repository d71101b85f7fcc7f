use crate::domain::entities::{Movie, MovieCollection};
use crate::domain::value_objects::Duration;
use crate::shared::errors::CollectionError;

/// Copies the collection with every duration replaced by its integer-minutes
/// form; all other fields are unchanged. See [`Duration`] for the accepted
/// text grammar.
///
/// Already-normalized durations pass through unchanged, so applying this
/// twice equals applying it once. The first unparseable duration aborts the
/// whole call with [`CollectionError::InvalidDuration`].
pub fn normalize_durations(movies: &[Movie]) -> Result<MovieCollection, CollectionError> {
    movies
        .iter()
        .map(|movie| {
            let minutes = movie.duration.as_minutes().map_err(|err| {
                log::warn!("movie {:?} has an unparseable duration: {}", movie.title, err);
                err
            })?;
            Ok(Movie {
                duration: Duration::Minutes(minutes),
                ..movie.clone()
            })
        })
        .collect()
}
