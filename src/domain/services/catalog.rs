use std::collections::HashSet;

use crate::domain::entities::Movie;

use super::DRAMA_TAG;

/// Distinct director names in order of first appearance.
///
/// Equality is exact string equality; no normalization is applied.
pub fn unique_directors(movies: &[Movie]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut directors = Vec::new();
    for movie in movies {
        if seen.insert(movie.director.as_str()) {
            directors.push(movie.director.clone());
        }
    }
    directors
}

/// Number of movies by `director` whose genre tags include "Drama".
///
/// The director match is exact; the genre check is substring containment.
/// The classic query passes `"Steven Spielberg"`.
pub fn count_drama_movies_by_director(movies: &[Movie], director: &str) -> usize {
    movies
        .iter()
        .filter(|m| m.director == director && m.has_genre_tag(DRAMA_TAG))
        .count()
}
