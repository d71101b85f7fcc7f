use std::cmp::Ordering;

use crate::domain::entities::Movie;

const ALPHABETICAL_LIMIT: usize = 20;

/// New vector sorted ascending by year, ties broken alphabetically by title.
/// The input is left untouched.
pub fn sort_by_year_then_title(movies: &[Movie]) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| match a.year.cmp(&b.year) {
        Ordering::Equal => compare_titles(&a.title, &b.title),
        other => other,
    });
    sorted
}

/// The first 20 titles in alphabetical order, or all of them sorted when the
/// collection holds fewer than 20.
pub fn top_titles_alphabetically(movies: &[Movie]) -> Vec<String> {
    let mut titles: Vec<String> = movies.iter().map(|m| m.title.clone()).collect();
    titles.sort_by(|a, b| compare_titles(a, b));
    titles.truncate(ALPHABETICAL_LIMIT);
    titles
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Case- and diacritic-insensitive sort key so accented titles land in
/// natural reading order instead of after 'z'.
fn collation_key(title: &str) -> String {
    title.to_lowercase().chars().map(fold_diacritic).collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}
