mod movie;

pub use movie::{collection_from_json, Movie, MovieCollection};
