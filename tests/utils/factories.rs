/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use cinelog::{Duration, Movie};

pub struct MovieFactory {
    title: String,
    director: String,
    genre: Vec<String>,
    score: Option<f32>,
    year: i32,
    duration: Duration,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            title: "Test Movie".to_string(),
            director: "Test Director".to_string(),
            genre: Vec::new(),
            score: None,
            year: 2000,
            duration: Duration::Text("1h 30min".to_string()),
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drama() -> Self {
        Self::default().with_genres(vec!["Drama"])
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_director(mut self, director: &str) -> Self {
        self.director = director.to_string();
        self
    }

    pub fn with_genres(mut self, genres: Vec<&str>) -> Self {
        self.genre = genres.into_iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn without_score(mut self) -> Self {
        self.score = None;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_duration(mut self, duration: &str) -> Self {
        self.duration = Duration::Text(duration.to_string());
        self
    }

    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.duration = Duration::Minutes(minutes);
        self
    }

    pub fn build(self) -> Movie {
        Movie {
            title: self.title,
            director: self.director,
            genre: self.genre,
            score: self.score,
            year: self.year,
            duration: self.duration,
        }
    }
}
