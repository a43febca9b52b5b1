use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// One book in the catalog. Immutable after construction; the rating
/// invariant is enforced in `new`, so a `Book` always holds a rating in
/// [0, 5].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    genre: String,
    rating: f64,
}

impl Book {
    /// Fails with a validation error when the rating is outside [0, 5] or
    /// not a finite number. Text fields are stored as given, without
    /// normalization.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
    ) -> Result<Self> {
        validate_range("rating", rating, MIN_RATING, MAX_RATING)?;

        Ok(Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            rating,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Case-insensitive genre comparison. No whitespace trimming: stored and
    /// queried genres must match literally apart from case.
    pub fn genre_matches(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' by {} - Genre: {}, Rating: {}",
            self.title, self.author, self.genre, self.rating
        )
    }
}
