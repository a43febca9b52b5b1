use crate::core::{Book, Catalog};

/// Titles of books in the given genre (case-insensitive), in catalog
/// insertion order. Empty when nothing matches.
pub fn titles_in_genre<'a>(catalog: &'a Catalog, genre: &str) -> Vec<&'a str> {
    catalog
        .all()
        .iter()
        .filter(|book| book.genre_matches(genre))
        .map(|book| book.title())
        .collect()
}

/// Best-rated book in the given genre, or `None` when the genre has no
/// books. Ties on rating go to the first-inserted book: the scan only
/// replaces the current best on a strictly greater rating.
pub fn recommend<'a>(catalog: &'a Catalog, genre: &str) -> Option<&'a Book> {
    let mut best: Option<&Book> = None;
    for book in catalog.all().iter().filter(|b| b.genre_matches(genre)) {
        match best {
            Some(current) if book.rating() <= current.rating() => {}
            _ => best = Some(book),
        }
    }
    best
}
