use crate::core::Book;

/// The in-memory book collection for one session. Insertion order is
/// preserved and observable through the queries (first maximum wins on
/// rating ties). Books are only ever appended; there is no delete.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, book: Book) {
        tracing::debug!("Appending book: {}", book.title());
        self.books.push(book);
    }

    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
