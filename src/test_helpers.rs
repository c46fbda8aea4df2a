//! A set of helpers for testing

use crate::models::{Book, LibraryEvent};

/// A builder for creating `LibraryEvent` instances for testing.
#[derive(Debug, Default, Clone)]
pub struct LibraryEventBuilder {
    library_event_id: Option<i32>,
    book_id: Option<i32>,
    book_name: Option<String>,
    book_author: Option<String>,
}

impl LibraryEventBuilder {
    /// Creates a new `LibraryEventBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event identifier, turning the event into an update.
    pub fn library_event_id(mut self, id: i32) -> Self {
        self.library_event_id = Some(id);
        self
    }

    /// Sets the book identifier.
    pub fn book_id(mut self, id: i32) -> Self {
        self.book_id = Some(id);
        self
    }

    /// Sets the book title.
    pub fn book_name(mut self, name: &str) -> Self {
        self.book_name = Some(name.to_string());
        self
    }

    /// Sets the book author.
    pub fn book_author(mut self, author: &str) -> Self {
        self.book_author = Some(author.to_string());
        self
    }

    /// Builds the `LibraryEvent` with the provided or default values.
    pub fn build(self) -> LibraryEvent {
        LibraryEvent {
            library_event_id: self.library_event_id,
            book: Book {
                book_id: self.book_id.unwrap_or(123),
                book_name: self.book_name.unwrap_or_else(|| "War and Peace".to_string()),
                book_author: self.book_author.unwrap_or_else(|| "L.Tolstoy".to_string()),
            },
        }
    }
}
