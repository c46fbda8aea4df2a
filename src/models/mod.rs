//! Domain model for library events.

mod library_event;

pub use library_event::{Book, LibraryEvent, LibraryEventType};
