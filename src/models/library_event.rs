use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    ser::SerializeStruct,
};

/// The kind of change a library event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryEventType {
    /// A book entering the catalogue for the first time.
    #[serde(rename = "NEW")]
    New,

    /// A change to a book that was published before.
    #[serde(rename = "UPDATE")]
    Update,
}

/// The book payload nested inside a library event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Book {
    /// Catalogue identifier of the book.
    pub book_id: i32,

    /// Title of the book.
    pub book_name: String,

    /// Author of the book.
    pub book_author: String,
}

/// A single library event submitted for publication.
///
/// The event type is never stored on the event: it is recomputed from the
/// presence of `library_event_id` every time the event is serialized, so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEvent {
    /// Identifier of the event; present for updates, absent for new events.
    pub library_event_id: Option<i32>,

    /// The book the event is about.
    pub book: Book,
}

impl LibraryEvent {
    /// Returns the derived event type: `New` while the event has no
    /// identifier, `Update` once it has one.
    pub fn event_type(&self) -> LibraryEventType {
        match self.library_event_id {
            None => LibraryEventType::New,
            Some(_) => LibraryEventType::Update,
        }
    }
}

// Field order is part of the wire contract: consumers compare the payload
// byte for byte, so `libraryEventType` must be emitted first.
impl Serialize for LibraryEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("LibraryEvent", 3)?;
        state.serialize_field("libraryEventType", &self.event_type())?;
        state.serialize_field("libraryEventId", &self.library_event_id)?;
        state.serialize_field("book", &self.book)?;
        state.end()
    }
}

/// Wire-side shadow of `LibraryEvent`. A discriminator present in the input
/// is accepted but discarded; it is recomputed from the identifier.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibraryEventWire {
    #[serde(default)]
    #[allow(dead_code)]
    library_event_type: Option<LibraryEventType>,
    #[serde(default)]
    library_event_id: Option<i32>,
    book: Book,
}

impl<'de> Deserialize<'de> for LibraryEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = LibraryEventWire::deserialize(deserializer)?;
        Ok(LibraryEvent { library_event_id: wire.library_event_id, book: wire.book })
    }
}
