#![forbid(unsafe_code)]

pub mod journal;
pub mod repository;

pub use journal::JournalStore;
pub use repository::{InMemorySessionStore, SampleLine, SessionEntry, SessionStore, StorageError};
