//! # Persistence gateway
//!
//! The two directories are persisted independently behind the
//! [`DataStore`] trait so the core never touches the filesystem
//! directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage — one JSON document per
//!   directory inside a data directory:
//!
//!   ```text
//!   <data_dir>/
//!   ├── addressbook.json    # { "version": 1, "contacts": [...] }
//!   └── notes.json          # { "version": 1, "notes": [...] }
//!   ```
//!
//!   Each document is a versioned envelope, so loading never depends on
//!   internal memory layout. Saves are atomic from the caller's point of
//!   view: the document is written to a sibling temp file and renamed
//!   over the target.
//!
//! - [`memory::InMemoryStore`]: no persistence; fast, isolated tests.
//!
//! ## Failure policy
//!
//! A missing store file is not an error — it loads as an empty
//! collection (first run). Corrupt or version-incompatible documents
//! *are* errors at this layer; the owning
//! [`Session`](crate::api::Session) downgrades them to empty collections
//! so a damaged file never prevents the program from starting.

use crate::book::AddressBook;
use crate::error::Result;
use crate::notebook::Notebook;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving the two directories.
pub trait DataStore {
    /// Load the contact directory. Absent storage yields an empty book.
    fn load_book(&self) -> Result<AddressBook>;

    /// Persist the contact directory, replacing any previous state.
    fn save_book(&mut self, book: &AddressBook) -> Result<()>;

    /// Load the note directory. Absent storage yields an empty notebook.
    fn load_notes(&self) -> Result<Notebook>;

    /// Persist the note directory, replacing any previous state.
    fn save_notes(&mut self, notes: &Notebook) -> Result<()>;
}
