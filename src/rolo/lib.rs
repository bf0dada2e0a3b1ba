//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic personal-data library**: an address book and
//! a notebook with validated fields, search, birthday reporting and
//! durable JSON persistence. There is deliberately no terminal code in
//! this crate — prompting, rendering, completion and command dispatch
//! belong to whatever client embeds it.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Interface (out of tree: CLI, TUI, anything)                │
//! │  - Collects raw strings, renders structured results         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session facade (api.rs)                                    │
//! │  - One owner for both directories + the store               │
//! │  - Raw strings in, typed projections and outcomes out       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Directories (book.rs, notebook.rs)                         │
//! │  - Keyed/ordered collections, search, birthday scan         │
//! │  - Records and fields (contact.rs, note.rs, field.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Validation at the Boundary
//!
//! Every structured field (name, phone, email, birthday) is a newtype
//! that can only be constructed through its validator. Inside the crate
//! a `Phone` *is* ten digits and a `Birthday` *is* a real calendar date;
//! no downstream code re-checks formats, and persisted documents
//! re-validate on load because serde goes through the same constructors.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, never writes to stdout/stderr and never assumes a
//! terminal. The only I/O is the persistence gateway behind the
//! [`store::DataStore`] trait. Diagnostics go through the `log` facade;
//! clients pick a backend.
//!
//! ## Failure Vocabulary
//!
//! Two kinds of "it didn't happen":
//!
//! 1. **Format errors** ([`error::RoloError`]): the input string is
//!    invalid for the field. Recoverable — the interface re-prompts.
//! 2. **Structural outcomes** (bools, [`api::FieldOutcome`], `Option`):
//!    duplicate values, not-found contacts/notes, empty search results.
//!    These are ordinary answers, not errors.
//!
//! ## Testing Strategy
//!
//! 1. **Fields and records** (`field.rs`, `contact.rs`, `note.rs`):
//!    exhaustive unit tests of the validation and mutation rules.
//! 2. **Directories** (`book.rs`, `notebook.rs`): search and the
//!    birthday window against fixed calendar dates.
//! 3. **Storage** (`store/`): round-trips, corrupt-file and version
//!    handling against temp directories.
//! 4. **Session** (`api.rs`): outcome mapping and load/save policy over
//!    `InMemoryStore`; end-to-end persistence in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: the session facade — entry point for all operations
//! - [`field`]: validated field types (Name, Phone, Email, Birthday, Address)
//! - [`contact`]: one contact record and its projection
//! - [`book`]: the contact directory and birthday reporting
//! - [`note`]: one note
//! - [`notebook`]: the note directory and autocomplete words
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: store file locations
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod config;
pub mod contact;
pub mod error;
pub mod field;
pub mod note;
pub mod notebook;
pub mod store;
