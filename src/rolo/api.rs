//! # Session facade
//!
//! [`Session`] is the single entry point for all rolo operations,
//! regardless of the interface driving it. It owns both directories and
//! the store for one run of the program, mirroring the lifecycle the
//! interface layer needs: load at start, mutate through the command
//! surface, save on demand, final save on [`close`](Session::close).
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Normalizes inputs**: every method takes the raw strings the
//!   interface collected and runs them through the field validators.
//! - **Returns structured types**: projections, note references,
//!   outcome enums and booleans — never formatted text.
//! - **Owns load-failure policy**: an absent or unreadable store becomes
//!   an empty directory with a warning, never a startup failure.
//!
//! ## What the facade does NOT do
//!
//! - **I/O beyond the store**: no stdout/stderr, no terminal
//!   assumptions, no process exit.
//! - **Presentation**: rendering, coloring, prompting and command-word
//!   parsing belong to the interface layer.
//!
//! ## Multi-field atomicity
//!
//! [`add_contact`](Session::add_contact) gathers a whole contact from
//! raw field strings. All fields are validated **before** the first
//! mutation, so an invalid value (or an interrupted prompt sequence that
//! never reaches the call) leaves the directory exactly as it was.
//!
//! ## Generic over DataStore
//!
//! `Session<S: DataStore>` works against any storage backend:
//! production uses `Session<FileStore>`, tests use
//! `Session<InMemoryStore>`.

use log::warn;

use crate::book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use crate::contact::{Contact, ContactInfo};
use crate::error::Result;
use crate::note::Note;
use crate::notebook::Notebook;
use crate::store::DataStore;

/// Outcome of a phone/email/birthday/address operation addressed to a
/// named contact. Structural conditions, not errors: the interface
/// renders them, nothing unwinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The operation changed the record.
    Done,
    /// Add: the record already holds this value; nothing changed.
    Duplicate,
    /// No contact under that name.
    ContactNotFound,
    /// Edit/remove: the addressed value is not on the record.
    ValueNotFound,
}

/// One run's worth of application state: both directories plus the
/// store they persist to.
pub struct Session<S: DataStore> {
    store: S,
    book: AddressBook,
    notes: Notebook,
}

impl<S: DataStore> Session<S> {
    /// Loads both directories from the store. Each one independently
    /// falls back to empty when its blob is absent or unreadable — a
    /// damaged store is reported, never fatal.
    pub fn load(store: S) -> Self {
        let book = store.load_book().unwrap_or_else(|err| {
            warn!("address book could not be loaded, starting empty: {err}");
            AddressBook::new()
        });
        let notes = store.load_notes().unwrap_or_else(|err| {
            warn!("notes could not be loaded, starting empty: {err}");
            Notebook::new()
        });
        Self { store, book, notes }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn notes(&self) -> &Notebook {
        &self.notes
    }

    /// Persists both directories. On failure the in-memory state is
    /// untouched and the error surfaces to the caller.
    pub fn save(&mut self) -> Result<()> {
        self.store.save_book(&self.book)?;
        self.store.save_notes(&self.notes)?;
        Ok(())
    }

    /// The exit path: final save of both directories.
    pub fn close(mut self) -> Result<()> {
        self.save()
    }

    // --- Contact surface ---

    /// Creates a contact from raw field strings and stores it,
    /// replacing any existing entry under the same normalized name.
    /// Atomic: every field validates before the directory is touched.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
        birthday: Option<&str>,
        address: Option<&str>,
    ) -> Result<ContactInfo> {
        let mut contact = Contact::new(name)?;
        if let Some(phone) = phone {
            contact.add_phone(phone)?;
        }
        if let Some(email) = email {
            contact.add_email(email)?;
        }
        if let Some(birthday) = birthday {
            contact.set_birthday(birthday)?;
        }
        if let Some(address) = address {
            contact.set_address(address);
        }
        let info = contact.get_info();
        self.book.add(contact);
        Ok(info)
    }

    /// Removes a contact by name. Returns whether anything was removed.
    pub fn remove_contact(&mut self, name: &str) -> bool {
        self.book.delete(name)
    }

    /// The display projection for one contact.
    pub fn contact(&self, name: &str) -> Option<ContactInfo> {
        self.book.find(name).map(Contact::get_info)
    }

    /// Display projections for every contact, in directory order.
    pub fn contacts(&self) -> Vec<ContactInfo> {
        self.book.iter().map(Contact::get_info).collect()
    }

    /// Free-text search across all contact fields.
    pub fn search_contacts(&self, term: &str) -> Vec<ContactInfo> {
        self.book
            .search(term)
            .into_iter()
            .map(Contact::get_info)
            .collect()
    }

    /// Upcoming birthdays within `window` days of today (default 7).
    /// Window range validation belongs to the collecting layer; see
    /// [`parse_window`](crate::book::parse_window).
    pub fn upcoming_birthdays(&self, window: Option<u32>) -> Vec<UpcomingBirthday> {
        self.book
            .upcoming_birthdays(window.unwrap_or(DEFAULT_WINDOW_DAYS))
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<FieldOutcome> {
        match self.book.find_mut(name) {
            Some(contact) => Ok(if contact.add_phone(phone)? {
                FieldOutcome::Done
            } else {
                FieldOutcome::Duplicate
            }),
            None => Ok(FieldOutcome::ContactNotFound),
        }
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<FieldOutcome> {
        match self.book.find_mut(name) {
            Some(contact) => Ok(if contact.edit_phone(old, new)? {
                FieldOutcome::Done
            } else {
                FieldOutcome::ValueNotFound
            }),
            None => Ok(FieldOutcome::ContactNotFound),
        }
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> FieldOutcome {
        match self.book.find_mut(name) {
            Some(contact) => {
                if contact.remove_phone(phone) {
                    FieldOutcome::Done
                } else {
                    FieldOutcome::ValueNotFound
                }
            }
            None => FieldOutcome::ContactNotFound,
        }
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<FieldOutcome> {
        match self.book.find_mut(name) {
            Some(contact) => Ok(if contact.add_email(email)? {
                FieldOutcome::Done
            } else {
                FieldOutcome::Duplicate
            }),
            None => Ok(FieldOutcome::ContactNotFound),
        }
    }

    pub fn edit_email(&mut self, name: &str, old: &str, new: &str) -> Result<FieldOutcome> {
        match self.book.find_mut(name) {
            Some(contact) => Ok(if contact.edit_email(old, new)? {
                FieldOutcome::Done
            } else {
                FieldOutcome::ValueNotFound
            }),
            None => Ok(FieldOutcome::ContactNotFound),
        }
    }

    pub fn remove_email(&mut self, name: &str, email: &str) -> FieldOutcome {
        match self.book.find_mut(name) {
            Some(contact) => {
                if contact.remove_email(email) {
                    FieldOutcome::Done
                } else {
                    FieldOutcome::ValueNotFound
                }
            }
            None => FieldOutcome::ContactNotFound,
        }
    }

    /// Sets or clears (empty input) a contact's birthday.
    pub fn set_birthday(&mut self, name: &str, raw: &str) -> Result<FieldOutcome> {
        match self.book.find_mut(name) {
            Some(contact) => {
                contact.set_birthday(raw)?;
                Ok(FieldOutcome::Done)
            }
            None => Ok(FieldOutcome::ContactNotFound),
        }
    }

    /// Sets or clears (empty input) a contact's address.
    pub fn set_address(&mut self, name: &str, raw: &str) -> FieldOutcome {
        match self.book.find_mut(name) {
            Some(contact) => {
                contact.set_address(raw);
                FieldOutcome::Done
            }
            None => FieldOutcome::ContactNotFound,
        }
    }

    // --- Note surface ---

    /// Adds a note; `None` means the title is already taken.
    pub fn add_note(&mut self, title: &str, content: &str, tags: &[String]) -> Option<&Note> {
        self.notes.add(title, content, tags)
    }

    /// Full replace of a note's title/content/tags, located by title.
    pub fn edit_note(
        &mut self,
        title: &str,
        new_title: &str,
        new_content: &str,
        new_tags: &[String],
    ) -> bool {
        self.notes.edit(title, new_title, new_content, new_tags)
    }

    pub fn remove_note(&mut self, title: &str) -> bool {
        self.notes.remove(title)
    }

    pub fn note(&self, title: &str) -> Option<&Note> {
        self.notes.find_by_title(title)
    }

    pub fn search_notes_by_title(&self, term: &str) -> Vec<&Note> {
        self.notes.search_by_title(term)
    }

    pub fn search_notes_by_tags(&self, term: &str) -> Vec<&Note> {
        self.notes.search_by_tags(term)
    }

    /// Word list for interface-side completion (note titles and tags).
    pub fn note_autocomplete_words(&self) -> Vec<String> {
        self.notes.autocomplete_words()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoloError;
    use crate::store::memory::InMemoryStore;

    fn session() -> Session<InMemoryStore> {
        Session::load(InMemoryStore::new())
    }

    struct BrokenStore;

    impl DataStore for BrokenStore {
        fn load_book(&self) -> Result<AddressBook> {
            Err(RoloError::Store("book blob is damaged".to_string()))
        }

        fn save_book(&mut self, _book: &AddressBook) -> Result<()> {
            Err(RoloError::Store("disk full".to_string()))
        }

        fn load_notes(&self) -> Result<Notebook> {
            Err(RoloError::Store("notes blob is damaged".to_string()))
        }

        fn save_notes(&mut self, _notes: &Notebook) -> Result<()> {
            Err(RoloError::Store("disk full".to_string()))
        }
    }

    #[test]
    fn add_contact_is_atomic_on_invalid_fields() {
        let mut session = session();
        let err = session
            .add_contact("Alice", Some("5551234567"), Some("not-an-email"), None, None)
            .unwrap_err();
        assert!(matches!(err, RoloError::EmailFormat(_)));
        assert!(session.book().is_empty(), "failed add must not commit");
    }

    #[test]
    fn add_contact_overwrites_same_name() {
        let mut session = session();
        session
            .add_contact("Bob", Some("5551234567"), None, None, None)
            .unwrap();
        session
            .add_contact("Bob", Some("5559876543"), None, None, None)
            .unwrap();

        assert_eq!(session.book().len(), 1);
        assert_eq!(session.contact("bob").unwrap().phones, "5559876543");
    }

    #[test]
    fn field_operations_report_structural_outcomes() {
        let mut session = session();
        session
            .add_contact("Alice", Some("5551234567"), None, None, None)
            .unwrap();

        assert_eq!(
            session.add_phone("Alice", "5551234567").unwrap(),
            FieldOutcome::Duplicate
        );
        assert_eq!(
            session.add_phone("Nobody", "5550000000").unwrap(),
            FieldOutcome::ContactNotFound
        );
        assert_eq!(
            session.edit_phone("Alice", "1234567890", "5550000000").unwrap(),
            FieldOutcome::ValueNotFound
        );
        assert_eq!(
            session.edit_phone("Alice", "5551234567", "5550000000").unwrap(),
            FieldOutcome::Done
        );
        assert_eq!(
            session.remove_phone("Alice", "5550000000"),
            FieldOutcome::Done
        );
        assert_eq!(
            session.remove_phone("Alice", "5550000000"),
            FieldOutcome::ValueNotFound
        );
    }

    #[test]
    fn birthday_and_address_clear_on_empty_input() {
        let mut session = session();
        session
            .add_contact("Alice", None, None, Some("15.06.1990"), Some("1 Main St"))
            .unwrap();

        session.set_birthday("Alice", "").unwrap();
        session.set_address("Alice", "");
        let info = session.contact("Alice").unwrap();
        assert_eq!(info.birthday, "-");
        assert_eq!(info.address, "-");

        assert_eq!(
            session.set_birthday("Nobody", "15.06.1990").unwrap(),
            FieldOutcome::ContactNotFound
        );
    }

    #[test]
    fn search_contacts_spans_all_fields() {
        let mut session = session();
        session
            .add_contact("Alice", Some("5551234567"), None, None, None)
            .unwrap();
        session
            .add_contact("Bob", None, Some("bob@example.com"), None, None)
            .unwrap();

        assert_eq!(session.search_contacts("555").len(), 1);
        assert_eq!(session.search_contacts("EXAMPLE").len(), 1);
        assert!(session.search_contacts("zzz").is_empty());
    }

    #[test]
    fn note_surface_delegates_to_the_notebook() {
        let mut session = session();
        assert!(session
            .add_note("Shopping", "milk", &["errands".to_string()])
            .is_some());
        assert!(session.add_note("shopping", "dup", &[]).is_none());
        assert!(session.edit_note("Shopping", "Groceries", "milk, eggs", &[]));
        assert!(session.note("groceries").is_some());
        assert_eq!(session.search_notes_by_title("groc").len(), 1);
        assert!(session.remove_note("Groceries"));
        assert!(!session.remove_note("Groceries"));
    }

    #[test]
    fn save_and_reload_round_trips_both_directories() {
        let mut session = session();
        session
            .add_contact("Alice", Some("5551234567"), None, None, None)
            .unwrap();
        session.add_note("Shopping", "milk", &[]);
        session.save().unwrap();

        // Steal the store back by loading a fresh session from it.
        let Session { store, .. } = session;
        let reloaded = Session::load(store);
        assert_eq!(reloaded.book().len(), 1);
        assert_eq!(reloaded.notes().len(), 1);
    }

    #[test]
    fn damaged_store_loads_as_empty_session() {
        let session = Session::load(BrokenStore);
        assert!(session.book().is_empty());
        assert!(session.notes().is_empty());
    }

    #[test]
    fn failed_save_keeps_in_memory_state() {
        let mut session = Session::load(BrokenStore);
        session
            .add_contact("Alice", None, None, None, None)
            .unwrap();
        assert!(session.save().is_err());
        assert_eq!(session.book().len(), 1);
    }
}
