use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;
use crate::notebook::Notebook;

/// In-memory storage for testing and embedding.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: AddressBook,
    notes: Notebook,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_book(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        Ok(())
    }

    fn load_notes(&self) -> Result<Notebook> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        self.notes = notes.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::contact::Contact;

    /// Builder for pre-populated in-memory stores.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            let mut book = self.store.load_book().unwrap();
            let mut contact = Contact::new(name).unwrap();
            contact.add_phone(phone).unwrap();
            book.add(contact);
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_note(mut self, title: &str, content: &str, tags: &[String]) -> Self {
            let mut notes = self.store.load_notes().unwrap();
            notes.add(title, content, tags);
            self.store.save_notes(&notes).unwrap();
            self
        }
    }
}
