use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::DataStore;
use crate::book::AddressBook;
use crate::config::{ADDRESSBOOK_FILENAME, NOTES_FILENAME};
use crate::error::{Result, RoloError};
use crate::notebook::Notebook;

/// Current on-disk document version. Bumped when the envelope layout
/// changes incompatibly; older readers treat unknown versions as
/// unreadable rather than guessing.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct BookDocument {
    version: u32,
    contacts: AddressBook,
}

#[derive(Serialize, Deserialize)]
struct NotesDocument {
    version: u32,
    notes: Notebook,
}

/// File-backed store keeping both directories under one data directory.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn book_path(&self) -> PathBuf {
        self.data_dir.join(ADDRESSBOOK_FILENAME)
    }

    fn notes_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_FILENAME)
    }

    fn load_document<D: DeserializeOwned>(&self, path: &Path) -> Result<Option<D>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RoloError::Io)?;
        let document = serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(Some(document))
    }

    /// Write-then-rename so a crash mid-save never leaves a partial
    /// document where the next load would find it.
    fn save_document<D: Serialize>(&self, path: &Path, document: &D) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(RoloError::Io)?;
        let content = serde_json::to_string_pretty(document).map_err(RoloError::Serialization)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(RoloError::Io)?;
        fs::rename(&tmp_path, path).map_err(RoloError::Io)?;
        Ok(())
    }

    fn check_version(path: &Path, version: u32) -> Result<()> {
        if version != FORMAT_VERSION {
            return Err(RoloError::Store(format!(
                "{} has unsupported format version {} (expected {})",
                path.display(),
                version,
                FORMAT_VERSION
            )));
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_book(&self) -> Result<AddressBook> {
        let path = self.book_path();
        match self.load_document::<BookDocument>(&path)? {
            Some(document) => {
                Self::check_version(&path, document.version)?;
                debug!("loaded {} contacts from {}", document.contacts.len(), path.display());
                Ok(document.contacts)
            }
            None => Ok(AddressBook::new()),
        }
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        let path = self.book_path();
        let document = BookDocument {
            version: FORMAT_VERSION,
            contacts: book.clone(),
        };
        self.save_document(&path, &document)?;
        debug!("saved {} contacts to {}", book.len(), path.display());
        Ok(())
    }

    fn load_notes(&self) -> Result<Notebook> {
        let path = self.notes_path();
        match self.load_document::<NotesDocument>(&path)? {
            Some(document) => {
                Self::check_version(&path, document.version)?;
                debug!("loaded {} notes from {}", document.notes.len(), path.display());
                Ok(document.notes)
            }
            None => Ok(Notebook::new()),
        }
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        let path = self.notes_path();
        let document = NotesDocument {
            version: FORMAT_VERSION,
            notes: notes.clone(),
        };
        self.save_document(&path, &document)?;
        debug!("saved {} notes to {}", notes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn missing_files_load_as_empty_collections() {
        let (_dir, store) = store();
        assert!(store.load_book().unwrap().is_empty());
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn book_round_trips_through_disk() {
        let (_dir, mut store) = store();

        let mut book = AddressBook::new();
        let mut contact = Contact::new("Alice").unwrap();
        contact.add_phone("5551234567").unwrap();
        contact.add_email("alice@example.com").unwrap();
        contact.set_birthday("15.06.1990").unwrap();
        contact.set_address("1 Main St");
        book.add(contact);
        book.add(Contact::new("Bob").unwrap());

        store.save_book(&book).unwrap();
        let loaded = store.load_book().unwrap();

        assert_eq!(loaded.len(), 2);
        let alice = loaded.find("Alice").unwrap();
        assert_eq!(alice, book.find("Alice").unwrap());
        let bob = loaded.find("Bob").unwrap();
        assert!(bob.phones().is_empty());
        assert!(bob.birthday().is_none());
    }

    #[test]
    fn notes_round_trip_through_disk() {
        let (_dir, mut store) = store();

        let mut notebook = Notebook::new();
        notebook.add("Shopping", "milk", &["errands".to_string()]);
        store.save_notes(&notebook).unwrap();

        let loaded = store.load_notes().unwrap();
        assert_eq!(loaded.len(), 1);
        let note = loaded.find_by_title("Shopping").unwrap();
        assert_eq!(note.content(), "milk");
        assert_eq!(note.tags(), ["errands"]);
        assert_eq!(note.id, notebook.find_by_title("Shopping").unwrap().id);
    }

    #[test]
    fn corrupt_document_is_an_error_at_this_layer() {
        let (dir, store) = store();
        fs::write(dir.path().join(ADDRESSBOOK_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            store.load_book(),
            Err(RoloError::Serialization(_))
        ));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let (dir, store) = store();
        fs::write(
            dir.path().join(NOTES_FILENAME),
            r#"{"version": 99, "notes": []}"#,
        )
        .unwrap();
        assert!(matches!(store.load_notes(), Err(RoloError::Store(_))));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let (dir, mut store) = store();
        store.save_book(&AddressBook::new()).unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left: {leftovers:?}");
    }

    #[test]
    fn save_overwrites_previous_state() {
        let (_dir, mut store) = store();
        let mut book = AddressBook::new();
        book.add(Contact::new("Alice").unwrap());
        store.save_book(&book).unwrap();

        store.save_book(&AddressBook::new()).unwrap();
        assert!(store.load_book().unwrap().is_empty());
    }
}
