//! The note directory: an insertion-ordered collection of [`Note`]s with
//! title/tag search and the autocomplete word list.

use serde::{Deserialize, Serialize};

use crate::note::Note;

/// Ordered collection of notes.
///
/// Titles are soft-unique: nothing structural prevents duplicates, but
/// [`add`](Notebook::add) rejects a title that already exists
/// (case-insensitively) and every title lookup returns the first match,
/// so the interface layer can treat titles as identifiers.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notebook {
    notes: Vec<Note>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Constructs and appends a note. Returns the new note, or `None`
    /// when a note with the same title already exists (the duplicate is
    /// not added — a structural outcome, not an error).
    pub fn add(&mut self, title: &str, content: &str, tags: &[String]) -> Option<&Note> {
        if self.find_by_title(title).is_some() {
            return None;
        }
        self.notes.push(Note::new(title, content, tags));
        self.notes.last()
    }

    /// First note whose title matches case-insensitively and exactly.
    pub fn find_by_title(&self, title: &str) -> Option<&Note> {
        self.notes
            .iter()
            .find(|n| n.title().eq_ignore_ascii_case(title))
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Note> {
        self.notes
            .iter_mut()
            .find(|n| n.title().eq_ignore_ascii_case(title))
    }

    /// Full replace of a note's mutable fields, located by title.
    /// Returns whether a note was found and updated.
    pub fn edit(&mut self, title: &str, new_title: &str, new_content: &str, new_tags: &[String]) -> bool {
        match self.find_by_title_mut(title) {
            Some(note) => {
                note.edit(new_title, new_content, new_tags);
                true
            }
            None => false,
        }
    }

    /// Removes the first note with the given title. Reports whether a
    /// removal occurred.
    pub fn remove(&mut self, title: &str) -> bool {
        match self
            .notes
            .iter()
            .position(|n| n.title().eq_ignore_ascii_case(title))
        {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => false,
        }
    }

    /// All notes whose title contains the term, case-insensitively.
    pub fn search_by_title(&self, term: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.title_matches(term)).collect()
    }

    /// All notes with at least one tag containing the term.
    pub fn search_by_tags(&self, term: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.tag_matches(term)).collect()
    }

    /// The deduped union of all titles and all tags, in first-seen
    /// order. A derived view for interface-level word completion.
    pub fn autocomplete_words(&self) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        let mut push = |word: &str, words: &mut Vec<String>| {
            if !words.iter().any(|w| w == word) {
                words.push(word.to_string());
            }
        };
        for note in &self.notes {
            push(note.title(), &mut words);
        }
        for note in &self.notes {
            for tag in note.tags() {
                push(tag, &mut words);
            }
        }
        words
    }
}

impl<'a> IntoIterator for &'a Notebook {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_rejects_duplicate_titles_case_insensitively() {
        let mut notebook = Notebook::new();
        assert!(notebook.add("Shopping", "milk", &[]).is_some());
        assert!(notebook.add("shopping", "eggs", &[]).is_none());
        assert_eq!(notebook.len(), 1);
        assert_eq!(notebook.find_by_title("SHOPPING").unwrap().content(), "milk");
    }

    #[test]
    fn find_by_title_returns_first_exact_match() {
        let mut notebook = Notebook::new();
        notebook.add("Ideas", "one", &[]);
        notebook.add("Ideas for later", "two", &[]);
        assert_eq!(notebook.find_by_title("ideas").unwrap().content(), "one");
        assert!(notebook.find_by_title("idea").is_none());
    }

    #[test]
    fn edit_replaces_fields_and_reports_misses() {
        let mut notebook = Notebook::new();
        notebook.add("Draft", "v1", &tags(&["wip"]));
        assert!(notebook.edit("draft", "Final", "v2", &tags(&["done"])));
        let note = notebook.find_by_title("Final").unwrap();
        assert_eq!(note.content(), "v2");
        assert_eq!(note.tags(), ["done"]);
        assert!(notebook.find_by_title("Draft").is_none());
        assert!(!notebook.edit("Draft", "x", "y", &[]));
    }

    #[test]
    fn remove_reports_whether_anything_was_removed() {
        let mut notebook = Notebook::new();
        notebook.add("Temp", "", &[]);
        assert!(notebook.remove("temp"));
        assert!(!notebook.remove("temp"));
        assert!(notebook.is_empty());
    }

    #[test]
    fn search_by_title_is_substring_based() {
        let mut notebook = Notebook::new();
        notebook.add("Shopping list", "", &[]);
        notebook.add("Wish list", "", &[]);
        notebook.add("Journal", "", &[]);
        let hits: Vec<_> = notebook
            .search_by_title("LIST")
            .into_iter()
            .map(Note::title)
            .collect();
        assert_eq!(hits, ["Shopping list", "Wish list"]);
    }

    #[test]
    fn search_by_tags_matches_any_tag() {
        let mut notebook = Notebook::new();
        notebook.add("A", "", &tags(&["work", "urgent"]));
        notebook.add("B", "", &tags(&["home"]));
        notebook.add("C", "", &[]);
        let hits: Vec<_> = notebook
            .search_by_tags("ur")
            .into_iter()
            .map(Note::title)
            .collect();
        assert_eq!(hits, ["A"]);
        assert!(notebook.search_by_tags("zzz").is_empty());
    }

    #[test]
    fn autocomplete_words_unions_titles_and_tags() {
        let mut notebook = Notebook::new();
        notebook.add("Shopping", "", &tags(&["errands", "food"]));
        notebook.add("Work log", "", &tags(&["work", "errands"]));
        assert_eq!(
            notebook.autocomplete_words(),
            ["Shopping", "Work log", "errands", "food", "work"]
        );
    }
}
