//! A single free-text note with tags and timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One note.
///
/// `created_at` is fixed at construction; `updated_at` bumps on every
/// title/content/tag mutation. Tags are insertion-ordered and unique.
/// The id is stable across edits so clients can track notes through
/// re-renders; lookups in the [`Notebook`](crate::notebook::Notebook)
/// are by title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    title: String,
    content: String,
    #[serde(default)]
    tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: &str, content: &str, tags: &[String]) -> Self {
        let now = Utc::now();
        let mut note = Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        for tag in tags {
            note.push_tag(tag);
        }
        note
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replaces the content and refreshes `updated_at`.
    pub fn update_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.touch();
    }

    /// Appends a tag unless the note already carries it. Returns whether
    /// the tag set changed.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.push_tag(tag) {
            self.touch();
            return true;
        }
        false
    }

    /// Removes a tag by exact value. Returns whether anything changed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(index) => {
                self.tags.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Full in-place replace of title, content and tags. Always
    /// refreshes `updated_at`.
    pub fn edit(&mut self, title: &str, content: &str, tags: &[String]) {
        self.title = title.to_string();
        self.content = content.to_string();
        self.tags.clear();
        for tag in tags {
            self.push_tag(tag);
        }
        self.touch();
    }

    pub fn title_matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    pub fn tag_matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }

    fn push_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
