//! One person's structured data and its mutation operations.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{Address, Birthday, Email, Name, Phone};

/// A single contact record.
///
/// Phones and emails are unique by value with insertion order preserved.
/// The name is fixed at construction; renaming a contact means removing
/// and re-adding it through the [`AddressBook`](crate::book::AddressBook).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    emails: Vec<Email>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    address: Option<Address>,
}

/// Fixed-shape projection of a contact for display.
///
/// Pure view data: phones joined by `"; "`, emails by `", "`, unset
/// fields rendered as `"-"`. The interface layer owns all further
/// formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub phones: String,
    pub birthday: String,
    pub emails: String,
    pub address: String,
}

impl Contact {
    /// Creates an empty record for a raw name. Fails if the name is
    /// blank after trimming.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::parse(name)?,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
            address: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Validates and appends a phone. Returns `false` when the record
    /// already holds the same value (a silent no-op, not an error).
    pub fn add_phone(&mut self, raw: &str) -> Result<bool> {
        let phone = Phone::parse(raw)?;
        if self.phones.contains(&phone) {
            return Ok(false);
        }
        self.phones.push(phone);
        Ok(true)
    }

    /// Removes a phone by exact value match. Returns whether anything
    /// was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces `old` with a validated `new` value in place. `Ok(false)`
    /// means the old value was not found; validation failures on the new
    /// value leave the record untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool> {
        let replacement = Phone::parse(new)?;
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(index) => {
                self.phones[index] = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn add_email(&mut self, raw: &str) -> Result<bool> {
        let email = Email::parse(raw)?;
        if self.emails.contains(&email) {
            return Ok(false);
        }
        self.emails.push(email);
        Ok(true)
    }

    pub fn remove_email(&mut self, raw: &str) -> bool {
        match self.emails.iter().position(|e| e.as_str() == raw) {
            Some(index) => {
                self.emails.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn edit_email(&mut self, old: &str, new: &str) -> Result<bool> {
        let replacement = Email::parse(new)?;
        match self.emails.iter().position(|e| e.as_str() == old) {
            Some(index) => {
                self.emails[index] = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Sets the birthday from raw input. Empty input clears it.
    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        if raw.trim().is_empty() {
            self.birthday = None;
        } else {
            self.birthday = Some(Birthday::parse(raw)?);
        }
        Ok(())
    }

    /// Sets the address. Empty input clears it.
    pub fn set_address(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            self.address = None;
        } else {
            self.address = Some(Address::new(raw));
        }
    }

    /// Produces the display projection. Pure: repeated calls yield
    /// identical output and never mutate the record.
    pub fn get_info(&self) -> ContactInfo {
        let phones = if self.phones.is_empty() {
            "-".to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };
        let emails = if self.emails.is_empty() {
            "-".to_string()
        } else {
            self.emails
                .iter()
                .map(Email::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        ContactInfo {
            name: self.name.as_str().to_string(),
            phones,
            birthday: self
                .birthday
                .map(|b| b.to_string())
                .unwrap_or_else(|| "-".to_string()),
            emails,
            address: self
                .address
                .as_ref()
                .map(|a| a.as_str().to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }

    /// Case-insensitive substring match across name, phones, formatted
    /// birthday, emails and address. True on first hit.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if self.name.as_str().to_lowercase().contains(&term) {
            return true;
        }
        if self.phones.iter().any(|p| p.as_str().contains(&term)) {
            return true;
        }
        if self
            .birthday
            .is_some_and(|b| b.to_string().contains(&term))
        {
            return true;
        }
        if self
            .emails
            .iter()
            .any(|e| e.as_str().to_lowercase().contains(&term))
        {
            return true;
        }
        self.address
            .as_ref()
            .is_some_and(|a| a.as_str().to_lowercase().contains(&term))
    }
}
