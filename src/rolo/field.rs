//! Validated field types.
//!
//! Every structured contact field is its own newtype with a fallible
//! `parse` constructor. A value of one of these types is proof that the
//! raw input passed validation — nothing else in the crate re-checks
//! field formats. Parsing is pure and total: any `&str` maps to either a
//! value or a matchable [`RoloError`] kind, never a panic.
//!
//! Serde round-trips go through the same constructors (`try_from` the
//! string form), so a loaded document re-validates every field.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoloError};

/// Display/storage format for birthdays.
pub const DATE_FMT: &str = "%d.%m.%Y";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));

// Day and month ranges are enforced by the pattern; impossible calendar
// combinations (31.02) are left to the date constructor below.
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.(\d{4})$").expect("valid regex")
});

/// A contact's display name, normalized on construction.
///
/// Normalization trims surrounding whitespace, uppercases the first
/// character and lowercases the rest, so `"  alice SMITH "` and
/// `"Alice smith"` are the same name. The normalized string is also the
/// [`AddressBook`](crate::book::AddressBook) key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match chars.next() {
            None => Err(RoloError::NameFormat),
            Some(first) => {
                let mut normalized: String = first.to_uppercase().collect();
                normalized.push_str(&chars.as_str().to_lowercase());
                Ok(Self(normalized))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number: exactly 10 ASCII digits, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self> {
        let digits = raw.trim();
        if PHONE_RE.is_match(digits) {
            Ok(Self(digits.to_string()))
        } else {
            Err(RoloError::PhoneFormat(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An email address, syntax-checked and normalized.
///
/// Validation delegates to [`email_address::EmailAddress`] (RFC address
/// syntax only — deliverability is never checked). The stored form keeps
/// the local part verbatim and lowercases the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self> {
        let parsed = EmailAddress::from_str(raw.trim())
            .map_err(|e| RoloError::EmailFormat(e.to_string()))?;
        Ok(Self(format!(
            "{}@{}",
            parsed.local_part(),
            parsed.domain().to_lowercase()
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A birthday, parsed only from the literal `DD.MM.YYYY` pattern.
///
/// The pattern bounds day to 01–31 and month to 01–12; the chrono date
/// constructor is the final arbiter, so `31.02.2024` fails here even
/// though it matches the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let caps = DATE_RE
            .captures(trimmed)
            .ok_or_else(|| RoloError::DateFormat(raw.to_string()))?;
        // Unwraps are safe: the pattern only matches digit groups.
        let day: u32 = caps[1].parse().expect("digits");
        let month: u32 = caps[2].parse().expect("digits");
        let year: i32 = caps[3].parse().expect("digits");
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| RoloError::DateFormat(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// A free-form postal address, trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FMT))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! string_serde {
    ($($ty:ident),+) => {$(
        impl TryFrom<String> for $ty {
            type Error = RoloError;

            fn try_from(value: String) -> Result<Self> {
                $ty::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.to_string()
            }
        }
    )+};
}

string_serde!(Name, Phone, Email, Birthday);
