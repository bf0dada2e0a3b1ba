//! The contact directory: a keyed, insertion-ordered collection of
//! [`Contact`] records plus the query helpers that operate on it
//! (free-text search, upcoming-birthday scan).

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::error::{Result, RoloError};
use crate::field::Name;

/// Window applied when the caller does not supply one.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;
/// Smallest window the collecting layer may accept.
pub const WINDOW_MIN_DAYS: u32 = 7;
/// Largest window the collecting layer may accept.
pub const WINDOW_MAX_DAYS: u32 = 365;

/// One entry of the upcoming-birthday report.
///
/// `congratulation_date` is the birthday occurrence rolled forward past
/// the weekend: Saturday moves two days, Sunday one, so greetings land
/// on the following Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: NaiveDate,
    pub congratulation_date: NaiveDate,
}

/// Mapping from normalized name to contact record.
///
/// One entry per unique normalized name; inserting a second record under
/// an existing name replaces the first (the directory's de-duplication
/// policy). Iteration order is insertion order, stable within a run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Stores a record under its normalized name. When an entry with the
    /// same name exists it is replaced in place (position retained) and
    /// the previous record is returned.
    pub fn add(&mut self, contact: Contact) -> Option<Contact> {
        match self.contacts.iter().position(|c| c.name() == contact.name()) {
            Some(index) => Some(std::mem::replace(&mut self.contacts[index], contact)),
            None => {
                self.contacts.push(contact);
                None
            }
        }
    }

    /// Looks up a record, normalizing the input the same way insertion
    /// does: `find("  alice ")` and `find("Alice")` hit the same entry.
    /// Unparseable names simply find nothing.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        let key = Name::parse(name).ok()?;
        self.contacts.iter().find(|c| *c.name() == key)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        let key = Name::parse(name).ok()?;
        self.contacts.iter_mut().find(|c| *c.name() == key)
    }

    /// Removes a record by (normalized) name. Returns whether anything
    /// was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let Ok(key) = Name::parse(name) else {
            return false;
        };
        match self.contacts.iter().position(|c| *c.name() == key) {
            Some(index) => {
                self.contacts.remove(index);
                true
            }
            None => false,
        }
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Every record matching the term (case-insensitive substring over
    /// all fields), in directory order.
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.matches(term)).collect()
    }

    /// Upcoming-birthday scan relative to the local calendar date.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_on(Local::now().date_naive(), window_days)
    }

    /// Upcoming-birthday scan relative to an explicit `today`.
    ///
    /// For every record with a birthday set, takes this year's occurrence
    /// of (month, day), rolls it to next year when it has already passed,
    /// and keeps it when `0 <= days_until < window_days`. Callers are
    /// expected to validate the window via [`parse_window`]; the scan
    /// itself accepts any value.
    pub fn upcoming_birthdays_on(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for contact in &self.contacts {
            let Some(birthday) = contact.birthday() else {
                continue;
            };
            let birthday = birthday.date();

            let mut occurrence = occurrence_in_year(birthday, today.year());
            if occurrence < today {
                occurrence = occurrence_in_year(birthday, today.year() + 1);
            }

            let days_until = (occurrence - today).num_days();
            if days_until < i64::from(window_days) {
                upcoming.push(UpcomingBirthday {
                    name: contact.name().as_str().to_string(),
                    birthday,
                    congratulation_date: roll_off_weekend(occurrence),
                });
            }
        }
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

/// Parses a birthday window collected from the interface layer.
///
/// Accepts a whole number of days in `[WINDOW_MIN_DAYS, WINDOW_MAX_DAYS]`;
/// anything else is a `RangeFormat` error. The scan itself never
/// validates — range policy lives here, at the collection edge.
pub fn parse_window(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|days| (WINDOW_MIN_DAYS..=WINDOW_MAX_DAYS).contains(days))
        .ok_or_else(|| RoloError::RangeFormat(raw.to_string()))
}

/// This year's occurrence of a birthday. A 29 February birthday falls on
/// 1 March in non-leap years.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 3, 1).expect("1 March exists in every year")
        })
}

fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift))
        .expect("congratulation date within calendar range")
}
