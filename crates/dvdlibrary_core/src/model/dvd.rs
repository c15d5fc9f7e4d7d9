//! DVD domain model.
//!
//! # Responsibility
//! - Define the canonical record for one DVD in the collection.
//!
//! # Invariants
//! - `title` is the unique key and never changes after construction.
//! - `release_date` is a valid calendar date by construction.

use chrono::NaiveDate;

/// Canonical record for one DVD, identified by its title.
///
/// This model is intentionally a plain data holder. The user-rating range
/// and the MPAA rating enumeration are front-end concerns; the store only
/// re-checks what its line format forces it to (dates and integer fields).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dvd {
    /// Unique key within the collection. Editing a record replaces every
    /// field except this one, so there is no setter.
    title: String,
    /// Release date. Always a valid calendar date.
    pub release_date: NaiveDate,
    /// MPAA rating text. The {G, PG, PG-13, R, NC-17} enumeration is
    /// enforced by the front end, not the store.
    pub mpaa_rating: String,
    pub director_name: String,
    /// Studio(s), free-form.
    pub studio: String,
    /// User rating. Expected range 0-10, enforced by the caller.
    pub rating: i32,
    /// Short free-form note. May be empty.
    pub note: String,
}

impl Dvd {
    /// Creates a record with the given key and release date; every other
    /// field starts empty or zero and is filled in by the caller.
    pub fn new(title: impl Into<String>, release_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            release_date,
            mpaa_rating: String::new(),
            director_name: String::new(),
            studio: String::new(),
            rating: 0,
            note: String::new(),
        }
    }

    /// Unique key within the collection.
    pub fn title(&self) -> &str {
        &self.title
    }
}
