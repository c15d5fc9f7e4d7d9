//! DVD store contract and flat-file implementation.
//!
//! # Responsibility
//! - Provide stable keyed CRUD over the in-memory collection.
//! - Own the `::`-delimited encode/decode for the persistence file.
//!
//! # Invariants
//! - The map never holds two records with the same title.
//! - `load` swaps in a fully parsed replacement set or nothing at all.
//! - `persist` rewrites the whole file from the current set.

use crate::model::dvd::Dvd;
use crate::repo::{PersistenceError, RepoResult};
use chrono::{Datelike, NaiveDate};
use log::{error, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

const DELIMITER: &str = "::";

/// Data-access contract for the DVD collection.
///
/// Lookup misses are expected outcomes and come back as `None`; only the
/// two persistence operations can fail.
pub trait DvdRepository {
    /// Replaces the in-memory set with the persisted one.
    ///
    /// # Errors
    /// - The persistence file cannot be opened.
    /// - A record line fails to decode (field count, integer fields, date).
    ///
    /// On error the previous in-memory set is left untouched.
    fn load(&mut self) -> RepoResult<()>;

    /// Inserts `dvd` unless its title is already taken.
    ///
    /// Returns the inserted record, or `None` on a title collision. Never
    /// overwrites.
    fn add(&mut self, dvd: Dvd) -> Option<Dvd>;

    /// Removes and returns the record with this title, `None` on a miss.
    fn remove(&mut self, title: &str) -> Option<Dvd>;

    /// Replaces the record whose title matches `modified`, wholesale.
    ///
    /// Returns the stored record, or `None` (and no change) when no record
    /// carries that title. The title itself cannot change on this path.
    fn save(&mut self, modified: Dvd) -> Option<Dvd>;

    /// Returns the record with this title, `None` when absent.
    fn find_by_title(&self, title: &str) -> Option<Dvd>;

    /// Returns every record, sorted by title.
    fn list_all(&self) -> Vec<Dvd>;

    /// Rewrites the persistence file from the in-memory set.
    ///
    /// # Errors
    /// - The persistence file cannot be opened for writing.
    fn persist(&self) -> RepoResult<()>;
}

/// Flat-file backed store: a title-keyed map plus the line codec.
///
/// The backing file is one record per line in the format
/// `title::year::month::day::mpaaRating::directorName::studio::rating::note`.
/// The note field may be absent (8-field line) and defaults to empty. There
/// is no escaping for the delimiter; a field containing `::` will not
/// survive a reload intact.
pub struct FileDvdRepository {
    path: PathBuf,
    dvds: BTreeMap<String, Dvd>,
}

impl FileDvdRepository {
    /// Creates an empty store backed by the given file path.
    ///
    /// The file is not touched until `load` or `persist` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dvds: BTreeMap::new(),
        }
    }
}

impl DvdRepository for FileDvdRepository {
    fn load(&mut self) -> RepoResult<()> {
        info!(
            "event=library_load module=repo status=start path={}",
            self.path.display()
        );

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(source) => {
                error!(
                    "event=library_load module=repo status=error path={} error={}",
                    self.path.display(),
                    source
                );
                return Err(PersistenceError::Io {
                    context: format!("unable to load dvds from `{}`", self.path.display()),
                    source,
                });
            }
        };

        // Parse into a fresh map so a malformed line partway through the
        // file cannot leave the live set half-replaced.
        let mut parsed = BTreeMap::new();
        for (index, raw) in text.lines().enumerate() {
            if raw.is_empty() {
                continue;
            }
            let dvd = match parse_dvd_line(raw, index + 1) {
                Ok(dvd) => dvd,
                Err(err) => {
                    error!(
                        "event=library_load module=repo status=error line={} error={}",
                        index + 1,
                        err
                    );
                    return Err(err);
                }
            };
            parsed.insert(dvd.title().to_string(), dvd);
        }

        self.dvds = parsed;
        info!(
            "event=library_load module=repo status=ok records={}",
            self.dvds.len()
        );
        Ok(())
    }

    fn add(&mut self, dvd: Dvd) -> Option<Dvd> {
        if self.dvds.contains_key(dvd.title()) {
            return None;
        }
        self.dvds.insert(dvd.title().to_string(), dvd.clone());
        Some(dvd)
    }

    fn remove(&mut self, title: &str) -> Option<Dvd> {
        self.dvds.remove(title)
    }

    fn save(&mut self, modified: Dvd) -> Option<Dvd> {
        if !self.dvds.contains_key(modified.title()) {
            return None;
        }
        self.dvds.insert(modified.title().to_string(), modified.clone());
        Some(modified)
    }

    fn find_by_title(&self, title: &str) -> Option<Dvd> {
        self.dvds.get(title).cloned()
    }

    fn list_all(&self) -> Vec<Dvd> {
        self.dvds.values().cloned().collect()
    }

    fn persist(&self) -> RepoResult<()> {
        info!(
            "event=library_persist module=repo status=start path={} records={}",
            self.path.display(),
            self.dvds.len()
        );

        let mut contents = String::new();
        for dvd in self.dvds.values() {
            contents.push_str(&encode_dvd_line(dvd));
            contents.push('\n');
        }

        if let Err(source) = fs::write(&self.path, contents) {
            error!(
                "event=library_persist module=repo status=error path={} error={}",
                self.path.display(),
                source
            );
            return Err(PersistenceError::Io {
                context: format!("unable to save dvds to `{}`", self.path.display()),
                source,
            });
        }

        info!("event=library_persist module=repo status=ok");
        Ok(())
    }
}

fn encode_dvd_line(dvd: &Dvd) -> String {
    // All 9 fields are always written; an empty note leaves a trailing
    // delimiter, which the reader treats the same as a missing note field.
    format!(
        "{}::{}::{}::{}::{}::{}::{}::{}::{}",
        dvd.title(),
        dvd.release_date.year(),
        dvd.release_date.month(),
        dvd.release_date.day(),
        dvd.mpaa_rating,
        dvd.director_name,
        dvd.studio,
        dvd.rating,
        dvd.note
    )
}

fn parse_dvd_line(raw: &str, line: usize) -> RepoResult<Dvd> {
    let fields: Vec<&str> = raw.split(DELIMITER).collect();
    if !(8..=9).contains(&fields.len()) {
        return Err(PersistenceError::InvalidRecord {
            line,
            message: format!("expected 8 or 9 fields, found {}", fields.len()),
        });
    }

    let year: i32 = parse_int_field(fields[1], "year", line)?;
    let month: u32 = parse_int_field(fields[2], "month", line)?;
    let day: u32 = parse_int_field(fields[3], "day", line)?;
    let release_date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| PersistenceError::InvalidRecord {
            line,
            message: format!("`{year}-{month}-{day}` is not a valid calendar date"),
        })?;

    let mut dvd = Dvd::new(fields[0], release_date);
    dvd.mpaa_rating = fields[4].to_string();
    dvd.director_name = fields[5].to_string();
    dvd.studio = fields[6].to_string();
    dvd.rating = parse_int_field(fields[7], "rating", line)?;
    // Notes may be left off the line entirely; a missing 9th field and an
    // empty 9th field both read back as an empty note.
    dvd.note = fields.get(8).copied().unwrap_or("").to_string();
    Ok(dvd)
}

fn parse_int_field<T: FromStr>(value: &str, name: &str, line: usize) -> RepoResult<T> {
    value.parse().map_err(|_| PersistenceError::InvalidRecord {
        line,
        message: format!("`{value}` is not a valid {name}"),
    })
}
