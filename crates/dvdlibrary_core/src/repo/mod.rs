//! Store layer: data-access contract and flat-file implementation.
//!
//! # Responsibility
//! - Define the keyed CRUD contract any front end can drive.
//! - Keep the `::`-delimited line format inside the persistence boundary.
//!
//! # Invariants
//! - Lookup misses are `None`, never errors; only `load`/`persist` fail.
//! - `load` either replaces the whole in-memory set or leaves it untouched.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub mod dvd_repo;

pub use dvd_repo::{DvdRepository, FileDvdRepository};

pub type RepoResult<T> = Result<T, PersistenceError>;

/// The single error kind raised at the store boundary.
///
/// Only the two file-touching operations can produce it; the keyed map
/// operations are total over their inputs.
#[derive(Debug)]
pub enum PersistenceError {
    /// The persistence file could not be opened for reading or writing.
    Io {
        context: String,
        source: io::Error,
    },
    /// A persisted record line failed to decode.
    InvalidRecord { line: usize, message: String },
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { context, source } => write!(f, "{context}: {source}"),
            Self::InvalidRecord { line, message } => {
                write!(f, "invalid record on line {line}: {message}")
            }
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidRecord { .. } => None,
        }
    }
}
