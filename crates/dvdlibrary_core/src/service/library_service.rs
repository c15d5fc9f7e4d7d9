//! Library use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for front-end callers.
//! - Delegate all state and persistence to the repository.
//!
//! # Invariants
//! - The service never bypasses the repository contract.
//! - The service layer remains storage-agnostic.

use crate::model::dvd::Dvd;
use crate::repo::{DvdRepository, RepoResult};

/// Use-case service wrapper for collection CRUD operations.
pub struct LibraryService<R: DvdRepository> {
    repo: R,
}

impl<R: DvdRepository> LibraryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the persisted collection, replacing the in-memory set.
    pub fn load(&mut self) -> RepoResult<()> {
        self.repo.load()
    }

    /// Adds a new record; `None` when the title is already taken.
    pub fn add_dvd(&mut self, dvd: Dvd) -> Option<Dvd> {
        self.repo.add(dvd)
    }

    /// Removes the record with this title; `None` on a miss.
    pub fn remove_dvd(&mut self, title: &str) -> Option<Dvd> {
        self.repo.remove(title)
    }

    /// Replaces an existing record wholesale; `None` when its title is
    /// not in the collection.
    pub fn save_dvd(&mut self, modified: Dvd) -> Option<Dvd> {
        self.repo.save(modified)
    }

    /// Looks up one record by title.
    pub fn get_dvd_by_title(&self, title: &str) -> Option<Dvd> {
        self.repo.find_by_title(title)
    }

    /// Returns every record in the collection.
    pub fn get_all_dvds(&self) -> Vec<Dvd> {
        self.repo.list_all()
    }

    /// Writes the in-memory collection back to its persistence file.
    pub fn persist(&self) -> RepoResult<()> {
        self.repo.persist()
    }
}
