//! Core domain logic for the DVD library.
//! This crate owns the collection store and its flat-file persistence.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::init_logging;
pub use model::dvd::Dvd;
pub use repo::{DvdRepository, FileDvdRepository, PersistenceError, RepoResult};
pub use service::library_service::LibraryService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
