//! Domain model for the DVD collection.
//!
//! # Responsibility
//! - Define the canonical record shape shared by the store and front ends.
//!
//! # Invariants
//! - Every record is identified by its title.

pub mod dvd;
