//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep front ends decoupled from storage details.

pub mod library_service;
