//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate provider, cache and repository calls into use-case APIs.
//! - Keep UI collaborators decoupled from storage and transport details.

pub mod day_info;
pub mod holiday_cache;
pub mod note_service;
