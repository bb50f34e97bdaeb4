//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep controller/presentation layers decoupled from storage details.

pub mod author_service;
