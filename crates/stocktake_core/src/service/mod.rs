//! Use-case services for the UI command handlers.
//!
//! # Responsibility
//! - Orchestrate validation, registries, catalog, export and persistence
//!   behind one API the UI layer calls.
//! - Keep the UI decoupled from storage and file-format details.

pub mod inventory_service;
