//! Domain model for inventory counting.
//!
//! # Responsibility
//! - Define validated article/quantity newtypes and the record pair.
//! - Keep the registry containers (per-file and file-set) in one place.
//!
//! # Invariants
//! - An `ArticleCode` or `Quantity` can only be constructed through its
//!   validating parser.
//! - Both registry containers preserve insertion order of their keys.

pub mod article;
pub mod registry;
pub mod registry_set;
