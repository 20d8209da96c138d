//! Persistence layer for the registry set snapshot.
//!
//! # Responsibility
//! - Define the snapshot save/load contract.
//! - Isolate SQL details from the service layer.
//!
//! # Invariants
//! - `save` replaces the previous snapshot atomically.
//! - `load` rejects invalid persisted values instead of masking them.

pub mod snapshot_repo;
