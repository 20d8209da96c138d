//! Core domain logic for Stocktake.
//! This crate is the single source of truth for inventory-count invariants.

pub mod catalog;
pub mod config;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod scan;
pub mod service;

pub use catalog::{ArticleCatalog, CatalogError, CatalogResult, FileCatalog, InMemoryCatalog};
pub use config::{AppConfig, ConfigError};
pub use export::{export_to_dir, write_csv, ExportError, ExportOptions, ExportResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{
    is_valid_article, is_valid_quantity, ArticleCode, ArticleCodeError, Quantity, QuantityError,
    Record,
};
pub use model::registry::Registry;
pub use model::registry_set::RegistrySet;
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository,
};
pub use scan::classify::{classify_scan_pair, ClassifyError};
pub use scan::session::{run_scan, CodeSource, ScanOutcome, ScanSession};
pub use service::inventory_service::{InventoryService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
