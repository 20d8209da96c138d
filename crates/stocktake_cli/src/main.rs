//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stocktake_core` wiring: model,
//!   snapshot persistence and export path, independently of the GUI shell.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use std::process::ExitCode;

use stocktake_core::db::open_db_in_memory;
use stocktake_core::{RegistrySet, SnapshotRepository, SqliteSnapshotRepository};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stocktake probe failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("stocktake_core version={}", stocktake_core::core_version());

    // Round-trip one record through an in-memory snapshot store.
    let mut set = RegistrySet::new();
    set.create("probe");
    if let Some(registry) = set.registry_mut("probe") {
        registry.insert(
            stocktake_core::ArticleCode::parse("90515689")?,
            stocktake_core::Quantity::parse("1000")?,
        );
    }

    let mut conn = open_db_in_memory()?;
    let mut repo = SqliteSnapshotRepository::new(&mut conn);
    repo.save(&set)?;
    let restored = repo.load()?;

    println!(
        "snapshot files={} records={}",
        restored.len(),
        restored.export("probe").len()
    );
    Ok(())
}
