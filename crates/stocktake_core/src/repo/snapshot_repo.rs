//! Snapshot repository contract and SQLite implementation.
//!
//! The whole `RegistrySet` is written and read as one flat snapshot:
//! wipe-and-rewrite on save, full scan in rowid order on load. Insertion
//! order of file names, article keys and quantities survives the round
//! trip, including empty registries and empty quantity lists.

use crate::db::DbError;
use crate::model::article::{ArticleCode, Quantity};
use crate::model::registry::Registry;
use crate::model::registry_set::RegistrySet;
use log::info;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence errors for the snapshot round trip.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted snapshot data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Snapshot save/load contract for the registry set.
pub trait SnapshotRepository {
    fn save(&mut self, set: &RegistrySet) -> RepoResult<()>;
    fn load(&mut self) -> RepoResult<RegistrySet>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn save(&mut self, set: &RegistrySet) -> RepoResult<()> {
        let started_at = Instant::now();
        let tx = self.conn.transaction()?;

        // Cascades clear articles and quantities of the previous snapshot.
        tx.execute("DELETE FROM files;", [])?;

        for (name, registry) in set.iter() {
            tx.execute("INSERT INTO files (name) VALUES (?1);", [name])?;
            let file_id = tx.last_insert_rowid();

            for (article, quantities) in registry.iter() {
                tx.execute(
                    "INSERT INTO articles (file_id, code) VALUES (?1, ?2);",
                    params![file_id, article.as_str()],
                )?;
                let article_id = tx.last_insert_rowid();

                for quantity in quantities {
                    tx.execute(
                        "INSERT INTO quantities (article_id, value) VALUES (?1, ?2);",
                        params![article_id, quantity.as_str()],
                    )?;
                }
            }
        }

        tx.commit()?;
        info!(
            "event=snapshot_save module=repo status=ok files={} duration_ms={}",
            set.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn load(&mut self) -> RepoResult<RegistrySet> {
        let started_at = Instant::now();
        let mut set = RegistrySet::new();

        let mut files_stmt = self
            .conn
            .prepare("SELECT id, name FROM files ORDER BY id;")?;
        let mut articles_stmt = self
            .conn
            .prepare("SELECT id, code FROM articles WHERE file_id = ?1 ORDER BY id;")?;
        let mut quantities_stmt = self
            .conn
            .prepare("SELECT value FROM quantities WHERE article_id = ?1 ORDER BY id;")?;

        let files = files_stmt
            .query_map([], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        for (file_id, name) in files {
            let mut registry = Registry::new();

            let articles = articles_stmt
                .query_map([file_id], |row| {
                    Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
                })?
                .collect::<Result<Vec<_>, _>>()?;

            for (article_id, code_text) in articles {
                let article = ArticleCode::parse(code_text.as_str()).map_err(|err| {
                    RepoError::InvalidData(format!(
                        "article code `{code_text}` in file `{name}`: {err}"
                    ))
                })?;
                registry.ensure_article(article.clone());

                let values = quantities_stmt
                    .query_map([article_id], |row| row.get::<_, String>(0))?
                    .collect::<Result<Vec<_>, _>>()?;

                for value in values {
                    let quantity = Quantity::parse(value.as_str()).map_err(|err| {
                        RepoError::InvalidData(format!(
                            "quantity `{value}` under article `{article}`: {err}"
                        ))
                    })?;
                    registry.insert(article.clone(), quantity);
                }
            }

            if name.trim().is_empty() {
                return Err(RepoError::InvalidData("blank file name".to_string()));
            }
            set.insert_registry(name, registry);
        }

        info!(
            "event=snapshot_load module=repo status=ok files={} duration_ms={}",
            set.len(),
            started_at.elapsed().as_millis()
        );
        Ok(set)
    }
}
