//! Master article catalog: the set of known valid article codes.
//!
//! # Responsibility
//! - Answer membership checks used by registration-time validation.
//! - Append newly registered codes, keeping the backing file sorted.
//!
//! # Invariants
//! - The catalog is append-only from the application's point of view.
//! - Character-class validation never depends on the catalog; membership is
//!   a separate, optional check.

use crate::model::article::ArticleCode;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const CATALOG_HEADER: &str = "ARTICLE";

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    InvalidCode { line: usize, value: String },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "catalog I/O failed: {err}"),
            Self::InvalidCode { line, value } => {
                write!(f, "invalid article code `{value}` at catalog line {line}")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidCode { .. } => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Lookup/registration contract for the master article list.
pub trait ArticleCatalog {
    fn contains(&self, code: &ArticleCode) -> bool;

    /// Registers a new code. Returns `Ok(false)` when it was already known.
    fn register(&mut self, code: ArticleCode) -> CatalogResult<bool>;
}

/// File-backed catalog: a single `ARTICLE`-headed column, one code per
/// line, kept sorted on disk.
#[derive(Debug)]
pub struct FileCatalog {
    path: PathBuf,
    codes: Vec<ArticleCode>,
}

impl FileCatalog {
    /// Opens a catalog file, or starts empty when the file does not exist
    /// yet (it is created on first registration).
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let mut codes = Vec::new();

        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            for (index, line) in contents.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() || (index == 0 && line == CATALOG_HEADER) {
                    continue;
                }
                let code = ArticleCode::parse(line).map_err(|_| CatalogError::InvalidCode {
                    line: index + 1,
                    value: line.to_string(),
                })?;
                codes.push(code);
            }
        }

        codes.sort();
        info!(
            "event=catalog_open module=catalog status=ok path={} codes={}",
            path.display(),
            codes.len()
        );
        Ok(Self { path, codes })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn persist(&self) -> CatalogResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{CATALOG_HEADER}")?;
        for code in &self.codes {
            writeln!(writer, "{code}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl ArticleCatalog for FileCatalog {
    fn contains(&self, code: &ArticleCode) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    fn register(&mut self, code: ArticleCode) -> CatalogResult<bool> {
        match self.codes.binary_search(&code) {
            Ok(_) => Ok(false),
            Err(pos) => {
                self.codes.insert(pos, code.clone());
                self.persist()?;
                info!(
                    "event=catalog_register module=catalog status=ok code={} codes={}",
                    code,
                    self.codes.len()
                );
                Ok(true)
            }
        }
    }
}

/// Catalog held entirely in memory, for tests and catalog-less setups.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    codes: Vec<ArticleCode>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codes(codes: Vec<ArticleCode>) -> Self {
        let mut codes = codes;
        codes.sort();
        codes.dedup();
        Self { codes }
    }
}

impl ArticleCatalog for InMemoryCatalog {
    fn contains(&self, code: &ArticleCode) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    fn register(&mut self, code: ArticleCode) -> CatalogResult<bool> {
        match self.codes.binary_search(&code) {
            Ok(_) => Ok(false),
            Err(pos) => {
                self.codes.insert(pos, code);
                Ok(true)
            }
        }
    }
}
