//! Inventory command-handler service.
//!
//! Owns the in-memory `RegistrySet` and the optional master catalog; every
//! UI command goes through here with explicit dependency passing, no
//! ambient globals. Domain containers keep their boolean results; this
//! layer turns them into typed errors the UI can surface as messages.

use crate::catalog::{ArticleCatalog, CatalogError};
use crate::export::{export_to_dir, ExportError, ExportOptions};
use crate::model::article::{
    ArticleCode, ArticleCodeError, Quantity, QuantityError, Record,
};
use crate::model::registry_set::RegistrySet;
use crate::repo::snapshot_repo::{RepoError, SnapshotRepository};
use crate::scan::classify::{classify_scan_pair, ClassifyError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Expected command failures, surfaced to the user as messages.
#[derive(Debug)]
pub enum ServiceError {
    InvalidFileName,
    FileExists(String),
    UnknownFile(String),
    InvalidArticle(ArticleCodeError),
    InvalidQuantity(QuantityError),
    /// Article passed the character rules but is not in the master catalog.
    UnknownArticle(ArticleCode),
    ArticleAlreadyRegistered(ArticleCode),
    RecordNotFound {
        article: ArticleCode,
        quantity: Quantity,
    },
    NoCatalog,
    Scan(ClassifyError),
    Export(ExportError),
    Catalog(CatalogError),
    Snapshot(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFileName => write!(f, "file name cannot be blank"),
            Self::FileExists(name) => write!(f, "file `{name}` already exists"),
            Self::UnknownFile(name) => write!(f, "file `{name}` does not exist"),
            Self::InvalidArticle(err) => write!(f, "{err}"),
            Self::InvalidQuantity(err) => write!(f, "{err}"),
            Self::UnknownArticle(code) => {
                write!(f, "article `{code}` is not in the master catalog")
            }
            Self::ArticleAlreadyRegistered(code) => {
                write!(f, "article `{code}` is already in the master catalog")
            }
            Self::RecordNotFound { article, quantity } => {
                write!(f, "quantity `{quantity}` is not recorded for article `{article}`")
            }
            Self::NoCatalog => write!(f, "no master catalog is configured"),
            Self::Scan(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArticle(err) => Some(err),
            Self::InvalidQuantity(err) => Some(err),
            Self::Scan(err) => Some(err),
            Self::Export(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Snapshot(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArticleCodeError> for ServiceError {
    fn from(value: ArticleCodeError) -> Self {
        Self::InvalidArticle(value)
    }
}

impl From<QuantityError> for ServiceError {
    fn from(value: QuantityError) -> Self {
        Self::InvalidQuantity(value)
    }
}

impl From<ClassifyError> for ServiceError {
    fn from(value: ClassifyError) -> Self {
        Self::Scan(value)
    }
}

impl From<ExportError> for ServiceError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<CatalogError> for ServiceError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Snapshot(value)
    }
}

/// Command-handler facade over the registry set and its collaborators.
pub struct InventoryService<C: ArticleCatalog> {
    registries: RegistrySet,
    catalog: Option<C>,
}

impl<C: ArticleCatalog> InventoryService<C> {
    pub fn new() -> Self {
        Self {
            registries: RegistrySet::new(),
            catalog: None,
        }
    }

    pub fn with_catalog(catalog: C) -> Self {
        Self {
            registries: RegistrySet::new(),
            catalog: Some(catalog),
        }
    }

    /// Read access for the UI layer (combobox refresh, registry views).
    pub fn registries(&self) -> &RegistrySet {
        &self.registries
    }

    pub fn create_file(&mut self, name: &str) -> ServiceResult<()> {
        if name.trim().is_empty() {
            return Err(ServiceError::InvalidFileName);
        }
        if !self.registries.create(name) {
            return Err(ServiceError::FileExists(name.to_string()));
        }
        info!("event=file_create module=service status=ok file={name}");
        Ok(())
    }

    pub fn remove_file(&mut self, name: &str) -> ServiceResult<()> {
        if !self.registries.remove(name) {
            return Err(ServiceError::UnknownFile(name.to_string()));
        }
        info!("event=file_remove module=service status=ok file={name}");
        Ok(())
    }

    pub fn rename_file(&mut self, old: &str, new: &str) -> ServiceResult<()> {
        if !self.registries.contains(old) {
            return Err(ServiceError::UnknownFile(old.to_string()));
        }
        if new.trim().is_empty() {
            return Err(ServiceError::InvalidFileName);
        }
        if !self.registries.rename(old, new) {
            return Err(ServiceError::FileExists(new.to_string()));
        }
        info!("event=file_rename module=service status=ok from={old} to={new}");
        Ok(())
    }

    pub fn list_files(&self) -> Vec<&str> {
        self.registries.list_names()
    }

    /// Inserts a typed-in record after full validation.
    pub fn add_record(&mut self, file: &str, article: &str, quantity: &str) -> ServiceResult<()> {
        let record = self.parse_record(article, quantity)?;
        let registry = self
            .registries
            .registry_mut(file)
            .ok_or_else(|| ServiceError::UnknownFile(file.to_string()))?;
        registry.insert(record.article, record.quantity);
        info!("event=record_insert module=service status=ok file={file} article={article}");
        Ok(())
    }

    /// Removes the first occurrence of a quantity under an article.
    pub fn delete_record(
        &mut self,
        file: &str,
        article: &str,
        quantity: &str,
    ) -> ServiceResult<()> {
        let record = self.parse_record(article, quantity)?;
        let registry = self
            .registries
            .registry_mut(file)
            .ok_or_else(|| ServiceError::UnknownFile(file.to_string()))?;
        if !registry.delete(&record.article, &record.quantity) {
            return Err(ServiceError::RecordNotFound {
                article: record.article,
                quantity: record.quantity,
            });
        }
        info!("event=record_delete module=service status=ok file={file} article={article}");
        Ok(())
    }

    /// Replaces the first occurrence of `old_quantity` with `new_quantity`.
    pub fn modify_record(
        &mut self,
        file: &str,
        article: &str,
        old_quantity: &str,
        new_quantity: &str,
    ) -> ServiceResult<()> {
        let old = self.parse_record(article, old_quantity)?;
        let new = Quantity::parse(new_quantity)?;
        let registry = self
            .registries
            .registry_mut(file)
            .ok_or_else(|| ServiceError::UnknownFile(file.to_string()))?;
        if !registry.modify(&old.article, &old.quantity, new) {
            return Err(ServiceError::RecordNotFound {
                article: old.article,
                quantity: old.quantity,
            });
        }
        info!("event=record_modify module=service status=ok file={file} article={article}");
        Ok(())
    }

    /// Classifies a captured two-code pair and records it.
    pub fn ingest_scan_pair(
        &mut self,
        file: &str,
        first: &str,
        second: &str,
    ) -> ServiceResult<Record> {
        if !self.registries.contains(file) {
            return Err(ServiceError::UnknownFile(file.to_string()));
        }
        let record = classify_scan_pair(first, second)?;
        self.check_catalog(&record.article)?;
        if let Some(registry) = self.registries.registry_mut(file) {
            registry.insert(record.article.clone(), record.quantity.clone());
        }
        info!(
            "event=scan_ingest module=service status=ok file={file} article={}",
            record.article
        );
        Ok(record)
    }

    /// Adds a new article code to the master catalog.
    pub fn register_article(&mut self, article: &str) -> ServiceResult<ArticleCode> {
        let code = ArticleCode::parse(article)?;
        let catalog = self.catalog.as_mut().ok_or(ServiceError::NoCatalog)?;
        if !catalog.register(code.clone())? {
            return Err(ServiceError::ArticleAlreadyRegistered(code));
        }
        info!("event=article_register module=service status=ok article={code}");
        Ok(code)
    }

    /// Exports one file as CSV into `export_dir`; returns the written path.
    pub fn export_file(
        &self,
        file: &str,
        export_dir: &Path,
        options: ExportOptions,
    ) -> ServiceResult<PathBuf> {
        if !self.registries.contains(file) {
            return Err(ServiceError::UnknownFile(file.to_string()));
        }
        let records = self.registries.export(file);
        let path = export_to_dir(export_dir, file, &records, options)?;
        Ok(path)
    }

    /// Snapshots the whole registry set.
    pub fn save_to(&self, repo: &mut impl SnapshotRepository) -> ServiceResult<()> {
        repo.save(&self.registries)?;
        Ok(())
    }

    /// Overlays the saved snapshot onto the current set (same-name files are
    /// replaced, others kept), mirroring the original load-progress flow.
    pub fn load_from(&mut self, repo: &mut impl SnapshotRepository) -> ServiceResult<()> {
        let loaded = repo.load()?;
        self.registries.merge(loaded);
        Ok(())
    }

    fn parse_record(&self, article: &str, quantity: &str) -> ServiceResult<Record> {
        let article = ArticleCode::parse(article)?;
        self.check_catalog(&article)?;
        let quantity = Quantity::parse(quantity)?;
        Ok(Record::new(article, quantity))
    }

    fn check_catalog(&self, article: &ArticleCode) -> ServiceResult<()> {
        if let Some(catalog) = &self.catalog {
            if !catalog.contains(article) {
                return Err(ServiceError::UnknownArticle(article.clone()));
            }
        }
        Ok(())
    }
}

impl<C: ArticleCatalog> Default for InventoryService<C> {
    fn default() -> Self {
        Self::new()
    }
}
