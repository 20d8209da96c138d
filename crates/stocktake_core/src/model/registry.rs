//! Per-file registry of counted articles.
//!
//! # Responsibility
//! - Record quantities per article in insertion order, duplicates allowed.
//! - Provide the mutation set used by the command handlers: insert, delete,
//!   modify, bulk insert, flatten.
//!
//! # Invariants
//! - Article keys are unique and keep their insertion order.
//! - Deleting the last quantity of an article keeps the key with an empty
//!   list; keys are only destroyed with the whole registry.
//! - Mutations report expected failures (`false`) and leave the registry
//!   untouched when they fail.

use crate::model::article::{ArticleCode, Quantity, Record};
use indexmap::IndexMap;

/// Contents of one named inventory file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: IndexMap<ArticleCode, Vec<Quantity>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a quantity under an article, creating the article on first use.
    pub fn insert(&mut self, article: ArticleCode, quantity: Quantity) -> bool {
        self.entries.entry(article).or_default().push(quantity);
        true
    }

    /// Removes the first occurrence of `quantity` under `article`.
    ///
    /// Returns `false` when the article is absent or the quantity is not
    /// recorded for it. The article key survives even when its list empties.
    pub fn delete(&mut self, article: &ArticleCode, quantity: &Quantity) -> bool {
        match self.entries.get_mut(article) {
            Some(quantities) => match quantities.iter().position(|q| q == quantity) {
                Some(pos) => {
                    quantities.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Replaces the first occurrence of `old` with `new` under `article`.
    ///
    /// Fails under the same conditions as [`Registry::delete`].
    pub fn modify(&mut self, article: &ArticleCode, old: &Quantity, new: Quantity) -> bool {
        match self.entries.get_mut(article) {
            Some(quantities) => match quantities.iter().position(|q| q == old) {
                Some(pos) => {
                    quantities[pos] = new;
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Bulk insert. Returns `false` only for an empty input.
    pub fn insert_many(&mut self, records: Vec<Record>) -> bool {
        if records.is_empty() {
            return false;
        }
        for record in records {
            self.insert(record.article, record.quantity);
        }
        true
    }

    /// Ensures an article key exists, with an empty quantity list if new.
    ///
    /// Used by snapshot restore to rebuild the empty-list-retained state.
    pub fn ensure_article(&mut self, article: ArticleCode) {
        self.entries.entry(article).or_default();
    }

    /// Flattens to records in iteration order: article insertion order, then
    /// per-article quantity insertion order. No dedup, no reorder.
    pub fn export(&self) -> Vec<Record> {
        let mut records = Vec::with_capacity(self.record_count());
        for (article, quantities) in &self.entries {
            for quantity in quantities {
                records.push(Record::new(article.clone(), quantity.clone()));
            }
        }
        records
    }

    /// Iterates `(article, quantities)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArticleCode, &[Quantity])> {
        self.entries
            .iter()
            .map(|(article, quantities)| (article, quantities.as_slice()))
    }

    pub fn articles(&self) -> impl Iterator<Item = &ArticleCode> {
        self.entries.keys()
    }

    pub fn quantities(&self, article: &ArticleCode) -> Option<&[Quantity]> {
        self.entries.get(article).map(Vec::as_slice)
    }

    pub fn contains_article(&self, article: &ArticleCode) -> bool {
        self.entries.contains_key(article)
    }

    /// Number of distinct article keys (including empty-list ones).
    pub fn article_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of recorded quantities across all articles.
    pub fn record_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
