//! Spreadsheet export of a flattened registry.
//!
//! # Responsibility
//! - Write `(article, quantity)` records as a two-column `;`-separated CSV.
//! - Keep article codes and quantities as verbatim text so leading zeros
//!   survive.
//!
//! # Invariants
//! - Unsorted export preserves record order exactly.
//! - Sorted export orders alphabetically by article, then numerically by
//!   quantity, without rewriting the quantity text.

use crate::model::article::Record;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const CSV_HEADER: &str = "Article;Quantity";

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "export failed: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Export tuning; `sorted` switches from insertion order to
/// article-then-quantity ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub sorted: bool,
}

/// Writes records to any writer in CSV form.
pub fn write_csv<W: Write>(
    out: &mut W,
    records: &[Record],
    options: ExportOptions,
) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;

    if options.sorted {
        let mut sorted: Vec<&Record> = records.iter().collect();
        sorted.sort_by(|a, b| {
            a.article
                .as_str()
                .cmp(b.article.as_str())
                .then_with(|| a.quantity.numeric_cmp(&b.quantity))
        });
        for record in sorted {
            writeln!(out, "{};{}", record.article, record.quantity)?;
        }
    } else {
        for record in records {
            writeln!(out, "{};{}", record.article, record.quantity)?;
        }
    }

    Ok(())
}

/// Writes `<file_name>.csv` into `dir` and returns the written path.
pub fn export_to_dir(
    dir: &Path,
    file_name: &str,
    records: &[Record],
    options: ExportOptions,
) -> ExportResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{file_name}.csv"));

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, records, options)?;
    writer.flush()?;

    info!(
        "event=export_csv module=export status=ok file={} rows={} sorted={}",
        path.display(),
        records.len(),
        options.sorted
    );
    Ok(path)
}
