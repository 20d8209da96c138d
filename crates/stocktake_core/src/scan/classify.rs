//! Article/quantity ordering decision for a two-code scan.

use crate::model::article::{ArticleCode, Quantity, Record};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The single classification failure: neither ordering of the decoded pair
/// passes both validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyError {
    pub first: String,
    pub second: String,
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no ordering of `{}` and `{}` forms a valid article/quantity pair",
            self.first, self.second
        )
    }
}

impl Error for ClassifyError {}

/// Classifies two decoded strings into an `(article, quantity)` record.
///
/// Tries `(first, second)` and then the reverse ordering. When both
/// orderings validate (possible with two all-digit codes) the first
/// ordering wins, deterministically. When neither does, the pair is
/// reported as invalid rather than guessed.
pub fn classify_scan_pair(first: &str, second: &str) -> Result<Record, ClassifyError> {
    if let (Ok(article), Ok(quantity)) = (ArticleCode::parse(first), Quantity::parse(second)) {
        return Ok(Record::new(article, quantity));
    }
    if let (Ok(article), Ok(quantity)) = (ArticleCode::parse(second), Quantity::parse(first)) {
        return Ok(Record::new(article, quantity));
    }
    Err(ClassifyError {
        first: first.to_string(),
        second: second.to_string(),
    })
}
