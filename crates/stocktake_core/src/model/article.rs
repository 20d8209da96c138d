//! Article code and quantity newtypes.
//!
//! # Responsibility
//! - Enforce the character-class rules for article codes and quantities.
//! - Provide the `Record` pair used everywhere a counted line is handled.
//!
//! # Invariants
//! - An article code is exactly 8 characters: digits or one of the
//!   production letters `Z K H B S N`.
//! - A quantity is a non-empty string of decimal digits; leading zeros are
//!   preserved and significant.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Required length of every article code.
pub const ARTICLE_CODE_LEN: usize = 8;

/// Letters with production meaning: zinc-coated, SKF customer, Parker
/// customer, tempered, no hole, no logo. Everything else is rejected.
const ALLOWED_LETTERS: &[char] = &['Z', 'K', 'H', 'B', 'S', 'N'];

/// Rejection reasons for an article code candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleCodeError {
    WrongLength(usize),
    ForbiddenChar(char),
}

impl Display for ArticleCodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "article code must be exactly {ARTICLE_CODE_LEN} characters, got {len}"
            ),
            Self::ForbiddenChar(c) => {
                write!(f, "article code contains forbidden character `{c}`")
            }
        }
    }
}

impl Error for ArticleCodeError {}

/// Rejection reasons for a quantity candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    Empty,
    NonDigit(char),
}

impl Display for QuantityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "quantity cannot be empty"),
            Self::NonDigit(c) => write!(f, "quantity contains non-digit character `{c}`"),
        }
    }
}

impl Error for QuantityError {}

/// Validated stock-keeping-unit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleCode(String);

impl ArticleCode {
    /// Parses and validates an article code candidate.
    pub fn parse(value: impl Into<String>) -> Result<Self, ArticleCodeError> {
        let value = value.into();
        let len = value.chars().count();
        if len != ARTICLE_CODE_LEN {
            return Err(ArticleCodeError::WrongLength(len));
        }
        for c in value.chars() {
            if !c.is_ascii_digit() && !ALLOWED_LETTERS.contains(&c) {
                return Err(ArticleCodeError::ForbiddenChar(c));
            }
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ArticleCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArticleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated counted quantity.
///
/// Kept as a digit string rather than an integer so leading zeros survive
/// the full snapshot/export round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(String);

impl Quantity {
    /// Parses and validates a quantity candidate.
    pub fn parse(value: impl Into<String>) -> Result<Self, QuantityError> {
        let value = value.into();
        if value.is_empty() {
            return Err(QuantityError::Empty);
        }
        for c in value.chars() {
            if !c.is_ascii_digit() {
                return Err(QuantityError::NonDigit(c));
            }
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares two quantities by numeric value.
    ///
    /// Works for digit strings of any length: leading zeros are ignored for
    /// ordering, then shorter magnitude sorts first, then lexicographic.
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        let a = self.0.trim_start_matches('0');
        let b = other.0.trim_start_matches('0');
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Quantity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One counted line: an article and one quantity read for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub article: ArticleCode,
    pub quantity: Quantity,
}

impl Record {
    pub fn new(article: ArticleCode, quantity: Quantity) -> Self {
        Self { article, quantity }
    }
}

/// Predicate form of `ArticleCode::parse` for UI-side input checks.
pub fn is_valid_article(value: &str) -> bool {
    ArticleCode::parse(value).is_ok()
}

/// Predicate form of `Quantity::parse` for UI-side input checks.
pub fn is_valid_quantity(value: &str) -> bool {
    Quantity::parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_accepts_digits_and_production_letters() {
        assert!(ArticleCode::parse("90515689").is_ok());
        assert!(ArticleCode::parse("H0351051").is_ok());
        assert!(ArticleCode::parse("ZKHBSN00").is_ok());
    }

    #[test]
    fn article_rejects_wrong_length_and_foreign_chars() {
        assert_eq!(
            ArticleCode::parse("1234567"),
            Err(ArticleCodeError::WrongLength(7))
        );
        assert_eq!(
            ArticleCode::parse("A0351051"),
            Err(ArticleCodeError::ForbiddenChar('A'))
        );
        assert_eq!(
            ArticleCode::parse("9035105-"),
            Err(ArticleCodeError::ForbiddenChar('-'))
        );
    }

    #[test]
    fn quantity_rules() {
        assert!(is_valid_quantity("007"));
        assert!(is_valid_quantity("1000"));
        assert!(!is_valid_quantity(""));
        assert!(!is_valid_quantity("12.5"));
        assert!(!is_valid_quantity("-5"));
        assert!(!is_valid_quantity(" 5"));
    }

    #[test]
    fn numeric_cmp_ignores_leading_zeros() {
        let small = Quantity::parse("007").unwrap();
        let large = Quantity::parse("75").unwrap();
        assert_eq!(small.numeric_cmp(&large), Ordering::Less);

        let a = Quantity::parse("0100").unwrap();
        let b = Quantity::parse("100").unwrap();
        assert_eq!(a.numeric_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn newtypes_serialize_transparently() {
        let code = ArticleCode::parse("90515689").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"90515689\"");
        let qty = Quantity::parse("007").unwrap();
        assert_eq!(serde_json::to_string(&qty).unwrap(), "\"007\"");
    }
}
