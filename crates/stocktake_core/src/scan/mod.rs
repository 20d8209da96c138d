//! Barcode scan classification and session contract.
//!
//! # Responsibility
//! - Decide which of two decoded strings is the article and which the
//!   quantity.
//! - Accumulate decoded codes across frames behind a hardware-agnostic
//!   source trait.
//!
//! # Invariants
//! - Classification never guesses: if no ordering validates, it errors.
//! - Camera and decoder details stay behind [`session::CodeSource`].

pub mod classify;
pub mod session;
