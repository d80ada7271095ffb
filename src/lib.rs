//! # expr-tokenizer
//!
//! Tokenizes simple arithmetic expressions built from five-letter components,
//! decimal numbers and the operators `+ - * /`.
//!
//! Two tokenizers cover the same informal grammar:
//!
//! - [`tokenizer::tokenize`]: rule-driven, typed tokens, fails on unmatched input
//! - [`tokenizer::quick_tokenize`]: single pass, bare strings, never fails
//!
//! The [`compare`] module runs both and diffs their output, and [`config`] holds the
//! settings for the demo binary.
//!
//! ```text
//! expression → clean (rule tokenizer only) → left-to-right scan → tokens
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::{quick_tokenize, tokenize, tokenize_values, Token, TokenKind};
