//! # Tokenizer Component
//!
//! Turns an arithmetic expression such as `Bjaeq + kPlzs * qWeTt-(100/zzAbv)` into a
//! sequence of tokens. Two strategies share the same informal grammar:
//!
//! * [`rule_tokenizer`]: ordered, extensible rules producing typed [`Token`]s
//! * [`quick`]: a single-pass accumulator producing bare strings
//!
//! ## Component Structure
//!
//! * [`token`]: [`Token`] and [`TokenKind`]
//! * [`rule`]: the built-in matchers and the [`RuleSet`] they are registered in
//! * [`rule_tokenizer`]: cleaning and the cursor loop
//! * [`quick`]: the baseline
//!
//! ## Error Handling
//!
//! Only the rule tokenizer can fail. It returns
//! [`TokenizerError::UnmatchedToken`](crate::error::TokenizerError::UnmatchedToken)
//! with the offending character and its index in the cleaned expression.
//!
//! ## Usage Example
//!
//! ```rust
//! use expr_tokenizer::tokenizer::{quick_tokenize, tokenize, tokenize_values, TokenKind};
//!
//! let tokens = tokenize("(Bjaeq + 100)").unwrap();
//! assert_eq!(tokens[0].kind(), TokenKind::Component);
//! assert_eq!(tokens[2].value(), "100");
//!
//! assert_eq!(tokenize_values("Bjaeq+100").unwrap(), quick_tokenize("Bjaeq + 100"));
//! ```

pub mod quick;
pub mod rule;
pub mod rule_tokenizer;
pub mod token;

pub use quick::quick_tokenize;
pub use rule::{PatternMatcher, PrefixMatcher, RuleSet, RuleSetBuilder, TokenRule};
pub use rule_tokenizer::{clean, tokenize, tokenize_values, RuleTokenizer};
pub use token::{Token, TokenKind};
