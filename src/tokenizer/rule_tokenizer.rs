use lazy_static::lazy_static;
use regex::Regex;

use super::{rule::RuleSet, token::Token};
use crate::error::{TokenizerError, TokenizerResult};

lazy_static! {
    static ref IGNORED_CHARS: Regex = Regex::new(r"[()\s]").unwrap();
    static ref DEFAULT_TOKENIZER: RuleTokenizer = RuleTokenizer::new();
}

/// Removes whitespace and grouping parentheses. The result is the string the rule
/// tokenizer actually scans, and the one error positions refer to.
pub fn clean(expression: &str) -> String {
    IGNORED_CHARS.replace_all(expression, "").into_owned()
}

/// Tokenizes with the built-in rule set.
pub fn tokenize(expression: &str) -> TokenizerResult<Vec<Token>> {
    DEFAULT_TOKENIZER.tokenize(expression)
}

/// Like [`tokenize`], keeping only each token's text.
pub fn tokenize_values(expression: &str) -> TokenizerResult<Vec<String>> {
    DEFAULT_TOKENIZER.tokenize_values(expression)
}

/// Rule-driven tokenizer.
///
/// At every position the rules are tried in order and the first non-empty prefix
/// match becomes the next token. There is no backtracking across rules, and the
/// whole call fails on the first position no rule can match.
#[derive(Debug, Default)]
pub struct RuleTokenizer {
    rules: RuleSet,
}

impl RuleTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[tracing::instrument(level = "debug", skip(self, expression))]
    pub fn tokenize(&self, expression: &str) -> TokenizerResult<Vec<Token>> {
        let cleaned = clean(expression);
        let mut tokens = Vec::new();
        let mut remaining = cleaned.as_str();
        // Counted in chars, not bytes.
        let mut position = 0;

        while let Some(character) = remaining.chars().next() {
            match self.rules.first_match(remaining) {
                Some((kind, matched)) => {
                    tracing::trace!("{} {:?} at {}", kind, matched, position);
                    tokens.push(Token::new(kind, matched));
                    position += matched.chars().count();
                    remaining = &remaining[matched.len()..];
                }
                None => {
                    let error = TokenizerError::UnmatchedToken {
                        character,
                        position,
                    };
                    tracing::debug!("{}", error);
                    return Err(error);
                }
            }
        }

        tracing::debug!("tokenized {} tokens", tokens.len());
        Ok(tokens)
    }

    pub fn tokenize_values(&self, expression: &str) -> TokenizerResult<Vec<String>> {
        Ok(self
            .tokenize(expression)?
            .into_iter()
            .map(Token::into_value)
            .collect())
    }
}
