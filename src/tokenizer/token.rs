use serde::{Deserialize, Serialize};

/// The closed set of token kinds produced by the rule tokenizer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// One or more decimal digits.
    Number,
    /// One of `+`, `-`, `*`, `/`.
    Operator,
    /// Five ASCII letters with optional `~R+` and `->target` suffixes.
    Component,
}

/// A classified substring of the cleaned expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    value: String,
    #[serde(rename = "type")]
    kind: TokenKind,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// The exact text matched by the rule.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}
