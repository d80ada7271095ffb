use thiserror::Error;

/// Raised by the rule tokenizer when no rule matches at the cursor.
///
/// `position` is a character index into the cleaned expression (whitespace and
/// parentheses already removed), not into the caller's original input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    #[error("Unexpected token at position {position}: \"{character}\"")]
    UnmatchedToken { character: char, position: usize },
}

impl TokenizerError {
    pub fn position(&self) -> usize {
        match self {
            TokenizerError::UnmatchedToken { position, .. } => *position,
        }
    }

    pub fn character(&self) -> char {
        match self {
            TokenizerError::UnmatchedToken { character, .. } => *character,
        }
    }
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_token_message() {
        let error = TokenizerError::UnmatchedToken {
            character: '@',
            position: 7,
        };
        assert_eq!(error.to_string(), "Unexpected token at position 7: \"@\"");
        assert_eq!(error.position(), 7);
        assert_eq!(error.character(), '@');
    }

    #[test]
    fn test_error_from_tokenizer_error() {
        let error: Error = TokenizerError::UnmatchedToken {
            character: 'x',
            position: 0,
        }
        .into();
        assert!(matches!(error, Error::Tokenizer(_)));
        assert_eq!(
            error.to_string(),
            "Tokenizer error: Unexpected token at position 0: \"x\""
        );
    }
}
