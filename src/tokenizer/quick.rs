//! # Quick Tokenizer
//!
//! Single-pass baseline for the rule tokenizer. It accumulates every character that is
//! not an operator into one buffer and flushes it whenever an operator arrives. There
//! are no token kinds, no rules and no failure mode: every string tokenizes.
//!
//! Whitespace and parentheses are dropped without flushing, so `ab c` yields `abc`.
//! On the base grammar (components, numbers and operators without `~R+` or `->`
//! suffixes) the output equals [`tokenize_values`](super::rule_tokenizer::tokenize_values).

use super::rule::OPERATORS;

fn is_ignored(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

fn is_operator(c: char) -> bool {
    OPERATORS.contains(c)
}

fn flush(buffer: &mut String, tokens: &mut Vec<String>) {
    if !buffer.is_empty() {
        tokens.push(std::mem::take(buffer));
    }
}

#[tracing::instrument(level = "debug", skip(expression))]
pub fn quick_tokenize(expression: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();

    for c in expression.chars() {
        if is_ignored(c) {
            continue;
        }

        if is_operator(c) {
            flush(&mut buffer, &mut tokens);
            tokens.push(c.to_string());
            continue;
        }

        buffer.push(c);
    }

    flush(&mut buffer, &mut tokens);
    tracing::debug!("tokenized {} tokens", tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_expression() {
        assert_eq!(
            quick_tokenize("Bjaeq + kPlzs * qWeTt-(100/zzAbv)"),
            vec!["Bjaeq", "+", "kPlzs", "*", "qWeTt", "-", "100", "/", "zzAbv"]
        );
    }

    #[test]
    fn test_empty() {
        assert!(quick_tokenize("").is_empty());
        assert!(quick_tokenize(" ( )\t").is_empty());
    }

    #[test]
    fn test_ignored_chars_do_not_split() {
        assert_eq!(quick_tokenize("ab c(d)e"), vec!["abcde"]);
    }

    #[test]
    fn test_consecutive_operators() {
        assert_eq!(quick_tokenize("--1"), vec!["-", "-", "1"]);
    }

    #[test]
    fn test_accepts_anything() {
        assert_eq!(quick_tokenize("invalid@symbol"), vec!["invalid@symbol"]);
        assert_eq!(
            quick_tokenize("Bjaeq~R+->target"),
            vec!["Bjaeq~R", "+", "-", ">target"]
        );
    }
}
