//! Side-by-side run of both tokenizers over one expression, with a positional diff
//! of their token values. Used by the demo binary.

use serde::Serialize;

use crate::{
    error::TokenizerError,
    tokenizer::{quick_tokenize, tokenize, Token},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub expression: String,
    pub quick: Vec<String>,
    #[serde(serialize_with = "serialize_rule_result")]
    pub rule: Result<Vec<Token>, TokenizerError>,
    pub matches: bool,
}

/// One index of the diff between the quick and rule token values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Same(String),
    Changed { quick: String, rule: String },
    OnlyQuick(String),
    OnlyRule(String),
}

impl std::fmt::Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffLine::Same(v) => write!(f, "  {}", v),
            DiffLine::Changed { quick, rule } => write!(f, "~ {} => {}", quick, rule),
            DiffLine::OnlyQuick(v) => write!(f, "- {}", v),
            DiffLine::OnlyRule(v) => write!(f, "+ {}", v),
        }
    }
}

impl Comparison {
    #[tracing::instrument(level = "debug")]
    pub fn run(expression: &str) -> Self {
        let quick = quick_tokenize(expression);
        let rule = tokenize(expression);
        let matches = match &rule {
            Ok(tokens) => {
                tokens.len() == quick.len()
                    && tokens.iter().zip(&quick).all(|(t, q)| t.value() == q.as_str())
            }
            Err(_) => false,
        };

        Self {
            expression: expression.to_string(),
            quick,
            rule,
            matches,
        }
    }

    pub fn rule_values(&self) -> Vec<&str> {
        match &self.rule {
            Ok(tokens) => tokens.iter().map(Token::value).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn diff(&self) -> Vec<DiffLine> {
        let rule = self.rule_values();
        let len = self.quick.len().max(rule.len());

        (0..len)
            .filter_map(|i| match (self.quick.get(i), rule.get(i)) {
                (Some(q), Some(r)) if q.as_str() == *r => Some(DiffLine::Same(q.clone())),
                (Some(q), Some(r)) => Some(DiffLine::Changed {
                    quick: q.clone(),
                    rule: r.to_string(),
                }),
                (Some(q), None) => Some(DiffLine::OnlyQuick(q.clone())),
                (None, Some(r)) => Some(DiffLine::OnlyRule(r.to_string())),
                (None, None) => None,
            })
            .collect()
    }
}

fn serialize_rule_result<S>(
    rule: &Result<Vec<Token>, TokenizerError>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(1))?;
    match rule {
        Ok(tokens) => map.serialize_entry("tokens", tokens)?,
        Err(e) => map.serialize_entry("error", &e.to_string())?,
    }
    map.end()
}
