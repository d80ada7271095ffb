//! # Token Rules
//!
//! A rule pairs a [`TokenKind`] with a prefix matcher. Rules live in an ordered
//! [`RuleSet`]; the rule tokenizer tries them in order at every cursor position and
//! the first rule that matches a non-empty prefix wins, even if a later rule would
//! have matched more text.
//!
//! ## Built-in Rules
//!
//! In precedence order:
//!
//! 1. [`TokenKind::Number`]: one or more ASCII digits
//! 2. [`TokenKind::Operator`]: exactly one of `+ - * /`
//! 3. [`TokenKind::Component`]: five ASCII letters, then an optional `~R+` marker, then an
//!    optional `->` followed by a target that runs up to the next operator, paren or space
//!
//! ## Custom Rules
//!
//! [`RuleSetBuilder`] appends rules before the set is sealed with
//! [`RuleSetBuilder::build`]. A built [`RuleSet`] has no mutating API, so a tokenizer
//! that owns one can never see its rules change between calls.

use nom::{
    bytes::complete::{is_not, tag, take_while_m_n},
    character::complete::{digit1, one_of},
    combinator::{opt, recognize},
    error::{context, VerboseError},
    sequence::{preceded, tuple},
    IResult,
};
use regex::Regex;

use super::token::TokenKind;

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// The four single-character operators.
pub const OPERATORS: &str = "+-*/";

const COMPONENT_LETTERS: usize = 5;
const COMPONENT_MARKER: &str = "~R+";
const COMPONENT_TARGET_ARROW: &str = "->";
const COMPONENT_TARGET_STOP: &str = "+-*/() ";

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_number(input: &str) -> ParserResult<&str> {
    context("number", digit1)(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_operator(input: &str) -> ParserResult<&str> {
    context("operator", recognize(one_of(OPERATORS)))(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_component(input: &str) -> ParserResult<&str> {
    context(
        "component",
        recognize(tuple((
            take_while_m_n(COMPONENT_LETTERS, COMPONENT_LETTERS, |c: char| {
                c.is_ascii_alphabetic()
            }),
            opt(tag(COMPONENT_MARKER)),
            opt(preceded(
                tag(COMPONENT_TARGET_ARROW),
                is_not(COMPONENT_TARGET_STOP),
            )),
        ))),
    )(input)
}

fn matched_len(result: ParserResult<&str>) -> Option<usize> {
    result.ok().map(|(_, matched)| matched.len())
}

pub fn match_number(input: &str) -> Option<usize> {
    matched_len(parse_number(input))
}

pub fn match_operator(input: &str) -> Option<usize> {
    matched_len(parse_operator(input))
}

pub fn match_component(input: &str) -> Option<usize> {
    matched_len(parse_component(input))
}

/// Recognizes a prefix of `input`, returning its length in bytes.
pub trait PrefixMatcher: Send + Sync {
    fn match_prefix(&self, input: &str) -> Option<usize>;
}

impl<F> PrefixMatcher for F
where
    F: Fn(&str) -> Option<usize> + Send + Sync,
{
    fn match_prefix(&self, input: &str) -> Option<usize> {
        self(input)
    }
}

/// A regex-backed matcher. The pattern is anchored at the cursor when compiled, so
/// it does not need its own `^` and a miss never scans past the first character.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{})", pattern))?,
        })
    }

    /// The compiled, anchored pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PrefixMatcher for PatternMatcher {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        self.regex.find(input).map(|m| m.end())
    }
}

pub struct TokenRule {
    kind: TokenKind,
    matcher: Box<dyn PrefixMatcher>,
}

impl TokenRule {
    pub fn new(kind: TokenKind, matcher: impl PrefixMatcher + 'static) -> Self {
        Self {
            kind,
            matcher: Box::new(matcher),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the matched prefix of `input`.
    ///
    /// Empty matches, and lengths past the end of `input` or off a char boundary,
    /// count as no match.
    pub fn match_prefix<'a>(&self, input: &'a str) -> Option<&'a str> {
        let len = self.matcher.match_prefix(input)?;
        if len == 0 {
            return None;
        }
        input.get(..len)
    }
}

impl std::fmt::Debug for TokenRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRule")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// An ordered, sealed list of rules.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<TokenRule>,
}

impl RuleSet {
    /// First rule, in order, that matches a non-empty prefix of `input`.
    pub fn first_match<'a>(&self, input: &'a str) -> Option<(TokenKind, &'a str)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_prefix(input).map(|m| (rule.kind(), m)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSetBuilder::with_defaults().build()
    }
}

#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<TokenRule>,
}

impl RuleSetBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder pre-loaded with the built-in number, operator and component rules.
    pub fn with_defaults() -> Self {
        Self::new()
            .rule(TokenKind::Number, match_number)
            .rule(TokenKind::Operator, match_operator)
            .rule(TokenKind::Component, match_component)
    }

    /// Appends a rule after every rule already registered.
    pub fn rule(mut self, kind: TokenKind, matcher: impl PrefixMatcher + 'static) -> Self {
        self.rules.push(TokenRule::new(kind, matcher));
        self
    }

    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        let (rest, matched) = parse_number("12345+1").unwrap();
        assert_eq!(matched, "12345");
        assert_eq!(rest, "+1");
        assert!(parse_number("x1").is_err());
    }

    #[test]
    fn test_operator() {
        for op in ["+", "-", "*", "/"] {
            let (rest, matched) = parse_operator(op).unwrap();
            assert_eq!(matched, op);
            assert_eq!(rest, "");
        }
        assert_eq!(match_operator("--"), Some(1));
        assert!(parse_operator("%").is_err());
    }

    #[test]
    fn test_component_bare() {
        let (rest, matched) = parse_component("Bjaeq+kPlzs").unwrap();
        assert_eq!(matched, "Bjaeq");
        assert_eq!(rest, "+kPlzs");
    }

    #[test]
    fn test_component_requires_five_letters() {
        assert!(parse_component("abcd").is_err());
        assert!(parse_component("abcd1").is_err());
        assert_eq!(match_component("abcdef"), Some(5));
    }

    #[test]
    fn test_component_suffixes() {
        assert_eq!(match_component("Bjaeq~R+"), Some(8));
        assert_eq!(match_component("Bjaeq->target"), Some(13));
        assert_eq!(match_component("Bjaeq~R+->target"), Some(16));
        assert_eq!(match_component("Bjaeq~R+->tar*get"), Some(13));
        assert_eq!(match_component("Bjaeq->tar)get"), Some(10));
    }

    #[test]
    fn test_component_incomplete_suffixes_are_not_consumed() {
        // A marker without its `+` is not part of the component.
        assert_eq!(match_component("Bjaeq~R"), Some(5));
        // An arrow with no target is left for the operator rule.
        assert_eq!(match_component("Bjaeq->"), Some(5));
        assert_eq!(match_component("Bjaeq->+x"), Some(5));
    }

    #[test]
    fn test_default_rule_order() {
        let rules = RuleSet::default();
        let kinds: Vec<TokenKind> = rules.iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Operator, TokenKind::Component]
        );
        assert_eq!(rules.len(), 3);
    }

    #[test]
    fn test_first_match_wins() {
        let rules = RuleSetBuilder::new()
            .rule(TokenKind::Component, |input: &str| -> Option<usize> {
                input.starts_with('a').then_some(1)
            })
            .rule(TokenKind::Component, match_component)
            .build();
        assert_eq!(rules.first_match("abcde"), Some((TokenKind::Component, "a")));
    }

    #[test]
    fn test_degenerate_matches_are_ignored() {
        let rules = RuleSetBuilder::new()
            .rule(TokenKind::Number, |_: &str| -> Option<usize> { Some(0) })
            .rule(TokenKind::Number, |_: &str| -> Option<usize> { Some(100) })
            // Splits the two-byte 'é'.
            .rule(TokenKind::Number, |_: &str| -> Option<usize> { Some(1) })
            .build();
        assert_eq!(rules.first_match("é1"), None);
        assert!(RuleSetBuilder::new().build().is_empty());
    }

    #[test]
    fn test_pattern_matcher_is_anchored_at_cursor() {
        let matcher = PatternMatcher::new(r"\d+\.\d+").unwrap();
        assert_eq!(matcher.match_prefix("3.14+x"), Some(4));
        assert_eq!(matcher.match_prefix("x3.14"), None);
        assert!(PatternMatcher::new("(").is_err());
    }

    #[test]
    fn test_pattern_matcher_anchors_whole_alternation() {
        let matcher = PatternMatcher::new("a|b").unwrap();
        assert_eq!(matcher.as_str(), "^(?:a|b)");
        assert_eq!(matcher.match_prefix("ba"), Some(1));
        assert_eq!(matcher.match_prefix("cb"), None);

        let matcher = PatternMatcher::new(r"\d+").unwrap();
        let long = format!("x{}", "1".repeat(10_000));
        assert_eq!(matcher.match_prefix(&long), None);
        assert_eq!(matcher.match_prefix(&long[1..]), Some(10_000));
    }
}
