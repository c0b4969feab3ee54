//! Path expression parser
//!
//! Turns raw segments from the tokenizer into typed [`PathSegment`]s.
//! Parsing never fails: bracket content that is neither a predicate nor a
//! non-negative integer becomes [`Indexer::Malformed`] and is rejected when
//! the path is evaluated.

use crate::ast::{ComparisonOp, Indexer, PathSegment, Predicate};
use crate::tokenizer::{self, BracketContent, Scanner};

/// Parser for dotted, optionally bracket-indexed path expressions
pub struct PathParser<'a> {
    input: &'a str,
}

impl<'a> PathParser<'a> {
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parse the expression into its ordered segment list
    #[must_use]
    pub fn parse(&self) -> Vec<PathSegment> {
        tokenizer::split_components(self.input)
            .into_iter()
            .map(parse_segment)
            .collect()
    }
}

fn parse_segment(raw: &str) -> PathSegment {
    let (name, bracket) = tokenizer::split_bracket(raw);
    let indexer = bracket.map(|content| match content {
        BracketContent::Closed(inner) => parse_indexer(inner),
        BracketContent::Unbalanced(rest) => Indexer::Malformed(rest.to_string()),
    });

    PathSegment {
        property: name.to_string(),
        indexer,
    }
}

/// Classify bracket content: predicate first, then integer index
pub(crate) fn parse_indexer(content: &str) -> Indexer {
    let trimmed = content.trim();
    if let Some(predicate) = parse_predicate(trimmed) {
        return Indexer::Predicate(predicate);
    }
    match trimmed.parse::<usize>() {
        Ok(index) => Indexer::Index(index),
        Err(_) => Indexer::Malformed(content.to_string()),
    }
}

/// Parse `@.<path> ==|!= <literal>`, optionally wrapped as `?(...)` or `?...`
fn parse_predicate(text: &str) -> Option<Predicate> {
    let mut body = text;
    if let Some(rest) = body.strip_prefix('?') {
        body = rest.trim_start();
        if let Some(inner) = body.strip_prefix('(') {
            body = inner.strip_suffix(')')?.trim();
        }
    }

    let rest = body.strip_prefix("@.")?;
    let (position, operator) = find_operator(rest)?;

    let property = rest[..position].trim();
    if property.is_empty() || property.contains(char::is_whitespace) {
        return None;
    }

    let literal = rest[position + 2..].trim();
    if literal.is_empty() {
        return None;
    }

    Some(Predicate {
        property: property.to_string(),
        segments: PathParser::new(property).parse(),
        operator,
        literal: unquote(literal).to_string(),
    })
}

/// Locate the first `==` or `!=` outside nested brackets and their quoted
/// literals
fn find_operator(text: &str) -> Option<(usize, ComparisonOp)> {
    let mut scanner = Scanner::default();
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !scanner.step(c) || scanner.depth() > 0 {
            continue;
        }
        let operator = match c {
            '=' => ComparisonOp::Equal,
            '!' => ComparisonOp::NotEqual,
            _ => continue,
        };
        if matches!(chars.peek(), Some((_, '='))) {
            return Some((i, operator));
        }
    }
    None
}

/// Strip one pair of matching single or double quotes
fn unquote(literal: &str) -> &str {
    for quote in ['"', '\''] {
        if literal.len() >= 2 && literal.starts_with(quote) && literal.ends_with(quote) {
            return &literal[1..literal.len() - 1];
        }
    }
    literal
}
