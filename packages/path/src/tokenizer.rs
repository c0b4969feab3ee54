//! Path string tokenizer
//!
//! Splits a path into raw segments at top-level dots and separates each
//! segment's property name from its bracketed indexer. Dots inside brackets
//! (`[@.id==2]`) and inside quoted literals (`[@.host=="a.b"]`) do not split.
//! Quote characters inside a bare literal (`[@.name==O'Brien]`) are plain
//! text.

/// Bracket part of a raw segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BracketContent<'a> {
    /// Content between a balanced `[` and the `]` that ends the segment
    Closed(&'a str),
    /// Everything after `[` when the bracket never closes, or when text
    /// follows the closing bracket
    Unbalanced(&'a str),
}

/// Character scanner shared by the splitters and the predicate parser.
///
/// Tracks bracket depth and quoted predicate literals. A quote opens a
/// literal only when it is the first non-space character after `==` or `!=`
/// inside brackets; anywhere else it is an ordinary character, so bare
/// literals such as `O'Brien` scan like any other token.
#[derive(Debug, Default)]
pub(crate) struct Scanner {
    depth: usize,
    quote: Option<char>,
    awaiting_literal: bool,
    previous: Option<char>,
}

impl Scanner {
    pub(crate) fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Consume `c`. Returns `false` while `c` belongs to a quoted literal,
    /// including its delimiters.
    pub(crate) fn step(&mut self, c: char) -> bool {
        let previous = self.previous.replace(c);
        if let Some(q) = self.quote {
            if c == q {
                self.quote = None;
            }
            return false;
        }

        if self.awaiting_literal {
            if c.is_whitespace() {
                return true;
            }
            self.awaiting_literal = false;
            if c == '\'' || c == '"' {
                self.quote = Some(c);
                return false;
            }
        }

        match c {
            '[' => self.depth += 1,
            ']' => self.depth = self.depth.saturating_sub(1),
            '=' if self.depth > 0 && matches!(previous, Some('=' | '!')) => {
                self.awaiting_literal = true;
            }
            _ => {}
        }
        true
    }
}

/// Split a path expression at `.` characters outside brackets and quoted
/// literals.
///
/// Empty components (leading, trailing or doubled dots) are dropped.
#[must_use]
pub fn split_components(input: &str) -> Vec<&str> {
    let mut components = Vec::new();
    let mut scanner = Scanner::default();
    let mut start = 0;

    for (i, c) in input.char_indices() {
        if !scanner.step(c) {
            continue;
        }
        if c == '.' && scanner.depth() == 0 {
            if i > start {
                components.push(&input[start..i]);
            }
            start = i + 1;
        }
    }

    if start < input.len() {
        components.push(&input[start..]);
    }
    components
}

/// Separate a raw segment into its property name and bracket content
pub(crate) fn split_bracket(segment: &str) -> (&str, Option<BracketContent<'_>>) {
    let Some(open) = segment.find('[') else {
        return (segment, None);
    };
    let name = &segment[..open];
    let rest = &segment[open + 1..];

    let mut scanner = Scanner::with_depth(1);
    for (i, c) in rest.char_indices() {
        if scanner.step(c) && c == ']' && scanner.depth() == 0 {
            let content = if i + 1 == rest.len() {
                BracketContent::Closed(&rest[..i])
            } else {
                BracketContent::Unbalanced(rest)
            };
            return (name, Some(content));
        }
    }

    (name, Some(BracketContent::Unbalanced(rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_dotted_path() {
        assert_eq!(split_components("a.b.c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_predicate_dots_inside_brackets() {
        assert_eq!(
            split_components("a.b[@.id==2].name"),
            vec!["a", "b[@.id==2]", "name"]
        );
        assert_eq!(
            split_components("hosts[@.name==\"x.y]z\"].port"),
            vec!["hosts[@.name==\"x.y]z\"]", "port"]
        );
    }

    #[test]
    fn quotes_inside_bare_literals_are_plain_text() {
        assert_eq!(
            split_components("people[@.name==O'Brien].age"),
            vec!["people[@.name==O'Brien]", "age"]
        );
        assert_eq!(split_components("s[@.v==5\"].v"), vec!["s[@.v==5\"]", "v"]);
        assert_eq!(
            split_components("people[@.name== 'O.Brien'].age"),
            vec!["people[@.name== 'O.Brien']", "age"]
        );
    }

    #[test]
    fn drops_empty_components() {
        assert_eq!(split_components(".a..b."), vec!["a", "b"]);
        assert!(split_components("").is_empty());
        assert!(split_components("...").is_empty());
    }

    #[test]
    fn bracket_split() {
        assert_eq!(split_bracket("name"), ("name", None));
        assert_eq!(
            split_bracket("items[3]"),
            ("items", Some(BracketContent::Closed("3")))
        );
        assert_eq!(
            split_bracket("items[@.tags[0]==x]"),
            ("items", Some(BracketContent::Closed("@.tags[0]==x")))
        );
        assert_eq!(
            split_bracket("items[0"),
            ("items", Some(BracketContent::Unbalanced("0")))
        );
        assert_eq!(
            split_bracket("items[0][1]"),
            ("items", Some(BracketContent::Unbalanced("0][1]")))
        );
        assert_eq!(split_bracket("[2]"), ("", Some(BracketContent::Closed("2"))));
        assert_eq!(
            split_bracket("people[@.name==O'Brien]"),
            ("people", Some(BracketContent::Closed("@.name==O'Brien")))
        );
        assert_eq!(
            split_bracket("hosts[@.name==\"x]y\"]"),
            ("hosts", Some(BracketContent::Closed("@.name==\"x]y\"")))
        );
    }
}
