//! Query compilation — raw type-ahead text to a case-insensitive [`Predicate`].
//!
//! The transform, in order:
//!
//! 1. collapse runs of spaces into a single space,
//! 2. escape every regex meta character so the text matches literally,
//! 3. turn each remaining space into a `.*` wildcard.
//!
//! `"fo ba"` therefore becomes `fo.*ba`: both tokens must appear, in query
//! order, with anything (or nothing) in between.

use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

/// Characters the regex crate treats as syntax. [`regex::escape`] prefixes
/// each of these with a backslash; the list is pinned here so the tests can
/// check every one of them is matched literally after compilation.
pub const META_CHARACTERS: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$', '#', '&', '-', '~',
];

/// Pattern substituted for each space in the query.
pub const WILDCARD: &str = ".*";

// ---------------------------------------------------------------------------
// String transforms
// ---------------------------------------------------------------------------

/// Collapse every run of consecutive spaces into one space.
///
/// Only U+0020 is touched; tabs and other whitespace are ordinary characters.
pub fn collapse_spaces(query: &str) -> Cow<'_, str> {
    if !query.contains("  ") {
        return Cow::Borrowed(query);
    }
    let mut out = String::with_capacity(query.len());
    let mut prev_space = false;
    for c in query.chars() {
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Regex source for `query`: collapsed, escaped, spaces turned into [`WILDCARD`].
pub fn to_regex_source(query: &str) -> String {
    collapse_spaces(query)
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(WILDCARD)
}

/// Like [`to_regex_source`], with every token in a capture group and lazy
/// gaps, so the captures land on the leftmost in-order occurrences.
fn to_span_source(query: &str) -> String {
    collapse_spaces(query)
        .split(' ')
        .map(|token| format!("({})", regex::escape(token)))
        .collect::<Vec<_>>()
        .join(".*?")
}

fn build(source: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
}

/// Lowercase `text` char by char. `origin[i]` is the offset in `text` of the
/// char that produced folded byte `i`; one extra entry holds `text.len()`.
fn fold_case(text: &str) -> (String, Vec<usize>) {
    let mut folded = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len() + 1);
    for (i, c) in text.char_indices() {
        folded.extend(c.to_lowercase());
        origin.resize(folded.len(), i);
    }
    origin.push(text.len());
    (folded, origin)
}

/// Find `tokens` in `haystack`, in order, each after the previous one.
fn scan_tokens(tokens: &[String], haystack: &str) -> Option<Vec<Range<usize>>> {
    let mut at = 0;
    tokens
        .iter()
        .map(|token| {
            let start = at + haystack[at..].find(token.as_str())?;
            at = start + token.len();
            Some(start..at)
        })
        .collect()
}

fn token_matcher(query: &str) -> Matcher {
    Matcher::Tokens(
        collapse_spaces(query)
            .split(' ')
            .map(|token| fold_case(token).0)
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Matcher {
    /// Empty query.
    Everything,
    Regex(Regex),
    /// Lowercased tokens, searched for in order. Only used when the regex
    /// cannot be built (a query so long the compiled program exceeds the
    /// regex size limit).
    Tokens(Vec<String>),
}

/// A compiled query. Cheap to clone, expensive to build; [`Category`]
/// keeps the one for its current query.
///
/// [`Category`]: crate::Category
#[derive(Debug, Clone)]
pub struct Predicate {
    raw: String,
    matcher: Matcher,
    /// Capturing regex for [`find_spans`](Self::find_spans), built on first use.
    spans: OnceLock<Option<Regex>>,
}

impl Predicate {
    /// The query text this predicate was compiled from, uncollapsed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn matches_everything(&self) -> bool {
        matches!(self.matcher, Matcher::Everything)
    }

    /// Does `text` contain the query tokens, in order, ignoring case?
    pub fn is_match(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Everything => true,
            Matcher::Regex(rx) => rx.is_match(text),
            Matcher::Tokens(tokens) => scan_tokens(tokens, &fold_case(text).0).is_some(),
        }
    }

    /// Byte ranges in `text` of the query tokens, in query order. Empty when
    /// `text` does not match or the query is empty; empty tokens (from a
    /// leading or trailing space) produce no range.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        let spans: Vec<Range<usize>> = match &self.matcher {
            Matcher::Everything => return Vec::new(),
            Matcher::Regex(_) => {
                let rx = self
                    .spans
                    .get_or_init(|| build(&to_span_source(&self.raw)).ok());
                match rx.as_ref().and_then(|rx| rx.captures(text)) {
                    Some(caps) => caps.iter().skip(1).flatten().map(|m| m.range()).collect(),
                    None => return Vec::new(),
                }
            }
            Matcher::Tokens(tokens) => {
                let (folded, origin) = fold_case(text);
                match scan_tokens(tokens, &folded) {
                    Some(found) => found
                        .into_iter()
                        .map(|r| origin[r.start]..origin[r.end])
                        .collect(),
                    None => return Vec::new(),
                }
            }
        };
        spans.into_iter().filter(|r| !r.is_empty()).collect()
    }
}

/// Compile a raw query. Never fails: escaping leaves nothing that could make
/// the pattern malformed.
pub fn compile(query: &str) -> Predicate {
    let raw = query.to_string();
    if query.is_empty() {
        return Predicate {
            raw,
            matcher: Matcher::Everything,
            spans: OnceLock::new(),
        };
    }

    let source = to_regex_source(query);
    tracing::trace!(query, source = %source, "pattern: compiling");

    let matcher = match build(&source) {
        Ok(rx) => Matcher::Regex(rx),
        Err(err) => {
            tracing::warn!(
                error = %err,
                len = query.len(),
                "pattern: regex rejected, using token scan"
            );
            token_matcher(query)
        }
    };

    Predicate {
        raw,
        matcher,
        spans: OnceLock::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
