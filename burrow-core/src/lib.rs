//! Line-oriented tag nesting analyzer.
//!
//! Consumes a document as an ordered sequence of trimmed lines and reports
//! the text sitting deepest inside matching tags, or classifies the document
//! as malformed. Nesting state is an explicit stack of open tag names,
//! maintained across lines; each call to [`analyze`] owns its own stack and
//! record, so calls are independent and reentrant.
//!
//! This is deliberately not an HTML parser: attributes, self-closing tags,
//! comments, CDATA, and entities are all out of scope. Tags are recognised by
//! a word-character name behind an optional `/`, and text is only visible
//! when it sits between a `>` and a `<` on the same physical line.
//!
//! ```
//! use burrow_core::{analyze, Outcome};
//!
//! let lines = ["<html>", "<body>", ">hello<", "</body>", "</html>"];
//! assert_eq!(analyze(lines), Outcome::DeepestText("hello".to_string()));
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// `<name ...>` or `</name ...>`; attributes are matched but ignored.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?\w+)[^>]*>").expect("tag pattern"));

/// Text enclosed by a `>` and the next `<` on the same line.
static TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^<]+)<").expect("text pattern"));

/// Result of analyzing one document.
///
/// Malformed input is a normal return value here, never an error: the
/// analyzer has no failure path of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The text candidate recorded at the strictly greatest nesting depth.
    DeepestText(String),
    /// A closing tag did not match the innermost open tag, or tags were
    /// still open after the last line.
    Malformed,
    /// Structurally sound document with no extractable text.
    NoText,
}

/// Analyze `lines` in document order and report the deepest nested text.
///
/// Per line: tag tokens are scanned left to right, pushing opening names
/// and popping on a matching closer. A closer that finds an empty stack or
/// a different name on top makes the whole document [`Outcome::Malformed`]
/// immediately; the rest of that line is not scanned. Text between a `>`
/// and the next `<` (first occurrence per line, trimmed) is recorded at the
/// stack depth measured after the line's tags were applied, and replaces
/// the running record only at a strictly greater depth, so ties keep the
/// first candidate seen.
///
/// Empty lines contribute nothing and do not reset state:
///
/// ```
/// use burrow_core::{analyze, Outcome};
///
/// let spaced = ["<a>", "", ">x<", "", "</a>"];
/// let dense = ["<a>", ">x<", "</a>"];
/// assert_eq!(analyze(spaced), analyze(dense));
/// ```
pub fn analyze<I, S>(lines: I) -> Outcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stack: Vec<String> = Vec::new();
    let mut deepest: Option<(usize, String)> = None;

    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }

        for caps in TAG_RE.captures_iter(line) {
            let token = &caps[1];
            if let Some(name) = token.strip_prefix('/') {
                match stack.last() {
                    Some(top) if top == name => {
                        stack.pop();
                    }
                    _ => {
                        tracing::debug!(tag = name, open = stack.len(), "mismatched closing tag");
                        return Outcome::Malformed;
                    }
                }
            } else {
                stack.push(token.to_string());
            }
        }

        if let Some(m) = TEXT_RE.captures(line).and_then(|c| c.get(1)) {
            let text = m.as_str().trim();
            if !text.is_empty() {
                // Depth after this line's tags, so text sharing a line with
                // its opening tag counts as a child of that tag.
                let depth = stack.len();
                if deepest.as_ref().is_none_or(|(best, _)| depth > *best) {
                    deepest = Some((depth, text.to_string()));
                }
            }
        }
    }

    if !stack.is_empty() {
        tracing::debug!(unclosed = stack.len(), "tags left open at end of input");
        return Outcome::Malformed;
    }

    match deepest {
        Some((_, text)) => Outcome::DeepestText(text),
        None => Outcome::NoText,
    }
}
