//! Fixed diagnostic strings and outcome rendering for the CLI.
//!
//! Every invocation prints exactly one line: the deepest text itself, or
//! one of these constants.

use burrow_core::Outcome;

pub const MALFORMED_HTML: &str = "malformed HTML";
pub const NO_TEXT_FOUND: &str = "No text found in the HTML.";
pub const URL_CONNECTION_ERROR: &str = "URL connection error";

/// Map an analysis outcome onto its output line.
pub fn render(outcome: Outcome) -> String {
    match outcome {
        Outcome::DeepestText(text) => text,
        Outcome::Malformed => MALFORMED_HTML.to_string(),
        Outcome::NoText => NO_TEXT_FOUND.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deepest_text_renders_verbatim() {
        let outcome = Outcome::DeepestText("hello".to_string());
        assert_eq!(render(outcome), "hello");
    }

    #[test]
    fn malformed_renders_the_fixed_string() {
        assert_eq!(render(Outcome::Malformed), MALFORMED_HTML);
    }

    #[test]
    fn no_text_renders_the_fixed_string() {
        assert_eq!(render(Outcome::NoText), NO_TEXT_FOUND);
    }
}
