//! Locator abstraction for element selection.
//!
//! Widgets never hold element handles across operations; every interaction
//! re-resolves its locator against the live page. A locator is therefore
//! plain data: a selector expression and nothing else. The menu markup this
//! crate targets is matched by XPath with normalized-whitespace text
//! comparison, so this module also carries the XPath string-literal quoting
//! rules that the locator table depends on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector (e.g., "button.primary")
    Css(String),
    /// XPath expression, resolved relative to a parent element when one is
    /// given (leading `.//` in the conventions used here)
    XPath(String),
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create an XPath selector
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    /// The raw selector expression
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Css(s) | Self::XPath(s) => s,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css={s}"),
            Self::XPath(s) => write!(f, "xpath={s}"),
        }
    }
}

/// A locator for finding elements relative to a scope.
///
/// The widgets in this crate scope every lookup to their container element,
/// so the XPath expressions are all relative (`.//...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    selector: Selector,
}

impl Locator {
    /// Locator from a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            selector: Selector::css(selector),
        }
    }

    /// Locator from an XPath expression
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self {
            selector: Selector::xpath(expression),
        }
    }

    /// Locator from an already-built selector
    #[must_use]
    pub fn from_selector(selector: Selector) -> Self {
        Self { selector }
    }

    /// Get the selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl From<Selector> for Locator {
    fn from(selector: Selector) -> Self {
        Self { selector }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector)
    }
}

/// Quote `text` as an XPath 1.0 string literal.
///
/// XPath 1.0 literals have no escape sequences, so the quoting character is
/// picked to not collide with the text: single quotes when possible, double
/// quotes otherwise, and a `concat(...)` expression when the text contains
/// both quote characters.
#[must_use]
pub fn quote(text: &str) -> String {
    if !text.contains('\'') {
        format!("'{text}'")
    } else if !text.contains('"') {
        format!("\"{text}\"")
    } else {
        let parts: Vec<String> = text
            .split('\'')
            .map(|chunk| format!("'{chunk}'"))
            .collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}

/// Inverse of [`quote`]: recover the text of an XPath string literal,
/// including the `concat(...)` form. Returns `None` when `literal` is not a
/// well-formed literal.
#[must_use]
pub fn unquote(literal: &str) -> Option<String> {
    let literal = literal.trim();
    if let Some(inner) = literal
        .strip_prefix("concat(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let mut text = String::new();
        for part in split_concat_args(inner) {
            text.push_str(&unquote_plain(part.trim())?);
        }
        Some(text)
    } else {
        unquote_plain(literal)
    }
}

fn unquote_plain(literal: &str) -> Option<String> {
    let quote_char = literal.chars().next()?;
    if quote_char != '\'' && quote_char != '"' {
        return None;
    }
    if literal.len() < 2 || !literal.ends_with(quote_char) {
        return None;
    }
    let inner = &literal[1..literal.len() - 1];
    // no escapes in XPath 1.0: the quote character cannot reappear inside
    if inner.contains(quote_char) {
        return None;
    }
    Some(inner.to_string())
}

/// Split `concat(...)` arguments on top-level commas, respecting quoted
/// sections.
fn split_concat_args(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in args.char_indices() {
        match in_quote {
            Some(q) if c == q => in_quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => in_quote = Some(c),
            None if c == ',' => {
                parts.push(&args[start..i]);
                start = i + 1;
            }
            None => {}
        }
    }
    parts.push(&args[start..]);
    parts
}

/// Substitute `value` for the single `{}` placeholder in a locator template.
pub(crate) fn substitute(template: &str, value: &str) -> String {
    template.replacen("{}", value, 1)
}
