//! Result and error types for Escoger.
//!
//! Two domain error kinds exist at the widget boundary, both wrapping the
//! generic menu errors they originate from: an item label that matches no
//! rendered item, and an item that is rendered but not selectable. Both carry
//! their diagnostic payload (the labels that were actually available or
//! enabled) as structured data so callers and tests can assert on content
//! rather than parse a message.

use thiserror::Error;

/// Result type for widget operations
pub type SelectResult<T> = Result<T, SelectError>;

/// Failures reported by the browser collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    /// No element matched the locator
    #[error("no such element: {selector}")]
    NoSuchElement {
        /// The locator that matched nothing
        selector: String,
    },

    /// Any other collaborator failure (lost session, stale handle, ...)
    #[error("browser backend error: {message}")]
    Backend {
        /// Error message from the backend
        message: String,
    },
}

/// Errors raised by the generic dropdown menu layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Requested label matches no rendered item
    #[error("menu item {item:?} not found")]
    ItemNotFound {
        /// The label that was looked up
        item: String,
    },

    /// Requested label matches an item that is not selectable
    #[error("menu item {item:?} is disabled")]
    ItemDisabled {
        /// The label that was looked up
        item: String,
    },

    /// Collaborator failure below the menu layer
    #[error(transparent)]
    Browser(#[from] BrowserError),
}

/// Errors raised at the select widget boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Requested label does not match any rendered item
    #[error("item {item:?} not found; available items: {available:?}")]
    ItemNotFound {
        /// The label that was looked up
        item: String,
        /// Labels currently rendered, in document order
        available: Vec<String>,
    },

    /// Requested label matches a rendered item that is not selectable
    #[error("item {item:?} is disabled; the following items are available and enabled: {enabled:?}")]
    ItemDisabled {
        /// The label that was looked up
        item: String,
        /// Labels currently selectable, in document order
        enabled: Vec<String>,
    },

    /// Collaborator failure below the widget layer
    #[error(transparent)]
    Browser(#[from] BrowserError),
}

/// Pass-through conversion for menu operations whose item-lookup failures
/// have already been enriched by the widget layer (open, close, listing).
/// Lookup paths match on [`MenuError`] explicitly and attach the available or
/// enabled labels before converting.
impl From<MenuError> for SelectError {
    fn from(error: MenuError) -> Self {
        match error {
            MenuError::ItemNotFound { item } => Self::ItemNotFound {
                item,
                available: Vec::new(),
            },
            MenuError::ItemDisabled { item } => Self::ItemDisabled {
                item,
                enabled: Vec::new(),
            },
            MenuError::Browser(browser) => Self::Browser(browser),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_lists_available_items() {
        let error = SelectError::ItemNotFound {
            item: "Delta".to_string(),
            available: vec!["Alpha".to_string(), "Beta".to_string()],
        };
        let message = error.to_string();
        assert!(message.contains("\"Delta\""));
        assert!(message.contains("Alpha"));
        assert!(message.contains("Beta"));
    }

    #[test]
    fn test_disabled_message_lists_enabled_items() {
        let error = SelectError::ItemDisabled {
            item: "Beta".to_string(),
            enabled: vec!["Alpha".to_string(), "Gamma".to_string()],
        };
        let message = error.to_string();
        assert!(message.contains("disabled"));
        assert!(message.contains("Gamma"));
    }

    #[test]
    fn test_browser_error_is_transparent() {
        let error = SelectError::from(MenuError::Browser(BrowserError::NoSuchElement {
            selector: "xpath=.//button".to_string(),
        }));
        assert_eq!(error.to_string(), "no such element: xpath=.//button");
    }
}
