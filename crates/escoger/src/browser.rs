//! The browser collaborator boundary.
//!
//! Widgets own locator semantics and selection-state logic; everything that
//! actually touches the page goes through this trait. The contract is
//! synchronous and blocking: one widget operation is a sequence of blocking
//! collaborator calls on the calling thread, with no retries and no timeout
//! policy of its own (timeouts, if any, belong to the implementation behind
//! the trait).

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::locator::Locator;
use crate::result::BrowserError;

/// Result type for collaborator calls
pub type BrowserResult<T> = Result<T, BrowserError>;

/// DOM access capability expected from the automation backend.
///
/// The crate ships [`crate::mock::MockBrowser`] for tests; a production
/// implementation wraps whatever driver the test suite already uses.
pub trait Browser {
    /// Handle to a live element. Handles are only valid while the page that
    /// produced them is rendered; widgets re-resolve locators instead of
    /// caching handles across operations.
    type Element: Clone + Debug;

    /// Resolve `locator` to a single element, scoped to `parent` when one is
    /// given (document root otherwise). First match in document order wins.
    fn element(
        &self,
        locator: &Locator,
        parent: Option<&Self::Element>,
    ) -> BrowserResult<Self::Element>;

    /// Resolve `locator` to every matching element, in document order.
    fn elements(
        &self,
        locator: &Locator,
        parent: Option<&Self::Element>,
    ) -> BrowserResult<Vec<Self::Element>>;

    /// Visible text of `element`, whitespace-normalized.
    fn text(&self, element: &Self::Element) -> BrowserResult<String>;

    /// The element's style-class set.
    fn classes(&self, element: &Self::Element) -> BrowserResult<BTreeSet<String>>;

    /// Whether a selectable control (checkbox, radio, option) is currently
    /// selected.
    fn is_selected(&self, element: &Self::Element) -> BrowserResult<bool>;

    /// Click `element`.
    fn click(&self, element: &Self::Element) -> BrowserResult<()>;
}
