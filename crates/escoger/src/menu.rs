//! Generic dropdown menu capability.
//!
//! [`Menu`] is the base component the select widgets compose: it owns the
//! open/close state handling, item lookup by visible text, and the listing
//! operations, all against the PatternFly v5 menu markup. The capability set
//! is spelled out as the [`Dropdown`] trait so widgets and tests can stand in
//! alternative implementations.
//!
//! The on-page open state is treated as a scoped resource: operations that
//! need the menu open acquire it through [`Menu::opened`] and get a guard
//! that releases it on every exit path, errors included.

use tracing::{debug, warn};

use crate::browser::Browser;
use crate::locator::{quote, substitute, Locator};
use crate::result::{BrowserError, MenuError};

/// Result type for menu-layer operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Marker class on an expanded menu toggle
pub const EXPANDED_MARKER: &str = "pf-m-expanded";

/// Marker class on a disabled menu item
pub const DISABLED_MARKER: &str = "pf-m-disabled";

/// Toggle button of a menu component
pub const BUTTON_LOCATOR: &str = ".//button";

/// Every rendered item row of an open menu
pub const ITEMS_LOCATOR: &str =
    ".//ul[@class='pf-v5-c-menu__list']/li[contains(@class, 'pf-v5-c-menu__list-item')]";

/// One item row matched by normalized visible text; `{}` takes the quoted label
pub const ITEM_LOCATOR: &str =
    ".//*[contains(@class, 'pf-v5-c-menu__list-item') and normalize-space(.)={}]";

/// Locator for the item row labelled `item`.
pub(crate) fn row_locator(item: &str) -> Locator {
    Locator::xpath(substitute(ITEM_LOCATOR, &quote(item)))
}

/// Capability set of a dropdown menu.
///
/// Everything the select widgets need from their menu: open/close, item
/// lookup and selection, and label listings. Implemented by [`Menu`];
/// widgets depend on the capability, not the component.
pub trait Dropdown {
    /// Element handle type of the underlying browser
    type Element;

    /// Whether the menu is currently expanded
    fn is_open(&self) -> MenuResult<bool>;

    /// Expand the menu. No-op when already open.
    fn open(&self) -> MenuResult<()>;

    /// Collapse the menu. No-op when already closed.
    fn close(&self) -> MenuResult<()>;

    /// Element for the item row labelled `item`, opening the menu first and
    /// closing it again when `close` is true.
    fn item_element(&self, item: &str, close: bool) -> MenuResult<Self::Element>;

    /// Open the menu, click the item labelled `item`, close the menu.
    ///
    /// Fails with [`MenuError::ItemDisabled`] when the item is rendered but
    /// carries the disabled marker; the menu still ends closed.
    fn item_select(&self, item: &str) -> MenuResult<()>;

    /// All item labels, in rendered order. The menu ends closed.
    fn items(&self) -> MenuResult<Vec<String>>;

    /// Labels of the items that can currently be selected. The menu ends
    /// closed.
    fn enabled_items(&self) -> MenuResult<Vec<String>>;
}

/// Base menu component bound to one container element.
#[derive(Debug)]
pub struct Menu<B: Browser> {
    browser: B,
    root: Locator,
}

impl<B: Browser> Menu<B> {
    /// Bind to the container matched by `root`.
    pub fn new(browser: B, root: Locator) -> Self {
        Self { browser, root }
    }

    /// Locator of the bound container
    #[must_use]
    pub const fn root(&self) -> &Locator {
        &self.root
    }

    pub(crate) const fn browser(&self) -> &B {
        &self.browser
    }

    /// Resolve the bound container element against the live page.
    pub(crate) fn root_element(&self) -> MenuResult<B::Element> {
        Ok(self.browser.element(&self.root, None)?)
    }

    fn toggle_element(&self) -> MenuResult<B::Element> {
        let root = self.root_element()?;
        Ok(self
            .browser
            .element(&Locator::xpath(BUTTON_LOCATOR), Some(&root))?)
    }

    /// Open the menu and return a guard that closes it again on drop.
    pub fn opened(&self) -> MenuResult<OpenedMenu<'_, B>> {
        self.open()?;
        Ok(OpenedMenu {
            menu: self,
            armed: true,
        })
    }

    /// Every rendered item row, in document order. Rows only render while
    /// the menu is open.
    pub(crate) fn item_rows(&self) -> MenuResult<Vec<B::Element>> {
        let root = self.root_element()?;
        Ok(self
            .browser
            .elements(&Locator::xpath(ITEMS_LOCATOR), Some(&root))?)
    }

    fn labels(&self, enabled_only: bool) -> MenuResult<Vec<String>> {
        let guard = self.opened()?;
        let mut labels = Vec::new();
        for row in self.item_rows()? {
            if enabled_only && self.browser.classes(&row)?.contains(DISABLED_MARKER) {
                continue;
            }
            labels.push(self.browser.text(&row)?);
        }
        guard.close()?;
        Ok(labels)
    }
}

impl<B: Browser> Dropdown for Menu<B> {
    type Element = B::Element;

    fn is_open(&self) -> MenuResult<bool> {
        let toggle = self.toggle_element()?;
        Ok(self.browser.classes(&toggle)?.contains(EXPANDED_MARKER))
    }

    fn open(&self) -> MenuResult<()> {
        if !self.is_open()? {
            debug!(root = %self.root, "opening menu");
            self.browser.click(&self.toggle_element()?)?;
        }
        Ok(())
    }

    fn close(&self) -> MenuResult<()> {
        if self.is_open()? {
            debug!(root = %self.root, "closing menu");
            self.browser.click(&self.toggle_element()?)?;
        }
        Ok(())
    }

    fn item_element(&self, item: &str, close: bool) -> MenuResult<Self::Element> {
        self.open()?;
        let root = self.root_element()?;
        let found = self.browser.element(&row_locator(item), Some(&root));
        if close {
            self.close()?;
        }
        match found {
            Ok(row) => Ok(row),
            Err(BrowserError::NoSuchElement { .. }) => Err(MenuError::ItemNotFound {
                item: item.to_string(),
            }),
            Err(other) => Err(other.into()),
        }
    }

    fn item_select(&self, item: &str) -> MenuResult<()> {
        let guard = self.opened()?;
        let row = self.item_element(item, false)?;
        if self.browser.classes(&row)?.contains(DISABLED_MARKER) {
            // guard closes the menu on the way out
            return Err(MenuError::ItemDisabled {
                item: item.to_string(),
            });
        }
        debug!(root = %self.root, item, "selecting menu item");
        self.browser.click(&row)?;
        guard.close()
    }

    fn items(&self) -> MenuResult<Vec<String>> {
        self.labels(false)
    }

    fn enabled_items(&self) -> MenuResult<Vec<String>> {
        self.labels(true)
    }
}

/// Scoped open state of a [`Menu`].
///
/// Dropping the guard closes the menu again, so a failure midway through a
/// multi-step interaction never leaves the menu hanging open. Call
/// [`OpenedMenu::close`] on the happy path to surface close failures, or
/// [`OpenedMenu::leave_open`] to hand the open menu to a follow-up operation.
#[derive(Debug)]
pub struct OpenedMenu<'a, B: Browser> {
    menu: &'a Menu<B>,
    armed: bool,
}

impl<B: Browser> OpenedMenu<'_, B> {
    /// Close the menu now, propagating any failure.
    pub fn close(mut self) -> MenuResult<()> {
        self.armed = false;
        self.menu.close()
    }

    /// Disarm the guard, leaving the menu open.
    pub fn leave_open(mut self) {
        self.armed = false;
    }
}

impl<B: Browser> Drop for OpenedMenu<'_, B> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(error) = self.menu.close() {
                warn!(root = %self.menu.root, %error, "failed to close menu during cleanup");
            }
        }
    }
}
