//! Mock page model for widget tests.
//!
//! An in-memory rendering of the PatternFly select and checkbox-select
//! markup that implements [`Browser`] by interpreting the crate's locator
//! table. Tests drive the real widget code against it instead of a model of
//! the widget code, without a browser in the loop.
//!
//! The page behaves like the real component: item rows only render while the
//! menu is expanded, picking a single-select item updates the trigger text
//! and collapses the menu, and clicking a row's toggle control flips its
//! selected state while leaving the menu open.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::browser::{Browser, BrowserResult};
use crate::locator::{unquote, Locator, Selector};
use crate::menu::{BUTTON_LOCATOR, DISABLED_MARKER, EXPANDED_MARKER};
use crate::result::BrowserError;
use crate::select::ROW_INPUT_LOCATOR;

/// One rendered menu item row.
#[derive(Debug, Clone)]
pub struct MockItem {
    label: String,
    enabled: bool,
    selected: bool,
    has_control: bool,
}

impl MockItem {
    /// New enabled, unselected row without a toggle control.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            selected: false,
            has_control: false,
        }
    }

    /// Mark the row disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Give the row a toggle control.
    #[must_use]
    pub fn with_control(mut self) -> Self {
        self.has_control = true;
        self
    }

    /// Pre-select the row's toggle control (implies a control).
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.has_control = true;
        self.selected = true;
        self
    }
}

#[derive(Debug)]
struct PageState {
    open: bool,
    toggle_text: String,
    items: Vec<MockItem>,
}

/// Element handle produced by [`MockBrowser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockElement {
    /// The widget's container element
    Root,
    /// The menu toggle button
    Toggle,
    /// Item row at the given rendered index
    Row(usize),
    /// Toggle control inside the row at the given index
    Control(usize),
}

/// In-memory select page implementing [`Browser`].
///
/// Cloning shares the underlying page state, so a test keeps one handle for
/// assertions while the widget under test owns another.
#[derive(Debug, Clone)]
pub struct MockBrowser {
    state: Rc<RefCell<PageState>>,
}

impl MockBrowser {
    /// Page with a single-select menu: rows carry no toggle controls.
    #[must_use]
    pub fn select(items: Vec<MockItem>) -> Self {
        Self::with_toggle_text("Options", items)
    }

    /// Page with a checkbox-select menu: every row gets a toggle control.
    #[must_use]
    pub fn checkbox_select(items: Vec<MockItem>) -> Self {
        let items = items
            .into_iter()
            .map(|mut item| {
                item.has_control = true;
                item
            })
            .collect();
        Self::with_toggle_text("Filter", items)
    }

    /// Page with an explicit trigger button text and rows as given.
    pub fn with_toggle_text(text: impl Into<String>, items: Vec<MockItem>) -> Self {
        Self {
            state: Rc::new(RefCell::new(PageState {
                open: false,
                toggle_text: text.into(),
                items,
            })),
        }
    }

    /// Whether the menu is currently expanded
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    /// Current trigger button text
    #[must_use]
    pub fn toggle_text(&self) -> String {
        self.state.borrow().toggle_text.clone()
    }

    /// Labels whose toggle control is currently selected, in rendered order
    #[must_use]
    pub fn selected_labels(&self) -> Vec<String> {
        self.state
            .borrow()
            .items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.label.clone())
            .collect()
    }

    fn find_row(&self, label: &str) -> Option<usize> {
        self.state
            .borrow()
            .items
            .iter()
            .position(|item| item.label == label)
    }

    /// Interpret `locator` against the current page state.
    fn resolve(
        &self,
        locator: &Locator,
        parent: Option<&MockElement>,
    ) -> BrowserResult<Vec<MockElement>> {
        let expr = match locator.selector() {
            Selector::XPath(expr) => expr.as_str(),
            Selector::Css(_) => {
                return Err(BrowserError::Backend {
                    message: format!("mock page only renders XPath locators: {locator}"),
                })
            }
        };

        // widget container lookup from the document root
        if parent.is_none() && expr.contains("c-select") {
            return Ok(vec![MockElement::Root]);
        }

        // the menu toggle button under the container
        if expr == BUTTON_LOCATOR {
            return Ok(vec![MockElement::Toggle]);
        }

        // a row's toggle control, scoped to an already-resolved row
        if expr == ROW_INPUT_LOCATOR {
            return Ok(match parent {
                Some(MockElement::Row(i)) if self.state.borrow().items[*i].has_control => {
                    vec![MockElement::Control(*i)]
                }
                _ => vec![],
            });
        }

        // every rendered row; rows only exist while the menu is expanded
        if expr.starts_with(".//ul[@class='pf-v5-c-menu__list']") {
            if !self.state.borrow().open {
                return Ok(vec![]);
            }
            let count = self.state.borrow().items.len();
            return Ok((0..count).map(MockElement::Row).collect());
        }

        // a single row (or its control) matched by normalized visible text
        if let Some(pos) = expr.find("normalize-space(.)=") {
            let want_control = expr.ends_with("//input");
            let tail = expr.strip_suffix("//input").unwrap_or(expr);
            let literal = tail[pos + "normalize-space(.)=".len()..]
                .strip_suffix(']')
                .ok_or_else(|| BrowserError::Backend {
                    message: format!("malformed text-match locator: {locator}"),
                })?;
            let label = unquote(literal).ok_or_else(|| BrowserError::Backend {
                message: format!("malformed XPath literal in locator: {locator}"),
            })?;
            if !self.state.borrow().open {
                return Ok(vec![]);
            }
            return Ok(match self.find_row(&label) {
                Some(i) if want_control => {
                    if self.state.borrow().items[i].has_control {
                        vec![MockElement::Control(i)]
                    } else {
                        vec![]
                    }
                }
                Some(i) => vec![MockElement::Row(i)],
                None => vec![],
            });
        }

        Err(BrowserError::Backend {
            message: format!("mock page does not render locator: {locator}"),
        })
    }
}

impl Browser for MockBrowser {
    type Element = MockElement;

    fn element(
        &self,
        locator: &Locator,
        parent: Option<&Self::Element>,
    ) -> BrowserResult<Self::Element> {
        self.resolve(locator, parent)?
            .into_iter()
            .next()
            .ok_or_else(|| BrowserError::NoSuchElement {
                selector: locator.to_string(),
            })
    }

    fn elements(
        &self,
        locator: &Locator,
        parent: Option<&Self::Element>,
    ) -> BrowserResult<Vec<Self::Element>> {
        self.resolve(locator, parent)
    }

    fn text(&self, element: &Self::Element) -> BrowserResult<String> {
        let state = self.state.borrow();
        Ok(match element {
            MockElement::Root | MockElement::Toggle => state.toggle_text.clone(),
            MockElement::Row(i) | MockElement::Control(i) => state.items[*i].label.clone(),
        })
    }

    fn classes(&self, element: &Self::Element) -> BrowserResult<BTreeSet<String>> {
        let state = self.state.borrow();
        let mut classes = BTreeSet::new();
        match element {
            MockElement::Root => {
                classes.insert("pf-v5-c-select".to_string());
            }
            MockElement::Toggle => {
                classes.insert("pf-v5-c-menu-toggle".to_string());
                if state.open {
                    classes.insert(EXPANDED_MARKER.to_string());
                }
            }
            MockElement::Row(i) => {
                classes.insert("pf-v5-c-menu__list-item".to_string());
                if !state.items[*i].enabled {
                    classes.insert(DISABLED_MARKER.to_string());
                }
            }
            MockElement::Control(_) => {
                classes.insert("pf-v5-c-check__input".to_string());
            }
        }
        Ok(classes)
    }

    fn is_selected(&self, element: &Self::Element) -> BrowserResult<bool> {
        match element {
            MockElement::Control(i) => Ok(self.state.borrow().items[*i].selected),
            other => Err(BrowserError::Backend {
                message: format!("{other:?} is not a selectable control"),
            }),
        }
    }

    fn click(&self, element: &Self::Element) -> BrowserResult<()> {
        let mut state = self.state.borrow_mut();
        match element {
            MockElement::Toggle => {
                state.open = !state.open;
                Ok(())
            }
            MockElement::Row(i) => {
                if !state.open {
                    return Err(BrowserError::Backend {
                        message: "clicked a row of a collapsed menu".to_string(),
                    });
                }
                // picking a single-select item updates the trigger text and
                // collapses the menu, like the real component
                state.toggle_text = state.items[*i].label.clone();
                state.open = false;
                Ok(())
            }
            MockElement::Control(i) => {
                if !state.open {
                    return Err(BrowserError::Backend {
                        message: "clicked a control of a collapsed menu".to_string(),
                    });
                }
                state.items[*i].selected = !state.items[*i].selected;
                Ok(())
            }
            MockElement::Root => Err(BrowserError::Backend {
                message: "the container element is not clickable".to_string(),
            }),
        }
    }
}
