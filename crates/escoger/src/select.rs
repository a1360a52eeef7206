//! Select and checkbox-select widgets.
//!
//! Page objects for the PatternFly v5 Select component
//! (<https://www.patternfly.org/components/menus/select>): [`Select`] for the
//! single-value variant and [`CheckboxSelect`] for the multi-value variant
//! whose options each carry an independent toggle control.
//!
//! Both compose the generic [`Menu`] capability; what they add is the
//! read/fill value contract and lookup errors enriched with the labels that
//! were actually available or enabled at the time of the failure.

use tracing::debug;

use crate::browser::Browser;
use crate::locator::{quote, substitute, Locator};
use crate::menu::{row_locator, Dropdown, Menu, BUTTON_LOCATOR, DISABLED_MARKER};
use crate::result::{BrowserError, MenuError, SelectError, SelectResult};
use crate::widget::{Fillable, Widget};

/// Default container: first "select"-class element in document order
pub const DEFAULT_LOCATOR: &str = r#".//div[contains(@class, "c-select")][1]"#;

/// The component's selected-value display; `{}` takes the quoted value
pub const SELECTED_ITEM_LOCATOR: &str =
    ".//span[contains(@class, 'ins-c-conditional-filter') and normalize-space(.)={}]";

/// A select container matched by its trigger button's visible text; `{}`
/// takes the quoted text
pub const TEXT_LOCATOR: &str =
    ".//div[contains(@class, 'c-select') and child::button[normalize-space(.)={}]]";

/// Toggle control of the item row labelled by the quoted `{}` placeholder
pub const CHECKBOX_ITEM_LOCATOR: &str =
    ".//*[contains(@class, 'pf-v5-c-menu__list-item') and normalize-space(.)={}]//input";

/// Toggle control inside an already-resolved item row
pub const ROW_INPUT_LOCATOR: &str = ".//input";

/// One label or an ordered collection of labels.
///
/// Multi-item operations accept either form; the argument is normalized into
/// an ordered sequence at the boundary and processed in caller order.
#[derive(Debug, Clone)]
pub enum Items<'a> {
    /// A single label
    One(&'a str),
    /// Labels in the order they should be processed
    Many(Vec<&'a str>),
}

impl<'a> Items<'a> {
    fn into_vec(self) -> Vec<&'a str> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

impl<'a> From<&'a str> for Items<'a> {
    fn from(item: &'a str) -> Self {
        Self::One(item)
    }
}

impl<'a> From<Vec<&'a str>> for Items<'a> {
    fn from(items: Vec<&'a str>) -> Self {
        Self::Many(items)
    }
}

impl<'a> From<&'a [&'a str]> for Items<'a> {
    fn from(items: &'a [&'a str]) -> Self {
        Self::Many(items.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Items<'a> {
    fn from(items: [&'a str; N]) -> Self {
        Self::Many(items.to_vec())
    }
}

/// Single-value select widget.
///
/// Holds at most one selected item at a time, displayed as the trigger
/// button's text. Lookup failures from the wrapped menu are re-raised with
/// the diagnostic payload a test author actually wants: the labels that were
/// available (not found) or still enabled (disabled).
#[derive(Debug)]
pub struct Select<B: Browser> {
    menu: Menu<B>,
}

impl<B: Browser> Select<B> {
    /// Bind to the first "select"-class container in document order.
    pub fn new(browser: B) -> Self {
        Self::with_root(browser, Locator::xpath(DEFAULT_LOCATOR))
    }

    /// Bind to an explicit container locator.
    pub fn with_root(browser: B, root: Locator) -> Self {
        Self {
            menu: Menu::new(browser, root),
        }
    }

    /// The wrapped menu capability
    #[must_use]
    pub const fn menu(&self) -> &Menu<B> {
        &self.menu
    }

    /// Element for the item row labelled `item`, closing the menu again when
    /// `close` is true.
    pub fn item_element(&self, item: &str, close: bool) -> SelectResult<B::Element> {
        match self.menu.item_element(item, close) {
            Ok(row) => Ok(row),
            Err(MenuError::ItemNotFound { item }) => Err(SelectError::ItemNotFound {
                available: self.menu.items()?,
                item,
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// Open the menu, select `item`, close the menu.
    pub fn item_select(&self, item: &str) -> SelectResult<()> {
        match self.menu.item_select(item) {
            Ok(()) => Ok(()),
            Err(MenuError::ItemNotFound { item }) => Err(SelectError::ItemNotFound {
                available: self.menu.items()?,
                item,
            }),
            Err(MenuError::ItemDisabled { item }) => Err(SelectError::ItemDisabled {
                enabled: self.menu.enabled_items()?,
                item,
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// All item labels, in rendered order
    pub fn items(&self) -> SelectResult<Vec<String>> {
        Ok(self.menu.items()?)
    }

    /// Labels of the items that can currently be selected
    pub fn enabled_items(&self) -> SelectResult<Vec<String>> {
        Ok(self.menu.enabled_items()?)
    }
}

impl<B: Browser> Widget for Select<B> {
    fn root(&self) -> &Locator {
        self.menu.root()
    }
}

impl<B: Browser> Fillable for Select<B> {
    type Value = String;

    fn fill(&self, value: Self::Value) -> SelectResult<()> {
        self.item_select(&value)
    }

    /// The trigger button's visible text, i.e. the current selection. Has no
    /// side effects; the menu does not need to be open.
    fn read(&self) -> SelectResult<Self::Value> {
        let root = self.menu.root_element()?;
        let button = self
            .menu
            .browser()
            .element(&Locator::xpath(BUTTON_LOCATOR), Some(&root))?;
        Ok(self.menu.browser().text(&button)?)
    }
}

/// Multi-value checkbox select widget.
///
/// Selection is an idempotent toggle-to-desired-state: an item already in the
/// requested state is left alone, so selecting twice never deselects.
#[derive(Debug)]
pub struct CheckboxSelect<B: Browser> {
    menu: Menu<B>,
}

impl<B: Browser> CheckboxSelect<B> {
    /// Bind to the first "select"-class container in document order.
    pub fn new(browser: B) -> Self {
        Self::with_root(browser, Locator::xpath(DEFAULT_LOCATOR))
    }

    /// Bind to an explicit container locator.
    pub fn with_root(browser: B, root: Locator) -> Self {
        Self {
            menu: Menu::new(browser, root),
        }
    }

    /// The wrapped menu capability
    #[must_use]
    pub const fn menu(&self) -> &Menu<B> {
        &self.menu
    }

    /// Select each item in caller order, clicking only items not already
    /// selected. The menu ends closed iff `close` is true, errors included;
    /// the error itself still propagates.
    pub fn item_select<'a>(&self, items: impl Into<Items<'a>>, close: bool) -> SelectResult<()> {
        self.apply(items.into(), true, close)
    }

    /// Deselect each item in caller order, clicking only items currently
    /// selected. Same closing guarantee as [`CheckboxSelect::item_select`].
    pub fn item_deselect<'a>(&self, items: impl Into<Items<'a>>, close: bool) -> SelectResult<()> {
        self.apply(items.into(), false, close)
    }

    /// Whether the item labelled `item` can currently be toggled, based on
    /// the disabled marker class of its row.
    pub fn item_enabled(&self, item: &str, close: bool) -> SelectResult<bool> {
        if close {
            let guard = self.menu.opened()?;
            let enabled = self.row_enabled(item)?;
            guard.close()?;
            Ok(enabled)
        } else {
            self.menu.open()?;
            self.row_enabled(item)
        }
    }

    /// Labels of every rendered row, optionally closing the menu afterwards.
    pub fn get_items(&self, close: bool) -> SelectResult<Vec<String>> {
        if close {
            let guard = self.menu.opened()?;
            let labels = self.rendered_labels()?;
            guard.close()?;
            Ok(labels)
        } else {
            self.menu.open()?;
            self.rendered_labels()
        }
    }

    /// All item labels, in rendered order. The menu ends closed.
    pub fn items(&self) -> SelectResult<Vec<String>> {
        self.get_items(true)
    }

    fn apply(&self, items: Items<'_>, target: bool, close: bool) -> SelectResult<()> {
        let items = items.into_vec();
        if close {
            let guard = self.menu.opened()?;
            self.set_each(&items, target)?;
            Ok(guard.close()?)
        } else {
            self.menu.open()?;
            self.set_each(&items, target)
        }
    }

    fn set_each(&self, items: &[&str], target: bool) -> SelectResult<()> {
        for &item in items {
            self.menu.open()?;
            let control = self.toggle_control(item)?;
            if self.menu.browser().is_selected(&control)? != target {
                debug!(root = %self.menu.root(), item, desired = target, "toggling checkbox item");
                self.menu.browser().click(&control)?;
            }
        }
        Ok(())
    }

    /// Toggle control of the item labelled `item`. Requires the menu to be
    /// open.
    fn toggle_control(&self, item: &str) -> SelectResult<B::Element> {
        let root = self.menu.root_element()?;
        let locator = Locator::xpath(substitute(CHECKBOX_ITEM_LOCATOR, &quote(item)));
        match self.menu.browser().element(&locator, Some(&root)) {
            Ok(control) => Ok(control),
            Err(BrowserError::NoSuchElement { .. }) => Err(SelectError::ItemNotFound {
                item: item.to_string(),
                available: self.rendered_labels()?,
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// Enabled state of the row labelled `item`. Requires the menu to be
    /// open; lower-level lookup failures are translated to
    /// [`SelectError::ItemNotFound`] here and never leak past the widget.
    fn row_enabled(&self, item: &str) -> SelectResult<bool> {
        let root = self.menu.root_element()?;
        match self.menu.browser().element(&row_locator(item), Some(&root)) {
            Ok(row) => Ok(!self.menu.browser().classes(&row)?.contains(DISABLED_MARKER)),
            Err(BrowserError::NoSuchElement { .. }) => Err(SelectError::ItemNotFound {
                item: item.to_string(),
                available: self.rendered_labels()?,
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// Row labels in rendered order. Requires the menu to be open; does not
    /// touch the open/closed state.
    fn rendered_labels(&self) -> SelectResult<Vec<String>> {
        let mut labels = Vec::new();
        for row in self.menu.item_rows()? {
            labels.push(self.menu.browser().text(&row)?);
        }
        Ok(labels)
    }
}

impl<B: Browser> Widget for CheckboxSelect<B> {
    fn root(&self) -> &Locator {
        self.menu.root()
    }
}

impl<B: Browser> Fillable for CheckboxSelect<B> {
    type Value = Vec<(String, bool)>;

    /// Apply a desired label-to-selected mapping in entry order. Every entry
    /// runs with the menu held open; exactly one close happens at the end,
    /// regardless of outcome.
    fn fill(&self, value: Self::Value) -> SelectResult<()> {
        let guard = self.menu.opened()?;
        for (item, target) in &value {
            self.apply(Items::One(item.as_str()), *target, false)?;
        }
        Ok(guard.close()?)
    }

    /// Selection state of every rendered row, in rendered order. A row
    /// without a detectable toggle control reads as not selected. Rows with
    /// identical labels collapse into one entry: the first occurrence keeps
    /// its position, the last occurrence supplies the value.
    fn read(&self) -> SelectResult<Self::Value> {
        let guard = self.menu.opened()?;
        let mut state: Vec<(String, bool)> = Vec::new();
        for row in self.menu.item_rows()? {
            let label = self.menu.browser().text(&row)?;
            let selected = match self
                .menu
                .browser()
                .element(&Locator::xpath(ROW_INPUT_LOCATOR), Some(&row))
            {
                Ok(control) => self.menu.browser().is_selected(&control)?,
                Err(BrowserError::NoSuchElement { .. }) => false,
                Err(other) => return Err(other.into()),
            };
            match state.iter_mut().find(|(seen, _)| *seen == label) {
                Some(entry) => entry.1 = selected,
                None => state.push((label, selected)),
            }
        }
        guard.close()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBrowser, MockItem};

    fn single_select_page() -> MockBrowser {
        MockBrowser::select(vec![
            MockItem::new("Alpha"),
            MockItem::new("Beta").disabled(),
            MockItem::new("Gamma"),
        ])
    }

    fn checkbox_page() -> MockBrowser {
        MockBrowser::checkbox_select(vec![
            MockItem::new("a"),
            MockItem::new("b").selected(),
            MockItem::new("c"),
        ])
    }

    mod select_tests {
        use super::*;

        #[test]
        fn test_select_then_read_round_trips() {
            let page = single_select_page();
            let select = Select::new(page.clone());

            select.item_select("Gamma").unwrap();
            assert_eq!(select.read().unwrap(), "Gamma");
            assert!(!page.is_open());
        }

        #[test]
        fn test_missing_item_lists_available_items() {
            let page = single_select_page();
            let select = Select::new(page.clone());

            let error = select.item_select("Delta").unwrap_err();
            assert_eq!(
                error,
                SelectError::ItemNotFound {
                    item: "Delta".to_string(),
                    available: vec![
                        "Alpha".to_string(),
                        "Beta".to_string(),
                        "Gamma".to_string()
                    ],
                }
            );
            assert!(!page.is_open());
        }

        #[test]
        fn test_disabled_item_lists_enabled_items() {
            let page = single_select_page();
            let select = Select::new(page.clone());

            let error = select.item_select("Beta").unwrap_err();
            assert_eq!(
                error,
                SelectError::ItemDisabled {
                    item: "Beta".to_string(),
                    enabled: vec!["Alpha".to_string(), "Gamma".to_string()],
                }
            );
            assert!(!page.is_open());
        }

        #[test]
        fn test_item_element_not_found_carries_available_items() {
            let page = single_select_page();
            let select = Select::new(page.clone());

            let error = select.item_element("Delta", true).unwrap_err();
            assert!(matches!(
                error,
                SelectError::ItemNotFound { ref available, .. } if available.len() == 3
            ));
        }

        #[test]
        fn test_fill_is_item_select() {
            let page = single_select_page();
            let select = Select::new(page.clone());

            select.fill("Alpha".to_string()).unwrap();
            assert_eq!(page.toggle_text(), "Alpha");
        }

        #[test]
        fn test_read_does_not_open_the_menu() {
            let page = single_select_page();
            let select = Select::new(page.clone());

            assert_eq!(select.read().unwrap(), "Options");
            assert!(!page.is_open());
        }

        #[test]
        fn test_every_enabled_item_round_trips() {
            let page = single_select_page();
            let select = Select::new(page.clone());

            for label in select.enabled_items().unwrap() {
                select.item_select(&label).unwrap();
                assert_eq!(select.read().unwrap(), label);
            }
        }
    }

    mod checkbox_select_tests {
        use super::*;

        #[test]
        fn test_read_reports_initial_state() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            assert_eq!(
                select.read().unwrap(),
                vec![
                    ("a".to_string(), false),
                    ("b".to_string(), true),
                    ("c".to_string(), false),
                ]
            );
            assert!(!page.is_open());
        }

        #[test]
        fn test_item_select_is_idempotent() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            select.item_select("a", true).unwrap();
            select.item_select("a", true).unwrap();
            assert_eq!(page.selected_labels(), vec!["a", "b"]);
        }

        #[test]
        fn test_item_deselect_is_a_noop_on_unselected_items() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            select.item_deselect("a", true).unwrap();
            assert_eq!(page.selected_labels(), vec!["b"]);

            select.item_deselect("b", true).unwrap();
            assert!(page.selected_labels().is_empty());
        }

        #[test]
        fn test_multi_item_select_in_caller_order() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            select.item_select(vec!["c", "a"], true).unwrap();
            assert_eq!(page.selected_labels(), vec!["a", "b", "c"]);
            assert!(!page.is_open());
        }

        #[test]
        fn test_fill_then_read_round_trips() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            let wanted = vec![
                ("a".to_string(), true),
                ("b".to_string(), false),
                ("c".to_string(), true),
            ];
            select.fill(wanted.clone()).unwrap();
            assert_eq!(select.read().unwrap(), wanted);
            assert!(!page.is_open());
        }

        #[test]
        fn test_error_mid_loop_still_closes_the_menu() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            let error = select.item_select(vec!["a", "nope", "c"], true).unwrap_err();
            assert!(matches!(error, SelectError::ItemNotFound { .. }));
            // the first item was applied before the failure
            assert_eq!(page.selected_labels(), vec!["a", "b"]);
            assert!(!page.is_open());
        }

        #[test]
        fn test_close_false_leaves_the_menu_open() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            select.item_select("a", false).unwrap();
            assert!(page.is_open());

            select.item_deselect("a", false).unwrap();
            assert!(page.is_open());
        }

        #[test]
        fn test_fill_closes_even_when_an_entry_fails() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            let error = select
                .fill(vec![
                    ("a".to_string(), true),
                    ("nope".to_string(), true),
                ])
                .unwrap_err();
            assert!(matches!(error, SelectError::ItemNotFound { .. }));
            assert_eq!(page.selected_labels(), vec!["a", "b"]);
            assert!(!page.is_open());
        }

        #[test]
        fn test_item_enabled() {
            let page = MockBrowser::checkbox_select(vec![
                MockItem::new("on"),
                MockItem::new("off").disabled(),
            ]);
            let select = CheckboxSelect::new(page.clone());

            assert!(select.item_enabled("on", true).unwrap());
            assert!(!select.item_enabled("off", true).unwrap());
            assert!(!page.is_open());
        }

        #[test]
        fn test_item_enabled_missing_item_closes_and_reports_not_found() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            let error = select.item_enabled("nope", true).unwrap_err();
            assert!(matches!(error, SelectError::ItemNotFound { .. }));
            assert!(!page.is_open());
        }

        #[test]
        fn test_items_lists_labels_and_closes() {
            let page = checkbox_page();
            let select = CheckboxSelect::new(page.clone());

            assert_eq!(select.items().unwrap(), vec!["a", "b", "c"]);
            assert!(!page.is_open());

            assert_eq!(select.get_items(false).unwrap(), vec!["a", "b", "c"]);
            assert!(page.is_open());
        }

        #[test]
        fn test_rows_without_a_toggle_control_read_as_unselected() {
            let page = MockBrowser::with_toggle_text(
                "Filter",
                vec![
                    MockItem::new("plain"),
                    MockItem::new("checked").selected(),
                ],
            );
            let select = CheckboxSelect::new(page);

            assert_eq!(
                select.read().unwrap(),
                vec![("plain".to_string(), false), ("checked".to_string(), true)]
            );
        }

        #[test]
        fn test_duplicate_labels_last_write_wins() {
            let page = MockBrowser::checkbox_select(vec![
                MockItem::new("dup").selected(),
                MockItem::new("other"),
                MockItem::new("dup"),
            ]);
            let select = CheckboxSelect::new(page);

            // value from the later row, position from the earlier row
            assert_eq!(
                select.read().unwrap(),
                vec![("dup".to_string(), false), ("other".to_string(), false)]
            );
        }
    }

    mod items_argument_tests {
        use super::*;

        #[test]
        fn test_single_label_normalizes_to_one_entry() {
            assert_eq!(Items::from("a").into_vec(), vec!["a"]);
        }

        #[test]
        fn test_collections_keep_their_order() {
            assert_eq!(Items::from(vec!["b", "a"]).into_vec(), vec!["b", "a"]);
            assert_eq!(Items::from(["x", "y"]).into_vec(), vec!["x", "y"]);
        }
    }

    mod widget_trait_tests {
        use super::*;
        use crate::widget::Widget;

        #[test]
        fn test_default_root_locator() {
            let select = Select::new(single_select_page());
            assert_eq!(
                select.root().selector().as_str(),
                r#".//div[contains(@class, "c-select")][1]"#
            );
        }
    }
}
