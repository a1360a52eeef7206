//! Escoger: page-object widgets for PatternFly select menus.
//!
//! Escoger (Spanish: "to choose") wraps the PatternFly v5 Select and
//! Checkbox Select components (<https://www.patternfly.org/components/menus/select>)
//! behind typed page objects: abstract operations like "select item X" or
//! "read the current selection" are translated into XPath lookups and clicks
//! against the component's markup conventions.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    ESCOGER Architecture                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────────┐   ┌───────────┐   ┌───────────────────┐  │
//! │  │ Select /       │   │ Menu      │   │ Browser trait     │  │
//! │  │ CheckboxSelect │──►│ (Dropdown │──►│ (your automation  │  │
//! │  │ (value + errs) │   │  + guard) │   │  backend or mock) │  │
//! │  └────────────────┘   └───────────┘   └───────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate owns the locator table and the selection-state logic; every
//! actual page interaction goes through the [`Browser`] trait, so the same
//! widgets run against a real automation backend or against the bundled
//! [`mock::MockBrowser`] page model.
//!
//! # Example
//!
//! ```
//! use escoger::mock::{MockBrowser, MockItem};
//! use escoger::{Fillable, Select};
//!
//! let page = MockBrowser::select(vec![
//!     MockItem::new("Alpha"),
//!     MockItem::new("Beta").disabled(),
//!     MockItem::new("Gamma"),
//! ]);
//! let select = Select::new(page.clone());
//!
//! select.item_select("Gamma")?;
//! assert_eq!(select.read()?, "Gamma");
//! assert!(!page.is_open());
//! # Ok::<(), escoger::SelectError>(())
//! ```

#![warn(missing_docs)]

mod browser;
mod locator;
mod menu;
mod result;
mod select;
mod widget;

pub mod mock;

pub use browser::{Browser, BrowserResult};
pub use locator::{quote, unquote, Locator, Selector};
pub use menu::{
    Dropdown, Menu, MenuResult, OpenedMenu, BUTTON_LOCATOR, DISABLED_MARKER, EXPANDED_MARKER,
    ITEMS_LOCATOR, ITEM_LOCATOR,
};
pub use result::{BrowserError, MenuError, SelectError, SelectResult};
pub use select::{
    CheckboxSelect, Items, Select, CHECKBOX_ITEM_LOCATOR, DEFAULT_LOCATOR, ROW_INPUT_LOCATOR,
    SELECTED_ITEM_LOCATOR, TEXT_LOCATOR,
};
pub use widget::{Fillable, Widget};
