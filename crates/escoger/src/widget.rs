//! Widget contract shared by the menu-backed components.

use crate::locator::Locator;
use crate::result::SelectResult;

/// A page-object widget bound to one container element.
pub trait Widget {
    /// Locator of the widget's container element
    fn root(&self) -> &Locator;

    /// Name used in logs and diagnostics
    fn widget_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// The fill/read contract of a form-like widget.
///
/// `fill` drives the widget to a desired value, `read` reports the value the
/// page currently shows. The two use the same value type so a `read` result
/// can be fed back into `fill`.
pub trait Fillable {
    /// Value written by [`Fillable::fill`] and produced by [`Fillable::read`]
    type Value;

    /// Drive the widget to `value`
    fn fill(&self, value: Self::Value) -> SelectResult<()>;

    /// Report the widget's current value
    fn read(&self) -> SelectResult<Self::Value>;
}
