//! The capability every widget implements
use core::any::Any;

use crate::display::Display;
use crate::geometry::{Rect, Size};

/// Lets the tree hand a boxed widget back as its concrete type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Content of one tree node.
///
/// The node itself (geometry, flags, parent and children) lives in the
/// `WidgetTree`; a `Widget` only knows how to draw and how to lay itself
/// out. The painter and the tree never look past this trait.
pub trait Widget<D: Display + ?Sized>: AsAny {
    /// Draw the widget. The clip window is already set to the node's clip
    /// rectangle and its background has been cleared; `global` is the
    /// node's rectangle in display coordinates.
    ///
    /// Shared base drawing (the debug outline) runs after this returns.
    fn paint(&mut self, display: &mut D, global: Rect) {
        let _ = (display, global);
    }

    /// Called once per geometry change with the new local rectangle, so
    /// derived layout does not have to be recomputed on every paint.
    fn on_geometry_changed(&mut self, display: &mut D, rect: Rect) {
        let _ = (display, rect);
    }

    /// Size the widget wants given its `current` one
    fn size_hint(&mut self, display: &mut D, current: Size) -> Option<Size> {
        let _ = (display, current);
        None
    }
}
