//! # User Interface Module
//!
//! A retained widget tree that repaints only what changed since the last
//! frame.
//!
//! ## Modules
//!
//! - `tree`: The widget arena (`WidgetTree`), ids, geometry and repaint flags
//! - `widget`: The `Widget` capability implemented by widget contents
//! - `painter`: Flag propagation, clipped painting and the single flush
//! - `widgets`: `Panel`, `Label`, `Bitmap`, `ProgressBar`
//!
//! ## Example
//!
//! ```ignore
//! use monoframe::ui::{Painter, WidgetTree, widgets::*};
//!
//! let mut tree = WidgetTree::new(display);
//! let screen = tree.create_root(Panel::new());
//! tree.set_rect(screen, Rect::new(0, 0, 240, 160))?;
//! let title = tree.create_child(screen, Label::new("Ready"))?;
//! tree.set_width(title, 240)?;
//!
//! let painter = Painter::new();
//! painter.paint_widget(&mut tree, screen)?;
//!
//! tree.update::<Label, _>(title, |l| l.set_text("Busy"))?;
//! painter.paint_widget(&mut tree, screen)?; // only the label is redrawn
//! ```
//!
//! The tree has no internal synchronisation. Mutate it and run the painter
//! from one thread.

pub mod painter;
pub mod tree;
pub mod widget;
pub mod widgets;

pub use painter::Painter;
pub use tree::{TreeError, WidgetId, WidgetTree};
pub use widget::{AsAny, Widget};
