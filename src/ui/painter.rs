//! Per-frame repaint of a widget tree
//!
//! A frame runs in three phases:
//!
//! 1. Flag propagation, top-down. A child whose geometry changed pulls its
//!    parent into the repaint (`parent_needs_repaint`), then a parent that
//!    repaints pushes the repaint down to every child.
//! 2. Paint, pre-order. Each dirty node gets its clip rectangle, a cleared
//!    background and its own `paint` call.
//! 3. Flush, once, only if phase 2 drew anything. The clip window is reset
//!    to the whole display afterwards in every case.
//!
//! Propagation completes before any painting starts.
use super::tree::{TreeError, WidgetId, WidgetTree};
use crate::display::{Display, DrawColor};
#[cfg(feature = "debug-outline")]
use crate::geometry::Rect;

/// Stateless; one instance can paint any number of trees
#[derive(Debug, Default, Clone, Copy)]
pub struct Painter;

impl Painter {
    pub fn new() -> Self {
        Self
    }

    /// Repaint the dirty parts of the subtree under `root`.
    ///
    /// Returns whether anything was drawn, which is also whether the display
    /// was flushed.
    pub fn paint_widget<D: Display + 'static>(
        &self,
        tree: &mut WidgetTree<D>,
        root: WidgetId,
    ) -> Result<bool, TreeError> {
        log::trace!("paint frame from {}", root);

        Self::update_repaint_flags(tree, root)?;
        let drew = Self::paint_recursive(tree, root)?;

        if drew {
            log::debug!("flushing display after frame from {}", root);
            tree.display.flush();
        }
        tree.display.reset_clip_rect();

        Ok(drew)
    }

    fn update_repaint_flags<D: Display + 'static>(
        tree: &mut WidgetTree<D>,
        id: WidgetId,
    ) -> Result<(), TreeError> {
        let count = tree.node(id)?.children.len();

        for i in 0..count {
            let child = tree.node(id)?.children[i];
            let pulled = core::mem::take(&mut tree.node_mut(child)?.parent_needs_repaint);
            tree.node_mut(id)?.needs_repaint |= pulled;
        }

        let repaint = tree.node(id)?.needs_repaint;
        for i in 0..count {
            let child = tree.node(id)?.children[i];
            tree.node_mut(child)?.needs_repaint |= repaint;
            Self::update_repaint_flags(tree, child)?;
        }
        Ok(())
    }

    fn paint_recursive<D: Display + 'static>(
        tree: &mut WidgetTree<D>,
        id: WidgetId,
    ) -> Result<bool, TreeError> {
        let mut drew = false;

        if tree.node(id)?.needs_repaint {
            let clip = tree.calculate_clip_rect(id)?;
            let global = tree.global_rect(id)?;
            let (display, node) = tree.split(id)?;
            log::debug!(
                "painting {} '{}' rect={} clip={} background={}",
                id,
                node.name,
                node.rect,
                clip,
                node.background_enabled
            );

            display.set_clip_rect(clip);
            if node.background_enabled {
                display.set_draw_color(DrawColor::Secondary);
                display.fill_rect(clip);
            }
            node.widget.paint(display, global);
            #[cfg(feature = "debug-outline")]
            paint_outline(display, global);

            node.needs_repaint = false;
            drew = true;
        } else {
            log::trace!("skipping clean widget {}", id);
        }

        let count = tree.node(id)?.children.len();
        for i in 0..count {
            let child = tree.node(id)?.children[i];
            drew |= Self::paint_recursive(tree, child)?;
        }
        Ok(drew)
    }
}

#[cfg(feature = "debug-outline")]
fn paint_outline<D: Display>(display: &mut D, global: Rect) {
    display.set_draw_color(DrawColor::Primary);
    display.draw_rect(global);
}
