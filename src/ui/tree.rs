//! Widget arena with parent/child links and repaint flags
//!
//! The tree owns every node's storage; links between nodes are plain
//! `WidgetId`s, so neither direction owns the other. A node's rectangle is
//! always kept in its parent's coordinates (global coordinates for a node
//! without parent). Global positions are never cached.
//!
//! Both repaint flags start out set. Geometry setters set both again;
//! `invalidate`, `set_background_enabled` and `update` set `needs_repaint`.
//! Only the painter clears them.
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::widget::Widget;
use crate::display::Display;
use crate::geometry::{Point, Rect, Size};

/// Slot index plus the generation the slot had when the widget was created.
///
/// Slots are recycled after `remove`; the generation tells a recycled slot
/// apart from the widget that used to live there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId {
    index: usize,
    generation: u32,
}

impl WidgetId {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The id was never handed out or its widget was removed
    UnknownWidget(WidgetId),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnknownWidget(id) => write!(f, "unknown widget {}", id),
        }
    }
}

pub(crate) struct Node<D: Display + 'static> {
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,
    pub(crate) rect: Rect,
    pub(crate) name: String,
    pub(crate) needs_repaint: bool,
    pub(crate) parent_needs_repaint: bool,
    pub(crate) background_enabled: bool,
    pub(crate) widget: Box<dyn Widget<D>>,
}

impl<D: Display + 'static> Node<D> {
    fn new(parent: Option<WidgetId>, widget: Box<dyn Widget<D>>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            rect: Rect::NULL,
            name: String::new(),
            needs_repaint: true,
            parent_needs_repaint: true,
            background_enabled: true,
            widget,
        }
    }

    /// Every geometry mutation goes through here: both flags, then the hook
    fn change_geometry(&mut self, display: &mut D, change: impl FnOnce(&mut Rect)) {
        change(&mut self.rect);
        self.needs_repaint = true;
        self.parent_needs_repaint = true;
        let rect = self.rect;
        self.widget.on_geometry_changed(display, rect);
    }

    /// Returns whether the size changed
    fn apply_size_hint(&mut self, display: &mut D) -> bool {
        let current = self.rect.size();
        match self.widget.size_hint(display, current) {
            Some(size) if size != current => {
                self.change_geometry(display, |r| r.set_size(size));
                true
            }
            _ => false,
        }
    }
}

/// Widget arena drawing on a display it owns.
///
/// `D` must be `'static`: widgets are boxed as `dyn Widget<D>` and
/// downcast through `Any`.
pub struct WidgetTree<D: Display + 'static> {
    pub(crate) display: D,
    nodes: Vec<Option<Node<D>>>,
    // generation of each slot, kept across frees
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<D: Display + 'static> WidgetTree<D> {
    /// Every root of this tree draws on `display`
    pub fn new(display: D) -> Self {
        Self {
            display,
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Number of live widgets
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.node(id).is_ok()
    }

    fn is_alive(&self, id: WidgetId) -> bool {
        self.generations.get(id.index) == Some(&id.generation)
    }

    pub(crate) fn node(&self, id: WidgetId) -> Result<&Node<D>, TreeError> {
        if !self.is_alive(id) {
            return Err(TreeError::UnknownWidget(id));
        }
        self.nodes
            .get(id.index)
            .and_then(Option::as_ref)
            .ok_or(TreeError::UnknownWidget(id))
    }

    pub(crate) fn node_mut(&mut self, id: WidgetId) -> Result<&mut Node<D>, TreeError> {
        if !self.is_alive(id) {
            return Err(TreeError::UnknownWidget(id));
        }
        self.nodes
            .get_mut(id.index)
            .and_then(Option::as_mut)
            .ok_or(TreeError::UnknownWidget(id))
    }

    /// The display and one node, borrowed together
    pub(crate) fn split(&mut self, id: WidgetId) -> Result<(&mut D, &mut Node<D>), TreeError> {
        if !self.is_alive(id) {
            return Err(TreeError::UnknownWidget(id));
        }
        let node = self
            .nodes
            .get_mut(id.index)
            .and_then(Option::as_mut)
            .ok_or(TreeError::UnknownWidget(id))?;
        Ok((&mut self.display, node))
    }

    /// New node without parent; its rectangle is in display coordinates
    pub fn create_root<W: Widget<D>>(&mut self, widget: W) -> WidgetId {
        self.insert(None, Box::new(widget))
    }

    /// New node appended to the end of `parent`'s children
    pub fn create_child<W: Widget<D>>(
        &mut self,
        parent: WidgetId,
        widget: W,
    ) -> Result<WidgetId, TreeError> {
        self.node(parent)?;
        Ok(self.insert(Some(parent), Box::new(widget)))
    }

    fn insert(&mut self, parent: Option<WidgetId>, widget: Box<dyn Widget<D>>) -> WidgetId {
        let mut node = Node::new(parent, widget);
        node.apply_size_hint(&mut self.display);

        let id = if let Some(index) = self.free_list.pop() {
            let generation = self.generations[index].wrapping_add(1);
            self.generations[index] = generation;
            self.nodes[index] = Some(node);
            WidgetId { index, generation }
        } else {
            self.nodes.push(Some(node));
            self.generations.push(1);
            WidgetId {
                index: self.nodes.len() - 1,
                generation: 1,
            }
        };
        if let Some(parent) = parent {
            if let Ok(parent) = self.node_mut(parent) {
                parent.children.push(id);
            }
        }
        log::trace!("created widget {} (parent {:?})", id, parent);
        id
    }

    /// Deregister `id` from its parent and free its slot for reuse.
    ///
    /// Children of the removed widget are not destroyed; they are detached
    /// and from then on behave like roots. The parent is marked for repaint
    /// so the vacated area gets cleared.
    pub fn remove(&mut self, id: WidgetId) -> Result<(), TreeError> {
        if !self.is_alive(id) {
            return Err(TreeError::UnknownWidget(id));
        }
        let node = self
            .nodes
            .get_mut(id.index)
            .and_then(Option::take)
            .ok_or(TreeError::UnknownWidget(id))?;
        self.free_list.push(id.index);

        if let Some(parent) = node.parent {
            if let Ok(parent) = self.node_mut(parent) {
                parent.children.retain(|c| *c != id);
                parent.needs_repaint = true;
            }
        }
        for child in node.children {
            if let Ok(child) = self.node_mut(child) {
                child.parent = None;
            }
        }
        log::debug!("removed widget {} '{}'", id, node.name);
        Ok(())
    }

    pub fn parent(&self, id: WidgetId) -> Result<Option<WidgetId>, TreeError> {
        Ok(self.node(id)?.parent)
    }

    /// Children in paint order
    pub fn children(&self, id: WidgetId) -> Result<&[WidgetId], TreeError> {
        Ok(&self.node(id)?.children)
    }

    pub fn is_root(&self, id: WidgetId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.parent.is_none())
    }

    pub fn name(&self, id: WidgetId) -> Result<&str, TreeError> {
        Ok(&self.node(id)?.name)
    }

    /// Label used in log output
    pub fn set_name(&mut self, id: WidgetId, name: impl Into<String>) -> Result<(), TreeError> {
        self.node_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn pos(&self, id: WidgetId) -> Result<Point, TreeError> {
        Ok(self.node(id)?.rect.top_left())
    }

    pub fn size(&self, id: WidgetId) -> Result<Size, TreeError> {
        Ok(self.node(id)?.rect.size())
    }

    /// Rectangle in the parent's coordinates
    pub fn rect(&self, id: WidgetId) -> Result<Rect, TreeError> {
        Ok(self.node(id)?.rect)
    }

    fn change_geometry(
        &mut self,
        id: WidgetId,
        change: impl FnOnce(&mut Rect),
    ) -> Result<(), TreeError> {
        let (display, node) = self.split(id)?;
        node.change_geometry(display, change);
        Ok(())
    }

    pub fn set_pos(&mut self, id: WidgetId, pos: Point) -> Result<(), TreeError> {
        self.change_geometry(id, |r| r.move_top_left(pos))
    }

    pub fn set_size(&mut self, id: WidgetId, size: Size) -> Result<(), TreeError> {
        self.change_geometry(id, |r| r.set_size(size))
    }

    pub fn set_width(&mut self, id: WidgetId, width: i32) -> Result<(), TreeError> {
        self.change_geometry(id, |r| r.set_width(width))
    }

    pub fn set_height(&mut self, id: WidgetId, height: i32) -> Result<(), TreeError> {
        self.change_geometry(id, |r| r.set_height(height))
    }

    pub fn set_rect(&mut self, id: WidgetId, rect: Rect) -> Result<(), TreeError> {
        self.change_geometry(id, |r| *r = rect)
    }

    pub fn background_enabled(&self, id: WidgetId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.background_enabled)
    }

    /// Whether the painter clears the clip rectangle before painting
    pub fn set_background_enabled(&mut self, id: WidgetId, enabled: bool) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        node.background_enabled = enabled;
        node.needs_repaint = true;
        Ok(())
    }

    /// Schedule a repaint of `id` and everything drawn on top of it
    pub fn invalidate(&mut self, id: WidgetId) -> Result<(), TreeError> {
        self.node_mut(id)?.needs_repaint = true;
        Ok(())
    }

    pub fn needs_repaint(&self, id: WidgetId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.needs_repaint)
    }

    pub fn parent_needs_repaint(&self, id: WidgetId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.parent_needs_repaint)
    }

    /// Borrow the widget as its concrete type; `None` if it is another type
    pub fn widget<W: Widget<D>>(&self, id: WidgetId) -> Result<Option<&W>, TreeError> {
        Ok(self.node(id)?.widget.as_ref().as_any().downcast_ref::<W>())
    }

    /// Mutate the widget's content.
    ///
    /// The widget is repainted next frame. If its size hint changed the new
    /// size is applied like any other geometry change, otherwise the
    /// geometry hook runs once so derived layout follows the new content.
    pub fn update<W, R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut W) -> R,
    ) -> Result<Option<R>, TreeError>
    where
        W: Widget<D>,
    {
        let (display, node) = self.split(id)?;
        let Some(widget) = node.widget.as_mut().as_any_mut().downcast_mut::<W>() else {
            return Ok(None);
        };
        let out = f(widget);
        node.needs_repaint = true;

        if !node.apply_size_hint(display) {
            let rect = node.rect;
            node.widget.on_geometry_changed(display, rect);
        }
        Ok(Some(out))
    }

    /// Translate a point from `id`'s parent frame into its grandparent's.
    /// A root returns the point unchanged.
    pub fn map_to_parent(&self, id: WidgetId, p: Point) -> Result<Point, TreeError> {
        match self.node(id)?.parent {
            Some(parent) => Ok(p + self.node(parent)?.rect.top_left()),
            None => Ok(p),
        }
    }

    /// Translate a point expressed in the same frame as `rect(id)` into
    /// display coordinates by adding up every ancestor's position.
    pub fn map_to_global(&self, id: WidgetId, p: Point) -> Result<Point, TreeError> {
        let mut mapped = p;
        let mut current = Some(id);
        while let Some(w) = current {
            mapped = self.map_to_parent(w, mapped)?;
            current = self.node(w)?.parent;
        }
        Ok(mapped)
    }

    pub fn map_rect_to_parent(&self, id: WidgetId, r: Rect) -> Result<Rect, TreeError> {
        Ok(Rect::from_point_size(self.map_to_parent(id, r.top_left())?, r.size()))
    }

    pub fn map_rect_to_global(&self, id: WidgetId, r: Rect) -> Result<Rect, TreeError> {
        Ok(Rect::from_point_size(self.map_to_global(id, r.top_left())?, r.size()))
    }

    /// The widget's own rectangle in display coordinates
    pub fn global_rect(&self, id: WidgetId) -> Result<Rect, TreeError> {
        self.map_rect_to_global(id, self.node(id)?.rect)
    }

    /// Area the widget may draw into: its global rectangle cut down to the
    /// area its parent currently occupies. For a root, its own rectangle.
    pub fn calculate_clip_rect(&self, id: WidgetId) -> Result<Rect, TreeError> {
        let node = self.node(id)?;
        match node.parent {
            None => Ok(node.rect),
            Some(parent) => Ok(self.global_rect(parent)? & self.global_rect(id)?),
        }
    }
}
