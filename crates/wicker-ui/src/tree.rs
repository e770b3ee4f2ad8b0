use std::fmt;
use std::ops::Range;

use slotmap::{new_key_type, SlotMap};
use wicker_engine::coords::Vec2;

use crate::error::TreeError;
use crate::widget::Widget;
use crate::widgets::Panel;

new_key_type! {
    /// Stable handle to a widget in a [`WidgetTree`].
    ///
    /// Handles stay valid until the widget is erased. Within one tree, a
    /// handle to an erased widget is never reused for a different one.
    ///
    /// Handles are only meaningful for the tree that issued them: a handle
    /// from one tree may resolve to an unrelated widget in another.
    pub struct WidgetId;
}

pub(crate) struct Node {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,
    pub(crate) bounds: Vec2,
    pub(crate) dirty: bool,
}

impl Node {
    fn new(widget: Box<dyn Widget>) -> Self {
        Self { widget, parent: None, children: Vec::new(), bounds: Vec2::zero(), dirty: true }
    }
}

/// Arena-backed tree of widgets.
///
/// Every node lives in one arena and is addressed by a [`WidgetId`]. Child
/// lists hold handles, a node has at most one parent, and every attach is
/// checked so the structure stays a tree. Erasing a node tears down its whole
/// subtree.
///
/// Nodes can exist detached (created with [`create`](Self::create) or
/// [`detach`](Self::detach)ed); only nodes reachable from the root are drawn.
///
/// # Child sequences
///
/// Sequence operations take the parent's handle. Read accessors that return
/// slices or counts ([`children`](Self::children), [`len`](Self::len),
/// [`iter`](Self::iter)) panic on a stale parent handle, like indexing;
/// [`at`](Self::at) and every mutation report failures as [`TreeError`].
///
/// # Dirty tracking
///
/// A node is dirty when created, when its bounds change, when its child list
/// changes, when its widget is borrowed mutably, and when its
/// [`Widget::update`] reports a change. A completed frame clears the flags.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Node>,
    root: WidgetId,
}

impl WidgetTree {
    /// Tree whose root is an empty [`Panel`].
    pub fn new() -> Self {
        Self::with_root(Panel::new())
    }

    pub fn with_root<W: Widget>(root: W) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(Box::new(root)));
        Self { nodes, root }
    }

    #[inline]
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Nodes in the arena, attached or not.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Adds a detached widget; attach it with [`push_back`](Self::push_back) or
    /// [`insert`](Self::insert).
    pub fn create<W: Widget>(&mut self, widget: W) -> WidgetId {
        self.create_boxed(Box::new(widget))
    }

    pub fn create_boxed(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        self.nodes.insert(Node::new(widget))
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id)?.parent
    }

    /// `true` if `id` is reachable from the root.
    pub fn is_attached(&self, id: WidgetId) -> bool {
        self.contains(id) && self.is_ancestor_or_self(self.root, id)
    }

    /// Distance from the root, or `None` if `id` is stale or detached.
    pub fn depth(&self, id: WidgetId) -> Option<usize> {
        let mut depth = 0;
        let mut cur = id;
        loop {
            if cur == self.root {
                return Some(depth);
            }
            cur = self.nodes.get(cur)?.parent?;
            depth += 1;
        }
    }

    // ── widget access ─────────────────────────────────────────────────────

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.nodes.get(id).map(|n| &*n.widget)
    }

    /// Typed access; `None` if `id` is stale or holds another widget type.
    pub fn get<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        let node = self.nodes.get(id)?;
        (*node.widget).as_any().downcast_ref::<W>()
    }

    /// Typed mutable access. Marks the node dirty on success.
    pub fn get_mut<W: Widget>(&mut self, id: WidgetId) -> Option<&mut W> {
        let node = self.nodes.get_mut(id)?;
        if !(*node.widget).as_any().is::<W>() {
            return None;
        }
        node.dirty = true;
        (*node.widget).as_any_mut().downcast_mut::<W>()
    }

    /// Type name of the widget behind `id`, for diagnostics.
    pub fn type_name(&self, id: WidgetId) -> Option<&'static str> {
        self.nodes.get(id).map(|n| (*n.widget).type_name())
    }

    // ── node state ────────────────────────────────────────────────────────

    pub fn bounds(&self, id: WidgetId) -> Option<Vec2> {
        self.nodes.get(id).map(|n| n.bounds)
    }

    pub fn set_bounds(&mut self, id: WidgetId, bounds: Vec2) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        if node.bounds != bounds {
            node.bounds = bounds;
            node.dirty = true;
        }
        Ok(())
    }

    pub fn is_dirty(&self, id: WidgetId) -> Option<bool> {
        self.nodes.get(id).map(|n| n.dirty)
    }

    pub fn mark_dirty(&mut self, id: WidgetId) -> Result<(), TreeError> {
        self.node_mut(id)?.dirty = true;
        Ok(())
    }

    /// `true` if any node reachable from the root is dirty.
    pub fn needs_redraw(&self) -> bool {
        self.pre_order(self.root).any(|id| self.nodes[id].dirty)
    }

    pub(crate) fn clear_dirty(&mut self) {
        for node in self.nodes.values_mut() {
            node.dirty = false;
        }
    }

    // ── child sequence: reads ─────────────────────────────────────────────

    /// Children of `parent`, in order. Index it for unchecked access.
    ///
    /// # Panics
    /// Panics if `parent` is not in the tree.
    #[inline]
    pub fn children(&self, parent: WidgetId) -> &[WidgetId] {
        &self.nodes[parent].children
    }

    /// # Panics
    /// Panics if `parent` is not in the tree.
    #[inline]
    pub fn len(&self, parent: WidgetId) -> usize {
        self.children(parent).len()
    }

    /// # Panics
    /// Panics if `parent` is not in the tree.
    #[inline]
    pub fn is_empty(&self, parent: WidgetId) -> bool {
        self.children(parent).is_empty()
    }

    /// Checked child access.
    pub fn at(&self, parent: WidgetId, pos: usize) -> Result<WidgetId, TreeError> {
        let children = &self.node(parent)?.children;
        children
            .get(pos)
            .copied()
            .ok_or(TreeError::IndexOutOfBounds { index: pos, len: children.len() })
    }

    /// First child, `None` if there are none or `parent` is stale.
    pub fn front(&self, parent: WidgetId) -> Option<WidgetId> {
        self.nodes.get(parent)?.children.first().copied()
    }

    /// Last child, `None` if there are none or `parent` is stale.
    pub fn back(&self, parent: WidgetId) -> Option<WidgetId> {
        self.nodes.get(parent)?.children.last().copied()
    }

    /// Child handles in order.
    ///
    /// # Panics
    /// Panics if `parent` is not in the tree.
    pub fn iter(&self, parent: WidgetId) -> impl Iterator<Item = WidgetId> + '_ {
        self.children(parent).iter().copied()
    }

    /// Child widgets in order.
    ///
    /// # Panics
    /// Panics if `parent` is not in the tree.
    pub fn iter_widgets(&self, parent: WidgetId) -> impl Iterator<Item = &dyn Widget> + '_ {
        self.children(parent).iter().map(|&id| &*self.nodes[id].widget)
    }

    /// Visits every child widget mutably, in order. Each visited node is marked dirty.
    pub fn for_each_child_mut(
        &mut self,
        parent: WidgetId,
        mut f: impl FnMut(WidgetId, &mut dyn Widget),
    ) -> Result<(), TreeError> {
        let children = self.node(parent)?.children.clone();
        for id in children {
            let node = &mut self.nodes[id];
            node.dirty = true;
            f(id, &mut *node.widget);
        }
        Ok(())
    }

    /// Depth-first, parent-before-children walk starting at `from`, in child order.
    ///
    /// Yields nothing if `from` is stale.
    pub fn pre_order(&self, from: WidgetId) -> PreOrder<'_> {
        let stack = if self.contains(from) { vec![from] } else { Vec::new() };
        PreOrder { tree: self, stack }
    }

    // ── child sequence: mutation ──────────────────────────────────────────

    /// Attaches the detached node `child` before position `pos` (`pos <= len`).
    pub fn insert(&mut self, parent: WidgetId, pos: usize, child: WidgetId) -> Result<(), TreeError> {
        let len = self.node(parent)?.children.len();
        let child_node = self.node(child)?;
        if child == self.root || child_node.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        // A detached leaf can only sit on `parent`'s ancestor path if it is `parent`.
        let cycle = if child_node.children.is_empty() {
            child == parent
        } else {
            self.is_ancestor_or_self(child, parent)
        };
        if cycle {
            return Err(TreeError::WouldCycle { parent, child });
        }
        if pos > len {
            return Err(TreeError::IndexOutOfBounds { index: pos, len });
        }

        self.nodes[child].parent = Some(parent);
        let p = &mut self.nodes[parent];
        p.children.insert(pos, child);
        p.dirty = true;
        log::trace!("attached {child:?} under {parent:?} at {pos}");
        Ok(())
    }

    /// Attaches the detached node `child` as the last child of `parent`.
    pub fn push_back(&mut self, parent: WidgetId, child: WidgetId) -> Result<(), TreeError> {
        let len = self.node(parent)?.children.len();
        self.insert(parent, len, child)
    }

    /// Creates `widget` directly as the last child of `parent`.
    pub fn emplace_back<W: Widget>(&mut self, parent: WidgetId, widget: W) -> Result<WidgetId, TreeError> {
        self.node(parent)?;
        let id = self.create(widget);
        self.push_back(parent, id)?;
        Ok(id)
    }

    /// Erases the child at `pos` and its subtree. Returns the number of widgets destroyed.
    pub fn erase(&mut self, parent: WidgetId, pos: usize) -> Result<usize, TreeError> {
        let len = self.node(parent)?.children.len();
        if pos >= len {
            return Err(TreeError::IndexOutOfBounds { index: pos, len });
        }
        self.erase_range(parent, pos..pos + 1)
    }

    /// Erases the children in `range` and their subtrees. Returns the number of
    /// widgets destroyed.
    pub fn erase_range(&mut self, parent: WidgetId, range: Range<usize>) -> Result<usize, TreeError> {
        let len = self.node(parent)?.children.len();
        if range.start > range.end || range.end > len {
            return Err(TreeError::InvalidRange { start: range.start, end: range.end, len });
        }

        let p = &mut self.nodes[parent];
        let removed: Vec<WidgetId> = p.children.drain(range).collect();
        if !removed.is_empty() {
            p.dirty = true;
        }

        let destroyed: usize = removed.into_iter().map(|id| self.remove_subtree(id)).sum();
        log::debug!("erased {destroyed} widget(s) under {parent:?}");
        Ok(destroyed)
    }

    /// Erases every child of `parent`. Returns the number of widgets destroyed.
    pub fn clear(&mut self, parent: WidgetId) -> Result<usize, TreeError> {
        let len = self.node(parent)?.children.len();
        self.erase_range(parent, 0..len)
    }

    /// Unlinks `id` from its parent, keeping its subtree alive as a detached node.
    ///
    /// A no-op for nodes that are already detached (including the root).
    pub fn detach(&mut self, id: WidgetId) -> Result<(), TreeError> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        let p = &mut self.nodes[parent];
        p.children.retain(|&c| c != id);
        p.dirty = true;
        self.nodes[id].parent = None;
        Ok(())
    }

    /// Destroys `id` and its subtree, attached or not. Returns the number of
    /// widgets destroyed.
    pub fn destroy(&mut self, id: WidgetId) -> Result<usize, TreeError> {
        if id == self.root {
            return Err(TreeError::RootNotErasable);
        }
        self.detach(id)?;
        Ok(self.remove_subtree(id))
    }

    // ── internal ──────────────────────────────────────────────────────────

    pub(crate) fn node(&self, id: WidgetId) -> Result<&Node, TreeError> {
        self.nodes.get(id).ok_or(TreeError::StaleWidget(id))
    }

    pub(crate) fn node_mut(&mut self, id: WidgetId) -> Result<&mut Node, TreeError> {
        self.nodes.get_mut(id).ok_or(TreeError::StaleWidget(id))
    }

    /// `true` if `ancestor` is `node` or lies on the path from `node` to its root.
    fn is_ancestor_or_self(&self, ancestor: WidgetId, node: WidgetId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Removes `id` and all descendants from the arena. `id` must already be
    /// unlinked from its parent.
    fn remove_subtree(&mut self, id: WidgetId) -> usize {
        let doomed: Vec<WidgetId> = self.pre_order(id).collect();
        for &d in &doomed {
            self.nodes.remove(d);
        }
        doomed.len()
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetTree")
            .field("root", &self.root)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

/// Iterator returned by [`WidgetTree::pre_order`].
pub struct PreOrder<'a> {
    tree: &'a WidgetTree,
    stack: Vec<WidgetId>,
}

impl Iterator for PreOrder<'_> {
    type Item = WidgetId;

    fn next(&mut self) -> Option<WidgetId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.tree.nodes.get(id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DrawCtx;
    use wicker_engine::coords::vec2;

    struct Tag(u32);

    impl Widget for Tag {
        fn draw(&self, _cx: &mut DrawCtx<'_, '_>) {}
    }

    fn tags(tree: &WidgetTree, parent: WidgetId) -> Vec<u32> {
        tree.iter(parent).map(|id| tree.get::<Tag>(id).unwrap().0).collect()
    }

    // ── append / size ─────────────────────────────────────────────────────

    #[test]
    fn new_tree_has_empty_root() {
        let tree = WidgetTree::new();
        assert_eq!(tree.node_count(), 1);
        assert!(tree.is_empty(tree.root()));
        assert!(tree.get::<Panel>(tree.root()).is_some());
    }

    #[test]
    fn len_tracks_appends_minus_erases() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        for i in 0..5 {
            tree.emplace_back(root, Tag(i)).unwrap();
        }
        let loose = tree.create(Tag(5));
        tree.push_back(root, loose).unwrap();
        assert_eq!(tree.len(root), 6);

        tree.erase(root, 1).unwrap();
        tree.erase_range(root, 2..4).unwrap();
        assert_eq!(tree.len(root), 3);
        assert_eq!(tags(&tree, root), vec![0, 2, 5]);
    }

    #[test]
    fn front_and_back_follow_surviving_children() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let a = tree.emplace_back(root, Tag(1)).unwrap();
        let _ = tree.emplace_back(root, Tag(2)).unwrap();
        let c = tree.emplace_back(root, Tag(3)).unwrap();
        assert_eq!(tree.front(root), Some(a));
        assert_eq!(tree.back(root), Some(c));

        tree.erase(root, 0).unwrap();
        tree.erase(root, 1).unwrap();
        assert_eq!(tags(&tree, root), vec![2]);
        assert_eq!(tree.front(root), tree.back(root));
    }

    #[test]
    fn erasing_only_child_empties_sequence() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        tree.emplace_back(root, Tag(7)).unwrap();
        tree.erase(root, 0).unwrap();
        assert_eq!(tree.len(root), 0);
        assert_eq!(tree.front(root), None);
        assert_eq!(tree.back(root), None);
    }

    // ── positional insert / erase ─────────────────────────────────────────

    #[test]
    fn insert_places_before_position() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        tree.emplace_back(root, Tag(0)).unwrap();
        tree.emplace_back(root, Tag(2)).unwrap();

        let one = tree.create(Tag(1));
        tree.insert(root, 1, one).unwrap();
        let three = tree.create(Tag(3));
        tree.insert(root, 3, three).unwrap();
        let minus = tree.create(Tag(9));
        tree.insert(root, 0, minus).unwrap();

        assert_eq!(tags(&tree, root), vec![9, 0, 1, 2, 3]);
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let w = tree.create(Tag(0));
        assert_eq!(tree.insert(root, 1, w), Err(TreeError::IndexOutOfBounds { index: 1, len: 0 }));
        assert_eq!(tree.parent(w), None);
    }

    #[test]
    fn erase_out_of_range_is_rejected() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        tree.emplace_back(root, Tag(0)).unwrap();
        assert_eq!(tree.erase(root, 1), Err(TreeError::IndexOutOfBounds { index: 1, len: 1 }));
        assert_eq!(
            tree.erase_range(root, 0..2),
            Err(TreeError::InvalidRange { start: 0, end: 2, len: 1 })
        );
        assert_eq!(tree.len(root), 1);
    }

    #[test]
    fn erase_at_max_index_is_rejected() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        tree.emplace_back(root, Tag(0)).unwrap();
        assert_eq!(
            tree.erase(root, usize::MAX),
            Err(TreeError::IndexOutOfBounds { index: usize::MAX, len: 1 })
        );
        assert_eq!(tree.len(root), 1);
    }

    #[test]
    fn empty_range_erases_nothing() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        tree.emplace_back(root, Tag(0)).unwrap();
        assert_eq!(tree.erase_range(root, 1..1), Ok(0));
        assert_eq!(tree.len(root), 1);
    }

    // ── checked vs unchecked access ───────────────────────────────────────

    #[test]
    fn at_is_checked() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let a = tree.emplace_back(root, Tag(0)).unwrap();
        assert_eq!(tree.at(root, 0), Ok(a));
        assert_eq!(tree.at(root, 3), Err(TreeError::IndexOutOfBounds { index: 3, len: 1 }));
        assert_eq!(tree.children(root)[0], a);
    }

    #[test]
    #[should_panic]
    fn unchecked_index_out_of_range_panics() {
        let tree = WidgetTree::new();
        let _ = tree.children(tree.root())[0];
    }

    // ── ownership ─────────────────────────────────────────────────────────

    #[test]
    fn erase_tears_down_subtree() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let a = tree.emplace_back(root, Tag(0)).unwrap();
        let b = tree.emplace_back(a, Tag(1)).unwrap();
        let c = tree.emplace_back(b, Tag(2)).unwrap();
        assert_eq!(tree.node_count(), 4);

        assert_eq!(tree.erase(root, 0), Ok(3));
        assert_eq!(tree.node_count(), 1);
        for id in [a, b, c] {
            assert!(!tree.contains(id));
            assert_eq!(tree.at(id, 0), Err(TreeError::StaleWidget(id)));
        }
    }

    #[test]
    fn clear_destroys_all_children() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let a = tree.emplace_back(root, Tag(0)).unwrap();
        tree.emplace_back(a, Tag(1)).unwrap();
        tree.emplace_back(root, Tag(2)).unwrap();
        assert_eq!(tree.clear(root), Ok(3));
        assert!(tree.is_empty(root));
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn attached_node_cannot_be_attached_twice() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let a = tree.emplace_back(root, Tag(0)).unwrap();
        let b = tree.emplace_back(root, Tag(1)).unwrap();
        assert_eq!(tree.push_back(b, a), Err(TreeError::AlreadyAttached(a)));
        assert_eq!(tree.push_back(a, root), Err(TreeError::AlreadyAttached(root)));
    }

    #[test]
    fn attaching_under_own_descendant_is_a_cycle() {
        let mut tree = WidgetTree::new();
        let a = tree.create(Tag(0));
        let b = tree.emplace_back(a, Tag(1)).unwrap();
        assert_eq!(tree.push_back(b, a), Err(TreeError::WouldCycle { parent: b, child: a }));
        assert_eq!(tree.push_back(a, a), Err(TreeError::WouldCycle { parent: a, child: a }));
    }

    #[test]
    fn detach_keeps_subtree_and_allows_reattach() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let a = tree.emplace_back(root, Tag(0)).unwrap();
        let b = tree.emplace_back(a, Tag(1)).unwrap();
        let other = tree.emplace_back(root, Tag(2)).unwrap();

        tree.detach(a).unwrap();
        assert!(!tree.is_attached(b));
        assert_eq!(tree.children(a), &[b]);

        tree.push_back(other, a).unwrap();
        assert!(tree.is_attached(b));
        assert_eq!(tree.depth(b), Some(3));
    }

    #[test]
    fn root_cannot_be_destroyed() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        assert_eq!(tree.destroy(root), Err(TreeError::RootNotErasable));
    }

    #[test]
    fn destroy_detached_subtree() {
        let mut tree = WidgetTree::new();
        let a = tree.create(Tag(0));
        tree.emplace_back(a, Tag(1)).unwrap();
        assert_eq!(tree.destroy(a), Ok(2));
        assert_eq!(tree.node_count(), 1);
    }

    // ── traversal ─────────────────────────────────────────────────────────

    #[test]
    fn pre_order_is_parent_first_left_to_right() {
        let mut tree = WidgetTree::with_root(Tag(0));
        let root = tree.root();
        let a = tree.emplace_back(root, Tag(1)).unwrap();
        tree.emplace_back(a, Tag(2)).unwrap();
        tree.emplace_back(a, Tag(3)).unwrap();
        let d = tree.emplace_back(root, Tag(4)).unwrap();
        tree.emplace_back(d, Tag(5)).unwrap();

        let order: Vec<u32> = tree.pre_order(root).map(|id| tree.get::<Tag>(id).unwrap().0).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn for_each_child_mut_visits_in_order() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        for i in 0..3 {
            tree.emplace_back(root, Tag(i)).unwrap();
        }
        tree.for_each_child_mut(root, |_, w| {
            if let Some(tag) = w.as_any_mut().downcast_mut::<Tag>() {
                tag.0 *= 10;
            }
        })
        .unwrap();
        assert_eq!(tags(&tree, root), vec![0, 10, 20]);
    }

    // ── typed access / dirty ──────────────────────────────────────────────

    #[test]
    fn typed_access_checks_type() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let a = tree.emplace_back(root, Tag(4)).unwrap();
        assert!(tree.get::<Panel>(a).is_none());
        tree.get_mut::<Tag>(a).unwrap().0 = 8;
        assert_eq!(tree.get::<Tag>(a).map(|t| t.0), Some(8));
        assert!(tree.type_name(a).unwrap().ends_with("Tag"));
    }

    #[test]
    fn dirty_follows_mutation() {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let a = tree.emplace_back(root, Tag(0)).unwrap();
        assert!(tree.needs_redraw());

        tree.clear_dirty();
        assert!(!tree.needs_redraw());

        tree.set_bounds(a, Vec2::zero()).unwrap();
        assert_eq!(tree.is_dirty(a), Some(false), "unchanged bounds keep the node clean");

        tree.set_bounds(a, vec2(10.0, 10.0)).unwrap();
        assert_eq!(tree.is_dirty(a), Some(true));

        tree.clear_dirty();
        tree.emplace_back(a, Tag(1)).unwrap();
        assert_eq!(tree.is_dirty(a), Some(true));
        assert_eq!(tree.is_dirty(root), Some(false));
    }

    #[test]
    fn detached_dirt_does_not_force_redraw() {
        let mut tree = WidgetTree::new();
        tree.clear_dirty();
        let loose = tree.create(Tag(0));
        assert_eq!(tree.is_dirty(loose), Some(true));
        assert!(!tree.needs_redraw());
    }
}
