use wicker_engine::coords::{Scissor, Vec2};
use wicker_engine::render::{Pass, PassStats, Renderer, Vertex};
use wicker_engine::time::{FrameClock, FrameTime};

use crate::tree::{WidgetId, WidgetTree};

// ── FrameStats ────────────────────────────────────────────────────────────

/// What one [`Context::draw`] did.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Widgets whose `draw` was invoked.
    pub widgets: usize,
    /// Vertex batches forwarded to the renderer.
    pub batches: usize,
    /// Vertices across all batches.
    pub vertices: usize,
}

// ── Context ───────────────────────────────────────────────────────────────

/// Owns a renderer and a widget tree, and drives the per-frame cycle.
///
/// Once per frame the application calls [`update`](Self::update) and then
/// [`draw`](Self::draw). A context always has exactly one renderer; there is
/// no way to build one without it.
///
/// # Example
///
/// ```rust
/// use wicker_engine::render::{RecordingRenderer, RenderCall};
/// use wicker_ui::prelude::*;
///
/// let backend = RecordingRenderer::new();
/// let calls = backend.log();
///
/// let mut cx = make_context(backend);
/// let root = cx.root();
/// cx.tree_mut().emplace_back(root, Triangle::default()).unwrap();
///
/// cx.update();
/// cx.draw();
///
/// assert_eq!(calls.calls().first(), Some(&RenderCall::BeginPass));
/// assert_eq!(calls.calls().last(), Some(&RenderCall::EndPass));
/// ```
pub struct Context {
    renderer: Box<dyn Renderer>,
    tree: WidgetTree,
    clock: FrameClock,
    frame_time: Option<FrameTime>,
    frames: u64,
}

/// Builds a context around a concrete backend.
pub fn make_context<R: Renderer + 'static>(renderer: R) -> Context {
    Context::new(renderer)
}

impl Context {
    pub fn new<R: Renderer + 'static>(renderer: R) -> Self {
        Self::from_boxed(Box::new(renderer))
    }

    /// Builds a context around an already type-erased backend.
    pub fn from_boxed(renderer: Box<dyn Renderer>) -> Self {
        Self {
            renderer,
            tree: WidgetTree::new(),
            clock: FrameClock::new(),
            frame_time: None,
            frames: 0,
        }
    }

    /// Replaces the tree at construction time.
    pub fn with_tree(mut self, tree: WidgetTree) -> Self {
        self.attach(tree);
        self
    }

    /// Replaces the frame clock (e.g. one with custom delta-time clamps).
    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    /// Attaches `tree`, returning the previous one. The new tree is drawn in full
    /// on the next frame.
    ///
    /// Handles obtained from the previous tree belong to the returned tree:
    /// used against the new one they may name a different widget.
    pub fn attach(&mut self, tree: WidgetTree) -> WidgetTree {
        let old = std::mem::replace(&mut self.tree, tree);
        let root = self.tree.root();
        // A tree that was drawn elsewhere may be clean; it is new to this renderer.
        let _ = self.tree.mark_dirty(root);
        old
    }

    #[inline]
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    #[inline]
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    #[inline]
    pub fn root(&self) -> WidgetId {
        self.tree.root()
    }

    /// Timing of the most recent [`update`](Self::update), if any.
    #[inline]
    pub fn frame_time(&self) -> Option<FrameTime> {
        self.frame_time
    }

    /// Frames drawn so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances time and lets every attached widget update, in draw order.
    ///
    /// Widgets whose [`Widget::update`](crate::widget::Widget::update) returns
    /// `true` are marked dirty.
    pub fn update(&mut self) -> FrameTime {
        let time = self.clock.tick();
        self.frame_time = Some(time);

        let order: Vec<WidgetId> = self.tree.pre_order(self.tree.root()).collect();
        let mut changed = 0usize;
        for id in order {
            let Ok(node) = self.tree.node_mut(id) else { continue };
            if node.widget.update(&time) {
                node.dirty = true;
                changed += 1;
            }
        }
        if changed > 0 {
            log::trace!("update #{}: {changed} widget(s) changed", time.frame_index);
        }
        time
    }

    /// Draws one frame: begins a pass, draws every attached widget
    /// depth-first (parent before children, children in order), ends the pass.
    ///
    /// Widgets with a [`scissor`](crate::widget::Widget::scissor) region are
    /// clipped together with their subtree. Dirty flags are cleared afterwards.
    pub fn draw(&mut self) -> FrameStats {
        let mut pass = Pass::begin(&mut *self.renderer);
        let widgets = draw_subtree(&self.tree, self.tree.root(), &mut pass, self.frame_time);
        let PassStats { batches, vertices } = pass.finish();

        self.tree.clear_dirty();
        self.frames += 1;

        let stats = FrameStats { widgets, batches, vertices };
        log::debug!("frame {} drawn: {stats:?}", self.frames);
        stats
    }

    /// Draws only if some attached widget is dirty.
    pub fn draw_if_dirty(&mut self) -> Option<FrameStats> {
        if self.tree.needs_redraw() {
            Some(self.draw())
        } else {
            log::trace!("frame skipped: tree clean");
            None
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("tree", &self.tree)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

enum Step {
    Enter(WidgetId, usize),
    /// Closes the scissor region opened by the node entered before its subtree.
    PopScissor,
}

/// Draws `root` and everything below it, parent first, children in order.
/// Returns the number of widgets drawn.
fn draw_subtree(tree: &WidgetTree, root: WidgetId, pass: &mut Pass<'_>, frame_time: Option<FrameTime>) -> usize {
    let mut drawn = 0;
    let mut stack = vec![Step::Enter(root, 0)];

    while let Some(step) = stack.pop() {
        let (id, depth) = match step {
            Step::Enter(id, depth) => (id, depth),
            Step::PopScissor => {
                pass.pop_scissor();
                continue;
            }
        };
        let Ok(node) = tree.node(id) else { continue };

        if let Some(region) = node.widget.scissor(node.bounds) {
            pass.push_scissor(region);
            stack.push(Step::PopScissor);
        }

        {
            let mut cx = DrawCtx { pass: &mut *pass, widget: id, bounds: node.bounds, depth, frame_time };
            node.widget.draw(&mut cx);
        }
        drawn += 1;
        log::trace!("drew {} {id:?} at depth {depth}", (*node.widget).type_name());

        stack.extend(node.children.iter().rev().map(|&child| Step::Enter(child, depth + 1)));
    }
    drawn
}

// ── DrawCtx ───────────────────────────────────────────────────────────────

/// Handle a widget draws through.
///
/// Only a [`Context`] can create one, which is what restricts
/// [`Widget::draw`](crate::widget::Widget::draw) to frame time. Geometry is
/// forwarded straight to the context's renderer inside the current pass.
pub struct DrawCtx<'a, 'r> {
    pass: &'a mut Pass<'r>,
    widget: WidgetId,
    bounds: Vec2,
    depth: usize,
    frame_time: Option<FrameTime>,
}

impl DrawCtx<'_, '_> {
    /// Submits a triangle list for this widget.
    #[inline]
    pub fn draw(&mut self, vertices: &[Vertex]) {
        self.pass.draw(vertices);
    }

    /// Extent stored on the widget's tree node.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Handle of the widget being drawn.
    #[inline]
    pub fn widget(&self) -> WidgetId {
        self.widget
    }

    /// Distance from the root (root = 0).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Timing of the latest update, `None` if the context was never updated.
    #[inline]
    pub fn frame_time(&self) -> Option<FrameTime> {
        self.frame_time
    }

    /// Current effective scissor region.
    #[inline]
    pub fn scissor(&self) -> Option<Scissor> {
        self.pass.scissor()
    }

    /// Runs `f` with draws clipped to `offset..offset + extent` (intersected
    /// with any enclosing region), then restores the previous region.
    pub fn with_scissor<T>(&mut self, offset: Vec2, extent: Vec2, f: impl FnOnce(&mut Self) -> T) -> T {
        self.pass.push_scissor(Scissor::new(offset, extent));
        let out = f(self);
        self.pass.pop_scissor();
        out
    }
}
