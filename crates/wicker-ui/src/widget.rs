use std::any::Any;

use wicker_engine::coords::{Scissor, Vec2};
use wicker_engine::time::FrameTime;

use crate::context::DrawCtx;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The trait every drawable node implements.
///
/// Widgets live in a [`WidgetTree`](crate::tree::WidgetTree); the tree owns
/// their children, bounds and dirty state, so an implementation only carries
/// its own visual state.
///
/// # Implementing a custom widget
///
/// ```rust
/// use wicker_ui::prelude::*;
///
/// struct Backdrop(Color);
///
/// impl Widget for Backdrop {
///     fn draw(&self, cx: &mut DrawCtx<'_, '_>) {
///         let quad = vertex::quad(Vec2::zero(), cx.bounds(), self.0);
///         cx.draw(&quad);
///     }
/// }
/// ```
pub trait Widget: AsAny {
    /// Emits this widget's geometry.
    ///
    /// Called by the context exactly once per frame, before any of the
    /// widget's children. A [`DrawCtx`] can only be obtained from a context,
    /// so drawing is only ever triggered by a frame.
    fn draw(&self, cx: &mut DrawCtx<'_, '_>);

    /// Region this widget and its whole subtree are clipped to.
    ///
    /// `bounds` is the node's current extent. Nested regions intersect.
    fn scissor(&self, bounds: Vec2) -> Option<Scissor> {
        let _ = bounds;
        None
    }

    /// Advances time-based state. Return `true` if the visual output changed;
    /// the node is then marked dirty.
    fn update(&mut self, time: &FrameTime) -> bool {
        let _ = time;
        false
    }
}

// ── downcasting ───────────────────────────────────────────────────────────

/// Gives `dyn Widget` access to `Any` for typed lookups.
///
/// Blanket-implemented; never implement it by hand.
pub trait AsAny: 'static {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}
