//! Wicker UI: a retained widget tree drawn through an injected renderer.
//!
//! # Quick start
//!
//! ```rust
//! use wicker_engine::render::RecordingRenderer;
//! use wicker_ui::prelude::*;
//!
//! let mut cx = make_context(RecordingRenderer::new());
//! let root = cx.root();
//!
//! let tree = cx.tree_mut();
//! let panel = tree.emplace_back(root, Panel::new().fill(Color::BLACK)).unwrap();
//! tree.set_bounds(panel, vec2(1.0, 1.0)).unwrap();
//! tree.emplace_back(panel, Triangle::default()).unwrap();
//!
//! // Once per frame:
//! cx.update();
//! let stats = cx.draw();
//! assert_eq!(stats.widgets, 3);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any `'static` type and add it with
//! [`WidgetTree::emplace_back`](tree::WidgetTree::emplace_back). Children,
//! bounds and dirty state are kept by the tree, not by the widget.

pub mod context;
pub mod error;
pub mod tree;
pub mod widget;
pub mod widgets;

pub use context::{make_context, Context};
pub use wicker_engine as engine;

/// Everything needed to build a tree and write widgets.
pub mod prelude {
    pub use crate::context::{make_context, Context, DrawCtx, FrameStats};
    pub use crate::error::TreeError;
    pub use crate::tree::{WidgetId, WidgetTree};
    pub use crate::widget::{AsAny, Widget};
    pub use crate::widgets::{Panel, Triangle};

    // Engine primitives every widget touches.
    pub use wicker_engine::coords::{rgba, uvec2, vec2, Color, Scissor, UVec2, Vec2, Vector};
    pub use wicker_engine::render::{vertex, Renderer, Vertex};
    pub use wicker_engine::time::FrameTime;
}
