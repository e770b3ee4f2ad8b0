use wicker_engine::coords::{Color, Scissor, Vec2};
use wicker_engine::render::vertex;

use crate::context::DrawCtx;
use crate::widget::Widget;

/// Rectangular container: optional background fill, optional clipping.
///
/// The panel's rectangle is `offset..offset + bounds`, where `bounds` is the
/// extent stored on its tree node. An empty `Panel` draws nothing and exists
/// only to group children.
///
/// # Example
/// ```rust
/// use wicker_ui::prelude::*;
///
/// let panel = Panel::new()
///     .offset(vec2(10.0, 10.0))
///     .fill(rgba(0.1, 0.1, 0.15, 1.0))
///     .clip(true);
/// assert!(panel.clips());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    offset: Vec2,
    fill: Option<Color>,
    clip: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Clip this panel's children to its rectangle.
    pub fn clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    pub fn set_fill(&mut self, color: Option<Color>) {
        self.fill = color;
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    #[inline]
    pub fn fill_color(&self) -> Option<Color> {
        self.fill
    }

    #[inline]
    pub fn clips(&self) -> bool {
        self.clip
    }
}

impl Widget for Panel {
    fn draw(&self, cx: &mut DrawCtx<'_, '_>) {
        let Some(color) = self.fill else { return };
        let bounds = cx.bounds();
        if bounds.x() <= 0.0 || bounds.y() <= 0.0 {
            return;
        }
        cx.draw(&vertex::quad(self.offset, self.offset + bounds, color));
    }

    fn scissor(&self, bounds: Vec2) -> Option<Scissor> {
        self.clip.then(|| Scissor::new(self.offset, bounds))
    }
}
