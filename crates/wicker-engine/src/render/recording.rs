use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::Vec2;

use super::{Renderer, Vertex};

/// One call made against a [`Renderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    BeginPass,
    Draw(Vec<Vertex>),
    EndPass,
    EnableScissor { offset: Vec2, extent: Vec2 },
    DisableScissor,
}

/// Shared handle onto the calls recorded by a [`RecordingRenderer`].
///
/// Cloning is cheap; every clone observes the same recording, so a caller can
/// keep one after moving the renderer into a context.
#[derive(Debug, Clone, Default)]
pub struct RenderLog(Rc<RefCell<Vec<RenderCall>>>);

impl RenderLog {
    /// Snapshot of every call so far, in order.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.0.borrow().clone()
    }

    /// Vertex batches of every `draw` call so far, in order.
    pub fn draws(&self) -> Vec<Vec<Vertex>> {
        self.0
            .borrow()
            .iter()
            .filter_map(|c| match c {
                RenderCall::Draw(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, mut pred: impl FnMut(&RenderCall) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, call: RenderCall) {
        self.0.borrow_mut().push(call);
    }
}

/// Headless backend that records every call instead of rendering.
///
/// Useful for tests and for driving the UI layer without a GPU. Pass
/// bracketing is validated with `debug_assert!`: drawing or toggling scissor
/// outside a pass, nesting `begin_pass`, or ending a pass that is not open all
/// panic in debug builds.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    log: RenderLog,
    in_pass: bool,
    passes: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle onto this renderer's recording.
    pub fn log(&self) -> RenderLog {
        self.log.clone()
    }

    /// Completed passes.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    #[inline]
    pub fn in_pass(&self) -> bool {
        self.in_pass
    }
}

impl Renderer for RecordingRenderer {
    fn begin_pass(&mut self) {
        debug_assert!(!self.in_pass, "begin_pass called while a pass is already open");
        self.in_pass = true;
        self.log.push(RenderCall::BeginPass);
    }

    fn draw(&mut self, vertices: &[Vertex]) {
        debug_assert!(self.in_pass, "draw called outside a pass");
        if vertices.len() % 3 != 0 {
            log::warn!(
                "draw: {} vertices is not a whole number of triangles; trailing {} ignored",
                vertices.len(),
                vertices.len() % 3
            );
        }
        self.log.push(RenderCall::Draw(vertices.to_vec()));
    }

    fn end_pass(&mut self) {
        debug_assert!(self.in_pass, "end_pass called without a matching begin_pass");
        self.in_pass = false;
        self.passes += 1;
        self.log.push(RenderCall::EndPass);
    }

    fn enable_scissor_test(&mut self, offset: Vec2, extent: Vec2) {
        debug_assert!(self.in_pass, "enable_scissor_test called outside a pass");
        self.log.push(RenderCall::EnableScissor { offset, extent });
    }

    fn disable_scissor_test(&mut self) {
        debug_assert!(self.in_pass, "disable_scissor_test called outside a pass");
        self.log.push(RenderCall::DisableScissor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{vec2, Color};

    #[test]
    fn records_in_call_order() {
        let mut r = RecordingRenderer::new();
        let log = r.log();
        let tri = [Vertex::new(vec2(0.0, 0.0), Color::WHITE); 3];

        r.begin_pass();
        r.enable_scissor_test(vec2(1.0, 2.0), vec2(3.0, 4.0));
        r.draw(&tri);
        r.disable_scissor_test();
        r.end_pass();

        assert_eq!(
            log.calls(),
            vec![
                RenderCall::BeginPass,
                RenderCall::EnableScissor { offset: vec2(1.0, 2.0), extent: vec2(3.0, 4.0) },
                RenderCall::Draw(tri.to_vec()),
                RenderCall::DisableScissor,
                RenderCall::EndPass,
            ]
        );
        assert_eq!(r.passes(), 1);
        assert!(!r.in_pass());
    }

    #[test]
    fn log_clones_share_recording() {
        let mut r = RecordingRenderer::new();
        let a = r.log();
        let b = a.clone();
        r.begin_pass();
        r.end_pass();
        assert_eq!(a.len(), 2);
        b.clear();
        assert!(a.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "draw called outside a pass")]
    fn draw_outside_pass_panics_in_debug() {
        let mut r = RecordingRenderer::new();
        r.draw(&[]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "without a matching begin_pass")]
    fn double_end_panics_in_debug() {
        let mut r = RecordingRenderer::new();
        r.begin_pass();
        r.end_pass();
        r.end_pass();
    }
}
