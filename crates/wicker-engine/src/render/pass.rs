use crate::coords::Scissor;

use super::{Renderer, Vertex};

/// Counters gathered over one pass.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PassStats {
    /// `draw` calls forwarded to the renderer.
    pub batches: usize,
    /// Vertices across all forwarded batches.
    pub vertices: usize,
}

/// An open render pass.
///
/// `begin` calls [`Renderer::begin_pass`]; `finish` (or dropping the guard)
/// calls [`Renderer::end_pass`] exactly once. Everything submitted in between
/// goes through the guard, so a draw can never land outside a pass and a pass
/// can never be ended twice.
///
/// # Scissor stack
///
/// [`push_scissor`](Self::push_scissor) intersects the new region with the
/// current one, so nested regions never widen the visible area.
/// [`pop_scissor`](Self::pop_scissor) restores the enclosing region, or
/// disables the scissor test once the stack is empty.
pub struct Pass<'r> {
    renderer: &'r mut dyn Renderer,
    scissors: Vec<Scissor>,
    stats: PassStats,
    open: bool,
}

impl<'r> Pass<'r> {
    pub fn begin(renderer: &'r mut dyn Renderer) -> Self {
        log::debug!("begin pass");
        renderer.begin_pass();
        Self { renderer, scissors: Vec::new(), stats: PassStats::default(), open: true }
    }

    /// Forwards a triangle list to the renderer. Empty batches are dropped;
    /// a partial trailing triangle is logged and forwarded unchanged.
    pub fn draw(&mut self, vertices: &[Vertex]) {
        if vertices.is_empty() {
            return;
        }
        if vertices.len() % 3 != 0 {
            log::warn!(
                "vertex batch of {} is not a whole number of triangles; trailing {} left to the backend",
                vertices.len(),
                vertices.len() % 3
            );
        }
        self.renderer.draw(vertices);
        self.stats.batches += 1;
        self.stats.vertices += vertices.len();
    }

    /// Current effective scissor region, if any.
    #[inline]
    pub fn scissor(&self) -> Option<Scissor> {
        self.scissors.last().copied()
    }

    /// Depth of the scissor stack.
    #[inline]
    pub fn scissor_depth(&self) -> usize {
        self.scissors.len()
    }

    /// Restricts subsequent draws to `scissor` (intersected with the current region).
    ///
    /// Returns the effective region. Must be balanced with [`pop_scissor`](Self::pop_scissor).
    pub fn push_scissor(&mut self, scissor: Scissor) -> Scissor {
        let effective = match self.scissors.last() {
            None => scissor.normalized(),
            Some(&parent) => parent.intersect(scissor),
        };
        self.scissors.push(effective);
        self.renderer.enable_scissor_test(effective.offset, effective.extent);
        effective
    }

    /// Ends the most recent scissor region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_scissor`.
    pub fn pop_scissor(&mut self) {
        debug_assert!(!self.scissors.is_empty(), "pop_scissor called without matching push_scissor");
        if self.scissors.pop().is_none() {
            return;
        }
        match self.scissors.last() {
            Some(parent) => self.renderer.enable_scissor_test(parent.offset, parent.extent),
            None => self.renderer.disable_scissor_test(),
        }
    }

    #[inline]
    pub fn stats(&self) -> PassStats {
        self.stats
    }

    /// Ends the pass and returns its counters.
    pub fn finish(mut self) -> PassStats {
        self.close();
        self.stats
    }

    fn close(&mut self) {
        if !self.open {
            return;
        }
        if !self.scissors.is_empty() {
            log::warn!("pass ended with {} unbalanced scissor region(s)", self.scissors.len());
            self.scissors.clear();
            self.renderer.disable_scissor_test();
        }
        self.open = false;
        self.renderer.end_pass();
        log::debug!(
            "end pass: {} batch(es), {} vertices",
            self.stats.batches,
            self.stats.vertices
        );
    }
}

impl Drop for Pass<'_> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{vec2, Color};
    use crate::render::{RecordingRenderer, RenderCall};

    fn tri() -> [Vertex; 3] {
        [
            Vertex::new(vec2(0.0, 0.0), Color::WHITE),
            Vertex::new(vec2(1.0, 0.0), Color::WHITE),
            Vertex::new(vec2(0.0, 1.0), Color::WHITE),
        ]
    }

    #[test]
    fn finish_ends_pass_once() {
        let mut r = RecordingRenderer::new();
        let log = r.log();
        let pass = Pass::begin(&mut r);
        let stats = pass.finish();
        assert_eq!(stats, PassStats::default());
        assert_eq!(log.calls(), vec![RenderCall::BeginPass, RenderCall::EndPass]);
    }

    #[test]
    fn drop_ends_pass() {
        let mut r = RecordingRenderer::new();
        let log = r.log();
        {
            let mut pass = Pass::begin(&mut r);
            pass.draw(&tri());
        }
        assert_eq!(log.calls().last(), Some(&RenderCall::EndPass));
        assert_eq!(log.count(|c| matches!(c, RenderCall::EndPass)), 1);
    }

    #[test]
    fn empty_batches_are_not_forwarded() {
        let mut r = RecordingRenderer::new();
        let log = r.log();
        let mut pass = Pass::begin(&mut r);
        pass.draw(&[]);
        pass.draw(&tri());
        let stats = pass.finish();
        assert_eq!(stats, PassStats { batches: 1, vertices: 3 });
        assert_eq!(log.draws().len(), 1);
    }

    #[test]
    fn partial_triangle_batch_is_forwarded() {
        let mut r = RecordingRenderer::new();
        let log = r.log();
        let mut pass = Pass::begin(&mut r);
        let batch = [tri()[0]; 4];
        pass.draw(&batch);
        let stats = pass.finish();
        assert_eq!(stats, PassStats { batches: 1, vertices: 4 });
        assert_eq!(log.draws(), vec![batch.to_vec()]);
    }

    #[test]
    fn nested_scissor_intersects_and_restores() {
        let mut r = RecordingRenderer::new();
        let log = r.log();
        let mut pass = Pass::begin(&mut r);
        pass.push_scissor(Scissor::new(vec2(0.0, 0.0), vec2(100.0, 100.0)));
        let inner = pass.push_scissor(Scissor::new(vec2(50.0, 50.0), vec2(100.0, 100.0)));
        assert_eq!(inner, Scissor::new(vec2(50.0, 50.0), vec2(50.0, 50.0)));
        pass.pop_scissor();
        pass.pop_scissor();
        pass.finish();

        assert_eq!(
            log.calls(),
            vec![
                RenderCall::BeginPass,
                RenderCall::EnableScissor { offset: vec2(0.0, 0.0), extent: vec2(100.0, 100.0) },
                RenderCall::EnableScissor { offset: vec2(50.0, 50.0), extent: vec2(50.0, 50.0) },
                RenderCall::EnableScissor { offset: vec2(0.0, 0.0), extent: vec2(100.0, 100.0) },
                RenderCall::DisableScissor,
                RenderCall::EndPass,
            ]
        );
    }

    #[test]
    fn unbalanced_scissor_is_disabled_before_end() {
        let mut r = RecordingRenderer::new();
        let log = r.log();
        let mut pass = Pass::begin(&mut r);
        pass.push_scissor(Scissor::new(vec2(0.0, 0.0), vec2(1.0, 1.0)));
        pass.finish();
        let calls = log.calls();
        assert_eq!(&calls[calls.len() - 2..], &[RenderCall::DisableScissor, RenderCall::EndPass]);
    }
}
