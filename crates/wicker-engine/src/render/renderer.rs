use crate::coords::Vec2;

use super::Vertex;

/// Backend contract consumed by the UI layer.
///
/// A frame is one pass: `begin_pass`, any number of `draw` calls and scissor
/// toggles, then `end_pass`. Calling `draw` or toggling scissor outside a pass,
/// or ending a pass that was never begun, is a caller bug; backends are free to
/// assert on it. Going through [`Pass`](super::Pass) makes those calls
/// impossible to misorder.
///
/// Blending policy, resource lifetime and presentation are the backend's own
/// business.
pub trait Renderer {
    /// Prepares backend state for a new frame's submissions.
    fn begin_pass(&mut self);

    /// Submits a triangle list: every three consecutive vertices form one triangle.
    ///
    /// The slice is borrowed only for the duration of the call.
    fn draw(&mut self, vertices: &[Vertex]);

    /// Finalizes and presents the frame's submissions.
    fn end_pass(&mut self);

    /// Restricts subsequent draws to `offset..offset + extent`, in vertex space.
    fn enable_scissor_test(&mut self, offset: Vec2, extent: Vec2);

    /// Lifts any active scissor restriction.
    fn disable_scissor_test(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    #[inline]
    fn begin_pass(&mut self) {
        (**self).begin_pass()
    }

    #[inline]
    fn draw(&mut self, vertices: &[Vertex]) {
        (**self).draw(vertices)
    }

    #[inline]
    fn end_pass(&mut self) {
        (**self).end_pass()
    }

    #[inline]
    fn enable_scissor_test(&mut self, offset: Vec2, extent: Vec2) {
        (**self).enable_scissor_test(offset, extent)
    }

    #[inline]
    fn disable_scissor_test(&mut self) {
        (**self).disable_scissor_test()
    }
}
