use super::Vec2;

/// Axis-aligned scissor region in vertex coordinate space.
///
/// `offset` is the minimum corner, `extent` the size. Negative extents are
/// normalized away by [`Scissor::normalized`] before any geometric query.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Scissor {
    pub offset: Vec2,
    pub extent: Vec2,
}

impl Scissor {
    #[inline]
    pub const fn new(offset: Vec2, extent: Vec2) -> Self {
        Self { offset, extent }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.offset + self.extent
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.extent.x() <= 0.0 || self.extent.y() <= 0.0
    }

    /// Flips negative extents so both components are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let a = self.offset;
        let b = self.max();
        Self::new(a.min(b), b.max(a) - a.min(b))
    }

    /// Half-open containment: [offset, offset + extent).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let s = self.normalized();
        let max = s.max();
        p.x() >= s.offset.x() && p.y() >= s.offset.y() && p.x() < max.x() && p.y() < max.y()
    }

    /// Overlap of two regions.
    ///
    /// Disjoint (or edge-touching) regions collapse to a zero extent at the
    /// clamped corner rather than `None`: a nested scissor that falls outside its
    /// parent must still clip everything.
    #[inline]
    pub fn intersect(self, other: Scissor) -> Scissor {
        let a = self.normalized();
        let b = other.normalized();

        let min = a.offset.max(b.offset);
        let max = a.max().min(b.max());
        let extent = (max - min).max(Vec2::zero());

        Scissor::new(min, extent)
    }
}
