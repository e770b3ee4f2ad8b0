use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

/// Element types a [`Vector`] can hold.
///
/// Implemented for the primitive integer and float types. `Default` must be the
/// additive zero, which holds for every implementor.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(impl Scalar for $t {})*
    };
}

impl_scalar!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Fixed-dimension numeric vector.
///
/// The dimension `N` is part of the type, so elementwise operators only accept
/// operands of the same dimension and constructing from the wrong number of
/// elements is rejected at compile time:
///
/// ```compile_fail
/// use wicker_engine::coords::Vec2;
/// let _ = Vec2::new([1.0, 2.0, 3.0]);
/// ```
///
/// Negation exists only for signed element types:
///
/// ```compile_fail
/// use wicker_engine::coords::UVec2;
/// let _ = -UVec2::new([1, 2]);
/// ```
///
/// ```
/// use wicker_engine::coords::{vec2, Vec2};
///
/// let p = vec2(1.0, 2.0) * 2.0 + Vec2::splat(0.5);
/// assert_eq!(p, vec2(2.5, 4.5));
/// assert_eq!(p.to_string(), "Vector{2.5, 4.5}");
/// ```
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>([T; N]);

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]`, which has no padding
// and is valid for any bit pattern whenever `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}
// SAFETY: see above; `Pod` additionally requires `Copy + 'static`, implied by `T: Pod`.
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

impl<T, const N: usize> Vector<T, N> {
    /// Builds a vector from exactly `N` elements.
    #[inline]
    pub const fn new(elements: [T; N]) -> Self {
        Self(elements)
    }

    /// Dimension of the vector; always `N`.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Checked element access.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Every element set to zero.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self(elements)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// Indexes an element. Panics if `index >= N`; use [`Vector::get`] for a checked read.
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

// Elementwise (vector ∘ vector) and broadcast (vector ∘ scalar) forms, each
// both in-place and value-returning.
macro_rules! impl_elementwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Scalar, const N: usize> $OpAssign for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                    lhs.$op_assign(rhs);
                }
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<T> for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                for lhs in &mut self.0 {
                    lhs.$op_assign(rhs);
                }
            }
        }

        impl<T: Scalar, const N: usize> $Op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                <Self as $OpAssign<Self>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T: Scalar, const N: usize> $Op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: T) -> Self {
                <Self as $OpAssign<T>>::$op_assign(&mut self, rhs);
                self
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign);
impl_elementwise!(Sub, sub, SubAssign, sub_assign);
impl_elementwise!(Mul, mul, MulAssign, mul_assign);
impl_elementwise!(Div, div, DivAssign, div_assign);

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

/// `Vector{a, b, …}`; diagnostics only.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector{")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str("}")
    }
}

// ── named specializations ─────────────────────────────────────────────────

/// 2D float vector: positions, extents, offsets.
pub type Vec2 = Vector<f32, 2>;
/// 2D unsigned vector: pixel-space extents.
pub type UVec2 = Vector<u32, 2>;
/// RGBA color, one float per channel in `[0, 1]`.
pub type Color = Vector<f32, 4>;

#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

#[inline]
pub const fn uvec2(x: u32, y: u32) -> UVec2 {
    Vector([x, y])
}

#[inline]
pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Vector([r, g, b, a])
}

impl<T: Copy> Vector<T, 2> {
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }
}

impl Vec2 {
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        vec2(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        vec2(self.x().max(other.x()), self.y().max(other.y()))
    }
}

impl Color {
    pub const WHITE: Color = rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = rgba(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn b(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub const fn a(&self) -> f32 {
        self.0[3]
    }
}
