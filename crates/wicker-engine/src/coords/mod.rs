//! Vector, color and region types shared by renderers and widgets.
//!
//! All geometry lives in one coordinate space: whatever space the active
//! renderer interprets vertex positions in. Scissor regions use the same space.

mod scissor;
mod vector;

pub use scissor::Scissor;
pub use vector::{rgba, uvec2, vec2, Color, Scalar, UVec2, Vec2, Vector};
