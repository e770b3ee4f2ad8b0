//! Frame timing.
//!
//! One [`FrameClock`] per context; `tick()` once per update.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
