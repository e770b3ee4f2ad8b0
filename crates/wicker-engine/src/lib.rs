//! Wicker engine crate.
//!
//! Backend-facing building blocks shared by the UI layer: vector and color
//! types, the vertex format, the renderer contract, logging setup and frame
//! timing.

pub mod coords;
pub mod logging;
pub mod render;
pub mod time;
