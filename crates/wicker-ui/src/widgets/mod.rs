//! Stock widgets.

pub mod panel;
pub mod triangle;

pub use panel::Panel;
pub use triangle::Triangle;
