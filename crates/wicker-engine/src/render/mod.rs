//! Renderer contract and backend-agnostic geometry.
//!
//! The UI layer never talks to a GPU directly. It emits [`Vertex`] triangle
//! lists through a [`Pass`], which forwards them to whatever [`Renderer`] the
//! application injected. Concrete GPU backends live outside this crate;
//! [`RecordingRenderer`] is the in-tree headless backend.

mod pass;
mod recording;
mod renderer;
pub mod vertex;

pub use pass::{Pass, PassStats};
pub use recording::{RecordingRenderer, RenderCall, RenderLog};
pub use renderer::Renderer;
pub use vertex::Vertex;
