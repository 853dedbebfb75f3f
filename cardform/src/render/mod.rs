// cardform/src/render/mod.rs
//! Presentation seam and its implementations.

pub mod mock;
pub mod text;
pub mod traits;

pub use mock::{RecordingRenderer, RenderedFrame};
pub use text::TextRenderer;
pub use traits::Renderer;
