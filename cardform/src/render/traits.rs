// cardform/src/render/traits.rs
//! The `Renderer` trait.

use crate::controller::FormView;
use crate::Result;

/// Renderer trait abstracts the presentation layer away from form logic.
/// Implementations only read the view; they never validate.
pub trait Renderer {
    /// Draw the current session.
    fn render(&mut self, view: &FormView<'_>) -> Result<()>;
}
