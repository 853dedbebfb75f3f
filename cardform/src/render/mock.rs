// cardform/src/render/mock.rs
//! Recording renderer for tests.

use crate::controller::FormView;
use crate::preview::CardPreview;
use crate::render::traits::Renderer;
use crate::store::FieldStore;
use crate::types::SessionState;
use crate::validation::ErrorMap;
use crate::{Error, Result};

/// Owned copy of one rendered `FormView`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Session state at render time.
    pub state: SessionState,
    /// Raw values at render time.
    pub fields: FieldStore,
    /// Errors at render time.
    pub errors: ErrorMap,
    /// Preview at render time.
    pub preview: CardPreview,
}

impl From<&FormView<'_>> for RenderedFrame {
    fn from(view: &FormView<'_>) -> Self {
        Self {
            state: view.state,
            fields: view.fields.clone(),
            errors: view.errors.clone(),
            preview: view.preview.clone(),
        }
    }
}

/// Mock renderer for tests. It records every frame it is asked to draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Every frame rendered so far.
    pub frames: Vec<RenderedFrame>,
    /// Testing hook: number of subsequent render calls that should fail
    pub failures: usize,
}

impl RecordingRenderer {
    /// Renderer with no frames and no injected failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent render calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Most recent frame.
    pub fn last(&self) -> Option<&RenderedFrame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &FormView<'_>) -> Result<()> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Io(std::io::Error::other("render failure injected")));
        }
        self.frames.push(RenderedFrame::from(view));
        Ok(())
    }
}
