// cardform/src/controller/handle.rs
//! The form session handle.

use log::{debug, trace};

use crate::controller::{FormEvent, FormView};
use crate::preview::{CardPreview, PreviewConfig};
use crate::render::Renderer;
use crate::store::FieldStore;
use crate::types::{FieldName, SessionState};
use crate::validation::{self, ErrorMap};
use crate::Result;

/// Owns one form session: the raw field values, the errors from the last
/// submit, and the Editing/Submitted state.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    store: FieldStore,
    errors: ErrorMap,
    state: SessionState,
    preview_config: PreviewConfig,
}

impl FormController {
    /// Fresh session: empty fields, no errors, Editing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from already-entered values.
    pub fn with_store(store: FieldStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Use custom preview placeholders.
    pub fn with_preview_config(mut self, config: PreviewConfig) -> Self {
        self.preview_config = config;
        self
    }

    /// Overwrite a field with raw text. No validation; errors from the last
    /// submit stay as they are.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        trace!("set {} ({} chars)", field, value.chars().count());
        self.store.set(field, value);
    }

    /// `set_field` keyed by the host's string name (`cardNumber`, ...).
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: FieldName = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validate the current fields, replace the error map, and move to
    /// Submitted when nothing failed. A no-op once Submitted.
    pub fn submit(&mut self) -> SessionState {
        if self.state.is_submitted() {
            debug!("submit ignored: already submitted");
            return self.state;
        }

        self.errors = validation::validate(&self.store);
        let next = self.state.after_submit(self.errors.is_empty());
        if next != self.state {
            debug!("session {} -> {}", self.state, next);
        } else {
            debug!("submit rejected: {} field error(s)", self.errors.len());
        }
        self.state = next;
        self.state
    }

    /// Return to the form. Fields and errors are left untouched.
    pub fn reset(&mut self) -> SessionState {
        let next = self.state.after_continue();
        if next != self.state {
            debug!("session {} -> {}", self.state, next);
        } else {
            debug!("continue ignored: already editing");
        }
        self.state = next;
        self.state
    }

    /// Route a UI event to the matching operation.
    pub fn dispatch(&mut self, event: FormEvent) -> SessionState {
        match event {
            FormEvent::Change { field, value } => {
                self.set_field(field, value);
                self.state
            }
            FormEvent::Submit => self.submit(),
            FormEvent::Continue => self.reset(),
        }
    }

    /// Current raw values.
    pub fn fields(&self) -> &FieldStore {
        &self.store
    }

    /// Errors from the last submit.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Placeholders used by `preview`.
    pub fn preview_config(&self) -> &PreviewConfig {
        &self.preview_config
    }

    /// Live card mock for the current values.
    pub fn preview(&self) -> CardPreview {
        CardPreview::from_store(&self.store, &self.preview_config)
    }

    /// Read-only snapshot for the presentation layer.
    pub fn view(&self) -> FormView<'_> {
        FormView::new(self.state, &self.store, &self.errors, self.preview())
    }

    /// Hand the current view to a renderer.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.render(&self.view())
    }
}
