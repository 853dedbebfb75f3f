// cardform/src/controller/view.rs
//! Read-only session snapshot.

use crate::preview::CardPreview;
use crate::store::FieldStore;
use crate::types::{ErrorKey, FieldName, SessionState};
use crate::validation::ErrorMap;

/// Borrowed snapshot of a session for rendering.
#[derive(Debug, Clone)]
pub struct FormView<'a> {
    /// Which view to show.
    pub state: SessionState,
    /// Raw values.
    pub fields: &'a FieldStore,
    /// Errors from the last submit.
    pub errors: &'a ErrorMap,
    /// Live card mock.
    pub preview: CardPreview,
}

impl<'a> FormView<'a> {
    /// Assemble a snapshot.
    pub fn new(
        state: SessionState,
        fields: &'a FieldStore,
        errors: &'a ErrorMap,
        preview: CardPreview,
    ) -> Self {
        Self {
            state,
            fields,
            errors,
            preview,
        }
    }

    /// Whether this input renders with the error style.
    pub fn has_error(&self, field: FieldName) -> bool {
        self.errors.flags(field)
    }

    /// Message for a failing slot.
    pub fn message(&self, key: ErrorKey) -> Option<&'static str> {
        self.errors.message(key)
    }
}
