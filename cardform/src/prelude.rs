// cardform/src/prelude.rs
//! Common imports.

pub use crate::controller::{FormController, FormEvent, FormView};
pub use crate::preview::{CardPreview, PreviewConfig};
pub use crate::render::{RecordingRenderer, Renderer, TextRenderer};
pub use crate::store::{FieldStore, FieldStoreBuilder};
pub use crate::validation::{ErrorMap, is_valid, validate};
pub use crate::{Error, ErrorKey, FieldError, FieldName, Result, SessionState};

// Re-export small utilities for convenience
pub use crate::utils::{group_card_number, is_blank, is_digits, strip_whitespace};
