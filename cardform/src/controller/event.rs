// cardform/src/controller/event.rs
//! UI events and line-command parsing.

use crate::types::FieldName;
use crate::{Error, Result};

/// UI events a host binds to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Text input changed.
    Change {
        /// Input that changed.
        field: FieldName,
        /// New raw text.
        value: String,
    },
    /// Form submitted ("Confirm").
    Submit,
    /// Confirmation dismissed ("Continue").
    Continue,
}

impl FormEvent {
    /// Build a `Change` event.
    pub fn change(field: FieldName, value: impl Into<String>) -> Self {
        FormEvent::Change {
            field,
            value: value.into(),
        }
    }

    /// Parse a line command: `set <field> <value...>`, `submit`, `continue`.
    ///
    /// The value is everything after the field name and one separating
    /// space, so leading/trailing spaces inside it are kept. `set <field>`
    /// with nothing after it clears the field.
    pub fn parse_command(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

        match verb {
            "submit" if rest.trim().is_empty() => Ok(FormEvent::Submit),
            "continue" if rest.trim().is_empty() => Ok(FormEvent::Continue),
            "set" => {
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                let field: FieldName = name.parse()?;
                Ok(FormEvent::change(field, value))
            }
            _ => Err(Error::UnknownCommand(line.to_string())),
        }
    }
}
