//! Plain-text renderer: a line-oriented card mock plus either the form or
//! the confirmation view. Used by the demo and by tests that check output.

use std::io::Write;

use crate::constants::{BUTTON_CONFIRM, BUTTON_CONTINUE, CONFIRMATION_BODY, CONFIRMATION_TITLE};
use crate::controller::FormView;
use crate::render::traits::Renderer;
use crate::types::{ErrorKey, SessionState};
use crate::Result;

/// Writes each view as plain text lines.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Render into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn card(&mut self, view: &FormView<'_>) -> Result<()> {
        let p = &view.preview;
        writeln!(self.out, "[front] {}", p.number)?;
        writeln!(self.out, "[front] {}  {}", p.holder, p.expiry())?;
        writeln!(self.out, "[back]  {}", p.cvv)?;
        Ok(())
    }

    fn form(&mut self, view: &FormView<'_>) -> Result<()> {
        for key in ErrorKey::ALL {
            writeln!(self.out, "{}", key.label())?;
            let inputs: Vec<String> = key
                .fields()
                .iter()
                .map(|&f| {
                    let raw = view.fields.get(f);
                    let shown = if raw.is_empty() {
                        format!("({})", f.hint())
                    } else {
                        format!("\"{}\"", raw)
                    };
                    let mark = if view.has_error(f) { "*" } else { " " };
                    format!("{}{}", mark, shown)
                })
                .collect();
            writeln!(self.out, "  {}", inputs.join(" "))?;
            if let Some(msg) = view.message(key) {
                writeln!(self.out, "  ! {}", msg)?;
            }
        }
        writeln!(self.out, "[{}]", BUTTON_CONFIRM)?;
        Ok(())
    }

    fn confirmation(&mut self) -> Result<()> {
        writeln!(self.out, "{}", CONFIRMATION_TITLE)?;
        writeln!(self.out, "{}", CONFIRMATION_BODY)?;
        writeln!(self.out, "[{}]", BUTTON_CONTINUE)?;
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &FormView<'_>) -> Result<()> {
        self.card(view)?;
        writeln!(self.out)?;
        match view.state {
            SessionState::Editing => self.form(view)?,
            SessionState::Submitted => self.confirmation()?,
        }
        self.out.flush()?;
        Ok(())
    }
}
