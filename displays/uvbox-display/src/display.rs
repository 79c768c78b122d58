//! Text status display

use uvbox_core::controller::StatusView;
use uvbox_core::traits::StatusDisplay;

use crate::backend::{DisplayBackend, DisplayError};
use crate::renderer::render_view;
use crate::screen::Screen;

/// `StatusDisplay` drawing the status screen on a `DisplayBackend`
///
/// Keeps the last screen written to the backend and skips the write
/// when a render produces the same text.
pub struct TextDisplay<B> {
    backend: B,
    /// Screen currently on the panel, `None` until the first flush succeeds
    shown: Option<Screen>,
}

impl<B: DisplayBackend> TextDisplay<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            shown: None,
        }
    }

    /// Access the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn draw(&mut self, screen: &Screen) -> Result<(), DisplayError> {
        self.backend.clear()?;
        for (row, text) in screen.lines().enumerate() {
            if !text.is_empty() {
                self.backend.draw_text(row as u8, 0, text)?;
            }
        }
        self.backend.flush()
    }
}

impl<B: DisplayBackend> StatusDisplay for TextDisplay<B> {
    type Error = DisplayError;

    fn render(&mut self, view: &StatusView) -> Result<(), DisplayError> {
        let mut screen = Screen::new();
        render_view(view, &mut screen);

        if self.shown.as_ref() == Some(&screen) {
            return Ok(());
        }

        // A failed write leaves the panel state unknown
        self.shown = None;
        self.draw(&screen)?;
        self.shown = Some(screen);
        Ok(())
    }
}
