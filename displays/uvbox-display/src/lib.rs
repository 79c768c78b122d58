//! Status display for UV Box
//!
//! This crate provides:
//! - `DisplayBackend` trait for character-addressed displays
//! - `Screen` text buffer
//! - The status screen renderer turning a `StatusView` into text
//! - `TextDisplay`, the `StatusDisplay` implementation used by the firmware
//!
//! # Architecture
//!
//! The controller hands a `StatusView` to `TextDisplay::render`. The view
//! is laid out into a `Screen`, and the backend is only written when the
//! resulting text differs from what is already shown. The board crate
//! supplies the backend (an SSD1306 OLED on the reference board).

#![no_std]

pub mod backend;
pub mod display;
pub mod renderer;
pub mod screen;

pub use backend::{DisplayBackend, DisplayError};
pub use display::TextDisplay;
pub use renderer::render_view;
pub use screen::{Screen, LINE_LEN, SCREEN_COLS, SCREEN_ROWS};
