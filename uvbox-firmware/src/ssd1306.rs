//! SSD1306 OLED display driver
//!
//! Driver for 128x32 SSD1306-based OLED displays via blocking I2C.
//! The frame buffer is an embedded-graphics draw target; text uses the
//! 5x8 mono font on a 6 px grid (21 chars x 4 rows).

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;

use uvbox_display::{DisplayBackend, DisplayError, SCREEN_COLS, SCREEN_ROWS};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 32;
const PAGES: usize = HEIGHT / 8;

/// Character cell size (px)
const CELL_WIDTH: i32 = 6;
const CELL_HEIGHT: i32 = 8;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
    /// Set once the init sequence has been sent
    ready: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [[0; WIDTH]; PAGES],
            ready: false,
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x1F, // 32 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEMORY_MODE,
            0x00,                  // Horizontal addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x02, // Sequential COM config for 32 rows
            cmd::SET_CONTRAST,
            0x8F,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::RESUME_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        self.ready = true;
        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(SSD1306_ADDR, &[CONTROL_COMMAND, cmd])
            .map_err(|_| DisplayError::Communication)
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Off-screen pixels are clipped
            let Ok((x, y)) = <(u32, u32)>::try_from(point) else {
                continue;
            };
            let (x, y) = (x as usize, y as usize);
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }

            let bit = 1 << (y % 8);
            let byte = &mut self.buffer[y / 8][x];
            match color {
                BinaryColor::On => *byte |= bit,
                BinaryColor::Off => *byte &= !bit,
            }
        }
        Ok(())
    }
}

impl<I2C: I2c> DisplayBackend for Ssd1306<I2C> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if usize::from(row) >= SCREEN_ROWS || usize::from(col) >= SCREEN_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        let origin = Point::new(i32::from(col) * CELL_WIDTH, i32::from(row) * CELL_HEIGHT);
        match Text::with_baseline(text, origin, style, Baseline::Top).draw(self) {
            Ok(_) => Ok(()),
            Err(never) => match never {},
        }
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotInitialized);
        }

        let window = [
            cmd::SET_COLUMN_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ];
        for c in window {
            self.command(c)?;
        }

        for page in 0..PAGES {
            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c
                .write(SSD1306_ADDR, &data)
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }
}
