//! HD44780 character LCD driver
//!
//! Driver for 16x2 HD44780 displays behind a PCF8574 I2C backpack,
//! running the controller in 4-bit mode.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::backend::{DisplayBackend, DisplayError};
use crate::screen::{SCREEN_COLS, SCREEN_ROWS};

/// Default PCF8574 backpack address (0x27, or 0x3F on PCF8574A boards)
pub const DEFAULT_ADDR: u8 = 0x27;

/// DDRAM start address of each row
const ROW_OFFSETS: [u8; SCREEN_ROWS] = [0x00, 0x40];

/// PCF8574 pin mapping on the common backpack
mod pin {
    pub const RS: u8 = 1 << 0;
    #[allow(dead_code)]
    pub const RW: u8 = 1 << 1;
    pub const EN: u8 = 1 << 2;
    pub const BACKLIGHT: u8 = 1 << 3;
}

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_ON: u8 = 0x0C;
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// HD44780 over PCF8574 driver
pub struct Hd44780<I2C, D> {
    i2c: I2C,
    delay: D,
    addr: u8,
    backlight: bool,
    initialized: bool,
}

impl<I2C, D> Hd44780<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver at the default backpack address
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDR)
    }

    /// Create a driver at a specific backpack address
    pub fn with_address(i2c: I2C, delay: D, addr: u8) -> Self {
        Self {
            i2c,
            delay,
            addr,
            backlight: true,
            initialized: false,
        }
    }

    /// Initialize the display
    ///
    /// Runs the reset-by-instruction sequence that forces the controller
    /// into 4-bit mode regardless of its power-on state.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(50);

        self.write_nibble(0x03, false)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02, false)?;

        self.command(cmd::FUNCTION_4BIT_2LINE)?;
        self.command(cmd::DISPLAY_ON)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        self.command(cmd::ENTRY_MODE_INCREMENT)?;

        self.initialized = true;
        Ok(())
    }

    /// Turn the backlight on/off
    pub fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        self.expander_write(0)
    }

    /// Release the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write_byte(value, false)
    }

    fn write_byte(&mut self, value: u8, data: bool) -> Result<(), DisplayError> {
        self.write_nibble(value >> 4, data)?;
        self.write_nibble(value & 0x0F, data)?;
        // Longest regular instruction takes 37us
        self.delay.delay_us(50);
        Ok(())
    }

    /// Clock one nibble into the controller with an EN pulse
    fn write_nibble(&mut self, nibble: u8, data: bool) -> Result<(), DisplayError> {
        let mut bits = (nibble & 0x0F) << 4;
        if data {
            bits |= pin::RS;
        }
        self.expander_write(bits | pin::EN)?;
        self.delay.delay_us(1);
        self.expander_write(bits)
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), DisplayError> {
        let bits = if self.backlight {
            bits | pin::BACKLIGHT
        } else {
            bits
        };
        self.i2c
            .write(self.addr, &[bits])
            .map_err(|_| DisplayError::Communication)
    }
}

impl<I2C, D> DisplayBackend for Hd44780<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        let Some(&offset) = ROW_OFFSETS.get(row as usize) else {
            return Err(DisplayError::InvalidCoordinates);
        };
        if col as usize >= SCREEN_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        self.command(cmd::SET_DDRAM_ADDR | (offset + col))?;

        let room = SCREEN_COLS - col as usize;
        for ch in text.chars().take(room) {
            // Character ROM only matches ASCII in the printable range
            let byte = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                b'?'
            };
            self.write_byte(byte, true)?;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        // Writes go straight to DDRAM
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }

    fn is_ready(&self) -> bool {
        self.initialized
    }
}
