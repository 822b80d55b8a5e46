// 16x2 Text-LCD (HD44780) hinter einem PCF8574 I2C-Backpack
//
// Der Controller läuft im 4-Bit-Modus. Jedes Byte geht als zwei Nibbles
// raus, jedes Nibble mit einem Enable-Puls.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use pdt_core::DisplayError;

// Belegung der PCF8574-Ausgänge
const PIN_RS: u8 = 0x01;
const PIN_EN: u8 = 0x04;
const PIN_BACKLIGHT: u8 = 0x08;

// HD44780 Kommandos
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_LEFT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_4BIT_2LINES: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM-Adresse des ersten Zeichens je Zeile
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

pub struct Lcd1602 {
    address: u8,
}

impl Lcd1602 {
    pub const fn new(address: u8) -> Self {
        Self { address }
    }

    fn write_nibble<I: I2c>(&self, i2c: &mut I, nibble: u8, mode: u8) -> Result<(), DisplayError> {
        let data = (nibble & 0xF0) | mode | PIN_BACKLIGHT;
        // EN high, dann low: der Controller übernimmt an der fallenden Flanke
        i2c.write(self.address, &[data | PIN_EN, data])
            .map_err(|_| DisplayError::Bus)
    }

    fn send<I: I2c>(&self, i2c: &mut I, byte: u8, mode: u8) -> Result<(), DisplayError> {
        self.write_nibble(i2c, byte, mode)?;
        self.write_nibble(i2c, byte << 4, mode)
    }

    fn command<I: I2c>(&self, i2c: &mut I, cmd: u8) -> Result<(), DisplayError> {
        self.send(i2c, cmd, 0)
    }

    /// Init-Sequenz laut Datenblatt (Umschalten auf 4 Bit)
    pub fn init<I: I2c, D: DelayNs>(&self, i2c: &mut I, delay: &mut D) -> Result<(), DisplayError> {
        delay.delay_ms(50);
        self.write_nibble(i2c, 0x30, 0)?;
        delay.delay_us(4500);
        self.write_nibble(i2c, 0x30, 0)?;
        delay.delay_us(4500);
        self.write_nibble(i2c, 0x30, 0)?;
        delay.delay_us(150);
        self.write_nibble(i2c, 0x20, 0)?;

        self.command(i2c, CMD_4BIT_2LINES)?;
        self.command(i2c, CMD_DISPLAY_ON)?;
        self.clear(i2c, delay)?;
        self.command(i2c, CMD_ENTRY_LEFT)
    }

    pub fn clear<I: I2c, D: DelayNs>(&self, i2c: &mut I, delay: &mut D) -> Result<(), DisplayError> {
        self.command(i2c, CMD_CLEAR)?;
        // Clear braucht ~1,5 ms
        delay.delay_ms(2);
        Ok(())
    }

    pub fn set_cursor<I: I2c>(&self, i2c: &mut I, row: u8, col: u8) -> Result<(), DisplayError> {
        let offset = ROW_OFFSETS[(row as usize).min(ROW_OFFSETS.len() - 1)];
        self.command(i2c, CMD_SET_DDRAM | (offset + col))
    }

    /// Schreibt ASCII-Text ab der aktuellen Cursor-Position
    pub fn write_str<I: I2c>(&self, i2c: &mut I, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.send(i2c, byte, PIN_RS)?;
        }
        Ok(())
    }
}
