// Gemeinsamer I2C-Bus: besitzt LCD und Lichtsensor
//
// Nur über den BusLock erreichbar, daher können Rendern und Sampeln
// nie gleichzeitig auf dem Bus liegen.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use pdt_core::{DisplayError, LightSensor, SensorError, TextDisplay};

use super::lcd::Lcd1602;
use super::lux::Tsl2561;

pub struct I2cBus<I, D> {
    i2c: I,
    delay: D,
    lcd: Lcd1602,
    sensor: Tsl2561,
}

impl<I: I2c, D: DelayNs> I2cBus<I, D> {
    pub fn new(i2c: I, delay: D, lcd_address: u8, sensor_address: u8) -> Self {
        Self {
            i2c,
            delay,
            lcd: Lcd1602::new(lcd_address),
            sensor: Tsl2561::new(sensor_address),
        }
    }

    pub fn init_display(&mut self) -> Result<(), DisplayError> {
        self.lcd.init(&mut self.i2c, &mut self.delay)
    }

    /// Lichtsensor einschalten, liefert das ID-Register
    pub fn init_sensor(&mut self) -> Result<u8, SensorError> {
        self.sensor.power_on(&mut self.i2c, &mut self.delay)
    }
}

impl<I: I2c, D: DelayNs> TextDisplay for I2cBus<I, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.lcd.clear(&mut self.i2c, &mut self.delay)
    }

    fn render(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        self.lcd.set_cursor(&mut self.i2c, row, col)?;
        self.lcd.write_str(&mut self.i2c, text)
    }
}

impl<I: I2c, D: DelayNs> LightSensor for I2cBus<I, D> {
    fn sample_lux(&mut self) -> Result<u32, SensorError> {
        self.sensor.read_lux(&mut self.i2c)
    }
}
