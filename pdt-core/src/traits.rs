//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** `pdt-firmware::hal` (ESP32-C6 RMT, I2C, ADC, GPIO)
//! - **Testing:** Mocks in `pdt-tests`

use rgb::RGB8;

use crate::types::{Axis, BeepPattern, TouchPad};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für Display-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    Bus,
}

/// Fehler-Typ für den Lichtsensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor übersteuert, kein verlässlicher Wert
    Saturated,
    /// I2C-Transfer fehlgeschlagen
    Bus,
}

/// Adressierbarer LED-Strip (WS2812/Neopixel)
pub trait LedStrip: Send {
    /// Anzahl der Pixel im Strip
    fn pixel_count(&self) -> usize;

    /// Setzt die Farbe eines Pixels im Puffer
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError>;

    /// Überträgt den Puffer an den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn show(&mut self) -> Result<(), LedError>;
}

/// Textdisplay, zwei Zeilen à sechzehn Spalten
pub trait TextDisplay {
    fn clear(&mut self) -> Result<(), DisplayError>;

    fn render(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;
}

/// Lichtsensor mit Lux-Ausgabe
pub trait LightSensor {
    fn sample_lux(&mut self) -> Result<u32, SensorError>;
}

/// Potentiometer und Touch-Flächen
pub trait InputPanel {
    /// Rohwert des Potentiometers, erwartet 0..4095 (Ausreißer möglich)
    fn read_axis(&mut self, axis: Axis) -> i32;

    /// Näherungswert der Touch-Fläche, kleiner = sicherer berührt
    fn read_touch(&mut self, pad: TouchPad) -> u16;
}

/// Akustischer Alarm (fire-and-forget)
pub trait Alert {
    fn sound(&mut self, pattern: BeepPattern);
}
