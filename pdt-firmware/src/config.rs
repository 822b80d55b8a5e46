// Projekt-Konfiguration: Hardware-Zuordnungen der PDT-Lichtbox
//
// Physik und Zeitraster stehen in pdt_core::config, hier nur das,
// was von der Platine abhängt.
#![allow(dead_code)]

use pdt_core::DebouncePolicy;

// ============================================================================
// LED Strip
// ============================================================================

/// GPIO-Pin für die Datenleitung des Strips (WS2812)
pub const LED_GPIO_PIN: u8 = 5;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = pdt_core::config::LED_COUNT;

/// RMT-Buffer: 24 Pulse pro LED plus End-Marker
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

// ============================================================================
// I2C Bus (LCD + Lichtsensor)
// ============================================================================

/// I2C Datenleitung
pub const I2C_SDA_PIN: u8 = 6;

/// I2C Taktleitung
pub const I2C_SCL_PIN: u8 = 7;

/// Bus-Takt in kHz (PCF8574 kann nur Standard Mode)
pub const I2C_FREQUENCY_KHZ: u32 = 100;

/// PCF8574-Backpack des 16x2 LCD
pub const LCD_ADDRESS: u8 = 0x27;

/// TSL2561, ADDR-Pin offen (float)
pub const LUX_SENSOR_ADDRESS: u8 = 0x39;

// ============================================================================
// Eingänge
// ============================================================================

/// Potentiometer an ADC1 (Rot, Grün, Blau)
pub const POT_RED_PIN: u8 = 0;
pub const POT_GREEN_PIN: u8 = 1;
pub const POT_BLUE_PIN: u8 = 2;

/// Taster mit Pull-up (gedrückt = Low)
pub const BUTTON_START_PIN: u8 = 18;
pub const BUTTON_LESS_PIN: u8 = 19;
pub const BUTTON_MORE_PIN: u8 = 20;

/// Näherungswert eines gedrückten Tasters
pub const BUTTON_PRESSED_VALUE: u16 = 0;

/// Näherungswert eines losgelassenen Tasters
pub const BUTTON_RELEASED_VALUE: u16 = 4095;

/// Entprellung der Start-Geste
pub const START_DEBOUNCE: DebouncePolicy = pdt_core::config::DEFAULT_DEBOUNCE;

// ============================================================================
// Buzzer
// ============================================================================

/// GPIO-Pin des aktiven Buzzers
pub const BUZZER_PIN: u8 = 23;

/// Warteschlange für Piep-Muster
pub const ALERT_QUEUE_DEPTH: usize = 4;
