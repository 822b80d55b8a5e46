//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::config::{
    AXIS_MAX, AXIS_SENTINEL, DURATION_MAX, DURATION_MIN, FULL_SCALE_CHANNEL_SUM,
    IRRADIATED_AREA_CM2, LED_MAX_POWER_W,
};

/// Begrenzt einen rohen ADC-Wert auf 0..=4095
///
/// Werte `<= 0` oder `> 10000` gelten als Glitch und werden 0,
/// alles ab 4095 wird 4095.
pub fn clamp_axis(raw: i32) -> i32 {
    if raw <= 0 || raw > AXIS_SENTINEL {
        0
    } else if raw >= AXIS_MAX {
        AXIS_MAX
    } else {
        raw
    }
}

/// Skaliert einen Achsenwert invertiert auf 0..=255
///
/// # Beispiele
///
/// ```
/// # use pdt_core::scale_axis;
/// assert_eq!(scale_axis(0), 255);
/// assert_eq!(scale_axis(4095), 0);
/// ```
pub fn scale_axis(raw: i32) -> u8 {
    let value = clamp_axis(raw);
    ((AXIS_MAX - value) * 255 / AXIS_MAX).clamp(0, 255) as u8
}

/// Elektrische LED-Leistung in Watt: `(r+g+b) * 9 / 765`
pub fn led_power(color: RGB8) -> f32 {
    let sum = color.r as u32 + color.g as u32 + color.b as u32;
    sum as f32 * LED_MAX_POWER_W / FULL_SCALE_CHANNEL_SUM
}

/// Bestrahlungsstärke in mW/cm² aus der LED-Leistung
pub fn irradiance(power_w: f32) -> f32 {
    power_w * 1000.0 / IRRADIATED_AREA_CM2
}

/// Fluenz (Gesamtdosis) in J/cm²
pub fn fluence(final_irradiance: f32, total_minutes: u16) -> f32 {
    final_irradiance * total_minutes as f32 * 60.0 / 1000.0
}

/// Verschiebt die Behandlungsdauer um `delta` Minuten, begrenzt auf 1..=1440
pub fn adjust_duration(minutes: u16, delta: i32) -> u16 {
    (minutes as i32 + delta).clamp(DURATION_MIN as i32, DURATION_MAX as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis_sentinels() {
        assert_eq!(clamp_axis(-5), 0);
        assert_eq!(clamp_axis(0), 0);
        assert_eq!(clamp_axis(10_001), 0);
        assert_eq!(clamp_axis(10_000), 4095);
        assert_eq!(clamp_axis(5000), 4095);
        assert_eq!(clamp_axis(2048), 2048);
    }

    #[test]
    fn test_scale_axis_is_inverted() {
        assert_eq!(scale_axis(0), 255);
        assert_eq!(scale_axis(4095), 0);
        assert_eq!(scale_axis(2048), 127);
        // Glitch-Wert wird wie 0 behandelt
        assert_eq!(scale_axis(20_000), 255);
    }

    #[test]
    fn test_led_power_full_and_off() {
        let full = RGB8 {
            r: 255,
            g: 255,
            b: 255,
        };
        assert!((led_power(full) - 9.0).abs() < 1e-5);
        assert_eq!(led_power(RGB8::default()), 0.0);
    }

    #[test]
    fn test_irradiance_at_full_power() {
        assert!((irradiance(9.0) - 13.636_364).abs() < 1e-3);
    }

    #[test]
    fn test_fluence_ten_minutes() {
        let dose = fluence(irradiance(9.0), 10);
        assert!((dose - 8.181_818).abs() < 1e-3);
    }

    #[test]
    fn test_adjust_duration_bounds() {
        assert_eq!(adjust_duration(1, -1), 1);
        assert_eq!(adjust_duration(5, -9), 1);
        assert_eq!(adjust_duration(1440, 1), 1440);
        assert_eq!(adjust_duration(1435, 9), 1440);
        assert_eq!(adjust_duration(60, 10), 70);
    }
}
