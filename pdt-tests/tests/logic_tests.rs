//! Integration Tests für die Pure Functions
//!
//! Laufen auf dem Host (x86_64), ohne Hardware.

use pdt_core::config::{AXIS_SENTINEL, DURATION_MAX, DURATION_MIN};
use pdt_core::{
    BeepPattern, Phase, SensorReading, adjust_duration, clamp_axis, fluence, irradiance,
    led_power, scale_axis,
};
use rgb::RGB8;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// ============================================================================
// Tests: Potentiometer
// ============================================================================

#[test]
fn test_scale_axis_inverts_reading() {
    assert_eq!(scale_axis(0), 255);
    assert_eq!(scale_axis(4095), 0);
    assert_eq!(scale_axis(2048), 127);
}

#[test]
fn test_out_of_range_readings_are_clamped() {
    assert_eq!(clamp_axis(-17), 0);
    assert_eq!(clamp_axis(5000), 4095);
    assert_eq!(scale_axis(-17), 255);
    assert_eq!(scale_axis(5000), 0);
}

#[test]
fn test_sentinel_reading_is_clamped() {
    assert_eq!(clamp_axis(AXIS_SENTINEL), 4095);
    assert_eq!(scale_axis(AXIS_SENTINEL), 0);
}

// ============================================================================
// Tests: Leistung, Bestrahlungsstärke, Fluenz
// ============================================================================

#[test]
fn test_led_power_full_and_off() {
    let full = RGB8 {
        r: 255,
        g: 255,
        b: 255,
    };
    assert!(approx(led_power(full), 9.0));
    assert!(approx(led_power(RGB8::default()), 0.0));
}

#[test]
fn test_led_power_single_channel() {
    let red = RGB8 { r: 255, g: 0, b: 0 };
    assert!(approx(led_power(red), 3.0));
}

#[test]
fn test_irradiance_of_full_power() {
    assert!(approx(irradiance(9.0), 13.636));
    assert!(approx(irradiance(0.0), 0.0));
}

#[test]
fn test_fluence_ten_minutes() {
    assert!(approx(fluence(13.636_364, 10), 8.1818));
}

#[test]
fn test_fluence_without_light_is_zero() {
    assert!(approx(fluence(0.0, 1440), 0.0));
}

// ============================================================================
// Tests: Dauer
// ============================================================================

#[test]
fn test_adjust_duration_steps() {
    assert_eq!(adjust_duration(61, 1), 62);
    assert_eq!(adjust_duration(61, -9), 52);
}

#[test]
fn test_adjust_duration_clamps_at_bounds() {
    assert_eq!(adjust_duration(DURATION_MIN, -1), DURATION_MIN);
    assert_eq!(adjust_duration(5, -9), DURATION_MIN);
    assert_eq!(adjust_duration(DURATION_MAX, 9), DURATION_MAX);
    assert_eq!(adjust_duration(0, 0), DURATION_MIN);
}

// ============================================================================
// Tests: Messwerte
// ============================================================================

#[test]
fn test_reading_below_threshold_keeps_final() {
    let mut reading = SensorReading::default();
    reading.update(Some(800), 13.6);
    reading.update(Some(20), 0.0);

    assert_eq!(reading.measured_lux, 20);
    assert!(approx(reading.instant_irradiance, 0.0));
    assert!(approx(reading.final_irradiance, 13.6));
}

#[test]
fn test_reading_error_keeps_lux() {
    let mut reading = SensorReading::default();
    reading.update(Some(800), 0.0);
    reading.update(None, 4.5);

    assert_eq!(reading.measured_lux, 800);
    assert!(approx(reading.instant_irradiance, 4.5));
    assert!(approx(reading.final_irradiance, 4.5));
}

#[test]
fn test_threshold_is_exclusive() {
    let mut reading = SensorReading::default();
    reading.update(Some(1), 0.05);
    assert!(approx(reading.final_irradiance, 0.0));
}

// ============================================================================
// Tests: Phasen und Piep-Muster
// ============================================================================

#[test]
fn test_phase_order() {
    assert_eq!(Phase::default(), Phase::Configuring);
    assert_eq!(Phase::Configuring.next(), Some(Phase::Treating));
    assert_eq!(Phase::Treating.next(), Some(Phase::Finished));
    assert_eq!(Phase::Finished.next(), None);
}

#[test]
fn test_beep_pattern_durations() {
    assert_eq!(BeepPattern::BOOT.total_ms(), 1000);
    assert_eq!(BeepPattern::START.total_ms(), 2000);
    assert_eq!(BeepPattern::FINISHED.total_ms(), 8000);
    assert_eq!(BeepPattern::SENSOR_FAULT.total_ms(), 3600);
}
