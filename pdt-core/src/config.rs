//! Behandlungs- und Timing-Konstanten
//!
//! Alle Werte, die berechnete Ausgaben (Leistung, Bestrahlungsstärke,
//! Fluenz) oder das Task-Timing bestimmen. Pins und I2C-Adressen
//! liegen in `pdt-firmware::config`.

use crate::types::DebouncePolicy;

// ============================================================================
// Physik / Dosis
// ============================================================================

/// Bestrahlte Fläche in cm²
pub const IRRADIATED_AREA_CM2: f32 = 660.0;

/// Maximale elektrische LED-Leistung in Watt (alle Kanäle auf 255)
pub const LED_MAX_POWER_W: f32 = 9.0;

/// Summe aller drei Kanäle bei Vollaussteuerung (3 * 255)
pub const FULL_SCALE_CHANNEL_SUM: f32 = 765.0;

/// Rauschschwelle in mW/cm²: darunter wird `final_irradiance` nicht aktualisiert
pub const DOSE_THRESHOLD_MW_CM2: f32 = 0.05;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 30;

// ============================================================================
// Eingänge
// ============================================================================

/// Obergrenze des ADC-Wertebereichs (12 Bit)
pub const AXIS_MAX: i32 = 4095;

/// Werte oberhalb gelten als Glitch und werden auf 0 gesetzt
pub const AXIS_SENTINEL: i32 = 10_000;

/// Kleinste einstellbare Behandlungsdauer in Minuten
pub const DURATION_MIN: u16 = 1;

/// Größte einstellbare Behandlungsdauer in Minuten (24 h)
pub const DURATION_MAX: u16 = 1440;

/// Feinschritt pro Geste
pub const DURATION_FINE_STEP: u16 = 1;

/// Zusätzlicher Grobschritt bei bestätigter zweiter Geste
pub const DURATION_COARSE_STEP: u16 = 9;

/// Touch-Schwelle für +/- (kleiner = sicherer berührt)
pub const TOUCH_ADJUST_THRESHOLD: u16 = 20;

/// Touch-Schwelle für Start
pub const TOUCH_START_THRESHOLD: u16 = 10;

/// Standard-Entprellung der Start-Geste
pub const DEFAULT_DEBOUNCE: DebouncePolicy = DebouncePolicy::Sustained { polls: 3 };

// ============================================================================
// Startwerte nach Power-On
// ============================================================================

pub const DEFAULT_DURATION_MIN: u16 = 61;
pub const DEFAULT_TOTAL_MIN: u16 = 60;
pub const DEFAULT_REMAINING_MIN: u16 = 61;

// ============================================================================
// Task-Kadenzen (Millisekunden)
// ============================================================================

pub const SETTINGS_POLL_MS: u32 = 300;
pub const SETTINGS_TAIL_MS: u32 = 5;
pub const ADJUST_SETTLE_MS: u32 = 100;
pub const ADJUST_CONFIRM_MS: u32 = 400;

pub const SENSOR_PERIOD_MS: u32 = 4_000;

pub const TIMER_MIRROR_MS: u32 = 500;
pub const TIMER_STEP_MS: u32 = 60_000;

pub const DISPLAY_PERIOD_MS: u32 = 300;
pub const DISPLAY_TREATING_HOLD_MS: u32 = 5_000;
pub const DISPLAY_FINISHED_PAUSE_MS: u32 = 3_000;

pub const LED_STAGE_MS: u32 = 200;
pub const LED_PIXEL_STAGGER_MS: u32 = 20;
