//! PDT Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den gemeinsamen Sitzungszustand, Pure Functions
//! und die Logik der fünf Tasks der Photodynamik-Lichtbox.

#![no_std]

#[macro_use]
mod fmt;

pub mod bus;
pub mod config;
pub mod logic;
pub mod screen;
pub mod state;
pub mod tasks;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use bus::BusLock;
pub use logic::{adjust_duration, clamp_axis, fluence, irradiance, led_power, scale_axis};
pub use state::{PhaseError, PhaseReceiver, Session, SharedState};
pub use traits::{
    Alert, DisplayError, InputPanel, LedError, LedStrip, LightSensor, SensorError, TextDisplay,
};
pub use types::{
    Axis, BeepPattern, ColorSetting, DebouncePolicy, OFF, Phase, SensorReading, TimerState,
    TouchPad, TreatmentConfig,
};
