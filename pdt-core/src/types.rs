//! Core Types für die PDT-Lichtbox
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

use crate::config::DOSE_THRESHOLD_MW_CM2;

/// Farbeinstellung aus den Potentiometern (0..255 je Kanal)
pub type ColorSetting = RGB8;

/// Ausgeschaltete LED
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Sitzungsphase
///
/// Nur `Configuring → Treating → Finished`, kein Rückweg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Configuring,
    Treating,
    Finished,
}

impl Phase {
    /// Einzige erlaubte Folgephase, `None` für `Finished`
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::Configuring => Some(Phase::Treating),
            Phase::Treating => Some(Phase::Finished),
            Phase::Finished => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Configuring => "Configuring",
            Phase::Treating => "Treating",
            Phase::Finished => "Finished",
        }
    }
}

/// Behandlungsdauer, nur während `Configuring` änderbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreatmentConfig {
    pub duration_minutes: u16,
}

/// Restzeit-Buchhaltung des Timer-Tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerState {
    /// Beim Start eingefrorene Gesamtdauer
    pub total_minutes: u16,
    pub remaining_minutes: u16,
}

/// Messwerte des Sensor-Tasks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    /// Rohwert in Lux, nur zur Anzeige
    pub measured_lux: u32,
    /// mW/cm², bei jedem Sample neu berechnet
    pub instant_irradiance: f32,
    /// mW/cm², letzter Wert oberhalb der Rauschschwelle
    pub final_irradiance: f32,
}

impl SensorReading {
    /// Übernimmt ein neues Sample
    ///
    /// `lux = None` (Sensorfehler) behält den letzten Lux-Wert.
    /// `final_irradiance` folgt nur Werten über [`DOSE_THRESHOLD_MW_CM2`].
    pub fn update(&mut self, lux: Option<u32>, instant_irradiance: f32) {
        if let Some(lux) = lux {
            self.measured_lux = lux;
        }
        self.instant_irradiance = instant_irradiance;
        if instant_irradiance > DOSE_THRESHOLD_MW_CM2 {
            self.final_irradiance = instant_irradiance;
        }
    }
}

/// Entprell-Strategie für die Start-Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebouncePolicy {
    /// Start erst nach `polls` aufeinanderfolgenden positiven Abfragen
    Sustained { polls: u8 },
    /// Nach erster Berührung `after_ms` warten und einmal nachprüfen
    Recheck { after_ms: u32 },
}

/// Potentiometer-Kanal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    Red,
    Green,
    Blue,
}

/// Touch-Fläche
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchPad {
    Start,
    Less,
    More,
}

/// Piep-Muster für den Buzzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepPattern {
    pub count: u8,
    pub on_ms: u32,
    pub off_ms: u32,
}

impl BeepPattern {
    /// Einschalt-Piep
    pub const BOOT: Self = Self {
        count: 1,
        on_ms: 1000,
        off_ms: 0,
    };
    /// Start-Geste akzeptiert
    pub const START: Self = Self {
        count: 1,
        on_ms: 1500,
        off_ms: 500,
    };
    /// Behandlung abgeschlossen
    pub const FINISHED: Self = Self {
        count: 4,
        on_ms: 1500,
        off_ms: 500,
    };
    /// Lichtsensor antwortet nicht
    pub const SENSOR_FAULT: Self = Self {
        count: 6,
        on_ms: 300,
        off_ms: 300,
    };

    /// Gesamtdauer des Musters in Millisekunden
    pub const fn total_ms(&self) -> u32 {
        self.count as u32 * (self.on_ms + self.off_ms)
    }
}
