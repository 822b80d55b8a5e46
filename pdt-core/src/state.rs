//! Gemeinsamer Sitzungszustand und Phasen-Automat
//!
//! Alle fünf Tasks lesen und schreiben über [`SharedState`]. Jeder Zugriff
//! läuft in genau einem Critical Section, dadurch ist der Snapshot beim
//! Start der Behandlung (Farbe, Dauer, Phase) nie halb sichtbar.
//!
//! Schreibrechte pro Feldgruppe:
//! - Farbe/Dauer: nur Settings-Task, nur in `Configuring`
//! - Restzeit: nur Timer-Task
//! - Messwerte: nur Sensor-Task
//! - LiveColor: LED-Task (Vorab-Kopie) und der Phasenwechsel selbst

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::watch::{Receiver, Watch};
use rgb::RGB8;

use crate::config::{DEFAULT_DURATION_MIN, DEFAULT_REMAINING_MIN, DEFAULT_TOTAL_MIN};
use crate::logic::{adjust_duration, fluence, irradiance, led_power};
use crate::traits::Alert;
use crate::types::{
    BeepPattern, ColorSetting, OFF, Phase, SensorReading, TimerState, TreatmentConfig,
};

/// Maximale Anzahl gleichzeitiger Phasen-Empfänger
pub const PHASE_RECEIVERS: usize = 4;

/// Empfänger für Phasenwechsel
pub type PhaseReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, Phase, PHASE_RECEIVERS>;

/// Fehler des Phasen-Automaten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseError {
    /// Übergang passt nicht zur aktuellen Phase
    InvalidTransition { from: Phase, to: Phase },
    /// Countdown außerhalb von `Treating`
    NotTreating { phase: Phase },
    /// Einstellung außerhalb von `Configuring` geschrieben
    SettingsFrozen { phase: Phase },
}

/// Kompletter Sitzungszustand (flüchtig, nach Reset wieder `Configuring`)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    pub phase: Phase,
    pub color: ColorSetting,
    pub config: TreatmentConfig,
    pub live_color: RGB8,
    pub timer: TimerState,
    pub reading: SensorReading,
}

impl Session {
    pub const fn new() -> Self {
        Self {
            phase: Phase::Configuring,
            color: OFF,
            config: TreatmentConfig {
                duration_minutes: DEFAULT_DURATION_MIN,
            },
            live_color: OFF,
            timer: TimerState {
                total_minutes: DEFAULT_TOTAL_MIN,
                remaining_minutes: DEFAULT_REMAINING_MIN,
            },
            reading: SensorReading {
                measured_lux: 0,
                instant_irradiance: 0.0,
                final_irradiance: 0.0,
            },
        }
    }

    /// Übergangsfunktion des Automaten
    ///
    /// Beim Wechsel nach `Treating` werden Farbe und Dauer eingefroren.
    pub fn advance(&mut self, to: Phase) -> Result<Phase, PhaseError> {
        if self.phase.next() != Some(to) {
            return Err(PhaseError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        if to == Phase::Treating {
            let minutes = self.config.duration_minutes;
            self.live_color = self.color;
            self.timer = TimerState {
                total_minutes: minutes,
                remaining_minutes: minutes,
            };
        }
        self.phase = to;
        Ok(to)
    }

    fn ensure_configuring(&self) -> Result<(), PhaseError> {
        match self.phase {
            Phase::Configuring => Ok(()),
            phase => Err(PhaseError::SettingsFrozen { phase }),
        }
    }

    /// Leistung der aktuellen Einstellung
    ///
    /// Gilt in jeder Phase. Ab `Treating` ist die Farbe eingefroren, der
    /// Wert entspricht dann LiveColor, auch wenn der Strip schon aus ist.
    pub fn configured_power(&self) -> f32 {
        led_power(self.color)
    }

    /// Gesamtdosis der Sitzung in J/cm²
    pub fn fluence(&self) -> f32 {
        fluence(self.reading.final_irradiance, self.timer.total_minutes)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Prozessweiter Zustand aller Tasks
pub struct SharedState {
    session: Mutex<CriticalSectionRawMutex, RefCell<Session>>,
    phase_watch: Watch<CriticalSectionRawMutex, Phase, PHASE_RECEIVERS>,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            session: Mutex::new(RefCell::new(Session::new())),
            phase_watch: Watch::new(),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        self.session.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Konsistente Kopie des gesamten Zustands
    pub fn snapshot(&self) -> Session {
        self.with(|s| *s)
    }

    pub fn phase(&self) -> Phase {
        self.with(|s| s.phase)
    }

    /// Schaltet die Phase weiter und benachrichtigt alle Empfänger
    ///
    /// Ein zweiter Aufruf mit demselben Ziel liefert `InvalidTransition`
    /// und ändert nichts. Der Alarm bei `Finished` gehört zum Aufrufer,
    /// siehe [`SharedState::finish`].
    pub fn advance_phase(&self, to: Phase) -> Result<Phase, PhaseError> {
        let phase = self.with(|s| s.advance(to))?;
        info!("Phase -> {}", phase.as_str());
        self.phase_watch.sender().send(phase);
        Ok(phase)
    }

    /// Neuer Empfänger für Phasenwechsel, `None` wenn alle Plätze belegt sind
    pub fn phase_receiver(&self) -> Option<PhaseReceiver<'_>> {
        self.phase_watch.receiver()
    }

    // ------------------------------------------------------------------------
    // Settings-Task
    // ------------------------------------------------------------------------

    pub fn color(&self) -> ColorSetting {
        self.with(|s| s.color)
    }

    pub fn set_color(&self, color: ColorSetting) -> Result<(), PhaseError> {
        self.with(|s| {
            s.ensure_configuring()?;
            s.color = color;
            Ok(())
        })
    }

    pub fn duration(&self) -> u16 {
        self.with(|s| s.config.duration_minutes)
    }

    pub fn set_duration(&self, minutes: u16) -> Result<(), PhaseError> {
        self.with(|s| {
            s.ensure_configuring()?;
            s.config.duration_minutes = adjust_duration(minutes, 0);
            Ok(())
        })
    }

    // ------------------------------------------------------------------------
    // LED-Task
    // ------------------------------------------------------------------------

    /// Kopiert die aktuelle Einstellung vorab nach LiveColor
    pub fn stage_live_color(&self) -> Result<RGB8, PhaseError> {
        self.with(|s| {
            s.ensure_configuring()?;
            s.live_color = s.color;
            Ok(s.live_color)
        })
    }

    pub fn live_color(&self) -> RGB8 {
        self.with(|s| s.live_color)
    }

    // ------------------------------------------------------------------------
    // Timer-Task
    // ------------------------------------------------------------------------

    pub fn timer(&self) -> TimerState {
        self.with(|s| s.timer)
    }

    /// Spiegelt die eingestellte Dauer in Gesamt- und Restzeit
    pub fn mirror_duration(&self) -> Result<TimerState, PhaseError> {
        self.with(|s| {
            s.ensure_configuring()?;
            let minutes = s.config.duration_minutes;
            s.timer = TimerState {
                total_minutes: minutes,
                remaining_minutes: minutes,
            };
            Ok(s.timer)
        })
    }

    /// `Treating` -> `Finished`, Alarm genau einmal
    ///
    /// Nur der erfolgreiche Übergang piept; jeder weitere Aufruf liefert
    /// `InvalidTransition` und bleibt still.
    pub fn finish<A: Alert>(&self, alert: &mut A) -> Result<Phase, PhaseError> {
        let phase = self.advance_phase(Phase::Finished)?;
        alert.sound(BeepPattern::FINISHED);
        Ok(phase)
    }

    /// Zieht eine Minute von der Restzeit ab, nur während `Treating`
    pub fn count_down_minute(&self) -> Result<u16, PhaseError> {
        self.with(|s| {
            if s.phase != Phase::Treating {
                return Err(PhaseError::NotTreating { phase: s.phase });
            }
            s.timer.remaining_minutes = s.timer.remaining_minutes.saturating_sub(1);
            Ok(s.timer.remaining_minutes)
        })
    }

    // ------------------------------------------------------------------------
    // Sensor-Task
    // ------------------------------------------------------------------------

    pub fn reading(&self) -> SensorReading {
        self.with(|s| s.reading)
    }

    /// Übernimmt ein Sample; die Bestrahlungsstärke kommt aus der LED-Leistung
    /// der Einstellung, nicht aus dem Lux-Wert
    pub fn record_sample(&self, lux: Option<u32>) -> SensorReading {
        self.with(|s| {
            let instant = irradiance(s.configured_power());
            s.reading.update(lux, instant);
            s.reading
        })
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
