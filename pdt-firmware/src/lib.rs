// Library-Root: Hardware-Anbindung der PDT-Lichtbox
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von pdt-core
pub use pdt_core::{BeepPattern, BusLock, SharedState};

// Embassy Sync-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::i2c::master::I2c;

use crate::config::ALERT_QUEUE_DEPTH;
use crate::hal::I2cBus;

// ============================================================================
// Globaler Zustand
// ============================================================================

/// Sitzungszustand aller Tasks (flüchtig, nach Reset `Configuring`)
pub static SHARED_STATE: SharedState = SharedState::new();

// ============================================================================
// Type-Aliase
// ============================================================================

/// LCD und Lichtsensor am gemeinsamen I2C-Bus
pub type SharedBus = BusLock<I2cBus<I2c<'static, Blocking>, Delay>>;

/// Channel für Piep-Muster (Tasks → Buzzer Task)
pub type AlertChannel = Channel<CriticalSectionRawMutex, BeepPattern, ALERT_QUEUE_DEPTH>;

/// Sender für Piep-Muster
pub type AlertSender = Sender<'static, CriticalSectionRawMutex, BeepPattern, ALERT_QUEUE_DEPTH>;

/// Receiver für Piep-Muster (Buzzer Task)
pub type AlertReceiver = Receiver<'static, CriticalSectionRawMutex, BeepPattern, ALERT_QUEUE_DEPTH>;
