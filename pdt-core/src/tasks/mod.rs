//! Task-Logik der fünf Tasks
//!
//! Jeder Task ist eine generische `async fn` über die Hardware-Traits und
//! eine `DelayNs`-Zeitquelle. Die Firmware ruft sie aus
//! `#[embassy_executor::task]`-Wrappern auf, die Tests mit Mocks.
//! Kein Task ruft einen anderen auf; Koordination läuft nur über
//! [`SharedState`](crate::SharedState) und [`BusLock`](crate::BusLock).

pub mod display;
pub mod leds;
pub mod sensor;
pub mod settings;
pub mod timer;

pub use display::display_logic;
pub use leds::led_logic;
pub use sensor::{sample_once, sensor_logic};
pub use settings::{StartDebouncer, settings_logic};
pub use timer::timer_logic;
