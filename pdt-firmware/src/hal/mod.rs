// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus pdt-core für die echte Hardware.

pub mod bus;
pub mod buzzer;
pub mod inputs;
pub mod lcd;
pub mod led_strip;
pub mod lux;

pub use bus::I2cBus;
pub use buzzer::{Buzzer, QueuedAlert};
pub use inputs::PanelInputs;
pub use led_strip::RmtLedStrip;
