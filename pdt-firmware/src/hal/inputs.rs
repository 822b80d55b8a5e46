// Bedienfeld: drei Potentiometer an ADC1 und drei Taster
//
// Der ESP32-C6 hat keinen Touch-Sensor. Die Taster melden deshalb einen
// Näherungswert wie ein Touch-Pad: 0 gedrückt, 4095 losgelassen.

use defmt::warn;
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcPin};
use esp_hal::gpio::Input;
use esp_hal::peripherals::{ADC1, GPIO0, GPIO1, GPIO2};
use pdt_core::config::AXIS_MAX;
use pdt_core::{Axis, InputPanel, TouchPad};

use crate::config::{BUTTON_PRESSED_VALUE, BUTTON_RELEASED_VALUE};

pub struct PanelInputs<'d> {
    pub adc: Adc<'d, ADC1<'d>, Blocking>,
    pub red: AdcPin<GPIO0<'d>, ADC1<'d>>,
    pub green: AdcPin<GPIO1<'d>, ADC1<'d>>,
    pub blue: AdcPin<GPIO2<'d>, ADC1<'d>>,
    pub start: Input<'d>,
    pub less: Input<'d>,
    pub more: Input<'d>,
}

fn proximity(button: &Input<'_>) -> u16 {
    if button.is_low() {
        BUTTON_PRESSED_VALUE
    } else {
        BUTTON_RELEASED_VALUE
    }
}

impl InputPanel for PanelInputs<'_> {
    fn read_axis(&mut self, axis: Axis) -> i32 {
        let sample = match axis {
            Axis::Red => nb::block!(self.adc.read_oneshot(&mut self.red)),
            Axis::Green => nb::block!(self.adc.read_oneshot(&mut self.green)),
            Axis::Blue => nb::block!(self.adc.read_oneshot(&mut self.blue)),
        };
        match sample {
            Ok(raw) => raw as i32,
            Err(_) => {
                // Ohne Messwert bleibt der Kanal dunkel
                warn!("Inputs: ADC read failed on {}", axis);
                AXIS_MAX
            }
        }
    }

    fn read_touch(&mut self, pad: TouchPad) -> u16 {
        match pad {
            TouchPad::Start => proximity(&self.start),
            TouchPad::Less => proximity(&self.less),
            TouchPad::More => proximity(&self.more),
        }
    }
}
