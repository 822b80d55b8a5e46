// TSL2561 Lichtsensor über I2C
//
// Integrationszeit 13 ms, Gain 1x. Die Lux-Berechnung ist die
// Integer-Näherung aus dem Datenblatt für das T/FN/CL-Gehäuse.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use pdt_core::SensorError;

// Register und Kommando-Bits
const COMMAND_BIT: u8 = 0x80;
const WORD_BIT: u8 = 0x20;
const REG_CONTROL: u8 = 0x00;
const REG_TIMING: u8 = 0x01;
const REG_ID: u8 = 0x0A;
const REG_CHAN0: u8 = 0x0C;
const REG_CHAN1: u8 = 0x0E;

const POWER_ON: u8 = 0x03;
/// 13 ms Integration, Gain 1x
const TIMING_13MS_GAIN_1X: u8 = 0x00;

/// Oberhalb dieser Zählerstände ist der ADC bei 13 ms gesättigt
const CLIP_13MS: u16 = 4900;

// Skalierung der Festkomma-Rechnung
const LUX_SCALE: u32 = 14;
const RATIO_SCALE: u32 = 9;
const CH_SCALE: u32 = 10;
const CHSCALE_TINT0: u64 = 0x7517;

/// (K, B, M) je Ratio-Bereich, T/FN/CL-Gehäuse
const SEGMENTS: [(u64, u64, u64); 7] = [
    (0x0040, 0x01f2, 0x01be),
    (0x0080, 0x0214, 0x02d1),
    (0x00c0, 0x023f, 0x037b),
    (0x0100, 0x0270, 0x03fe),
    (0x0138, 0x016f, 0x01fc),
    (0x019a, 0x00d2, 0x00fb),
    (0x029a, 0x0018, 0x0012),
];

/// Rechnet Broadband- und IR-Kanal in Lux um (13 ms, Gain 1x)
pub fn calculate_lux(broadband: u16, ir: u16) -> u32 {
    // Gain 1x: Skalierung x16 gegenüber 16x
    let ch_scale = CHSCALE_TINT0 << 4;
    let channel0 = (broadband as u64 * ch_scale) >> CH_SCALE;
    let channel1 = (ir as u64 * ch_scale) >> CH_SCALE;

    let ratio1 = if channel0 != 0 {
        (channel1 << (RATIO_SCALE + 1)) / channel0
    } else {
        0
    };
    let ratio = (ratio1 + 1) >> 1;

    let (b, m) = SEGMENTS
        .iter()
        .find(|(k, _, _)| ratio <= *k)
        .map(|(_, b, m)| (*b, *m))
        .unwrap_or((0, 0));

    let temp = (channel0 * b).saturating_sub(channel1 * m) + (1 << (LUX_SCALE - 1));
    (temp >> LUX_SCALE) as u32
}

/// TSL2561 an fester I2C-Adresse
pub struct Tsl2561 {
    address: u8,
}

impl Tsl2561 {
    pub const fn new(address: u8) -> Self {
        Self { address }
    }

    /// Schaltet den Sensor ein und setzt das Timing
    ///
    /// Gibt den Inhalt des ID-Registers zurück (Teilenummer und Revision).
    pub fn power_on<I: I2c, D: DelayNs>(&self, i2c: &mut I, delay: &mut D) -> Result<u8, SensorError> {
        i2c.write(self.address, &[COMMAND_BIT | REG_CONTROL, POWER_ON])
            .map_err(|_| SensorError::Bus)?;

        let mut id = [0u8; 1];
        i2c.write_read(self.address, &[COMMAND_BIT | REG_ID], &mut id)
            .map_err(|_| SensorError::Bus)?;

        i2c.write(self.address, &[COMMAND_BIT | REG_TIMING, TIMING_13MS_GAIN_1X])
            .map_err(|_| SensorError::Bus)?;

        // Erste Integration abwarten
        delay.delay_ms(15);
        Ok(id[0])
    }

    fn read_channel<I: I2c>(&self, i2c: &mut I, register: u8) -> Result<u16, SensorError> {
        let mut raw = [0u8; 2];
        i2c.write_read(self.address, &[COMMAND_BIT | WORD_BIT | register], &mut raw)
            .map_err(|_| SensorError::Bus)?;
        Ok(u16::from_le_bytes(raw))
    }

    /// Liest beide Kanäle und liefert Lux
    pub fn read_lux<I: I2c>(&self, i2c: &mut I) -> Result<u32, SensorError> {
        let broadband = self.read_channel(i2c, REG_CHAN0)?;
        let ir = self.read_channel(i2c, REG_CHAN1)?;

        if broadband > CLIP_13MS || ir > CLIP_13MS {
            return Err(SensorError::Saturated);
        }
        Ok(calculate_lux(broadband, ir))
    }
}
