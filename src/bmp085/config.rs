use crate::bmp085::registers::{
    BMP085_DEFAULT_ADDR, BMP085_READ_PRESSURE_CMD, BMP085_READ_TEMP_CMD, BMP085_RESET_REG_VALUE,
    Bmp085Register,
};

/// Pressure oversampling setting (oss, bits 7:6 of the control value).
///
/// Controls pressure resolution, RMS noise, and conversion time.
/// Higher oversampling improves noise at cost of power/time.
///
/// | Variant       | oss | Internal samples | RMS Noise (typ) | Conversion time (max) |
/// |---------------|-----|------------------|-----------------|-----------------------|
/// | UltraLowPower | 0   | 1                | ~6 Pa           | 4.5 ms                |
/// | Standard      | 1   | 2                | ~5 Pa           | 7.5 ms                |
/// | HighRes       | 2   | 4                | ~4 Pa           | 13.5 ms               |
/// | UltraHighRes  | 3   | 8                | ~3 Pa           | 25.5 ms               |
///
/// The raw 3-byte result is right-aligned by shifting it `8 - oss` bits, which leaves
/// `16 + oss` significant bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OversamplingMode {
    UltraLowPower = 0,
    #[default]
    Standard = 1,
    HighRes = 2,
    UltraHighRes = 3,
}

impl OversamplingMode {
    /// All modes, in increasing oss order.
    pub const ALL: [OversamplingMode; 4] = [
        OversamplingMode::UltraLowPower,
        OversamplingMode::Standard,
        OversamplingMode::HighRes,
        OversamplingMode::UltraHighRes,
    ];

    /// The oss value (0..=3), also the oversampling exponent in the pressure formula.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Time to wait between starting a pressure conversion and reading it back.
    pub const fn conversion_delay_ms(self) -> u32 {
        match self {
            OversamplingMode::UltraLowPower => 5,
            OversamplingMode::Standard => 8,
            OversamplingMode::HighRes => 14,
            OversamplingMode::UltraHighRes => 26,
        }
    }

    /// Right shift applied to the zero-padded 24-bit pressure readout.
    pub const fn pressure_shift(self) -> u32 {
        8 - self.index() as u32
    }

    /// Control register value starting a pressure conversion in this mode.
    pub const fn pressure_command(self) -> u8 {
        BMP085_READ_PRESSURE_CMD + (self.index() << 6)
    }
}

impl TryFrom<u8> for OversamplingMode {
    type Error = u8;

    fn try_from(oss: u8) -> Result<Self, Self::Error> {
        match oss {
            0 => Ok(OversamplingMode::UltraLowPower),
            1 => Ok(OversamplingMode::Standard),
            2 => Ok(OversamplingMode::HighRes),
            3 => Ok(OversamplingMode::UltraHighRes),
            other => Err(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegValType {
    /// Start a temperature conversion
    Temperature,
    /// Start a pressure conversion with the configured oversampling
    Pressure,
    /// Soft reset
    Reset,
}

/// Session settings: where the sensor sits on the bus and how pressure is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bmp085Config {
    pub address: u8,
    pub mode: OversamplingMode,
}

impl Bmp085Config {
    /// Creates a new `Bmp085Config` with the specified settings.
    ///
    /// For the usual wiring consider [`Bmp085Config::default()`] instead.
    pub const fn new(address: u8, mode: OversamplingMode) -> Self {
        Self { address, mode }
    }

    /// Fluent setter for the I²C slave address.
    ///
    /// ```rust
    /// # use bmp085_temp_press::bmp085::config::Bmp085Config;
    /// let cfg = Bmp085Config::default().with_address(0x76);
    /// assert_eq!(cfg.address, 0x76);
    /// ```
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Fluent setter for pressure oversampling.
    pub const fn with_mode(mut self, mode: OversamplingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Generates a register address + value pair ready for an I²C write.
    ///
    /// # Supported register types
    /// - `RegValType::Temperature` → Writes `0x2E` to `0xF4`
    /// - `RegValType::Pressure`    → Writes `0x34 + (oss << 6)` to `0xF4`
    /// - `RegValType::Reset`       → Writes `0xB6` to `0xE0`
    pub const fn make_reg_val(&self, reg_val_type: RegValType) -> [u8; 2] {
        match reg_val_type {
            RegValType::Temperature => [Bmp085Register::Control as u8, BMP085_READ_TEMP_CMD],
            RegValType::Pressure => [
                Bmp085Register::Control as u8,
                self.mode.pressure_command(),
            ],
            RegValType::Reset => [Bmp085Register::SoftReset as u8, BMP085_RESET_REG_VALUE],
        }
    }
}

impl Default for Bmp085Config {
    /// Default address 0x77, `Standard` oversampling.
    fn default() -> Self {
        Self::new(BMP085_DEFAULT_ADDR, OversamplingMode::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_is_eight_minus_index() {
        for mode in OversamplingMode::ALL {
            assert_eq!(mode.pressure_shift(), 8 - mode.index() as u32);
        }
    }

    #[test]
    fn delays_increase_with_oversampling() {
        let delays = OversamplingMode::ALL.map(OversamplingMode::conversion_delay_ms);
        assert_eq!(delays, [5, 8, 14, 26]);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn pressure_commands() {
        let commands = OversamplingMode::ALL.map(OversamplingMode::pressure_command);
        assert_eq!(commands, [0x34, 0x74, 0xB4, 0xF4]);
    }

    #[test]
    fn defaults() {
        let cfg = Bmp085Config::default();
        assert_eq!(cfg.address, 0x77);
        assert_eq!(cfg.mode, OversamplingMode::Standard);
        assert_eq!(OversamplingMode::default(), OversamplingMode::Standard);
    }

    #[test]
    fn register_writes() {
        let cfg = Bmp085Config::default().with_mode(OversamplingMode::UltraHighRes);
        assert_eq!(cfg.make_reg_val(RegValType::Temperature), [0xF4, 0x2E]);
        assert_eq!(cfg.make_reg_val(RegValType::Pressure), [0xF4, 0xF4]);
        assert_eq!(cfg.make_reg_val(RegValType::Reset), [0xE0, 0xB6]);
    }

    #[test]
    fn mode_from_oss() {
        assert_eq!(OversamplingMode::try_from(2), Ok(OversamplingMode::HighRes));
        assert_eq!(OversamplingMode::try_from(4), Err(4));
    }
}
