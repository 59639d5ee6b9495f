//! BMP085 calibration coefficients and compensation functions.
//!
//! This module handles loading the factory-trimmed calibration words from the sensor
//! (registers 0xAA–0xBF) and applying them, as described in the Bosch BMP085 datasheet
//! (section 3.5 "Calculating pressure and temperature").
//!
//! Every intermediate uses 32-bit two's-complement arithmetic with wraparound, arithmetic
//! right shifts on signed values and truncating division, exactly as the datasheet's
//! reference code does. Results are bit-exact with that code.

use embedded_hal::i2c::I2c;

use crate::bmp085::{Bmp085Error, config::OversamplingMode, registers::Bmp085Register};

/// Errors from the integer compensation. They mean the calibration data is corrupt; the
/// session stays usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompensationError {
    /// `X1 + MD` was zero in the temperature step
    TemperatureDivisor,
    /// `B4` was zero in the pressure step
    PressureDivisor,
}

impl core::fmt::Display for CompensationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CompensationError::TemperatureDivisor => {
                f.write_str("zero divisor (X1 + MD) in temperature compensation")
            }
            CompensationError::PressureDivisor => {
                f.write_str("zero divisor (B4) in pressure compensation")
            }
        }
    }
}

impl core::error::Error for CompensationError {}

/// Factory-trimmed calibration coefficients for temperature and pressure compensation.
///
/// Loaded from eleven big-endian words at 0xAA–0xBF. AC4..AC6 are unsigned, all other
/// words are signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bmp085Calib {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    /// Unused by the compensation formula, kept for completeness
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

impl Bmp085Calib {
    /// Example coefficients printed in the datasheet's calculation walkthrough.
    pub const DATASHEET_EXAMPLE: Self = Self {
        ac1: 408,
        ac2: -72,
        ac3: -14383,
        ac4: 32741,
        ac5: 32757,
        ac6: 23153,
        b1: 6190,
        b2: 4,
        mb: -32767,
        mc: -8711,
        md: 2868,
    };

    /// Reads the eleven calibration words from the sensor at `address`.
    ///
    /// Words are read one register pair at a time in address order, stopping at the first
    /// failed transfer. Nothing is returned unless all eleven were read and look sane.
    ///
    /// # Errors
    /// - `Transport` if an I²C transfer fails (NACK, arbitration loss, etc.)
    /// - `Calibration` if a word reads back as 0x0000 or 0xFFFF, which the datasheet
    ///   documents as the sign of a broken bus
    pub fn read_calib_data<I2C: I2c>(
        i2c: &mut I2C,
        address: u8,
    ) -> Result<Self, Bmp085Error<I2C::Error>> {
        let calib = Bmp085Calib {
            ac1: read_word(i2c, address, Bmp085Register::Ac1)? as i16,
            ac2: read_word(i2c, address, Bmp085Register::Ac2)? as i16,
            ac3: read_word(i2c, address, Bmp085Register::Ac3)? as i16,
            ac4: read_word(i2c, address, Bmp085Register::Ac4)?,
            ac5: read_word(i2c, address, Bmp085Register::Ac5)?,
            ac6: read_word(i2c, address, Bmp085Register::Ac6)?,
            b1: read_word(i2c, address, Bmp085Register::B1)? as i16,
            b2: read_word(i2c, address, Bmp085Register::B2)? as i16,
            mb: read_word(i2c, address, Bmp085Register::Mb)? as i16,
            mc: read_word(i2c, address, Bmp085Register::Mc)? as i16,
            md: read_word(i2c, address, Bmp085Register::Md)? as i16,
        };
        debug!(
            "calibration: ac1={} ac2={} ac3={} ac4={} ac5={} ac6={}",
            calib.ac1,
            calib.ac2,
            calib.ac3,
            calib.ac4,
            calib.ac5,
            calib.ac6
        );
        debug!(
            "calibration: b1={} b2={} mb={} mc={} md={}",
            calib.b1,
            calib.b2,
            calib.mb,
            calib.mc,
            calib.md
        );
        Ok(calib)
    }

    /// Compensates a raw temperature reading (UT).
    ///
    /// Returns `(b5, temperature)` where:
    /// - `b5` is the intermediate value the pressure formula needs
    /// - `temperature` is in tenths of a degree Celsius (e.g. 150 = 15.0 °C)
    ///
    /// # Errors
    /// `TemperatureDivisor` if `X1 + MD` is zero, which only happens with corrupt
    /// calibration words.
    pub fn compensate_temperature(&self, ut: i16) -> Result<(i32, i32), CompensationError> {
        let ut = ut as i32;
        let ac5 = self.ac5 as i32;
        let ac6 = self.ac6 as i32;
        let mc = self.mc as i32;
        let md = self.md as i32;

        let x1 = ut.wrapping_sub(ac6).wrapping_mul(ac5) >> 15;
        let divisor = x1.wrapping_add(md);
        if divisor == 0 {
            warn!("temperature compensation: X1 + MD is zero (x1={})", x1);
            return Err(CompensationError::TemperatureDivisor);
        }
        let x2 = mc.wrapping_shl(11).wrapping_div(divisor);
        let b5 = x1.wrapping_add(x2);
        let t = b5.wrapping_add(8) >> 4;
        trace!("temperature: x1={} x2={} b5={} t={}", x1, x2, b5, t);
        Ok((b5, t))
    }

    /// Compensates a raw, mode-aligned pressure reading (UP) using `b5` from
    /// [`Bmp085Calib::compensate_temperature`].
    ///
    /// Returns pressure in Pa.
    ///
    /// # Errors
    /// `PressureDivisor` if `B4` is zero, which only happens with corrupt calibration
    /// words.
    pub fn compensate_pressure(
        &self,
        up: i32,
        b5: i32,
        mode: OversamplingMode,
    ) -> Result<i32, CompensationError> {
        let oss = mode.index() as u32;
        let ac1 = self.ac1 as i32;
        let ac2 = self.ac2 as i32;
        let ac3 = self.ac3 as i32;
        let ac4 = self.ac4 as u32;
        let b1 = self.b1 as i32;
        let b2 = self.b2 as i32;

        let b6 = b5.wrapping_sub(4000);
        let b6_sq = b6.wrapping_mul(b6) >> 12;
        let mut x1 = b2.wrapping_mul(b6_sq) >> 11;
        let mut x2 = ac2.wrapping_mul(b6) >> 11;
        let mut x3 = x1.wrapping_add(x2);
        let b3 = ac1
            .wrapping_mul(4)
            .wrapping_add(x3)
            .wrapping_shl(oss)
            .wrapping_add(2)
            .wrapping_div(4);
        trace!("pressure: b6={} x1={} x2={} x3={} b3={}", b6, x1, x2, x3, b3);

        x1 = ac3.wrapping_mul(b6) >> 13;
        x2 = b1.wrapping_mul(b6_sq) >> 16;
        x3 = x1.wrapping_add(x2).wrapping_add(2) >> 2;
        let b4 = ac4.wrapping_mul(x3.wrapping_add(32768) as u32) >> 15;
        if b4 == 0 {
            warn!("pressure compensation: B4 is zero (x3={})", x3);
            return Err(CompensationError::PressureDivisor);
        }
        let b7 = (up.wrapping_sub(b3) as u32).wrapping_mul(50000u32 >> oss);
        trace!("pressure: x1={} x2={} x3={} b4={} b7={}", x1, x2, x3, b4, b7);

        let mut p = if b7 < 0x8000_0000 {
            (b7.wrapping_mul(2) / b4) as i32
        } else {
            (b7 / b4).wrapping_mul(2) as i32
        };

        x1 = (p >> 8).wrapping_mul(p >> 8);
        x1 = x1.wrapping_mul(3038) >> 16;
        x2 = (-7357i32).wrapping_mul(p) >> 16;
        p = p.wrapping_add(x1.wrapping_add(x2).wrapping_add(3791) >> 4);
        trace!("pressure: x1={} x2={} p={}", x1, x2, p);
        Ok(p)
    }
}

/// Reads one big-endian calibration word and rejects the values a floating or shorted
/// bus produces.
fn read_word<I2C: I2c>(
    i2c: &mut I2C,
    address: u8,
    register: Bmp085Register,
) -> Result<u16, Bmp085Error<I2C::Error>> {
    let mut buffer = [0u8; 2];
    if let Err(e) = i2c.write_read(address, &[register as u8], &mut buffer) {
        info!("Failed to read calibration register {:#x}", register as u8);
        return Err(Bmp085Error::Transport(e));
    }
    let word = u16::from_be_bytes(buffer);
    if word == 0x0000 || word == 0xFFFF {
        warn!(
            "Calibration register {:#x} holds {:#x}, bus is not working",
            register as u8,
            word
        );
        return Err(Bmp085Error::Calibration {
            register: register as u8,
            word,
        });
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAL: Bmp085Calib = Bmp085Calib::DATASHEET_EXAMPLE;

    #[test]
    fn datasheet_temperature() {
        assert_eq!(CAL.compensate_temperature(27898), Ok((2400, 150)));
    }

    #[test]
    fn datasheet_pressure() {
        let (b5, _) = CAL.compensate_temperature(27898).unwrap();
        assert_eq!(
            CAL.compensate_pressure(23843, b5, OversamplingMode::UltraLowPower),
            Ok(69964)
        );
    }

    #[test]
    fn pressure_in_higher_modes() {
        // The same UP means a much lower pressure once more oversampling bits are kept.
        let expected = [69964, 34416, 16686, 7831];
        for (mode, want) in OversamplingMode::ALL.into_iter().zip(expected) {
            assert_eq!(CAL.compensate_pressure(23843, 2400, mode), Ok(want));
        }
    }

    #[test]
    fn pressure_large_b7_branch() {
        // B7 = (60000 - 422) * 50000 = 2_978_900_000, above 0x8000_0000.
        assert_eq!(
            CAL.compensate_pressure(60000, 2400, OversamplingMode::UltraLowPower),
            Ok(178458)
        );
        assert_eq!(
            CAL.compensate_pressure(44000, 2400, OversamplingMode::UltraLowPower),
            Ok(130320)
        );
    }

    #[test]
    fn temperature_is_pure() {
        let first = CAL.compensate_temperature(27898);
        let second = CAL.compensate_temperature(27898);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_temperature_divisor() {
        // With UT == AC6, X1 is 0 so X1 + MD == MD.
        let cal = Bmp085Calib { md: 0, ..CAL };
        assert_eq!(
            cal.compensate_temperature(cal.ac6 as i16),
            Err(CompensationError::TemperatureDivisor)
        );
    }

    #[test]
    fn zero_pressure_divisor() {
        let cal = Bmp085Calib { ac4: 0, ..CAL };
        assert_eq!(
            cal.compensate_pressure(23843, 2400, OversamplingMode::Standard),
            Err(CompensationError::PressureDivisor)
        );
    }
}
