pub mod calibration;
pub mod config;
pub mod raw;
pub mod registers;

use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::bmp085::{
    calibration::{Bmp085Calib, CompensationError},
    config::{Bmp085Config, OversamplingMode, RegValType},
    raw::RawSample,
    registers::{BMP085_CHIP_ID, BMP085_TEMP_CONVERSION_MS, Bmp085Register},
};

/// Possible errors while talking to the BMP085.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bmp085Error<E> {
    /// An I²C write or read failed; the current operation is abandoned
    Transport(E),
    /// A calibration word read back as 0x0000 or 0xFFFF
    Calibration { register: u8, word: u16 },
    /// Compensation hit a zero divisor; only this reading is lost
    Arithmetic(CompensationError),
    /// Chip ID is not 0x55 (not a BMP085/BMP180)
    ChipIdMismatch(u8),
}

impl<E> From<CompensationError> for Bmp085Error<E> {
    fn from(e: CompensationError) -> Self {
        Bmp085Error::Arithmetic(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Bmp085Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Bmp085Error::Transport(e) => write!(f, "I2C transfer failed: {e:?}"),
            Bmp085Error::Calibration { register, word } => write!(
                f,
                "calibration register {register:#04x} holds {word:#06x}, bus is not working"
            ),
            Bmp085Error::Arithmetic(e) => write!(f, "{e}"),
            Bmp085Error::ChipIdMismatch(id) => {
                write!(f, "chip ID {id:#04x} does not match {BMP085_CHIP_ID:#04x}")
            }
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Bmp085Error<E> {}

/// A compensated reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Temperature in tenths of a degree Celsius (e.g. 150 = 15.0 °C)
    pub temperature: i32,
    /// Pressure in Pa
    pub pressure: i32,
}

impl Measurement {
    pub fn temperature_celsius(&self) -> f32 {
        self.temperature as f32 / 10.0
    }
}

/// BMP085 driver session (blocking I²C mode).
///
/// Owns (or mutably borrows, since `&mut I2C` is also an `I2c`) the bus, the delay
/// provider, the session settings and the calibration loaded at construction. A value of
/// this type is always fully calibrated.
pub struct Bmp085<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Bmp085Config,
    calib: Bmp085Calib,
}

impl<I2C, D, E> Bmp085<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Creates a driver session and loads the calibration coefficients.
    ///
    /// # Errors
    /// Returns `Bmp085Error` if any of the eleven calibration reads fails or returns a
    /// garbled word. No session exists afterwards; the bus is dropped with the error, so
    /// pass `&mut i2c` to keep it.
    pub fn new(mut i2c: I2C, delay: D, config: Bmp085Config) -> Result<Self, Bmp085Error<E>> {
        let calib = match Bmp085Calib::read_calib_data(&mut i2c, config.address) {
            Ok(calib) => calib,
            Err(e) => {
                info!("Failed to read calibration data");
                return Err(e);
            }
        };
        info!(
            "BMP085 at {:#x} calibrated, oss={}",
            config.address,
            config.mode.index()
        );
        Ok(Self {
            i2c,
            delay,
            config,
            calib,
        })
    }

    /// Builds a session from coefficients obtained elsewhere, without touching the bus.
    pub fn with_calibration(i2c: I2C, delay: D, config: Bmp085Config, calib: Bmp085Calib) -> Self {
        Self {
            i2c,
            delay,
            config,
            calib,
        }
    }

    /// Gives back the I²C interface and the delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    pub fn calibration(&self) -> &Bmp085Calib {
        &self.calib
    }

    pub fn config(&self) -> Bmp085Config {
        self.config
    }

    pub fn mode(&self) -> OversamplingMode {
        self.config.mode
    }

    /// Changes the pressure oversampling used by subsequent readings.
    pub fn set_mode(&mut self, mode: OversamplingMode) {
        self.config.mode = mode;
    }

    /// Reads the chip ID register (0xD0).
    pub fn chip_id(&mut self) -> Result<u8, Bmp085Error<E>> {
        let mut chip_id = [0u8; 1];
        if let Err(e) =
            self.i2c
                .write_read(self.config.address, &[Bmp085Register::Id as u8], &mut chip_id)
        {
            info!("Failed to read chip ID");
            return Err(Bmp085Error::Transport(e));
        }
        Ok(chip_id[0])
    }

    /// Checks that the device answers with the BMP085/BMP180 chip ID.
    pub fn verify_chip_id(&mut self) -> Result<(), Bmp085Error<E>> {
        let chip_id = self.chip_id()?;
        if chip_id != BMP085_CHIP_ID {
            info!("Chip ID mismatch: {:#x}", chip_id);
            return Err(Bmp085Error::ChipIdMismatch(chip_id));
        }
        Ok(())
    }

    /// Soft reset (0xE0 ← 0xB6), followed by the 10 ms start-up time.
    ///
    /// Calibration words live in EEPROM and survive the reset, so they are not reloaded.
    pub fn soft_reset(&mut self) -> Result<(), Bmp085Error<E>> {
        self.write_reg_val(RegValType::Reset)?;
        self.delay.delay_ms(10);
        Ok(())
    }

    /// Reads the temperature in °C.
    pub fn read_temperature(&mut self) -> Result<f32, Bmp085Error<E>> {
        let ut = self.read_raw_temperature()?;
        let (_, t) = self.calib.compensate_temperature(ut)?;
        Ok(t as f32 / 10.0)
    }

    /// Reads the pressure in Pa.
    ///
    /// The pressure formula depends on the current temperature, so a temperature
    /// conversion is always done first.
    pub fn read_pressure(&mut self) -> Result<i32, Bmp085Error<E>> {
        Ok(self.read()?.pressure)
    }

    /// Reads temperature and pressure in a single acquisition.
    pub fn read(&mut self) -> Result<Measurement, Bmp085Error<E>> {
        let raw = self.read_raw()?;
        let (b5, temperature) = self.calib.compensate_temperature(raw.ut)?;
        let pressure = self
            .calib
            .compensate_pressure(raw.up, b5, self.config.mode)?;
        Ok(Measurement {
            temperature,
            pressure,
        })
    }

    /// Runs the temperature then pressure conversions and returns the raw counts.
    pub fn read_raw(&mut self) -> Result<RawSample, Bmp085Error<E>> {
        let ut = self.read_raw_temperature()?;
        let up = self.read_raw_pressure()?;
        Ok(RawSample { ut, up })
    }

    fn read_raw_temperature(&mut self) -> Result<i16, Bmp085Error<E>> {
        self.write_reg_val(RegValType::Temperature)?;
        self.delay.delay_ms(BMP085_TEMP_CONVERSION_MS);
        let mut raw_data = [0u8; 2];
        self.read_out(&mut raw_data)?;
        let ut = raw::decode_temperature(raw_data);
        trace!("raw temperature: {}", ut);
        Ok(ut)
    }

    fn read_raw_pressure(&mut self) -> Result<i32, Bmp085Error<E>> {
        let mode = self.config.mode;
        self.write_reg_val(RegValType::Pressure)?;
        self.delay.delay_ms(mode.conversion_delay_ms());
        let mut raw_data = [0u8; 3];
        self.read_out(&mut raw_data)?;
        let up = raw::decode_pressure(raw_data, mode);
        trace!(
            "raw pressure bytes: {:#x} {:#x} {:#x}, aligned: {}",
            raw_data[0],
            raw_data[1],
            raw_data[2],
            up
        );
        Ok(up)
    }

    fn write_reg_val(&mut self, reg_val_type: RegValType) -> Result<(), Bmp085Error<E>> {
        let reg_val = self.config.make_reg_val(reg_val_type);
        self.i2c.write(self.config.address, &reg_val).map_err(|e| {
            info!("Failed to write {:#x} to {:#x}", reg_val[1], reg_val[0]);
            Bmp085Error::Transport(e)
        })
    }

    fn read_out(&mut self, buffer: &mut [u8]) -> Result<(), Bmp085Error<E>> {
        self.i2c
            .write_read(self.config.address, &[Bmp085Register::OutMsb as u8], buffer)
            .map_err(|e| {
                info!("Read failed");
                Bmp085Error::Transport(e)
            })
    }
}
