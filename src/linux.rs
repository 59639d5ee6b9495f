//! Opening the sensor on a Linux `/dev/i2c-N` bus.

use std::path::Path;

use linux_embedded_hal::{Delay, I2CError, I2cdev};

use crate::bmp085::{Bmp085, Bmp085Error, config::Bmp085Config};

pub type LinuxBmp085 = Bmp085<I2cdev, Delay>;

/// Opens the I²C character device at `path` (e.g. `/dev/i2c-1`) and loads calibration
/// from the sensor at `config.address`.
///
/// A failure to open the device is reported as a transport error.
pub fn open<P: AsRef<Path>>(
    path: P,
    config: Bmp085Config,
) -> Result<LinuxBmp085, Bmp085Error<I2CError>> {
    let i2c = I2cdev::new(path).map_err(|e| {
        info!("Failed to open I2C bus");
        Bmp085Error::Transport(I2CError::from(e))
    })?;
    Bmp085::new(i2c, Delay, config)
}

/// Opens `/dev/i2c-{bus}`, the numbering used on Raspberry Pi style boards.
pub fn open_bus(bus: u8, config: Bmp085Config) -> Result<LinuxBmp085, Bmp085Error<I2CError>> {
    open(format!("/dev/i2c-{bus}"), config)
}
