//! Blocking driver for the Bosch BMP085/BMP180 barometric pressure and temperature sensor.
//!
//! The driver talks to the sensor through the [`embedded-hal`] 1.0 `I2c` and `DelayNs`
//! traits, so any HAL implementing them (esp-hal, embassy-stm32, linux-embedded-hal, ...)
//! can be used as the bus transport.
//!
//! ```ignore
//! use bmp085_temp_press::bmp085::{Bmp085, config::{Bmp085Config, OversamplingMode}};
//!
//! let config = Bmp085Config::default().with_mode(OversamplingMode::UltraHighRes);
//! let mut sensor = Bmp085::new(i2c, delay, config)?;
//! let reading = sensor.read()?;
//! let msl = bmp085_temp_press::altitude::sea_level_pressure(reading.pressure as f32, 212.0);
//! ```
//!
//! ## Features
//!
//! - `defmt`: log through the `defmt` framework.
//! - `log`: log through the `log` facade.
//! - `linux`: open a `/dev/i2c-N` bus with `linux-embedded-hal`.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal

#![cfg_attr(not(any(test, feature = "linux")), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to every module below.
#[macro_use]
mod fmt;

pub mod altitude;
pub mod bmp085;

#[cfg(feature = "linux")]
pub mod linux;

pub use bmp085::{
    Bmp085, Bmp085Error, Measurement,
    calibration::{Bmp085Calib, CompensationError},
    config::{Bmp085Config, OversamplingMode},
    raw::RawSample,
};
