/// BMP085/BMP180 register map (Bosch Sensortec BMP085 datasheet rev 1.2, BMP180 rev 2.5).
///
/// All addresses are 8-bit (7-bit I²C slave address + R/W bit handled by HAL).
///
/// Key groups:
/// - **Calibration** - 0xAA–0xBF (11 big-endian words, read-only, factory trimmed)
/// - **Control** - 0xF4 (start temperature or pressure conversion)
/// - **Result** - 0xF6–0xF8 (MSB, LSB, XLSB of the last conversion)
/// - **Reset & ID** - 0xE0 (soft reset), 0xD0 (chip ID)
///
/// Usage example:
/// ```rust
/// # use bmp085_temp_press::bmp085::registers::Bmp085Register;
/// let reg_addr = Bmp085Register::Control as u8;
/// assert_eq!(reg_addr, 0xF4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Bmp085Register {
    // Conversion result, 2 bytes for temperature and 3 for pressure
    OutMsb = 0xF6,
    Control = 0xF4,
    // If 0xB6 is written to the register,
    // the device is reset using the complete power-on-reset procedure
    SoftReset = 0xE0,
    // Chip identification number, 0x55 on both BMP085 and BMP180
    Id = 0xD0,
    Ac1 = 0xAA,
    Ac2 = 0xAC,
    Ac3 = 0xAE,
    Ac4 = 0xB0,
    Ac5 = 0xB2,
    Ac6 = 0xB4,
    B1 = 0xB6,
    B2 = 0xB8,
    Mb = 0xBA,
    Mc = 0xBC,
    Md = 0xBE,
}

/// Default I²C slave address. The BMP085 address is not configurable in hardware.
pub const BMP085_DEFAULT_ADDR: u8 = 0x77;
pub const BMP085_CHIP_ID: u8 = 0x55;
pub const BMP085_RESET_REG_VALUE: u8 = 0xB6;

/// Control register value starting a temperature conversion.
pub const BMP085_READ_TEMP_CMD: u8 = 0x2E;
/// Control register value starting a pressure conversion; `oss << 6` is added on top.
pub const BMP085_READ_PRESSURE_CMD: u8 = 0x34;

/// Fixed temperature conversion time, 4.5 ms max rounded up.
pub const BMP085_TEMP_CONVERSION_MS: u32 = 5;
