use crate::bmp085::config::OversamplingMode;

/// Uncompensated ADC counts from one temperature + pressure acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Raw temperature (UT)
    pub ut: i16,
    /// Raw pressure (UP), already aligned for the oversampling mode
    pub up: i32,
}

/// Decode the 2-byte temperature readout (MSB first).
pub fn decode_temperature(raw: [u8; 2]) -> i16 {
    i16::from_be_bytes(raw)
}

/// Decode the 3-byte pressure readout (MSB, LSB, XLSB).
///
/// The bytes are zero-padded to a big-endian 32-bit word and shifted right by
/// `8 - oss`, so every mode ends up with the same scale.
pub fn decode_pressure(raw: [u8; 3], mode: OversamplingMode) -> i32 {
    i32::from_be_bytes([0, raw[0], raw[1], raw[2]]) >> mode.pressure_shift()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_is_signed_big_endian() {
        assert_eq!(decode_temperature([0x6C, 0xFA]), 27898);
        assert_eq!(decode_temperature([0xFF, 0xFE]), -2);
    }

    #[test]
    fn pressure_alignment_per_mode() {
        // 23843 << 8
        assert_eq!(decode_pressure([0x5D, 0x23, 0x00], OversamplingMode::UltraLowPower), 23843);
        assert_eq!(decode_pressure([0x5D, 0x23, 0x00], OversamplingMode::Standard), 47686);
        assert_eq!(decode_pressure([0x5D, 0x23, 0x00], OversamplingMode::UltraHighRes), 190744);
    }

    #[test]
    fn pressure_xlsb_bits_are_dropped_in_low_power() {
        assert_eq!(decode_pressure([0x00, 0x01, 0xFF], OversamplingMode::UltraLowPower), 1);
        assert_eq!(decode_pressure([0xFF, 0xFF, 0xFF], OversamplingMode::UltraLowPower), 0xFFFF);
    }
}
