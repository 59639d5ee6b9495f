//! Barometric conversions applied to a compensated pressure.
//!
//! These use the international barometric formula and are floating point; they are kept
//! apart from the integer compensation in [`crate::bmp085::calibration`].

/// Pascals per inch of mercury.
pub const TO_INCHES_MERCURY: f32 = 3386.389;

/// Standard atmosphere at sea level, in Pa.
pub const STANDARD_SEA_LEVEL_PRESSURE: f32 = 101_325.0;

/// Given a pressure (Pa) taken at a known elevation (meters), returns the equivalent
/// pressure at sea level.
///
/// An elevation of zero returns the pressure unchanged.
pub fn sea_level_pressure(pressure_pa: f32, elevation_m: f32) -> f32 {
    pressure_pa / libm::powf(1.0 - (elevation_m / 44330.0), 5.255)
}

/// Given a pressure (Pa) and the current sea-level pressure (Pa), returns the altitude
/// in meters.
pub fn altitude(pressure_pa: f32, sea_level_pa: f32) -> f32 {
    44330.0 * (1.0 - libm::powf(pressure_pa / sea_level_pa, 1.0 / 5.255))
}

pub fn pa_to_inches_hg(pressure_pa: f32) -> f32 {
    pressure_pa / TO_INCHES_MERCURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_elevation_is_identity() {
        assert_eq!(sea_level_pressure(69964.0, 0.0), 69964.0);
        assert_eq!(sea_level_pressure(101_325.0, 0.0), 101_325.0);
    }

    #[test]
    fn sea_level_pressure_grows_with_elevation() {
        let mut last = sea_level_pressure(95_000.0, 0.0);
        for elevation in [10.0, 100.0, 500.0, 1000.0, 3000.0] {
            let adjusted = sea_level_pressure(95_000.0, elevation);
            assert!(adjusted > last, "{adjusted} <= {last} at {elevation} m");
            last = adjusted;
        }
    }

    #[test]
    fn altitude_inverts_sea_level_adjustment() {
        let msl = sea_level_pressure(90_000.0, 1000.0);
        let h = altitude(90_000.0, msl);
        assert!((h - 1000.0).abs() < 1.0, "{h}");
        assert!(altitude(STANDARD_SEA_LEVEL_PRESSURE, STANDARD_SEA_LEVEL_PRESSURE).abs() < 1e-3);
    }

    #[test]
    fn inches_of_mercury() {
        let inhg = pa_to_inches_hg(STANDARD_SEA_LEVEL_PRESSURE);
        assert!((inhg - 29.92).abs() < 0.01, "{inhg}");
    }
}
