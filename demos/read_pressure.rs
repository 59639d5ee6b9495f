//! Reads temperature and pressure from a BMP085 on a Linux I²C bus.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example read_pressure --features linux -- --bus 1 --mode 3 --elevation 212
//! ```
//!
//! - `--bus <n>`: I²C bus number, `/dev/i2c-<n>` (default: 1)
//! - `--address <hex>`: device address (default: 77)
//! - `--mode <0-3>`: pressure oversampling (default: 1, standard)
//! - `--elevation <m>`: also print the sea-level adjusted pressure

use bmp085_temp_press::{
    Bmp085Config, OversamplingMode,
    altitude::{pa_to_inches_hg, sea_level_pressure},
    linux,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let mut bus = 1u8;
    let mut config = Bmp085Config::default();
    let mut elevation: Option<f32> = None;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).ok_or_else(|| format!("{} needs a value", args[i]))?;
        match args[i].as_str() {
            "--bus" => bus = value.parse()?,
            "--address" => config = config.with_address(u8::from_str_radix(value, 16)?),
            "--mode" => {
                let oss: u8 = value.parse()?;
                let mode = OversamplingMode::try_from(oss)
                    .map_err(|oss| format!("oversampling mode {oss} is not in 0..=3"))?;
                config = config.with_mode(mode);
            }
            "--elevation" => elevation = Some(value.parse()?),
            other => return Err(format!("unknown argument {other}").into()),
        }
        i += 2;
    }

    let mut sensor = linux::open_bus(bus, config)?;
    let reading = sensor.read()?;

    println!("Temp is {:.1}C", reading.temperature_celsius());
    println!("Pressure is {}pa", reading.pressure);

    if let Some(elevation) = elevation {
        let adjusted = sea_level_pressure(reading.pressure as f32, elevation);
        println!(
            "Sea-level adjusted pressure is {:.1}pa ({:.2} inHg)",
            adjusted,
            pa_to_inches_hg(adjusted)
        );
    }

    Ok(())
}
