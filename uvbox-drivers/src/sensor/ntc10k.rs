//! NTC 10K thermistor sensor
//!
//! Chamber temperature sensor. Uses a lookup table for integer-only
//! temperature calculation.

use uvbox_core::traits::{SensorError, TemperatureSensor};

/// NTC 10K thermistor temperature lookup table
///
/// Table format: (resistance_ohms, temperature_x10)
/// Generated using beta equation with:
/// - R0 = 10,000 ohms at T0 = 25°C
/// - Beta = 3950K
///
/// Temperature range: -20°C to 150°C
const TEMP_TABLE: &[(u32, i16)] = &[
    (105_400, -200), // -20°C
    (58_250, -100),  // -10°C
    (33_620, 0),     // 0°C
    (20_180, 100),   // 10°C
    (12_540, 200),   // 20°C
    (10_000, 250),   // 25°C (R0)
    (8_040, 300),    // 30°C
    (5_300, 400),    // 40°C
    (3_590, 500),    // 50°C
    (2_490, 600),    // 60°C (default limit)
    (1_760, 700),    // 70°C
    (1_270, 800),    // 80°C
    (934, 900),      // 90°C
    (698, 1000),     // 100°C
    (407, 1200),     // 120°C
    (200, 1500),     // 150°C
];

/// Raw ADC counts that count as a railed input
const RAIL_MARGIN: u16 = 10;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// NTC 10K thermistor with B=3950
///
/// Uses lookup table with linear interpolation for temperature calculation.
pub struct Ntc10kSensor<ADC> {
    adc: ADC,
    /// Pull-up resistor value in ohms
    pullup_ohms: u32,
    /// ADC full scale (4096 for 12-bit)
    adc_max: u16,
}

impl<ADC> Ntc10kSensor<ADC> {
    /// Create a new NTC sensor
    ///
    /// # Arguments
    /// - `adc`: ADC channel for reading thermistor
    /// - `pullup_ohms`: Pull-up resistor value (10k on the reference board)
    pub fn new(adc: ADC, pullup_ohms: u32) -> Self {
        Self {
            adc,
            pullup_ohms,
            adc_max: 4096,
        }
    }

    /// Convert ADC reading to resistance
    ///
    /// Circuit: VCC -- pullup -- ADC_PIN -- NTC -- GND
    /// R_ntc = R_pullup * adc_value / (adc_max - adc_value)
    pub fn adc_to_resistance(&self, adc_value: u16) -> Result<u32, SensorError> {
        if adc_value >= self.adc_max - RAIL_MARGIN {
            return Err(SensorError::OpenCircuit);
        }

        if adc_value < RAIL_MARGIN {
            return Err(SensorError::ShortCircuit);
        }

        let numerator = u64::from(self.pullup_ohms) * u64::from(adc_value);
        let denominator = u64::from(self.adc_max - adc_value);

        Ok((numerator / denominator) as u32)
    }

    /// Calculate temperature from resistance using lookup table
    ///
    /// Returns temperature in 0.1°C units (e.g., 250 = 25.0°C).
    /// Uses linear interpolation between table entries.
    pub fn resistance_to_temp_x10(resistance: u32) -> Result<i16, SensorError> {
        let coldest = TEMP_TABLE[0].0;
        let hottest = TEMP_TABLE[TEMP_TABLE.len() - 1].0;
        if resistance > coldest || resistance < hottest {
            return Err(SensorError::OutOfRange);
        }

        // Sorted by decreasing resistance (increasing temperature)
        for pair in TEMP_TABLE.windows(2) {
            let (r_high, t_low) = pair[0];
            let (r_low, t_high) = pair[1];

            if resistance <= r_high && resistance >= r_low {
                let r_range = (r_high - r_low) as i32;
                let t_range = i32::from(t_high - t_low);
                let r_offset = (r_high - resistance) as i32;

                return Ok(t_low + (t_range * r_offset / r_range) as i16);
            }
        }

        Err(SensorError::OutOfRange)
    }
}

impl<ADC: AdcReader> TemperatureSensor for Ntc10kSensor<ADC> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        let adc_value = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        let resistance = self.adc_to_resistance(adc_value)?;
        Self::resistance_to_temp_x10(resistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ADC returning a fixed value
    struct DummyAdc(Result<u16, ()>);

    impl AdcReader for DummyAdc {
        fn read(&mut self) -> Result<u16, ()> {
            self.0
        }
    }

    fn sensor(adc: u16) -> Ntc10kSensor<DummyAdc> {
        Ntc10kSensor::new(DummyAdc(Ok(adc)), 10_000)
    }

    #[test]
    fn test_resistance_to_temp() {
        let temp = Ntc10kSensor::<DummyAdc>::resistance_to_temp_x10(10_000).unwrap();
        assert_eq!(temp, 250);

        let temp = Ntc10kSensor::<DummyAdc>::resistance_to_temp_x10(2_490).unwrap();
        assert_eq!(temp, 600);

        // Halfway between the 40 and 50°C entries
        let temp = Ntc10kSensor::<DummyAdc>::resistance_to_temp_x10(4_445).unwrap();
        assert_eq!(temp, 450);
    }

    #[test]
    fn test_resistance_out_of_table() {
        assert_eq!(
            Ntc10kSensor::<DummyAdc>::resistance_to_temp_x10(200_000),
            Err(SensorError::OutOfRange)
        );
        assert_eq!(
            Ntc10kSensor::<DummyAdc>::resistance_to_temp_x10(100),
            Err(SensorError::OutOfRange)
        );
    }

    #[test]
    fn test_midscale_reads_room_temperature() {
        // Equal divider: NTC = pull-up = 10k = 25°C
        let mut ntc = sensor(2048);
        assert_eq!(ntc.read_celsius_x10(), Ok(250));
        assert_eq!(ntc.temperature_c(), Ok(25.0));
    }

    #[test]
    fn test_open_circuit() {
        let result = sensor(0).adc_to_resistance(4095);
        assert_eq!(result, Err(SensorError::OpenCircuit));
    }

    #[test]
    fn test_short_circuit() {
        let result = sensor(0).adc_to_resistance(0);
        assert_eq!(result, Err(SensorError::ShortCircuit));
    }

    #[test]
    fn test_adc_failure() {
        let mut ntc = Ntc10kSensor::new(DummyAdc(Err(())), 10_000);
        assert_eq!(ntc.read_celsius_x10(), Err(SensorError::ConversionError));
    }
}
