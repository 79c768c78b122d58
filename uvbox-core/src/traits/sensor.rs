//! Temperature and lid sensor traits

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor disconnected (open circuit)
    OpenCircuit,
    /// Sensor shorted to ground
    ShortCircuit,
    /// Reading out of expected range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
}

/// Trait for temperature sensors
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// Returns a fixed-point value with 0.1°C resolution.
    /// For example, 45.5°C is returned as 455.
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError>;

    /// Read the current temperature as a float in degrees Celsius
    fn temperature_c(&mut self) -> Result<f32, SensorError> {
        self.read_celsius_x10().map(|t| f32::from(t) / 10.0)
    }
}

/// Trait for the lid switch
pub trait LidSensor {
    /// Check if the lid is closed
    fn is_closed(&mut self) -> bool;
}
