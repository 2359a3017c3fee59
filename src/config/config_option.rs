use crate::types::err::ConfigurationError;

/// A named, bounded, parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl ConfigOption<i64> {
    /// The value, if within bounds, and otherwise an error naming the option.
    pub fn checked(&self) -> Result<i64, ConfigurationError> {
        let (min, max) = self.min_max();
        match min <= self.value && self.value <= max {
            true => Ok(self.value),
            false => Err(ConfigurationError::OutOfRange {
                name: self.name,
                value: self.value,
                min,
                max,
            }),
        }
    }
}
