//! Session settings.
//!
//! All fields have defaults, so a partial document deserializes:
//!
//! ```
//! use printfit::{Settings, Unit};
//!
//! let s = Settings::default().with_default_unit(Unit::Centimeters);
//! assert_eq!(s.reference_dpi, 300.0);
//! assert!(s.validate().is_ok());
//! ```

use core::time::Duration;

use crate::error::{Error, Result};
use crate::grade::REFERENCE_DPI;
use crate::units::Unit;

/// Tunables for a [`Session`](crate::Session).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// DPI used for the unframed maximum-print-size preview.
    pub reference_dpi: f64,
    /// Unit the custom-size form starts in.
    pub default_unit: Unit,
    /// Quiet period for form input, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reference_dpi: REFERENCE_DPI,
            default_unit: Unit::Inches,
            debounce_ms: 300,
        }
    }
}

impl Settings {
    pub fn with_reference_dpi(mut self, dpi: f64) -> Self {
        self.reference_dpi = dpi;
        self
    }

    pub fn with_default_unit(mut self, unit: Unit) -> Self {
        self.default_unit = unit;
        self
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Reject values no session can run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.reference_dpi.is_finite() && self.reference_dpi > 0.0) {
            return Err(Error::InvalidSettings(
                "reference_dpi must be positive and finite",
            ));
        }
        if self.default_unit == Unit::Unitless {
            return Err(Error::InvalidSettings(
                "default_unit must be inches or centimeters",
            ));
        }
        Ok(())
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.reference_dpi, 300.0);
        assert_eq!(s.default_unit, Unit::Inches);
        assert_eq!(s.debounce_delay(), Duration::from_millis(300));
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_reference_dpi() {
        for dpi in [0.0, -300.0, f64::NAN, f64::INFINITY] {
            let s = Settings::default().with_reference_dpi(dpi);
            assert!(
                matches!(s.validate(), Err(Error::InvalidSettings(_))),
                "{dpi} accepted"
            );
        }
    }

    #[test]
    fn rejects_unitless_default() {
        let s = Settings::default().with_default_unit(Unit::Unitless);
        assert!(s.validate().is_err());
    }
}
