//! CO2 bands and the indicator colour each one drives.

use crate::config::ConfigError;
use serde::Serialize;
use std::fmt;

/// Air quality band of a single CO2 reading.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Co2Band {
    Low,
    Medium,
    High,
}

/// Colour shown on the RGB indicator for a band.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorColor {
    Green,
    Blue,
    Red,
}

/// The two inclusive upper bounds that split readings into bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Co2Thresholds {
    pub low_ppm: u32,
    pub medium_ppm: u32,
}

impl Co2Band {
    pub const ALL: [Co2Band; 3] = [Co2Band::Low, Co2Band::Medium, Co2Band::High];

    pub const fn indicator(self) -> IndicatorColor {
        match self {
            Co2Band::Low => IndicatorColor::Green,
            Co2Band::Medium => IndicatorColor::Blue,
            Co2Band::High => IndicatorColor::Red,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Co2Band::Low => "low",
            Co2Band::Medium => "medium",
            Co2Band::High => "high",
        }
    }
}

impl fmt::Display for Co2Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl IndicatorColor {
    /// Full-brightness duty values for the red, green and blue channels.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            IndicatorColor::Green => (0, 255, 0),
            IndicatorColor::Blue => (0, 0, 255),
            IndicatorColor::Red => (255, 0, 0),
        }
    }

    /// ANSI 256-colour escape used when the band is echoed to the log.
    pub(crate) const fn ansi(self) -> &'static str {
        match self {
            IndicatorColor::Green => "\x1b[38;5;40m",
            IndicatorColor::Blue => "\x1b[38;5;27m",
            IndicatorColor::Red => "\x1b[31m",
        }
    }
}

impl Co2Thresholds {
    /// Builds thresholds without checking them; see [`Co2Thresholds::checked`].
    pub const fn new(low_ppm: u32, medium_ppm: u32) -> Self {
        Self {
            low_ppm,
            medium_ppm,
        }
    }

    pub fn checked(low_ppm: u32, medium_ppm: u32) -> Result<Self, ConfigError> {
        let thresholds = Self::new(low_ppm, medium_ppm);
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Both bounds must be positive and `low` strictly below `medium`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.low_ppm == 0 {
            return Err(ConfigError::NonPositiveThreshold {
                name: "CO2_LOW_THRESHOLD",
            });
        }
        if self.medium_ppm == 0 {
            return Err(ConfigError::NonPositiveThreshold {
                name: "CO2_MEDIUM_THRESHOLD",
            });
        }
        if self.low_ppm >= self.medium_ppm {
            return Err(ConfigError::ThresholdOrder {
                low: self.low_ppm,
                medium: self.medium_ppm,
            });
        }
        Ok(())
    }

    /// Classifies a reading in ppm. Ties go to the lower band.
    ///
    /// A NaN reading is reported as [`Co2Band::High`] so a broken sensor
    /// never shows up as clean air.
    pub fn classify(&self, reading_ppm: impl Into<f64>) -> Co2Band {
        let ppm = reading_ppm.into();

        if ppm <= f64::from(self.low_ppm) {
            Co2Band::Low
        } else if ppm <= f64::from(self.medium_ppm) {
            Co2Band::Medium
        } else {
            Co2Band::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: Co2Thresholds = Co2Thresholds::new(800, 1200);

    #[test]
    fn test_boundaries_resolve_to_lower_band() {
        assert_eq!(THRESHOLDS.classify(800u32), Co2Band::Low);
        assert_eq!(THRESHOLDS.classify(801u32), Co2Band::Medium);
        assert_eq!(THRESHOLDS.classify(1200u32), Co2Band::Medium);
        assert_eq!(THRESHOLDS.classify(1201u32), Co2Band::High);
    }

    #[test]
    fn test_float_readings() {
        assert_eq!(THRESHOLDS.classify(800.0f32), Co2Band::Low);
        assert_eq!(THRESHOLDS.classify(800.5f32), Co2Band::Medium);
        assert_eq!(THRESHOLDS.classify(1200.01f64), Co2Band::High);
    }

    #[test]
    fn test_out_of_range_readings() {
        assert_eq!(THRESHOLDS.classify(0u16), Co2Band::Low);
        assert_eq!(THRESHOLDS.classify(-5.0f32), Co2Band::Low);
        assert_eq!(THRESHOLDS.classify(f32::NAN), Co2Band::High);
        assert_eq!(THRESHOLDS.classify(u32::MAX), Co2Band::High);
    }

    #[test]
    fn test_indicator_colors() {
        assert_eq!(Co2Band::Low.indicator(), IndicatorColor::Green);
        assert_eq!(Co2Band::Medium.indicator(), IndicatorColor::Blue);
        assert_eq!(Co2Band::High.indicator(), IndicatorColor::Red);
        assert_eq!(IndicatorColor::Red.rgb(), (255, 0, 0));
    }

    #[test]
    fn test_band_display() {
        let names: Vec<String> = Co2Band::ALL.iter().map(|b| b.to_string()).collect();
        assert_eq!(names, ["low", "medium", "high"]);
    }

    #[test]
    fn test_checked_rejects_inverted_thresholds() {
        assert!(matches!(
            Co2Thresholds::checked(1200, 800),
            Err(ConfigError::ThresholdOrder {
                low: 1200,
                medium: 800
            })
        ));
        assert!(matches!(
            Co2Thresholds::checked(800, 800),
            Err(ConfigError::ThresholdOrder { .. })
        ));
    }

    #[test]
    fn test_checked_rejects_zero_thresholds() {
        assert!(matches!(
            Co2Thresholds::checked(0, 1200),
            Err(ConfigError::NonPositiveThreshold {
                name: "CO2_LOW_THRESHOLD"
            })
        ));
        assert!(matches!(
            Co2Thresholds::checked(800, 0),
            Err(ConfigError::NonPositiveThreshold {
                name: "CO2_MEDIUM_THRESHOLD"
            })
        ));
    }

    #[test]
    fn test_checked_accepts_default_thresholds() {
        assert_eq!(Co2Thresholds::checked(800, 1200).ok(), Some(THRESHOLDS));
    }
}
