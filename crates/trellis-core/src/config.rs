//! Sizer construction parameters.

use crate::errors::LayoutError;
use crate::geometry::Axis;

/// Direction in which a sizer stacks its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizerType {
    /// Entries flow left to right
    #[default]
    Horizontal,
    /// Entries flow top to bottom
    Vertical,
}

impl SizerType {
    /// The axis entries are stacked along.
    pub const fn main_axis(self) -> Axis {
        match self {
            SizerType::Horizontal => Axis::Horizontal,
            SizerType::Vertical => Axis::Vertical,
        }
    }

    /// The axis every entry stretches across.
    pub const fn cross_axis(self) -> Axis {
        self.main_axis().other()
    }
}

/// Configuration for a sizer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizerConfig {
    /// Stacking direction
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub sizer_type: SizerType,
    /// Space inserted between consecutive entries
    #[cfg_attr(feature = "serde", serde(default))]
    pub gap: f32,
}

impl SizerConfig {
    pub fn horizontal() -> Self {
        Self {
            sizer_type: SizerType::Horizontal,
            ..Default::default()
        }
    }

    pub fn vertical() -> Self {
        Self {
            sizer_type: SizerType::Vertical,
            ..Default::default()
        }
    }

    /// Set the gap between entries.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Check that the gap is a finite, non-negative length.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(LayoutError::InvalidGap { value: self.gap });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes() {
        assert_eq!(SizerType::Horizontal.main_axis(), Axis::Horizontal);
        assert_eq!(SizerType::Horizontal.cross_axis(), Axis::Vertical);
        assert_eq!(SizerType::Vertical.main_axis(), Axis::Vertical);
        assert_eq!(SizerType::Vertical.cross_axis(), Axis::Horizontal);
    }

    #[test]
    fn test_validate_gap() {
        assert!(SizerConfig::vertical().with_gap(4.0).validate().is_ok());
        assert!(matches!(
            SizerConfig::horizontal().with_gap(-1.0).validate(),
            Err(LayoutError::InvalidGap { .. })
        ));
        assert!(SizerConfig::horizontal().with_gap(f32::NAN).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: SizerConfig = serde_json::from_str(r#"{ "type": "vertical", "gap": 6.0 }"#).unwrap();
        assert_eq!(config, SizerConfig::vertical().with_gap(6.0));

        let config: SizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SizerConfig::default());
    }
}
