//! Chart configuration.

use serde::Deserialize;

use kundli_ephemeris::ComputationError;
use kundli_vedic_base::PanchangConfig;

/// Options for [`crate::compute_chart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub panchang: PanchangConfig,
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ComputationError> {
        self.panchang.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ist() {
        let config = ChartConfig::default();
        assert_eq!(config.panchang.utc_offset_minutes, 330);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_absurd_offset() {
        let mut config = ChartConfig::default();
        config.panchang.utc_offset_minutes = 15 * 60;
        assert!(matches!(
            config.validate(),
            Err(ComputationError::InvalidInput(_))
        ));
    }

    #[test]
    fn partial_json() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"panchang": {"utc_offset_minutes": -300}}"#).unwrap();
        assert_eq!(config.panchang.utc_offset_minutes, -300);
        let config: ChartConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ChartConfig::default());
    }
}
