//! Labeling and gap-handling policies

use crate::error::ForecastError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How projected points are labeled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelMode {
    /// Month following the last historical period, then onwards
    #[default]
    Calendar,
    /// Positional table starting at "Dec", regardless of the history's end
    FixedCycle,
}

/// How historical buckets are placed on the regression x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapPolicy {
    /// x = months elapsed since the first bucket; missing months leave holes
    #[default]
    Calendar,
    /// x = position in the sequence; missing months are squeezed out
    Compress,
}

impl FromStr for LabelMode {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" => Ok(LabelMode::Calendar),
            "fixed-cycle" | "fixed_cycle" => Ok(LabelMode::FixedCycle),
            other => Err(ForecastError::InvalidParameter {
                name: "label_mode".to_string(),
                reason: format!("unknown mode '{}'", other),
            }),
        }
    }
}

impl FromStr for GapPolicy {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" => Ok(GapPolicy::Calendar),
            "compress" => Ok(GapPolicy::Compress),
            other => Err(ForecastError::InvalidParameter {
                name: "gap_policy".to_string(),
                reason: format!("unknown policy '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(LabelMode::default(), LabelMode::Calendar);
        assert_eq!(GapPolicy::default(), GapPolicy::Calendar);
    }

    #[test]
    fn test_parse_label_mode() {
        assert_eq!("fixed-cycle".parse::<LabelMode>().unwrap(), LabelMode::FixedCycle);
        assert_eq!("CALENDAR".parse::<LabelMode>().unwrap(), LabelMode::Calendar);
        assert!("lunar".parse::<LabelMode>().is_err());
    }

    #[test]
    fn test_parse_gap_policy() {
        assert_eq!("compress".parse::<GapPolicy>().unwrap(), GapPolicy::Compress);
        assert!("interpolate".parse::<GapPolicy>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&LabelMode::FixedCycle).unwrap(),
            "\"fixed-cycle\""
        );
    }
}
