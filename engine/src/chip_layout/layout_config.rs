//! Chip layout settings.

use serde::{Deserialize, Serialize};

use super::text_measure::FontStyle;


pub const DEFAULT_MAX_CHIP_WIDTH: f32 = 225.0;
pub const DEFAULT_OVERFLOW_RESERVE: f32 = 95.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipLayoutConfig {
    /// Most a single chip counts toward the width budget.
    pub max_chip_width: f32,
    /// Width kept free for the overflow affordance.
    pub overflow_reserve: f32,
    pub font: FontStyle,
}

impl Default for ChipLayoutConfig {
    fn default() -> Self {
        Self {
            max_chip_width: DEFAULT_MAX_CHIP_WIDTH,
            overflow_reserve: DEFAULT_OVERFLOW_RESERVE,
            font: FontStyle::default(),
        }
    }
}

fn env_width(name: &str, default: f32) -> f32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(default)
}

impl ChipLayoutConfig {
    /// Defaults, overridden by `FACET_CHIP_MAX_WIDTH` and `FACET_CHIP_OVERFLOW_RESERVE`.
    pub fn from_env() -> Self {
        Self {
            max_chip_width: env_width("FACET_CHIP_MAX_WIDTH", DEFAULT_MAX_CHIP_WIDTH),
            overflow_reserve: env_width("FACET_CHIP_OVERFLOW_RESERVE", DEFAULT_OVERFLOW_RESERVE),
            font: FontStyle::default(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: ChipLayoutConfig = serde_json::from_str(r#"{"max_chip_width": 180}"#).unwrap();
        assert_eq!(config.max_chip_width, 180.0);
        assert_eq!(config.overflow_reserve, DEFAULT_OVERFLOW_RESERVE);
        assert_eq!(config.font, FontStyle::default());
    }

    #[test]
    fn unset_env_gives_defaults() {
        assert_eq!(env_width("FACET_CHIP_TEST_UNSET_VARIABLE", 12.5), 12.5);
    }
}
