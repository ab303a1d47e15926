//! Level threshold curve
//!
//! The curve is defined by three numbers: the level cap, the XP needed to
//! clear level 1, and the multiplicative growth applied per level. Every
//! threshold is rounded from the previous rounded threshold, never from a
//! closed-form power, so the walk below is the single source of truth.

use serde::{Deserialize, Serialize};

/// Default level cap
pub const DEFAULT_MAX_LEVEL: u32 = 100;
/// Default XP to go from level 1 to level 2
pub const DEFAULT_BASE_XP: f64 = 100.0;
/// Default per-level growth of the requirement
pub const DEFAULT_GROWTH_RATE: f64 = 1.15;

/// Curve configuration error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_level must be at least 1, got {0}")]
    MaxLevelTooLow(u32),

    #[error("base_xp must be finite and greater than 0, got {0}")]
    InvalidBaseXp(f64),

    #[error("growth_rate must be finite and greater than 1, got {0}")]
    InvalidGrowthRate(f64),
}

/// Immutable curve configuration.
///
/// Build it with [`CurveConfig::new`] to get validation, or deserialize it and
/// call [`CurveConfig::validate`] once at the boundary. The progression engine
/// trusts whatever it is handed and never re-checks per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Highest attainable level
    pub max_level: u32,
    /// XP required to go from level 1 to level 2
    pub base_xp: f64,
    /// Multiplicative growth of the per-level requirement
    pub growth_rate: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            base_xp: DEFAULT_BASE_XP,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }
}

impl CurveConfig {
    /// Create a validated configuration
    pub fn new(max_level: u32, base_xp: f64, growth_rate: f64) -> Result<Self, ConfigError> {
        let config = Self { max_level, base_xp, growth_rate };
        config.validate()?;
        Ok(config)
    }

    /// Check the construction-time preconditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level < 1 {
            return Err(ConfigError::MaxLevelTooLow(self.max_level));
        }
        if !self.base_xp.is_finite() || self.base_xp <= 0.0 {
            return Err(ConfigError::InvalidBaseXp(self.base_xp));
        }
        if !self.growth_rate.is_finite() || self.growth_rate <= 1.0 {
            return Err(ConfigError::InvalidGrowthRate(self.growth_rate));
        }
        Ok(())
    }

    /// Requirement to clear level 1
    pub fn first_threshold(&self) -> u64 {
        round_xp(self.base_xp)
    }

    /// Requirement of the level after one whose requirement is `current`
    pub fn next_threshold(&self, current: u64) -> u64 {
        round_xp(current as f64 * self.growth_rate)
    }

    /// Walk the curve, yielding `(level, xp to clear that level)` for every
    /// level below the cap
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            config: *self,
            level: 1,
            xp: self.first_threshold(),
        }
    }

    /// XP needed to advance from `level - 1` to `level`.
    ///
    /// Zero for level 1 and below, and for anything above the cap.
    pub fn xp_for_level(&self, level: u32) -> u64 {
        if level <= 1 || level > self.max_level {
            return 0;
        }
        self.thresholds()
            .nth((level - 2) as usize)
            .map(|(_, xp)| xp)
            .unwrap_or(0)
    }

    /// Cumulative XP needed to reach `level` from zero
    pub fn total_xp_for_level(&self, level: u32) -> u64 {
        let target = level.min(self.max_level);
        self.thresholds()
            .take_while(|(l, _)| *l < target)
            .fold(0u64, |acc, (_, xp)| acc.saturating_add(xp))
    }

    /// Cumulative XP at which the cap is reached
    pub fn max_total_xp(&self) -> u64 {
        self.total_xp_for_level(self.max_level)
    }
}

/// Round half away from zero, saturating into `u64`
fn round_xp(value: f64) -> u64 {
    // `as` saturates and maps NaN to 0
    value.round() as u64
}

/// Iterator over the per-level requirements of a curve
#[derive(Debug, Clone)]
pub struct Thresholds {
    config: CurveConfig,
    level: u32,
    xp: u64,
}

impl Iterator for Thresholds {
    type Item = (u32, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.level >= self.config.max_level {
            return None;
        }
        let item = (self.level, self.xp);
        self.level += 1;
        self.xp = self.config.next_threshold(self.xp);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.config.max_level.saturating_sub(self.level) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Thresholds {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CurveConfig::default();
        assert_eq!(config.max_level, 100);
        assert_eq!(config.base_xp, 100.0);
        assert_eq!(config.growth_rate, 1.15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert_eq!(CurveConfig::new(0, 100.0, 1.15), Err(ConfigError::MaxLevelTooLow(0)));
        assert_eq!(CurveConfig::new(10, 0.0, 1.15), Err(ConfigError::InvalidBaseXp(0.0)));
        assert_eq!(CurveConfig::new(10, -3.0, 1.15), Err(ConfigError::InvalidBaseXp(-3.0)));
        assert!(matches!(
            CurveConfig::new(10, f64::INFINITY, 1.15),
            Err(ConfigError::InvalidBaseXp(_))
        ));
        assert_eq!(CurveConfig::new(10, 100.0, 1.0), Err(ConfigError::InvalidGrowthRate(1.0)));
        assert_eq!(CurveConfig::new(10, 100.0, 0.9), Err(ConfigError::InvalidGrowthRate(0.9)));
        assert!(matches!(
            CurveConfig::new(10, 100.0, f64::NAN),
            Err(ConfigError::InvalidGrowthRate(_))
        ));
        assert!(CurveConfig::new(1, 0.5, 1.0001).is_ok());
    }

    #[test]
    fn test_thresholds_walk() {
        let config = CurveConfig::default();
        let first: Vec<u64> = config.thresholds().take(10).map(|(_, xp)| xp).collect();
        assert_eq!(first, vec![100, 115, 132, 152, 175, 201, 231, 266, 306, 352]);

        let all: Vec<(u32, u64)> = config.thresholds().collect();
        assert_eq!(all.len(), 99);
        assert_eq!(config.thresholds().len(), 99);
        assert_eq!(all[0], (1, 100));
        assert_eq!(all[98], (99, 88_699_199));
    }

    #[test]
    fn test_walk_differs_from_closed_form() {
        // Level 12 is the first place per-step rounding drifts from the power formula
        let config = CurveConfig::default();
        let walked = config.xp_for_level(13);
        let closed = (100.0 * 1.15f64.powi(11)).round() as u64;
        assert_eq!(walked, 466);
        assert_eq!(closed, 465);
    }

    #[test]
    fn test_xp_for_level() {
        let config = CurveConfig::default();
        assert_eq!(config.xp_for_level(0), 0);
        assert_eq!(config.xp_for_level(1), 0);
        assert_eq!(config.xp_for_level(2), 100);
        assert_eq!(config.xp_for_level(3), 115);
        assert_eq!(config.xp_for_level(4), 132);
        assert_eq!(config.xp_for_level(100), 88_699_199);
        assert_eq!(config.xp_for_level(101), 0);
    }

    #[test]
    fn test_total_xp_for_level() {
        let config = CurveConfig::default();
        assert_eq!(config.total_xp_for_level(1), 0);
        assert_eq!(config.total_xp_for_level(2), 100);
        assert_eq!(config.total_xp_for_level(3), 215);
        assert_eq!(config.total_xp_for_level(5), 499);
        assert_eq!(config.total_xp_for_level(10), 1678);
        assert_eq!(config.max_total_xp(), 680_026_533);
        // Beyond the cap clamps to the cap
        assert_eq!(config.total_xp_for_level(500), 680_026_533);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        let config = CurveConfig::new(10, 2.5, 1.5).unwrap();
        assert_eq!(config.first_threshold(), 3);
        // 3 * 1.5 = 4.5
        assert_eq!(config.next_threshold(3), 5);
    }

    #[test]
    fn test_single_level_curve_has_no_thresholds() {
        let config = CurveConfig::new(1, 100.0, 1.15).unwrap();
        assert_eq!(config.thresholds().count(), 0);
        assert_eq!(config.max_total_xp(), 0);
    }

    #[test]
    fn test_extreme_curve_saturates() {
        let config = CurveConfig::new(200, 1e300, 10.0).unwrap();
        assert_eq!(config.first_threshold(), u64::MAX);
        assert_eq!(config.next_threshold(u64::MAX), u64::MAX);
        assert_eq!(config.max_total_xp(), u64::MAX);
    }

    #[test]
    fn test_deserialize_partial_ron() {
        let config: CurveConfig = ron::from_str("(max_level: 50)").unwrap();
        assert_eq!(config.max_level, 50);
        assert_eq!(config.base_xp, DEFAULT_BASE_XP);
        assert_eq!(config.growth_rate, DEFAULT_GROWTH_RATE);
    }
}
