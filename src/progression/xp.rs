//! Experience and leveling
//!
//! Converts a cumulative XP total into a level and the progress within it.
//! The result depends only on the XP total and the curve, so a client and a
//! backend running this same walk always agree on a user's level.

use serde::{Deserialize, Serialize};

use super::curve::CurveConfig;

/// Derived level state for one XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgressResult {
    /// Current level, `1..=max_level`
    pub level: u32,
    /// Normalized input XP
    pub total_xp: u64,
    /// XP accumulated within the current level
    pub xp_into_level: u64,
    /// XP required to clear the current level (0 at the cap)
    pub xp_for_next: u64,
    /// XP still missing to reach the next level (0 at the cap)
    pub xp_needed: u64,
    /// True iff `level` is the curve's cap
    pub max_level_reached: bool,
}

impl ProgressResult {
    /// Whether the cap has been reached
    pub fn is_max_level(&self) -> bool {
        self.max_level_reached
    }

    /// Fill ratio of the current level in `[0, 1)`, or `1.0` at the cap
    pub fn fraction(&self) -> f64 {
        if self.max_level_reached || self.xp_for_next == 0 {
            return 1.0;
        }
        self.xp_into_level as f64 / self.xp_for_next as f64
    }
}

/// Normalize a raw XP value: NaN and negatives become 0, fractions are
/// truncated toward zero, and anything past `u64::MAX` saturates.
pub fn normalize_xp(total_xp: f64) -> u64 {
    if total_xp.is_nan() || total_xp <= 0.0 {
        return 0;
    }
    total_xp.trunc() as u64
}

/// Compute the level state for an XP total.
///
/// Never fails. The loop is bounded by `config.max_level`, not by the size of
/// the XP total, and XP beyond the cap is absorbed.
pub fn compute_progress(total_xp: f64, config: &CurveConfig) -> ProgressResult {
    compute_progress_xp(normalize_xp(total_xp), config)
}

/// Threshold walk over an already-normalized XP total
pub fn compute_progress_xp(total_xp: u64, config: &CurveConfig) -> ProgressResult {
    let mut level = 1;
    let mut xp_for_next = config.first_threshold();
    let mut remaining = total_xp;

    while level < config.max_level && remaining >= xp_for_next {
        remaining -= xp_for_next;
        level += 1;
        xp_for_next = config.next_threshold(xp_for_next);
    }

    if level >= config.max_level {
        return ProgressResult {
            level,
            total_xp,
            xp_into_level: 0,
            xp_for_next: 0,
            xp_needed: 0,
            max_level_reached: true,
        };
    }

    ProgressResult {
        level,
        total_xp,
        xp_into_level: remaining,
        xp_for_next,
        xp_needed: xp_for_next.saturating_sub(remaining),
        max_level_reached: false,
    }
}

/// [`compute_progress`] for a possibly absent total, which counts as 0
pub fn compute_progress_opt(total_xp: Option<f64>, config: &CurveConfig) -> ProgressResult {
    compute_progress(total_xp.unwrap_or(0.0), config)
}

/// [`compute_progress`] on the default curve
pub fn progress_for(total_xp: f64) -> ProgressResult {
    compute_progress(total_xp, &CurveConfig::default())
}
