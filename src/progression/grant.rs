//! Applying XP grants
//!
//! A grant is two engine calls: one on the old total and one on the new one.
//! Deciding whether to announce a level-up is a comparison of the two.

use std::ops::RangeInclusive;

use super::curve::CurveConfig;
use super::xp::{compute_progress_xp, ProgressResult};

/// Progress before and after an XP grant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpGrant {
    pub before: ProgressResult,
    pub after: ProgressResult,
}

impl XpGrant {
    /// New XP total after the grant
    pub fn new_total(&self) -> u64 {
        self.after.total_xp
    }

    /// Number of levels gained (0 when the level stayed or dropped)
    pub fn levels_gained(&self) -> u32 {
        self.after.level.saturating_sub(self.before.level)
    }

    pub fn leveled_up(&self) -> bool {
        self.after.level > self.before.level
    }

    /// Every level newly reached, for announcing each one. Empty when the
    /// level did not rise.
    pub fn new_levels(&self) -> RangeInclusive<u32> {
        self.before.level.saturating_add(1)..=self.after.level
    }
}

/// Add `amount` XP (negative revokes) to `current_total` and compare levels.
///
/// The new total saturates at `u64::MAX` and never drops below 0.
pub fn grant_xp(current_total: u64, amount: i64, config: &CurveConfig) -> XpGrant {
    let new_total = current_total.saturating_add_signed(amount);

    let before = compute_progress_xp(current_total, config);
    let after = compute_progress_xp(new_total, config);

    if after.level > before.level {
        log::debug!(
            "XP grant of {} raised level {} -> {} (total {})",
            amount, before.level, after.level, new_total
        );
    }

    XpGrant { before, after }
}
