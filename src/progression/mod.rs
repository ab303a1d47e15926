//! Progression systems

pub mod curve;
pub mod xp;
pub mod grant;

pub use curve::{ConfigError, CurveConfig, Thresholds};
pub use curve::{DEFAULT_BASE_XP, DEFAULT_GROWTH_RATE, DEFAULT_MAX_LEVEL};
pub use xp::{compute_progress, compute_progress_opt, compute_progress_xp, normalize_xp, progress_for, ProgressResult};
pub use grant::{grant_xp, XpGrant};
