//! xpcurve - Deterministic XP progression engine
//!
//! Turns a cumulative XP total into a level, the progress within that level
//! and the XP still needed, on an exponentially growing threshold curve.
//! Clients and backends running this crate agree on every user's level.

pub mod progression;
pub mod data;

// Re-export commonly used types
pub use progression::{compute_progress, compute_progress_opt, compute_progress_xp, progress_for};
pub use progression::{ConfigError, CurveConfig, ProgressResult};
pub use progression::{grant_xp, XpGrant};
