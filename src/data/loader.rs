//! Curve config loader
//!
//! Loads a curve from a RON or JSON data file, with fallback to the default
//! curve. Validation happens here, once, so the engine can trust its input.

use std::fs;
use std::path::{Path, PathBuf};

use crate::progression::{ConfigError, CurveConfig};

/// File name looked up in the config directory
pub const CURVE_FILE_NAME: &str = "curve.ron";

/// Config loading error
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid curve: {0}")]
    Invalid(#[from] ConfigError),
}

/// Data file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Json,
}

impl Format {
    /// Pick the format from a file extension; unknown extensions are RON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Ron,
        }
    }
}

/// Parse and validate a curve from file contents
pub fn parse_curve(content: &str, format: Format) -> Result<CurveConfig, LoadError> {
    let config: CurveConfig = match format {
        Format::Ron => ron::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    config.validate()?;
    Ok(config)
}

/// Load and validate a curve from a data file
pub fn load_curve(path: &Path) -> Result<CurveConfig, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_curve(&content, Format::from_path(path))?;
    log::info!(
        "Loaded curve from {:?}: max_level={} base_xp={} growth_rate={}",
        path, config.max_level, config.base_xp, config.growth_rate
    );
    Ok(config)
}

/// Load a curve, falling back to the default curve on any error
pub fn load_curve_or_default(path: &Path) -> CurveConfig {
    load_curve(path).unwrap_or_else(|e| {
        log::warn!("{}. Using default curve.", e);
        CurveConfig::default()
    })
}

/// Location of the per-user curve file
pub fn default_config_path() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "xpcurve", "xpcurve")
        .map(|dirs| dirs.config_dir().join(CURVE_FILE_NAME))
}
