//! External data
//!
//! Curve definitions loaded from data files.

pub mod loader;

pub use loader::{
    LoadError, Format, CURVE_FILE_NAME,
    load_curve, load_curve_or_default, parse_curve, default_config_path,
};
