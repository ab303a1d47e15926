//! xpcurve - Entry Point
//!
//! Prints the level state for XP totals, or the full threshold table, using
//! the same curve the backend grants XP with.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use xpcurve::data::{default_config_path, load_curve};
use xpcurve::progression::{compute_progress, CurveConfig, ProgressResult};

#[derive(Parser, Debug)]
#[command(name = "xpcurve", version, about = "Inspect XP progression on a level curve")]
struct Cli {
    /// Curve file (.ron or .json); defaults to the per-user config if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every level's requirement and cumulative XP
    #[arg(long)]
    table: bool,

    /// Print results as JSON lines
    #[arg(long)]
    json: bool,

    /// XP totals to evaluate
    #[arg(allow_negative_numbers = true)]
    xp: Vec<f64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    )
    .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), default_config_path())?;

    if cli.table {
        print_table(&config);
        return Ok(());
    }

    if cli.xp.is_empty() {
        bail!("no XP totals given (pass one or more values, or --table)");
    }

    for xp in &cli.xp {
        let progress = compute_progress(*xp, &config);
        if cli.json {
            println!("{}", serde_json::to_string(&progress)?);
        } else {
            println!("{}", describe(&progress));
        }
    }

    Ok(())
}

/// An explicit path must load; the per-user file is optional
fn resolve_config(explicit: Option<&Path>, user_file: Option<PathBuf>) -> Result<CurveConfig> {
    if let Some(path) = explicit {
        return load_curve(path).with_context(|| format!("loading curve from {:?}", path));
    }
    match user_file {
        Some(path) if path.exists() => {
            load_curve(&path).with_context(|| format!("loading curve from {:?}", path))
        }
        _ => {
            log::debug!("No curve file found, using defaults");
            Ok(CurveConfig::default())
        }
    }
}

fn describe(p: &ProgressResult) -> String {
    if p.max_level_reached {
        format!("{} XP: level {} (max)", p.total_xp, p.level)
    } else {
        format!(
            "{} XP: level {}, {}/{} into level, {} to next ({:.1}%)",
            p.total_xp, p.level, p.xp_into_level, p.xp_for_next, p.xp_needed,
            p.fraction() * 100.0
        )
    }
}

/// `(level, xp to clear it, cumulative xp to reach it)`; the cap row has 0 to clear
fn table_rows(config: &CurveConfig) -> Vec<(u32, u64, u64)> {
    let mut rows = Vec::with_capacity(config.max_level as usize);
    let mut cumulative: u64 = 0;
    for (level, xp) in config.thresholds() {
        rows.push((level, xp, cumulative));
        cumulative = cumulative.saturating_add(xp);
    }
    rows.push((config.max_level, 0, cumulative));
    rows
}

fn print_table(config: &CurveConfig) {
    println!("{:>6} {:>14} {:>16}", "level", "to_next", "cumulative");
    for (level, xp, cumulative) in table_rows(config) {
        if level == config.max_level {
            println!("{:>6} {:>14} {:>16}", level, "-", cumulative);
        } else {
            println!("{:>6} {:>14} {:>16}", level, xp, cumulative);
        }
    }
}
