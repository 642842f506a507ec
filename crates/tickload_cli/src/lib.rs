//! Profile loading and report rendering for the `tickload` binary.
//!
//! Kept as a library so the output pipeline can be tested without spawning
//! the binary.

use std::path::Path;

use anyhow::{Context, Result};
use tickload_core::{evaluate, CapacityProfile};

/// Load a [`CapacityProfile`] from a JSON file.
pub fn load_profile(path: &Path) -> Result<CapacityProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile file: {}", path.display()))?;
    let profile: CapacityProfile = serde_json::from_str(&raw)
        .with_context(|| format!("invalid profile JSON: {}", path.display()))?;
    Ok(profile)
}

/// Evaluate every throughput sample against the profile and render the
/// reports as one output block.
///
/// Text mode renders each report's five labelled lines followed by a blank
/// separator line; JSON mode emits one object per line.
pub fn render_reports(profile: &CapacityProfile, samples: &[f64], json: bool) -> Result<String> {
    let mut out = String::new();
    for &ops in samples {
        let report = evaluate(profile, ops)?;
        if json {
            out.push_str(&serde_json::to_string(&report)?);
            out.push('\n');
        } else {
            out.push_str(&report.to_string());
            out.push_str("\n\n");
        }
    }
    Ok(out)
}
