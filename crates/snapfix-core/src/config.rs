//! Configuration loading for Snapfix.
//!
//! Loaded from `~/.config/snapfix/config.toml`. Missing sections fall back
//! to defaults thanks to `#[serde(default)]`. The snap tolerances live here
//! because they are calibration values for the host window manager's snap
//! geometry, not fixed business rules.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::snap::SnapTolerances;

/// Top-level configuration for Snapfix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snap classification and adjustment settings.
    pub snap: SnapConfig,
    /// Auto-hidden taskbar reveal settings.
    pub reveal: RevealConfig,
    /// File logging settings.
    pub log: LogConfig,
}

/// Snap classification and adjustment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Edge and midline proximity tolerances, in pixels.
    pub tolerances: SnapTolerances,
    /// Delay before reading geometry after a move/resize event, in
    /// milliseconds. Geometry read synchronously inside the event may be
    /// stale; the adjustment waits for the host's layout pass to settle.
    pub settle_ms: u64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            tolerances: SnapTolerances::default(),
            settle_ms: 50,
        }
    }
}

/// Auto-hidden taskbar reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Pointer distance from the docked screen edge that triggers a
    /// reveal, in pixels.
    pub proximity: f64,
    /// Pause between the summon chord and the dismissal chord, in
    /// milliseconds. The shell needs a moment to animate the taskbar in.
    pub pause_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            proximity: 2.0,
            pause_ms: 50,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// Prevents negative tolerances, runaway settle delays, and reveal
    /// proximity values large enough to fire on normal pointer movement.
    pub fn validate(&mut self) {
        let tol = &mut self.snap.tolerances;
        tol.outward = tol.outward.clamp(0.0, 32.0);
        tol.inward = tol.inward.clamp(0.0, 32.0);
        tol.midline = tol.midline.clamp(0.0, 64.0);
        self.snap.settle_ms = self.snap.settle_ms.min(1000);
        self.reveal.proximity = self.reveal.proximity.clamp(0.0, 16.0);
        self.reveal.pause_ms = self.reveal.pause_ms.min(1000);
    }
}

/// Returns the config directory: `~/.config/snapfix/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("snapfix"))
}

/// Returns the config file path: `~/.config/snapfix/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing what
/// went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are reported
/// on stderr and then ignored.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if is_file_not_found(&e) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("cannot find the path")
        || e.contains("The system cannot find")
        || e.contains("No such file")
}

/// Generates the default `config.toml` with comments explaining every
/// option. Written by `snapfix init`.
pub fn template() -> String {
    r##"# Snapfix configuration.
# Delete any line to fall back to its default.

[snap]
# Delay (ms) between a move/resize event and the padding adjustment.
# Geometry read immediately after a resize can be stale.
settle_ms = 50

[snap.tolerances]
# How far a snapped window may overshoot a working-area edge (pixels).
# Accounts for the invisible drop-shadow border.
outward = 8.1
# How far it may undershoot an edge and still count as snapped.
inward = 1.1
# Distance from the horizontal midpoint accepted for half-snaps.
midline = 10.0

[reveal]
# Pointer distance (pixels) from the docked edge that summons an
# auto-hidden taskbar.
proximity = 2.0
# Pause (ms) between the summon and dismissal key chords.
pause_ms = 50

[log]
# File logging to ~/.config/snapfix/logs/snapfix.log
enabled = false
# Minimum level: "debug", "info", "warn", or "error".
level = "info"
# Rotate the log file when it exceeds this many megabytes.
max_file_mb = 10
"##
    .to_string()
}
