use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::camera::CubicBezier;

/// Overlay tuning knobs. The defaults are the shipped behavior; the config
/// file only exists for people who want a different feel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub focus_duration_ms: u64,
    pub focus_zoom: f64,
    pub ease_p1x: f64,
    pub ease_p1y: f64,
    pub ease_p2x: f64,
    pub ease_p2y: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            focus_duration_ms: 600,
            focus_zoom: 0.5,
            ease_p1x: 0.4,
            ease_p1y: 0.0,
            ease_p2x: 0.2,
            ease_p2y: 1.0,
        }
    }
}

impl OverlayConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.focus_duration_ms)
    }

    pub fn ease(&self) -> CubicBezier {
        CubicBezier::new(self.ease_p1x, self.ease_p1y, self.ease_p2x, self.ease_p2y)
    }
}

fn config_file_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "canvas-search")?;
    Some(proj.config_dir().join("overlay.toml"))
}

pub fn load_or_default() -> OverlayConfig {
    let Some(path) = config_file_path() else {
        return OverlayConfig::default();
    };
    load_or_default_from_path(&path)
}

fn load_or_default_from_path(path: &Path) -> OverlayConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return OverlayConfig::default();
    };
    toml::from_str(&contents).unwrap_or_else(|_| OverlayConfig::default())
}

pub fn save(cfg: &OverlayConfig) -> anyhow::Result<()> {
    let Some(path) = config_file_path() else {
        return Err(anyhow::anyhow!("no config directory available"));
    };
    save_to_path(cfg, &path)
}

fn save_to_path(cfg: &OverlayConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let data = toml::to_string_pretty(cfg).context("failed to serialize overlay config")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write overlay config {}", path.display()))?;
    Ok(())
}
