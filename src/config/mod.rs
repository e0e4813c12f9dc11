// SPDX-License-Identifier: MPL-2.0
//! Container-level configuration, including loading and saving settings
//! to a `settings.toml` file.
//!
//! The configuration covers where the toast stack is anchored, how many
//! toasts the renderer is handed at once, what happens to entries beyond
//! that ceiling, and the default per-toast options merged under every
//! [`ToastOptions`](crate::notification::ToastOptions) at creation.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config, Position};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Some(Position::BottomRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::animation::AnimationKind;
use crate::error::Result;
use crate::notification::{ToastDefaults, ToastKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Screen anchor for the toast stack.
///
/// Bottom anchors flip the visible slice so the newest toast stays adjacent
/// to the screen edge it entered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// Returns true for the three bottom-edge anchors.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        matches!(
            self,
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight
        )
    }
}

/// Policy for entries beyond the visible-count ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    /// Hidden entries keep their countdowns running and may expire without
    /// ever being shown.
    #[default]
    RunHidden,
    /// Hidden entries have their countdowns paused until they move into the
    /// visible window.
    DeferTimers,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub position: Option<Position>,
    #[serde(default)]
    pub max_toasts: Option<i64>,
    #[serde(default)]
    pub overflow: Option<OverflowPolicy>,
    #[serde(default)]
    pub default_kind: Option<ToastKind>,
    #[serde(default)]
    pub default_duration_ms: Option<i64>,
    #[serde(default)]
    pub default_dismissible: Option<bool>,
    #[serde(default)]
    pub default_animation: Option<AnimationKind>,
    #[serde(default)]
    pub default_pause_on_hover: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: Some(Position::default()),
            max_toasts: Some(defaults::DEFAULT_MAX_TOASTS as i64),
            overflow: Some(OverflowPolicy::default()),
            default_kind: Some(ToastKind::default()),
            default_duration_ms: Some(defaults::DEFAULT_DURATION_MS as i64),
            default_dismissible: Some(true),
            default_animation: Some(AnimationKind::default()),
            default_pause_on_hover: Some(true),
        }
    }
}

impl Config {
    /// Anchor to use, falling back to the default.
    #[must_use]
    pub fn resolved_position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    /// Visible-count ceiling clamped to the supported bounds.
    #[must_use]
    pub fn resolved_max_toasts(&self) -> usize {
        let raw = self
            .max_toasts
            .unwrap_or(defaults::DEFAULT_MAX_TOASTS as i64);
        usize::try_from(raw.max(defaults::MIN_MAX_TOASTS as i64))
            .unwrap_or(defaults::MIN_MAX_TOASTS)
            .min(defaults::MAX_MAX_TOASTS)
    }

    /// Returns true when the configured ceiling is outside the supported
    /// bounds and had to be clamped.
    #[must_use]
    pub fn max_toasts_clamped(&self) -> bool {
        self.max_toasts.is_some_and(|raw| {
            raw < defaults::MIN_MAX_TOASTS as i64 || raw > defaults::MAX_MAX_TOASTS as i64
        })
    }

    /// Overflow policy, falling back to the default.
    #[must_use]
    pub fn resolved_overflow(&self) -> OverflowPolicy {
        self.overflow.unwrap_or_default()
    }

    /// Per-toast defaults derived from this configuration.
    ///
    /// A negative default duration is floored at zero, which means "never
    /// auto-expires".
    #[must_use]
    pub fn toast_defaults(&self) -> ToastDefaults {
        let mut toast_defaults = ToastDefaults::default();
        if let Some(kind) = self.default_kind {
            toast_defaults.kind = kind;
        }
        if let Some(animation) = self.default_animation {
            toast_defaults.animation = animation;
        }
        if let Some(duration_ms) = self.default_duration_ms {
            toast_defaults.duration = std::time::Duration::from_millis(duration_ms.max(0) as u64);
        }
        if let Some(dismissible) = self.default_dismissible {
            toast_defaults.dismissible = dismissible;
        }
        if let Some(pause_on_hover) = self.default_pause_on_hover {
            toast_defaults.pause_on_hover = pause_on_hover;
        }
        toast_defaults
    }

    /// Returns true when the configured default duration is negative.
    #[must_use]
    pub fn duration_clamped(&self) -> bool {
        self.default_duration_ms.is_some_and(|ms| ms < 0)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
