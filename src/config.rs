// ABOUTME: Configuration module for the md-slides application
// ABOUTME: Provides font size and styling settings read from the environment

use crate::errors::{Result, SlidesError};
use log::warn;
use std::collections::HashMap;
use std::env;

pub const DEFAULT_LEVEL1_SIZE: u32 = 18;
pub const DEFAULT_LEVEL2_SIZE: u32 = 16;
pub const DEFAULT_LEVEL3_SIZE: u32 = 14;
pub const DEFAULT_FONT_SIZE: u32 = 12;
/// Largest point size a PowerPoint run accepts
pub const MAX_FONT_SIZE: u32 = 4000;

/// Rendering configuration, read once at startup and passed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub level1_size: u32,
    pub level2_size: u32,
    pub level3_size: u32,
    /// Size used for levels without an explicit entry
    pub default_size: u32,
    pub bold_level_one: bool,
    pub aspect_ratio: String, // "4:3" or "16:9"
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level1_size: DEFAULT_LEVEL1_SIZE,
            level2_size: DEFAULT_LEVEL2_SIZE,
            level3_size: DEFAULT_LEVEL3_SIZE,
            default_size: DEFAULT_FONT_SIZE,
            bold_level_one: true,
            aspect_ratio: "4:3".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from an explicit key-value map (useful for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        let size = |key: &str, default: u32| -> u32 {
            match vars.get(key) {
                Some(value) => parse_size(value).unwrap_or_else(|e| {
                    warn!("{}: {}. Using {} instead.", key, e, default);
                    default
                }),
                None => default,
            }
        };

        let bold_level_one = match vars.get("BOLD_LEVEL_ONE") {
            Some(value) => parse_bool(value).unwrap_or_else(|e| {
                warn!("BOLD_LEVEL_ONE: {}. Using {} instead.", e, defaults.bold_level_one);
                defaults.bold_level_one
            }),
            None => defaults.bold_level_one,
        };

        Self {
            level1_size: size("LEVEL_ONE_SIZE", defaults.level1_size),
            level2_size: size("LEVEL_TWO_SIZE", defaults.level2_size),
            level3_size: size("LEVEL_THREE_SIZE", defaults.level3_size),
            default_size: defaults.default_size,
            bold_level_one,
            aspect_ratio: vars
                .get("ASPECT_RATIO")
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.aspect_ratio),
        }
    }

    /// Apply command-line overrides on top of this config
    pub fn with_overrides(
        mut self,
        level1_size: Option<u32>,
        level2_size: Option<u32>,
        level3_size: Option<u32>,
        bold_level_one: Option<bool>,
        aspect_ratio: Option<String>,
    ) -> Self {
        if let Some(size) = level1_size {
            self.level1_size = size;
        }
        if let Some(size) = level2_size {
            self.level2_size = size;
        }
        if let Some(size) = level3_size {
            self.level3_size = size;
        }
        if let Some(bold) = bold_level_one {
            self.bold_level_one = bold;
        }
        if let Some(ratio) = aspect_ratio {
            self.aspect_ratio = ratio;
        }
        self
    }

    /// Font size in points for an outline level (level 0 is the top level),
    /// clamped to `1..=MAX_FONT_SIZE`
    pub fn font_size(&self, level: usize) -> u32 {
        let size = match level {
            0 => self.level1_size,
            1 => self.level2_size,
            2 => self.level3_size,
            _ => self.default_size,
        };
        size.clamp(1, MAX_FONT_SIZE)
    }

    /// Whether runs at this level are forced bold
    pub fn is_bold(&self, level: usize) -> bool {
        level == 0 && self.bold_level_one
    }
}

/// Parse a point size in `1..=MAX_FONT_SIZE`
pub fn parse_size(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err(SlidesError::ConfigError("font size must be positive".to_string())),
        Ok(size) if size > MAX_FONT_SIZE => Err(SlidesError::ConfigError(format!(
            "font size {} exceeds {}",
            size, MAX_FONT_SIZE
        ))),
        Ok(size) => Ok(size),
        Err(e) => Err(SlidesError::ConfigError(format!(
            "invalid font size {:?}: {}",
            value, e
        ))),
    }
}

/// Parse a boolean flag value
pub fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(SlidesError::ConfigError(format!(
            "invalid boolean {:?}",
            other
        ))),
    }
}
