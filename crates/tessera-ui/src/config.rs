//! View configuration.
//!
//! Every field has a default, so an empty environment yields an 800×600 text view.
//! `TESSERA_RENDER_MODE`, `TESSERA_WIDTH` and `TESSERA_HEIGHT` override them.

use std::fmt;

use tessera_engine::coords::Vec2;
use tessera_engine::render::{ParseRenderModeError, RenderMode};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

pub const ENV_RENDER_MODE: &str = "TESSERA_RENDER_MODE";
pub const ENV_WIDTH: &str = "TESSERA_WIDTH";
pub const ENV_HEIGHT: &str = "TESSERA_HEIGHT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidMode(ParseRenderModeError),
    /// A dimension variable that is not a positive integer.
    InvalidDimension { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMode(e) => write!(f, "{ENV_RENDER_MODE}: {e}"),
            ConfigError::InvalidDimension { var, value } => {
                write!(f, "{var}: expected a positive integer, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidMode(e) => Some(e),
            ConfigError::InvalidDimension { .. } => None,
        }
    }
}

impl From<ParseRenderModeError> for ConfigError {
    fn from(e: ParseRenderModeError) -> Self {
        ConfigError::InvalidMode(e)
    }
}

/// Surface size and render mode for a view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    pub mode: RenderMode,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, mode: RenderMode::default() }
    }
}

impl ViewConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads overrides through `lookup`. Unset or blank variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(mode) = get(ENV_RENDER_MODE) {
            config.mode = mode.parse()?;
        }
        if let Some(width) = get(ENV_WIDTH) {
            config.width = parse_dimension(ENV_WIDTH, &width)?;
        }
        if let Some(height) = get(ENV_HEIGHT) {
            config.height = parse_dimension(ENV_HEIGHT, &height)?;
        }
        Ok(config)
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Surface size in logical pixels.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Columns and rows of a character grid covering the surface, counting partial cells.
    pub fn cell_grid(&self, cell_size: Vec2) -> (usize, usize) {
        if !(cell_size.x > 0.0 && cell_size.y > 0.0) {
            return (0, 0);
        }
        let cols = (self.width as f32 / cell_size.x).ceil() as usize;
        let rows = (self.height as f32 / cell_size.y).ceil() as usize;
        (cols, rows)
    }
}

fn parse_dimension(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidDimension { var, value: value.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ViewConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ViewConfig::default());
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.mode, RenderMode::Text);
    }

    #[test]
    fn reads_every_override() {
        let config = ViewConfig::from_lookup(lookup(&[
            ("TESSERA_RENDER_MODE", "Graphics16"),
            ("TESSERA_WIDTH", "320"),
            ("TESSERA_HEIGHT", " 200 "),
        ]))
        .unwrap();
        assert_eq!(config, ViewConfig::default().with_size(320, 200).with_mode(RenderMode::Indexed));
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = ViewConfig::from_lookup(lookup(&[("TESSERA_WIDTH", "  ")])).unwrap();
        assert_eq!(config.width, DEFAULT_WIDTH);
    }

    #[test]
    fn bad_mode_is_an_error() {
        let err = ViewConfig::from_lookup(lookup(&[("TESSERA_RENDER_MODE", "vulkan")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMode(_)));
        assert!(err.to_string().starts_with("TESSERA_RENDER_MODE: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn bad_dimensions_are_errors() {
        for bad in ["0", "-4", "wide", "1.5"] {
            let err = ViewConfig::from_lookup(lookup(&[("TESSERA_HEIGHT", bad)])).unwrap_err();
            assert_eq!(err, ConfigError::InvalidDimension { var: "TESSERA_HEIGHT", value: bad.to_string() });
        }
    }

    #[test]
    fn cell_grid_counts_partial_cells() {
        let config = ViewConfig::default();
        assert_eq!(config.cell_grid(Vec2::new(8.0, 16.0)), (100, 38));
        assert_eq!(config.with_size(10, 10).cell_grid(Vec2::new(4.0, 4.0)), (3, 3));
        assert_eq!(config.cell_grid(Vec2::zero()), (0, 0));
    }
}
