use std::fmt;
use std::str::FromStr;

/// Render mode a view is bound to for its lifetime.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RenderMode {
    /// Character-cell output for consoles and terminals.
    #[default]
    Text,
    /// 16-color indexed pixel graphics.
    Indexed,
    /// GPU-accelerated rendering through a recorded display list.
    Accelerated,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [RenderMode::Text, RenderMode::Indexed, RenderMode::Accelerated];

    pub const fn as_str(self) -> &'static str {
        match self {
            RenderMode::Text => "text",
            RenderMode::Indexed => "indexed",
            RenderMode::Accelerated => "accelerated",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`RenderMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRenderModeError {
    pub input: String,
}

impl fmt::Display for ParseRenderModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown render mode '{}' (expected text, indexed or accelerated)",
            self.input
        )
    }
}

impl std::error::Error for ParseRenderModeError {}

impl FromStr for RenderMode {
    type Err = ParseRenderModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "console" => Ok(RenderMode::Text),
            "indexed" | "graphics16" => Ok(RenderMode::Indexed),
            "accelerated" | "gpu" => Ok(RenderMode::Accelerated),
            _ => Err(ParseRenderModeError { input: s.to_string() }),
        }
    }
}

/// Horizontal placement of a text run inside its bounds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
    /// Stretch inter-word gaps so the line fills the bounds. Single words align left.
    Justified,
}
