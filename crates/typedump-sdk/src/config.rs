use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use typedump_engine::DEFAULT_INDENT_WIDTH;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TYPEDUMP_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TYPEDUMP_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (`typedump/config.toml`)
/// 4. ~/.typedump.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("typedump").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".typedump.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// How a dump is produced and delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Return the text instead of printing it
    pub return_as_string: bool,
    /// Append the call trail below the value
    pub include_call_trail: bool,
    /// Frame the output in a titled box
    pub include_border: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            return_as_string: false,
            include_call_trail: false,
            include_border: true,
        }
    }
}

impl DumpConfig {
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path(None)?;
        Self::load_from(&config_path)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: DumpConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn returning(mut self) -> Self {
        self.return_as_string = true;
        self
    }

    pub fn with_border(mut self, include_border: bool) -> Self {
        self.include_border = include_border;
        self
    }

    pub fn with_call_trail(mut self, include_call_trail: bool) -> Self {
        self.include_call_trail = include_call_trail;
        self
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}
