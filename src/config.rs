//! Configuration file support.
//!
//! Workspace options are passed explicitly to the toolbox and its flyout
//! instead of being read from shared global state. The whole configuration
//! can be exported and imported as JSON.

use blockpal_ui::Size;
use serde::{Deserialize, Serialize};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Screen edge the toolbox is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolboxPosition {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl ToolboxPosition {
    /// Top and bottom toolboxes lay out horizontally; left and right vertically.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, ToolboxPosition::Top | ToolboxPosition::Bottom)
    }

    /// The same edge in a right-to-left workspace.
    pub fn mirrored(&self) -> Self {
        match self {
            ToolboxPosition::Left => ToolboxPosition::Right,
            ToolboxPosition::Right => ToolboxPosition::Left,
            other => *other,
        }
    }
}

/// Workspace options consumed by the toolbox, its flyout and block markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceOptions {
    /// Base path that media file names are appended to
    #[serde(default = "default_media_path")]
    pub media_path: String,

    /// Right-to-left layout; mirrors a left or right toolbox
    #[serde(default)]
    pub rtl: bool,

    /// Edge the toolbox sits on in a left-to-right workspace. Top and bottom
    /// imply a horizontal layout.
    #[serde(default)]
    pub toolbox_position: ToolboxPosition,

    /// Whether the flyout closes after a block is taken from it
    #[serde(default)]
    pub flyout_auto_close: bool,

    /// Initial viewport size
    #[serde(default = "default_viewport")]
    pub viewport: Size,
}

fn default_media_path() -> String {
    "./media/".to_string()
}

fn default_viewport() -> Size {
    Size::new(1280.0, 720.0)
}

impl WorkspaceOptions {
    /// Edge the toolbox actually sits on, after right-to-left mirroring.
    pub fn effective_position(&self) -> ToolboxPosition {
        if self.rtl {
            self.toolbox_position.mirrored()
        } else {
            self.toolbox_position
        }
    }

    /// Full path of a media file.
    pub fn media(&self, file_name: &str) -> String {
        format!("{}{}", self.media_path, file_name)
    }
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            media_path: default_media_path(),
            rtl: false,
            toolbox_position: ToolboxPosition::default(),
            flyout_auto_close: false,
            viewport: default_viewport(),
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Workspace options
    #[serde(default)]
    pub workspace: WorkspaceOptions,
}

/// User preferences section of the config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
            workspace: WorkspaceOptions::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "blockpal-config.json"
    }

    /// Default config file location: the platform config directory, or
    /// `~/.config` where there is none.
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|dir| dir.join("blockpal").join(Self::default_filename()))
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }
        Self::load(&path)
            .map_err(|e| log::warn!("Failed to load config file {:?}: {}", path, e))
            .ok()
    }

    /// Load configuration from a file.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
