//! Blockpal - category toolbox and flyout state for a block editor
//!
//! Keeps the selected category, the flyout's shown/hidden state and the
//! block delete area consistent across category clicks, visibility toggles,
//! role switches and window resizes. Also carries the role/capability model
//! and the per-block status markers that depend on it.

pub mod authority;
pub mod category_menu;
pub mod config;
pub mod constants;
pub mod error;
pub mod flyout;
pub mod marker;
pub mod model;
pub mod role;
pub mod toolbox;
pub mod tree;

pub use authority::{has_authority, Capability};
pub use config::{AppConfig, ConfigError, ToolboxPosition, WorkspaceOptions};
pub use error::ToolboxError;
pub use flyout::{Flyout, FlyoutEntry, FlyoutOptions, StackFlyout};
pub use marker::{BlockMarker, BlockMarkers, MarkerChange, MarkerError};
pub use role::Role;
pub use toolbox::Toolbox;
pub use tree::ToolboxTree;
