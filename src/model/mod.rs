//! Data models for palette categories.

mod category;
mod content;

pub use category::{Category, CategoryBubble, Contents};
pub use content::{ContentItem, ContentKind};
