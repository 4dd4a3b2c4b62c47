//! Per-block status markers.
//!
//! A marker is a small glyph drawn on a block to show that it is locked,
//! hidden from students, or protected from deletion. Setting or clearing a
//! marker requires the matching capability on the acting role.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use blockpal_ui::{Canvas, Color, Point, Primitive, Rectangle, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::authority::{has_authority, Capability};
use crate::constants::media;
use crate::role::Role;

/// Radius of the marker disc.
const DISC_RADIUS: f32 = 8.0;

/// Size of the marker's (unused) detail bubble.
const BUBBLE_SIZE: Size = Size {
    width: 160.0,
    height: 80.0,
};

/// The closed set of block markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockMarker {
    Lock,
    Invisible,
    PreventDeletion,
}

impl BlockMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockMarker::Lock => "lock",
            BlockMarker::Invisible => "invisible",
            BlockMarker::PreventDeletion => "prevent-deletion",
        }
    }

    /// Capability a role needs to set or clear this marker.
    pub fn required_capability(&self) -> Capability {
        match self {
            BlockMarker::Lock | BlockMarker::PreventDeletion => Capability::Lock,
            BlockMarker::Invisible => Capability::Invisible,
        }
    }

    /// Shapes making up the glyph, in a 16×16 local frame.
    pub fn glyph(&self, media_path: &str) -> Vec<Primitive> {
        let mut shapes = vec![Primitive::Circle {
            center: Point::new(DISC_RADIUS, DISC_RADIUS),
            radius: DISC_RADIUS,
            fill: Some(Color::RED),
            stroke: Some(Color::WHITE),
        }];

        match self {
            BlockMarker::Lock => {
                // Shackle and body of a padlock
                shapes.push(Primitive::Circle {
                    center: Point::new(8.0, 6.0),
                    radius: 3.0,
                    fill: None,
                    stroke: Some(Color::WHITE),
                });
                shapes.push(Primitive::Rect {
                    bounds: Rectangle::new(4.0, 7.0, 8.0, 5.0),
                    class: "blocklyIconSymbol".to_string(),
                });
            }
            BlockMarker::Invisible => shapes.push(Primitive::Image {
                bounds: Rectangle::new(1.5, 1.5, 13.0, 13.0),
                href: format!("{}{}", media_path, media::INVISIBLE_ICON),
            }),
            BlockMarker::PreventDeletion => shapes.push(Primitive::Image {
                bounds: Rectangle::new(2.0, 2.0, 12.0, 12.0),
                href: format!("{}{}", media_path, media::PREVENT_DELETION_ICON),
            }),
        }
        shapes
    }

    pub fn bubble_size(&self) -> Size {
        BUBBLE_SIZE
    }

    /// Markers have no bubble to open; this does nothing.
    pub fn set_visible(&self, _visible: bool) {}
}

impl fmt::Display for BlockMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`BlockMarkers::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerChange {
    Added,
    Removed,
    Unchanged,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("Role '{role}' lacks the '{capability}' capability")]
    NotAuthorized { role: String, capability: Capability },
}

/// Marker sets keyed by block id.
#[derive(Debug, Clone, Default)]
pub struct BlockMarkers {
    blocks: HashMap<String, BTreeSet<BlockMarker>>,
}

impl BlockMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (`enabled`) or clear a marker on a block on behalf of `role`.
    pub fn apply(
        &mut self,
        role: &Role,
        block_id: &str,
        marker: BlockMarker,
        enabled: bool,
    ) -> Result<MarkerChange, MarkerError> {
        let capability = marker.required_capability();
        if !has_authority(role, capability.as_str()) {
            log::warn!(
                "Role '{}' may not change '{}' on block {}",
                role.id(),
                marker,
                block_id
            );
            return Err(MarkerError::NotAuthorized {
                role: role.id().to_string(),
                capability,
            });
        }

        let change = if enabled {
            let added = self
                .blocks
                .entry(block_id.to_string())
                .or_default()
                .insert(marker);
            if added {
                MarkerChange::Added
            } else {
                MarkerChange::Unchanged
            }
        } else {
            let Some(set) = self.blocks.get_mut(block_id) else {
                return Ok(MarkerChange::Unchanged);
            };
            if !set.remove(&marker) {
                return Ok(MarkerChange::Unchanged);
            }
            if set.is_empty() {
                self.blocks.remove(block_id);
            }
            MarkerChange::Removed
        };

        log::debug!("Marker '{}' on block {}: {:?}", marker, block_id, change);
        Ok(change)
    }

    /// Markers on a block, in a stable order.
    pub fn markers(&self, block_id: &str) -> Vec<BlockMarker> {
        self.blocks
            .get(block_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn has(&self, block_id: &str, marker: BlockMarker) -> bool {
        self.blocks
            .get(block_id)
            .is_some_and(|set| set.contains(&marker))
    }

    /// Forget a deleted block. Returns the markers it carried.
    pub fn remove_block(&mut self, block_id: &str) -> Vec<BlockMarker> {
        self.blocks
            .remove(block_id)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default()
    }

    /// Draw every marker of a block onto `canvas`.
    pub fn draw(&self, block_id: &str, canvas: &mut dyn Canvas, media_path: &str) {
        for marker in self.markers(block_id) {
            canvas.draw_all(&marker.glyph(media_path));
        }
    }
}
