//! Drawing capability for decorative glyphs.
//!
//! Renderers implement [`Canvas`]; callers describe what to draw as a list of
//! [`Primitive`] shapes in local coordinates.

use crate::{Color, Point, Rectangle};

/// A primitive shape with its style.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Circle centred at `center`. `fill: None` draws the outline only.
    Circle {
        center: Point,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    },
    /// Filled rectangle tagged with a style class for the renderer.
    Rect { bounds: Rectangle, class: String },
    /// Image loaded from `href`, scaled into `bounds`.
    Image { bounds: Rectangle, href: String },
}

/// Something that can draw primitives.
pub trait Canvas {
    /// Draw one primitive.
    fn draw(&mut self, primitive: &Primitive);

    /// Draw every primitive in order.
    fn draw_all(&mut self, primitives: &[Primitive]) {
        for primitive in primitives {
            self.draw(primitive);
        }
    }
}

/// Canvas that only remembers what it was asked to draw.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub primitives: Vec<Primitive>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything drawn so far.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw(&mut self, primitive: &Primitive) {
        log::trace!("draw {:?}", primitive);
        self.primitives.push(primitive.clone());
    }
}
