//! blockpal_ui - geometry, colour and drawing primitives for the block palette
//!
//! The toolbox coordinator in the `blockpal` crate reasons about screen
//! rectangles and category colours; the block marker glyphs are emitted as
//! primitive shapes through the [`Canvas`] capability.

mod canvas;
mod color;
mod layout;

pub use canvas::{Canvas, Primitive, RecordingCanvas};
pub use color::{hsv_to_rgb, hue_to_rgb, Color, ColorError, HSV_SATURATION, HSV_VALUE};
pub use layout::{Point, Rectangle, Size};

