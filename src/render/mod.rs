//! Rendering: Canvas-Abstraktion und Uebersetzung der Formen in Primitive.

mod recording;
mod shape_renderer;
mod surface;

pub use recording::{RecordingSurface, SurfaceOp};
pub use shape_renderer::{render_drawing, render_shape};
pub use surface::CanvasSurface;
