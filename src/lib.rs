//! Retained-Mode 2D-Zeichenflaeche.
//!
//! Eine [`Drawing`] haelt eine geordnete Liste von Formen, die in einem frei
//! waehlbaren logischen Koordinatensystem definiert sind, und rendert sie
//! ueber eine affine Fenster-Transformation auf eine Raster-Canvas.
//! Die Anzeige selbst (Fenster, Notebook, PNG-Export) ist Sache des Hosts
//! und haengt hinter dem [`CanvasSurface`]-Trait.
//!
//! ```
//! use zeichnung::{Circle, Drawing, Point, RecordingSurface};
//!
//! let mut d = Drawing::new(200, 200)?;
//! d.add(Circle::new(Point::new(100.0, 100.0), 40.0)?.into());
//! d.set_coords(0.0, 0.0, 1.0, 1.0)?; // reskaliert ohne die Formen anzufassen
//! let mut surface = RecordingSurface::new();
//! d.render(&mut surface);
//! # Ok::<(), zeichnung::DrawError>(())
//! ```

pub mod core;
pub mod render;
pub mod shared;

pub use crate::core::{
    BezierControl, Circle, Color, CoordinateMapper, CrudeLine, Dot, DrawError, Drawing, Line,
    Point, Polygon, Rectangle, Shape, ShapeStyle, StrokeStyle, Text,
};
pub use crate::render::{CanvasSurface, RecordingSurface, SurfaceOp, render_drawing, render_shape};
pub use crate::shared::DrawingOptions;
