//! Core-Domaenentypen: Punkt, Farbe, Koordinaten-Mapper, Formen, Drawing.

pub mod color;
pub mod crude;
pub mod drawing;
pub mod error;
pub mod mapper;
pub mod point;
pub mod shape;

pub use color::Color;
pub use crude::{BezierControl, crude_controls, sample_unit_disk};
pub use drawing::Drawing;
pub use error::DrawError;
pub use mapper::CoordinateMapper;
pub use point::Point;
pub use shape::{Circle, CrudeLine, Dot, Line, Polygon, Rectangle, Shape, ShapeStyle, StrokeStyle, Text};
