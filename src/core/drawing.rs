//! Die Drawing-Szene: geordnete Formen, Hintergrund/Rahmen, Koordinatenfenster.

use crate::core::{CoordinateMapper, Color, DrawError, Shape};
use crate::render::{CanvasSurface, render_drawing};
use crate::shared::DrawingOptions;

/// Eine Zeichnung aus Formen.
///
/// Formen werden per [`add`](Self::add) in Einfuege-Reihenfolge angehaengt
/// (= Mal-Reihenfolge, hinten nach vorn) und nie entfernt oder umsortiert.
/// Das Koordinatenfenster laesst sich per [`set_coords`](Self::set_coords)
/// zwischen Render-Passes austauschen, ohne die Formen anzufassen.
///
/// Eine Drawing besitzt ihre Formen exklusiv; `add` uebernimmt sie per
/// Move. Single-threaded: konkurrierende `add`- oder `render`-Aufrufe
/// muss der Aufrufer serialisieren.
#[derive(Debug, Clone)]
pub struct Drawing {
    width: u32,
    height: u32,
    /// Hintergrundfarbe oder `None` (kein Hintergrund)
    pub background: Option<Color>,
    /// Rahmenfarbe oder `None` (kein Rahmen)
    pub border: Option<Color>,
    /// Rahmenbreite in Pixeln
    pub border_width: f64,
    shapes: Vec<Shape>,
    mapper: CoordinateMapper,
}

impl Drawing {
    /// Erstellt eine Drawing mit Default-Optionen (schwarzer Hintergrund,
    /// grauer Rahmen).
    pub fn new(width: u32, height: u32) -> Result<Self, DrawError> {
        Self::with_options(width, height, &DrawingOptions::default())
    }

    /// Erstellt eine Drawing mit expliziten Optionen.
    pub fn with_options(
        width: u32,
        height: u32,
        options: &DrawingOptions,
    ) -> Result<Self, DrawError> {
        if width == 0 {
            return Err(DrawError::InvalidArgument {
                name: "width",
                value: 0.0,
            });
        }
        if height == 0 {
            return Err(DrawError::InvalidArgument {
                name: "height",
                value: 0.0,
            });
        }
        if !(options.border_width.is_finite() && options.border_width >= 0.0) {
            return Err(DrawError::InvalidArgument {
                name: "border_width",
                value: options.border_width,
            });
        }
        Ok(Self {
            width,
            height,
            background: options.background.clone(),
            border: options.border.clone(),
            border_width: options.border_width,
            shapes: Vec::new(),
            mapper: CoordinateMapper::new(f64::from(width), f64::from(height))?,
        })
    }

    /// Haengt eine Form an (Mal-Reihenfolge = Einfuege-Reihenfolge).
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Ersetzt das logische Koordinatenfenster (reskaliert ohne die
    /// Formen anzufassen). Null-Spannweite ist ein Domaenen-Fehler.
    pub fn set_coords(
        &mut self,
        x_ll: f64,
        y_ll: f64,
        x_ur: f64,
        y_ur: f64,
    ) -> Result<(), DrawError> {
        self.mapper.set_coords(x_ll, y_ll, x_ur, y_ur)
    }

    /// Rendert Hintergrund, Rahmen und alle Formen auf die Oberflaeche.
    ///
    /// Blockierende Folge von Primitiv-Aufrufen; kein Rollback bei
    /// Teil-Fehlern der Oberflaeche.
    pub fn render(&self, surface: &mut dyn CanvasSurface) {
        render_drawing(self, surface);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alle Formen in Mal-Reihenfolge.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Der aktuelle Koordinaten-Mapper.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Line, Point};

    #[test]
    fn test_null_dimension_ist_fehler() {
        assert!(Drawing::new(0, 100).is_err());
        assert!(Drawing::new(100, 0).is_err());
    }

    #[test]
    fn test_add_haelt_einfuege_reihenfolge() {
        let mut d = Drawing::new(100, 100).unwrap();
        d.add(Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).into());
        d.add(Line::new(Point::new(2.0, 2.0), Point::new(3.0, 3.0)).into());
        assert_eq!(d.shapes().len(), 2);
        match &d.shapes()[0] {
            Shape::Line(line) => assert_eq!(line.p0, Point::new(0.0, 0.0)),
            other => panic!("unerwartete Form: {other:?}"),
        }
    }

    #[test]
    fn test_set_coords_validiert() {
        let mut d = Drawing::new(100, 100).unwrap();
        assert!(d.set_coords(0.0, 0.0, 1.0, 1.0).is_ok());
        assert!(matches!(
            d.set_coords(0.0, 0.0, 1.0, 0.0),
            Err(DrawError::DegenerateWindow { .. })
        ));
    }

    #[test]
    fn test_negative_rahmenbreite_ist_fehler() {
        let options = DrawingOptions {
            border_width: -2.0,
            ..DrawingOptions::default()
        };
        assert!(Drawing::with_options(10, 10, &options).is_err());
    }
}
