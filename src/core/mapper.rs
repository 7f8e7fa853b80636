//! Affine Abbildung zwischen logischem Koordinatenfenster und Geraete-Pixeln.

use crate::core::DrawError;

/// Bildet ein logisches Koordinatenfenster auf ein Geraete-Rechteck ab.
///
/// Das logische Fenster ist durch die Ecken unten-links und oben-rechts
/// gegeben; das Geraete-Rechteck durch seine Pixel-Groesse. Bis zum ersten
/// [`set_coords`](Self::set_coords) gilt das Default-Fenster
/// `(0, height, width, 0)` — also die Identitaets-Abbildung in Pixeln mit
/// nach unten wachsendem y.
///
/// Konstruktion und `set_coords` validieren die Spannweiten, daher sind
/// die Abbildungsfunktionen selbst total und unfehlbar.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapper {
    x_ll: f64,
    y_ll: f64,
    x_ur: f64,
    y_ur: f64,
    width_px: f64,
    height_px: f64,
}

impl CoordinateMapper {
    /// Erstellt einen Mapper mit Default-Fenster (Pixel-Identitaet).
    pub fn new(width_px: f64, height_px: f64) -> Result<Self, DrawError> {
        if !(width_px.is_finite() && width_px > 0.0) {
            return Err(DrawError::InvalidArgument {
                name: "width_px",
                value: width_px,
            });
        }
        if !(height_px.is_finite() && height_px > 0.0) {
            return Err(DrawError::InvalidArgument {
                name: "height_px",
                value: height_px,
            });
        }
        Ok(Self {
            x_ll: 0.0,
            y_ll: height_px,
            x_ur: width_px,
            y_ur: 0.0,
            width_px,
            height_px,
        })
    }

    /// Ersetzt das logische Fenster.
    ///
    /// Null-Spannweite auf einer Achse ist ein Domaenen-Fehler; der Mapper
    /// bleibt dann unveraendert.
    pub fn set_coords(
        &mut self,
        x_ll: f64,
        y_ll: f64,
        x_ur: f64,
        y_ur: f64,
    ) -> Result<(), DrawError> {
        let x_span = x_ur - x_ll;
        let y_span = y_ur - y_ll;
        if x_span == 0.0 || y_span == 0.0 || !x_span.is_finite() || !y_span.is_finite() {
            return Err(DrawError::DegenerateWindow { x_span, y_span });
        }
        self.x_ll = x_ll;
        self.y_ll = y_ll;
        self.x_ur = x_ur;
        self.y_ur = y_ur;
        Ok(())
    }

    /// Bildet einen logischen Punkt auf Geraete-Koordinaten ab.
    pub fn to_device(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = (x - self.x_ll) * self.width_px / (self.x_ur - self.x_ll);
        let dy = (self.y_ur - y) * self.height_px / (self.y_ur - self.y_ll);
        (dx, dy)
    }

    /// Skaliert eine logische Laenge (keinen Punkt) ueber die x-Achse.
    ///
    /// Nutzt den Betrag der Fenster-Spanne, damit Radien und Breiten nie
    /// das Vorzeichen wechseln.
    pub fn to_device_size(&self, len: f64) -> f64 {
        len * self.width_px / (self.x_ur - self.x_ll).abs()
    }

    /// Skaliert eine logische Laenge pro Achse (fuer Radien/Extents).
    pub fn to_device_size_xy(&self, dx: f64, dy: f64) -> (f64, f64) {
        (
            dx * self.width_px / (self.x_ur - self.x_ll).abs(),
            dy * self.height_px / (self.y_ur - self.y_ll).abs(),
        )
    }

    /// Geraete-Groesse in Pixeln (Breite, Hoehe).
    pub fn device_size(&self) -> (f64, f64) {
        (self.width_px, self.height_px)
    }

    /// Das aktuelle logische Fenster `(x_ll, y_ll, x_ur, y_ur)`.
    pub fn window(&self) -> (f64, f64, f64, f64) {
        (self.x_ll, self.y_ll, self.x_ur, self.y_ur)
    }
}
