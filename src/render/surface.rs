//! Abstrakte Canvas-Oberflaeche.

use crate::core::Color;

/// Minimaler Primitiv-Vertrag einer Raster-Canvas (HTML5-Canvas-artig).
///
/// Der Kern behandelt die Oberflaeche als Zustandsmaschine: Fuell-/Strich-
/// Stil und Linienbreite sind ambienter Zustand, den jede Form vor
/// Benutzung selbst setzt. Es gibt keinen Reset zwischen Formen, und der
/// Kern verlaesst sich nicht auf einen sauberen Zustand beim Einstieg.
///
/// Alle Koordinaten sind Geraete-Pixel; die logisch→Geraete-Abbildung
/// passiert vollstaendig im Kern.
pub trait CanvasSurface {
    /// Loescht die gesamte Flaeche.
    fn clear(&mut self);

    // ── Paint-Zustand ───────────────────────────────────────────────
    fn set_fill_style(&mut self, color: &Color);
    fn set_stroke_style(&mut self, color: &Color);
    fn set_line_width(&mut self, width: f64);
    /// Setzt den Font als CSS-Shorthand, z.B. `"20px Times"`.
    fn set_font(&mut self, face: &str);

    // ── Rechtecke ───────────────────────────────────────────────────
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    // ── Pfade ───────────────────────────────────────────────────────
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    /// Kubisches Bezier-Segment ab dem aktuellen Pfad-Punkt.
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);
    /// Ellipsen-Segment als Pfad-Operation (danach `fill()`/`stroke()`).
    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64, theta0: f64, theta1: f64);

    // ── Kreisboegen ─────────────────────────────────────────────────
    fn fill_arc(&mut self, x: f64, y: f64, r: f64, theta0: f64, theta1: f64);
    fn stroke_arc(&mut self, x: f64, y: f64, r: f64, theta0: f64, theta1: f64);

    // ── Text ────────────────────────────────────────────────────────
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Puffer-Hinweis am Ende eines Render-Passes. Die Korrektheit darf
    /// nicht davon abhaengen; Default ist ein No-op.
    fn flush(&mut self) {}
}
