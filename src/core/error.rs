//! Fehlertypen des Zeichen-Kerns.

use thiserror::Error;

/// Fehler beim Konstruieren von Formen, Farben oder Koordinatenfenstern.
///
/// Alle Fehler treten zur Konstruktionszeit auf; der Render-Pfad selbst
/// ist total und erzeugt keine Fehler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// Koordinatenfenster mit Null-Spannweite auf mindestens einer Achse.
    /// Die Abbildung waere eine Division durch Null.
    #[error("Koordinatenfenster degeneriert: x-Spanne {x_span}, y-Spanne {y_span}")]
    DegenerateWindow { x_span: f64, y_span: f64 },

    /// CrudeLine mit identischen Endpunkten: die Richtung der Grundlinie
    /// ist undefiniert (0/0 beim Normalisieren).
    #[error("CrudeLine mit identischen Endpunkten ({x}, {y}): Richtung undefiniert")]
    DegenerateLine { x: f64, y: f64 },

    /// Farb-String ist weder benannte Farbe noch `#rrggbb` / `#rrggbbaa`.
    #[error("Ungueltiger Farb-String: {0:?}")]
    InvalidColor(String),

    /// Numerisches Argument ist nicht endlich oder ausserhalb des
    /// gueltigen Bereichs.
    #[error("Ungueltiges Argument {name}: {value}")]
    InvalidArgument { name: &'static str, value: f64 },

    /// Polygon ohne Punkte.
    #[error("Polygon benoetigt mindestens einen Punkt")]
    EmptyPolygon,
}
