//! Formen-Modell: geschlossene Summe aller zeichenbaren Formen.
//!
//! Statt einer Vererbungshierarchie mit `_render`-Hook (wie im klassischen
//! Canvas-Vorbild) ist [`Shape`] ein getaggtes Summen-Typ; der Renderer
//! dispatcht per `match`. Stil-Parameter leben in expliziten Structs mit
//! dokumentierten Defaults statt in zur Laufzeit gemischten Keyword-Maps.

use rand::Rng;

use crate::core::crude::{BezierControl, crude_controls};
use crate::core::{Color, DrawError, Point};
use crate::shared::options::{DEFAULT_LINE_WIDTH, DEFAULT_SHAPE_COLOR, DEFAULT_TEXT_FACE};

/// Fuell- und Kontur-Stil fuer flaechige Formen.
///
/// `fill = None` unterdrueckt die Fuellung, `outline = None` die Kontur;
/// beides `None` ergibt eine unsichtbare Form.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    /// Fuellfarbe oder `None`
    pub fill: Option<Color>,
    /// Konturfarbe oder `None`
    pub outline: Option<Color>,
    /// Konturbreite in Geraete-Pixeln
    pub line_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::known(DEFAULT_SHAPE_COLOR)),
            outline: None,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl ShapeStyle {
    fn validate(&self) -> Result<(), DrawError> {
        ensure_non_negative("line_width", self.line_width)
    }
}

/// Strich-Stil fuer Linien-Formen (keine Fuellung).
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    /// Strichfarbe oder `None` (Linie wird dann uebersprungen)
    pub color: Option<Color>,
    /// Strichbreite in Geraete-Pixeln
    pub line_width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Some(Color::known(DEFAULT_SHAPE_COLOR)),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl StrokeStyle {
    fn validate(&self) -> Result<(), DrawError> {
        ensure_non_negative("line_width", self.line_width)
    }
}

fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), DrawError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DrawError::InvalidArgument { name, value })
    }
}

// ── Varianten ───────────────────────────────────────────────────────

/// Ein einzelner Punkt; rendert als gefuellter Kreis mit 1 Geraete-Pixel Radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub position: Point,
    pub color: Option<Color>,
}

impl Dot {
    /// Uebernimmt das Farb-Tag des Punkts, sonst die Default-Farbe.
    pub fn new(position: Point) -> Self {
        let color = position
            .color
            .clone()
            .unwrap_or_else(|| Color::known(DEFAULT_SHAPE_COLOR));
        Self {
            position,
            color: Some(color),
        }
    }
}

/// Eine gerade Linie zwischen zwei Punkten.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub p0: Point,
    pub p1: Point,
    pub stroke: StrokeStyle,
}

impl Line {
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            p0,
            p1,
            stroke: StrokeStyle::default(),
        }
    }

    pub fn styled(p0: Point, p1: Point, stroke: StrokeStyle) -> Result<Self, DrawError> {
        stroke.validate()?;
        Ok(Self { p0, p1, stroke })
    }
}

/// Eine "handgezeichnete" Linie: kubische Bezier-Kurve mit verrauschten
/// Endpunkten.
///
/// Die vier Bezier-Punkte werden einmalig bei Konstruktion gewuerfelt und
/// bleiben fuer die Lebensdauer der Form fix — ein erneutes Rendern
/// zeichnet exakt dieselbe Kurve.
#[derive(Debug, Clone, PartialEq)]
pub struct CrudeLine {
    pub p0: Point,
    pub p1: Point,
    pub crudity: f64,
    pub stroke: StrokeStyle,
    control: BezierControl,
}

impl CrudeLine {
    /// Wuerfelt die Geometrie mit dem Thread-RNG.
    pub fn new(p0: Point, p1: Point, crudity: f64) -> Result<Self, DrawError> {
        Self::with_rng(p0, p1, crudity, StrokeStyle::default(), &mut rand::thread_rng())
    }

    pub fn styled(
        p0: Point,
        p1: Point,
        crudity: f64,
        stroke: StrokeStyle,
    ) -> Result<Self, DrawError> {
        Self::with_rng(p0, p1, crudity, stroke, &mut rand::thread_rng())
    }

    /// Konstruktor mit injizierbarer Zufallsquelle (deterministische Tests).
    pub fn with_rng<R: Rng + ?Sized>(
        p0: Point,
        p1: Point,
        crudity: f64,
        stroke: StrokeStyle,
        rng: &mut R,
    ) -> Result<Self, DrawError> {
        stroke.validate()?;
        ensure_non_negative("crudity", crudity)?;
        let control = crude_controls(p0.to_vec2(), p1.to_vec2(), crudity, rng)?;
        Ok(Self {
            p0,
            p1,
            crudity,
            stroke,
            control,
        })
    }

    /// Die eingefrorenen Bezier-Punkte (logische Koordinaten).
    pub fn control(&self) -> &BezierControl {
        &self.control
    }
}

/// Ein Kreis um einen Mittelpunkt; unter nicht-uniformer Achsen-Skalierung
/// rendert er als Ellipse.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub style: ShapeStyle,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, DrawError> {
        Self::styled(center, radius, ShapeStyle::default())
    }

    pub fn styled(center: Point, radius: f64, style: ShapeStyle) -> Result<Self, DrawError> {
        style.validate()?;
        ensure_non_negative("radius", radius)?;
        Ok(Self {
            center,
            radius,
            style,
        })
    }
}

/// Ein achsenparalleles Rechteck, definiert durch zwei Eckpunkte.
///
/// Die Ecken duerfen in beliebiger Reihenfolge uebergeben werden; das
/// Geraete-Rechteck hat immer nicht-negative Breite und Hoehe.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub p0: Point,
    pub p1: Point,
    pub style: ShapeStyle,
}

impl Rectangle {
    pub fn new(p0: Point, p1: Point) -> Result<Self, DrawError> {
        Self::styled(p0, p1, ShapeStyle::default())
    }

    pub fn styled(p0: Point, p1: Point, style: ShapeStyle) -> Result<Self, DrawError> {
        style.validate()?;
        Ok(Self { p0, p1, style })
    }
}

/// Ein geschlossener Linienzug aus mindestens einem Punkt.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub style: ShapeStyle,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self, DrawError> {
        Self::styled(points, ShapeStyle::default())
    }

    pub fn styled(points: Vec<Point>, style: ShapeStyle) -> Result<Self, DrawError> {
        style.validate()?;
        if points.is_empty() {
            return Err(DrawError::EmptyPolygon);
        }
        Ok(Self { points, style })
    }

    /// Schwerpunkt als arithmetisches Mittel der Koordinaten.
    pub fn centroid(&self) -> Point {
        let n = self.points.len() as f64;
        let sum_x: f64 = self.points.iter().map(|p| p.x).sum();
        let sum_y: f64 = self.points.iter().map(|p| p.y).sum();
        Point::new(sum_x / n, sum_y / n)
    }
}

/// Ein Text an einer Ankerposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Point,
    pub text: String,
    /// CSS-Font-Shorthand, z.B. `"20px Times"`
    pub face: String,
    pub fill: Option<Color>,
}

impl Text {
    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            face: DEFAULT_TEXT_FACE.to_owned(),
            fill: Some(Color::known(DEFAULT_SHAPE_COLOR)),
        }
    }

    pub fn styled(
        position: Point,
        text: impl Into<String>,
        face: impl Into<String>,
        fill: Option<Color>,
    ) -> Self {
        Self {
            position,
            text: text.into(),
            face: face.into(),
            fill,
        }
    }
}

// ── Summe ───────────────────────────────────────────────────────────

/// Eine zeichenbare Form.
///
/// Formen werden per [`Drawing::add`](crate::Drawing::add) in genau eine
/// Drawing verschoben; ausserhalb einer Drawing gibt es keinen Render-Pfad.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Dot(Dot),
    Line(Line),
    CrudeLine(CrudeLine),
    Circle(Circle),
    Rectangle(Rectangle),
    Polygon(Polygon),
    Text(Text),
}

impl Shape {
    /// Logischer Anker (Schwerpunkt) der Form — informativ, nicht
    /// render-relevant.
    pub fn anchor(&self) -> Point {
        match self {
            Shape::Dot(s) => Point::new(s.position.x, s.position.y),
            Shape::Line(s) => midpoint(&s.p0, &s.p1),
            Shape::CrudeLine(s) => {
                let ctrl = s.control();
                Point::new((ctrl.a.x + ctrl.d.x) / 2.0, (ctrl.a.y + ctrl.d.y) / 2.0)
            }
            Shape::Circle(s) => Point::new(s.center.x, s.center.y),
            Shape::Rectangle(s) => midpoint(&s.p0, &s.p1),
            Shape::Polygon(s) => s.centroid(),
            Shape::Text(s) => Point::new(s.position.x, s.position.y),
        }
    }
}

fn midpoint(p0: &Point, p1: &Point) -> Point {
    Point::new((p0.x + p1.x) / 2.0, (p0.y + p1.y) / 2.0)
}

impl From<Dot> for Shape {
    fn from(s: Dot) -> Shape {
        Shape::Dot(s)
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Shape {
        Shape::Line(s)
    }
}

impl From<CrudeLine> for Shape {
    fn from(s: CrudeLine) -> Shape {
        Shape::CrudeLine(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Shape {
        Shape::Circle(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Shape {
        Shape::Rectangle(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Shape {
        Shape::Polygon(s)
    }
}

impl From<Text> for Shape {
    fn from(s: Text) -> Shape {
        Shape::Text(s)
    }
}
