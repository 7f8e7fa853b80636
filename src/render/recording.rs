//! Aufzeichnende Canvas-Oberflaeche.
//!
//! Zeichnet jeden Primitiv-Aufruf als [`SurfaceOp`] auf. Tests pruefen
//! damit den Render-Vertrag; Host-Integrationen koennen die Op-Liste als
//! Kommando-Puffer an eine echte Canvas weiterreichen.

use crate::core::Color;
use crate::render::CanvasSurface;

/// Ein einzelner aufgezeichneter Primitiv-Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f64),
    SetFont(String),
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    StrokeRect { x: f64, y: f64, w: f64, h: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Fill,
    Stroke,
    BezierCurveTo { x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64 },
    Ellipse { x: f64, y: f64, rx: f64, ry: f64, rotation: f64, theta0: f64, theta1: f64 },
    FillArc { x: f64, y: f64, r: f64, theta0: f64, theta1: f64 },
    StrokeArc { x: f64, y: f64, r: f64, theta0: f64, theta1: f64 },
    FillText { text: String, x: f64, y: f64 },
    Flush,
}

/// [`CanvasSurface`], die alle Aufrufe in Reihenfolge sammelt.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle aufgezeichneten Aufrufe in Ausfuehrungsreihenfolge.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Verwirft die Aufzeichnung.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Zaehlt Ops, auf die das Praedikat passt.
    pub fn count_where(&self, predicate: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }

    /// Erster Op, auf den das Praedikat passt.
    pub fn find(&self, predicate: impl Fn(&SurfaceOp) -> bool) -> Option<&SurfaceOp> {
        self.ops.iter().find(|op| predicate(op))
    }
}

impl CanvasSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn set_fill_style(&mut self, color: &Color) {
        self.ops.push(SurfaceOp::SetFillStyle(color.as_str().to_owned()));
    }

    fn set_stroke_style(&mut self, color: &Color) {
        self.ops
            .push(SurfaceOp::SetStrokeStyle(color.as_str().to_owned()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::SetLineWidth(width));
    }

    fn set_font(&mut self, face: &str) {
        self.ops.push(SurfaceOp::SetFont(face.to_owned()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(SurfaceOp::FillRect { x, y, w, h });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(SurfaceOp::StrokeRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.ops
            .push(SurfaceOp::BezierCurveTo { x1, y1, x2, y2, x3, y3 });
    }

    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        theta0: f64,
        theta1: f64,
    ) {
        self.ops.push(SurfaceOp::Ellipse {
            x,
            y,
            rx,
            ry,
            rotation,
            theta0,
            theta1,
        });
    }

    fn fill_arc(&mut self, x: f64, y: f64, r: f64, theta0: f64, theta1: f64) {
        self.ops.push(SurfaceOp::FillArc { x, y, r, theta0, theta1 });
    }

    fn stroke_arc(&mut self, x: f64, y: f64, r: f64, theta0: f64, theta1: f64) {
        self.ops
            .push(SurfaceOp::StrokeArc { x, y, r, theta0, theta1 });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_owned(),
            x,
            y,
        });
    }

    fn flush(&mut self) {
        self.ops.push(SurfaceOp::Flush);
    }
}
