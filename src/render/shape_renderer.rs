//! Uebersetzt Formen und Drawings in Geraete-Primitive.
//!
//! Render-Vertrag pro Form: jeder logische Punkt laeuft durch den Mapper,
//! jede Laenge durch `to_device_size`; `fill = None` unterdrueckt die
//! Fuellung, `outline = None` die Kontur. Paint-Zustand der Oberflaeche
//! wird nie vorausgesetzt — jede Form setzt, was sie braucht.

use std::f64::consts::TAU;

use crate::core::{
    Circle, CoordinateMapper, CrudeLine, Dot, Drawing, Line, Point, Polygon, Rectangle, Shape,
    Text,
};
use crate::render::CanvasSurface;

/// Toleranz, unter der zwei Geraete-Radien als gleich gelten und der
/// Kreis als Arc statt als Ellipsen-Pfad gezeichnet wird.
const RADIUS_EQ_EPSILON: f64 = 1e-9;

/// Kompletter Render-Pass einer Drawing.
///
/// Reihenfolge: Clear, Hintergrund, Rahmen, dann alle Formen in
/// Einfuege-Reihenfolge (spaetere Formen verdecken fruehere). Kein
/// Rollback bei Teil-Fehlern; am Ende ein `flush`-Hinweis.
pub fn render_drawing(drawing: &Drawing, surface: &mut dyn CanvasSurface) {
    let (width, height) = drawing.mapper().device_size();
    log::debug!(
        "render_drawing: {} Formen auf {}x{} px",
        drawing.shapes().len(),
        width,
        height
    );

    surface.clear();
    if let Some(background) = &drawing.background {
        surface.set_fill_style(background);
        surface.fill_rect(0.0, 0.0, width, height);
    }
    if let Some(border) = &drawing.border {
        surface.set_line_width(drawing.border_width);
        surface.set_stroke_style(border);
        surface.stroke_rect(0.0, 0.0, width, height);
    }

    for shape in drawing.shapes() {
        render_shape(shape, drawing.mapper(), surface);
    }

    surface.flush();
}

/// Rendert eine einzelne Form durch den Mapper auf die Oberflaeche.
pub fn render_shape(shape: &Shape, mapper: &CoordinateMapper, surface: &mut dyn CanvasSurface) {
    match shape {
        Shape::Dot(s) => render_dot(s, mapper, surface),
        Shape::Line(s) => render_line(s, mapper, surface),
        Shape::CrudeLine(s) => render_crude_line(s, mapper, surface),
        Shape::Circle(s) => render_circle(s, mapper, surface),
        Shape::Rectangle(s) => render_rectangle(s, mapper, surface),
        Shape::Polygon(s) => render_polygon(s, mapper, surface),
        Shape::Text(s) => render_text(s, mapper, surface),
    }
}

fn map_point(p: &Point, mapper: &CoordinateMapper) -> (f64, f64) {
    mapper.to_device(p.x, p.y)
}

fn render_dot(dot: &Dot, mapper: &CoordinateMapper, surface: &mut dyn CanvasSurface) {
    let Some(color) = &dot.color else {
        return;
    };
    let (x, y) = map_point(&dot.position, mapper);
    surface.set_fill_style(color);
    // Radius fix 1 Geraete-Pixel, bewusst nicht durch to_device_size
    surface.fill_arc(x, y, 1.0, 0.0, TAU);
}

fn render_line(line: &Line, mapper: &CoordinateMapper, surface: &mut dyn CanvasSurface) {
    let Some(color) = &line.stroke.color else {
        return;
    };
    let (x0, y0) = map_point(&line.p0, mapper);
    let (x1, y1) = map_point(&line.p1, mapper);
    surface.begin_path();
    surface.set_line_width(line.stroke.line_width);
    surface.set_stroke_style(color);
    surface.move_to(x0, y0);
    surface.line_to(x1, y1);
    surface.stroke();
}

fn render_crude_line(line: &CrudeLine, mapper: &CoordinateMapper, surface: &mut dyn CanvasSurface) {
    let Some(color) = &line.stroke.color else {
        return;
    };
    // Die eingefrorenen Bezier-Punkte sind logisch; erst hier mappen
    let ctrl = line.control();
    let (ax, ay) = mapper.to_device(ctrl.a.x, ctrl.a.y);
    let (bx, by) = mapper.to_device(ctrl.b.x, ctrl.b.y);
    let (cx, cy) = mapper.to_device(ctrl.c.x, ctrl.c.y);
    let (dx, dy) = mapper.to_device(ctrl.d.x, ctrl.d.y);
    surface.begin_path();
    surface.set_line_width(line.stroke.line_width);
    surface.set_stroke_style(color);
    surface.move_to(ax, ay);
    surface.bezier_curve_to(bx, by, cx, cy, dx, dy);
    surface.stroke();
}

fn render_circle(circle: &Circle, mapper: &CoordinateMapper, surface: &mut dyn CanvasSurface) {
    let (x, y) = map_point(&circle.center, mapper);
    let (rx, ry) = mapper.to_device_size_xy(circle.radius, circle.radius);
    let round = (rx - ry).abs() <= RADIUS_EQ_EPSILON;

    if let Some(fill) = &circle.style.fill {
        surface.set_fill_style(fill);
        if round {
            surface.fill_arc(x, y, rx, 0.0, TAU);
        } else {
            surface.begin_path();
            surface.ellipse(x, y, rx, ry, 0.0, 0.0, TAU);
            surface.fill();
        }
    }
    if let Some(outline) = &circle.style.outline {
        surface.set_stroke_style(outline);
        surface.set_line_width(circle.style.line_width);
        if round {
            surface.stroke_arc(x, y, rx, 0.0, TAU);
        } else {
            surface.begin_path();
            surface.ellipse(x, y, rx, ry, 0.0, 0.0, TAU);
            surface.stroke();
        }
    }
}

fn render_rectangle(rect: &Rectangle, mapper: &CoordinateMapper, surface: &mut dyn CanvasSurface) {
    let (x0, y0) = map_point(&rect.p0, mapper);
    let (x1, y1) = map_point(&rect.p1, mapper);
    // Geraete-Ursprung = komponentenweises Minimum; Groessen als Betraege.
    // Robust fuer jede Ecken-Reihenfolge und Fenster-Orientierung.
    let x = x0.min(x1);
    let y = y0.min(y1);
    let w = (x1 - x0).abs();
    let h = (y1 - y0).abs();

    if let Some(fill) = &rect.style.fill {
        surface.set_fill_style(fill);
        surface.fill_rect(x, y, w, h);
    }
    if let Some(outline) = &rect.style.outline {
        surface.set_stroke_style(outline);
        surface.set_line_width(rect.style.line_width);
        surface.stroke_rect(x, y, w, h);
    }
}

fn render_polygon(poly: &Polygon, mapper: &CoordinateMapper, surface: &mut dyn CanvasSurface) {
    if poly.style.fill.is_none() && poly.style.outline.is_none() {
        return;
    }
    // Der Konstruktor weist leere Polygone ab, aber die Felder sind pub;
    // der Render-Pfad bleibt auch fuer ein per Literal gebautes leeres
    // Polygon total
    let Some(first) = poly.points.first() else {
        return;
    };
    // Pfad einmal nachzeichnen, dann fuellen und/oder konturieren
    surface.begin_path();
    let (x0, y0) = map_point(first, mapper);
    surface.move_to(x0, y0);
    for p in &poly.points[1..] {
        let (x, y) = map_point(p, mapper);
        surface.line_to(x, y);
    }
    surface.close_path();

    if let Some(fill) = &poly.style.fill {
        surface.set_fill_style(fill);
        surface.fill();
    }
    if let Some(outline) = &poly.style.outline {
        surface.set_stroke_style(outline);
        surface.set_line_width(poly.style.line_width);
        surface.stroke();
    }
}

fn render_text(text: &Text, mapper: &CoordinateMapper, surface: &mut dyn CanvasSurface) {
    let Some(fill) = &text.fill else {
        return;
    };
    let (x, y) = map_point(&text.position, mapper);
    surface.set_font(&text.face);
    surface.set_fill_style(fill);
    surface.fill_text(&text.text, x, y);
}
