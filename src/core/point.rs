//! 2D-Punkt mit Vektor-Algebra.

use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;

use crate::core::Color;

/// Ein 2D-Punkt in logischen Koordinaten.
///
/// Traegt optional ein Farb-Tag als Bequemlichkeit fuer Form-Konstruktoren
/// (z.B. `Dot`); das Tag ist nie Render-Autoritaet und zaehlt nicht zur
/// Gleichheit. Alle Operationen erzeugen neue Werte, keine Mutation.
#[derive(Debug, Clone, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Farb-Tag, nur fuer Default-Argumente relevant
    pub color: Option<Color>,
}

impl Point {
    /// Erstellt einen Punkt ohne Farb-Tag.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, color: None }
    }

    /// Erstellt einen Punkt mit Farb-Tag.
    pub fn with_color(x: f64, y: f64, color: Color) -> Self {
        Self {
            x,
            y,
            color: Some(color),
        }
    }

    /// Skalarprodukt.
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Konvertiert in einen glam-Vektor (verliert das Farb-Tag).
    pub fn to_vec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Gleichheit vergleicht nur (x, y) — exakt, ohne Epsilon.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            color: self.color,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            color: self.color,
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
            color: self.color,
        }
    }
}

/// Skalar-Multiplikation `Point * f64`.
impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point {
            x: self.x * k,
            y: self.y * k,
            color: self.color,
        }
    }
}

/// Skalar-Multiplikation `f64 * Point` (kommutativ zur obigen Variante).
impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, p: Point) -> Point {
        p * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_ist_kommutativ() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(5.0, -1.0);
        assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn test_subtraktion_von_sich_selbst_ist_null() {
        let a = Point::new(2.5, -7.125);
        assert_eq!(a.clone() - a, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_dot_ist_kommutativ() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(5.0, -1.0);
        assert_eq!(a.dot(&b), b.dot(&a));
        assert_eq!(a.dot(&b), 11.0);
    }

    #[test]
    fn test_skalar_multiplikation_beidseitig() {
        let a = Point::new(3.0, 4.0);
        assert_eq!(a.clone() * 2.0, Point::new(6.0, 8.0));
        assert_eq!(2.0 * a.clone(), a * 2.0);
    }

    #[test]
    fn test_negation() {
        let a = Point::new(1.0, -2.0);
        assert_eq!(-a, Point::new(-1.0, 2.0));
    }

    #[test]
    fn test_gleichheit_ignoriert_farbe() {
        let a = Point::new(1.0, 2.0);
        let b = Point::with_color(1.0, 2.0, Color::new("red").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_operationen_behalten_farb_tag() {
        let a = Point::with_color(1.0, 2.0, Color::new("red").unwrap());
        let b = Point::new(3.0, 4.0);
        let sum = a + b;
        assert_eq!(sum.color.as_ref().map(|c| c.as_str()), Some("red"));
    }
}
