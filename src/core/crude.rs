//! Kontrollpunkt-Generator fuer handgezeichnet wirkende Linien.
//!
//! Erzeugt aus einer Grundlinie eine kubische Bezier-Kurve nach dem
//! Rough.js-Ansatz (shihn.ca/posts/2020/roughjs-algorithms): verrauschte
//! Endpunkte plus zwei Kontrollpunkte oberhalb der Linie.

use glam::DVec2;
use rand::Rng;

use crate::core::DrawError;

/// Die vier Bezier-Punkte einer CrudeLine.
///
/// `a` und `d` sind die verrauschten Endpunkte, `b` und `c` die
/// Kontrollpunkte (liegen nicht auf der Kurve). Alle in logischen
/// Koordinaten, einmalig bei Konstruktion gewuerfelt und danach fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierControl {
    pub a: DVec2,
    pub b: DVec2,
    pub c: DVec2,
    pub d: DVec2,
}

/// Zieht einen gleichverteilten Punkt aus der Einheits-Kreisscheibe.
///
/// Inverse-CDF: Ringe der Breite `dr` wachsen linear mit `r`, daher
/// `r = sqrt(u)` fuer gleichmaessige Flaechendichte (nicht gleichmaessigen
/// Radius).
pub fn sample_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> DVec2 {
    let r = rng.r#gen::<f64>().sqrt();
    let theta = std::f64::consts::TAU * rng.r#gen::<f64>();
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Berechnet die vier Bezier-Punkte fuer eine Grundlinie `p0` → `p1`.
///
/// `crudity` (logische Einheiten) steuert die Streuung der Endpunkte und
/// die Bauchung der Kurve; mit `crudity = 0` degeneriert die Kurve zur
/// Geraden. Identische Endpunkte sind ein Domaenen-Fehler — die Richtung
/// der Grundlinie waere 0/0 und wuerde still NaN-Geometrie erzeugen.
///
/// Alle Zufallszuege kommen aus dem uebergebenen `rng`, damit Tests eine
/// geseedete Quelle injizieren koennen.
pub fn crude_controls<R: Rng + ?Sized>(
    p0: DVec2,
    p1: DVec2,
    crudity: f64,
    rng: &mut R,
) -> Result<BezierControl, DrawError> {
    let base = p1 - p0;
    let length = base.length();
    if length == 0.0 {
        return Err(DrawError::DegenerateLine { x: p0.x, y: p0.y });
    }

    let a = p0 + crudity * sample_unit_disk(rng);
    let d = p1 + crudity * sample_unit_disk(rng);

    let u_par = base / length;
    let u_perp = DVec2::new(-u_par.y, u_par.x);

    // B: Tangente A → B am Kurvenanfang, immer auf der positiven Seite
    let t_b = rng.gen_range(0.45..0.55);
    let h_b = rng.gen_range(0.3..0.6) * crudity;
    let b = p0 + t_b * length * u_par + h_b * u_perp;

    // C: Tangente C → D am Kurvenende, ebenfalls von p0 aus gemessen
    let t_c = rng.gen_range(0.65..0.75);
    let h_c = rng.gen_range(0.3..0.6) * crudity;
    let c = p0 + t_c * length * u_par + h_c * u_perp;

    Ok(BezierControl { a, b, c, d })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Kreuzprodukt-Betrag von (p - p0) mit der Linienrichtung.
    fn cross_with_base(p: DVec2, p0: DVec2, p1: DVec2) -> f64 {
        let d = p1 - p0;
        let v = p - p0;
        v.x * d.y - v.y * d.x
    }

    #[test]
    fn test_crudity_null_liegt_auf_der_geraden() {
        let mut rng = StdRng::seed_from_u64(7);
        let p0 = DVec2::new(10.0, 10.0);
        let p1 = DVec2::new(40.0, 50.0);
        let ctrl = crude_controls(p0, p1, 0.0, &mut rng).unwrap();

        assert_eq!(ctrl.a, p0);
        assert_eq!(ctrl.d, p1);
        for p in [ctrl.b, ctrl.c] {
            assert_relative_eq!(cross_with_base(p, p0, p1), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_kontrollpunkte_liegen_zwischen_den_enden() {
        let mut rng = StdRng::seed_from_u64(42);
        let p0 = DVec2::new(0.0, 0.0);
        let p1 = DVec2::new(100.0, 0.0);
        let ctrl = crude_controls(p0, p1, 3.0, &mut rng).unwrap();

        // B parametrisch in [0.45, 0.55], C in [0.65, 0.75] entlang x
        assert!(ctrl.b.x >= 45.0 && ctrl.b.x <= 55.0);
        assert!(ctrl.c.x >= 65.0 && ctrl.c.x <= 75.0);
        // beide oberhalb (positive Senkrechte bei horizontaler Linie)
        assert!(ctrl.b.y >= 0.3 * 3.0 && ctrl.b.y <= 0.6 * 3.0);
        assert!(ctrl.c.y >= 0.3 * 3.0 && ctrl.c.y <= 0.6 * 3.0);
    }

    #[test]
    fn test_endpunkte_streuen_maximal_um_crudity() {
        let mut rng = StdRng::seed_from_u64(99);
        let p0 = DVec2::new(5.0, 5.0);
        let p1 = DVec2::new(50.0, 30.0);
        for _ in 0..200 {
            let ctrl = crude_controls(p0, p1, 4.0, &mut rng).unwrap();
            assert!(ctrl.a.distance(p0) <= 4.0 + 1e-12);
            assert!(ctrl.d.distance(p1) <= 4.0 + 1e-12);
        }
    }

    #[test]
    fn test_gleicher_seed_gleiche_geometrie() {
        let p0 = DVec2::new(1.0, 2.0);
        let p1 = DVec2::new(30.0, 40.0);
        let c1 = crude_controls(p0, p1, 2.0, &mut StdRng::seed_from_u64(123)).unwrap();
        let c2 = crude_controls(p0, p1, 2.0, &mut StdRng::seed_from_u64(123)).unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_identische_endpunkte_sind_fehler() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = DVec2::new(3.0, 3.0);
        let err = crude_controls(p, p, 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, DrawError::DegenerateLine { .. }));
    }

    #[test]
    fn test_kreisscheibe_gleichmaessige_flaechendichte() {
        let mut rng = StdRng::seed_from_u64(2024);
        let n = 1000;
        let mut sum_r2 = 0.0;
        for _ in 0..n {
            let offset = sample_unit_disk(&mut rng);
            let r2 = offset.length_squared();
            assert!(r2 <= 1.0, "Offset muss in der Einheitsscheibe liegen");
            sum_r2 += r2;
        }
        // E[r^2] = 0.5 bei gleichmaessiger Flaechendichte
        let mean_r2 = sum_r2 / n as f64;
        assert_relative_eq!(mean_r2, 0.5, epsilon = 0.05);
    }
}
