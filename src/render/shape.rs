//! The single shape dispatcher shared by socket, sclera, iris and
//! pupil rendering.

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point};
use crate::genome::spec::EyeShape;

/// Curve flattening tolerance for ellipse-derived paths.
const TOL: f64 = 0.1;

/// Build the outline path for `shape` centered at `center` with
/// characteristic radius `size`.
pub fn shape_path(shape: EyeShape, center: Point, size: f64) -> BezPath {
    match shape {
        EyeShape::Circle => kurbo::Circle::new(center, size).to_path(TOL),
        EyeShape::Oval => kurbo::Ellipse::new(center, (size, size * 0.75), 0.0).to_path(TOL),
        EyeShape::Almond => kurbo::Ellipse::new(center, (size, size * 0.55), 0.0).to_path(TOL),
        EyeShape::Diamond => radial_polygon(center, 4, &[size], std::f64::consts::FRAC_PI_2),
        EyeShape::Hexagon => radial_polygon(center, 6, &[size], 0.0),
        EyeShape::Star => radial_polygon(center, 12, &[size, size * 0.5], -std::f64::consts::FRAC_PI_2),
    }
}

/// Closed polygon from `steps` vertices placed at a fixed angle step,
/// cycling through `radii` — one radius yields a regular n-gon, two
/// interleaved radii yield a star.
pub fn radial_polygon(center: Point, steps: usize, radii: &[f64], phase: f64) -> BezPath {
    debug_assert!(steps >= 3 && !radii.is_empty());
    let mut path = BezPath::new();
    let step = std::f64::consts::TAU / steps as f64;
    for i in 0..steps {
        let r = radii[i % radii.len()];
        let a = phase + step * i as f64;
        let p = Point::new(center.x + a.cos() * r, center.y + a.sin() * r);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

/// Open polyline through `points`; used by veins, beams and bolts.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    for (i, &p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape as _;

    #[test]
    fn every_shape_yields_a_nonempty_closed_region() {
        let c = Point::new(100.0, 100.0);
        for shape in EyeShape::ALL {
            let p = shape_path(shape, c, 40.0);
            assert!(!p.elements().is_empty(), "{shape:?} produced empty path");
            assert!(p.area().abs() > 1.0, "{shape:?} has degenerate area");
        }
    }

    #[test]
    fn hexagon_vertices_sit_on_the_radius() {
        let c = Point::new(0.0, 0.0);
        let p = radial_polygon(c, 6, &[10.0], 0.0);
        for el in p.elements() {
            let pt = match el {
                kurbo::PathEl::MoveTo(p) | kurbo::PathEl::LineTo(p) => *p,
                _ => continue,
            };
            let d = (pt.x * pt.x + pt.y * pt.y).sqrt();
            assert!((d - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn star_alternates_between_two_radii() {
        let c = Point::new(0.0, 0.0);
        let p = radial_polygon(c, 12, &[10.0, 5.0], 0.0);
        let mut dists = Vec::new();
        for el in p.elements() {
            if let kurbo::PathEl::MoveTo(pt) | kurbo::PathEl::LineTo(pt) = el {
                dists.push((pt.x * pt.x + pt.y * pt.y).sqrt());
            }
        }
        assert_eq!(dists.len(), 12);
        for (i, d) in dists.iter().enumerate() {
            let expect = if i % 2 == 0 { 10.0 } else { 5.0 };
            assert!((d - expect).abs() < 1e-9);
        }
    }

    #[test]
    fn polyline_is_open() {
        let p = polyline(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        ]);
        assert_eq!(p.elements().len(), 3);
        assert!(
            !p.elements()
                .iter()
                .any(|el| matches!(el, kurbo::PathEl::ClosePath))
        );
    }
}
