//! Synthetic landmark fixtures shared by unit tests.

use crate::shared::point::Point;

/// A frontal 68-point face, 200 px wide, laid out so that every action unit
/// except the eye-tightening duplicate lands exactly on the neutral baseline.
///
/// AU5 and AU42_44 share a formula, so both read 0.06 while the AU42_44
/// baseline is 0.055.
pub fn synthetic_face() -> Vec<Point> {
    const POINTS: [(f64, f64); 68] = [
        // jaw 0-16
        (0.0, 100.0),
        (2.0, 108.0),
        (6.0, 116.0),
        (14.0, 124.0),
        (28.0, 132.0),
        (52.0, 140.0),
        (68.0, 152.0),
        (84.0, 161.0),
        (100.0, 166.0),
        (116.0, 161.0),
        (132.0, 152.0),
        (148.0, 140.0),
        (172.0, 132.0),
        (186.0, 124.0),
        (194.0, 116.0),
        (198.0, 108.0),
        (200.0, 100.0),
        // brows 17-26
        (20.0, 60.0),
        (35.0, 52.0),
        (55.0, 48.0),
        (75.0, 50.0),
        (93.0, 55.0),
        (107.0, 55.0),
        (125.0, 50.0),
        (145.0, 48.0),
        (165.0, 52.0),
        (180.0, 60.0),
        // nose 27-35
        (100.0, 70.0),
        (100.0, 78.0),
        (100.0, 85.0),
        (100.0, 92.0),
        (88.0, 94.0),
        (94.0, 96.0),
        (100.0, 96.0),
        (106.0, 96.0),
        (112.0, 94.0),
        // left eye 36-41
        (31.0, 80.0),
        (50.0, 74.0),
        (62.0, 74.0),
        (72.0, 80.0),
        (62.0, 86.0),
        (50.0, 86.0),
        // right eye 42-47
        (128.0, 80.0),
        (138.0, 74.0),
        (150.0, 74.0),
        (169.0, 80.0),
        (150.0, 86.0),
        (138.0, 86.0),
        // outer lip 48-59
        (61.0, 120.0),
        (75.0, 116.0),
        (88.0, 113.0),
        (100.0, 114.0),
        (112.0, 113.0),
        (125.0, 116.0),
        (139.0, 120.0),
        (125.0, 126.0),
        (112.0, 129.0),
        (100.0, 130.0),
        (88.0, 129.0),
        (75.0, 126.0),
        // inner lip 60-67
        (66.0, 120.0),
        (85.0, 121.0),
        (100.0, 122.0),
        (115.0, 121.0),
        (134.0, 120.0),
        (115.0, 124.0),
        (100.0, 125.0),
        (85.0, 124.0),
    ];
    POINTS.iter().map(|&p| Point::from(p)).collect()
}

/// Uniformly scales and translates a face; every action unit is invariant
/// under this transform.
pub fn transform(points: &[Point], scale: f64, dx: f64, dy: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x * scale + dx, p.y * scale + dy))
        .collect()
}
