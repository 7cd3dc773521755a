// src/utils/geometry.rs
//! Even-odd (ray casting) containment tests over integer map coordinates.
//!
//! A horizontal ray is cast from the test point towards +x and every edge it
//! crosses toggles the result. Points exactly on an edge are not treated
//! specially; for an axis-aligned square `(0,0)-(10,10)` the left and bottom
//! edges count as inside and the right and top edges as outside.

use crate::map::Vertex;

/// Returns true if the ray from `(x, y)` crosses the edge `a`-`b`.
fn crosses(x: i32, y: i32, a: &Vertex, b: &Vertex) -> bool {
    if (a.y > y) == (b.y > y) {
        return false;
    }
    // a.y != b.y here, so the division is safe.
    let (x, y) = (x as f64, y as f64);
    let (ax, ay, bx, by) = (a.x as f64, a.y as f64, b.x as f64, b.y as f64);
    x < ax + (bx - ax) * (y - ay) / (by - ay)
}

/// Treats `polygon` as a closed ring in slice order and tests `(x, y)`
/// against it. Each vertex `P[i]` is paired with its predecessor `P[i-1]`,
/// wrapping around, so the last vertex closes the ring back to the first.
pub fn point_in_polygon(x: i32, y: i32, polygon: &[Vertex]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        if crosses(x, y, &polygon[i], &polygon[j]) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// The same rule over a free set of segments. The segments need not form a
/// single ring, so sectors made of several disjoint loops (holes, pillars,
/// islands) are handled correctly.
pub fn point_in_segments<'a, I>(x: i32, y: i32, segments: I) -> bool
where
    I: IntoIterator<Item = (&'a Vertex, &'a Vertex)>,
{
    segments
        .into_iter()
        .filter(|(a, b)| crosses(x, y, a, b))
        .count()
        % 2
        == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vertex> {
        vec![
            Vertex::new(0, 0),
            Vertex::new(10, 0),
            Vertex::new(10, 10),
            Vertex::new(0, 10),
        ]
    }

    #[test]
    fn test_square_inside_and_outside() {
        let poly = square();
        assert!(point_in_polygon(5, 5, &poly));
        assert!(!point_in_polygon(15, 5, &poly));
        assert!(!point_in_polygon(-1, 5, &poly));
        assert!(!point_in_polygon(5, 11, &poly));
    }

    #[test]
    fn test_square_boundary_is_deterministic() {
        let poly = square();
        // Right and top edges are outside, left and bottom edges inside.
        assert!(!point_in_polygon(10, 5, &poly));
        assert!(!point_in_polygon(5, 10, &poly));
        assert!(point_in_polygon(0, 5, &poly));
        assert!(point_in_polygon(5, 0, &poly));
        for _ in 0..3 {
            assert!(!point_in_polygon(10, 5, &poly));
        }
    }

    #[test]
    fn test_concave_polygon() {
        // An L shape; (7, 7) is in the notch.
        let poly = vec![
            Vertex::new(0, 0),
            Vertex::new(10, 0),
            Vertex::new(10, 5),
            Vertex::new(5, 5),
            Vertex::new(5, 10),
            Vertex::new(0, 10),
        ];
        assert!(point_in_polygon(2, 8, &poly));
        assert!(point_in_polygon(8, 2, &poly));
        assert!(!point_in_polygon(7, 7, &poly));
    }

    #[test]
    fn test_degenerate_polygons_contain_nothing() {
        assert!(!point_in_polygon(0, 0, &[]));
        assert!(!point_in_polygon(0, 0, &[Vertex::new(0, 0)]));
        assert!(!point_in_polygon(5, 5, &[Vertex::new(0, 0), Vertex::new(10, 10)]));
    }

    #[test]
    fn test_segments_match_polygon_for_one_loop() {
        let poly = square();
        let edges: Vec<(Vertex, Vertex)> = (0..4).map(|i| (poly[i], poly[(i + 1) % 4])).collect();
        for (x, y) in [(5, 5), (15, 5), (10, 5), (0, 5), (5, 0), (5, 10)] {
            assert_eq!(
                point_in_segments(x, y, edges.iter().map(|(a, b)| (a, b))),
                point_in_polygon(x, y, &poly),
                "({x}, {y})"
            );
        }
    }

    #[test]
    fn test_segments_respect_holes() {
        let outer = [(0, 0), (100, 0), (100, 100), (0, 100)];
        let inner = [(40, 40), (60, 40), (60, 60), (40, 60)];
        let mut edges = Vec::new();
        for ring in [&outer, &inner] {
            for i in 0..4 {
                let (ax, ay) = ring[i];
                let (bx, by) = ring[(i + 1) % 4];
                edges.push((Vertex::new(ax, ay), Vertex::new(bx, by)));
            }
        }
        let segments = || edges.iter().map(|(a, b)| (a, b));
        assert!(point_in_segments(20, 50, segments()));
        assert!(!point_in_segments(50, 50, segments()));
        assert!(!point_in_segments(150, 50, segments()));
    }
}
