//! Built-in shape tables
//!
//! The cube table (point order and the single red reference edge included)
//! is the visualizer's original test shape and is kept verbatim. The
//! tesseract uses binary-counting vertex order: vertex `i` has `+h` on axis
//! `k` exactly when bit `k` of `i` is set, which makes the 32 edges exactly
//! the index pairs at Hamming distance 1.

use crate::{Color, Edge, Wireframe};

/// A cube centered at the origin with vertices at `±half_extent`.
///
/// 8 points, 12 edges. The first edge is red so the shape's orientation is
/// readable on screen; the rest are white.
pub fn cube(half_extent: f32) -> Wireframe<3> {
    let d = half_extent;
    let points = vec![
        [d, d, -d],
        [-d, d, -d],
        [-d, -d, -d],
        [d, -d, -d],
        [d, d, d],
        [-d, d, d],
        [-d, -d, d],
        [d, -d, d],
    ];
    let edges = vec![
        Edge::new(Color::RED, 0, 1),
        Edge::new(Color::WHITE, 1, 2),
        Edge::new(Color::WHITE, 2, 3),
        Edge::new(Color::WHITE, 3, 0),
        Edge::new(Color::WHITE, 4, 5),
        Edge::new(Color::WHITE, 5, 6),
        Edge::new(Color::WHITE, 6, 7),
        Edge::new(Color::WHITE, 7, 4),
        Edge::new(Color::WHITE, 0, 4),
        Edge::new(Color::WHITE, 1, 5),
        Edge::new(Color::WHITE, 2, 6),
        Edge::new(Color::WHITE, 3, 7),
    ];
    Wireframe::new(points, edges).expect("static cube table is valid")
}

/// A tesseract centered at the origin with vertices at `±half_extent`.
///
/// 16 points, 32 edges. Edges inside the `w = -h` cell are white, edges
/// inside the `w = +h` cell cyan, and the 8 edges connecting the two cells
/// gray, so the two cubic cells stay distinguishable under projection.
pub fn tesseract(half_extent: f32) -> Wireframe<4> {
    let h = half_extent;

    // Vertex i: bit k of i selects +h (set) or -h (clear) on axis k.
    let points: Vec<[f32; 4]> = (0..16usize)
        .map(|i| {
            let coord = |bit: usize| if i & (1 << bit) != 0 { h } else { -h };
            [coord(0), coord(1), coord(2), coord(3)]
        })
        .collect();

    let mut edges = Vec::with_capacity(32);
    for a in 0..16usize {
        for b in (a + 1)..16usize {
            if (a ^ b).count_ones() != 1 {
                continue;
            }
            let color = if a & 0b1000 != 0 {
                // Both endpoints in the w = +h cell (b > a shares the bit).
                Color::CYAN
            } else if b & 0b1000 != 0 {
                // Endpoints differ in w: a connecting edge.
                Color::GRAY
            } else {
                Color::WHITE
            };
            edges.push(Edge::new(color, a, b));
        }
    }

    Wireframe::new(points, edges).expect("static tesseract table is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_table_shape() {
        let c = cube(100.0);
        assert_eq!(c.point_count(), 8);
        assert_eq!(c.edge_count(), 12);
        assert_eq!(c.edges()[0].color, Color::RED);
        assert!(c.edges()[1..].iter().all(|e| e.color == Color::WHITE));
        // Every coordinate sits on the ±half_extent shell.
        for p in c.rest_points() {
            assert!(p.iter().all(|v| v.abs() == 100.0));
        }
    }

    #[test]
    fn test_tesseract_counts() {
        let t = tesseract(1.0);
        assert_eq!(t.point_count(), 16);
        assert_eq!(t.edge_count(), 32);

        let white = t.edges().iter().filter(|e| e.color == Color::WHITE).count();
        let cyan = t.edges().iter().filter(|e| e.color == Color::CYAN).count();
        let gray = t.edges().iter().filter(|e| e.color == Color::GRAY).count();
        assert_eq!((white, cyan, gray), (12, 12, 8));
    }

    #[test]
    fn test_tesseract_edges_span_one_axis() {
        let t = tesseract(2.0);
        for edge in t.edges() {
            let pa = t.rest_points()[edge.a];
            let pb = t.rest_points()[edge.b];
            let differing = pa.iter().zip(&pb).filter(|(x, y)| x != y).count();
            assert_eq!(differing, 1, "edge {edge:?} is not axis-aligned");
        }
    }
}
