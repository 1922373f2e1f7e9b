use crate::error::{RecursionError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Highest order [`sierpinski`] will expand (`(3^13 - 1) / 2` triangles).
pub const MAX_SIERPINSKI_ORDER: u32 = 12;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Arithmetic mean of the two points, coordinate by coordinate.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Three vertices of a triangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The three corner triangles one order down. Child `i` keeps vertex `i`
    /// and replaces the other two with midpoints of the edges meeting at it.
    pub fn corners(&self) -> [Triangle; 3] {
        let ab = self.a.midpoint(self.b);
        let bc = self.b.midpoint(self.c);
        let ca = self.c.midpoint(self.a);
        [
            Triangle::new(self.a, ab, ca),
            Triangle::new(ab, self.b, bc),
            Triangle::new(ca, bc, self.c),
        ]
    }
}

/// One triangle to draw, tagged with the order it was produced at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Subdivision {
    pub order: u32,
    pub triangle: Triangle,
}

/// Every triangle of a Sierpinski figure of the given order, in draw order.
///
/// Each triangle is listed before the three smaller ones inside it, so
/// painting the list front to back lays the fine detail over the coarse.
pub fn sierpinski(order: i64, triangle: Triangle) -> Result<Vec<Subdivision>> {
    let order = u32::try_from(order).map_err(|_| RecursionError::InvalidOrder(order))?;
    if order > MAX_SIERPINSKI_ORDER {
        return Err(RecursionError::LimitExceeded {
            what: "sierpinski order",
            value: u64::from(order),
            limit: u64::from(MAX_SIERPINSKI_ORDER),
        });
    }

    let mut drawn = Vec::with_capacity(((3usize.pow(order + 1)) - 1) / 2);
    subdivide(order, triangle, &mut drawn, 0);
    debug!(order, triangles = drawn.len(), "sierpinski");
    Ok(drawn)
}

fn subdivide(order: u32, triangle: Triangle, drawn: &mut Vec<Subdivision>, depth: usize) {
    drawn.push(Subdivision { order, triangle });
    if order == 0 {
        return;
    }
    trace!(order, depth, "subdivide");
    for corner in triangle.corners() {
        subdivide(order - 1, corner, drawn, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 4.0),
        )
    }

    #[test]
    fn test_order_zero() {
        let drawn = sierpinski(0, unit()).unwrap();
        assert_eq!(drawn, vec![Subdivision { order: 0, triangle: unit() }]);
    }

    #[test]
    fn test_order_one_corners() {
        let drawn = sierpinski(1, unit()).unwrap();
        assert_eq!(drawn.len(), 4);
        assert_eq!(drawn[0].order, 1);
        assert_eq!(
            drawn[1].triangle,
            Triangle::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 2.0))
        );
        assert_eq!(
            drawn[2].triangle,
            Triangle::new(Point::new(2.0, 0.0), Point::new(4.0, 0.0), Point::new(3.0, 2.0))
        );
        assert_eq!(
            drawn[3].triangle,
            Triangle::new(Point::new(1.0, 2.0), Point::new(3.0, 2.0), Point::new(2.0, 4.0))
        );
    }

    #[test]
    fn test_counts_and_parent_first() {
        for k in 0..=6u32 {
            let drawn = sierpinski(i64::from(k), unit()).unwrap();
            assert_eq!(drawn.len(), (3usize.pow(k + 1) - 1) / 2);
            assert_eq!(drawn[0].order, k);
            // The first child comes right after its parent.
            for pair in drawn.windows(2) {
                if pair[0].order > 0 {
                    assert_eq!(pair[1].order, pair[0].order - 1);
                }
            }
            let finest = drawn.iter().filter(|d| d.order == 0).count();
            assert_eq!(finest, 3usize.pow(k));
        }
    }

    /// Walk one subtree of the draw list starting at `*at`, checking every
    /// child against its parent's vertices and edge midpoints.
    fn check_subtree(drawn: &[Subdivision], at: &mut usize) {
        let parent = drawn[*at];
        *at += 1;
        if parent.order == 0 {
            return;
        }
        let [a, b, c] = parent.triangle.vertices();
        let mid = |p: Point, q: Point| Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0);
        let (ab, bc, ca) = (mid(a, b), mid(b, c), mid(c, a));
        let expected = [[a, ab, ca], [ab, b, bc], [ca, bc, c]];
        for vertices in expected {
            let child = drawn[*at];
            assert_eq!(child.order, parent.order - 1);
            assert_eq!(child.triangle.vertices(), vertices);
            check_subtree(drawn, at);
        }
    }

    #[test]
    fn test_children_use_parent_vertices_and_midpoints() {
        for k in 0..=4 {
            let drawn = sierpinski(k, unit()).unwrap();
            let mut at = 0;
            check_subtree(&drawn, &mut at);
            assert_eq!(at, drawn.len());
        }
    }

    #[test]
    fn test_invalid_order() {
        assert_eq!(sierpinski(-1, unit()), Err(RecursionError::InvalidOrder(-1)));
        assert!(matches!(
            sierpinski(13, unit()),
            Err(RecursionError::LimitExceeded { .. })
        ));
    }
}
