//! Vertex loops: ordered polygon boundaries.
//!
//! A loop is stored either *open* (no duplicated closing vertex, the canonical
//! form) or *cyclic* (first vertex repeated at the end, convenient for walking
//! edges). Area and perimeter treat both forms identically.

use serde::{Deserialize, Serialize};

use super::point::{Point, Vertex};

/// Winding direction of a loop, from the sign of its shoelace area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// An ordered sequence of vertices describing a polygon boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexLoop {
    vertices: Vec<Vertex>,
}

impl VertexLoop {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Build a loop from bare points, assigning ids by position.
    pub fn from_points(points: &[Point]) -> Self {
        Self::new(
            points
                .iter()
                .enumerate()
                .map(|(i, &p)| Vertex::new(p, i as u32))
                .collect(),
        )
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut Vec<Vertex> {
        &mut self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn points(&self) -> Vec<Point> {
        self.vertices.iter().map(|v| v.point).collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn first(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    pub fn last(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    /// True when the last vertex repeats the first one's coordinates.
    pub fn is_cyclic(&self) -> bool {
        self.vertices.len() > 1
            && self.vertices.first().map(|v| v.point) == self.vertices.last().map(|v| v.point)
    }

    /// Number of distinct vertices, ignoring a closing duplicate.
    pub fn distinct_len(&self) -> usize {
        if self.is_cyclic() {
            self.vertices.len() - 1
        } else {
            self.vertices.len()
        }
    }

    /// Shoelace area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points())
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn winding(&self) -> Winding {
        if self.signed_area() < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Closed perimeter length.
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.vertices[i].point.distance(self.vertices[(i + 1) % n].point))
            .sum()
    }

    /// Position of the vertex carrying `id`, if any.
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }

    /// Shift every vertex by `offset`; ids are untouched.
    pub fn translate(&mut self, offset: Point) {
        for v in &mut self.vertices {
            v.point = v.point + offset;
        }
    }

    /// Rotate the vertex order so that `index` becomes the first vertex.
    ///
    /// Intended for open loops; a cyclic loop should be opened first.
    pub fn rotate_to(&mut self, index: usize) {
        if index < self.vertices.len() {
            self.vertices.rotate_left(index);
        }
    }

    /// Iterate closed edges as `(start, end)` pairs, wrapping around.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = self.distinct_len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// Shoelace signed area over a point sequence, indices taken modulo length.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let sum: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    sum / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> VertexLoop {
        VertexLoop::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_signed_area_follows_winding() {
        let square = unit_square();
        assert!((square.signed_area() - 1.0).abs() < 1e-12);
        assert_eq!(square.winding(), Winding::CounterClockwise);

        let mut reversed = square.clone();
        reversed.vertices_mut().reverse();
        assert!((reversed.signed_area() + 1.0).abs() < 1e-12);
        assert_eq!(reversed.winding(), Winding::Clockwise);
    }

    #[test]
    fn test_cyclic_duplicate_does_not_change_area_or_perimeter() {
        let open = unit_square();
        let mut cyclic = open.clone();
        let first = cyclic.vertices()[0];
        cyclic.vertices_mut().push(first);

        assert!(cyclic.is_cyclic());
        assert_eq!(cyclic.distinct_len(), 4);
        assert!((open.area() - cyclic.area()).abs() < 1e-12);
        assert!((open.perimeter() - 4.0).abs() < 1e-12);
        assert!((cyclic.perimeter() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_edges_wrap_around() {
        let square = unit_square();
        let edges: Vec<_> = square.edges().map(|(a, b)| (a.id, b.id)).collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[test]
    fn test_rotate_and_translate_keep_ids() {
        let mut square = unit_square();
        square.rotate_to(2);
        square.translate(Point::new(-1.0, -1.0));
        assert_eq!(square.vertices()[0].id, 2);
        assert_eq!(square.vertices()[0].point, Point::new(0.0, 0.0));
        assert_eq!(square.position_of(0), Some(2));
    }
}
