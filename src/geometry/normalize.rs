//! Winding and closure invariants for vertex loops.
//!
//! Orientation is always fixed first, then the representation. Both steps
//! are idempotent.

use serde::{Deserialize, Serialize};

use super::polygon::VertexLoop;

/// Representation of a loop's closing vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopForm {
    /// First vertex repeated at the end.
    Cyclic,
    /// No closing duplicate.
    Open,
}

/// Reverse the loop in place if it winds clockwise.
pub fn orient_ccw(polygon: &mut VertexLoop) {
    if polygon.signed_area() < 0.0 {
        polygon.vertices_mut().reverse();
    }
}

/// Append a copy of the first vertex unless the loop already ends on it.
pub fn close_loop(polygon: &mut VertexLoop) {
    let vertices = polygon.vertices_mut();
    if let (Some(&first), Some(last)) = (vertices.first(), vertices.last()) {
        if vertices.len() > 1 && first.point == last.point {
            return;
        }
        vertices.push(first);
    }
}

/// Drop a trailing vertex that repeats the first one's coordinates.
pub fn open_loop(polygon: &mut VertexLoop) {
    if polygon.is_cyclic() {
        polygon.vertices_mut().pop();
    }
}

/// Orient counter-clockwise, then put the loop into `form`.
pub fn normalize(polygon: &mut VertexLoop, form: LoopForm) {
    orient_ccw(polygon);
    match form {
        LoopForm::Cyclic => close_loop(polygon),
        LoopForm::Open => open_loop(polygon),
    }
}

/// Owned variant of [`normalize`].
pub fn normalized(mut polygon: VertexLoop, form: LoopForm) -> VertexLoop {
    normalize(&mut polygon, form);
    polygon
}
