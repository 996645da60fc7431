//! Axis-aligned square footprints and overlap checks inside a box.
//!
//! Intervals are closed: squares that share an edge or a corner
//! count as overlapping, so placed shapes always keep a gap.

use crate::types::{Shape, BOX_SIZE};

/// Bounding square of a shape in box-local units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl Footprint {
    pub fn new(x: u32, y: u32, size: u32) -> Self {
        Self { x, y, size }
    }

    pub fn of(shape: &Shape) -> Self {
        Self::new(shape.x_loc, shape.y_loc, shape.size.units())
    }
}

/// True if `[a, a + a_len]` and `[b, b + b_len]` intersect.
fn intervals_meet(a: u32, a_len: u32, b: u32, b_len: u32) -> bool {
    (a >= b && a <= b.saturating_add(b_len)) || (b >= a && b <= a.saturating_add(a_len))
}

/// True if the two closed squares intersect on both axes.
pub fn footprints_overlap(a: &Footprint, b: &Footprint) -> bool {
    intervals_meet(a.x, a.size, b.x, b.size) && intervals_meet(a.y, a.size, b.y, b.size)
}

/// True if the square lies within the box (edges included).
pub fn footprint_in_bounds(f: &Footprint) -> bool {
    let fits = |at: u32| at.checked_add(f.size).is_some_and(|end| end <= BOX_SIZE);
    fits(f.x) && fits(f.y)
}

/// Check a candidate against every already placed footprint.
pub fn is_free(candidate: &Footprint, occupied: &[Footprint]) -> bool {
    occupied
        .iter()
        .all(|other| !footprints_overlap(candidate, other))
}
