//! Positioning shapes inside a box.
//!
//! Scatter boxes use rejection sampling against the footprints already
//! placed; tower and row boxes stack deterministically.

use tracing::{trace, warn};

use crate::collision::{footprint_in_bounds, is_free, Footprint};
use crate::error::{Error, Result};
use crate::prng::RandomSource;
use crate::types::{Layout, Limits, Shape, ShapeAttributes, Size, BOX_SIZE};

/// Where a shape ended up, and at what size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub size: Size,
}

/// Draw positions until one clears every occupied footprint.
///
/// After `limits.shrink_after` rejections the candidate drops to the
/// smallest size when `shrink` is set; earlier rejections are not
/// revisited. Gives up after `limits.max_placement_attempts` draws.
pub fn place<R: RandomSource>(
    rng: &mut R,
    size: Size,
    occupied: &[Footprint],
    shrink: bool,
    limits: &Limits,
) -> Result<Placement> {
    let mut size = size;
    let mut rejections: u32 = 0;

    for _ in 0..limits.max_placement_attempts {
        if shrink && rejections > limits.shrink_after && size != Size::Small {
            trace!(from = size.units(), rejections, "shrinking shape to fit");
            size = Size::Small;
        }

        let s = size.units();
        let mut x = rng.below(BOX_SIZE);
        let mut y = rng.below(BOX_SIZE);
        if x + s > BOX_SIZE {
            x = BOX_SIZE - s;
        }
        if y + s > BOX_SIZE {
            y = BOX_SIZE - s;
        }

        let candidate = Footprint::new(x, y, s);
        if is_free(&candidate, occupied) {
            return Ok(Placement { x, y, size });
        }
        rejections += 1;
    }

    warn!(
        size = size.units(),
        occupied = occupied.len(),
        attempts = limits.max_placement_attempts,
        "placement exhausted"
    );
    Err(Error::PlacementExhausted {
        size: size.units(),
        occupied: occupied.len(),
        attempts: limits.max_placement_attempts,
    })
}

/// Deterministic stacking for tower and row boxes.
///
/// Tower items sit centred on the box's vertical axis, the first on the
/// floor and each next one a unit above the last. Row items sit on the
/// floor, left to right, a unit apart.
#[derive(Debug, Clone)]
pub struct Stacker {
    layout: Layout,
    cursor: i64,
    placed: usize,
}

impl Stacker {
    pub fn new(layout: Layout) -> Self {
        let cursor = match layout {
            Layout::Row => 0,
            _ => BOX_SIZE as i64,
        };
        Self {
            layout,
            cursor,
            placed: 0,
        }
    }

    pub fn next(&mut self, size: Size) -> Result<Placement> {
        let s = size.units() as i64;
        let box_size = BOX_SIZE as i64;
        let (x, y) = match self.layout {
            Layout::Row => {
                let x = self.cursor;
                self.cursor = x + s + 1;
                (x, box_size - s)
            }
            _ => {
                let y = self.cursor - s;
                self.cursor = y - 1;
                (box_size / 2 - s / 2, y)
            }
        };

        if x < 0 || y < 0 || x + s > box_size || y + s > box_size {
            warn!(size = s, placed = self.placed, layout = ?self.layout, "stack left the box");
            return Err(Error::PlacementExhausted {
                size: size.units(),
                occupied: self.placed,
                attempts: 1,
            });
        }
        self.placed += 1;
        Ok(Placement {
            x: x as u32,
            y: y as u32,
            size,
        })
    }
}

/// How many `size` shapes a tower or row box holds.
pub fn stack_capacity(size: Size) -> u32 {
    // n shapes need n * size + (n - 1) units.
    (BOX_SIZE + 1) / (size.units() + 1)
}

/// Upper bound on shapes in a scatter box: the smallest shapes on a grid
/// one unit apart.
pub fn scatter_capacity() -> u32 {
    stack_capacity(Size::Small) * stack_capacity(Size::Small)
}

/// Position every object of one box, in the given order.
///
/// Stacked layouts keep each object's size. Scatter layouts shrink
/// objects that do not fit only when `shrink` is set.
pub fn place_box<R: RandomSource>(
    rng: &mut R,
    objects: &[ShapeAttributes],
    layout: Layout,
    shrink: bool,
    limits: &Limits,
) -> Result<Vec<Shape>> {
    let mut shapes = Vec::with_capacity(objects.len());
    let mut occupied: Vec<Footprint> = Vec::with_capacity(objects.len());
    let mut stacker = Stacker::new(layout);

    for attrs in objects {
        let placement = if layout.is_stacked() {
            stacker.next(attrs.size)?
        } else {
            place(rng, attrs.size, &occupied, shrink, limits)?
        };
        let shape = ShapeAttributes::new(attrs.kind, attrs.color, placement.size)
            .at(placement.x, placement.y);
        debug_assert!(footprint_in_bounds(&Footprint::of(&shape)));
        occupied.push(Footprint::of(&shape));
        shapes.push(shape);
    }
    Ok(shapes)
}
