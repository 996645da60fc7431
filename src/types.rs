//! Data types for shapes, boxes and environments.
//!
//! Every struct here derives Serialize + Deserialize so it can
//! round-trip through the JSON interchange format.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Side length of the usable square region of each box.
pub const BOX_SIZE: u32 = 100;

/// Number of boxes in an environment.
pub const NUM_BOXES: usize = 3;

/// Horizontal canvas offset of each box (left, middle, right).
pub const BOX_OFFSETS: [u32; NUM_BOXES] = [0, 150, 300];

// -- Shape attributes ----------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Circle, ShapeKind::Triangle];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Black, Color::Blue, Color::Yellow];

    /// Fill value handed to a canvas.
    pub fn fill_value(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Blue => "#0099ff",
            Color::Yellow => "Yellow",
        }
    }
}

/// Discrete edge length of a shape, serialized as 10, 20 or 30 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn units(self) -> u32 {
        match self {
            Size::Small => 10,
            Size::Medium => 20,
            Size::Large => 30,
        }
    }
}

impl From<Size> for u32 {
    fn from(size: Size) -> u32 {
        size.units()
    }
}

impl TryFrom<u32> for Size {
    type Error = Error;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        match units {
            10 => Ok(Size::Small),
            20 => Ok(Size::Medium),
            30 => Ok(Size::Large),
            other => Err(Error::InvalidParams(format!(
                "shape size must be 10, 20 or 30, got {other}"
            ))),
        }
    }
}

/// The identity of an object: everything but its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeAttributes {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub color: Color,
    pub size: Size,
}

impl ShapeAttributes {
    pub fn new(kind: ShapeKind, color: Color, size: Size) -> Self {
        Self { kind, color, size }
    }

    /// Place these attributes at a box-local position.
    pub fn at(self, x_loc: u32, y_loc: u32) -> Shape {
        Shape {
            kind: self.kind,
            color: self.color,
            size: self.size,
            x_loc,
            y_loc,
        }
    }
}

// -- Placed shapes -------------------------------------------------

/// A shape placed inside a box. `x_loc`/`y_loc` are the top-left corner
/// in box-local coordinates.
///
/// Field order is part of the canonical signature, so it must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub color: Color,
    pub size: Size,
    pub x_loc: u32,
    pub y_loc: u32,
}

impl Shape {
    pub fn attributes(&self) -> ShapeAttributes {
        ShapeAttributes::new(self.kind, self.color, self.size)
    }

    /// True if the shape's bounding square lies within the box.
    pub fn in_bounds(&self) -> bool {
        let s = self.size.units();
        let fits = |at: u32| at.checked_add(s).is_some_and(|end| end <= BOX_SIZE);
        fits(self.x_loc) && fits(self.y_loc)
    }
}

/// Shapes of one box. Order is kept for output but carries no meaning.
pub type ShapeBox = Vec<Shape>;

/// Three boxes, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    pub boxes: Vec<ShapeBox>,
}

impl Environment {
    pub fn new(boxes: Vec<ShapeBox>) -> Self {
        Self { boxes }
    }

    /// Attributes of every object, box by box.
    pub fn objects(&self) -> Vec<ShapeAttributes> {
        self.boxes
            .iter()
            .flat_map(|b| b.iter().map(Shape::attributes))
            .collect()
    }

    /// Objects grouped by box, positions dropped.
    pub fn objects_by_box(&self) -> Vec<Vec<ShapeAttributes>> {
        self.boxes
            .iter()
            .map(|b| b.iter().map(Shape::attributes).collect())
            .collect()
    }
}

/// Placement policy for a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Random non-overlapping positions, mixed kinds and sizes.
    Scatter,
    /// Single column stacked upward from the bottom, centred.
    Tower,
    /// Single row laid left to right along the bottom.
    Row,
}

impl Layout {
    pub fn is_stacked(self) -> bool {
        !matches!(self, Layout::Scatter)
    }
}

// -- Engine I/O ----------------------------------------------------

fn default_max_placement_attempts() -> u32 {
    10_000
}
fn default_shrink_after() -> u32 {
    100
}
fn default_max_split_attempts() -> u32 {
    1_000
}
fn default_max_generation_attempts() -> u32 {
    1_000
}

/// Caps on every retry loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Candidate positions tried for one shape before giving up.
    #[serde(default = "default_max_placement_attempts")]
    pub max_placement_attempts: u32,
    /// Rejections after which a shape may shrink to the smallest size.
    #[serde(default = "default_shrink_after")]
    pub shrink_after: u32,
    #[serde(default = "default_max_split_attempts")]
    pub max_split_attempts: u32,
    /// Whole environments rolled before giving up on novelty.
    #[serde(default = "default_max_generation_attempts")]
    pub max_generation_attempts: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_placement_attempts: 10_000,
            shrink_after: 100,
            max_split_attempts: 1_000,
            max_generation_attempts: 1_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateParams {
    pub seed: u64,
    pub layout: Layout,
    pub max_objects: u32,
    #[serde(default)]
    pub history: Vec<Environment>,
    #[serde(default)]
    pub limits: Limits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceParams {
    pub seed: u64,
    pub layout: Layout,
    pub max_objects_per_box: u32,
    pub objects: Vec<Vec<ShapeAttributes>>,
    #[serde(default)]
    pub history: Vec<Environment>,
    #[serde(default)]
    pub limits: Limits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectsParams {
    pub seed: u64,
    pub max_objects: u32,
}

/// A request accepted by [`crate::generate_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Request {
    Generate(GenerateParams),
    Replace(ReplaceParams),
    Objects(ObjectsParams),
}

// -- Tests ---------------------------------------------------------
