//! Order-independent signatures for boxes and environments.
//!
//! Each shape serializes to its JSON record (type, color, size, x_loc,
//! y_loc). A box signature is the JSON array of its sorted shape records;
//! an environment signature is the JSON array of its sorted box
//! signatures. Positions are part of the record, so two environments
//! holding the same objects at different positions are distinct.

use serde::Serialize;

use crate::types::{Environment, Shape, NUM_BOXES};

/// Canonical form of an environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Signature(String);

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Plain enums, integers and strings cannot fail to serialize.
    serde_json::to_string(value).unwrap_or_default()
}

/// Signature of one box, independent of shape order.
pub fn box_signature(shapes: &[Shape]) -> String {
    let mut records: Vec<String> = shapes.iter().map(to_json).collect();
    if records.len() > 1 {
        records.sort();
    }
    to_json(&records)
}

/// Signature of an environment, independent of box order and of shape
/// order within each box.
pub fn canonical_signature(env: &Environment) -> Signature {
    let mut boxes: Vec<String> = env.boxes.iter().map(|b| box_signature(b)).collect();
    boxes.sort();
    Signature(to_json(&boxes))
}

/// True if both environments hold three boxes with the same contents.
pub fn is_equal(a: &Environment, b: &Environment) -> bool {
    if a.boxes.len() != NUM_BOXES || b.boxes.len() != NUM_BOXES {
        return false;
    }
    canonical_signature(a) == canonical_signature(b)
}

/// True if `env` canonically equals any environment in `history`.
pub fn matches_any(env: &Environment, history: &[Environment]) -> bool {
    if env.boxes.len() != NUM_BOXES {
        return false;
    }
    let sig = canonical_signature(env);
    history
        .iter()
        .any(|prev| prev.boxes.len() == NUM_BOXES && canonical_signature(prev) == sig)
}
