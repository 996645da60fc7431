//! Procedural three-box shape environments.
//!
//! Generates scenes of colored squares, circles and triangles laid out
//! in three side-by-side boxes, and guarantees that no environment
//! repeats one the caller has already seen, regardless of box order or
//! of shape order within a box.
//!
//! [`generate_json`] accepts a JSON request and returns JSON, for
//! callers outside Rust.

pub mod canonical;
pub mod collision;
pub mod error;
pub mod generate;
pub mod placement;
pub mod prng;
pub mod render;
pub mod replace;
pub mod types;

pub use canonical::{box_signature, canonical_signature, is_equal, Signature};
pub use error::{Error, Result};
pub use generate::{generate_box, generate_environment};
pub use replace::{generate_objects, replace_objects};
pub use types::{Color, Environment, Layout, Limits, Shape, ShapeAttributes, ShapeKind, Size};

use tracing::info;

/// Run one request.
///
/// Takes a JSON string matching [`types::Request`] and returns the
/// resulting environment (or, for `"objects"`, the object pool) as JSON.
pub fn generate_json(request_json: &str) -> Result<String> {
    let request: types::Request = serde_json::from_str(request_json)?;

    let out = match &request {
        types::Request::Generate(params) => serde_json::to_string(&generate::generate(params)?)?,
        types::Request::Replace(params) => serde_json::to_string(&replace::replace(params)?)?,
        types::Request::Objects(params) => serde_json::to_string(&replace::objects(params)?)?,
    };
    info!(bytes = out.len(), "request complete");
    Ok(out)
}
