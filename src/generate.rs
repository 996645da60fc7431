//! Fresh environment generation.

use tracing::{debug, warn};

use crate::canonical::matches_any;
use crate::error::{Error, Result};
use crate::placement::{place_box, scatter_capacity, stack_capacity};
use crate::prng::{Pcg32, RandomSource};
use crate::types::{
    Color, Environment, GenerateParams, Layout, Limits, ShapeAttributes, ShapeBox, ShapeKind,
    Size, NUM_BOXES,
};

/// Size every stacked shape gets in a freshly generated box.
const STACKED_SIZE: Size = Size::Medium;

fn validate(layout: Layout, max_objects: u32) -> Result<()> {
    if max_objects == 0 {
        return Err(Error::InvalidParams(
            "max_objects must be at least 1".into(),
        ));
    }
    if layout == Layout::Scatter && max_objects > scatter_capacity() {
        return Err(Error::InvalidParams(format!(
            "a scatter box holds at most {} shapes, asked for up to {max_objects}",
            scatter_capacity()
        )));
    }
    if layout.is_stacked() && max_objects > stack_capacity(STACKED_SIZE) {
        return Err(Error::InvalidParams(format!(
            "a {layout:?} box holds at most {} shapes, asked for up to {max_objects}",
            stack_capacity(STACKED_SIZE)
        )));
    }
    Ok(())
}

/// Draw one object for a fresh box. Kind, color and size are always
/// drawn so the stream advances the same way for every layout.
fn random_object<R: RandomSource>(rng: &mut R, layout: Layout) -> ShapeAttributes {
    let kind = rng.pick(&ShapeKind::ALL);
    let color = rng.pick(&Color::ALL);
    let size = rng.pick(&Size::ALL);
    match layout {
        Layout::Scatter => ShapeAttributes::new(kind, color, size),
        Layout::Tower => ShapeAttributes::new(ShapeKind::Square, color, STACKED_SIZE),
        Layout::Row => ShapeAttributes::new(kind, color, STACKED_SIZE),
    }
}

/// Generate the shapes of a single box: between 1 and `max_objects`
/// random objects, positioned according to `layout`.
pub fn generate_box<R: RandomSource>(
    rng: &mut R,
    layout: Layout,
    max_objects: u32,
    limits: &Limits,
) -> Result<ShapeBox> {
    validate(layout, max_objects)?;
    let count = rng.range(1, max_objects);
    let objects: Vec<ShapeAttributes> = (0..count).map(|_| random_object(rng, layout)).collect();
    place_box(rng, &objects, layout, true, limits)
}

/// Generate three boxes, rerolling all of them until the result is
/// canonically distinct from every environment in `history`.
pub fn generate_environment<R: RandomSource>(
    rng: &mut R,
    layout: Layout,
    max_objects: u32,
    history: &[Environment],
    limits: &Limits,
) -> Result<Environment> {
    validate(layout, max_objects)?;

    for attempt in 1..=limits.max_generation_attempts {
        let boxes = (0..NUM_BOXES)
            .map(|_| generate_box(rng, layout, max_objects, limits))
            .collect::<Result<Vec<_>>>()?;
        let env = Environment::new(boxes);
        if !matches_any(&env, history) {
            return Ok(env);
        }
        debug!(attempt, history = history.len(), "duplicate environment, regenerating");
    }

    warn!(
        attempts = limits.max_generation_attempts,
        history = history.len(),
        "environment generation exhausted"
    );
    Err(Error::GenerationExhausted {
        attempts: limits.max_generation_attempts,
        history: history.len(),
    })
}

/// Seeded entry point for [`generate_environment`].
pub fn generate(params: &GenerateParams) -> Result<Environment> {
    let mut rng = Pcg32::new(params.seed, 0);
    generate_environment(
        &mut rng,
        params.layout,
        params.max_objects,
        &params.history,
        &params.limits,
    )
}

// -----------------------------------------------------------------
// Tests
// -----------------------------------------------------------------
