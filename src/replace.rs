//! Re-placing a fixed set of objects into new boxes.
//!
//! Objects keep their kind, color and size; only the box they land in
//! and their position change.

use tracing::{debug, warn};

use crate::canonical::matches_any;
use crate::error::{Error, Result};
use crate::placement::place_box;
use crate::prng::{Pcg32, RandomSource};
use crate::types::{
    Color, Environment, Layout, Limits, ObjectsParams, ReplaceParams, ShapeAttributes, ShapeKind,
    Size, NUM_BOXES,
};

/// Pick the two cut points of a shuffled pool.
///
/// Both cuts are drawn as offsets in `1..=max_per_box`, so the first box
/// is bounded by its draw alone. Only the second and third boxes are
/// checked against `1..=max_per_box`.
pub fn choose_split<R: RandomSource>(
    rng: &mut R,
    pool: usize,
    max_per_box: u32,
    limits: &Limits,
) -> Result<(usize, usize)> {
    let max = max_per_box as usize;
    for attempt in 1..=limits.max_split_attempts {
        let first = rng.range(1, max_per_box) as usize;
        let second = first + rng.range(1, max_per_box) as usize;

        let in_second = second - first;
        let in_third = pool.saturating_sub(second);
        if (1..=max).contains(&in_second) && (1..=max).contains(&in_third) {
            return Ok((first, second));
        }
        debug!(attempt, first, second, pool, "rejected split");
    }

    warn!(pool, max_per_box, attempts = limits.max_split_attempts, "split selection exhausted");
    Err(Error::SplitSelectionExhausted {
        pool,
        max_per_box,
        attempts: limits.max_split_attempts,
    })
}

/// Shuffle every object into three new boxes and give each a fresh
/// position, rerolling until the result is canonically distinct from
/// every environment in `history`.
pub fn replace_objects<R: RandomSource>(
    rng: &mut R,
    objects_by_box: &[Vec<ShapeAttributes>],
    layout: Layout,
    max_per_box: u32,
    history: &[Environment],
    limits: &Limits,
) -> Result<Environment> {
    if objects_by_box.len() != NUM_BOXES {
        return Err(Error::InvalidParams(format!(
            "expected {NUM_BOXES} boxes of objects, got {}",
            objects_by_box.len()
        )));
    }
    if max_per_box == 0 {
        return Err(Error::InvalidParams(
            "max_objects_per_box must be at least 1".into(),
        ));
    }
    let mut pool: Vec<ShapeAttributes> = objects_by_box.iter().flatten().copied().collect();
    if pool.len() < NUM_BOXES {
        return Err(Error::InvalidParams(format!(
            "need at least {NUM_BOXES} objects to fill every box, got {}",
            pool.len()
        )));
    }

    // Set while no attempt has managed to place every box.
    let mut unplaced: Option<Error> = None;
    let mut placed_any = false;

    for attempt in 1..=limits.max_generation_attempts {
        rng.shuffle(&mut pool);
        let (first, second) = choose_split(rng, pool.len(), max_per_box, limits)?;

        let parts = [&pool[..first], &pool[first..second], &pool[second..]];
        let boxes = match parts
            .iter()
            .map(|part| place_box(rng, part, layout, false, limits))
            .collect::<Result<Vec<_>>>()
        {
            Ok(boxes) => boxes,
            Err(err @ Error::PlacementExhausted { .. }) => {
                // Another split of the same pool may fit.
                debug!(attempt, error = %err, "partition did not fit, reshuffling");
                unplaced = Some(err);
                continue;
            }
            Err(err) => return Err(err),
        };
        placed_any = true;
        let env = Environment::new(boxes);
        if !matches_any(&env, history) {
            return Ok(env);
        }
        debug!(attempt, history = history.len(), "duplicate re-placement, reshuffling");
    }

    if let (false, Some(err)) = (placed_any, unplaced) {
        warn!(attempts = limits.max_generation_attempts, "no split of the pool fits");
        return Err(err);
    }

    warn!(
        attempts = limits.max_generation_attempts,
        history = history.len(),
        "re-placement exhausted"
    );
    Err(Error::GenerationExhausted {
        attempts: limits.max_generation_attempts,
        history: history.len(),
    })
}

/// Draw a random pool of between 3 and `3 * max_objects + 2` unplaced
/// objects.
pub fn generate_objects<R: RandomSource>(
    rng: &mut R,
    max_objects: u32,
) -> Result<Vec<ShapeAttributes>> {
    if max_objects == 0 {
        return Err(Error::InvalidParams(
            "max_objects must be at least 1".into(),
        ));
    }
    let spread = max_objects
        .checked_mul(NUM_BOXES as u32)
        .ok_or_else(|| Error::InvalidParams(format!("max_objects {max_objects} is too large")))?;
    let count = 3 + rng.below(spread);
    Ok((0..count)
        .map(|_| {
            let kind = rng.pick(&ShapeKind::ALL);
            let color = rng.pick(&Color::ALL);
            let size = rng.pick(&Size::ALL);
            ShapeAttributes::new(kind, color, size)
        })
        .collect())
}

/// Seeded entry point for [`replace_objects`].
pub fn replace(params: &ReplaceParams) -> Result<Environment> {
    let mut rng = Pcg32::new(params.seed, 0);
    replace_objects(
        &mut rng,
        &params.objects,
        params.layout,
        params.max_objects_per_box,
        &params.history,
        &params.limits,
    )
}

/// Seeded entry point for [`generate_objects`].
pub fn objects(params: &ObjectsParams) -> Result<Vec<ShapeAttributes>> {
    let mut rng = Pcg32::new(params.seed, 0);
    generate_objects(&mut rng, params.max_objects)
}
