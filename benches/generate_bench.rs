//! Criterion benchmarks for environment generation and re-placement.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, Criterion};
use shape_envs::canonical::canonical_signature;
use shape_envs::generate::generate;
use shape_envs::replace::replace;
use shape_envs::types::{GenerateParams, ReplaceParams};

// -- JSON fixtures --

/// Scatter boxes of up to 8 shapes, no history.
const SCATTER_JSON: &str = r#"{
  "seed": 42,
  "layout": "scatter",
  "max_objects": 8
}"#;

/// Tower boxes of up to 4 squares, no history.
const TOWER_JSON: &str = r#"{
  "seed": 42,
  "layout": "tower",
  "max_objects": 4
}"#;

/// Re-place nine objects, avoiding the layout they came from.
const REPLACE_JSON: &str = r#"{
  "seed": 7,
  "layout": "scatter",
  "max_objects_per_box": 4,
  "objects": [
    [
      { "type": "square", "color": "Black", "size": 30 },
      { "type": "circle", "color": "Blue", "size": 20 },
      { "type": "triangle", "color": "Yellow", "size": 10 }
    ],
    [
      { "type": "circle", "color": "Black", "size": 30 },
      { "type": "circle", "color": "Yellow", "size": 10 }
    ],
    [
      { "type": "square", "color": "Blue", "size": 20 },
      { "type": "triangle", "color": "Black", "size": 20 },
      { "type": "square", "color": "Yellow", "size": 30 },
      { "type": "triangle", "color": "Blue", "size": 10 }
    ]
  ]
}"#;

fn bench_scatter(c: &mut Criterion) {
    let params: GenerateParams = serde_json::from_str(SCATTER_JSON).unwrap();
    c.bench_function("generate_scatter_8", |b| {
        b.iter(|| generate(&params));
    });
}

fn bench_tower(c: &mut Criterion) {
    let params: GenerateParams = serde_json::from_str(TOWER_JSON).unwrap();
    c.bench_function("generate_tower_4", |b| {
        b.iter(|| generate(&params));
    });
}

fn bench_scatter_with_history(c: &mut Criterion) {
    // Every call checks against 200 earlier environments.
    let mut params: GenerateParams = serde_json::from_str(SCATTER_JSON).unwrap();
    for seed in 0..200 {
        params.seed = 1_000 + seed;
        let env = generate(&params).unwrap();
        params.history.push(env);
    }
    params.seed = 42;
    c.bench_function("generate_scatter_8_history_200", |b| {
        b.iter(|| generate(&params));
    });
}

fn bench_replace(c: &mut Criterion) {
    let params: ReplaceParams = serde_json::from_str(REPLACE_JSON).unwrap();
    c.bench_function("replace_nine_objects", |b| {
        b.iter(|| replace(&params));
    });
}

fn bench_signature(c: &mut Criterion) {
    let params: GenerateParams = serde_json::from_str(SCATTER_JSON).unwrap();
    let env = generate(&params).unwrap();
    c.bench_function("canonical_signature_scatter", |b| {
        b.iter(|| canonical_signature(&env));
    });
}

criterion_group!(
    benches,
    bench_scatter,
    bench_tower,
    bench_scatter_with_history,
    bench_replace,
    bench_signature
);
criterion_main!(benches);
