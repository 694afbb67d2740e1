//! Benchmarks for the recommendation pipeline: build phase and query phase.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recomendar::prelude::*;

fn synthetic_catalog(n: usize) -> Vec<Item> {
    let genres = [
        "racing", "strategy", "roguelike", "survival", "puzzle", "horror", "platformer",
        "simulation", "shooter", "rhythm",
    ];
    let tags = [
        "multiplayer",
        "singleplayer",
        "co-op",
        "open-world",
        "pixel-art",
        "procedural",
        "story-rich",
        "competitive",
        "relaxing",
        "difficult",
    ];
    let studios = [
        "redwood", "lunar", "cobalt", "driftwood", "ember", "northlight", "quartz", "meridian",
        "harbor", "violet",
    ];

    (0..n)
        .map(|i| {
            let tokens = vec![
                genres[i % genres.len()],
                tags[(i / 10) % tags.len()],
                studios[(i / 100) % studios.len()],
            ];
            Item::new(i as u64, format!("game {i}"), tokens)
        })
        .collect()
}

fn synthetic_plays(n_users: usize, catalog_size: usize) -> Vec<Interaction> {
    (0..n_users)
        .flat_map(|u| {
            (0..5).map(move |g| {
                let item_id = ((u * 37 + g * 101) % catalog_size) as u64;
                Interaction::new(format!("user{u}"), item_id, (g as i64 + 1) * 120, g as i64 * 30)
            })
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_build");
    group.sample_size(10); // N^2 similarity matrix per iteration

    for size in [100, 500, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let items = synthetic_catalog(size);
            let plays = synthetic_plays(50, size);
            b.iter(|| {
                RecommendationEngine::build(
                    black_box(items.clone()),
                    black_box(plays.clone()),
                    EngineConfig::default(),
                )
                .expect("valid synthetic tables")
            });
        });
    }

    group.finish();
}

fn bench_k_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_neighbors");

    for size in [100, 1_000, 5_000].iter() {
        let engine = RecommendationEngine::build(
            synthetic_catalog(*size),
            vec![],
            EngineConfig::default(),
        )
        .expect("valid synthetic tables");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| engine.k_neighbors(black_box(7), black_box(10)).unwrap());
        });
    }

    group.finish();
}

fn bench_make_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_prediction");

    for size in [100, 1_000, 5_000].iter() {
        let engine = RecommendationEngine::build(
            synthetic_catalog(*size),
            synthetic_plays(200, *size),
            EngineConfig::default(),
        )
        .expect("valid synthetic tables");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                engine
                    .make_prediction(black_box("user42"), black_box(10), true)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_k_neighbors, bench_make_prediction);
criterion_main!(benches);
