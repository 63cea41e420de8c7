// Benchmarks for the medcast pipeline stages
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use medcast_core::{Frame, Value};
use medcast_features::{build_feature_pipeline, Encoder};
use medcast_index::{documents, similar_avg_cost, HashEmbedder, SimilarityIndex, INSIGHT_K};
use rand::prelude::*;

fn synthetic_frame(rows: usize) -> Frame {
    let mut rng = rand::rng();
    let sexes = ["female", "male"];
    let regions = ["northeast", "northwest", "southeast", "southwest"];

    let mut age = Vec::with_capacity(rows);
    let mut sex = Vec::with_capacity(rows);
    let mut bmi = Vec::with_capacity(rows);
    let mut children = Vec::with_capacity(rows);
    let mut smoker = Vec::with_capacity(rows);
    let mut region = Vec::with_capacity(rows);
    let mut charges = Vec::with_capacity(rows);
    for _ in 0..rows {
        age.push(Value::Int(rng.random_range(18..65)));
        sex.push(Value::from(sexes[rng.random_range(0..2)]));
        bmi.push(Value::Float(rng.random_range(16.0..45.0)));
        children.push(Value::Int(rng.random_range(0..5)));
        smoker.push(Value::from(if rng.random_bool(0.2) { "yes" } else { "no" }));
        region.push(Value::from(regions[rng.random_range(0..4)]));
        charges.push(Value::Float(rng.random_range(1100.0..64000.0)));
    }

    Frame::from_columns(vec![
        ("age".to_string(), age),
        ("sex".to_string(), sex),
        ("bmi".to_string(), bmi),
        ("children".to_string(), children),
        ("smoker".to_string(), smoker),
        ("region".to_string(), region),
        ("charges".to_string(), charges),
    ])
    .unwrap()
}

fn benchmark_feature_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("features");

    for size in [100, 1000].iter() {
        let frame = synthetic_frame(*size);
        group.bench_with_input(BenchmarkId::new("build_and_encode", size), size, |b, _| {
            b.iter(|| {
                let mut working = frame.clone();
                build_feature_pipeline(&mut working).unwrap();
                let encoder = Encoder::fit(&working);
                black_box(encoder.encode(&working).unwrap());
            });
        });
    }

    group.finish();
}

fn benchmark_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");

    let frame = synthetic_frame(1000);
    let docs = documents(&frame);
    let query_text = docs[0].text.clone();

    group.bench_function("build_1000", |b| {
        b.iter(|| {
            let index =
                SimilarityIndex::build(Box::new(HashEmbedder::default()), docs.clone()).unwrap();
            black_box(index);
        });
    });

    let index = SimilarityIndex::build(Box::new(HashEmbedder::default()), docs).unwrap();
    group.bench_function("search_1000", |b| {
        b.iter(|| {
            black_box(index.search(black_box(&query_text), 5));
        });
    });

    group.bench_function("insight_1000", |b| {
        b.iter(|| {
            black_box(similar_avg_cost(&index, black_box(&query_text), INSIGHT_K));
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_feature_pipeline, benchmark_index);
criterion_main!(benches);
