use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundli_vedic_base::{
    ALL_DIVISIONS, MoonPlacement, Placements, ashtakoot, detect_doshas, divisional_sign,
    evaluate_yogas, vimshottari_timeline,
};

fn varga_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("varga");
    group.bench_function("all_divisions", |b| {
        b.iter(|| {
            ALL_DIVISIONS
                .iter()
                .map(|d| divisional_sign(black_box(lon), *d) as u32)
                .sum::<u32>()
        })
    });
    group.finish();
}

fn rules_bench(c: &mut Criterion) {
    let lons = [
        10.0, 130.0, 25.0, 48.0, 215.0, 95.0, 200.0, 310.0, 330.0, 270.0, 75.0, 255.0,
    ];
    let placements = Placements::new(17.0, lons);

    let mut group = c.benchmark_group("rules");
    group.bench_function("doshas", |b| b.iter(|| detect_doshas(black_box(&placements))));
    group.bench_function("yogas", |b| b.iter(|| evaluate_yogas(black_box(&placements))));
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth = Utc.with_ymd_and_hms(1990, 3, 15, 6, 30, 0).unwrap();

    let mut group = c.benchmark_group("dasha");
    group.bench_function("vimshottari_level1", |b| {
        b.iter(|| vimshottari_timeline(birth, black_box(123.4), 1))
    });
    group.bench_function("vimshottari_level2", |b| {
        b.iter(|| vimshottari_timeline(birth, black_box(123.4), 2))
    });
    group.finish();
}

fn milan_bench(c: &mut Criterion) {
    let boy = MoonPlacement::from_longitude(40.0);
    let girl = MoonPlacement::from_longitude(212.0);

    let mut group = c.benchmark_group("milan");
    group.bench_function("ashtakoot", |b| {
        b.iter(|| ashtakoot(black_box(&boy), black_box(&girl)))
    });
    group.finish();
}

criterion_group!(benches, varga_bench, rules_bench, dasha_bench, milan_bench);
criterion_main!(benches);
