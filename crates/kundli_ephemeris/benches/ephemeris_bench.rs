use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundli_ephemeris::{Ephemeris, EphemerisConfig, EphemerisProvider};
use kundli_vedic_base::GeoLocation;

fn positions_bench(c: &mut Criterion) {
    let eph = Ephemeris::new(EphemerisConfig::default()).unwrap();
    let geo = GeoLocation::new(28.6139, 77.2090).unwrap();
    let instant = Utc.with_ymd_and_hms(1990, 3, 15, 6, 30, 0).unwrap();
    eph.positions(instant, &geo).unwrap();

    c.bench_function("positions_all_bodies", |b| {
        b.iter(|| eph.positions(black_box(instant), black_box(&geo)))
    });
}

criterion_group!(benches, positions_bench);
criterion_main!(benches);
