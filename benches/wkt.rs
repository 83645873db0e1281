use criterion::{criterion_group, criterion_main, Criterion};
use geowkt::geometry::Geometry;
use geowkt::io::wkt;

fn sample_wkt() -> String {
    // A polygon with one hole and enough vertices to dominate fixed costs.
    let exterior: Vec<String> = (0..200)
        .map(|i| format!("{}.5 {}.25", i, (i * 7) % 100))
        .collect();
    let interior: Vec<String> = (0..50)
        .map(|i| format!("{}.125 {}.75", i + 10, (i * 3) % 40 + 10))
        .collect();
    format!(
        "SRID=4326;POLYGON (({}), ({}))",
        exterior.join(", "),
        interior.join(", ")
    )
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let input = sample_wkt();

    c.bench_function("parse WKT polygon", |b| {
        b.iter(|| {
            let _geom: Geometry = input.parse().unwrap();
        })
    });

    let geometry: Geometry = input.parse().unwrap();
    c.bench_function("write WKT polygon", |b| {
        b.iter(|| wkt::write(&geometry))
    });

    c.bench_function("round-trip WKT polygon", |b| {
        b.iter(|| wkt::write(&input.parse::<Geometry>().unwrap()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
