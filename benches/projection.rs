use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spherekit::{
    circumcenter, latitude_longitude, project_onto_tan_plane, project_onto_tan_sphere,
    project_onto_upper_plane, project_onto_upper_sphere, to_cartesian, Cartesian3, Pole,
};

fn bench_conversions(c: &mut Criterion) {
    let p = to_cartesian(37.5, -122.25);
    c.bench_function("latitude_longitude", |b| {
        b.iter(|| latitude_longitude(black_box(p)))
    });
    c.bench_function("to_cartesian", |b| {
        b.iter(|| to_cartesian(black_box(37.5), black_box(-122.25)))
    });
}

fn bench_projections(c: &mut Criterion) {
    let p = to_cartesian(12.0, 48.0);
    let q = project_onto_upper_plane(p).unwrap();
    c.bench_function("upper_plane_round_trip", |b| {
        b.iter(|| project_onto_upper_sphere(project_onto_upper_plane(black_box(p)).unwrap()))
    });

    let pole = Pole::new(Cartesian3::new(0.3, -0.4, 0.5)).unwrap();
    c.bench_function("tan_plane_round_trip", |b| {
        b.iter(|| project_onto_tan_sphere(project_onto_tan_plane(black_box(p), &pole).unwrap(), &pole))
    });
    c.bench_function("upper_sphere", |b| b.iter(|| project_onto_upper_sphere(black_box(q))));
}

fn bench_circumcenter(c: &mut Criterion) {
    let (p1, p2, p3) = (
        to_cartesian(10.0, 20.0),
        to_cartesian(-5.0, 60.0),
        to_cartesian(40.0, 45.0),
    );
    c.bench_function("circumcenter", |b| {
        b.iter(|| circumcenter(black_box(p1), black_box(p2), black_box(p3)))
    });
}

criterion_group!(benches, bench_conversions, bench_projections, bench_circumcenter);
criterion_main!(benches);
