use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figures::{Circle, Cube, Figure, Rgb, Triangle};

// --- Helper for construction benchmarks ---
fn run_construction_bench(count: usize) {
    let color = Rgb::new(200, 200, 100);
    for i in 0..count {
        let side = (i % 50 + 1) as i64;
        let c = Circle::new(color, &[side]);
        let t = Triangle::new(color, &[side, side + 1, side + 2]);
        let q = Cube::new(color, &[side]);
        black_box((c, t, q));
    }
}

// --- Helper for geometry benchmarks ---
fn run_geometry_bench(triangles: &[Triangle], cubes: &[Cube]) -> (f64, i64) {
    let mut area_sum = 0.0;
    for t in triangles {
        if let Ok(area) = t.area() {
            area_sum += area;
        }
    }
    let mut volume_sum = 0;
    for c in cubes {
        volume_sum += c.volume();
    }
    (area_sum, volume_sum)
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("construct 1000 figures", |b| {
        b.iter(|| run_construction_bench(black_box(1000)))
    });
}

fn bench_geometry(c: &mut Criterion) {
    let color = Rgb::new(1, 2, 3);
    let triangles: Vec<Triangle> = (1..=1000)
        .map(|i| Triangle::new(color, &[i, i + 1, i + 2]))
        .collect();
    let cubes: Vec<Cube> = (1..=1000).map(|i| Cube::new(color, &[i])).collect();

    c.bench_function("area and volume over 1000 figures", |b| {
        b.iter(|| run_geometry_bench(black_box(&triangles), black_box(&cubes)))
    });
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("validated mutations", |b| {
        let mut circle = Circle::new(Rgb::new(200, 200, 100), &[10]);
        b.iter(|| {
            circle.set_color(black_box(55), black_box(66), black_box(77));
            circle.set_color(black_box(300), black_box(70), black_box(15)); // rejected
            circle.set_sides(black_box(&[15]));
            black_box(circle.perimeter())
        })
    });
}

criterion_group!(benches, bench_construction, bench_geometry, bench_mutation);
criterion_main!(benches);
