use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swizzle_math::{Mat4, Vec3, Vec4};

fn swizzle_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("Swizzle access");

    let points: Vec<Vec4> = (0..1024)
        .map(|i| {
            let t = i as f32;
            Vec4::new(t, t * 0.5, -t, 1.0)
        })
        .collect();

    group.bench_function("read", |b| {
        b.iter(|| {
            let mut acc = Vec3::zero();
            for p in &points {
                acc += p.zyx().read();
            }
            black_box(acc)
        })
    });

    group.bench_function("write_swap", |b| {
        let mut points = points.clone();
        b.iter(|| {
            for p in &mut points {
                p.set_wzyx(p.xyzw().read());
            }
            black_box(&points);
        })
    });

    group.bench_function("algebra", |b| {
        b.iter(|| {
            let mut acc = Vec3::zero();
            for p in &points {
                acc += p.xyz() * p.yzx() - p.zzz() / 2.0;
            }
            black_box(acc)
        })
    });

    group.bench_function("compound_assign", |b| {
        let mut points = points.clone();
        b.iter(|| {
            for p in &mut points {
                let mut xz = p.xz_mut();
                xz *= 0.5;
            }
            black_box(&points);
        })
    });

    group.finish();
}

fn matrix_transform(c: &mut Criterion) {
    let transform = Mat4::translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::rotation_y(0.3);
    let point = Vec4::new(1.0, 1.0, 1.0, 1.0);

    c.bench_function("Matrix * Vector", |b| {
        b.iter(|| black_box(transform) * black_box(point))
    });
}

criterion_group!(benches, swizzle_access, matrix_transform);
criterion_main!(benches);
