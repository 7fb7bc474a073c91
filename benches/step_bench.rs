use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rigid2d::{Body, Circle, Polygon, Shape, Vec2, World};

// --- Helper for the raining-bodies scenario ---
fn build_rain_world(num_bodies: usize) -> World {
    let mut world = World::new();
    world.gravity = Vec2::new(0.0, 0.08);

    // Fixed floor spanning the scene.
    world.add_body(Body::fixed(Shape::Polygon(Polygon::rect(
        Vec2::new(400.0, 585.0),
        800.0,
        30.0,
    ))));

    // Alternate boxes and balls in a loose grid above the floor.
    for i in 0..num_bodies {
        let x = 40.0 + (i % 16) as f64 * 48.0;
        let y = 40.0 + (i / 16) as f64 * 48.0;
        let mut body = if i % 2 == 0 {
            Body::new(Shape::Polygon(Polygon::rect(Vec2::new(x, y), 40.0, 40.0)), 1.0)
        } else {
            Body::new(Shape::Circle(Circle::new(Vec2::new(x, y), 20.0)), 1.0)
        };
        body.velocity = Vec2::new(0.0, 1.0);
        world.add_body(body);
    }
    world
}

fn run_steps(world: &mut World, steps: usize) {
    for _ in 0..steps {
        black_box(world.step());
    }
}

// All-pairs detection plus resolution over a mixed falling scene
fn bench_step_rain(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_rain");

    for num_bodies in [16, 64, 256].iter() {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(num_bodies),
            num_bodies,
            |b, &n| {
                b.iter(|| {
                    let mut world = build_rain_world(black_box(n));
                    run_steps(&mut world, 30);
                });
            },
        );
    }
    group.finish();
}

// Narrow-phase cost in isolation: a dense cluster of overlapping pairs
fn bench_step_cluster(c: &mut Criterion) {
    c.bench_function("step_cluster_32", |b| {
        b.iter(|| {
            let mut world = World::new();
            for i in 0..32 {
                let angle = i as f64 * 0.196;
                let center = Vec2::new(angle.cos() * 15.0, angle.sin() * 15.0);
                world.add_body(Body::new(Shape::Circle(Circle::new(center, 12.0)), 1.0));
            }
            run_steps(&mut world, 10);
        });
    });
}

criterion_group!(benches, bench_step_rain, bench_step_cluster);
criterion_main!(benches);
