use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termswap::Engine;

fn benchmark_rewrite(c: &mut Criterion) {
    let engine = Engine::new("ride", "controlLoop").unwrap();
    let input = concat!(
        "export const loadRides = createAction(\"[Ride] Load Rides\");\n",
        "export const loadRideSuccess = createAction(\n",
        "  \"[Ride] Load Ride Success\",\n",
        "  props<{ ride: any; rides: Ride[] }>()\n",
        ");\n",
    )
    .repeat(128);

    c.bench_function("rewrite_content", |b| {
        b.iter(|| engine.rewrite_content(black_box(&input)));
    });

    c.bench_function("rewrite_filename", |b| {
        b.iter(|| engine.rewrite_filename(black_box("rides.effects.spec.ts")));
    });
}

criterion_group!(benches, benchmark_rewrite);
criterion_main!(benches);
