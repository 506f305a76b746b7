use criterion::{criterion_group, criterion_main, Criterion};
use kirkpatrick::{build, Point};

fn regular_polygon(n: usize, radius: f64) -> Vec<Point> {
  (0..n)
    .map(|i| {
      let theta = std::f64::consts::TAU * (i as f64) / (n as f64);
      Point::new(
        (radius * theta.cos()).round() as i32,
        (radius * theta.sin()).round() as i32,
      )
    })
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let small = regular_polygon(20, 1_000.0);
  let medium = regular_polygon(200, 10_000.0);
  let large = regular_polygon(2_000, 100_000.0);

  c.bench_function("build(20)", |b| b.iter(|| build(&small)));
  c.bench_function("build(200)", |b| b.iter(|| build(&medium)));
  c.bench_function("build(2000)", |b| b.iter(|| build(&large)));

  let locator = build(&medium);
  c.bench_function("query(200)", |b| {
    b.iter(|| locator.query(Point::new(0, 0)))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
