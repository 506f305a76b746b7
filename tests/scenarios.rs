use kirkpatrick::{build, Point};

fn p(x: i32, y: i32) -> Point {
  Point::new(x, y)
}

#[test]
fn unit_square() {
  let square = vec![p(0, 0), p(100, 0), p(100, 100), p(0, 100)];
  let locator = build(&square);
  assert!(locator.query(p(50, 50)));
  assert!(!locator.query(p(150, 50)));
  assert!(!locator.query(p(-1, 50)));
}

#[test]
fn unit_square_clockwise_input() {
  let square_cw = vec![p(0, 0), p(0, 100), p(100, 100), p(100, 0)];
  let locator = build(&square_cw);
  assert!(locator.query(p(50, 50)));
}

#[test]
fn convex_pentagon() {
  let pentagon = vec![p(0, 0), p(100, 0), p(120, 60), p(50, 120), p(-20, 60)];
  let locator = build(&pentagon);
  assert!(locator.query(p(50, 40)));
  assert!(!locator.query(p(200, 200)));
}

#[test]
fn non_convex_l_shape() {
  let l_shape = vec![
    p(0, 0),
    p(100, 0),
    p(100, 40),
    p(40, 40),
    p(40, 100),
    p(0, 100),
  ];
  let locator = build(&l_shape);
  assert!(locator.query(p(20, 20)));
  assert!(!locator.query(p(70, 70)));
  assert!(locator.query(p(90, 30)));
}

#[test]
fn right_triangle_above_hypotenuse_is_outside() {
  let triangle = vec![p(0, 0), p(100, 0), p(0, 100)];
  let locator = build(&triangle);
  assert!(locator.query(p(10, 10)));
  assert!(!locator.query(p(60, 60)));
  assert!(locator.query(p(30, 30)));
}

/// Regular 100-gon inscribed in a radius-1000 circle, cross-checked against
/// a linear even-odd ray-casting oracle on 10^4 random points.
mod stress {
  use super::*;
  use rand::rngs::SmallRng;
  use rand::{Rng, SeedableRng};

  fn regular_polygon(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
      .map(|i| {
        let theta = std::f64::consts::TAU * (i as f64) / (n as f64);
        p(
          (radius * theta.cos()).round() as i32,
          (radius * theta.sin()).round() as i32,
        )
      })
      .collect()
  }

  /// Classical even-odd ray-casting test, used only as an independent
  /// oracle in tests — never by the core itself.
  fn even_odd_contains(polygon: &[Point], q: Point) -> bool {
    let n = polygon.len();
    let mut inside = false;
    for i in 0..n {
      let a = polygon[i];
      let b = polygon[(i + 1) % n];
      let (ax, ay) = (a.x as f64, a.y as f64);
      let (bx, by) = (b.x as f64, b.y as f64);
      let (qx, qy) = (q.x as f64, q.y as f64);
      if (ay > qy) != (by > qy) {
        let x_intersect = ax + (qy - ay) / (by - ay) * (bx - ax);
        if qx < x_intersect {
          inside = !inside;
        }
      }
    }
    inside
  }

  #[test]
  fn center_and_far_outside() {
    let polygon = regular_polygon(100, 1000.0);
    let locator = build(&polygon);
    assert!(locator.query(p(0, 0)));
    assert!(!locator.query(p(5000, 5000)));
  }

  #[test]
  fn matches_even_odd_oracle_on_random_points() {
    let polygon = regular_polygon(100, 1000.0);
    let locator = build(&polygon);
    let mut rng = SmallRng::seed_from_u64(42);
    let mut discrepancies = 0;
    let mut checked = 0;
    for _ in 0..10_000 {
      let q = p(rng.gen_range(-1200..1200), rng.gen_range(-1200..1200));
      // Skip points too close to the boundary to avoid disagreements that
      // are only a matter of boundary-handling convention.
      let distance = ((q.x * q.x + q.y * q.y) as f64).sqrt();
      if (distance - 1000.0).abs() < 2.0 {
        continue;
      }
      let expected = even_odd_contains(&polygon, q);
      let actual = locator.query(q);
      if expected != actual {
        discrepancies += 1;
      }
      checked += 1;
    }
    assert!(checked > 9000);
    assert_eq!(discrepancies, 0);
  }
}

#[test]
fn reversing_input_does_not_change_answers() {
  let l_shape = vec![
    p(0, 0),
    p(100, 0),
    p(100, 40),
    p(40, 40),
    p(40, 100),
    p(0, 100),
  ];
  let reversed: Vec<Point> = l_shape.iter().rev().copied().collect();
  let forward = build(&l_shape);
  let backward = build(&reversed);
  for probe in [p(20, 20), p(70, 70), p(90, 30), p(-5, -5), p(50, 50)] {
    assert_eq!(forward.query(probe), backward.query(probe));
  }
}
