use crate::data::{Graph, TriangleId, TriangleNode};
use crate::orientation::{self, Orientation};
use crate::point::Point;
use crate::Error;

/// `true` iff `polygon` is wound counter-clockwise.
///
/// Finds the vertex with minimum x (ties broken by minimum y) and checks
/// whether its predecessor sits above its successor.
pub fn is_ccw(polygon: &[Point]) -> bool {
  let n = polygon.len();
  let leftmost = (0..n)
    .min_by_key(|&i| (polygon[i].x, polygon[i].y))
    .expect("is_ccw: polygon must be non-empty");
  let prev = polygon[(leftmost + n - 1) % n];
  let next = polygon[(leftmost + 1) % n];
  prev.y > next.y
}

/// Emits `triangle` into the graph (three edges) and the triangle index
/// (recorded at all three vertices), and appends it to `arena`/`out`.
fn emit_triangle(
  graph: &mut Graph,
  arena: &mut Vec<TriangleNode>,
  index: &mut std::collections::BTreeMap<Point, Vec<TriangleId>>,
  out: &mut Vec<TriangleId>,
  p1: Point,
  p2: Point,
  p3: Point,
  is_base: bool,
  is_inside: bool,
) -> Result<TriangleId, Error> {
  graph.add_edge(p1, p2)?;
  graph.add_edge(p2, p3)?;
  graph.add_edge(p3, p1)?;
  let id = TriangleId(arena.len());
  arena.push(TriangleNode::new(p1, p2, p3, is_base, is_inside));
  index.entry(p1).or_default().push(id);
  index.entry(p2).or_default().push(id);
  index.entry(p3).or_default().push(id);
  out.push(id);
  log::trace!("triangulate: emitted {:?} ({:?}, {:?}, {:?})", id, p1, p2, p3);
  Ok(id)
}

/// `true` iff no vertex of `points` (other than `a`, `b`, `c` themselves)
/// lies strictly inside the triangle `(a, b, c)`, and `(a, b, c)` turns
/// left-or-collinear. This scans the full local polygon rather than just
/// the remaining boundary, which is fine because every call site passes a
/// small polygon (the whole input once, or a vertex's neighborhood of at
/// most `MAX_DEGREE + 1` points during refinement).
fn is_ear(a: Point, b: Point, c: Point, points: &[Point]) -> bool {
  if orientation::is_right_turn(a, b, c) {
    return false;
  }
  points
    .iter()
    .all(|&pt| pt == a || pt == b || pt == c || !orientation::inside_triangle(a, b, c, pt))
}

/// Ear-clipping triangulation of a CCW simple polygon.
///
/// Maintains a running stack of pending vertices; whenever the top two
/// together with the incoming vertex form an ear, that triangle is emitted
/// and the stack shrinks by one.
pub fn triangulate_polygon(
  points: &[Point],
  graph: &mut Graph,
  arena: &mut Vec<TriangleNode>,
  index: &mut std::collections::BTreeMap<Point, Vec<TriangleId>>,
  is_base: bool,
  is_inside: bool,
) -> Result<Vec<TriangleId>, Error> {
  let mut out = Vec::new();
  let mut stack: Vec<Point> = Vec::new();
  for &pt in points {
    while stack.len() >= 2 {
      let b = stack[stack.len() - 1];
      let a = stack[stack.len() - 2];
      if !is_ear(a, b, pt, points) {
        break;
      }
      emit_triangle(graph, arena, index, &mut out, a, b, pt, is_base, is_inside)?;
      stack.pop();
    }
    stack.push(pt);
  }
  Ok(out)
}

/// Walks `points` starting at its leftmost vertex, building the convex
/// hull in one monotone-chain-like pass. Every vertex popped from the hull
/// stack forms a base, non-interior pocket triangle with its neighbors.
/// Returns the convex hull, CCW, starting at the leftmost vertex.
pub fn triangulate_pockets(
  points: &[Point],
  graph: &mut Graph,
  arena: &mut Vec<TriangleNode>,
  index: &mut std::collections::BTreeMap<Point, Vec<TriangleId>>,
) -> Result<Vec<Point>, Error> {
  let n = points.len();
  let leftmost = (0..n)
    .min_by_key(|&i| (points[i].x, points[i].y))
    .expect("triangulate_pockets: polygon must be non-empty");
  let mut hull: Vec<Point> = vec![points[leftmost], points[(leftmost + 1) % n]];
  let mut discard = Vec::new();
  let mut i = leftmost + 2;
  while i - leftmost != n + 1 {
    let pt = points[i % n];
    loop {
      if hull.len() <= 1 {
        hull.push(pt);
        break;
      }
      let top = hull[hull.len() - 1];
      let below = hull[hull.len() - 2];
      if !orientation::is_right_turn(below, top, pt) {
        hull.push(pt);
        break;
      }
      emit_triangle(graph, arena, index, &mut discard, pt, top, below, true, false)?;
      hull.pop();
    }
    i += 1;
  }
  Ok(hull)
}

/// `true` iff hull vertex `hull[i]` is visible from `outer[j]`, i.e. the
/// hull edge `(hull[i], hull[i+1])` turns right as seen from `outer[j]`.
fn is_visible(hull: &[Point], i: usize, outer: &[Point; 3], j: usize) -> bool {
  orientation::is_right_turn(outer[j], hull[i], hull[(i + 1) % hull.len()])
}

/// Fans the region between the CCW convex hull `hull` (first element
/// leftmost) and the CCW outer bounding triangle `outer` with base,
/// non-interior triangles.
pub fn triangulate_with_outer_triangle(
  hull: &[Point],
  outer: [Point; 3],
  graph: &mut Graph,
  arena: &mut Vec<TriangleNode>,
  index: &mut std::collections::BTreeMap<Point, Vec<TriangleId>>,
) -> Result<(), Error> {
  let mut discard = Vec::new();
  // hull[0] is leftmost, so it sees both outer[0] and outer[2].
  emit_triangle(
    graph, arena, index, &mut discard, hull[0], outer[2], outer[0], true, false,
  )?;
  let mut last_seen = 0usize;
  for i in 1..hull.len() {
    if is_visible(hull, i, &outer, last_seen) {
      emit_triangle(
        graph,
        arena,
        index,
        &mut discard,
        hull[i - 1],
        outer[last_seen],
        hull[i],
        true,
        false,
      )?;
    }
    if last_seen < 2 && is_visible(hull, i, &outer, last_seen + 1) {
      emit_triangle(
        graph,
        arena,
        index,
        &mut discard,
        outer[last_seen],
        outer[last_seen + 1],
        hull[i],
        true,
        false,
      )?;
      last_seen += 1;
    }
  }
  Ok(())
}

/// Builds a right triangle strictly containing every point in `points`,
/// with at least 10 units of headroom on every side.
pub fn outer_bounding_triangle(points: &[Point]) -> [Point; 3] {
  let x_min = points.iter().map(|p| p.x).min().unwrap() - 10;
  let y_min = points.iter().map(|p| p.y).min().unwrap() - 10;
  let c = points.iter().map(|p| p.x + p.y).max().unwrap() + 10;
  [
    Point::new(x_min, y_min),
    Point::new(c - y_min, y_min),
    Point::new(x_min, c - x_min),
  ]
}
