use std::collections::BTreeMap;

use claims::debug_assert_ok;

use crate::data::{Graph, TriangleId, TriangleNode};
use crate::orientation;
use crate::point::Point;
use crate::Error;

use super::triangulation::{
  is_ccw, outer_bounding_triangle, triangulate_pockets, triangulate_polygon,
  triangulate_with_outer_triangle,
};

/// Vertices are removed in batches no larger than this during refinement;
/// it bounds the cost of retriangulating a removed vertex's neighborhood
/// to O(1) amortized per vertex.
const MAX_DEGREE: usize = 8;

/// An immutable, queryable Kirkpatrick point-location structure over a
/// fixed simple polygon.
///
/// Built once by [`build`] (or [`try_build`]); every [`Locator::query`]
/// call afterwards is read-only and may run concurrently from any number
/// of threads.
#[derive(Debug, Clone)]
pub struct Locator {
  arena: Vec<TriangleNode>,
  root: TriangleId,
}

// SAFETY-free: `Locator` is plain owned data (no interior mutability, no
// `Rc`), so it is automatically `Send + Sync`; stated here for clarity.
#[cfg(test)]
const _: fn() = || {
  fn assert_send_sync<T: Send + Sync>() {}
  assert_send_sync::<Locator>();
};

impl Locator {
  fn node(&self, id: TriangleId) -> &TriangleNode {
    &self.arena[id.0]
  }

  /// `true` iff `pt` lies in the interior of the original polygon.
  /// Points exactly on a polygon edge or vertex are unspecified.
  pub fn query(&self, pt: impl Into<Point>) -> bool {
    let pt = pt.into();
    self.query_node(self.root, pt)
  }

  fn query_node(&self, id: TriangleId, pt: Point) -> bool {
    let node = self.node(id);
    if !orientation::inside_triangle(node.p1, node.p2, node.p3, pt) {
      return false;
    }
    if node.is_base {
      return node.is_inside;
    }
    node.children.iter().any(|&child| self.query_node(child, pt))
  }

  /// Number of triangle nodes retained in the DAG (for tests/diagnostics).
  pub fn node_count(&self) -> usize {
    self.arena.len()
  }
}

/// Builds a [`Locator`] for the simple polygon `points` (a cyclic sequence
/// of distinct vertices, in either winding order).
///
/// This is the infallible entry point described by the crate's external
/// interface: it requires at least 3 points and panics otherwise, matching
/// the original implementation's assumption that its input is already a
/// valid simple polygon. Callers that want to reject malformed input
/// explicitly instead of relying on that precondition should use
/// [`try_build`].
pub fn build(points: &[Point]) -> Locator {
  try_build(points).expect("build: polygon must have at least 3 distinct vertices")
}

/// Fallible counterpart of [`build`]. Returns `Err` for inputs this crate
/// can detect as malformed (fewer than 3 vertices, duplicate vertices);
/// non-simple polygons are not detected and produce unspecified behavior
/// per this crate's non-goals.
pub fn try_build(points: &[Point]) -> Result<Locator, Error> {
  if points.len() < 3 {
    return Err(Error::InsufficientVertices);
  }
  let mut seen = std::collections::BTreeSet::new();
  if !points.iter().all(|p| seen.insert(*p)) {
    return Err(Error::DuplicatePoints);
  }

  log::debug!("locator: building over {} vertices", points.len());

  let mut graph = Graph::new();
  let mut arena: Vec<TriangleNode> = Vec::new();
  let mut index: BTreeMap<Point, Vec<TriangleId>> = BTreeMap::new();

  for &p in points {
    graph.add_vertex(p);
  }
  for i in 0..points.len() {
    graph.add_edge(points[i], points[(i + 1) % points.len()])?;
  }

  let outer = outer_bounding_triangle(points);
  for &o in &outer {
    graph.add_vertex(o);
  }
  graph.set_special(outer);

  // The original's clockwise path reverses into a buffer that aliases its
  // own source; that is a latent bug (see design notes), not a behavior to
  // reproduce. Just build a fresh reversed sequence.
  let ccw_points: Vec<Point>;
  let ccw: &[Point] = if is_ccw(points) {
    points
  } else {
    log::debug!("locator: input polygon was clockwise, reversing");
    ccw_points = points.iter().rev().copied().collect();
    &ccw_points
  };

  triangulate_polygon(ccw, &mut graph, &mut arena, &mut index, true, true)?;
  let hull = triangulate_pockets(ccw, &mut graph, &mut arena, &mut index)?;
  triangulate_with_outer_triangle(&hull, outer, &mut graph, &mut arena, &mut index)?;

  debug_assert_ok!(check_all_ccw(&arena));

  refine(&mut graph, &mut arena, &mut index)?;

  let root = build_root(&outer, &index, &mut arena);

  log::debug!("locator: build complete, {} nodes in arena", arena.len());
  Ok(Locator { arena, root })
}

/// Repeats independent-set removal + local retriangulation + parent
/// linking until no more low-degree vertices remain.
fn refine(
  graph: &mut Graph,
  arena: &mut Vec<TriangleNode>,
  index: &mut BTreeMap<Point, Vec<TriangleId>>,
) -> Result<(), Error> {
  loop {
    let iset = graph.independent_set(MAX_DEGREE);
    if iset.is_empty() {
      break;
    }
    for &v in &iset {
      let mut poly = graph.neighbors(v);
      poly.sort_by(|a, b| a.angle_around(v).total_cmp(&b.angle_around(v)));

      let old_triangles: Vec<TriangleId> = index.get(&v).cloned().unwrap_or_default();
      let new_triangles =
        triangulate_polygon(&poly, graph, arena, index, false, false)?;

      for &new_id in &new_triangles {
        for &old_id in &old_triangles {
          // Indices into `arena` differ, so borrow one at a time.
          let overlaps = {
            let (new_node, old_node) = borrow_two(arena, new_id, old_id);
            crate::data::triangles_overlap(old_node, new_node)
          };
          if overlaps {
            arena[new_id.0].children.push(old_id);
          }
        }
      }

      for old_id in &old_triangles {
        for entries in index.values_mut() {
          entries.retain(|id| id != old_id);
        }
      }
    }
    graph.remove(&iset);
    debug_assert!(graph_has_no_stale_vertices(graph, &iset));
  }
  Ok(())
}

fn borrow_two(
  arena: &[TriangleNode],
  a: TriangleId,
  b: TriangleId,
) -> (&TriangleNode, &TriangleNode) {
  (&arena[a.0], &arena[b.0])
}

#[cfg(debug_assertions)]
fn graph_has_no_stale_vertices(graph: &Graph, removed: &[Point]) -> bool {
  removed.iter().all(|&p| !graph.contains(p))
    && graph.edges().iter().all(|&(a, b)| {
      !removed.contains(&a) && !removed.contains(&b)
    })
}

#[cfg(not(debug_assertions))]
fn graph_has_no_stale_vertices(_graph: &Graph, _removed: &[Point]) -> bool {
  true
}

/// Builds the synthetic root over the three outer bounding points; its
/// children are every triangle still indexed at any of them.
fn build_root(
  outer: &[Point; 3],
  index: &BTreeMap<Point, Vec<TriangleId>>,
  arena: &mut Vec<TriangleNode>,
) -> TriangleId {
  let mut root = TriangleNode::new(outer[0], outer[1], outer[2], false, false);
  let mut seen = std::collections::BTreeSet::new();
  for &o in outer {
    for &id in index.get(&o).map(Vec::as_slice).unwrap_or(&[]) {
      if seen.insert(id) {
        root.children.push(id);
      }
    }
  }
  let id = TriangleId(arena.len());
  arena.push(root);
  id
}

fn check_all_ccw(arena: &[TriangleNode]) -> Result<(), Error> {
  if arena.iter().all(TriangleNode::is_ccw) {
    Ok(())
  } else {
    Err(Error::ClockWiseViolation)
  }
}
