use std::collections::{BTreeMap, BTreeSet};

use crate::point::Point;
use crate::Error;

/// Undirected adjacency graph over planar points.
///
/// Build-time scratch structure: populated and mutated only while
/// [`crate::build`] runs, then dropped before the [`crate::Locator`] is
/// returned. Vertex iteration order is the `Point` key order (lexicographic
/// on `(x, y)`), which is what makes [`Graph::independent_set`]
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
  adjacency: BTreeMap<Point, BTreeSet<Point>>,
  special: BTreeSet<Point>,
}

impl Graph {
  pub fn new() -> Graph {
    Graph::default()
  }

  /// Ensures `p` is present with empty adjacency. A no-op if `p` is
  /// already a vertex.
  pub fn add_vertex(&mut self, p: Point) {
    self.adjacency.entry(p).or_insert_with(BTreeSet::new);
    log::trace!("graph: add_vertex {:?}", p);
  }

  /// Adds the undirected edge `(p, q)`. Both endpoints must already be
  /// vertices; see [`Error::MalformedEdge`].
  pub fn add_edge(&mut self, p: Point, q: Point) -> Result<(), Error> {
    if !self.adjacency.contains_key(&p) || !self.adjacency.contains_key(&q) {
      return Err(Error::MalformedEdge);
    }
    log::trace!("graph: add_edge {:?} {:?}", p, q);
    self.adjacency.get_mut(&p).unwrap().insert(q);
    self.adjacency.get_mut(&q).unwrap().insert(p);
    Ok(())
  }

  pub fn contains(&self, p: Point) -> bool {
    self.adjacency.contains_key(&p)
  }

  /// Current neighbors of `p`, in unspecified order. Missing vertices
  /// yield an empty sequence.
  pub fn neighbors(&self, p: Point) -> Vec<Point> {
    self
      .adjacency
      .get(&p)
      .map(|set| set.iter().copied().collect())
      .unwrap_or_default()
  }

  pub fn degree(&self, p: Point) -> usize {
    self.adjacency.get(&p).map_or(0, |set| set.len())
  }

  /// Replaces the protected set: vertices [`Graph::independent_set`] will
  /// never return.
  pub fn set_special(&mut self, special: impl IntoIterator<Item = Point>) {
    self.special = special.into_iter().collect();
  }

  pub fn is_special(&self, p: Point) -> bool {
    self.special.contains(&p)
  }

  /// Greedy sweep (not maximum-cardinality): walks vertices in key order,
  /// skips anything blocked or over `max_degree`, and otherwise selects it
  /// and blocks it together with all of its current neighbors.
  pub fn independent_set(&self, max_degree: usize) -> Vec<Point> {
    let mut blocked: BTreeSet<Point> = self.special.clone();
    let mut chosen = Vec::new();
    for (&p, neighbors) in self.adjacency.iter() {
      if neighbors.len() > max_degree || blocked.contains(&p) {
        continue;
      }
      chosen.push(p);
      blocked.insert(p);
      blocked.extend(neighbors.iter().copied());
    }
    log::debug!("graph: independent_set found {} vertices", chosen.len());
    chosen
  }

  /// Deletes each vertex in `vertices` and all incident edges. Vertices
  /// not present are tolerated silently.
  pub fn remove(&mut self, vertices: &[Point]) {
    for &p in vertices {
      if let Some(neighbors) = self.adjacency.remove(&p) {
        for q in neighbors {
          if let Some(set) = self.adjacency.get_mut(&q) {
            set.remove(&p);
          }
        }
      }
    }
    log::debug!("graph: removed {} vertices", vertices.len());
  }

  pub fn len(&self) -> usize {
    self.adjacency.len()
  }

  pub fn is_empty(&self) -> bool {
    self.adjacency.is_empty()
  }

  /// Every current edge, each reported once as `(lesser, greater)`.
  /// Exposed for testing/visualization per the crate's external-interface
  /// contract; not used by `build` itself.
  pub fn edges(&self) -> Vec<(Point, Point)> {
    let mut out = Vec::new();
    for (&p, neighbors) in self.adjacency.iter() {
      for &q in neighbors {
        if q > p {
          out.push((p, q));
        }
      }
    }
    out
  }

  #[cfg(test)]
  pub(crate) fn is_symmetric(&self) -> bool {
    self
      .adjacency
      .iter()
      .all(|(&p, neighbors)| neighbors.iter().all(|&q| self.adjacency[&q].contains(&p)))
  }
}
