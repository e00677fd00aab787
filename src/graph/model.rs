//! Same-frequency adjacency graph over grid antennas.
//!
//! Vertices are id-keyed and own their adjacency lists as plain id
//! references. Ids come from a counter owned by the graph and are
//! never reused; removing a vertex purges every incident edge first,
//! so no adjacency list can mention a dead id.

use std::collections::BTreeMap;

use crate::core::{Antenna, Coord};
use crate::{Error, Result};

/// Graph-level representation of an antenna.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: u32,
    pub freq: char,
    pub pos: Coord,
    adjacency: Vec<u32>,
}

impl Vertex {
    /// Adjacent vertex ids, in edge insertion order.
    pub fn adjacency(&self) -> &[u32] {
        &self.adjacency
    }

    /// The antenna payload this vertex carries.
    pub fn antenna(&self) -> Antenna {
        Antenna {
            freq: self.freq,
            pos: self.pos,
        }
    }
}

/// Undirected same-frequency graph with graph-assigned vertex ids.
///
/// Edges are realized as a symmetric pair of directed id entries, one
/// in each endpoint's adjacency list.
#[derive(Debug, Clone)]
pub struct FieldGraph {
    vertices: BTreeMap<u32, Vertex>,
    next_id: u32,
}

impl FieldGraph {
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Look up a vertex by id. Absence is not an error.
    pub fn vertex(&self, id: u32) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Iterate vertices in id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Iterate the antenna payloads, in vertex id order.
    pub fn antennas(&self) -> impl Iterator<Item = Antenna> + '_ {
        self.vertices.values().map(Vertex::antenna)
    }

    pub fn contains_coord(&self, coord: Coord) -> bool {
        self.vertices.values().any(|v| v.pos == coord)
    }

    /// Insert a vertex for an antenna.
    ///
    /// Bounds are checked before occupancy; a rejected insert leaves
    /// the graph untouched. On success the vertex receives the next id
    /// from the graph-owned counter (starting at 1, never reused) and
    /// that id is returned. The new vertex has no edges; call
    /// [`link_same_frequency`](Self::link_same_frequency) to connect it.
    pub fn insert_vertex(&mut self, freq: char, x: i32, y: i32) -> Result<u32> {
        let pos = Coord::new(x, y);
        if !pos.in_bounds() {
            return Err(Error::OutOfBounds { x, y });
        }
        if self.contains_coord(pos) {
            return Err(Error::Duplicate { x, y });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.vertices.insert(
            id,
            Vertex {
                id,
                freq,
                pos,
                adjacency: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Connect `id` bidirectionally to every other vertex broadcasting
    /// on the same frequency, skipping pairs already linked. Returns
    /// the number of edges created.
    pub fn link_same_frequency(&mut self, id: u32) -> Result<usize> {
        let freq = match self.vertices.get(&id) {
            Some(vertex) => vertex.freq,
            None => return Err(Error::NotFound),
        };

        // Symmetry invariant: checking the peer's list is enough.
        let peers: Vec<u32> = self
            .vertices
            .values()
            .filter(|v| v.id != id && v.freq == freq && !v.adjacency.contains(&id))
            .map(|v| v.id)
            .collect();

        for &peer in &peers {
            if let Some(vertex) = self.vertices.get_mut(&peer) {
                vertex.adjacency.push(id);
            }
            if let Some(vertex) = self.vertices.get_mut(&id) {
                vertex.adjacency.push(peer);
            }
        }
        Ok(peers.len())
    }

    /// Remove every edge incident to `id`, both directions. Returns
    /// the number of edges dropped.
    pub fn unlink_all(&mut self, id: u32) -> Result<usize> {
        if !self.vertices.contains_key(&id) {
            return Err(Error::NotFound);
        }

        let mut dropped = 0;
        for vertex in self.vertices.values_mut() {
            if vertex.id == id {
                continue;
            }
            let before = vertex.adjacency.len();
            vertex.adjacency.retain(|&other| other != id);
            dropped += before - vertex.adjacency.len();
        }
        if let Some(vertex) = self.vertices.get_mut(&id) {
            vertex.adjacency.clear();
        }
        Ok(dropped)
    }

    /// Remove a vertex after purging its incident edges.
    pub fn remove_vertex(&mut self, id: u32) -> Result<()> {
        if self.vertices.is_empty() {
            return Err(Error::Empty);
        }
        if !self.vertices.contains_key(&id) {
            return Err(Error::NotFound);
        }
        self.unlink_all(id)?;
        self.vertices.remove(&id);
        Ok(())
    }

    /// Drop all vertices and edges. Returns `false` when there was
    /// nothing to do. The id counter keeps running so ids stay unique
    /// across the graph's whole lifetime.
    pub fn clear(&mut self) -> bool {
        if self.vertices.is_empty() {
            return false;
        }
        self.vertices.clear();
        true
    }

    /// Fold an ordered sequence of `(freq, x, y)` records through
    /// [`insert_vertex`](Self::insert_vertex) followed by
    /// [`link_same_frequency`](Self::link_same_frequency), silently
    /// skipping any the invariants reject. Returns how many records
    /// were kept.
    pub fn extend_lossy<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = (char, i32, i32)>,
    {
        let mut kept = 0;
        for (freq, x, y) in records {
            match self.insert_vertex(freq, x, y) {
                Ok(id) => {
                    // The freshly inserted id is present; linking cannot fail.
                    let _ = self.link_same_frequency(id);
                    kept += 1;
                }
                Err(err) => log::debug!("skipping record '{freq}' ({x}, {y}): {err}"),
            }
        }
        kept
    }
}

impl Default for FieldGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GRID_SIDE;

    fn sample_graph() -> FieldGraph {
        let mut graph = FieldGraph::new();
        for (freq, x, y) in [('A', 0, 0), ('A', 3, 3), ('B', 5, 5), ('A', 7, 1)] {
            let id = graph.insert_vertex(freq, x, y).unwrap();
            graph.link_same_frequency(id).unwrap();
        }
        graph
    }

    #[test]
    fn ids_are_assigned_sequentially_from_one() {
        let mut graph = FieldGraph::new();
        assert_eq!(graph.insert_vertex('A', 0, 0).unwrap(), 1);
        assert_eq!(graph.insert_vertex('B', 1, 0).unwrap(), 2);
        assert_eq!(graph.insert_vertex('C', 2, 0).unwrap(), 3);
    }

    #[test]
    fn lookup_after_insert_returns_matching_fields() {
        let mut graph = FieldGraph::new();
        let id = graph.insert_vertex('Z', 4, 6).unwrap();

        let vertex = graph.vertex(id).unwrap();
        assert_eq!(vertex.id, id);
        assert_eq!(vertex.freq, 'Z');
        assert_eq!(vertex.pos, Coord::new(4, 6));
        assert!(vertex.adjacency().is_empty());
    }

    #[test]
    fn duplicate_coordinate_is_rejected_without_mutation() {
        let mut graph = FieldGraph::new();
        graph.insert_vertex('A', 2, 2).unwrap();

        let err = graph.insert_vertex('B', 2, 2).unwrap_err();
        assert!(matches!(err, Error::Duplicate { x: 2, y: 2 }));
        assert_eq!(graph.len(), 1);
        // The rejected insert must not burn an id either.
        assert_eq!(graph.insert_vertex('B', 3, 3).unwrap(), 2);
    }

    #[test]
    fn out_of_bounds_vertex_is_always_rejected() {
        let mut graph = FieldGraph::new();
        for (x, y) in [(-1, 0), (GRID_SIDE, 0), (0, -1), (0, GRID_SIDE)] {
            let err = graph.insert_vertex('A', x, y).unwrap_err();
            assert!(matches!(err, Error::OutOfBounds { .. }));
        }
        assert!(graph.is_empty());
    }

    #[test]
    fn linking_connects_every_same_frequency_peer_symmetrically() {
        let graph = sample_graph();

        // Vertices 1, 2 and 4 share frequency 'A'; 3 is 'B'.
        for (id, expected) in [(1, vec![2, 4]), (2, vec![1, 4]), (4, vec![1, 2])] {
            let mut adjacency = graph.vertex(id).unwrap().adjacency().to_vec();
            adjacency.sort_unstable();
            assert_eq!(adjacency, expected, "vertex {id}");
        }
        assert!(graph.vertex(3).unwrap().adjacency().is_empty());
    }

    #[test]
    fn relinking_creates_no_duplicate_edges() {
        let mut graph = sample_graph();
        assert_eq!(graph.link_same_frequency(1).unwrap(), 0);
        assert_eq!(graph.vertex(1).unwrap().adjacency().len(), 2);
    }

    #[test]
    fn linking_an_absent_id_is_not_found() {
        let mut graph = sample_graph();
        assert!(matches!(graph.link_same_frequency(99), Err(Error::NotFound)));
    }

    #[test]
    fn unlink_all_purges_both_directions() {
        let mut graph = sample_graph();
        let dropped = graph.unlink_all(1).unwrap();

        assert_eq!(dropped, 2);
        assert!(graph.vertex(1).unwrap().adjacency().is_empty());
        for id in [2, 4] {
            assert!(
                !graph.vertex(id).unwrap().adjacency().contains(&1),
                "vertex {id} still points at 1"
            );
        }
        // The 2-4 edge is untouched.
        assert!(graph.vertex(2).unwrap().adjacency().contains(&4));
    }

    #[test]
    fn remove_vertex_leaves_no_dangling_adjacency() {
        let mut graph = sample_graph();
        graph.remove_vertex(2).unwrap();

        assert_eq!(graph.len(), 3);
        assert!(graph.vertex(2).is_none());
        for vertex in graph.vertices() {
            assert!(
                !vertex.adjacency().contains(&2),
                "vertex {} still points at removed id",
                vertex.id
            );
        }
    }

    #[test]
    fn remove_vertex_error_cases() {
        let mut graph = FieldGraph::new();
        assert!(matches!(graph.remove_vertex(1), Err(Error::Empty)));

        graph.insert_vertex('A', 0, 0).unwrap();
        assert!(matches!(graph.remove_vertex(9), Err(Error::NotFound)));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn removed_coordinate_becomes_insertable_again() {
        let mut graph = FieldGraph::new();
        let id = graph.insert_vertex('A', 2, 2).unwrap();
        graph.remove_vertex(id).unwrap();

        let reused = graph.insert_vertex('B', 2, 2).unwrap();
        assert_ne!(reused, id);
        assert_eq!(graph.vertex(reused).unwrap().freq, 'B');
    }

    #[test]
    fn clear_is_idempotent_and_keeps_ids_unique() {
        let mut graph = sample_graph();
        assert!(graph.clear());
        assert!(!graph.clear());
        assert!(graph.is_empty());

        let id = graph.insert_vertex('A', 0, 0).unwrap();
        assert_eq!(id, 5);
    }

    #[test]
    fn lossy_fold_inserts_and_autolinks() {
        let mut graph = FieldGraph::new();
        let kept = graph.extend_lossy([
            ('A', 0, 0),
            ('A', 1, 1),
            ('A', 1, 1),  // duplicate coordinate
            ('B', 12, 0), // out of bounds
        ]);

        assert_eq!(kept, 2);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.vertex(1).unwrap().adjacency(), &[2]);
        assert_eq!(graph.vertex(2).unwrap().adjacency(), &[1]);
    }
}
