//! Core graph data structure.
//!
//! A `LabeledGraph` has a fixed number of vertices chosen at construction.
//! Edges live in a square boolean matrix and every vertex carries an
//! optional string label. Removing a member never shrinks the graph; it
//! only clears that vertex's edges.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};

type Result<T> = std::result::Result<T, GraphError>;

/// A directed graph over the vertices `0..size` with a label per vertex.
///
/// Invariants:
/// - `edges.len() == size * size`, stored row-major, so `edges[s * size + t]`
///   is true iff there is an edge from `s` to `t`.
/// - `labels.len() == size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGraph {
    size: usize,
    edges: Vec<bool>,
    labels: Vec<Option<String>>,
}

impl Default for LabeledGraph {
    /// A graph with no vertices.
    fn default() -> Self {
        Self {
            size: 0,
            edges: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl LabeledGraph {
    /// Creates a graph with `n` vertices, no edges and no labels.
    ///
    /// The matrix is reserved fallibly, so an impossible size surfaces as
    /// [`GraphError::Allocation`] instead of aborting the process.
    pub fn new(n: usize) -> Result<Self> {
        let alloc_err = || GraphError::Allocation { vertices: n };
        let cells = n.checked_mul(n).ok_or_else(alloc_err)?;

        let mut edges = Vec::new();
        edges.try_reserve_exact(cells).map_err(|_| alloc_err())?;
        edges.resize(cells, false);

        let mut labels = Vec::new();
        labels.try_reserve_exact(n).map_err(|_| alloc_err())?;
        labels.resize(n, None);

        Ok(Self {
            size: n,
            edges,
            labels,
        })
    }

    /// Returns the number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    fn check(&self, vertex: usize) -> Result<usize> {
        if vertex < self.size {
            Ok(vertex)
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                size: self.size,
            })
        }
    }

    fn cell(&self, source: usize, target: usize) -> Result<usize> {
        let source = self.check(source)?;
        let target = self.check(target)?;
        Ok(source * self.size + target)
    }

    /// Adjacency row of a vertex already known to be in range.
    pub(crate) fn row(&self, vertex: usize) -> &[bool] {
        let start = vertex * self.size;
        &self.edges[start..start + self.size]
    }

    /// Adds the edge `source -> target`. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<()> {
        let cell = self.cell(source, target)?;
        self.edges[cell] = true;
        Ok(())
    }

    /// Removes the edge `source -> target`. Removing a missing edge is a no-op.
    pub fn remove_edge(&mut self, source: usize, target: usize) -> Result<()> {
        let cell = self.cell(source, target)?;
        self.edges[cell] = false;
        Ok(())
    }

    /// Returns true if there is an edge `source -> target`.
    pub fn is_edge(&self, source: usize, target: usize) -> Result<bool> {
        let cell = self.cell(source, target)?;
        Ok(self.edges[cell])
    }

    /// Returns every target of an edge leaving `vertex`, in ascending
    /// vertex order.
    pub fn neighbors(&self, vertex: usize) -> Result<Vec<usize>> {
        let vertex = self.check(vertex)?;
        Ok(self
            .row(vertex)
            .iter()
            .enumerate()
            .filter_map(|(target, &present)| present.then_some(target))
            .collect())
    }

    /// Returns the number of edges leaving `vertex`.
    pub fn out_degree(&self, vertex: usize) -> Result<usize> {
        let vertex = self.check(vertex)?;
        Ok(self.row(vertex).iter().filter(|&&present| present).count())
    }

    /// Returns the number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|&&present| present).count()
    }

    /// Gets the label of a vertex, if one has been set.
    pub fn label(&self, vertex: usize) -> Result<Option<&str>> {
        let vertex = self.check(vertex)?;
        Ok(self.labels[vertex].as_deref())
    }

    /// Sets the label of a vertex, replacing any previous one.
    pub fn set_label(&mut self, vertex: usize, label: impl Into<String>) -> Result<()> {
        let vertex = self.check(vertex)?;
        self.labels[vertex] = Some(label.into());
        Ok(())
    }

    /// Label for display: the vertex's label, or `#<vertex>` when unset.
    pub fn label_or_placeholder(&self, vertex: usize) -> Result<String> {
        let vertex = self.check(vertex)?;
        Ok(self.display_label(vertex))
    }

    pub(crate) fn display_label(&self, vertex: usize) -> String {
        match &self.labels[vertex] {
            Some(label) => label.clone(),
            None => format!("#{vertex}"),
        }
    }

    /// Finds the first vertex whose label equals `label` exactly.
    ///
    /// Unset labels never match. Absence is `None`, never an error.
    pub fn find_vertex_by_label(&self, label: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|candidate| candidate.as_deref() == Some(label))
    }

    /// Depth-first traversal from `start`.
    ///
    /// Calls `visit` exactly once for every vertex reachable from `start`,
    /// starting with `start` itself. Neighbors are explored in ascending
    /// order, giving the same order as the textbook recursive search, but
    /// the walk keeps its own stack so deep graphs cannot overflow.
    pub fn depth_first_visit<F>(&self, start: usize, mut visit: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        let start = self.check(start)?;
        let mut marked = vec![false; self.size];

        // Each frame is a vertex plus the first column not yet scanned.
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        marked[start] = true;
        visit(start);

        while let Some(frame) = stack.last_mut() {
            let (vertex, from) = *frame;
            let row = self.row(vertex);
            match (from..self.size).find(|&next| row[next] && !marked[next]) {
                Some(next) => {
                    frame.1 = next + 1;
                    marked[next] = true;
                    visit(next);
                    stack.push((next, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(())
    }

    /// Labels of every vertex reachable from `start`, in depth-first order.
    pub fn depth_first_labels(&self, start: usize) -> Result<Vec<String>> {
        let mut labels = Vec::new();
        self.depth_first_visit(start, |vertex| labels.push(self.display_label(vertex)))?;
        Ok(labels)
    }

    /// Number of linked vertex pairs, counting either direction once.
    ///
    /// A self-edge is a pair of its own and counts as one friendship.
    pub fn friendship_count(&self) -> usize {
        (0..self.size)
            .map(|s| {
                (s..self.size)
                    .filter(|&t| self.edges[s * self.size + t] || self.edges[t * self.size + s])
                    .count()
            })
            .sum()
    }

    /// Returns graph statistics.
    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            members: self.size,
            directed_edges: self.edge_count(),
            friendships: self.friendship_count(),
            isolated: (0..self.size)
                .filter(|&v| !self.row(v).contains(&true))
                .count(),
        }
    }
}

/// Graph statistics for the status command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Vertex count, including members whose friendships were removed.
    pub members: usize,
    /// Number of directed edges. A friendship between two members
    /// contributes two; a self-friendship contributes one.
    pub directed_edges: usize,
    /// Number of friendships, as from `friendship_count`.
    pub friendships: usize,
    /// Vertices with no outgoing edge.
    pub isolated: usize,
}
