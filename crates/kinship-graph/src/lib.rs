//! Kinship Graph - Friendship network queries
//!
//! This crate holds the social network as a fixed-size labeled graph and
//! answers relationship questions about it: direct friends, friends of
//! friends, common friends, popularity, and member removal.
//!
//! # Architecture
//!
//! - `LabeledGraph` stores edges in a boolean adjacency matrix with a
//!   parallel label array. The vertex count never changes after creation.
//! - The `social` queries are free functions that resolve members by
//!   label and work on a borrowed graph.
//! - `NetworkBuilder` turns parsed roster and friendship files into a graph.
//!
//! # Example
//!
//! ```
//! use kinship_graph::{friends_of, mutual_friends, remove_member, LabeledGraph};
//!
//! let mut graph = LabeledGraph::new(3).unwrap();
//! for (vertex, name) in ["Alice", "Bob", "Carol"].iter().enumerate() {
//!     graph.set_label(vertex, *name).unwrap();
//! }
//! for (a, b) in [(0, 1), (1, 2)] {
//!     graph.add_edge(a, b).unwrap();
//!     graph.add_edge(b, a).unwrap();
//! }
//!
//! assert_eq!(friends_of(&graph, "Bob").unwrap(), vec!["Alice", "Carol"]);
//! assert_eq!(mutual_friends(&graph, "Alice").unwrap(), vec!["Bob", "Carol"]);
//!
//! remove_member(&mut graph, "Bob").unwrap();
//! assert!(friends_of(&graph, "Alice").unwrap().is_empty());
//! assert_eq!(graph.find_vertex_by_label("Bob"), Some(1));
//! ```

mod builder;
mod error;
mod graph;
mod social;

pub use builder::{load_network, NetworkBuilder};
pub use error::{BuildError, GraphError, QueryError};
pub use graph::{LabeledGraph, NetworkStats};
pub use social::{
    common_friends, friends_of, mutual_friends, popularity_ranking, remove_member, resolve, Person,
};
