//! Network builder for constructing the graph from parsed input.
//!
//! The builder takes the roster and friendship list produced by
//! `kinship-core` and turns them into a `LabeledGraph`:
//! 1. Reconcile declared counts against the entries found
//! 2. Allocate one vertex per declared member and set labels
//! 3. Add each friendship as a pair of directed edges

use crate::error::BuildError;
use crate::graph::LabeledGraph;
use kinship_core::{read_friendships, read_roster, FriendshipList, Roster};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Builds a `LabeledGraph` from a parsed roster and friendship list.
pub struct NetworkBuilder {
    roster: Roster,
    friendships: FriendshipList,
}

impl NetworkBuilder {
    /// Creates a new builder.
    pub fn new(roster: Roster, friendships: FriendshipList) -> Self {
        Self {
            roster,
            friendships,
        }
    }

    /// Finishes building and returns the graph.
    ///
    /// Fails on a count mismatch, on any index outside the declared
    /// member count, or on a roster that names a vertex twice. Together
    /// these leave every vertex labeled. Nothing is returned on failure,
    /// so a caller holding an older graph keeps it intact.
    pub fn build(self) -> Result<LabeledGraph, BuildError> {
        self.roster.verify_count()?;
        self.friendships.verify_count()?;

        let mut graph = LabeledGraph::new(self.roster.declared)?;

        let mut seen = HashSet::new();
        let mut labeled = vec![false; graph.size()];
        for member in self.roster.members {
            if labeled.get(member.index).copied().unwrap_or(false) {
                return Err(BuildError::DuplicateIndex {
                    index: member.index,
                });
            }
            if !seen.insert(member.name.clone()) {
                warn!(
                    name = %member.name,
                    "duplicate member name; lookups resolve to the first"
                );
            }
            graph.set_label(member.index, member.name)?;
            labeled[member.index] = true;
        }

        for friendship in &self.friendships.friendships {
            graph.add_edge(friendship.source, friendship.target)?;
            graph.add_edge(friendship.target, friendship.source)?;
        }

        debug!(
            members = graph.size(),
            edges = graph.edge_count(),
            "built network"
        );
        Ok(graph)
    }
}

/// Reads both input files and builds the network.
pub fn load_network(roster_path: &Path, friends_path: &Path) -> Result<LabeledGraph, BuildError> {
    let roster = read_roster(roster_path)?;
    let friendships = read_friendships(friends_path)?;
    NetworkBuilder::new(roster, friendships).build()
}
