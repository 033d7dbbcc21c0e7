//! Social queries over a `LabeledGraph`.
//!
//! Every query takes the graph by reference and resolves members by
//! label. A name that matches no vertex is reported as
//! [`QueryError::MemberNotFound`], never as an index error.

use crate::error::QueryError;
use crate::graph::LabeledGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

type Result<T> = std::result::Result<T, QueryError>;

/// A member's entry in the popularity ranking.
///
/// This is a snapshot computed per query, not graph state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The member's vertex number.
    pub vertex: usize,
    /// The member's label.
    pub name: String,
    /// Number of direct friends (out-degree).
    pub friend_count: usize,
}

/// Resolves a member name to its vertex.
pub fn resolve(graph: &LabeledGraph, name: &str) -> Result<usize> {
    graph
        .find_vertex_by_label(name)
        .ok_or_else(|| QueryError::MemberNotFound(name.to_string()))
}

fn labels_of(
    graph: &LabeledGraph,
    vertices: impl IntoIterator<Item = usize>,
) -> Result<Vec<String>> {
    vertices
        .into_iter()
        .map(|v| graph.label_or_placeholder(v).map_err(QueryError::from))
        .collect()
}

/// Direct friends of a member, in ascending vertex order.
///
/// An empty vector means the member has no friends.
pub fn friends_of(graph: &LabeledGraph, name: &str) -> Result<Vec<String>> {
    let vertex = resolve(graph, name)?;
    labels_of(graph, graph.neighbors(vertex)?)
}

/// Friends and friends-of-friends of a member, excluding the member.
///
/// Each reachable member appears once, in ascending vertex order, no
/// matter how many two-hop paths lead to them.
pub fn mutual_friends(graph: &LabeledGraph, name: &str) -> Result<Vec<String>> {
    let vertex = resolve(graph, name)?;

    let mut reach = BTreeSet::new();
    for friend in graph.neighbors(vertex)? {
        reach.insert(friend);
        reach.extend(graph.neighbors(friend)?);
    }
    reach.remove(&vertex);

    debug!(member = name, reached = reach.len(), "two-hop closure");
    labels_of(graph, reach)
}

/// Friends shared by two members.
///
/// The result is symmetric in its arguments. An empty set means there
/// are no common friends.
pub fn common_friends(
    graph: &LabeledGraph,
    first: &str,
    second: &str,
) -> Result<BTreeSet<String>> {
    let a = resolve(graph, first)?;
    let b = resolve(graph, second)?;

    let theirs: BTreeSet<usize> = graph.neighbors(b)?.into_iter().collect();
    let shared = graph
        .neighbors(a)?
        .into_iter()
        .filter(|friend| theirs.contains(friend));

    Ok(labels_of(graph, shared)?.into_iter().collect())
}

/// Severs every friendship of a member.
///
/// Both directed edges between the member and each current friend are
/// removed. The vertex and its label stay in place, so the name still
/// resolves afterwards. Returns how many friends were severed.
pub fn remove_member(graph: &mut LabeledGraph, name: &str) -> Result<usize> {
    let vertex = resolve(graph, name)?;
    let friends = graph.neighbors(vertex)?;

    for &friend in &friends {
        graph.remove_edge(friend, vertex)?;
        graph.remove_edge(vertex, friend)?;
    }

    info!(member = name, severed = friends.len(), "removed member");
    Ok(friends.len())
}

/// All members ranked by friend count, most popular first.
///
/// Members with the same friend count are ordered by name ascending
/// (case-sensitive). The rank of a member is its 1-based position.
pub fn popularity_ranking(graph: &LabeledGraph) -> Vec<Person> {
    let mut people: Vec<Person> = (0..graph.size())
        .map(|vertex| Person {
            vertex,
            name: graph.display_label(vertex),
            friend_count: graph.row(vertex).iter().filter(|&&present| present).count(),
        })
        .collect();

    people.sort_by(|a, b| {
        b.friend_count
            .cmp(&a.friend_count)
            .then_with(|| a.name.cmp(&b.name))
    });

    people
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Alice - Bob - Carol
    fn trio() -> LabeledGraph {
        let mut graph = LabeledGraph::new(3).unwrap();
        for (vertex, name) in ["Alice", "Bob", "Carol"].iter().enumerate() {
            graph.set_label(vertex, *name).unwrap();
        }
        befriend(&mut graph, 0, 1);
        befriend(&mut graph, 1, 2);
        graph
    }

    fn befriend(graph: &mut LabeledGraph, a: usize, b: usize) {
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, a).unwrap();
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_friends_of() {
        let graph = trio();
        assert_eq!(friends_of(&graph, "Bob").unwrap(), vec!["Alice", "Carol"]);
        assert_eq!(friends_of(&graph, "Alice").unwrap(), vec!["Bob"]);
    }

    #[test]
    fn test_member_not_found() {
        let mut graph = trio();
        let missing = QueryError::MemberNotFound("Dave".to_string());

        assert_eq!(friends_of(&graph, "Dave"), Err(missing.clone()));
        assert_eq!(mutual_friends(&graph, "Dave"), Err(missing.clone()));
        assert_eq!(common_friends(&graph, "Alice", "Dave"), Err(missing.clone()));
        assert_eq!(common_friends(&graph, "Dave", "Alice"), Err(missing.clone()));
        assert_eq!(remove_member(&mut graph, "Dave"), Err(missing));
    }

    #[test]
    fn test_mutual_friends_excludes_self() {
        let graph = trio();
        assert_eq!(mutual_friends(&graph, "Alice").unwrap(), vec!["Bob", "Carol"]);
        assert_eq!(mutual_friends(&graph, "Bob").unwrap(), vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_mutual_friends_deduplicates() {
        //   0 - 1 - 3
        //   0 - 2 - 3
        let mut graph = LabeledGraph::new(4).unwrap();
        for (vertex, name) in ["Ann", "Ben", "Cal", "Dee"].iter().enumerate() {
            graph.set_label(vertex, *name).unwrap();
        }
        befriend(&mut graph, 0, 1);
        befriend(&mut graph, 0, 2);
        befriend(&mut graph, 1, 3);
        befriend(&mut graph, 2, 3);

        assert_eq!(
            mutual_friends(&graph, "Ann").unwrap(),
            vec!["Ben", "Cal", "Dee"]
        );
    }

    #[test]
    fn test_mutual_friends_with_self_loop() {
        let mut graph = trio();
        graph.add_edge(0, 0).unwrap();
        assert_eq!(mutual_friends(&graph, "Alice").unwrap(), vec!["Bob", "Carol"]);
    }

    #[test]
    fn test_common_friends_symmetric() {
        let mut graph = trio();
        assert_eq!(common_friends(&graph, "Alice", "Carol").unwrap(), set(&["Bob"]));
        assert_eq!(
            common_friends(&graph, "Alice", "Carol").unwrap(),
            common_friends(&graph, "Carol", "Alice").unwrap()
        );

        // Alice and Bob share nobody yet
        assert!(common_friends(&graph, "Alice", "Bob").unwrap().is_empty());

        befriend(&mut graph, 0, 2);
        assert_eq!(common_friends(&graph, "Alice", "Bob").unwrap(), set(&["Carol"]));
    }

    #[test]
    fn test_remove_member_keeps_slot() {
        let mut graph = trio();

        assert_eq!(remove_member(&mut graph, "Bob").unwrap(), 2);

        assert!(friends_of(&graph, "Alice").unwrap().is_empty());
        assert!(friends_of(&graph, "Carol").unwrap().is_empty());
        assert!(friends_of(&graph, "Bob").unwrap().is_empty());
        assert_eq!(graph.find_vertex_by_label("Bob"), Some(1));
        assert_eq!(graph.size(), 3);
        assert_eq!(graph.edge_count(), 0);

        // Removing again is harmless
        assert_eq!(remove_member(&mut graph, "Bob").unwrap(), 0);
    }

    #[test]
    fn test_popularity_ranking_ties_by_name() {
        // Carol:1, Bob:2, Alice:2 (Alice - Bob, Alice - Dan, Bob - Carol)
        let mut graph = LabeledGraph::new(4).unwrap();
        for (vertex, name) in ["Carol", "Bob", "Alice", "Dan"].iter().enumerate() {
            graph.set_label(vertex, *name).unwrap();
        }
        befriend(&mut graph, 2, 1);
        befriend(&mut graph, 2, 3);
        befriend(&mut graph, 1, 0);

        let ranking = popularity_ranking(&graph);
        let rows: Vec<(&str, usize)> = ranking
            .iter()
            .map(|p| (p.name.as_str(), p.friend_count))
            .collect();

        assert_eq!(
            rows,
            vec![("Alice", 2), ("Bob", 2), ("Carol", 1), ("Dan", 1)]
        );
        assert_eq!(ranking[0].vertex, 2);
    }

    #[test]
    fn test_popularity_ranking_closes_last_tie_group() {
        // Everyone ends with zero friends; the whole list is one tie group
        let mut graph = LabeledGraph::new(3).unwrap();
        for (vertex, name) in ["zed", "Yan", "Xia"].iter().enumerate() {
            graph.set_label(vertex, *name).unwrap();
        }

        let names: Vec<String> = popularity_ranking(&graph)
            .into_iter()
            .map(|p| p.name)
            .collect();

        // Case-sensitive: uppercase sorts before lowercase
        assert_eq!(names, vec!["Xia", "Yan", "zed"]);
    }

    #[test]
    fn test_popularity_ranking_serializes() {
        let ranking = popularity_ranking(&trio());
        let json = serde_json::to_value(&ranking).unwrap();
        assert_eq!(json[0]["name"], "Bob");
        assert_eq!(json[0]["friend_count"], 2);
    }
}
