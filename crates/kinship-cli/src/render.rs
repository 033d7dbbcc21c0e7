//! Plain-text rendering shared by the one-shot commands and the shell.

use kinship_graph::{NetworkStats, Person};
use std::fmt::Display;

const RULE: &str = "+---------+-------------------------+----------------+";

/// Renders the popularity ranking as a fixed-width table.
pub fn ranking_table(people: &[Person]) -> String {
    let mut out = String::from(" Popularity Ranking\n");
    out.push_str(&format!("{RULE}\n"));
    out.push_str(&row("Rank", "People", "No. of Friends"));
    out.push_str(&format!("{RULE}\n"));
    for (i, person) in people.iter().enumerate() {
        out.push_str(&row(i + 1, &person.name, person.friend_count));
    }
    out.push_str(&format!("{RULE}\n"));
    out
}

fn row(rank: impl Display, name: &str, friends: impl Display) -> String {
    format!("| {:<7} | {:<23} | {:<14} |\n", rank, name, friends)
}

/// One line summary of a loaded network.
pub fn stats_line(stats: &NetworkStats) -> String {
    format!(
        "{} members, {} friendships, {} without friends",
        stats.members,
        stats.friendships,
        stats.isolated
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_table() {
        let people = vec![
            Person {
                vertex: 1,
                name: "Bob".to_string(),
                friend_count: 2,
            },
            Person {
                vertex: 0,
                name: "Alice".to_string(),
                friend_count: 1,
            },
        ];

        let table = ranking_table(&people);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[2], "| Rank    | People                  | No. of Friends |");
        assert_eq!(lines[4], "| 1       | Bob                     | 2              |");
        assert_eq!(lines[5], "| 2       | Alice                   | 1              |");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_stats_line() {
        let stats = NetworkStats {
            members: 3,
            directed_edges: 4,
            friendships: 2,
            isolated: 0,
        };
        assert_eq!(
            stats_line(&stats),
            "3 members, 2 friendships, 0 without friends"
        );
    }

    #[test]
    fn test_stats_line_counts_self_friendship() {
        let mut graph = kinship_graph::LabeledGraph::new(1).unwrap();
        graph.set_label(0, "Alice").unwrap();
        graph.add_edge(0, 0).unwrap();

        assert_eq!(
            stats_line(&graph.stats()),
            "1 members, 1 friendships, 0 without friends"
        );
    }
}
