//! Interactive menu over a loaded network.
//!
//! The shell reads one menu choice per loop iteration and dispatches it.
//! Bad input is answered with a message and the prompt is repeated; end
//! of input leaves the loop the same way choosing "Exit" does.

use crate::render;
use kinship_core::{normalize_name, Confirmation};
use kinship_graph::{
    common_friends, friends_of, load_network, mutual_friends, popularity_ranking, remove_member,
    resolve, LabeledGraph, QueryError,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

const MENU: &str = "[Please Select One]
1. Update people and friend list
2. Display all the friends of a person
3. Display all the friends and friends of the friends of a person
4. Display all the common friends of two people
5. Delete a person from the social network
6. Display list of all members sorted by popularity, then by names
7. Exit program";

/// One entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Reload,
    Friends,
    Mutual,
    Common,
    Remove,
    Popular,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Input must be a number!")]
    NotANumber,
    #[error("Invalid option {0}! Choose a number from 1 to 7.")]
    OutOfRange(i64),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, MenuError> {
        let number: i64 = input.trim().parse().map_err(|_| MenuError::NotANumber)?;
        match number {
            1 => Ok(Self::Reload),
            2 => Ok(Self::Friends),
            3 => Ok(Self::Mutual),
            4 => Ok(Self::Common),
            5 => Ok(Self::Remove),
            6 => Ok(Self::Popular),
            7 => Ok(Self::Exit),
            other => Err(MenuError::OutOfRange(other)),
        }
    }
}

/// Appends `.txt` to a file name typed without an extension.
fn with_txt(name: &str) -> PathBuf {
    let mut path = PathBuf::from(name);
    if path.extension().is_none() {
        path.set_extension("txt");
    }
    path
}

/// The interactive session: owns the network and talks over any
/// line-oriented reader and writer.
pub struct Shell<R, W> {
    graph: LabeledGraph,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(graph: LabeledGraph, input: R, output: W) -> Self {
        Self {
            graph,
            input,
            output,
        }
    }

    /// The network as it stands after any removals or reloads.
    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Social Network Program")?;
        while let Some(choice) = self.read_choice()? {
            if !self.dispatch(choice)? {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::Reload => self.reload()?,
            MenuChoice::Friends => self.show_friends()?,
            MenuChoice::Mutual => self.show_mutual_friends()?,
            MenuChoice::Common => self.show_common_friends()?,
            MenuChoice::Remove => self.remove()?,
            MenuChoice::Popular => self.show_popular()?,
            MenuChoice::Exit => {
                writeln!(self.output, "\n**Program Exit**\nGoodbye!")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.read_line()
    }

    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Enter a number: ")? else {
                return Ok(None);
            };
            match MenuChoice::parse(&line) {
                Ok(choice) => return Ok(Some(choice)),
                Err(e) => writeln!(self.output, "\n{e}\nPlease try again.")?,
            }
        }
    }

    fn read_name(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.prompt("Enter the name: ")? else {
                return Ok(None);
            };
            if line.is_empty() {
                writeln!(self.output, "No input found! Please enter a name.")?;
                continue;
            }
            return Ok(Some(normalize_name(&line)));
        }
    }

    fn report(&mut self, err: QueryError) -> io::Result<()> {
        match err {
            QueryError::MemberNotFound(name) => {
                writeln!(self.output, "Given name '{name}' does not exist")
            }
            QueryError::Graph(e) => {
                warn!(error = %e, "query failed");
                writeln!(self.output, "Query failed: {e}")
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────

    fn reload(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n**Update friends files**\n")?;
        writeln!(self.output, "Enter the file names (.txt may be left off)")?;
        let Some(friends) = self.prompt("Enter the friend file name: ")? else {
            return Ok(());
        };
        let Some(roster) = self.prompt("Enter the index file name: ")? else {
            return Ok(());
        };

        match load_network(&with_txt(&roster), &with_txt(&friends)) {
            Ok(graph) => {
                self.graph = graph;
                let stats = self.graph.stats();
                info!(members = stats.members, "reloaded network");
                writeln!(self.output, "Loaded {}", render::stats_line(&stats))
            }
            Err(e) => {
                warn!(error = %e, "reload failed");
                writeln!(
                    self.output,
                    "Could not load the network: {e}\nThe previous network is kept."
                )
            }
        }
    }

    fn show_friends(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n**Display friends**\n")?;
        let Some(name) = self.read_name()? else {
            return Ok(());
        };

        match friends_of(&self.graph, &name) {
            Ok(friends) if friends.is_empty() => writeln!(self.output, "No friends found!"),
            Ok(friends) => {
                for friend in friends {
                    writeln!(self.output, "{friend}")?;
                }
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    fn show_mutual_friends(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\n**Display friends and friends of the friends**\n"
        )?;
        let Some(name) = self.read_name()? else {
            return Ok(());
        };

        match mutual_friends(&self.graph, &name) {
            Ok(reach) if reach.is_empty() => writeln!(self.output, "No friends found!"),
            Ok(reach) => {
                for member in reach {
                    writeln!(self.output, "{member}")?;
                }
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    fn show_common_friends(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n**Display common friends**\n[Two User Input]\n")?;
        let Some(first) = self.read_name()? else {
            return Ok(());
        };
        let Some(second) = self.read_name()? else {
            return Ok(());
        };

        match common_friends(&self.graph, &first, &second) {
            Ok(shared) if shared.is_empty() => writeln!(self.output, "There is no common friend"),
            Ok(shared) => {
                writeln!(self.output, "Common friends are:")?;
                for friend in shared {
                    writeln!(self.output, "{friend}")?;
                }
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    fn remove(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n**Remove member**\n")?;
        let Some(name) = self.read_name()? else {
            return Ok(());
        };
        if let Err(e) = resolve(&self.graph, &name) {
            return self.report(e);
        }

        loop {
            let question = format!("Are you sure you want to remove {name}? [y/n][yes/no] ");
            let Some(answer) = self.prompt(&question)? else {
                return Ok(());
            };

            match Confirmation::parse(&answer) {
                Some(Confirmation::Yes) => {
                    return match remove_member(&mut self.graph, &name) {
                        Ok(severed) => writeln!(
                            self.output,
                            "{name} has been removed ({severed} friendships severed)"
                        ),
                        Err(e) => self.report(e),
                    };
                }
                Some(Confirmation::No) => return writeln!(self.output, "No worries!"),
                None => writeln!(self.output, "Invalid input! Try again.")?,
            }
        }
    }

    fn show_popular(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n**Display popular friends**\n")?;
        let ranking = popularity_ranking(&self.graph);
        write!(self.output, "{}", render::ranking_table(&ranking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    /// Alice - Bob - Carol
    fn trio() -> LabeledGraph {
        let mut graph = LabeledGraph::new(3).unwrap();
        for (vertex, name) in ["Alice", "Bob", "Carol"].iter().enumerate() {
            graph.set_label(vertex, *name).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2)] {
            graph.add_edge(a, b).unwrap();
            graph.add_edge(b, a).unwrap();
        }
        graph
    }

    fn session(graph: LabeledGraph, input: &str) -> (LabeledGraph, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(graph, Cursor::new(input), &mut output);
        shell.run().unwrap();
        let graph = shell.graph().clone();
        drop(shell);
        (graph, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Ok(MenuChoice::Reload));
        assert_eq!(MenuChoice::parse(" 7\n"), Ok(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), Err(MenuError::OutOfRange(0)));
        assert_eq!(MenuChoice::parse("-3"), Err(MenuError::OutOfRange(-3)));
        assert_eq!(MenuChoice::parse("two"), Err(MenuError::NotANumber));
        assert_eq!(MenuChoice::parse(""), Err(MenuError::NotANumber));
    }

    #[test]
    fn test_with_txt() {
        assert_eq!(with_txt("friend"), PathBuf::from("friend.txt"));
        assert_eq!(with_txt("friend.dat"), PathBuf::from("friend.dat"));
    }

    #[test]
    fn test_show_friends_normalizes_name() {
        let (_, out) = session(trio(), "2\nbOB\n7\n");
        assert!(out.contains("Alice\nCarol\n"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_unknown_member_keeps_menu_running() {
        let (_, out) = session(trio(), "2\ndave\n3\nalice\n7\n");
        assert!(out.contains("Given name 'Dave' does not exist"));
        assert!(out.contains("Bob\nCarol\n"));
    }

    #[test]
    fn test_invalid_menu_input_reprompts() {
        let (_, out) = session(trio(), "abc\n9\n\n7\n");
        assert!(out.contains("Input must be a number!"));
        assert!(out.contains("Invalid option 9!"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_empty_name_reprompts() {
        let (_, out) = session(trio(), "2\n\nalice\n7\n");
        assert!(out.contains("No input found!"));
        assert!(out.contains("Bob\n"));
    }

    #[test]
    fn test_common_friends() {
        let (_, out) = session(trio(), "4\nalice\ncarol\n4\nalice\nbob\n7\n");
        assert!(out.contains("Common friends are:\nBob\n"));
        assert!(out.contains("There is no common friend"));
    }

    #[test]
    fn test_remove_with_confirmation() {
        let (graph, out) = session(trio(), "5\nbob\nmaybe\nyes\n2\nalice\n7\n");

        assert!(out.contains("Invalid input! Try again."));
        assert!(out.contains("Bob has been removed (2 friendships severed)"));
        assert!(out.contains("No friends found!"));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.find_vertex_by_label("Bob"), Some(1));
    }

    #[test]
    fn test_remove_declined() {
        let (graph, out) = session(trio(), "5\ncarol\nn\n7\n");
        assert!(out.contains("No worries!"));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_popularity_table() {
        let (_, out) = session(trio(), "6\n7\n");
        assert!(out.contains("| 1       | Bob                     | 2              |"));
        assert!(out.contains("| 2       | Alice                   | 1              |"));
        assert!(out.contains("| 3       | Carol                   | 1              |"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, out) = session(trio(), "2\n");
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn test_reload() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("people.txt"), "2\n0 Xia\n1 Yan\n").unwrap();
        fs::write(dir.path().join("links.txt"), "1\n0 1\n").unwrap();

        let friends = dir.path().join("links");
        let roster = dir.path().join("people");
        let input = format!("1\n{}\n{}\n2\nxia\n7\n", friends.display(), roster.display());

        let (graph, out) = session(trio(), &input);
        assert!(out.contains("Loaded 2 members, 1 friendships, 0 without friends"));
        assert!(out.contains("Yan\n"));
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn test_failed_reload_keeps_graph() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let input = format!("1\n{}\n{}\n7\n", missing.display(), missing.display());

        let (graph, out) = session(trio(), &input);
        assert!(out.contains("The previous network is kept."));
        assert_eq!(graph, trio());
    }
}
