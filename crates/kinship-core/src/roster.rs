//! Roster and friendship file parsing.
//!
//! Both files are streams of whitespace-separated tokens. The first token
//! declares how many entries follow; each entry is exactly two tokens.
//! Line breaks carry no meaning, so a file may put every entry on its own
//! line or run them together.

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// A single `index name` line of the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEntry {
    /// Vertex number the member is bound to.
    pub index: usize,
    /// Display name, stored exactly as written in the file.
    pub name: String,
}

/// The parsed roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Member count declared on the first line. This is also the
    /// vertex count of the graph built from it.
    pub declared: usize,
    /// Entries in file order.
    pub members: Vec<MemberEntry>,
}

/// One undirected friendship between two vertex numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Friendship {
    pub source: usize,
    pub target: usize,
}

/// The parsed friendship file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipList {
    /// Friendship count declared on the first line.
    pub declared: usize,
    /// Pairs in file order.
    pub friendships: Vec<Friendship>,
}

impl Roster {
    /// Fails if the declared member count differs from the entries found.
    pub fn verify_count(&self) -> Result<()> {
        check_count("member", self.declared, self.members.len())
    }
}

impl FriendshipList {
    /// Fails if the declared friendship count differs from the pairs found.
    pub fn verify_count(&self) -> Result<()> {
        check_count("friendship", self.declared, self.friendships.len())
    }
}

fn check_count(what: &'static str, declared: usize, found: usize) -> Result<()> {
    if declared == found {
        Ok(())
    } else {
        Err(ParseError::CountMismatch {
            what,
            declared,
            found,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Token stream that remembers the 1-based position of every token,
/// so errors can point at the offending one.
struct Tokens<'a> {
    inner: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace().enumerate(),
        }
    }

    fn next(&mut self) -> Option<(usize, &'a str)> {
        self.inner.next().map(|(i, token)| (i + 1, token))
    }

    fn count(&mut self) -> Result<usize> {
        let (position, token) = self.next().ok_or(ParseError::MissingCount)?;
        number(token, position)
    }

    /// Returns the next two-token entry, or `None` at a clean end of input.
    fn pair(&mut self) -> Result<Option<((usize, &'a str), (usize, &'a str))>> {
        let Some(first) = self.next() else {
            return Ok(None);
        };
        let second = self
            .next()
            .ok_or(ParseError::IncompleteEntry { position: first.0 })?;
        Ok(Some((first, second)))
    }
}

fn number(token: &str, position: usize) -> Result<usize> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
        position,
    })
}

/// Parses the text of a roster file.
///
/// The declared count is returned as-is; call [`Roster::verify_count`]
/// to reconcile it against the entries.
pub fn parse_roster(text: &str) -> Result<Roster> {
    let mut tokens = Tokens::new(text);
    let declared = tokens.count()?;

    let mut members = Vec::new();
    while let Some(((index_pos, index), (_, name))) = tokens.pair()? {
        members.push(MemberEntry {
            index: number(index, index_pos)?,
            name: name.to_string(),
        });
    }

    debug!(declared, found = members.len(), "parsed roster");
    Ok(Roster { declared, members })
}

/// Parses the text of a friendship file.
pub fn parse_friendships(text: &str) -> Result<FriendshipList> {
    let mut tokens = Tokens::new(text);
    let declared = tokens.count()?;

    let mut friendships = Vec::new();
    while let Some(((source_pos, source), (target_pos, target))) = tokens.pair()? {
        friendships.push(Friendship {
            source: number(source, source_pos)?,
            target: number(target, target_pos)?,
        });
    }

    debug!(declared, found = friendships.len(), "parsed friendships");
    Ok(FriendshipList {
        declared,
        friendships,
    })
}

fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
    if text.trim().is_empty() {
        return Err(ParseError::EmptyFile(path.to_path_buf()));
    }
    Ok(text)
}

/// Reads and parses a roster file.
pub fn read_roster(path: &Path) -> Result<Roster> {
    parse_roster(&read_text(path)?)
}

/// Reads and parses a friendship file.
pub fn read_friendships(path: &Path) -> Result<FriendshipList> {
    parse_friendships(&read_text(path)?)
}
