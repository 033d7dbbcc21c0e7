//! Kinship Core - Reading the social network off disk
//!
//! This crate turns the two plain-text input files into typed tuples
//! that the graph crate can consume:
//!
//! - the roster file: a declared member count, then `index name` pairs
//! - the friendship file: a declared friendship count, then `source target` pairs
//!
//! It also owns the name normalization applied to anything a user types,
//! so lookups match the way names are written in the roster.
//!
//! # Example
//!
//! ```
//! use kinship_core::{parse_friendships, parse_roster};
//!
//! let roster = parse_roster("2\n0 Alice\n1 Bob\n").unwrap();
//! let friends = parse_friendships("1\n0 1\n").unwrap();
//!
//! assert_eq!(roster.members[1].name, "Bob");
//! assert_eq!(friends.friendships.len(), 1);
//! ```

pub mod error;
mod name;
mod roster;

pub use error::{ParseError, Result};
pub use name::{normalize_name, Confirmation};
pub use roster::{
    parse_friendships, parse_roster, read_friendships, read_roster, Friendship, FriendshipList,
    MemberEntry, Roster,
};
