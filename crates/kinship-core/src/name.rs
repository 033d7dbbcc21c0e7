//! Normalization of names typed at the prompt.

/// Rewrites a typed name into roster casing.
///
/// The input is lower-cased and the first letter of every word is
/// upper-cased. Words are separated by whitespace or `-`. Characters
/// that are not letters do not take the capital, so `"1bob"` becomes
/// `"1Bob"`.
pub fn normalize_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalized = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        if !capitalized && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalized = true;
        } else {
            if c.is_whitespace() || c == '-' {
                capitalized = false;
            }
            out.push(c);
        }
    }

    out
}

/// Answer to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// Accepts `y`, `yes`, `n` and `no` in any casing.
    ///
    /// Returns `None` for anything else so the caller can ask again.
    pub fn parse(input: &str) -> Option<Self> {
        match normalize_name(input.trim()).as_str() {
            "Yes" | "Y" => Some(Self::Yes),
            "No" | "N" => Some(Self::No),
            _ => None,
        }
    }
}
