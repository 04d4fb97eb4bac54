use std::fmt;

use serde::Serialize;

/// How far below the current page the report reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Children {
    /// Current page only.
    #[default]
    None,
    /// Current page plus its immediate children.
    First,
    /// Current page plus the full descendant subtree.
    All,
}

impl Children {
    /// Lenient parse: `first` and `all` in any case, anything else is `None`.
    pub fn from_raw(raw: &str) -> Children {
        if raw.eq_ignore_ascii_case("first") {
            Children::First
        } else if raw.eq_ignore_ascii_case("all") {
            Children::All
        } else {
            Children::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Children::None => "none",
            Children::First => "first",
            Children::All => "all",
        }
    }
}

impl fmt::Display for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
