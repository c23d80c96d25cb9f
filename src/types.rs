use serde::{Deserialize, Serialize};

/// How a path differs from the last recorded snapshot.
///
/// Variant order is the canonical order used for sorting and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Unknown,
}

impl ChangeKind {
    /// Maps a raw status token (`A`, `M`, `D`) to a kind; anything else is `Unknown`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "A" => Self::Added,
            "M" => Self::Modified,
            "D" => Self::Deleted,
            _ => Self::Unknown,
        }
    }

    /// Label that opens a group of this kind in a commit message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Added => "add ",
            Self::Modified => "update ",
            Self::Deleted => "delete ",
            Self::Unknown => "?? ",
        }
    }
}

/// A single changed path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatusEntry {
    kind: ChangeKind,
    path: String,
}

impl StatusEntry {
    #[must_use]
    pub fn new(kind: ChangeKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        self.kind
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Raw listing formats understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFormat {
    /// `git status --porcelain`: `<kind> <path>`
    Short,
    /// `git show --name-status`: `<kind>\t<path>`
    DiffSummary,
}

impl StatusFormat {
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Short => ' ',
            Self::DiffSummary => '\t',
        }
    }
}
