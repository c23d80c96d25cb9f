pub use changeset::ChangeSet;
pub use error::{Error, Result};
pub use git::{Git, GitCli};
pub use message::render;
pub use parser::{parse_line, parse_snapshot};
pub use types::{ChangeKind, StatusEntry, StatusFormat};
pub use watcher::{decide, Action, CycleOutcome, CycleReport, Watcher};

use std::path::Path;

mod changeset;
mod error;
mod git;
pub mod message;
pub mod parser;
mod types;
pub mod watcher;

/// Creates a new `Watcher` for a local working tree.
///
/// # Arguments
///
/// * `repo_path`: The path to the local Git working tree.
///
/// # Errors
///
/// Returns an error if the repository path does not exist.
pub fn new_from_local(repo_path: &Path) -> Result<Watcher<GitCli>> {
    Watcher::new_from_local(repo_path)
}
