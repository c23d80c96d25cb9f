use crate::changeset::ChangeSet;
use crate::error::{Error, Result};
use crate::git::{Git, GitCli};
use crate::message;
use crate::types::StatusFormat;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, instrument};

/// What a cycle decided to do with the current change set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed in the working tree.
    Skip,
    /// The change set mirrors the previous commit; fold into it.
    Amend,
    /// Record a new commit with the rendered message.
    Commit(String),
}

/// Picks the action for a cycle from the current and previous change sets.
#[must_use]
pub fn decide(current: &ChangeSet, previous: Option<&ChangeSet>) -> Action {
    if current.is_empty() {
        Action::Skip
    } else if previous == Some(current) {
        Action::Amend
    } else {
        Action::Commit(message::render(current))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleOutcome {
    NoChanges,
    Committed,
    Amended,
}

impl CycleOutcome {
    /// Single-character progress marker printed after each cycle.
    #[must_use]
    pub const fn indicator(self) -> char {
        match self {
            Self::NoChanges => '.',
            Self::Committed => 'C',
            Self::Amended => 'A',
        }
    }
}

/// Result of one watch cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub changes: ChangeSet,
}

impl CycleReport {
    fn no_changes() -> Self {
        Self {
            outcome: CycleOutcome::NoChanges,
            message: None,
            changes: ChangeSet::default(),
        }
    }
}

/// Snapshots a working tree and turns its changes into commits
pub struct Watcher<G> {
    git: G,
}

impl Watcher<GitCli> {
    /// Create a watcher for a local git working tree
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist
    #[instrument]
    pub fn new_from_local(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(Error::RepositoryNotFound(path.to_path_buf()));
        }
        debug!(path = %path.display(), "Creating watcher for local repository");
        Ok(Self::new(GitCli::new(path.to_path_buf())))
    }
}

impl<G: Git> Watcher<G> {
    pub const fn new(git: G) -> Self {
        Self { git }
    }

    /// Run a single snapshot, compare and commit cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if a git invocation fails or its output cannot be parsed.
    /// The repository may then hold staged but uncommitted changes.
    #[instrument(skip(self))]
    pub fn run_cycle(&self) -> Result<CycleReport> {
        self.git.stage_all()?;

        let raw_status = self.git.status_snapshot()?;
        if raw_status.trim().is_empty() {
            debug!("Working tree clean");
            return Ok(CycleReport::no_changes());
        }

        let current = ChangeSet::parse(&raw_status, StatusFormat::Short)?;
        let previous = self.previous_changes()?;
        debug!(
            current = current.len(),
            previous = ?previous.as_ref().map(ChangeSet::len),
            "Comparing change sets"
        );

        let report = match decide(&current, previous.as_ref()) {
            Action::Skip => CycleReport::no_changes(),
            Action::Amend => {
                self.git.amend()?;
                CycleReport {
                    outcome: CycleOutcome::Amended,
                    message: None,
                    changes: current,
                }
            }
            Action::Commit(message) => {
                self.git.commit(&message)?;
                CycleReport {
                    outcome: CycleOutcome::Committed,
                    message: Some(message),
                    changes: current,
                }
            }
        };

        debug!(outcome = ?report.outcome, "Cycle finished");
        Ok(report)
    }

    fn previous_changes(&self) -> Result<Option<ChangeSet>> {
        if !self.git.has_head()? {
            return Ok(None);
        }
        let summary = self.git.head_change_summary()?;
        ChangeSet::parse(&summary, StatusFormat::DiffSummary).map(Some)
    }
}
