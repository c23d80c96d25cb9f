use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Trait defining the Git operations a watch cycle needs
#[cfg_attr(test, mockall::automock)]
pub trait Git {
    /// Stage every change in the working tree, including deletions
    ///
    /// # Errors
    ///
    /// Returns an error if `git add` fails
    fn stage_all(&self) -> Result<()>;

    /// Get the short status listing of the working tree, one `<kind> <path>` line per entry
    ///
    /// # Errors
    ///
    /// Returns an error if `git status` fails
    fn status_snapshot(&self) -> Result<String>;

    /// Whether the repository has a `HEAD` commit yet
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be executed
    fn has_head(&self) -> Result<bool>;

    /// Get the name-status summary of the `HEAD` commit, one `<kind>\t<path>` line per entry
    ///
    /// # Errors
    ///
    /// Returns an error if `git show` fails
    fn head_change_summary(&self) -> Result<String>;

    /// Create a new commit from the staged changes
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be created
    fn commit(&self, message: &str) -> Result<()>;

    /// Fold the staged changes into `HEAD`, keeping its message
    ///
    /// Succeeds even when the result has no changes against its parent, e.g. after an edit is reverted
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be amended
    fn amend(&self) -> Result<()>;
}

/// Implementation of Git operations using the local Git CLI
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    /// Creates a new `GitCli` instance with the given repository path
    #[must_use]
    pub const fn new(repo_path: PathBuf) -> Self {
        Self { repo_path }
    }

    /// Run a Git command in the repository and return its raw stdout
    ///
    /// The output is returned untrimmed: status listings carry meaningful leading columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned, exits non-zero or prints non-UTF-8 output
    #[instrument(skip(self), fields(args = ?args, repo_path = %self.repo_path.display()))]
    pub fn run_git_command(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args)?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            debug!(error = %error, "Git command failed");
            return Err(Error::GitCommandError(format!(
                "git {}: {}",
                args.join(" "),
                error.trim()
            )));
        }

        let result =
            String::from_utf8(output.stdout).map_err(|e| Error::GitCommandError(e.to_string()))?;

        debug!(
            output_length = result.len(),
            "Git command completed successfully"
        );
        Ok(result)
    }

    fn output(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| Error::GitCommandError(e.to_string()))
    }
}

impl Git for GitCli {
    fn stage_all(&self) -> Result<()> {
        self.run_git_command(&["add", "--all"])?;
        Ok(())
    }

    fn status_snapshot(&self) -> Result<String> {
        self.run_git_command(&["status", "--porcelain", "--no-renames"])
    }

    #[instrument(skip(self), fields(repo_path = %self.repo_path.display()))]
    fn has_head(&self) -> Result<bool> {
        let output = self.output(&["rev-parse", "--verify", "--quiet", "HEAD"])?;
        let exists = output.status.success();
        debug!(exists, "Checked for HEAD commit");
        Ok(exists)
    }

    fn head_change_summary(&self) -> Result<String> {
        self.run_git_command(&["show", "--format=", "--name-status", "--no-renames", "HEAD"])
            .map(|summary| summary.trim_start_matches('\n').to_string())
    }

    #[instrument(skip(self), fields(message = %message))]
    fn commit(&self, message: &str) -> Result<()> {
        self.run_git_command(&["commit", "--quiet", "-m", message])?;
        debug!("Commit created");
        Ok(())
    }

    #[instrument(skip(self))]
    fn amend(&self) -> Result<()> {
        self.run_git_command(&["commit", "--quiet", "--amend", "--no-edit", "--allow-empty"])?;
        debug!("Commit amended");
        Ok(())
    }
}
