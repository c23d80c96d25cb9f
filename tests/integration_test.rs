use git_autocommit::{self, ChangeKind, CycleOutcome, Error, StatusEntry};
use std::fs;
use std::path::Path;
use std::process::Command;
use tree_fs::{Tree, TreeBuilder};

fn git(repo: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("git output is not UTF-8")
        .trim()
        .to_string()
}

fn setup_test_repo() -> Tree {
    // Create a temporary workspace for the test repository
    let tree = TreeBuilder::default()
        .add_file("file1.txt", "original content")
        .add_file("dir1/file2.txt", "file 2 content")
        .create()
        .expect("Failed to create test repo tree");

    git(&tree.root, &["init", "--quiet"]);

    // Configure git user for commits
    git(&tree.root, &["config", "user.name", "Test User"]);
    git(&tree.root, &["config", "user.email", "test@example.com"]);
    git(&tree.root, &["config", "commit.gpgsign", "false"]);

    tree
}

fn commit_count(repo: &Path) -> usize {
    git(repo, &["rev-list", "--count", "HEAD"])
        .parse()
        .expect("rev-list count is a number")
}

fn last_subject(repo: &Path) -> String {
    git(repo, &["log", "-1", "--format=%s"])
}

#[test]
fn test_first_cycle_commits_everything() {
    let repo = setup_test_repo();
    let watcher = git_autocommit::new_from_local(&repo.root).expect("Failed to create watcher");

    let report = watcher.run_cycle().expect("Cycle failed");

    assert_eq!(report.outcome, CycleOutcome::Committed);
    assert_eq!(
        report.message.as_deref(),
        Some("add dir1/file2.txt, file1.txt")
    );
    assert_eq!(
        report.changes.entries(),
        &[
            StatusEntry::new(ChangeKind::Added, "dir1/file2.txt"),
            StatusEntry::new(ChangeKind::Added, "file1.txt"),
        ]
    );
    assert_eq!(commit_count(&repo.root), 1);
    assert_eq!(last_subject(&repo.root), "add dir1/file2.txt, file1.txt");
}

#[test]
fn test_clean_tree_reports_no_changes() {
    let repo = setup_test_repo();
    let watcher = git_autocommit::new_from_local(&repo.root).expect("Failed to create watcher");
    watcher.run_cycle().expect("Initial cycle failed");

    let report = watcher.run_cycle().expect("Idle cycle failed");

    assert_eq!(report.outcome, CycleOutcome::NoChanges);
    assert!(report.changes.is_empty());
    assert_eq!(commit_count(&repo.root), 1);
}

#[test]
fn test_repeated_edit_amends_previous_commit() {
    let repo = setup_test_repo();
    let watcher = git_autocommit::new_from_local(&repo.root).expect("Failed to create watcher");
    watcher.run_cycle().expect("Initial cycle failed");

    fs::write(repo.root.join("file1.txt"), "modified content").expect("Failed to modify file1.txt");
    let report = watcher.run_cycle().expect("Update cycle failed");
    assert_eq!(report.outcome, CycleOutcome::Committed);
    assert_eq!(last_subject(&repo.root), "update file1.txt");
    assert_eq!(commit_count(&repo.root), 2);

    fs::write(repo.root.join("file1.txt"), "modified again").expect("Failed to modify file1.txt");
    let report = watcher.run_cycle().expect("Amend cycle failed");
    assert_eq!(report.outcome, CycleOutcome::Amended);
    assert_eq!(report.message, None);

    assert_eq!(commit_count(&repo.root), 2, "Amend must not add a commit");
    assert_eq!(last_subject(&repo.root), "update file1.txt");
    assert_eq!(
        git(&repo.root, &["show", "HEAD:file1.txt"]),
        "modified again"
    );
}

#[test]
fn test_reverted_edit_amends_previous_commit() {
    let repo = setup_test_repo();
    let watcher = git_autocommit::new_from_local(&repo.root).expect("Failed to create watcher");
    watcher.run_cycle().expect("Initial cycle failed");

    fs::write(repo.root.join("file1.txt"), "modified content").expect("Failed to modify file1.txt");
    let report = watcher.run_cycle().expect("Update cycle failed");
    assert_eq!(report.outcome, CycleOutcome::Committed);
    assert_eq!(commit_count(&repo.root), 2);

    fs::write(repo.root.join("file1.txt"), "original content").expect("Failed to revert file1.txt");
    let report = watcher.run_cycle().expect("Revert cycle failed");

    assert_eq!(report.outcome, CycleOutcome::Amended);
    assert_eq!(commit_count(&repo.root), 2, "Amend must not add a commit");
    assert_eq!(last_subject(&repo.root), "update file1.txt");
    assert_eq!(
        git(&repo.root, &["show", "HEAD:file1.txt"]),
        "original content"
    );

    let report = watcher.run_cycle().expect("Idle cycle failed");
    assert_eq!(report.outcome, CycleOutcome::NoChanges);
}

#[test]
fn test_mixed_changes_are_grouped() {
    let repo = setup_test_repo();
    let watcher = git_autocommit::new_from_local(&repo.root).expect("Failed to create watcher");
    watcher.run_cycle().expect("Initial cycle failed");

    fs::write(repo.root.join("file1.txt"), "modified content").expect("Failed to modify file1.txt");
    fs::remove_file(repo.root.join("dir1/file2.txt")).expect("Failed to delete file2.txt");
    fs::create_dir_all(repo.root.join("dir2")).expect("Failed to create dir2");
    fs::write(repo.root.join("dir2/file3.txt"), "new file content")
        .expect("Failed to create file3.txt");
    fs::write(repo.root.join("with space.txt"), "spaced").expect("Failed to create spaced file");

    let report = watcher.run_cycle().expect("Cycle failed");

    assert_eq!(report.outcome, CycleOutcome::Committed);
    assert_eq!(
        last_subject(&repo.root),
        "add dir2/file3.txt, with space.txt , update file1.txt , delete dir1/file2.txt"
    );
}

#[test]
fn test_deletion_after_edit_commits() {
    let repo = setup_test_repo();
    let watcher = git_autocommit::new_from_local(&repo.root).expect("Failed to create watcher");
    watcher.run_cycle().expect("Initial cycle failed");

    fs::write(repo.root.join("file1.txt"), "modified content").expect("Failed to modify file1.txt");
    watcher.run_cycle().expect("Update cycle failed");

    fs::remove_file(repo.root.join("file1.txt")).expect("Failed to delete file1.txt");
    let report = watcher.run_cycle().expect("Delete cycle failed");

    assert_eq!(report.outcome, CycleOutcome::Committed);
    assert_eq!(last_subject(&repo.root), "delete file1.txt");
    assert_eq!(commit_count(&repo.root), 3);
}

#[test]
fn test_missing_directory_is_rejected() {
    let repo = setup_test_repo();
    let missing = repo.root.join("does-not-exist");

    let result = git_autocommit::new_from_local(&missing);

    assert!(matches!(result, Err(Error::RepositoryNotFound(path)) if path == missing));
}
