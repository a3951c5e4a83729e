//! Post-checkout hook handler.
//!
//! Invoked by git with three positional arguments: previous ref, new ref,
//! and a flag (1 = branch checkout, 0 = file checkout). Only a branch
//! checkout on a resolvable symbolic ref reaches the recorder.

use std::path::Path;

use crate::error::Result;
use crate::git::resolve_branch;
use crate::recorder::BranchVisitRecorder;

use super::CheckoutOutcome;

/// Positional arguments git passes to a post-checkout hook.
#[derive(Debug, Clone)]
pub struct PostCheckoutInput {
    /// Ref of the previous HEAD
    pub previous: String,
    /// Ref of the new HEAD
    pub current: String,
    /// "1" for a branch-level checkout, "0" for a file-level one
    pub flag: String,
}

/// Handle the post-checkout hook.
///
/// 1. A non-branch checkout (flag != "1") is skipped outright
/// 2. The current branch is resolved via the symbolic ref
/// 3. A detached HEAD no-ops without invoking the recorder
/// 4. Otherwise the recorder is called exactly once with the short name
///
/// Recorder errors propagate untouched; the hook neither interprets nor
/// wraps them.
pub fn handle_post_checkout(
    input: &PostCheckoutInput,
    recorder: &mut dyn BranchVisitRecorder,
    repo_dir: &Path,
) -> Result<CheckoutOutcome> {
    // git compares the flag as a string; anything but "1" is a file checkout
    if input.flag != "1" {
        return Ok(CheckoutOutcome::Skipped);
    }

    let branch = match resolve_branch(repo_dir)? {
        Some(branch) => branch,
        None => return Ok(CheckoutOutcome::DetachedHead),
    };

    recorder.record_visit(&branch)?;

    Ok(CheckoutOutcome::Recorded { branch })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrkError;
    use crate::recorder::MemoryRecorder;
    use std::process::Command;
    use tempfile::TempDir;

    const ZERO_REF: &str = "0000000000000000000000000000000000000000";

    fn input(flag: &str) -> PostCheckoutInput {
        PostCheckoutInput {
            previous: ZERO_REF.to_string(),
            current: ZERO_REF.to_string(),
            flag: flag.to_string(),
        }
    }

    fn init_repo() -> TempDir {
        let dir = TempDir::new().unwrap();

        Command::new("git")
            .args(["init", "-b", "main"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to init git repo");
        Command::new("git")
            .args(["config", "user.email", "test@test.com"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to set git email");
        Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to set git name");

        std::fs::write(dir.path().join("test.txt"), "test").unwrap();
        Command::new("git")
            .args(["add", "."])
            .current_dir(dir.path())
            .output()
            .expect("Failed to add file");
        Command::new("git")
            .args(["commit", "-m", "Initial commit"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to commit");

        dir
    }

    #[test]
    fn test_branch_checkout_records_once() {
        let repo = init_repo();
        let mut recorder = MemoryRecorder::new();

        let outcome = handle_post_checkout(&input("1"), &mut recorder, repo.path()).unwrap();

        assert_eq!(
            outcome,
            CheckoutOutcome::Recorded {
                branch: "main".to_string()
            }
        );
        assert_eq!(recorder.visits.len(), 1);
        assert_eq!(recorder.visits[0].branch, "main");
    }

    #[test]
    fn test_file_checkout_never_invokes_recorder() {
        let repo = init_repo();
        let mut recorder = MemoryRecorder::new();

        let outcome = handle_post_checkout(&input("0"), &mut recorder, repo.path()).unwrap();

        assert_eq!(outcome, CheckoutOutcome::Skipped);
        assert!(recorder.visits.is_empty());
    }

    #[test]
    fn test_file_checkout_skips_before_ref_resolution() {
        // No git repo at all: the flag guard must come first
        let dir = TempDir::new().unwrap();
        let mut recorder = MemoryRecorder::new();

        let outcome = handle_post_checkout(&input("0"), &mut recorder, dir.path()).unwrap();

        assert_eq!(outcome, CheckoutOutcome::Skipped);
        assert!(recorder.visits.is_empty());
    }

    #[test]
    fn test_detached_head_never_invokes_recorder() {
        let repo = init_repo();
        Command::new("git")
            .args(["checkout", "--detach", "HEAD"])
            .current_dir(repo.path())
            .output()
            .expect("Failed to detach HEAD");

        let mut recorder = MemoryRecorder::new();
        let outcome = handle_post_checkout(&input("1"), &mut recorder, repo.path()).unwrap();

        assert_eq!(outcome, CheckoutOutcome::DetachedHead);
        assert!(recorder.visits.is_empty());
    }

    #[test]
    fn test_branch_checkout_on_feature_branch() {
        let repo = init_repo();
        Command::new("git")
            .args(["checkout", "-b", "feature/foo"])
            .current_dir(repo.path())
            .output()
            .expect("Failed to create branch");

        let mut recorder = MemoryRecorder::new();
        let outcome = handle_post_checkout(&input("1"), &mut recorder, repo.path()).unwrap();

        assert_eq!(outcome.branch(), Some("feature/foo"));
    }

    #[test]
    fn test_repeated_checkout_of_same_branch() {
        let repo = init_repo();
        let mut recorder = MemoryRecorder::new();

        handle_post_checkout(&input("1"), &mut recorder, repo.path()).unwrap();
        let outcome = handle_post_checkout(&input("1"), &mut recorder, repo.path()).unwrap();

        assert_eq!(outcome.branch(), Some("main"));
        assert_eq!(recorder.visits.len(), 2);
    }

    #[test]
    fn test_recorder_failure_propagates_unwrapped() {
        let repo = init_repo();
        let mut recorder = MemoryRecorder::unavailable();

        let err = handle_post_checkout(&input("1"), &mut recorder, repo.path()).unwrap_err();
        assert!(matches!(err, TrkError::RecorderUnavailable(_)));
    }

    #[test]
    fn test_unexpected_flag_treated_as_file_checkout() {
        let repo = init_repo();
        let mut recorder = MemoryRecorder::new();

        let outcome = handle_post_checkout(&input("2"), &mut recorder, repo.path()).unwrap();
        assert_eq!(outcome, CheckoutOutcome::Skipped);
    }
}
