//! Git integration module for symbolic-ref resolution.
//!
//! Provides the branch lookup the post-checkout hook relies on, plus a
//! validity check for git ref short-names.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, TrkError};

/// Resolve the branch currently checked out in `dir`.
///
/// Runs `git symbolic-ref --short -q HEAD`.
///
/// Returns:
/// - `Ok(Some(name))` when HEAD points at a branch
/// - `Ok(None)` for a detached HEAD or when `dir` is not inside a work tree
/// - `Err(_)` only when git itself could not be spawned
pub fn resolve_branch(dir: &Path) -> Result<Option<String>> {
    let output = Command::new("git")
        .args(["symbolic-ref", "--short", "-q", "HEAD"])
        .current_dir(dir)
        .output();

    let output = match output {
        Ok(o) => o,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                return Ok(None);
            }
            return Err(TrkError::Io(e));
        }
    };

    // symbolic-ref -q exits non-zero without a message on detached HEAD
    if !output.status.success() {
        return Ok(None);
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() {
        return Ok(None);
    }

    Ok(Some(branch))
}

/// Check whether `name` is a syntactically valid ref short-name.
///
/// Subset of the `git check-ref-format` rules that matter for branch names:
/// no whitespace or control characters, no "..", "@{", "//" or backslash,
/// none of `~ ^ : ? * [`, no leading/trailing `/` or `.`, no trailing
/// ".lock", and not the literal "HEAD" or "@".
pub fn is_valid_ref_name(name: &str) -> bool {
    if name.is_empty() || name == "HEAD" || name == "@" {
        return false;
    }
    if name.starts_with('/') || name.ends_with('/') {
        return false;
    }
    if name.starts_with('.') || name.ends_with('.') {
        return false;
    }
    if name.ends_with(".lock") {
        return false;
    }
    if name.contains("..") || name.contains("@{") || name.contains("//") {
        return false;
    }

    name.chars().all(|c| {
        !c.is_control()
            && !c.is_whitespace()
            && !matches!(c, '~' | '^' | ':' | '?' | '*' | '[' | '\\')
    })
}
