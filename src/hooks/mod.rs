//! Hook handlers for git hook integration.
//!
//! The post-checkout handler re-expresses the hook's early-exit control
//! flow as a tagged outcome; exit codes only exist at the binary boundary.

pub mod post_checkout;

pub use post_checkout::{handle_post_checkout, PostCheckoutInput};

/// What a post-checkout invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Branch-level checkout; the recorder was called once with `branch`.
    Recorded { branch: String },
    /// File-level checkout; no action taken.
    Skipped,
    /// Symbolic-ref resolution failed; the recorder was not called.
    DetachedHead,
}

impl CheckoutOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recorded { .. } => "recorded",
            Self::Skipped => "skipped",
            Self::DetachedHead => "detached-head",
        }
    }

    /// Exit code the hook reports to git.
    ///
    /// A detached HEAD is a silent no-op with exit code 1; everything else
    /// exits 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DetachedHead => 1,
            _ => 0,
        }
    }

    pub fn branch(&self) -> Option<&str> {
        match self {
            Self::Recorded { branch } => Some(branch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_as_str() {
        let recorded = CheckoutOutcome::Recorded {
            branch: "main".to_string(),
        };
        assert_eq!(recorded.as_str(), "recorded");
        assert_eq!(CheckoutOutcome::Skipped.as_str(), "skipped");
        assert_eq!(CheckoutOutcome::DetachedHead.as_str(), "detached-head");
    }

    #[test]
    fn test_outcome_exit_codes() {
        let recorded = CheckoutOutcome::Recorded {
            branch: "main".to_string(),
        };
        assert_eq!(recorded.exit_code(), 0);
        assert_eq!(CheckoutOutcome::Skipped.exit_code(), 0);
        assert_eq!(CheckoutOutcome::DetachedHead.exit_code(), 1);
    }

    #[test]
    fn test_outcome_branch_accessor() {
        let recorded = CheckoutOutcome::Recorded {
            branch: "feature/foo".to_string(),
        };
        assert_eq!(recorded.branch(), Some("feature/foo"));
        assert_eq!(CheckoutOutcome::Skipped.branch(), None);
        assert_eq!(CheckoutOutcome::DetachedHead.branch(), None);
    }
}
