// CLI Parser - Clap derive definitions
// Matches the invocation contract of the git post-checkout hook

use clap::{Parser, Subcommand};

/// trk: branch-usage tracking for git checkouts
#[derive(Parser, Debug)]
#[command(name = "trk")]
#[command(version)]
#[command(about = "Records which branches a repository's checkouts visit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a visit to a branch
    Branch {
        /// Branch short-name (e.g., "main", "feature/foo")
        name: String,
    },

    /// Git post-checkout hook entry point
    PostCheckout {
        /// Ref of the previous HEAD
        previous: String,
        /// Ref of the new HEAD
        current: String,
        /// Checkout flag: 1 = branch checkout, 0 = file checkout
        flag: String,
    },

    /// View operation logs
    Logs {
        /// Number of log entries
        #[arg(default_value = "50")]
        n: i64,
        /// Filter by operation type
        operation: Option<String>,
    },

    /// Clear all logs
    ClearLogs,
}

// ============================================================================
// Tests
// ============================================================================
