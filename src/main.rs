//! trk: branch-usage tracking CLI
//!
//! Main entry point. Dispatches commands to the appropriate handlers and
//! outputs JSON results. The post-checkout path stays quiet on stdout so a
//! checkout never gets extra output; its result is carried by the exit code.

use clap::Parser;
use std::env;

use trk::models::{ClearLogsData, ErrorResponse, LogsData, RecordVisitData, SuccessResponse};
use trk::recorder::BranchVisitRecorder;
use trk::{
    handle_post_checkout, Cli, Command, JsonRecorder, OpLog, PostCheckoutInput, Result, TrkConfig,
};

/// What a dispatched command hands back to `main`.
struct CommandOutput {
    /// JSON to print, if the command talks on stdout at all
    json: Option<serde_json::Value>,
    exit_code: i32,
}

impl CommandOutput {
    fn json(value: serde_json::Value) -> Self {
        Self {
            json: Some(value),
            exit_code: 0,
        }
    }

    fn silent(exit_code: i32) -> Self {
        Self {
            json: None,
            exit_code,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            if let Some(json) = output.json {
                println!("{}", serde_json::to_string_pretty(&json).unwrap());
            }
            if output.exit_code != 0 {
                std::process::exit(output.exit_code);
            }
        }
        Err(e) => {
            let error_response = ErrorResponse::new(e.to_string());
            println!("{}", serde_json::to_string_pretty(&error_response).unwrap());
            std::process::exit(1);
        }
    }
}

/// Operation log when enabled; logging stays best-effort throughout.
fn oplog_if_enabled(config: &TrkConfig) -> Option<OpLog> {
    if config.log_operations {
        OpLog::open_default().ok()
    } else {
        None
    }
}

/// Negative limits mean "nothing", not "everything".
fn log_limit(n: i64) -> usize {
    n.max(0) as usize
}

/// Run the dispatched command
fn run(cli: Cli) -> Result<CommandOutput> {
    match cli.command {
        Command::Branch { name } => {
            let config = TrkConfig::load()?;
            let repo_dir = env::current_dir()?;
            let mut recorder = JsonRecorder::new(config.store_path(&repo_dir));
            let oplog = oplog_if_enabled(&config);

            match recorder.record_visit(&name) {
                Ok(event) => {
                    if let Some(oplog) = oplog {
                        // A full log volume must not fail the visit
                        let _ = oplog.append("branch", Some(event.branch.clone()), true);
                    }
                    Ok(CommandOutput::json(serde_json::to_value(
                        SuccessResponse::new(RecordVisitData {
                            id: event.id,
                            branch: event.branch,
                        }),
                    )?))
                }
                Err(e) => {
                    if let Some(oplog) = oplog {
                        let _ = oplog.append("branch", Some(e.to_string()), false);
                    }
                    Err(e)
                }
            }
        }

        Command::PostCheckout {
            previous,
            current,
            flag,
        } => {
            let config = TrkConfig::load()?;
            let repo_dir = env::current_dir()?;
            let mut recorder = JsonRecorder::new(config.store_path(&repo_dir));
            let oplog = oplog_if_enabled(&config);

            let input = PostCheckoutInput {
                previous,
                current,
                flag,
            };

            match handle_post_checkout(&input, &mut recorder, &repo_dir) {
                Ok(outcome) => {
                    if let Some(oplog) = oplog {
                        let details = outcome
                            .branch()
                            .map(|b| b.to_string())
                            .unwrap_or_else(|| outcome.as_str().to_string());
                        let _ = oplog.append("postCheckout", Some(details), true);
                    }
                    Ok(CommandOutput::silent(outcome.exit_code()))
                }
                Err(e) => {
                    if let Some(oplog) = oplog {
                        let _ = oplog.append("postCheckout", Some(e.to_string()), false);
                    }
                    Err(e)
                }
            }
        }

        Command::Logs { n, operation } => {
            let entries = OpLog::open_default()?.read(log_limit(n), operation.as_deref())?;
            let count = entries.len();
            let log_data = LogsData {
                entries: entries
                    .into_iter()
                    .map(|e| trk::models::response::LogEntry {
                        timestamp: e.timestamp.to_rfc3339(),
                        level: if e.success {
                            "info".to_string()
                        } else {
                            "error".to_string()
                        },
                        operation: e.operation,
                        details: e
                            .details
                            .map(|d| serde_json::json!({ "message": d }))
                            .unwrap_or(serde_json::json!({})),
                    })
                    .collect(),
                count,
            };
            Ok(CommandOutput::json(serde_json::to_value(
                SuccessResponse::new(log_data),
            )?))
        }

        Command::ClearLogs => {
            let _ = OpLog::open_default()?.clear()?;
            Ok(CommandOutput::json(serde_json::to_value(
                SuccessResponse::new(ClearLogsData { cleared: true }),
            )?))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
