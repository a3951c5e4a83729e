//! Operation log for recorder activity.
//!
//! One line per operation, appended to `~/.trk/logs/trk.log` with 1MB
//! rotation. Callers treat failures here as non-fatal so a full log volume
//! can never break a checkout. The log path is injectable; only
//! [`OpLog::open_default`] touches the home directory.

use crate::error::{Result, TrkError};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "trk.log";
const LOG_DIR_NAME: &str = "logs";
const MAX_LOG_SIZE: u64 = 1_048_576; // 1MB
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded operation.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: String,
    pub details: Option<String>,
    pub success: bool,
}

impl LogEntry {
    pub fn new(operation: impl Into<String>, details: Option<String>, success: bool) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: operation.into(),
            details,
            success,
        }
    }

    /// Format as a single log line, e.g. `[2026-08-30 10:30:45] OK branch main`.
    fn format_line(&self) -> String {
        let status = if self.success { "OK" } else { "ERR" };
        format!(
            "[{}] {} {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            status,
            self.operation,
            self.details.as_deref().unwrap_or("-")
        )
    }

    /// Parse a log line. Truncated or malformed lines yield `None` and are
    /// skipped on read; they never abort `trk logs`.
    fn parse_line(line: &str) -> Option<Self> {
        let (timestamp_str, rest) = line.strip_prefix('[')?.split_once("] ")?;
        let timestamp = NaiveDateTime::parse_from_str(timestamp_str, TIMESTAMP_FORMAT)
            .ok()?
            .and_utc();

        let (status, rest) = rest.split_once(' ')?;
        let success = match status {
            "OK" => true,
            "ERR" => false,
            _ => return None,
        };

        let (operation, details) = match rest.split_once(' ') {
            Some((op, details)) => (op, Some(details).filter(|d| *d != "-")),
            None => (rest, None),
        };
        if operation.is_empty() {
            return None;
        }

        Some(Self {
            timestamp,
            operation: operation.to_string(),
            details: details.map(|d| d.to_string()),
            success,
        })
    }
}

/// Append-only operation log at a fixed path.
#[derive(Debug, Clone)]
pub struct OpLog {
    path: PathBuf,
}

impl OpLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log at its standard location, `~/.trk/logs/trk.log`.
    pub fn open_default() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| TrkError::Config("Could not determine home directory".to_string()))?;
        Ok(Self::new(
            home.join(".trk").join(LOG_DIR_NAME).join(LOG_FILE_NAME),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one operation, creating the log directory on first write and
    /// rotating the file once it reaches 1MB.
    pub fn append(
        &self,
        operation: impl Into<String>,
        details: Option<String>,
        success: bool,
    ) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        self.rotate_if_needed()?;

        let entry = LogEntry::new(operation, details, success);
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", entry.format_line())?;

        Ok(())
    }

    /// Read entries, most recent first.
    ///
    /// - `limit`: maximum number of entries to return
    /// - `operation`: optional filter by operation name
    pub fn read(&self, limit: usize, operation: Option<&str>) -> Result<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries: Vec<LogEntry> = reader
            .lines()
            .filter_map(|line| line.ok())
            .filter_map(|line| LogEntry::parse_line(&line))
            .filter(|entry| operation.map_or(true, |op| entry.operation.eq_ignore_ascii_case(op)))
            .collect();

        entries.reverse();
        entries.truncate(limit);

        Ok(entries)
    }

    /// Remove all entries. Returns the number of lines dropped.
    pub fn clear(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let count = reader.lines().count();

        File::create(&self.path)?;
        let old_path = self.path.with_extension("log.old");
        if old_path.exists() {
            fs::remove_file(&old_path)?;
        }

        Ok(count)
    }

    /// Rename a full log to `.log.old` and start fresh.
    fn rotate_if_needed(&self) -> Result<()> {
        let size = match fs::metadata(&self.path) {
            Ok(metadata) => metadata.len(),
            Err(_) => return Ok(()),
        };
        if size < MAX_LOG_SIZE {
            return Ok(());
        }

        let old_path = self.path.with_extension("log.old");
        if old_path.exists() {
            fs::remove_file(&old_path)?;
        }
        fs::rename(&self.path, &old_path)?;

        Ok(())
    }
}
