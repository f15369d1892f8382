//! # Watering Event Log
//!
//! Append-only text log of every scheduler decision. One line per event:
//!
//! ```text
//! 2026-08-30 07:15:02 - Moisture low (0). Watering plant.
//! ```
//!
//! The log is the device's only user-visible output channel - there is no
//! status endpoint and no alerting - so it is never truncated or rotated;
//! prior entries survive process restarts because the file is opened in
//! append mode on every write. Growth is unbounded, which is acceptable for
//! the intended deployment scale (a handful of lines per hour).
//!
//! Write failures are returned to the caller rather than swallowed here; the
//! scheduler reports them to stderr and keeps running, since a full SD card
//! should not stop the plant from being watered.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Timestamp format for log lines, second resolution, local wall-clock time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Handle to the append-only watering log file.
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// Create a handle for the given log file path. Nothing is touched on
    /// disk until the first [`log_event`](Self::log_event) call.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Append one timestamped line to the log file.
    ///
    /// Creates the containing directory if it is missing (idempotent) and
    /// opens the file in append mode so prior entries are preserved.
    pub fn log_event(&self, message: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} - {}", timestamp, message)
    }
}
