use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use tracing::{error, warn};

use crate::error::StoreError;

const LOG_FILE: &str = "errors.log";

/// Append-only failure log. One line per event:
///
/// ```text
/// [<YYYY-MM-DD HH:MM:SS>]ERRO em <operation>: <message> | EXCEÇÃO: <kind> - <text>
/// ```
///
/// The ` | EXCEÇÃO` suffix is present only when an underlying fault is
/// supplied. Logging itself never fails the caller.
#[derive(Clone)]
pub struct ErrorLog {
    dir: PathBuf,
}

impl ErrorLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Records the failure and hands back the caller-supplied fallback so
    /// call sites can continue with a safe default.
    pub fn fail_with<T>(
        &self,
        operation: &'static str,
        message: &str,
        err: &StoreError,
        fallback: T,
    ) -> T {
        error!(operation, error = %err, "{message}");
        self.record(operation, message, Some(err));
        fallback
    }

    pub fn record(&self, operation: &str, message: &str, err: Option<&StoreError>) {
        let mut line = format!(
            "[{}]ERRO em {operation}: {message}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
        );
        if let Some(err) = err {
            line.push_str(&format!(" | EXCEÇÃO: {} - {err}", err.kind()));
        }

        if let Err(io_err) = self.append(&line) {
            warn!(error = %io_err, "could not append to error log");
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(LOG_FILE))?;
        writeln!(file, "{line}")
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }
}
