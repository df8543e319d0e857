use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Utc;

/// Append-only post-call summary log. Entries are opaque model-generated
/// text under a timestamp header; the lock serializes concurrent appends.
pub struct SummaryLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SummaryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn append(&self, call_sid: &str, caller: &str, summary: &str) -> std::io::Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(
            file,
            "--- {} | call {} from {} ---",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            call_sid,
            caller
        )?;
        writeln!(file, "{summary}")?;
        writeln!(file)?;

        Ok(())
    }
}
