use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of NDJSON log files.
pub struct LogFixture {
    dir: TempDir,
    files: Vec<PathBuf>,
}

impl LogFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
            files: Vec::new(),
        }
    }

    /// Write a file made of JSON records, one per line.
    pub fn records(mut self, name: &str, records: &[Value]) -> Self {
        let body: String = records.iter().map(|r| format!("{r}\n")).collect();
        self.files.push(self.write(name, &body));
        self
    }

    /// Write a file verbatim.
    pub fn raw(mut self, name: &str, body: &str) -> Self {
        self.files.push(self.write(name, body));
        self
    }

    /// Register a path that does not exist.
    pub fn missing(mut self, name: &str) -> Self {
        self.files.push(self.dir.path().join(name));
        self
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, body).expect("write log fixture");
        path
    }
}

impl Default for LogFixture {
    fn default() -> Self {
        Self::new()
    }
}
