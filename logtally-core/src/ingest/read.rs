use crate::ingest::ReadError;
use crate::record::LogRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error, info};

/// Read every file in `paths` and collect the records they contain.
///
/// Records keep file order, then line order. Files that cannot be opened are
/// reported and skipped; a read error part-way through a file keeps whatever
/// was read before it.
pub fn read_logs<P: AsRef<Path>>(paths: &[P]) -> Vec<LogRecord> {
    let mut logs = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if let Err(e) = read_file(path, &mut logs) {
            error!("{e}");
        }
    }

    info!("loaded {} log records", logs.len());
    logs
}

fn read_file(path: &Path, logs: &mut Vec<LogRecord>) -> Result<(), ReadError> {
    let file = File::open(path).map_err(|e| ReadError::open(path, e))?;
    let reader = BufReader::new(file);
    let before = logs.len();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ReadError::read(path, idx + 1, e))?;
        if let Some(record) = parse_line(&line) {
            logs.push(record);
        }
    }

    debug!(
        "read {} records from {}",
        logs.len() - before,
        path.display()
    );
    Ok(())
}

/// Decode one line as a JSON object.
///
/// Anything else (blank line, malformed JSON, arrays, scalars) is `None`.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    serde_json::from_str::<LogRecord>(line).ok()
}
