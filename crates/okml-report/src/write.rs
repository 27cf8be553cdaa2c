//! Artifact writers
//!
//! Every writer creates missing parent directories first.

use crate::error::ReportError;
use serde::Serialize;
use std::path::Path;

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Path) -> Result<(), ReportError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportError::io_error(dir, e))
}

/// Write UTF-8 text to `path`
pub fn write_text(path: &Path, text: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, text).map_err(|e| ReportError::io_error(path, e))
}

/// Write raw bytes (PNG charts) to `path`
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, bytes).map_err(|e| ReportError::io_error(path, e))
}

/// Write `payload` as pretty-printed JSON (two-space indent)
pub fn write_json<T: Serialize + ?Sized>(path: &Path, payload: &T) -> Result<(), ReportError> {
    let text = serde_json::to_string_pretty(payload)?;
    write_text(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writers_create_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c.json");
        write_json(&nested, &serde_json::json!({ "run_id": "x" })).unwrap();
        assert_eq!(
            std::fs::read_to_string(&nested).unwrap(),
            "{\n  \"run_id\": \"x\"\n}"
        );

        let text = dir.path().join("d/e.md");
        write_text(&text, "# hi\n").unwrap();
        assert_eq!(std::fs::read_to_string(text).unwrap(), "# hi\n");

        let chart = dir.path().join("f/chart.png");
        write_bytes(&chart, &[0x89, b'P', b'N', b'G']).unwrap();
        assert_eq!(std::fs::read(chart).unwrap(), [0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn writing_over_a_directory_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_text(dir.path(), "x").unwrap_err();
        assert!(matches!(err, ReportError::Io { ref path, .. } if path == dir.path()));
    }
}
