use crate::core::ReportSink;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Writes reports into a directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalReportSink {
    base_path: PathBuf,
}

impl LocalReportSink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ReportSink for LocalReportSink {
    fn write_report(&self, file_name: &str, data: &[u8]) -> Result<String> {
        let full_path = self.base_path.join(file_name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let sink = LocalReportSink::new(temp_dir.path().join("nested").join("reports"));

        let path = sink.write_report("quote.csv", b"field,value\n").unwrap();

        assert!(path.ends_with("quote.csv"));
        let written = fs::read(temp_dir.path().join("nested/reports/quote.csv")).unwrap();
        assert_eq!(written, b"field,value\n");
    }
}
