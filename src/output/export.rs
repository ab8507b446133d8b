use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use crate::analysis::AnalysisResult;

/// Save an analysis result as pretty JSON, atomically
///
/// Uses atomic-write-file so a reader never sees a half-written file.
pub fn save_analysis(path: &Path, result: &AnalysisResult) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, result).context("Failed to serialize analysis")?;
    writeln!(file).context("Failed to write analysis")?;

    file.commit()
        .with_context(|| format!("Failed to save analysis to {}", path.display()))?;

    Ok(())
}
