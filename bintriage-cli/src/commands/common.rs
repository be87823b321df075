use std::path::{Path, PathBuf};

use anyhow::Context;
use bintriage::Sample;

/// Memory-map the file at `path`.
pub fn load_sample(path: &Path) -> anyhow::Result<Sample> {
    Sample::from_path(path).with_context(|| format!("failed to load file: {}", path.display()))
}

/// Collect every regular file below `dir`, sorted by path.
pub fn collect_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_files_recursive(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

/// Run `process` on every file below `dir`.
///
/// Failures are logged and counted instead of aborting the batch.
pub fn process_directory<T>(
    dir: &Path,
    process: impl Fn(&Path) -> anyhow::Result<T>,
) -> anyhow::Result<(Vec<T>, usize)> {
    let files = collect_files(dir)?;
    log::info!("processing {} files below {}", files.len(), dir.display());

    let mut results = Vec::with_capacity(files.len());
    let mut failures = 0;
    for file in &files {
        match process(file) {
            Ok(result) => results.push(result),
            Err(e) => {
                log::warn!("{}: {e:#}", file.display());
                failures += 1;
            }
        }
    }

    Ok((results, failures))
}

/// Extract a display-friendly filename from a path.
pub fn file_display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}
