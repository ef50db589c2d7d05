use std::{
    fs::{self, OpenOptions},
    io::BufWriter,
    path::Path,
};

use anyhow::{bail, Context};
use chrono::NaiveDate;
use log::{info, warn};

use crate::{entry::Entry, frontmatter};

/// Reads every `.md` file directly under `source_dir` (subdirectories are
/// not descended into), builds one [`Entry`] per file, sorts them by date
/// descending and writes the whole collection as a pretty-printed JSON
/// array to `output_file`, replacing any previous file.
///
/// Returns the number of entries written. Nothing is written if
/// `source_dir` does not exist, or if any file fails to read as UTF-8.
pub(crate) fn convert(source_dir: &Path, output_file: &Path) -> anyhow::Result<usize> {
    if !source_dir.is_dir() {
        bail!("source directory {:?} does not exist", source_dir);
    }

    let mut entries: Vec<Entry> = vec![];
    for dirent in fs::read_dir(source_dir)? {
        let dirent = dirent?;
        if !dirent.file_type()?.is_file() {
            continue;
        }
        let file_name = dirent.file_name().to_string_lossy().to_string();
        let Some(id) = file_name.strip_suffix(".md") else {
            continue;
        };

        info!("processing {}", file_name);
        let content = fs::read_to_string(dirent.path())
            .with_context(|| format!("while reading {:?}", dirent.path()))?;

        let entry = frontmatter::parse(id, &content);
        if !entry.date.is_empty() && NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d").is_err() {
            warn!(
                "{}: date {:?} is not YYYY-MM-DD, it will sort lexicographically",
                file_name, entry.date
            );
        }
        entries.push(entry);
    }

    // newest first; entries without a date end up last
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    let fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output_file)
        .with_context(|| format!("while opening {:?}", output_file))?;
    let writer = BufWriter::new(fd);
    serde_json::to_writer_pretty(writer, &entries)
        .with_context(|| format!("while writing {:?}", output_file))?;

    Ok(entries.len())
}
