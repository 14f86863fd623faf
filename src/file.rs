// src/file.rs

// Filesystem plumbing for output files and the URL list.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::csv;

/// Read the scoresheet URL list: one URL per line, blank lines and
/// `#`-comments skipped.
pub fn read_url_list(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Heuristic for -o values: trailing separator or an existing directory
/// means "put the default filename in here".
pub fn looks_like_dir_hint(path: &Path) -> bool {
    if path.is_dir() {
        return true;
    }
    let raw = path.to_string_lossy();
    raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR)
}

/// Truncate and start an output file, writing the header row if any.
pub fn write_rows_start(path: &Path, headers: Option<&[String]>, sep: char) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut w = BufWriter::new(File::create(path)?);
    if let Some(h) = headers {
        csv::write_row(&mut w, h, sep)?;
    }
    w.flush()
}

pub fn append_rows(path: &Path, rows: &[Vec<String>], sep: char) -> io::Result<()> {
    let mut w = BufWriter::new(OpenOptions::new().append(true).open(path)?);
    for row in rows {
        csv::write_row(&mut w, row, sep)?;
    }
    w.flush()
}

/// Pick a collision-free per-bowler filename inside `dir`.
/// Second "John_Smith" in a run becomes "John_Smith (2)".
pub fn resolve_bowler_filename(
    dir: &Path,
    stem: &str,
    seen: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let n = seen.entry(s!(stem)).and_modify(|n| *n += 1).or_insert(1);
    if *n == 1 {
        dir.join(format!("{stem}.{ext}"))
    } else {
        dir.join(format!("{stem} ({n}).{ext}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_stems_get_numbered() {
        let dir = Path::new("out");
        let mut seen = HashMap::new();
        assert_eq!(
            resolve_bowler_filename(dir, "John_Smith", &mut seen, "csv"),
            dir.join("John_Smith.csv")
        );
        assert_eq!(
            resolve_bowler_filename(dir, "John_Smith", &mut seen, "csv"),
            dir.join("John_Smith (2).csv")
        );
        assert_eq!(
            resolve_bowler_filename(dir, "Jane_Doe", &mut seen, "csv"),
            dir.join("Jane_Doe.csv")
        );
    }

    #[test]
    fn dir_hints() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(!looks_like_dir_hint(Path::new("out/stats.csv")));
    }
}
