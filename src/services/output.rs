use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Timestamp format appended to output file stems
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Where a mapped image is written.
///
/// With `overwrite` the input itself; otherwise a sibling named
/// `<stem>_<YYYYmmdd_HHMMSS>.<ext>`.
pub fn output_path(input: &Path, overwrite: bool, now: NaiveDateTime) -> PathBuf {
    if overwrite {
        return input.to_path_buf();
    }

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let stamp = now.format(TIMESTAMP_FORMAT);
    let name = match input.extension() {
        Some(ext) => format!("{stem}_{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{stamp}"),
    };
    input.with_file_name(name)
}
