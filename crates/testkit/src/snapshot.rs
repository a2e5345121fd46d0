//! Golden text snapshots.
//!
//! Rendered panels and other textual output are compared against files on
//! disk. To update goldens, rerun with `MESHPROBE_UPDATE_SNAPSHOTS=1`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Environment variable that enables snapshot updates.
pub const UPDATE_SNAPSHOTS_ENV: &str = "MESHPROBE_UPDATE_SNAPSHOTS";

/// Assert that `actual` matches the text snapshot stored at `path`.
///
/// Line endings are normalized before comparison. With
/// `MESHPROBE_UPDATE_SNAPSHOTS=1` the file is written instead.
pub fn assert_text_snapshot<P: AsRef<Path>>(path: P, actual: &str) -> Result<()> {
    let path = path.as_ref();
    let actual = normalize(actual);

    if should_update_snapshots() {
        write_snapshot(path, &actual)?;
        return Ok(());
    }

    let expected = fs::read_to_string(path).with_context(|| {
        format!(
            "Snapshot missing at {} (run with {}=1 to create/update)",
            path.display(),
            UPDATE_SNAPSHOTS_ENV
        )
    })?;

    if normalize(&expected) != actual {
        anyhow::bail!(
            "Snapshot mismatch at {} (run with {}=1 to update)\n--- expected\n{}\n--- actual\n{}",
            path.display(),
            UPDATE_SNAPSHOTS_ENV,
            expected,
            actual
        );
    }

    Ok(())
}

fn should_update_snapshots() -> bool {
    matches!(
        std::env::var(UPDATE_SNAPSHOTS_ENV).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE") | Ok("yes") | Ok("YES")
    )
}

fn write_snapshot(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create snapshot directory {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))
}

fn normalize(text: &str) -> String {
    let mut out = text.replace("\r\n", "\n");
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
