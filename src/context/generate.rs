use std::{fs, path::Path};

use path_slash::PathExt;

use crate::constants::{SEPARATOR_CHAR, SEPARATOR_WIDTH};
use crate::context::types::Entry;
use crate::context::walk::walk;
use crate::error::FileReadError;

/// Flattened listing of relative paths for the selected entries.
///
/// A folder contributes `folder/`, then for every non-empty directory beneath
/// it (itself included) the directory line and one line per file directly
/// inside. Only path and metadata calls are made; no file is opened.
pub fn generate_paths<'a>(
    root: &Path,
    selected: impl IntoIterator<Item = &'a Entry>,
) -> String {
    let mut lines = Vec::new();
    for entry in selected {
        let rel = relative(root, &entry.path);
        if !entry.path.is_dir() {
            lines.push(rel);
            continue;
        }

        lines.push(format!("{rel}/"));
        for level in walk(&entry.path) {
            if level.is_empty() {
                continue;
            }
            let rel_dir = relative(root, &level.dir);
            if level.dir != entry.path {
                lines.push(format!("{rel_dir}/"));
            }
            for file in &level.files {
                lines.push(format!("{rel_dir}/{}", file.to_string_lossy()));
            }
        }
    }
    lines.join("\n")
}

/// Concatenated file contents for the selected entries, one block per file.
///
/// Files that cannot be read as text produce a placeholder block and the
/// remaining files are still processed.
pub fn generate_contents<'a>(
    root: &Path,
    selected: impl IntoIterator<Item = &'a Entry>,
) -> String {
    let mut blocks = Vec::new();
    for entry in selected {
        if entry.path.is_dir() {
            for level in walk(&entry.path) {
                for file in &level.files {
                    blocks.push(file_block(root, &level.dir.join(file)));
                }
            }
        } else if entry.path.is_file() {
            blocks.push(file_block(root, &entry.path));
        } else {
            tracing::debug!("{:?} is neither file nor directory. Skipping.", entry.path);
        }
    }
    blocks.join("\n")
}

/// Renders the block for one file. The label is computed before the read so
/// the failure block always names the file that failed.
pub fn file_block(
    root: &Path,
    path: &Path,
) -> String {
    let rel = relative(root, path);
    let rule = separator();
    match read_text(path) {
        Ok(content) => format!("File: {rel}\n\n{content}\n{rule}\n"),
        Err(e) => {
            tracing::debug!("{e}");
            format!("File: {rel} could not be read.\n{rule}\n")
        }
    }
}

/// Reads a file as UTF-8 text with `\r\n` and lone `\r` folded to `\n`.
pub fn read_text(path: &Path) -> Result<String, FileReadError> {
    let bytes = fs::read(path).map_err(|source| FileReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| FileReadError::NotText {
        path: path.to_path_buf(),
    })?;
    Ok(normalize_newlines(text))
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// `path` relative to `root` with `/` separators; `path` itself if it is not
/// under `root`.
pub fn relative(
    root: &Path,
    path: &Path,
) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_slash_lossy()
        .into_owned()
}

pub fn separator() -> String {
    std::iter::repeat_n(SEPARATOR_CHAR, SEPARATOR_WIDTH).collect()
}
