// Document input for the CLI: files on disk or lines typed at a prompt.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Read a document from disk.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; the
/// cleaner throws away everything outside ASCII anyway.
pub fn load_doc(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Loaded document");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Print `label` and read one line of input, without the trailing newline.
pub fn prompt_doc<R, W>(label: &str, input: &mut R, output: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {label}"))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Gather both documents: files for the paths given, prompts for the rest.
///
/// With no paths both documents are typed in; with one path the second is
/// typed in; with two paths both come from disk.
pub fn gather_documents<R, W>(
    paths: &[PathBuf],
    input: &mut R,
    output: &mut W,
) -> Result<(String, String)>
where
    R: BufRead,
    W: Write,
{
    let doc1 = match paths.first() {
        Some(path) => load_doc(path)?,
        None => prompt_doc("Document 1", input, output)?,
    };
    let doc2 = match paths.get(1) {
        Some(path) => load_doc(path)?,
        None => prompt_doc("Document 2", input, output)?,
    };
    Ok((doc1, doc2))
}
