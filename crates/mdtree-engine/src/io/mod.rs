use crate::node::{Node, ParseOptions, parse_document};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory {path}: {reason}")]
    InvalidDirectory { path: PathBuf, reason: String },
}

/// Read a markdown file and return its content
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Read and parse a markdown file into a `document` node tree
pub fn read_document(path: &Path, options: &ParseOptions) -> Result<Node, IoError> {
    let text = read_markdown(path)?;
    log::debug!("parsing {} ({} bytes)", path.display(), text.len());
    Ok(parse_document(&text, options))
}

/// Recursively collect `.md` files under `root`, sorted by path
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_directory(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_directory(path: &Path) -> Result<(), IoError> {
    let reason = if !path.exists() {
        "directory does not exist"
    } else if !path.is_dir() {
        "not a directory"
    } else {
        return Ok(());
    };
    Err(IoError::InvalidDirectory {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    })
}
