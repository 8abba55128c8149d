use std::{fs, path::Path};

use serde::Serialize;

use crate::errors::{ReportError, Result};

/// Basic facts about an uploaded file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileDetails {
    pub name: String,
    pub size_bytes: u64,
    pub media_type: &'static str,
}

pub fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

pub fn inspect_file(path: &Path) -> Result<FileDetails> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(ReportError::InvalidInput(format!(
            "`{}` is not a regular file",
            path.display()
        )));
    }
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    Ok(FileDetails {
        name,
        size_bytes: metadata.len(),
        media_type: media_type_for(path),
    })
}
