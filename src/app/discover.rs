use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use walkdir::WalkDir;

pub(crate) const DEFAULT_EXTENSIONS: &[&str] = &["mkv", "mp4"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MediaFile {
    pub(crate) path: PathBuf,
    pub(crate) file_name: String,
    pub(crate) stem: String,
}

impl MediaFile {
    pub(crate) fn from_path(path: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        let stem = path.file_stem()?.to_string_lossy().into_owned();
        Some(Self {
            path,
            file_name,
            stem,
        })
    }
}

/// Lists the files directly inside `dir` whose extension is one of
/// `extensions`. Extension matching is case-sensitive and dot files are
/// skipped, like a shell `*.mkv` glob.
pub(crate) fn discover_media(dir: &Path, extensions: &[String]) -> Result<Vec<MediaFile>> {
    let meta = std::fs::metadata(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    if !meta.is_dir() {
        return Err(anyhow!("{} is not a directory", dir.display()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
                None
            }
        })
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if !has_media_extension(&path, extensions) {
            continue;
        }
        if let Some(file) = MediaFile::from_path(path) {
            tracing::debug!(file = %file.file_name, "found media file");
            files.push(file);
        }
    }
    Ok(files)
}

pub(crate) fn has_media_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    if name.starts_with('.') {
        return false;
    }
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    extensions.iter().any(|wanted| wanted == ext)
}

pub(crate) fn base_names(files: &[MediaFile]) -> Vec<&str> {
    files.iter().map(|file| file.stem.as_str()).collect()
}
