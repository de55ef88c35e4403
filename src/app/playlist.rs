use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use super::digits::digit_run_end;

pub(crate) const DEFAULT_PLAYLIST_NAME: &str = "000-playlist.m3u8";
pub(crate) const DEFAULT_TITLE: &str = "auto-play-all";

/// Byte range of the episode digits in `name`, starting at `index`.
///
/// `None` when the index falls outside the name or inside a multi-byte
/// character; the caller then prints the name unmodified. A non-digit at
/// `index` gives an empty range.
pub(crate) fn highlight_span(name: &str, index: usize) -> Option<(usize, usize)> {
    if index >= name.len() || !name.is_char_boundary(index) {
        return None;
    }
    Some((index, digit_run_end(name.as_bytes(), index)))
}

pub(crate) fn render_highlighted(name: &str, index: usize, color: bool) -> String {
    let Some((start, end)) = highlight_span(name, index) else {
        return name.to_string();
    };
    if !color || start == end {
        return name.to_string();
    }
    format!(
        "{}{}{}",
        &name[..start],
        name[start..end].magenta().bold(),
        &name[end..]
    )
}

pub(crate) fn m3u_document<S: AsRef<str>>(entries: &[S], title: &str) -> String {
    let mut content = String::from("#EXTM3U\n");
    content.push_str(&format!("#EXT-X-TITLE: {title}\n"));
    content.push_str("#EXT-X-START\n");
    for entry in entries {
        content.push_str(entry.as_ref());
        content.push('\n');
    }
    content.push_str("#EXT-X-ENDLIST\n");
    content
}

pub(crate) fn pipe_document<S: AsRef<str>>(entries: &[S]) -> String {
    let mut content = String::from("#EXTM3U\n");
    for entry in entries {
        content.push_str(entry.as_ref());
        content.push('\n');
    }
    content
}

pub(crate) fn write_playlist(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, contents)
        .with_context(|| format!("failed to write playlist {}", path.display()))?;
    Ok(path)
}
