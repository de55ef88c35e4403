use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde_json::Value;

use crate::cli::{Cli, ColorMode};
use crate::paths::config_file_path;

/// Values read from the optional config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub extensions: Option<Vec<String>>,
    pub playlist: Option<String>,
    pub title: Option<String>,
    pub color: Option<ColorMode>,
}

/// Effective settings after merging defaults, config file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dir: PathBuf,
    pub extensions: Vec<String>,
    pub playlist: String,
    pub title: String,
    pub color: ColorMode,
    pub reverse: bool,
    pub force_stdout: bool,
    pub write_playlist: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let extensions = if cli.ext.is_empty() {
            file.extensions.unwrap_or_else(|| {
                crate::app::DEFAULT_EXTENSIONS
                    .iter()
                    .map(|ext| ext.to_string())
                    .collect()
            })
        } else {
            cli.ext.clone()
        };

        Self {
            dir: cli.dir.clone(),
            extensions: normalize_extensions(extensions),
            playlist: cli
                .playlist
                .clone()
                .or(file.playlist)
                .unwrap_or_else(|| crate::app::DEFAULT_PLAYLIST_NAME.to_string()),
            title: cli
                .title
                .clone()
                .or(file.title)
                .unwrap_or_else(|| crate::app::DEFAULT_TITLE.to_string()),
            color: cli.color.or(file.color).unwrap_or_default(),
            reverse: cli.reverse,
            force_stdout: cli.stdout,
            write_playlist: !cli.no_write,
        }
    }
}

pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_file_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!(error = %err, "no config directory; using defaults");
                return Ok(FileConfig::default());
            }
        },
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
            tracing::debug!(path = %path.display(), "config file not found; using defaults");
            return Ok(FileConfig::default());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file {}", path.display()));
        }
    };

    tracing::debug!(path = %path.display(), "loaded config file");
    parse_config(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn parse_config(raw: &str) -> Result<FileConfig> {
    let value: Value = serde_json::from_str(raw).context("config is not valid JSON")?;
    if !value.is_object() {
        return Err(anyhow!("config must be a JSON object"));
    }

    let extensions = match value.get("extensions") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut out = Vec::new();
            for item in items {
                let ext = item
                    .as_str()
                    .ok_or_else(|| anyhow!("`extensions` must contain only strings"))?;
                out.push(ext.to_string());
            }
            Some(out)
        }
        Some(_) => return Err(anyhow!("`extensions` must be an array of strings")),
    };

    let color = match string_field(&value, "color")? {
        Some(raw) => Some(
            ColorMode::from_str(&raw, true)
                .map_err(|_| anyhow!("`color` must be one of auto, always, never"))?,
        ),
        None => None,
    };

    Ok(FileConfig {
        extensions,
        playlist: string_field(&value, "playlist")?,
        title: string_field(&value, "title")?,
        color,
    })
}

fn string_field(value: &Value, key: &str) -> Result<Option<String>> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.trim().to_string())),
        Some(_) => Err(anyhow!("`{key}` must be a string")),
    }
}

fn normalize_extensions(extensions: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for ext in extensions {
        let ext = ext.trim().trim_start_matches('.').to_string();
        if !ext.is_empty() && !out.contains(&ext) {
            out.push(ext);
        }
    }
    out
}
