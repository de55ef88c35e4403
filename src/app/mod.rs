mod digits;
mod discover;
mod episode;
mod natural;
mod playlist;


use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};
use crossterm::tty::IsTty;

use crate::cli::{Cli, ColorMode};
use crate::config::{self, Settings};

pub(crate) use self::discover::DEFAULT_EXTENSIONS;
pub(crate) use self::playlist::{DEFAULT_PLAYLIST_NAME, DEFAULT_TITLE};

use self::discover::{MediaFile, base_names, discover_media};
use self::episode::{offset_frequencies, pick_most_frequent, select_episode_index};
use self::natural::NaturalOrder;
use self::playlist::{m3u_document, pipe_document, render_highlighted, write_playlist};

pub fn run(cli: Cli) -> Result<()> {
    let file_config = config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, file_config);
    tracing::debug!(?settings, "resolved settings");

    let files = collect_sorted(&settings)?;
    if files.is_empty() {
        return Err(anyhow!("no videos found in {}", settings.dir.display()));
    }
    tracing::info!(count = files.len(), dir = %settings.dir.display(), "sorted media files");

    let terminal = io::stdout().is_tty() && !settings.force_stdout;
    if terminal {
        run_terminal(&settings, &files)
    } else {
        run_pipe(&files)
    }
}

fn collect_sorted(settings: &Settings) -> Result<Vec<MediaFile>> {
    let mut files = discover_media(&settings.dir, &settings.extensions)?;
    let order = NaturalOrder::new(settings.reverse);
    files.sort_by(|left, right| order.compare_paths(&left.path, &right.path));
    Ok(files)
}

fn episode_index(files: &[MediaFile]) -> usize {
    let names = base_names(files);
    if tracing::enabled!(tracing::Level::DEBUG) && names.len() >= 2 {
        let counts = offset_frequencies(&names);
        tracing::debug!(?counts, chosen = pick_most_frequent(&counts), "episode offset vote");
    }
    select_episode_index(&names)
}

fn run_terminal(settings: &Settings, files: &[MediaFile]) -> Result<()> {
    let index = episode_index(files);
    let color = match settings.color {
        ColorMode::Auto => std::env::var_os("NO_COLOR").is_none(),
        ColorMode::Always => true,
        ColorMode::Never => false,
    };

    let mut out = io::stdout().lock();
    for file in files {
        writeln!(out, "{}", render_highlighted(&file.file_name, index, color))
            .context("failed to write to stdout")?;
    }

    if settings.write_playlist {
        let entries: Vec<&str> = files.iter().map(|file| file.file_name.as_str()).collect();
        let path = write_playlist(
            &settings.dir,
            &settings.playlist,
            &m3u_document(&entries, &settings.title),
        )?;
        tracing::info!(path = %path.display(), "wrote playlist");
    }
    Ok(())
}

fn run_pipe(files: &[MediaFile]) -> Result<()> {
    let entries: Vec<String> = files
        .iter()
        .map(|file| file.path.display().to_string())
        .collect();
    let mut out = io::stdout().lock();
    out.write_all(pipe_document(&entries).as_bytes())
        .context("failed to write to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
