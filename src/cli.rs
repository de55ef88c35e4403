use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "playall",
    version,
    about = "Sort the episodes in a directory naturally and emit an M3U playlist"
)]
pub struct Cli {
    /// Directory to scan for video files
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,

    /// File extension to include (repeatable; defaults to mkv and mp4)
    #[arg(short, long = "ext", value_name = "EXT", action = ArgAction::Append)]
    pub ext: Vec<String>,

    /// Playlist file written into the directory in terminal mode
    #[arg(long, value_name = "NAME")]
    pub playlist: Option<String>,

    /// Title recorded in the playlist header
    #[arg(long)]
    pub title: Option<String>,

    /// Print the playlist to stdout even when attached to a terminal
    #[arg(long)]
    pub stdout: bool,

    /// Do not write the playlist file
    #[arg(long)]
    pub no_write: bool,

    /// When to highlight episode numbers
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
