use std::path::PathBuf;

use clap::Parser;

/// Render saved array clips as colorized MP4s for quick dataset inspection
/// (requires `ffmpeg` on PATH).
#[derive(Parser, Debug)]
#[command(name = "clipvis", version)]
struct Cli {
    /// Path to the saved base clip.
    #[arg(short, long, default_value = ".")]
    base: PathBuf,

    /// Path to the saved mask clip, rendered as a red overlay.
    #[arg(short, long)]
    mask: Option<PathBuf>,

    /// Directory for the output video.
    #[arg(short, long, default_value = ".")]
    outpath: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let out = clipvis::visualize(&cli.base, cli.mask.as_deref(), &cli.outpath)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
