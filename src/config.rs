// Command-line configuration.

use clap::Parser;
use std::path::PathBuf;

/// A finger-painting canvas: drag to draw, keys switch brushes
/// (C color, E emboss, B blur, X erase, A src-atop, S snapshot, N new canvas, H HUD).
#[derive(Parser, Debug, Clone)]
#[command(name = "finger-paint")]
#[command(version)]
pub struct Args {
    /// Initial window width
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = "Finger Paint")]
    pub title: String,

    /// Where snapshots are written
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Start with the status line hidden
    #[arg(long)]
    pub no_hud: bool,

    /// Frame rate cap
    #[arg(long, default_value_t = 60)]
    pub fps: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["finger-paint"]).unwrap();
        assert_eq!((args.width, args.height, args.fps), (800, 600, 60));
        assert_eq!(args.title, "Finger Paint");
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.no_hud);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Args::try_parse_from(["finger-paint", "--width", "0"]).is_err());
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from(["finger-paint", "--width", "320", "-o", "/tmp/out", "--no-hud"]).unwrap();
        assert_eq!(args.width, 320);
        assert_eq!(args.output_dir, PathBuf::from("/tmp/out"));
        assert!(args.no_hud);
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
