use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::extract::{DEFAULT_TOP_N, SAMPLE_SIZE, WHITE_THRESHOLD};

/// Extract the dominant brand colors from an image.
#[derive(Parser, Debug)]
#[command(name = "brand-palette", version, about)]
pub struct Args {
    /// Path to the input image, or `-` to read it from stdin
    pub image: PathBuf,

    /// Number of colors to report
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N, allow_negative_numbers = true)]
    pub top_n: i64,

    /// Pixels with every channel above this value are treated as background
    #[arg(long, default_value_t = WHITE_THRESHOLD)]
    pub threshold: u8,

    /// Edge length of the square grid the image is resampled to
    #[arg(long, default_value_t = SAMPLE_SIZE)]
    pub sample_size: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Show pixel counts for every ranked color
    #[arg(long, conflicts_with = "format")]
    pub counts: bool,

    /// Print colored swatches of the palette to stderr
    #[arg(long)]
    pub preview: bool,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// True when the image should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.image.as_os_str() == "-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["brand-palette", "logo.png"]);
        assert_eq!(args.top_n, 3);
        assert_eq!(args.threshold, 220);
        assert_eq!(args.sample_size, 100);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.reads_stdin());
    }

    #[test]
    fn negative_top_n_reaches_the_library() {
        let args = Args::parse_from(["brand-palette", "logo.png", "-n", "-1"]);
        assert_eq!(args.top_n, -1);
    }

    #[test]
    fn dash_means_stdin() {
        let args = Args::parse_from(["brand-palette", "-", "--format", "json"]);
        assert!(args.reads_stdin());
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn counts_conflicts_with_format() {
        let result = Args::try_parse_from(["brand-palette", "a.png", "--counts", "--format", "json"]);
        assert!(result.is_err());
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let result = Args::try_parse_from(["brand-palette", "a.png", "--threshold", "300"]);
        assert!(result.is_err());
    }
}
