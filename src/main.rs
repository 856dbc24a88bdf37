use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brand_palette::cli::{Args, OutputFormat};
use brand_palette::output::{self, PaletteReport};
use brand_palette::pipeline::extract::{extract_palette_with, rank_colors, ExtractOptions};
use brand_palette::pipeline::load::{decode_bytes, load_image};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "brand_palette=debug"
    } else {
        "brand_palette=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let image = if args.reads_stdin() {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read image from stdin")?;
        decode_bytes(&bytes)?
    } else {
        load_image(&args.image)?
    };

    let options = ExtractOptions {
        sample_size: args.sample_size,
        white_threshold: args.threshold,
    };

    let colors = extract_palette_with(&image, args.top_n, &options)?;
    tracing::info!(count = colors.len(), "extracted palette");

    let rendered = if args.counts {
        let ranked = rank_colors(&image, &options)?;
        let shown = usize::try_from(args.top_n).unwrap_or(usize::MAX);
        let total = (options.sample_size as usize).pow(2);
        output::render_counts(&ranked[..shown.min(ranked.len())], total)
    } else {
        match args.format {
            OutputFormat::Text => output::render_text(&colors),
            OutputFormat::Json => output::render_json(&PaletteReport::new(colors.clone()), args.pretty)?,
        }
    };

    if args.preview {
        output::write_preview(&mut std::io::stderr(), &colors)?;
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write palette to {}", path.display()))?;
            eprintln!("Wrote palette to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
