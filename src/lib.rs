//! Dominant brand-color extraction.
//!
//! An image is resampled to a fixed grid, near-white background pixels are
//! dropped, and the most frequent exact colors are returned as `#rrggbb`
//! strings, most dominant first.

pub mod cli;
pub mod color;
pub mod error;
pub mod output;
pub mod pipeline;

pub use color::Pixel;
pub use error::{PaletteError, Result};
pub use pipeline::extract::{
    extract_palette, extract_palette_from_bytes, extract_palette_with, rank_colors,
    ExtractOptions, PaletteEntry, DEFAULT_TOP_N, SAMPLE_SIZE, WHITE_THRESHOLD,
};
pub use pipeline::load::{decode_bytes, load_image};
