use std::collections::HashMap;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use crate::color::Pixel;
use crate::error::{PaletteError, Result};
use crate::pipeline::load::decode_bytes;

/// Edge length of the square grid every image is resampled to before counting.
pub const SAMPLE_SIZE: u32 = 100;
/// Pixels with all three channels strictly above this value count as background.
pub const WHITE_THRESHOLD: u8 = 220;
/// Palette length used when the caller has no preference.
pub const DEFAULT_TOP_N: i64 = 3;

/// Tunables for palette extraction. `Default` gives the canonical behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub sample_size: u32,
    pub white_threshold: u8,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            sample_size: SAMPLE_SIZE,
            white_threshold: WHITE_THRESHOLD,
        }
    }
}

/// A distinct color and the number of sampled pixels that had it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: Pixel,
    pub count: usize,
}

/// Extract the `top_n` most frequent non-near-white colors as `#rrggbb` strings,
/// most dominant first.
pub fn extract_palette(image: &DynamicImage, top_n: i64) -> Result<Vec<String>> {
    extract_palette_with(image, top_n, &ExtractOptions::default())
}

/// Like [`extract_palette`], with explicit sampling and filtering options.
pub fn extract_palette_with(
    image: &DynamicImage,
    top_n: i64,
    options: &ExtractOptions,
) -> Result<Vec<String>> {
    let top_n = validate_top_n(top_n)?;
    let ranked = rank_colors(image, options)?;

    Ok(ranked
        .into_iter()
        .take(top_n)
        .map(|entry| entry.color.to_hex())
        .collect())
}

/// Decode `bytes` and extract a palette with default options.
pub fn extract_palette_from_bytes(bytes: &[u8], top_n: i64) -> Result<Vec<String>> {
    validate_top_n(top_n)?;
    let image = decode_bytes(bytes)?;
    extract_palette(&image, top_n)
}

/// Every qualifying color in the image with its pixel count, sorted by count
/// descending. Equal counts keep first-occurrence order.
pub fn rank_colors(image: &DynamicImage, options: &ExtractOptions) -> Result<Vec<PaletteEntry>> {
    let sampled = downsample(image, options.sample_size)?;
    let mut entries = count_colors(
        sampled.pixels().map(|p| Pixel::from(*p)),
        options.white_threshold,
    );
    // stable: ties stay in first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(entries)
}

/// Resample to a `size`×`size` RGB grid with nearest-neighbour filtering, which
/// only ever copies source pixels and never blends new colors.
pub fn downsample(image: &DynamicImage, size: u32) -> Result<RgbImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PaletteError::invalid_image(format!(
            "image has no pixels ({}x{})",
            image.width(),
            image.height()
        )));
    }
    if size == 0 {
        return Err(PaletteError::invalid_image("sample size must be at least 1"));
    }

    let rgb = image.to_rgb8();
    if rgb.dimensions() == (size, size) {
        return Ok(rgb);
    }
    Ok(image::imageops::resize(&rgb, size, size, FilterType::Nearest))
}

/// Count exact colors, skipping near-white pixels. Entries come back in the
/// order each color was first seen.
pub fn count_colors<I>(pixels: I, white_threshold: u8) -> Vec<PaletteEntry>
where
    I: IntoIterator<Item = Pixel>,
{
    let mut index: HashMap<Pixel, usize> = HashMap::new();
    let mut entries: Vec<PaletteEntry> = Vec::new();

    for pixel in pixels {
        if pixel.is_near_white(white_threshold) {
            continue;
        }
        match index.get(&pixel) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(pixel, entries.len());
                entries.push(PaletteEntry {
                    color: pixel,
                    count: 1,
                });
            }
        }
    }

    entries
}

fn validate_top_n(top_n: i64) -> Result<usize> {
    if top_n < 0 {
        return Err(PaletteError::invalid_argument(format!(
            "top_n must not be negative, got {top_n}"
        )));
    }
    Ok(usize::try_from(top_n).unwrap_or(usize::MAX))
}
