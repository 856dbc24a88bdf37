use std::path::Path;

use image::DynamicImage;

use crate::error::{PaletteError, Result};

/// Decode an in-memory image, sniffing the format from its contents.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(PaletteError::invalid_image("no image data"));
    }
    let img = image::load_from_memory(bytes).map_err(|e| {
        PaletteError::invalid_image_with_source(
            "unsupported or corrupt image data. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
            e,
        )
    })?;
    tracing::debug!(
        width = img.width(),
        height = img.height(),
        "decoded {} bytes",
        bytes.len()
    );
    Ok(img)
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        let message = if e.kind() == std::io::ErrorKind::NotFound {
            format!("file not found: {}", path.display())
        } else {
            format!("failed to read {}", path.display())
        };
        PaletteError::invalid_image_with_source(message, e)
    })?;

    decode_bytes(&bytes).map_err(|e| match e {
        PaletteError::InvalidImage { source, .. } => PaletteError::InvalidImage {
            message: format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            ),
            source,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |_, _| image::Rgb(rgb));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decode_png_bytes() {
        let img = decode_bytes(&png_bytes(4, 3, [1, 2, 3])).unwrap();
        assert_eq!((img.width(), img.height()), (4, 3));
    }

    #[test]
    fn decode_empty_bytes_is_invalid_image() {
        let err = decode_bytes(&[]).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidImage { .. }), "got {err:?}");
    }

    #[test]
    fn decode_garbage_is_invalid_image() {
        let err = decode_bytes(b"this is not an image").unwrap_err();
        assert!(matches!(err, PaletteError::InvalidImage { .. }), "got {err:?}");
        assert!(err.to_string().contains("unsupported"), "got: {err}");
    }

    #[test]
    fn load_file_not_found() {
        let err = load_image(Path::new("/nonexistent/image.png")).unwrap_err();
        assert!(
            err.to_string().contains("file not found"),
            "expected file-not-found error, got: {err}"
        );
    }

    #[test]
    fn load_unsupported_format_names_path() {
        let path = fixture_path("load_not_an_image.txt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "this is not an image").unwrap();

        let err = load_image(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unsupported"), "got: {msg}");
        assert!(msg.contains("load_not_an_image.txt"), "got: {msg}");
    }

    #[test]
    fn load_png_file() {
        let path = fixture_path("load_4x4.png");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, png_bytes(4, 4, [128, 128, 128])).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (4, 4));
    }
}
