//! Conversion API Module
//!
//! Per-file work: decide whether a source still needs converting, sample its
//! dominant color and write the lossy WebP sibling. Every failure comes back
//! as an [`ImgConvertError`] so a batch can record it and move on.

use crate::config::{ConvertConfig, OUTPUT_EXTENSION};
use crate::dominant_color::{dominant_color, HexColor};
use crate::{ImgConvertError, Result};
use image::{DynamicImage, ImageReader, RgbImage};
use shared_utils::common_utils::{file_stem_lossy, sibling_with_extension};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One discovered source file and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Source basename without extension, as written to the report.
    pub name: String,
}

impl ImageJob {
    pub fn new(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            output: derive_output_path(source),
            name: file_stem_lossy(source),
        }
    }

    pub fn is_already_converted(&self) -> bool {
        self.output.exists()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The output existed before this run; nothing was read or written.
    Skipped { job: ImageJob },
    Converted {
        job: ImageJob,
        color: HexColor,
        output_size: u64,
    },
}

impl ConversionOutcome {
    pub fn job(&self) -> &ImageJob {
        match self {
            ConversionOutcome::Skipped { job } | ConversionOutcome::Converted { job, .. } => job,
        }
    }
}

/// `photo.JPG` → `photo.webp` in the same directory.
pub fn derive_output_path(source: &Path) -> PathBuf {
    sibling_with_extension(source, OUTPUT_EXTENSION)
}

/// Converts one source file according to `config`.
///
/// The source is opened, decoded and closed inside this call and is never
/// modified. An output that appears between the existence check and the write
/// is reported as [`ImgConvertError::OutputExists`] rather than overwritten.
pub fn convert_file(source: &Path, config: &ConvertConfig) -> Result<ConversionOutcome> {
    let job = ImageJob::new(source);

    if job.is_already_converted() {
        debug!(path = %source.display(), output = %job.output.display(), "Output exists, skipping");
        return Ok(ConversionOutcome::Skipped { job });
    }

    let img = load_image(source)?;
    let color = dominant_color(&img).ok_or(ImgConvertError::EmptyImage)?;
    let rgb = img.into_rgb8();
    let encoded = encode_webp(&rgb, config.quality)?;
    write_new_file(&job.output, &encoded)?;

    debug!(
        path = %source.display(),
        output = %job.output.display(),
        width = rgb.width(),
        height = rgb.height(),
        bytes = encoded.len(),
        "WebP written"
    );

    Ok(ConversionOutcome::Converted {
        job,
        color,
        output_size: encoded.len() as u64,
    })
}

/// Decodes `path`, trusting the content signature over the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.decode()?)
}

/// Lossy WebP encoding of an RGB buffer at `quality` (0-100).
pub fn encode_webp(rgb: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    if quality > 100 {
        return Err(ImgConvertError::InvalidQuality(quality));
    }
    let encoder = webp::Encoder::from_rgb(rgb.as_raw(), rgb.width(), rgb.height());
    let memory = encoder
        .encode_simple(false, f32::from(quality))
        .map_err(|e| ImgConvertError::Encode(format!("{:?}", e)))?;
    Ok(memory.to_vec())
}

/// Writes `bytes` to a file that must not exist yet. A failed write removes
/// the partial file so it is not mistaken for a finished conversion later.
fn write_new_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ImgConvertError::OutputExists(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb};
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
        RgbImage::from_pixel(width, height, Rgb(color))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("/pics/Photo.JPEG")),
            PathBuf::from("/pics/Photo.webp")
        );
        assert_eq!(
            derive_output_path(Path::new("pain.sucre.png")),
            PathBuf::from("pain.sucre.webp")
        );
    }

    #[test]
    fn test_image_job_fields() {
        let job = ImageJob::new(Path::new("/pics/tsoureki.BMP"));
        assert_eq!(job.name, "tsoureki");
        assert_eq!(job.output, PathBuf::from("/pics/tsoureki.webp"));
    }

    #[test]
    fn test_convert_file_writes_webp() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("blue.png");
        write_png(&source, 64, 48, [0x33, 0x66, 0x99]);
        let before = fs::read(&source).unwrap();

        let outcome = convert_file(&source, &ConvertConfig::default()).unwrap();
        let ConversionOutcome::Converted { job, color, output_size } = outcome else {
            panic!("expected a conversion");
        };

        assert_eq!(color.to_string(), "#336699");
        assert_eq!(job.output, temp.path().join("blue.webp"));
        let bytes = fs::read(&job.output).unwrap();
        assert_eq!(bytes.len() as u64, output_size);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");

        let decoded = image::open(&job.output).unwrap();
        assert_eq!(decoded.dimensions(), (64, 48));
        assert_eq!(fs::read(&source).unwrap(), before, "source must be untouched");
    }

    #[test]
    fn test_convert_file_skips_existing_output() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("done.jpg");
        write_png(&source, 8, 8, [1, 2, 3]);
        let output = temp.path().join("done.webp");
        fs::write(&output, b"previous").unwrap();

        let outcome = convert_file(&source, &ConvertConfig::default()).unwrap();
        assert!(matches!(outcome, ConversionOutcome::Skipped { .. }));
        assert_eq!(outcome.job().output, output);
        assert_eq!(fs::read(&output).unwrap(), b"previous");
    }

    #[test]
    fn test_convert_file_corrupt_source() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("broken.jpg");
        fs::write(&source, b"definitely not a jpeg").unwrap();

        let err = convert_file(&source, &ConvertConfig::default()).unwrap_err();
        assert!(matches!(err, ImgConvertError::Decode(_)), "got {:?}", err);
        assert!(!temp.path().join("broken.webp").exists());
    }

    #[test]
    fn test_convert_file_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = convert_file(&temp.path().join("ghost.png"), &ConvertConfig::default())
            .unwrap_err();
        assert!(matches!(err, ImgConvertError::Io(_)), "got {:?}", err);
    }

    #[test]
    fn test_load_image_trusts_content_over_extension() {
        let temp = TempDir::new().unwrap();
        let png = temp.path().join("real.png");
        write_png(&png, 4, 4, [9, 9, 9]);
        let disguised = temp.path().join("real.jpg");
        fs::copy(&png, &disguised).unwrap();

        assert_eq!(load_image(&disguised).unwrap().dimensions(), (4, 4));
    }

    #[test]
    fn test_encode_webp_rejects_bad_quality() {
        let rgb = RgbImage::new(2, 2);
        assert!(matches!(
            encode_webp(&rgb, 101),
            Err(ImgConvertError::InvalidQuality(101))
        ));
    }

    #[test]
    fn test_lower_quality_is_not_larger() {
        let rgb = RgbImage::from_fn(128, 128, |x, y| {
            Rgb([(x * 2) as u8, (y * 2) as u8, ((x ^ y) & 0xff) as u8])
        });
        let high = encode_webp(&rgb, 95).unwrap();
        let low = encode_webp(&rgb, 10).unwrap();
        assert!(low.len() <= high.len());
    }

    #[test]
    fn test_write_new_file_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x.webp");
        fs::write(&path, b"keep").unwrap();

        let err = write_new_file(&path, b"new").unwrap_err();
        assert!(matches!(err, ImgConvertError::OutputExists(_)));
        assert_eq!(fs::read(&path).unwrap(), b"keep");
    }
}
