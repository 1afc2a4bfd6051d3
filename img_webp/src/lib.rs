//! Batch image converter: turns the JPEG/PNG/BMP/TIFF files of a directory
//! into lossy WebP siblings and records each image's dominant color in a
//! plain-text report.

pub mod batch_runner;
pub mod color_report;
pub mod config;
pub mod conversion_api;
pub mod dominant_color;

pub use batch_runner::{run_batch, RunSummary};
pub use color_report::ColorReport;
pub use config::{ConvertConfig, DEFAULT_QUALITY, DEFAULT_REPORT_NAME, OUTPUT_EXTENSION};
pub use conversion_api::{convert_file, derive_output_path, ConversionOutcome, ImageJob};
pub use dominant_color::{dominant_color, HexColor, SAMPLE_GRID};

pub use shared_utils::img_errors::{ImgConvertError, Result};
