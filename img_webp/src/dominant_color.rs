//! Dominant color sampling.
//!
//! The image is reduced to a fixed 50×50 grid, flattened to 8-bit RGB and the
//! most frequent color wins. Among colors sharing the highest count, the
//! smallest `(r, g, b)` tuple is chosen so results never depend on hash order.

use image::imageops::{self, FilterType};
use image::DynamicImage;
use std::collections::HashMap;
use std::fmt;

/// Side of the square sampling grid.
pub const SAMPLE_GRID: u32 = 50;

/// 24-bit RGB color, displayed as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Most frequent color of `img` on the sampling grid, `None` for an image
/// without pixels.
pub fn dominant_color(img: &DynamicImage) -> Option<HexColor> {
    if img.width() == 0 || img.height() == 0 {
        return None;
    }
    // flatten first so transparent pixels keep their color channels
    let sample = imageops::resize(&img.to_rgb8(), SAMPLE_GRID, SAMPLE_GRID, FilterType::Nearest);
    most_frequent(sample.pixels().map(|p| p.0))
}

/// Mode of a pixel stream with the smallest-tuple tie-break.
pub fn most_frequent<I>(pixels: I) -> Option<HexColor>
where
    I: IntoIterator<Item = [u8; 3]>,
{
    let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
    for px in pixels {
        *counts.entry(px).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|(rgb_a, n_a), (rgb_b, n_b)| n_a.cmp(n_b).then_with(|| rgb_b.cmp(rgb_a)))
        .map(|(rgb, _)| HexColor(rgb))
}
