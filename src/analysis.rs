//! Baseline DPI and grade for every size in a catalog.
//!
//! The baseline is the image printed edge to edge at the size as listed,
//! without orientation matching or the user's fit/fill and scale choices:
//! `min(width_px / width_in, height_px / height_in)`.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::catalog::PhysicalSize;
use crate::geometry::{FrameSize, PixelImage};
use crate::grade::{Grade, Grading};

/// DPI and grade of one catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizeAnalysis<'a> {
    pub size: &'a PhysicalSize,
    pub dpi: f64,
    pub grade: Grade,
    pub color: &'static str,
    pub explanation: &'static str,
}

impl SizeAnalysis<'_> {
    /// DPI rounded for display.
    pub fn rounded_dpi(&self) -> u32 {
        self.dpi.round() as u32
    }

    /// Tier and presentation strings.
    pub fn grading(&self) -> Grading {
        self.grade.into()
    }
}

/// DPI of `image` printed at `frame` as listed.
pub fn baseline_dpi(image: PixelImage, frame: FrameSize) -> f64 {
    let w = image.width() as f64 / frame.width_in();
    let h = image.height() as f64 / frame.height_in();
    w.min(h)
}

/// Grade `image` against every size, preserving input order.
pub fn analyze_all<'a, I>(image: PixelImage, sizes: I) -> Vec<SizeAnalysis<'a>>
where
    I: IntoIterator<Item = &'a PhysicalSize>,
{
    sizes
        .into_iter()
        .map(|size| {
            let dpi = baseline_dpi(image, size.frame());
            let grade = Grade::from_dpi(dpi);
            SizeAnalysis {
                size,
                dpi,
                grade,
                color: grade.color(),
                explanation: grade.explanation(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BUILTIN_SIZES, SizeCatalog};
    use crate::units::Unit;

    fn img(w: u32, h: u32) -> PixelImage {
        PixelImage::new(w, h).unwrap()
    }

    #[test]
    fn baseline_ignores_orientation() {
        // 4500×3000 on 4×6 as listed: min(1125, 500).
        let f = FrameSize::new(4.0, 6.0).unwrap();
        assert_eq!(baseline_dpi(img(4500, 3000), f), 500.0);
        // 3000×2000 on 8×10: min(375, 200).
        let f = FrameSize::new(8.0, 10.0).unwrap();
        assert_eq!(baseline_dpi(img(3000, 2000), f), 200.0);
    }

    #[test]
    fn analyze_builtins_in_order() {
        let catalog = SizeCatalog::new();
        let results = analyze_all(img(4500, 3000), catalog.sizes());
        assert_eq!(results.len(), BUILTIN_SIZES.len());
        for (r, s) in results.iter().zip(BUILTIN_SIZES.iter()) {
            assert_eq!(r.size.name(), s.name());
        }

        let four_six = results.iter().find(|r| r.size.name() == "4x6").unwrap();
        assert_eq!(four_six.rounded_dpi(), 500);
        assert_eq!(four_six.grade, Grade::Excellent);
        assert_eq!(four_six.color, "#10B981");

        let big = results.iter().find(|r| r.size.name() == "48x72").unwrap();
        // min(4500/48, 3000/72) = 41.67
        assert_eq!(big.rounded_dpi(), 42);
        assert_eq!(big.grade, Grade::Poor);
    }

    #[test]
    fn customs_follow_builtins() {
        let mut catalog = SizeCatalog::new();
        catalog.add_custom(10.0, 15.0, "", Unit::Inches).unwrap();
        let results = analyze_all(img(3000, 4500), catalog.sizes());
        let last = results.last().unwrap();
        assert!(last.size.is_custom());
        assert_eq!(last.dpi, 300.0);
        assert_eq!(last.grade, Grade::Good);
        assert_eq!(
            last.grading().explanation,
            "The image should print well at this size."
        );
    }

    #[test]
    fn empty_input_empty_output() {
        let none: [PhysicalSize; 0] = [];
        assert!(analyze_all(img(10, 10), none.iter()).is_empty());
    }
}
