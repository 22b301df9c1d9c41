//! Print geometry: how an image sits inside a physical frame.
//!
//! Computes printed size, DPI, coverage, margins and crop from an image's
//! pixel dimensions, a frame size in inches, a [`FittingMode`] and a
//! [`ScalePercent`]. Pure arithmetic: no allocation, no hidden state, and
//! identical inputs always produce bit-identical results.
//!
//! Values keep full precision. Rounding for display happens once, through
//! [`GeometryResult::rounded`].
//!
//! # Example
//!
//! ```
//! use printfit::{FittingMode, FrameSize, Grade, PixelImage, ScalePercent, compute_geometry};
//!
//! let image = PixelImage::new(3000, 2000).unwrap();
//! let frame = FrameSize::new(8.0, 10.0).unwrap();
//! let g = compute_geometry(image, frame, FittingMode::Fit, ScalePercent::default());
//!
//! // Landscape image on a portrait frame: laid out along the 10in side.
//! assert!(g.rotated);
//! assert_eq!(g.dpi, 300.0);
//! assert_eq!(g.grade(), Grade::Good);
//! assert_eq!(g.printed_height_in, 10.0);
//! ```

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::{Error, Result, check_dimension};
use crate::grade::Grade;
use crate::orientation::{Orientation, swap_if};

/// Margins narrower than this (inches) are reported as zero.
pub const MARGIN_EPSILON_IN: f64 = 0.01;

/// Crop percentages at or below this are float noise, not a crop.
const CROP_EPSILON_PERCENT: f64 = 1e-9;

/// Pixel dimensions of a decoded image. Both sides are non-zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PixelImage {
    width: u32,
    height: u32,
}

impl PixelImage {
    /// Create from decoded pixel dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroPixelDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Landscape when wider than tall.
    pub fn orientation(&self) -> Orientation {
        Orientation::of_pixels(self.width, self.height)
    }

    /// `width / height`.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Physical frame size in inches. Both sides are positive and finite.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrameSize {
    width_in: f64,
    height_in: f64,
}

impl FrameSize {
    /// Create a frame, rejecting non-positive or non-finite sides.
    pub fn new(width_in: f64, height_in: f64) -> Result<Self> {
        Ok(Self {
            width_in: check_dimension("frame width", width_in)?,
            height_in: check_dimension("frame height", height_in)?,
        })
    }

    /// Construct from values already known to be valid.
    pub(crate) const fn from_validated(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    pub const fn width_in(&self) -> f64 {
        self.width_in
    }

    pub const fn height_in(&self) -> f64 {
        self.height_in
    }

    /// Area in square inches.
    pub fn area(&self) -> f64 {
        self.width_in * self.height_in
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width_in, self.height_in)
    }
}

/// How the image is scaled into the frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FittingMode {
    /// Largest size that stays inside the frame. The whole image is
    /// visible; the frame may have margins.
    #[default]
    Fit,
    /// Smallest size that covers the frame. The frame is fully covered;
    /// the image may be cropped.
    Fill,
}

impl FittingMode {
    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Fit => Self::Fill,
            Self::Fill => Self::Fit,
        }
    }
}

/// Image scale within the frame, in percent.
///
/// Always a multiple of [`STEP`](Self::STEP) in
/// [`MIN`](Self::MIN)`..=`[`MAX`](Self::MAX). Scaling multiplies the frame
/// dimensions before fitting, so 50% fits the image into a frame half as
/// large on each side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u16", into = "u16")
)]
pub struct ScalePercent(u16);

impl ScalePercent {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 200;
    pub const STEP: u16 = 5;
    pub const DEFAULT: Self = Self(100);

    /// Clamp to range and snap to the nearest step.
    pub fn new(percent: u16) -> Self {
        let clamped = percent.clamp(Self::MIN, Self::MAX);
        Self((clamped + Self::STEP / 2) / Self::STEP * Self::STEP)
    }

    /// Percentage value.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Multiplier applied to frame dimensions (`1.0` at 100%).
    pub fn factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// One step larger, saturating at [`MAX`](Self::MAX).
    pub fn step_up(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    /// One step smaller, saturating at [`MIN`](Self::MIN).
    pub fn step_down(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for ScalePercent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u16> for ScalePercent {
    fn from(percent: u16) -> Self {
        Self::new(percent)
    }
}

impl From<ScalePercent> for u16 {
    fn from(scale: ScalePercent) -> Self {
        scale.0
    }
}

/// A physical print size in inches.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrintSize {
    pub width_in: f64,
    pub height_in: f64,
}

/// Geometry of an image placed in a frame.
///
/// Lengths are inches, percentages are `0.0..=100.0`. Printed dimensions and
/// offsets are in the frame's own orientation: when [`rotated`](Self::rotated)
/// is set, `printed_width_in` runs along the image's height.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeometryResult {
    /// Printed image width, along the frame's width.
    pub printed_width_in: f64,
    /// Printed image height, along the frame's height.
    pub printed_height_in: f64,
    /// The image was turned to match the frame's orientation.
    pub rotated: bool,
    /// Dots per inch along the binding axis.
    pub dpi: f64,
    /// Printed area over frame area, as a percentage capped at 100.
    pub frame_coverage_percent: f64,
    /// Share of the image visible inside the frame.
    pub image_coverage_percent: f64,
    /// Uncovered space on each side of the image, horizontally.
    pub margin_width_in: f64,
    /// Uncovered space above and below the image.
    pub margin_height_in: f64,
    /// Share of the image cut off by the frame. Fill mode only; `None`
    /// when nothing is cropped.
    pub cropped_area_percent: Option<f64>,
    /// Left edge of the centred image relative to the frame's left edge.
    /// Negative when the image overflows.
    pub offset_x_in: f64,
    /// Top edge of the centred image relative to the frame's top edge.
    pub offset_y_in: f64,
}

impl GeometryResult {
    /// Quality tier for [`dpi`](Self::dpi).
    pub fn grade(&self) -> Grade {
        Grade::from_dpi(self.dpi)
    }

    /// Printed size along the image's own width and height.
    ///
    /// `width_px / w` and `height_px / h` of this pair are both the
    /// computed DPI (up to float rounding).
    pub fn printed_along_image(&self) -> PrintSize {
        let (w, h) = swap_if(self.rotated, self.printed_width_in, self.printed_height_in);
        PrintSize {
            width_in: w,
            height_in: h,
        }
    }

    /// Whether any margin is left around the image.
    pub fn has_margins(&self) -> bool {
        self.margin_width_in > 0.0 || self.margin_height_in > 0.0
    }

    /// Round for display: DPI and percentages to integers, lengths to
    /// hundredths of an inch.
    pub fn rounded(&self) -> DisplayGeometry {
        DisplayGeometry {
            printed_width_in: round_hundredths(self.printed_width_in),
            printed_height_in: round_hundredths(self.printed_height_in),
            rotated: self.rotated,
            dpi: round_u32(self.dpi),
            frame_coverage_percent: round_u32(self.frame_coverage_percent),
            image_coverage_percent: round_u32(self.image_coverage_percent),
            margin_width_in: round_hundredths(self.margin_width_in),
            margin_height_in: round_hundredths(self.margin_height_in),
            cropped_area_percent: self.cropped_area_percent.map(round_u32),
            offset_x_in: round_hundredths(self.offset_x_in),
            offset_y_in: round_hundredths(self.offset_y_in),
        }
    }
}

/// [`GeometryResult`] rounded for presentation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DisplayGeometry {
    pub printed_width_in: f64,
    pub printed_height_in: f64,
    pub rotated: bool,
    pub dpi: u32,
    pub frame_coverage_percent: u32,
    pub image_coverage_percent: u32,
    pub margin_width_in: f64,
    pub margin_height_in: f64,
    pub cropped_area_percent: Option<u32>,
    pub offset_x_in: f64,
    pub offset_y_in: f64,
}

/// Compute how `image` prints inside `frame`.
///
/// 1. If image and frame orientations differ, the frame's axes are swapped
///    so the image's long side meets the frame's long side.
/// 2. The (oriented) frame is multiplied by `scale`.
/// 3. Fit takes the larger pixels-per-inch ratio of the two axes, so the
///    image stays inside; Fill takes the smaller, so the image covers.
///    That ratio is the DPI, and the printed size is pixels ÷ DPI.
/// 4. Coverage, margins and crop are measured against the original,
///    unscaled frame, with the image centred. Frame coverage is printed
///    area over frame area, capped at 100, even when the print overflows
///    one axis and falls short on the other.
pub fn compute_geometry(
    image: PixelImage,
    frame: FrameSize,
    mode: FittingMode,
    scale: ScalePercent,
) -> GeometryResult {
    // A square frame has no long side to match.
    let rotated = frame.width_in != frame.height_in
        && image.orientation().swaps_against(frame.orientation());

    // Frame axes matched to the image's width and height.
    let (fw, fh) = swap_if(rotated, frame.width_in, frame.height_in);
    let factor = scale.factor();
    let (eff_w, eff_h) = (fw * factor, fh * factor);

    let iw = image.width as f64;
    let ih = image.height as f64;
    let ppi_w = iw / eff_w;
    let ppi_h = ih / eff_h;
    let dpi = match mode {
        FittingMode::Fit => ppi_w.max(ppi_h),
        FittingMode::Fill => ppi_w.min(ppi_h),
    };

    // Back into the frame's orientation.
    let (pw, ph) = swap_if(rotated, iw / dpi, ih / dpi);

    let printed_area = pw * ph;
    let visible_area = pw.min(frame.width_in) * ph.min(frame.height_in);

    let frame_coverage_percent = (printed_area / frame.area() * 100.0).min(100.0);

    let (image_coverage_percent, cropped_area_percent) = match mode {
        FittingMode::Fit => (100.0, None),
        FittingMode::Fill => {
            let cropped = ((1.0 - visible_area / printed_area) * 100.0).clamp(0.0, 100.0);
            if cropped > CROP_EPSILON_PERCENT {
                (100.0 - cropped, Some(cropped))
            } else {
                (100.0, None)
            }
        }
    };

    GeometryResult {
        printed_width_in: pw,
        printed_height_in: ph,
        rotated,
        dpi,
        frame_coverage_percent,
        image_coverage_percent,
        margin_width_in: margin((frame.width_in - pw) / 2.0),
        margin_height_in: margin((frame.height_in - ph) / 2.0),
        cropped_area_percent,
        offset_x_in: (frame.width_in - pw) / 2.0,
        offset_y_in: (frame.height_in - ph) / 2.0,
    }
}

/// Largest print at `dpi`, shown when no frame is selected.
pub fn max_print_size(image: PixelImage, dpi: f64) -> PrintSize {
    debug_assert!(dpi.is_finite() && dpi > 0.0, "dpi must be positive, got {dpi}");
    PrintSize {
        width_in: image.width as f64 / dpi,
        height_in: image.height as f64 / dpi,
    }
}

fn margin(half_gap: f64) -> f64 {
    if half_gap < MARGIN_EPSILON_IN {
        0.0
    } else {
        half_gap
    }
}

fn round_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round_u32(v: f64) -> u32 {
    v.round() as u32
}
