//! Landscape/portrait classification and axis swapping.
//!
//! A print is matched to the image's orientation before fitting: a landscape
//! photo placed on a portrait 8x10 is laid out on the 10x8 side. Squares
//! count as portrait, so a square never forces a swap against a portrait
//! frame.

/// Orientation of a rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Height ≥ width.
    #[default]
    Portrait,
    /// Width > height.
    Landscape,
}

impl Orientation {
    /// Classify a physical rectangle.
    pub fn of(width: f64, height: f64) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Classify a pixel rectangle.
    pub fn of_pixels(width: u32, height: u32) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Whether laying `self` onto a rectangle of orientation `other` needs
    /// the other rectangle's axes swapped.
    pub fn swaps_against(self, other: Self) -> bool {
        self != other
    }
}

/// Return `(a, b)` or `(b, a)`.
#[inline]
pub(crate) fn swap_if<T>(swap: bool, a: T, b: T) -> (T, T) {
    if swap { (b, a) } else { (a, b) }
}
