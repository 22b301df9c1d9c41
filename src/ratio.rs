//! Aspect ratio parsing.
//!
//! Accepts either a single decimal (`"1.78"`, meaning 1.78:1) or a colon pair
//! (`"16:9"`). Both parts must be positive and finite. Unparseable input
//! yields `None`; callers treat that as "cannot derive the third field", not
//! as an error.

/// A width:height ratio with both parts positive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AspectRatio {
    pub w: f64,
    pub h: f64,
}

impl AspectRatio {
    /// Create a ratio. Returns `None` unless both parts are positive and finite.
    pub fn new(w: f64, h: f64) -> Option<Self> {
        (is_positive(w) && is_positive(h)).then_some(Self { w, h })
    }

    /// `w / h`.
    pub fn value(&self) -> f64 {
        self.w / self.h
    }

    /// Height that keeps this ratio for the given width.
    pub fn height_for_width(&self, width: f64) -> f64 {
        width * self.h / self.w
    }

    /// Width that keeps this ratio for the given height.
    pub fn width_for_height(&self, height: f64) -> f64 {
        height * self.w / self.h
    }
}

impl core::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.w, self.h)
    }
}

/// Parse `"1.78"` or `"16:9"` into an [`AspectRatio`].
pub fn parse_ratio(text: &str) -> Option<AspectRatio> {
    let text = text.trim();
    match text.split_once(':') {
        Some((w, h)) => AspectRatio::new(parse_positive(w)?, parse_positive(h)?),
        None => AspectRatio::new(parse_positive(text)?, 1.0),
    }
}

/// Parse a positive, finite decimal. Surrounding whitespace is ignored.
pub(crate) fn parse_positive(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|&v| is_positive(v))
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
