//! Display units and inch/centimetre conversion.

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Convert centimetres to inches.
#[inline]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Convert inches to centimetres.
#[inline]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Unit tag shown next to a size.
///
/// Sizes are always stored in inches; the unit only records how a size was
/// entered and how it should be labelled. Named paper sizes (A4, A3, ...)
/// carry no unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// `in`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    Inches,
    /// `cm`
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeters,
    /// No unit label.
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    Unitless,
}

impl Unit {
    /// Short tag: `"in"`, `"cm"` or `""`.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Centimeters => "cm",
            Self::Unitless => "",
        }
    }

    /// Parse a tag produced by [`tag`](Self::tag). Case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("in") {
            Some(Self::Inches)
        } else if tag.eq_ignore_ascii_case("cm") {
            Some(Self::Centimeters)
        } else if tag.is_empty() {
            Some(Self::Unitless)
        } else {
            None
        }
    }

    /// The unit the in/cm toggle switches to.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Inches => Self::Centimeters,
            Self::Centimeters | Self::Unitless => Self::Inches,
        }
    }

    /// Convert a value entered in this unit to inches.
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            Self::Centimeters => cm_to_inches(value),
            Self::Inches | Self::Unitless => value,
        }
    }

    /// Convert a value entered in this unit to whole inches.
    ///
    /// Centimetre entries are rounded to the nearest inch, which is how
    /// custom sizes are stored. Inch entries are kept as entered.
    pub fn to_stored_inches(self, value: f64) -> f64 {
        match self {
            Self::Centimeters => cm_to_inches(value).round(),
            Self::Inches | Self::Unitless => value,
        }
    }

    /// Express an inch value in this unit.
    pub fn from_inches(self, inches: f64) -> f64 {
        match self {
            Self::Centimeters => inches_to_cm(inches),
            Self::Inches | Self::Unitless => inches,
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}
