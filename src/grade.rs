//! Print quality grading from DPI.
//!
//! Thresholds are evaluated top-down and the first match wins:
//!
//! | DPI            | Grade     |
//! |----------------|-----------|
//! | `> 300`        | Excellent |
//! | `200 ..= 300`  | Good      |
//! | `150 .. 200`   | Fair      |
//! | `< 150`        | Poor      |
//!
//! Excellent is strictly above 300, so an image printing at exactly 300 DPI
//! grades Good.

/// DPI a grade must strictly exceed to be [`Grade::Excellent`].
pub const EXCELLENT_ABOVE_DPI: f64 = 300.0;
/// Lowest DPI graded [`Grade::Good`].
pub const GOOD_MIN_DPI: f64 = 200.0;
/// Lowest DPI graded [`Grade::Fair`].
pub const FAIR_MIN_DPI: f64 = 150.0;

/// DPI at which a print shows no visible pixelation.
pub const REFERENCE_DPI: f64 = 300.0;

/// Print quality tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Grade {
    /// Tier for a DPI value.
    ///
    /// `dpi` must be finite and non-negative; anything else is a caller bug
    /// (checked in debug builds only).
    pub fn from_dpi(dpi: f64) -> Self {
        debug_assert!(
            dpi.is_finite() && dpi >= 0.0,
            "dpi must be finite and non-negative, got {dpi}"
        );
        if dpi > EXCELLENT_ABOVE_DPI {
            Self::Excellent
        } else if dpi >= GOOD_MIN_DPI {
            Self::Good
        } else if dpi >= FAIR_MIN_DPI {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Human-readable tier name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Presentation colour as a CSS hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#10B981",
            Self::Good => "#F59E0B",
            Self::Fair => "#F97316",
            Self::Poor => "#EF4444",
        }
    }

    /// One-sentence explanation shown next to the grade.
    pub const fn explanation(self) -> &'static str {
        match self {
            Self::Excellent => "The image resolution is perfect for this size.",
            Self::Good => "The image should print well at this size.",
            Self::Fair => "The image may appear slightly pixelated at this size.",
            Self::Poor => {
                "The image resolution is too low for this size. It will appear pixelated."
            }
        }
    }

    /// Whether prints at this tier are expected to show pixelation.
    pub const fn shows_pixelation(self) -> bool {
        matches!(self, Self::Fair | Self::Poor)
    }
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A graded DPI value: tier plus its presentation strings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grading {
    pub tier: Grade,
    pub color: &'static str,
    pub explanation: &'static str,
}

impl From<Grade> for Grading {
    fn from(tier: Grade) -> Self {
        Self {
            tier,
            color: tier.color(),
            explanation: tier.explanation(),
        }
    }
}

/// Grade a DPI value.
pub fn grade(dpi: f64) -> Grading {
    Grade::from_dpi(dpi).into()
}

/// Block size, in preview pixels, for simulating print pixelation.
///
/// At or above [`REFERENCE_DPI`] this is `1.0` (no effect). Below it, each
/// image pixel covers `REFERENCE_DPI / dpi` reference dots, so a preview drawn
/// at reference density should be pixelated by that factor.
pub fn pixelation_factor(dpi: f64) -> f64 {
    debug_assert!(dpi.is_finite() && dpi > 0.0, "dpi must be positive, got {dpi}");
    (REFERENCE_DPI / dpi).max(1.0)
}
