//! Error type for the fallible constructors and session operations.
//!
//! Only physical and pixel dimensions are validated. Display inputs such as
//! DPI values are never rejected, and an unparseable aspect ratio is reported
//! as `None` by [`parse_ratio`](crate::ratio::parse_ratio) rather than as an
//! error.

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Errors produced by `printfit`.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A physical dimension was zero, negative, NaN or infinite.
    #[error("invalid {what}: {value} (must be positive and finite)")]
    InvalidDimension {
        /// Which dimension was rejected.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An image reported a zero width or height.
    #[error("image has a zero pixel dimension ({width}x{height})")]
    ZeroPixelDimension { width: u32, height: u32 },

    /// No catalog entry carries the requested name.
    #[cfg(feature = "alloc")]
    #[error("no print size named {0:?}")]
    UnknownSize(String),

    /// The operation needs an image and none has been loaded.
    #[error("no image loaded")]
    NoImage,

    /// The custom-size form does not yet determine both width and height.
    #[error("custom size needs both a width and a height")]
    IncompleteForm,

    /// A settings value is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Accept a strictly positive, finite physical dimension.
pub(crate) fn check_dimension(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidDimension { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_dimension_passes_through() {
        assert_eq!(check_dimension("width", 8.5), Ok(8.5));
    }

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        for v in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    check_dimension("height", v),
                    Err(Error::InvalidDimension { what: "height", .. })
                ),
                "{v} should be rejected"
            );
        }
    }

    #[test]
    fn messages_name_the_dimension() {
        let e = Error::InvalidDimension {
            what: "frame width",
            value: -2.0,
        };
        assert_eq!(
            e.to_string(),
            "invalid frame width: -2 (must be positive and finite)"
        );
        assert_eq!(
            Error::ZeroPixelDimension {
                width: 0,
                height: 10
            }
            .to_string(),
            "image has a zero pixel dimension (0x10)"
        );
    }
}
