//! Print-quality estimation for digital images.
//!
//! Given an image's pixel dimensions and a physical print size, computes the
//! effective DPI, grades it, and describes how the image sits in the frame:
//! printed size, coverage, margins and crop.
//!
//! The geometry core is pure arithmetic, `no_std` compatible and
//! allocation-free. The catalog, batch analysis, custom-size form and
//! session need the `alloc` feature.
//!
//! # Modules
//!
//! - [`geometry`]: fit/fill layout, DPI, coverage, margins and crop
//! - [`grade`]: DPI tiers and their presentation strings
//! - [`ratio`]: aspect-ratio parsing
//! - [`orientation`]: landscape/portrait matching
//! - [`catalog`]: built-in and custom print sizes
//! - [`analysis`]: baseline DPI and grade for a whole catalog
//! - [`form`]: width/height/ratio entry where two fields derive the third
//! - [`debounce`]: trailing-edge debounce for form input
//! - [`session`]: interactive state tying the above together
//!
//! # Example
//!
//! ```
//! use printfit::{FittingMode, FrameSize, PixelImage, ScalePercent, compute_geometry, grade};
//!
//! let image = PixelImage::new(4500, 3000).unwrap();
//! let frame = FrameSize::new(8.0, 10.0).unwrap();
//! let g = compute_geometry(image, frame, FittingMode::Fill, ScalePercent::default());
//!
//! assert!(g.cropped_area_percent.is_some());
//! assert_eq!(g.frame_coverage_percent, 100.0);
//! println!("{} at {:.0} DPI", grade(g.dpi).tier, g.dpi);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod debounce;
pub mod error;
pub mod geometry;
pub mod grade;
pub mod orientation;
pub mod ratio;
pub mod settings;
pub mod units;

#[cfg(feature = "alloc")]
pub mod analysis;
#[cfg(feature = "alloc")]
pub mod catalog;
#[cfg(feature = "alloc")]
pub mod form;
#[cfg(feature = "alloc")]
pub mod session;

pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use geometry::{
    DisplayGeometry, FittingMode, FrameSize, GeometryResult, PixelImage, PrintSize, ScalePercent,
    compute_geometry, max_print_size,
};
pub use grade::{Grade, Grading, grade, pixelation_factor};
pub use orientation::Orientation;
pub use ratio::{AspectRatio, parse_ratio};
pub use settings::Settings;
pub use units::Unit;

#[cfg(feature = "alloc")]
pub use analysis::{SizeAnalysis, analyze_all};
#[cfg(feature = "alloc")]
pub use catalog::{BUILTIN_SIZES, PhysicalSize, SizeCatalog, SizeId};
#[cfg(feature = "alloc")]
pub use form::{CustomSizeForm, Field};
#[cfg(feature = "alloc")]
pub use session::{Preview, Session};
