//! Named print sizes: a fixed built-in table plus user-defined custom sizes.
//!
//! Built-ins are ordered by ascending print area and never change. Custom
//! sizes are appended in insertion order. Names are not deduplicated: a
//! custom `8x10` sits next to the built-in one, and each entry stays
//! addressable through its [`SizeId`]. Lookups by name return the first
//! match in catalog order, so built-ins win.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::{Result, check_dimension};
use crate::geometry::FrameSize;
use crate::units::Unit;

/// Description given to custom sizes entered without a label.
pub const DEFAULT_CUSTOM_DESCRIPTION: &str = "Custom size";

/// Stable identity of a catalog entry.
///
/// Built-ins are keyed by table index. Custom sizes get a serial number
/// that is never reused within a catalog, so a removed entry's id can't
/// resolve to a later one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizeId {
    Builtin(usize),
    Custom(u64),
}

impl SizeId {
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl core::fmt::Display for SizeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Builtin(i) => write!(f, "builtin#{i}"),
            Self::Custom(n) => write!(f, "custom#{n}"),
        }
    }
}

/// A named physical print size, stored in inches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhysicalSize {
    id: SizeId,
    name: Cow<'static, str>,
    width_in: f64,
    height_in: f64,
    unit: Unit,
    description: Cow<'static, str>,
}

impl PhysicalSize {
    const fn builtin(
        index: usize,
        name: &'static str,
        width_in: f64,
        height_in: f64,
        unit: Unit,
        description: &'static str,
    ) -> Self {
        Self {
            id: SizeId::Builtin(index),
            name: Cow::Borrowed(name),
            width_in,
            height_in,
            unit,
            description: Cow::Borrowed(description),
        }
    }

    pub fn id(&self) -> SizeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width_in(&self) -> f64 {
        self.width_in
    }

    pub fn height_in(&self) -> f64 {
        self.height_in
    }

    /// Unit the size is labelled in.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_custom(&self) -> bool {
        self.id.is_custom()
    }

    /// Frame dimensions for the geometry engine.
    pub fn frame(&self) -> FrameSize {
        FrameSize::from_validated(self.width_in, self.height_in)
    }

    /// Area in square inches.
    pub fn area(&self) -> f64 {
        self.width_in * self.height_in
    }

    /// Name with its unit tag, e.g. `"8x10 in"`, `"30x40 cm"` or `"A4"`.
    pub fn label(&self) -> String {
        match self.unit {
            Unit::Unitless => String::from(self.name()),
            unit => format!("{} {}", self.name, unit.tag()),
        }
    }
}

/// Built-in sizes, ascending by area.
pub static BUILTIN_SIZES: [PhysicalSize; 22] = {
    use Unit::{Inches as IN, Unitless as NONE};
    [
        PhysicalSize::builtin(0, "A6", 4.1, 5.8, NONE, "Postcard size"),
        PhysicalSize::builtin(1, "4x6", 4.0, 6.0, IN, "Common photo size for albums"),
        PhysicalSize::builtin(2, "5x7", 5.0, 7.0, IN, "Common photo size for frames"),
        PhysicalSize::builtin(3, "A5", 5.8, 8.3, NONE, "Half of A4, used for notebooks"),
        PhysicalSize::builtin(4, "8x10", 8.0, 10.0, IN, "Standard photo size for portraits"),
        PhysicalSize::builtin(5, "A4", 8.3, 11.7, NONE, "Standard letter size paper"),
        PhysicalSize::builtin(6, "11x14", 11.0, 14.0, IN, "Common print size for photos"),
        PhysicalSize::builtin(7, "A3", 11.7, 16.5, NONE, "Used for posters and drawings"),
        PhysicalSize::builtin(8, "12x18", 12.0, 18.0, IN, "Common poster size"),
        PhysicalSize::builtin(9, "16x20", 16.0, 20.0, IN, "Common size for wall art"),
        PhysicalSize::builtin(10, "16x24", 16.0, 24.0, IN, "Common poster size"),
        PhysicalSize::builtin(11, "A2", 16.5, 23.4, NONE, "Used for large posters"),
        PhysicalSize::builtin(12, "18x24", 18.0, 24.0, IN, "Used for movie posters"),
        PhysicalSize::builtin(13, "20x30", 20.0, 30.0, IN, "Large poster size"),
        PhysicalSize::builtin(14, "24x30", 24.0, 30.0, IN, "Common print size for art"),
        PhysicalSize::builtin(15, "A1", 23.4, 33.1, NONE, "Used for large prints and posters"),
        PhysicalSize::builtin(16, "24x36", 24.0, 36.0, IN, "Standard movie poster size"),
        PhysicalSize::builtin(17, "30x40", 30.0, 40.0, IN, "Large wall photo size"),
        PhysicalSize::builtin(18, "A0", 33.1, 46.8, NONE, "Used for large format prints"),
        PhysicalSize::builtin(19, "36x48", 36.0, 48.0, IN, "Large poster size"),
        PhysicalSize::builtin(20, "30x60", 30.0, 60.0, IN, "Common banner size"),
        PhysicalSize::builtin(21, "48x72", 48.0, 72.0, IN, "Extra large poster size"),
    ]
};

/// Built-ins followed by custom sizes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SizeCatalog {
    custom: Vec<PhysicalSize>,
    next_serial: u64,
}

impl SizeCatalog {
    /// Catalog with no custom sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed built-in table.
    pub fn builtin_sizes() -> &'static [PhysicalSize] {
        &BUILTIN_SIZES
    }

    /// Custom sizes in insertion order.
    pub fn custom_sizes(&self) -> &[PhysicalSize] {
        &self.custom
    }

    /// Every size: built-ins in table order, then customs in insertion order.
    pub fn sizes(&self) -> impl Iterator<Item = &PhysicalSize> + '_ {
        BUILTIN_SIZES.iter().chain(self.custom.iter())
    }

    pub fn len(&self) -> usize {
        BUILTIN_SIZES.len() + self.custom.len()
    }

    /// Always false: the built-in table is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First size called `name`, in [`sizes`](Self::sizes) order.
    pub fn find(&self, name: &str) -> Option<&PhysicalSize> {
        self.sizes().find(|s| s.name() == name)
    }

    /// The entry with identity `id`, if it still exists.
    pub fn get(&self, id: SizeId) -> Option<&PhysicalSize> {
        match id {
            SizeId::Builtin(i) => BUILTIN_SIZES.get(i),
            SizeId::Custom(_) => self.custom.iter().find(|s| s.id == id),
        }
    }

    /// Add a custom size entered as `width` × `height` in `unit`.
    ///
    /// The name is `"{W}x{H}"` of the entered values rounded to whole
    /// numbers. Centimetre entries are stored as whole inches, so an entry
    /// under 1.27cm rounds to zero and is rejected. An empty `label` becomes
    /// [`DEFAULT_CUSTOM_DESCRIPTION`].
    pub fn add_custom(
        &mut self,
        width: f64,
        height: f64,
        label: &str,
        unit: Unit,
    ) -> Result<PhysicalSize> {
        let width = check_dimension("custom width", width)
            .inspect_err(|e| log::warn!("rejected custom size: {e}"))?;
        let height = check_dimension("custom height", height)
            .inspect_err(|e| log::warn!("rejected custom size: {e}"))?;
        let width_in = check_dimension("custom width in inches", unit.to_stored_inches(width))
            .inspect_err(|e| log::warn!("rejected custom size: {e}"))?;
        let height_in = check_dimension("custom height in inches", unit.to_stored_inches(height))
            .inspect_err(|e| log::warn!("rejected custom size: {e}"))?;

        let label = label.trim();
        let description = if label.is_empty() {
            Cow::Borrowed(DEFAULT_CUSTOM_DESCRIPTION)
        } else {
            Cow::Owned(String::from(label))
        };

        let id = SizeId::Custom(self.next_serial);
        self.next_serial += 1;
        let size = PhysicalSize {
            id,
            name: Cow::Owned(format!("{}x{}", width.round(), height.round())),
            width_in,
            height_in,
            unit,
            description,
        };
        log::debug!(
            "added custom size {} ({}in x {}in)",
            size.name,
            size.width_in,
            size.height_in
        );
        self.custom.push(size.clone());
        Ok(size)
    }

    /// Remove the first custom size called `name`. Built-ins are untouched.
    pub fn remove_custom(&mut self, name: &str) -> bool {
        let id = self.custom.iter().find(|s| s.name() == name).map(|s| s.id);
        id.and_then(|id| self.remove(id)).is_some()
    }

    /// Remove the custom size `id`. Built-in ids are refused.
    pub fn remove(&mut self, id: SizeId) -> Option<PhysicalSize> {
        let i = self.custom.iter().position(|s| s.id == id)?;
        let size = self.custom.remove(i);
        log::debug!("removed custom size {} ({id})", size.name);
        Some(size)
    }
}
