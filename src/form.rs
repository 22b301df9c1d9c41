//! Custom-size entry form with width, height and aspect-ratio fields.
//!
//! Any two fields determine the third. Each field is a slot in one of three
//! states:
//!
//! ```text
//!            edit(text)              two valid manual slots
//!   Empty ─────────────▶ Manual      Empty ──────────────────▶ Auto(value)
//!     ▲                    │           ▲                          │
//!     └──── clear ─────────┘           └── a manual slot cleared ─┘
//! ```
//!
//! An `Auto` slot is locked: edits to it are refused until one of the
//! manual slots is cleared, which releases it back to `Empty`.

use alloc::string::String;

use crate::error::{Error, Result};
use crate::ratio::{AspectRatio, parse_positive, parse_ratio};
use crate::units::Unit;

/// A form field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    Ratio,
}

impl Field {
    const ALL: [Self; 3] = [Self::Width, Self::Height, Self::Ratio];
}

/// State of one field.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Slot {
    #[default]
    Empty,
    /// Typed by the user. `value` is `None` when the text doesn't parse.
    Manual { text: String, value: Option<f64> },
    /// Derived from the other two fields; locked.
    Auto(f64),
}

impl Slot {
    /// Parsed or derived value.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Empty => None,
            Self::Manual { value, .. } => *value,
            Self::Auto(v) => Some(*v),
        }
    }

    fn manual_value(&self) -> Option<f64> {
        match self {
            Self::Manual { value, .. } => *value,
            _ => None,
        }
    }
}

/// The custom-size form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomSizeForm {
    width: Slot,
    height: Slot,
    ratio: Slot,
    unit: Unit,
}

impl CustomSizeForm {
    /// Empty form entering values in `unit`.
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Switch between inches and centimetres. Entered values are kept as
    /// typed.
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    pub fn slot(&self, field: Field) -> &Slot {
        match field {
            Field::Width => &self.width,
            Field::Height => &self.height,
            Field::Ratio => &self.ratio,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Slot {
        match field {
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
            Field::Ratio => &mut self.ratio,
        }
    }

    /// Whether the field is derived and refuses edits.
    pub fn is_locked(&self, field: Field) -> bool {
        matches!(self.slot(field), Slot::Auto(_))
    }

    /// Parsed or derived value of a field. The ratio field's value is
    /// `width / height`.
    pub fn value(&self, field: Field) -> Option<f64> {
        self.slot(field).value()
    }

    /// User typed `text` into `field`. Blank text clears the field.
    ///
    /// Returns `false`, leaving the form unchanged, when the field is locked.
    pub fn edit(&mut self, field: Field, text: &str) -> bool {
        if self.is_locked(field) {
            log::debug!("ignored edit to locked {field:?} field");
            return false;
        }
        if text.trim().is_empty() {
            self.clear(field);
            return true;
        }
        let value = match field {
            Field::Width | Field::Height => parse_positive(text),
            Field::Ratio => parse_ratio(text).map(|r| r.value()),
        };
        *self.slot_mut(field) = Slot::Manual {
            text: String::from(text),
            value,
        };
        self.derive();
        true
    }

    /// User cleared `field`. Clearing a locked field is a no-op.
    pub fn clear(&mut self, field: Field) {
        if self.is_locked(field) {
            return;
        }
        *self.slot_mut(field) = Slot::Empty;
        self.derive();
    }

    /// Empty every field, keeping the unit.
    pub fn reset(&mut self) {
        *self = Self::new(self.unit);
    }

    /// Width and height, once both are known.
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        Some((self.width.value()?, self.height.value()?))
    }

    /// Width and height, or [`Error::IncompleteForm`].
    pub fn require_dimensions(&self) -> Result<(f64, f64)> {
        self.dimensions().ok_or(Error::IncompleteForm)
    }

    /// Aspect ratio implied by the form, if any.
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        AspectRatio::new(self.ratio.value()?, 1.0)
    }

    /// Release derived slots, then derive the missing field when exactly
    /// two fields hold valid manual values.
    fn derive(&mut self) {
        for field in Field::ALL {
            if self.is_locked(field) {
                *self.slot_mut(field) = Slot::Empty;
            }
        }

        let w = self.width.manual_value();
        let h = self.height.manual_value();
        let r = match &self.ratio {
            Slot::Manual { text, .. } => parse_ratio(text),
            _ => None,
        };
        let derived = match (w, h, r) {
            (Some(w), Some(h), None) if self.ratio == Slot::Empty => Some((Field::Ratio, w / h)),
            (Some(w), None, Some(r)) if self.height == Slot::Empty => {
                Some((Field::Height, r.height_for_width(w)))
            }
            (None, Some(h), Some(r)) if self.width == Slot::Empty => {
                Some((Field::Width, r.width_for_height(h)))
            }
            _ => None,
        };
        if let Some((field, value)) = derived {
            *self.slot_mut(field) = Slot::Auto(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_height_derive_ratio() {
        let mut f = CustomSizeForm::new(Unit::Inches);
        assert!(f.edit(Field::Width, "16"));
        assert!(!f.is_locked(Field::Ratio));
        assert!(f.edit(Field::Height, "9"));
        assert!(f.is_locked(Field::Ratio));
        assert_eq!(f.value(Field::Ratio), Some(16.0 / 9.0));
        assert_eq!(f.dimensions(), Some((16.0, 9.0)));
    }

    #[test]
    fn width_and_ratio_derive_height() {
        let mut f = CustomSizeForm::new(Unit::Inches);
        f.edit(Field::Ratio, "4:3");
        f.edit(Field::Width, "12");
        assert!(f.is_locked(Field::Height));
        assert_eq!(f.value(Field::Height), Some(9.0));
        assert_eq!(f.require_dimensions(), Ok((12.0, 9.0)));
    }

    #[test]
    fn height_and_decimal_ratio_derive_width() {
        let mut f = CustomSizeForm::new(Unit::Inches);
        f.edit(Field::Height, "10");
        f.edit(Field::Ratio, "1.5");
        assert!(f.is_locked(Field::Width));
        assert_eq!(f.value(Field::Width), Some(15.0));
    }

    #[test]
    fn locked_field_refuses_edits() {
        let mut f = CustomSizeForm::new(Unit::Inches);
        f.edit(Field::Width, "16");
        f.edit(Field::Height, "9");
        assert!(!f.edit(Field::Ratio, "1:1"));
        f.clear(Field::Ratio);
        assert_eq!(f.value(Field::Ratio), Some(16.0 / 9.0));
    }

    #[test]
    fn clearing_manual_releases_auto() {
        let mut f = CustomSizeForm::new(Unit::Inches);
        f.edit(Field::Width, "16");
        f.edit(Field::Height, "9");
        f.clear(Field::Height);
        assert_eq!(f.slot(Field::Ratio), &Slot::Empty);
        assert!(!f.is_locked(Field::Ratio));
        assert_eq!(f.dimensions(), None);
        assert_eq!(f.require_dimensions(), Err(Error::IncompleteForm));

        // Ratio is free again and now derives height.
        assert!(f.edit(Field::Ratio, "2:1"));
        assert!(f.is_locked(Field::Height));
        assert_eq!(f.value(Field::Height), Some(8.0));
    }

    #[test]
    fn blank_edit_clears() {
        let mut f = CustomSizeForm::new(Unit::Inches);
        f.edit(Field::Width, "16");
        f.edit(Field::Height, "9");
        assert!(f.edit(Field::Width, "   "));
        assert_eq!(f.slot(Field::Width), &Slot::Empty);
        assert!(!f.is_locked(Field::Ratio));
    }

    #[test]
    fn invalid_text_is_manual_but_derives_nothing() {
        let mut f = CustomSizeForm::new(Unit::Inches);
        f.edit(Field::Width, "abc");
        f.edit(Field::Height, "9");
        assert!(matches!(
            f.slot(Field::Width),
            Slot::Manual { value: None, .. }
        ));
        assert!(!f.is_locked(Field::Ratio));

        f.edit(Field::Ratio, "16:0");
        assert_eq!(f.value(Field::Ratio), None);
        assert_eq!(f.dimensions(), None);
    }

    #[test]
    fn editing_a_source_field_rederives() {
        let mut f = CustomSizeForm::new(Unit::Inches);
        f.edit(Field::Width, "12");
        f.edit(Field::Ratio, "3:2");
        assert_eq!(f.value(Field::Height), Some(8.0));
        f.edit(Field::Width, "24");
        assert_eq!(f.value(Field::Height), Some(16.0));
    }

    #[test]
    fn reset_keeps_unit() {
        let mut f = CustomSizeForm::new(Unit::Inches);
        f.toggle_unit();
        f.edit(Field::Width, "30");
        f.reset();
        assert_eq!(f.unit(), Unit::Centimeters);
        assert_eq!(f.slot(Field::Width), &Slot::Empty);
    }
}
