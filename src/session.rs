//! Interactive estimator state: loaded image, size catalog, selection and
//! view controls.
//!
//! A [`Session`] owns everything that changes in response to user input and
//! recomputes results on demand. Nothing is cached, so every query reflects
//! the current state.
//!
//! ```
//! use printfit::{FittingMode, Grade, Preview, Session};
//!
//! let mut s = Session::default();
//! s.load_image(3000, 2000).unwrap();
//! s.select("8x10").unwrap();
//!
//! let Preview::Framed { geometry, grading, .. } = s.preview().unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(geometry.dpi, 300.0);
//! assert_eq!(grading.tier, Grade::Good);
//!
//! s.toggle_mode();
//! assert_eq!(s.mode(), FittingMode::Fill);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::analysis::{SizeAnalysis, analyze_all};
use crate::catalog::{PhysicalSize, SizeCatalog, SizeId};
use crate::debounce::Debouncer;
use crate::error::{Error, Result};
use crate::form::CustomSizeForm;
use crate::geometry::{
    FittingMode, GeometryResult, PixelImage, PrintSize, ScalePercent, compute_geometry,
    max_print_size,
};
use crate::grade::{Grading, grade};
use crate::settings::Settings;
use crate::units::Unit;

/// What the preview pane shows.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Preview {
    /// No size selected: the largest print at the reference DPI.
    Unframed { max_print: PrintSize, dpi: f64 },
    /// The image laid out in the selected size.
    Framed {
        size: PhysicalSize,
        geometry: GeometryResult,
        grading: Grading,
    },
}

/// Estimator state.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    settings: Settings,
    catalog: SizeCatalog,
    image: Option<PixelImage>,
    selected: Option<SizeId>,
    mode: FittingMode,
    scale: ScalePercent,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_valid_settings(Settings::default())
    }
}

impl Session {
    /// Start a session, rejecting invalid settings.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::with_valid_settings(settings))
    }

    fn with_valid_settings(settings: Settings) -> Self {
        Self {
            settings,
            catalog: SizeCatalog::new(),
            image: None,
            selected: None,
            mode: FittingMode::default(),
            scale: ScalePercent::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &SizeCatalog {
        &self.catalog
    }

    /// A blank custom-size form in the configured unit.
    pub fn new_form(&self) -> CustomSizeForm {
        CustomSizeForm::new(self.settings.default_unit)
    }

    /// A debouncer for form input using the configured quiet period.
    pub fn form_debouncer<T>(&self) -> Debouncer<T> {
        Debouncer::new(self.settings.debounce_delay())
    }

    // ── Image ───────────────────────────────────────────────────────────

    /// Replace the current image. On error the previous image is kept.
    pub fn load_image(&mut self, width: u32, height: u32) -> Result<PixelImage> {
        let image = PixelImage::new(width, height)
            .inspect_err(|e| log::warn!("image rejected: {e}"))?;
        log::debug!("loaded {width}x{height} image");
        self.image = Some(image);
        Ok(image)
    }

    /// The image could not be decoded. State is left as it was.
    pub fn image_failed(&self, reason: &str) {
        log::warn!("failed to load image: {reason}");
    }

    pub fn image(&self) -> Option<PixelImage> {
        self.image
    }

    // ── Selection ───────────────────────────────────────────────────────

    /// Select the first size called `name`, built-ins before customs.
    /// Resets fitting mode and scale.
    pub fn select(&mut self, name: &str) -> Result<&PhysicalSize> {
        let Some(size) = self.catalog.find(name) else {
            log::warn!("cannot select unknown size {name:?}");
            return Err(Error::UnknownSize(String::from(name)));
        };
        self.selected = Some(size.id());
        self.mode = FittingMode::default();
        self.scale = ScalePercent::default();
        Ok(size)
    }

    /// Select a specific catalog entry. Resets fitting mode and scale.
    pub fn select_id(&mut self, id: SizeId) -> Result<&PhysicalSize> {
        let Some(size) = self.catalog.get(id) else {
            log::warn!("cannot select missing size {id}");
            return Err(Error::UnknownSize(id.to_string()));
        };
        self.selected = Some(id);
        self.mode = FittingMode::default();
        self.scale = ScalePercent::default();
        Ok(size)
    }

    /// Deselect; the preview returns to the unframed maximum size.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected size, if any.
    pub fn selected(&self) -> Option<&PhysicalSize> {
        self.catalog.get(self.selected?)
    }

    pub fn selected_id(&self) -> Option<SizeId> {
        self.selected
    }

    // ── View controls ───────────────────────────────────────────────────

    /// Back to fit at 100%.
    pub fn reset_view(&mut self) {
        self.mode = FittingMode::default();
        self.scale = ScalePercent::default();
    }

    pub fn mode(&self) -> FittingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FittingMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn scale(&self) -> ScalePercent {
        self.scale
    }

    /// Set the scale; out-of-range values are clamped.
    pub fn set_scale(&mut self, percent: u16) {
        self.scale = ScalePercent::new(percent);
    }

    pub fn scale_up(&mut self) -> ScalePercent {
        self.scale = self.scale.step_up();
        self.scale
    }

    pub fn scale_down(&mut self) -> ScalePercent {
        self.scale = self.scale.step_down();
        self.scale
    }

    // ── Custom sizes ────────────────────────────────────────────────────

    /// Add a custom size to the catalog.
    pub fn add_custom(
        &mut self,
        width: f64,
        height: f64,
        label: &str,
        unit: Unit,
    ) -> Result<PhysicalSize> {
        self.catalog.add_custom(width, height, label, unit)
    }

    /// Add the size described by a completed form, then reset the form.
    pub fn submit_form(&mut self, form: &mut CustomSizeForm, label: &str) -> Result<PhysicalSize> {
        let (width, height) = form.require_dimensions()?;
        let size = self.catalog.add_custom(width, height, label, form.unit())?;
        form.reset();
        Ok(size)
    }

    /// Remove the first custom size called `name`.
    pub fn remove_custom(&mut self, name: &str) -> bool {
        let id = self
            .catalog
            .custom_sizes()
            .iter()
            .find(|s| s.name() == name)
            .map(PhysicalSize::id);
        id.is_some_and(|id| self.remove_size(id))
    }

    /// Remove the custom size `id`. Removing the selected entry clears the
    /// selection; a same-named entry stays selected.
    pub fn remove_size(&mut self, id: SizeId) -> bool {
        if self.catalog.remove(id).is_none() {
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        true
    }

    // ── Results ─────────────────────────────────────────────────────────

    /// Baseline DPI and grade for every size in the catalog.
    pub fn analysis(&self) -> Result<Vec<SizeAnalysis<'_>>> {
        let image = self.image.ok_or(Error::NoImage)?;
        Ok(analyze_all(image, self.catalog.sizes()))
    }

    /// Geometry of the image in the selected size, if one is selected.
    pub fn geometry(&self) -> Result<Option<GeometryResult>> {
        let image = self.image.ok_or(Error::NoImage)?;
        Ok(self
            .selected()
            .map(|size| compute_geometry(image, size.frame(), self.mode, self.scale)))
    }

    /// Current preview.
    pub fn preview(&self) -> Result<Preview> {
        let image = self.image.ok_or(Error::NoImage)?;
        Ok(match self.selected() {
            None => Preview::Unframed {
                max_print: max_print_size(image, self.settings.reference_dpi),
                dpi: self.settings.reference_dpi,
            },
            Some(size) => {
                let geometry = compute_geometry(image, size.frame(), self.mode, self.scale);
                Preview::Framed {
                    size: size.clone(),
                    grading: grade(geometry.dpi),
                    geometry,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use crate::grade::Grade;

    fn loaded(w: u32, h: u32) -> Session {
        let mut s = Session::default();
        s.load_image(w, h).unwrap();
        s
    }

    #[test]
    fn rejects_invalid_settings() {
        let bad = Settings::default().with_reference_dpi(0.0);
        assert!(matches!(Session::new(bad), Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn queries_need_an_image() {
        let s = Session::default();
        assert_eq!(s.preview(), Err(Error::NoImage));
        assert_eq!(s.geometry(), Err(Error::NoImage));
        assert!(matches!(s.analysis(), Err(Error::NoImage)));
    }

    #[test]
    fn failed_load_keeps_previous_image() {
        let mut s = loaded(3000, 2000);
        assert!(s.load_image(0, 2000).is_err());
        s.image_failed("truncated file");
        assert_eq!(s.image(), Some(PixelImage::new(3000, 2000).unwrap()));
    }

    #[test]
    fn unframed_preview_uses_reference_dpi() {
        let s = loaded(3000, 2000);
        assert_eq!(
            s.preview().unwrap(),
            Preview::Unframed {
                max_print: PrintSize {
                    width_in: 10.0,
                    height_in: 2000.0 / 300.0,
                },
                dpi: 300.0,
            }
        );
    }

    #[test]
    fn select_resets_view() {
        let mut s = loaded(3000, 2000);
        s.select("8x10").unwrap();
        s.toggle_mode();
        s.scale_up();
        assert_eq!(s.scale().get(), 105);
        s.select("5x7").unwrap();
        assert_eq!(s.mode(), FittingMode::Fit);
        assert_eq!(s.scale(), ScalePercent::DEFAULT);
    }

    #[test]
    fn select_unknown_keeps_selection() {
        let mut s = loaded(3000, 2000);
        s.select("A4").unwrap();
        assert_eq!(s.select("9x9"), Err(Error::UnknownSize(String::from("9x9"))));
        assert_eq!(s.selected().map(PhysicalSize::name), Some("A4"));
    }

    #[test]
    fn framed_preview_grades_geometry() {
        let mut s = loaded(3000, 2000);
        s.select("8x10").unwrap();
        let Preview::Framed {
            size,
            geometry,
            grading,
        } = s.preview().unwrap()
        else {
            panic!("expected framed preview");
        };
        assert_eq!(size.name(), "8x10");
        assert!(geometry.rotated);
        assert_eq!(geometry.dpi, 300.0);
        assert_eq!(grading.tier, Grade::Good);
        assert_eq!(s.geometry().unwrap(), Some(geometry));
    }

    #[test]
    fn scale_controls_clamp() {
        let mut s = Session::default();
        s.set_scale(195);
        assert_eq!(s.scale_up().get(), 200);
        assert_eq!(s.scale_up().get(), 200);
        s.set_scale(10);
        assert_eq!(s.scale().get(), 50);
        assert_eq!(s.scale_down().get(), 50);
    }

    #[test]
    fn removing_selected_custom_clears_selection() {
        let mut s = loaded(3000, 2000);
        s.add_custom(20.0, 20.0, "", Unit::Inches).unwrap();
        s.select("20x20").unwrap();
        assert!(s.remove_custom("20x20"));
        assert!(s.selected().is_none());
        assert!(matches!(s.preview().unwrap(), Preview::Unframed { .. }));
    }

    #[test]
    fn same_named_custom_does_not_steal_builtin_selection() {
        let mut s = loaded(6000, 4000);
        let builtin = s.select("30x40").unwrap().id();
        let custom = s.add_custom(30.0, 40.0, "", Unit::Centimeters).unwrap();
        assert_eq!(custom.name(), "30x40");

        let sel = s.selected().unwrap();
        assert!(!sel.is_custom());
        assert_eq!((sel.width_in(), sel.height_in()), (30.0, 40.0));

        // By name the built-in still resolves; the custom is reachable by id.
        assert_eq!(s.select("30x40").unwrap().id(), builtin);
        let picked = s.select_id(custom.id()).unwrap();
        assert!(picked.is_custom());
        assert_eq!(picked.width_in(), 12.0);
        assert_eq!(s.selected_id(), Some(custom.id()));
    }

    #[test]
    fn removing_same_named_custom_keeps_builtin_selection() {
        let mut s = loaded(6000, 4000);
        s.add_custom(8.0, 10.0, "", Unit::Inches).unwrap();
        s.select("8x10").unwrap();
        assert!(s.remove_custom("8x10"));
        let sel = s.selected().unwrap();
        assert_eq!(sel.name(), "8x10");
        assert!(!sel.is_custom());
    }

    #[test]
    fn analysis_rows_select_by_id() {
        let mut s = loaded(4500, 3000);
        s.add_custom(4.0, 6.0, "Mine", Unit::Inches).unwrap();
        let id = {
            let rows = s.analysis().unwrap();
            rows.iter()
                .find(|r| r.size.is_custom())
                .map(|r| r.size.id())
                .unwrap()
        };
        assert_eq!(s.select_id(id).unwrap().description(), "Mine");
        assert!(s.remove_size(id));
        assert_eq!(s.selected(), None);
        assert!(!s.remove_size(id));
    }

    #[test]
    fn select_missing_id_fails() {
        let mut s = loaded(3000, 2000);
        assert_eq!(
            s.select_id(SizeId::Custom(7)),
            Err(Error::UnknownSize(String::from("custom#7")))
        );
        assert_eq!(s.selected_id(), None);
    }

    #[test]
    fn reset_view_restores_defaults() {
        let mut s = loaded(3000, 2000);
        s.set_mode(FittingMode::Fill);
        s.set_scale(150);
        s.reset_view();
        assert_eq!((s.mode(), s.scale()), (FittingMode::Fit, ScalePercent::DEFAULT));
    }

    #[test]
    fn removing_other_custom_keeps_selection() {
        let mut s = loaded(3000, 2000);
        s.add_custom(20.0, 20.0, "", Unit::Inches).unwrap();
        s.select("8x10").unwrap();
        assert!(s.remove_custom("20x20"));
        assert_eq!(s.selected().map(PhysicalSize::name), Some("8x10"));
    }

    #[test]
    fn submit_form_adds_and_resets() {
        let mut s = loaded(3000, 2000);
        let mut form = s.new_form();
        form.edit(Field::Width, "12");
        assert_eq!(s.submit_form(&mut form, "x"), Err(Error::IncompleteForm));

        form.edit(Field::Ratio, "3:2");
        let size = s.submit_form(&mut form, "Panorama").unwrap();
        assert_eq!(size.name(), "12x8");
        assert_eq!(size.description(), "Panorama");
        assert_eq!(form.dimensions(), None);
        assert_eq!(s.catalog().custom_sizes().len(), 1);
    }

    #[test]
    fn analysis_covers_catalog() {
        let mut s = loaded(4500, 3000);
        s.add_custom(10.0, 15.0, "", Unit::Inches).unwrap();
        let rows = s.analysis().unwrap();
        assert_eq!(rows.len(), s.catalog().len());
    }

    #[test]
    fn debouncer_uses_settings() {
        let s = Session::new(Settings::default().with_debounce_ms(150)).unwrap();
        let d: Debouncer<u8> = s.form_debouncer();
        assert_eq!(d.delay(), core::time::Duration::from_millis(150));
    }
}
