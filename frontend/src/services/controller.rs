//! Upload form controller.
//!
//! Translates input, drag & drop, remove and submit events into UI state
//! and gates form submission on the presence of an acceptable file.
//!
//! The controller never touches the DOM itself. Everything visible goes
//! through an [`UploadView`], which the Leptos component implements with
//! signals and the tests implement with a recording fake.

use rand::Rng;

use crate::services::animation::ProgressAnimation;
use crate::services::validation::{check_size, check_type};
use crate::types::{AppResult, FileMeta, UploadError};

// =============================================================================
// View binding
// =============================================================================

/// Operations the controller needs from the page.
pub trait UploadView {
    /// Native file list handed over on drop (e.g. `web_sys::FileList`).
    type Files;

    fn set_file_name(&self, name: Option<&str>);
    fn set_file_info_visible(&self, visible: bool);
    fn set_drop_zone_visible(&self, visible: bool);
    /// Toggles the "active drop target" style.
    fn set_drag_active(&self, active: bool);
    fn set_submit_enabled(&self, enabled: bool);
    /// Swaps the submit label for the spinner.
    fn set_submit_loading(&self, loading: bool);
    fn set_progress_visible(&self, visible: bool);
    fn set_progress_width(&self, percent: f64);
    /// Replaces the input's file list with dropped files.
    fn set_input_files(&self, files: &Self::Files);
    /// Empties the file input.
    fn clear_input(&self);
    /// Blocking user-facing message.
    fn alert(&self, message: &str);
}

// =============================================================================
// Controller
// =============================================================================

/// State of the upload form.
pub struct UploadController<V: UploadView> {
    view: V,
    selected: Option<FileMeta>,
    progress: Option<ProgressAnimation>,
}

impl<V: UploadView> UploadController<V> {
    /// Wraps `view` and puts it in the empty state.
    pub fn new(view: V) -> Self {
        let controller = Self {
            view,
            selected: None,
            progress: None,
        };
        controller.show_empty();
        controller.view.set_drag_active(false);
        controller.view.set_submit_loading(false);
        controller.view.set_progress_visible(false);
        controller.view.set_progress_width(0.0);
        controller
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// File currently held by the input.
    pub fn selected(&self) -> Option<&FileMeta> {
        self.selected.as_ref()
    }

    pub fn progress(&self) -> Option<&ProgressAnimation> {
        self.progress.as_ref()
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    /// File input `change`: select the first file, then check its size.
    pub fn on_input_change(&mut self, file: Option<FileMeta>) -> AppResult<()> {
        self.select_file(file);
        self.validate_size()
    }

    /// Shows `file` as the active selection, or the empty state when the
    /// input no longer holds a file.
    pub fn select_file(&mut self, file: Option<FileMeta>) {
        match file {
            Some(file) => self.show_file(file),
            None => {
                log::debug!("File input emptied");
                self.selected = None;
                self.show_empty();
            }
        }
    }

    /// Rejects the held file if it exceeds the size limit.
    pub fn validate_size(&mut self) -> AppResult<()> {
        let Some(file) = &self.selected else {
            return Ok(());
        };
        if let Err(err) = check_size(file) {
            log::warn!("⚠️ Rejected {}: too large", file);
            self.view.alert(&err.to_string());
            self.view.clear_input();
            self.remove_file();
            return Err(err);
        }
        Ok(())
    }

    pub fn on_drag_over(&mut self) {
        self.view.set_drag_active(true);
    }

    pub fn on_drag_leave(&mut self) {
        self.view.set_drag_active(false);
    }

    /// Drop onto the drop zone: the native file list plus the metadata of
    /// its first file, or `None` when nothing was dropped.
    ///
    /// A rejected type leaves the previous selection untouched.
    pub fn on_drop(&mut self, dropped: Option<(V::Files, FileMeta)>) -> AppResult<()> {
        self.view.set_drag_active(false);

        let Some((files, file)) = dropped else {
            return Ok(());
        };

        if let Err(err) = check_type(&file) {
            log::warn!("⚠️ Rejected dropped {}: unsupported type", file);
            self.view.alert(&err.to_string());
            return Err(err);
        }

        self.view.set_input_files(&files);
        self.show_file(file);
        // Assigning files programmatically fires no change event
        self.validate_size()
    }

    /// Remove button: back to the initial state.
    pub fn remove_file(&mut self) {
        if let Some(file) = self.selected.take() {
            log::info!("🗑️ Removed {}", file.name);
        }
        self.view.clear_input();
        self.show_empty();
    }

    /// Form `submit`.
    ///
    /// `Err` means the native submission must be prevented. `Ok(true)` means
    /// a progress animation was just started and needs a timer driving
    /// [`tick_progress`](Self::tick_progress).
    pub fn on_submit(&mut self) -> AppResult<bool> {
        let Some(file) = &self.selected else {
            log::warn!("⚠️ Submit without a file");
            let err = UploadError::MissingFile;
            self.view.alert(&err.to_string());
            return Err(err);
        };

        log::info!("📤 Submitting {}", file);
        self.view.set_submit_loading(true);
        self.view.set_submit_enabled(false);
        self.view.set_progress_visible(true);

        if self.progress.is_some() {
            return Ok(false);
        }
        self.progress = Some(ProgressAnimation::new());
        self.view.set_progress_width(0.0);
        Ok(true)
    }

    /// One animation frame. Returns whether the timer should keep running.
    pub fn tick_progress<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(progress) = self.progress.as_mut() else {
            return false;
        };
        if progress.is_finished() {
            return false;
        }
        let width = progress.tick(rng);
        log::debug!("Progress {:.1}%", width);
        self.view.set_progress_width(width);
        !progress.is_finished()
    }

    // -------------------------------------------------------------------------
    // View helpers
    // -------------------------------------------------------------------------

    fn show_file(&mut self, file: FileMeta) {
        log::info!("📄 Selected {}", file);
        self.view.set_file_name(Some(&file.name));
        self.view.set_file_info_visible(true);
        self.view.set_drop_zone_visible(false);
        self.view.set_submit_enabled(true);
        self.selected = Some(file);
    }

    fn show_empty(&self) {
        self.view.set_file_name(None);
        self.view.set_file_info_visible(false);
        self.view.set_drop_zone_visible(true);
        self.view.set_submit_enabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    const PDF: &str = "application/pdf";
    const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    /// Snapshot of everything the controller can change on the page.
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Screen {
        file_name: Option<String>,
        file_info_visible: bool,
        drop_zone_visible: bool,
        drag_active: bool,
        submit_enabled: bool,
        submit_loading: bool,
        progress_visible: bool,
        progress_width: f64,
        input: Option<String>,
    }

    #[derive(Default)]
    struct FakeView {
        screen: RefCell<Screen>,
        alerts: RefCell<Vec<String>>,
        widths: RefCell<Vec<f64>>,
    }

    impl FakeView {
        fn screen(&self) -> Screen {
            self.screen.borrow().clone()
        }

        fn alerts(&self) -> Vec<String> {
            self.alerts.borrow().clone()
        }
    }

    impl UploadView for FakeView {
        type Files = Vec<FileMeta>;

        fn set_file_name(&self, name: Option<&str>) {
            self.screen.borrow_mut().file_name = name.map(str::to_owned);
        }
        fn set_file_info_visible(&self, visible: bool) {
            self.screen.borrow_mut().file_info_visible = visible;
        }
        fn set_drop_zone_visible(&self, visible: bool) {
            self.screen.borrow_mut().drop_zone_visible = visible;
        }
        fn set_drag_active(&self, active: bool) {
            self.screen.borrow_mut().drag_active = active;
        }
        fn set_submit_enabled(&self, enabled: bool) {
            self.screen.borrow_mut().submit_enabled = enabled;
        }
        fn set_submit_loading(&self, loading: bool) {
            self.screen.borrow_mut().submit_loading = loading;
        }
        fn set_progress_visible(&self, visible: bool) {
            self.screen.borrow_mut().progress_visible = visible;
        }
        fn set_progress_width(&self, percent: f64) {
            self.screen.borrow_mut().progress_width = percent;
            self.widths.borrow_mut().push(percent);
        }
        fn set_input_files(&self, files: &Vec<FileMeta>) {
            self.screen.borrow_mut().input = files.first().map(|f| f.name.clone());
        }
        fn clear_input(&self) {
            self.screen.borrow_mut().input = None;
        }
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn controller() -> UploadController<FakeView> {
        UploadController::new(FakeView::default())
    }

    fn initial_screen() -> Screen {
        Screen {
            drop_zone_visible: true,
            ..Screen::default()
        }
    }

    fn dropped(file: FileMeta) -> Option<(Vec<FileMeta>, FileMeta)> {
        Some((vec![file.clone()], file))
    }

    fn resume() -> FileMeta {
        FileMeta::new("resume.pdf", PDF, 1024)
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.view().screen(), initial_screen());
        assert!(c.selected().is_none());
    }

    #[test]
    fn test_select_valid_file_enables_submit() {
        let mut c = controller();
        for file in [
            FileMeta::new("resume.pdf", PDF, 1024),
            FileMeta::new("cv.docx", DOCX, MAX_FILE_SIZE),
            FileMeta::new("old.doc", "application/msword", 0),
        ] {
            assert_eq!(c.on_input_change(Some(file.clone())), Ok(()));
            let screen = c.view().screen();
            assert!(screen.submit_enabled);
            assert!(screen.file_info_visible);
            assert!(!screen.drop_zone_visible);
            assert_eq!(screen.file_name.as_deref(), Some(file.name.as_str()));
            assert_eq!(c.selected(), Some(&file));
        }
        assert!(c.view().alerts().is_empty());
    }

    #[test]
    fn test_oversized_selection_is_cleared_regardless_of_type() {
        for mime in [PDF, "image/png", ""] {
            let mut c = controller();
            let big = FileMeta::new("big", mime, 17_000_000);

            assert_eq!(c.on_input_change(Some(big)), Err(UploadError::TooLarge));
            assert_eq!(c.view().screen(), initial_screen());
            assert_eq!(c.view().alerts(), vec!["File size must be less than 16MB."]);
            assert!(c.selected().is_none());
        }
    }

    #[test]
    fn test_empty_change_returns_to_initial_state() {
        let mut c = controller();
        c.on_input_change(Some(resume())).unwrap();
        assert_eq!(c.on_input_change(None), Ok(()));
        assert_eq!(c.view().screen(), initial_screen());
    }

    #[test]
    fn test_drag_toggles_active_style() {
        let mut c = controller();
        c.on_drag_over();
        assert!(c.view().screen().drag_active);
        c.on_drag_leave();
        assert!(!c.view().screen().drag_active);

        c.on_drag_over();
        c.on_drop(None).unwrap();
        assert_eq!(c.view().screen(), initial_screen());
    }

    #[test]
    fn test_drop_valid_file_assigns_input() {
        let mut c = controller();
        c.on_drag_over();
        assert_eq!(c.on_drop(dropped(resume())), Ok(()));

        let screen = c.view().screen();
        assert_eq!(screen.input.as_deref(), Some("resume.pdf"));
        assert_eq!(screen.file_name.as_deref(), Some("resume.pdf"));
        assert!(screen.submit_enabled);
        assert!(!screen.drag_active);
    }

    #[test]
    fn test_drop_rejected_type_keeps_previous_selection() {
        let mut c = controller();
        c.on_drop(dropped(resume())).unwrap();
        let before = c.view().screen();

        for mime in ["image/jpeg", "text/plain", ""] {
            let bad = FileMeta::new("photo", mime, 10);
            assert_eq!(c.on_drop(dropped(bad)), Err(UploadError::UnsupportedType));
        }

        assert_eq!(c.view().screen(), before);
        assert_eq!(c.selected(), Some(&resume()));
        assert_eq!(
            c.view().alerts(),
            vec!["Please upload only PDF or DOCX files."; 3]
        );
    }

    #[test]
    fn test_drop_rejected_type_on_empty_form() {
        let mut c = controller();
        let bad = FileMeta::new("notes.txt", "text/plain", 10);
        assert_eq!(c.on_drop(dropped(bad)), Err(UploadError::UnsupportedType));
        assert_eq!(c.view().screen(), initial_screen());
    }

    #[test]
    fn test_drop_oversized_file_is_cleared() {
        let mut c = controller();
        let big = FileMeta::new("huge.pdf", PDF, 17_000_000);
        assert_eq!(c.on_drop(dropped(big)), Err(UploadError::TooLarge));
        assert_eq!(c.view().screen(), initial_screen());
        assert!(c.selected().is_none());
    }

    #[test]
    fn test_remove_restores_initial_state() {
        let mut c = controller();
        c.on_drop(dropped(resume())).unwrap();
        c.remove_file();
        assert_eq!(c.view().screen(), initial_screen());
        assert!(c.selected().is_none());

        // Removing twice is harmless
        c.remove_file();
        assert_eq!(c.view().screen(), initial_screen());
    }

    #[test]
    fn test_submit_without_file_is_blocked() {
        let mut c = controller();
        assert_eq!(c.on_submit(), Err(UploadError::MissingFile));
        assert_eq!(c.view().alerts(), vec!["Please select a file to upload."]);
        assert_eq!(c.view().screen(), initial_screen());
        assert!(c.progress().is_none());

        c.on_input_change(Some(resume())).unwrap();
        c.remove_file();
        assert_eq!(c.on_submit(), Err(UploadError::MissingFile));
    }

    #[test]
    fn test_submit_with_file_starts_loading_and_progress() {
        let mut c = controller();
        c.on_input_change(Some(resume())).unwrap();

        assert_eq!(c.on_submit(), Ok(true));
        let screen = c.view().screen();
        assert!(screen.submit_loading);
        assert!(!screen.submit_enabled);
        assert!(screen.progress_visible);
        assert_eq!(screen.progress_width, 0.0);
        assert!(c.progress().is_some());
        assert!(c.view().alerts().is_empty());

        // A second submit does not restart the animation
        assert_eq!(c.on_submit(), Ok(false));
    }

    #[test]
    fn test_progress_runs_to_exactly_hundred() {
        let mut c = controller();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(!c.tick_progress(&mut rng));

        c.on_input_change(Some(resume())).unwrap();
        c.on_submit().unwrap();

        let mut frames = 0;
        while c.tick_progress(&mut rng) {
            frames += 1;
            assert!(frames < 10_000);
        }

        let widths = c.view().widths.borrow().clone();
        assert!(widths.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(c.view().screen().progress_width, 100.0);

        // Stopped: no further frames
        assert!(!c.tick_progress(&mut rng));
        assert_eq!(c.view().widths.borrow().len(), widths.len());
    }
}
