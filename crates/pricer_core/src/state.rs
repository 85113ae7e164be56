use crate::view_model::{comp_rows, AppViewModel, ResultView};
use crate::{Category, Estimate};

pub type RequestId = u64;

/// Maximum accepted image size: 10 MiB.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// File selection as reported by the platform file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub path: String,
    pub size_bytes: u64,
}

impl SelectedImage {
    /// Display name: the final path component.
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path.as_str())
    }
}

/// The whole form: current inputs plus the last error/result pair.
///
/// Created on view mount, mutated only through [`crate::update`], discarded
/// when the view goes away. Nothing here survives the session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    image: Option<SelectedImage>,
    category: Category,
    notes: String,
    error: Option<String>,
    submitting: bool,
    result: Option<Estimate>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            submitting: self.submitting,
            submit_enabled: self.image.is_some() && !self.submitting,
            error: self.error.clone(),
            image_name: self.image.as_ref().map(|img| img.file_name().to_string()),
            category: self.category,
            notes: self.notes.clone(),
            result: self.result.as_ref().map(result_view),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it. The shell uses this to decide
    /// whether a render pass is needed.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub(crate) fn category(&self) -> Category {
        self.category
    }

    pub(crate) fn notes(&self) -> &str {
        &self.notes
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_image(&mut self, image: Option<SelectedImage>) {
        self.image = image;
        self.mark_dirty();
    }

    pub(crate) fn set_category(&mut self, category: Category) {
        self.category = category;
        self.mark_dirty();
    }

    pub(crate) fn set_notes(&mut self, notes: String) {
        self.notes = notes;
        self.mark_dirty();
    }

    pub(crate) fn set_error(&mut self, error: Option<String>) {
        self.error = error;
        self.mark_dirty();
    }

    pub(crate) fn clear_result(&mut self) {
        self.result = None;
        self.mark_dirty();
    }

    /// Marks the request in flight and hands out the next request id.
    pub(crate) fn begin_submit(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.submitting = true;
        self.mark_dirty();
        self.next_request_id
    }

    pub(crate) fn finish_submit(&mut self, result: Result<Estimate, String>) {
        self.submitting = false;
        match result {
            Ok(estimate) => {
                self.result = Some(estimate);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        self.mark_dirty();
    }

    /// Reset action: clears file, result, notes, and error. Category keeps
    /// its current value, matching the form's reset control.
    pub(crate) fn reset(&mut self) {
        self.image = None;
        self.result = None;
        self.notes.clear();
        self.error = None;
        self.mark_dirty();
    }
}

fn result_view(estimate: &Estimate) -> ResultView {
    ResultView {
        title: estimate.normalized_title.clone(),
        low: estimate.value_range.low,
        high: estimate.value_range.high,
        confidence: estimate.value_range.confidence.clone(),
        rationale: estimate.pricing_rationale.clone(),
        notes: estimate.notes.clone(),
        keywords: estimate.suggested_keywords.clone(),
        comps: comp_rows(&estimate.comps),
        image_url: estimate.image_url.clone(),
        duration_ms: estimate.duration_ms,
    }
}
