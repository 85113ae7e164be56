use crate::{Category, Estimate, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked an image file for the form.
    ImagePicked { path: String, size_bytes: u64 },
    /// User cleared the file selection.
    ImageCleared,
    /// User changed the category select.
    CategorySelected(Category),
    /// User edited the free-text notes field.
    NotesChanged(String),
    /// User pressed the submit control.
    SubmitClicked,
    /// Engine finished the estimate request; `Err` carries the display text.
    EstimateArrived {
        request_id: RequestId,
        result: Result<Estimate, String>,
    },
    /// User pressed "Price another item".
    ResetClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
