//! Pricer core: pure form state machine and view-model helpers.
mod effect;
mod estimate;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use estimate::{Category, Comp, CompStatus, Estimate, ValueRange};
pub use msg::Msg;
pub use state::{AppState, RequestId, SelectedImage, MAX_IMAGE_BYTES};
pub use update::update;
pub use view_model::{comp_rows, AppViewModel, CompRowView, ResultView};
