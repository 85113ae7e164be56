use crate::{AppState, Effect, Msg, SelectedImage, MAX_IMAGE_BYTES};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ImagePicked { path, size_bytes } => {
            state.set_image(Some(SelectedImage { path, size_bytes }));
            Vec::new()
        }
        Msg::ImageCleared => {
            state.set_image(None);
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            state.set_category(category);
            Vec::new()
        }
        Msg::NotesChanged(notes) => {
            state.set_notes(notes);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Submit is disabled while a request is pending; guard anyway so
            // a queued double-click cannot start a second request.
            if state.is_submitting() {
                return (state, Vec::new());
            }
            state.set_error(None);
            state.clear_result();

            let image = match state.image() {
                Some(image) => image.clone(),
                None => {
                    state.set_error(Some("Please choose an image.".to_string()));
                    return (state, Vec::new());
                }
            };
            if image.size_bytes > MAX_IMAGE_BYTES {
                state.set_error(Some("Image too large (max 10MB).".to_string()));
                return (state, Vec::new());
            }

            let category = state.category();
            let notes = state.notes().to_string();
            let request_id = state.begin_submit();
            vec![Effect::SubmitEstimate {
                request_id,
                image_path: image.path,
                category,
                notes,
            }]
        }
        Msg::EstimateArrived { result, .. } => {
            // No stale-response guard: whatever arrives replaces the display,
            // even after a reset. Serialization happens at the submit control.
            state.finish_submit(result);
            Vec::new()
        }
        Msg::ResetClicked => {
            state.reset();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
