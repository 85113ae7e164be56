use crate::{Category, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Submit the current form as a multipart POST to the estimate service.
    SubmitEstimate {
        request_id: RequestId,
        image_path: String,
        category: Category,
        notes: String,
    },
}
