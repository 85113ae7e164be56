use serde::Deserialize;

pub type RequestId = u64;

/// Fully assembled multipart payload for `POST /estimate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateRequest {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub category: String,
    pub notes: String,
}

/// Wire shape of a successful estimate.
///
/// Only the fields the original shape predicate required are mandatory
/// (`normalized_title`, `value_range`, `pricing_rationale`, `comps`);
/// everything else is defaulted so older backends still parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EstimateResponse {
    pub normalized_title: String,
    pub value_range: ValueRange,
    pub pricing_rationale: Vec<String>,
    #[serde(default)]
    pub top_comps_used: Vec<usize>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub suggested_keywords: Vec<String>,
    pub comps: Vec<CompRecord>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub duration_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
    #[serde(default)]
    pub confidence: String,
}

/// One comparable listing as returned by the backend.
///
/// The backend has emitted two field-naming schemes over time; both are
/// accepted here and resolved downstream (`thumbnail` over `thumb`,
/// `ended_at` over `sold_date`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompRecord {
    pub title: String,
    pub price: f64,
    pub url: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub status: CompStatus,
    #[serde(default)]
    pub ended_at: Option<String>,
    #[serde(default)]
    pub sold_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompStatus {
    #[default]
    Active,
    Sold,
}

/// Wire shape of `GET /health`: `{ok: true}` when healthy, `{error: ...}`
/// when degraded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Events the engine reports back to the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    EstimateDone {
        request_id: RequestId,
        result: Result<EstimateResponse, ApiError>,
    },
    HealthDone {
        result: Result<HealthStatus, ApiError>,
    },
}

/// Everything that can go wrong talking to the estimate service.
///
/// `Display` is the user-facing message; the variant is kept for logs and
/// tests. None of these are fatal to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Could not read image file: {0}")]
    FileRead(String),

    #[error("Image too large (max 10MB).")]
    TooLarge { max_bytes: u64, actual: u64 },

    #[error("Unsupported image type: {extension}")]
    UnsupportedImageType { extension: String },

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Non-2xx status. `message` is the body's `error` field when present,
    /// otherwise `Request failed (<status>)`.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Unexpected response format.")]
    UnexpectedSchema,

    #[error("Network error. Try again.")]
    Timeout,

    #[error("Network error. Try again.")]
    Network,
}
