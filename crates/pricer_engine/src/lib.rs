//! Pricer engine: IO and effect execution for the estimate service.
mod client;
mod engine;
mod settings;
mod types;

pub use client::{image_mime_for_path, EstimateApi, ReqwestEstimateClient};
pub use engine::EngineHandle;
pub use settings::{normalize_api_base, ClientSettings, DEFAULT_API_BASE};
pub use types::{
    ApiError, CompRecord, CompStatus, EngineEvent, EstimateRequest, EstimateResponse,
    HealthStatus, RequestId, ValueRange,
};
