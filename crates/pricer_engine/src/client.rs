use async_trait::async_trait;
use pricer_logging::pricer_debug;
use reqwest::multipart::{Form, Part};

use crate::settings::{normalize_api_base, ClientSettings};
use crate::types::{ApiError, EstimateRequest, EstimateResponse, HealthStatus};

/// The backend boundary: one multipart POST and one JSON GET.
#[async_trait]
pub trait EstimateApi: Send + Sync {
    async fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResponse, ApiError>;
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestEstimateClient {
    settings: ClientSettings,
}

impl ReqwestEstimateClient {
    pub fn new(mut settings: ClientSettings) -> Self {
        settings.api_base = normalize_api_base(&settings.api_base);
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|_| ApiError::Network)
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let raw = format!("{}/{}", self.settings.api_base, path);
        reqwest::Url::parse(&raw).map_err(|_| ApiError::InvalidBaseUrl(raw))
    }
}

#[async_trait]
impl EstimateApi for ReqwestEstimateClient {
    async fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResponse, ApiError> {
        let actual = request.bytes.len() as u64;
        if actual > self.settings.max_image_bytes {
            return Err(ApiError::TooLarge {
                max_bytes: self.settings.max_image_bytes,
                actual,
            });
        }

        let url = self.endpoint("estimate")?;
        let client = self.build_client()?;

        let image = Part::bytes(request.bytes.clone())
            .file_name(request.file_name.clone())
            .mime_str(&request.mime_type)
            .map_err(|_| ApiError::UnsupportedImageType {
                extension: request.mime_type.clone(),
            })?;
        let form = Form::new()
            .part("image", image)
            .text("category", request.category.clone())
            .text("notes", request.notes.clone());

        pricer_debug!(
            "POST {} image={} ({} bytes) category={}",
            url,
            request.file_name,
            actual,
            request.category
        );

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body: serde_json::Value = match response.json().await {
            Ok(value) => value,
            // Non-JSON body: schema failure on success, generic fallback
            // message on an error status.
            Err(_) if status.is_success() => return Err(ApiError::UnexpectedSchema),
            Err(_) => {
                return Err(ApiError::Http {
                    status: status.as_u16(),
                    message: fallback_http_message(status.as_u16()),
                })
            }
        };

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|value| value.as_str())
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| fallback_http_message(status.as_u16()));
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_value(body).map_err(|_| ApiError::UnexpectedSchema)
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.endpoint("health")?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: fallback_http_message(status.as_u16()),
            });
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|_| ApiError::UnexpectedSchema)
    }
}

/// Maps a file extension to the `image/*` MIME type sent with the multipart
/// part. Anything outside this table is rejected before a request is made.
pub fn image_mime_for_path(path: &str) -> Option<&'static str> {
    let extension = path.rsplit('.').next()?;
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

fn fallback_http_message(status: u16) -> String {
    format!("Request failed ({status})")
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network
}
