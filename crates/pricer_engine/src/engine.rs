use std::sync::{mpsc, Arc};
use std::thread;

use pricer_logging::pricer_warn;

use crate::client::{image_mime_for_path, EstimateApi, ReqwestEstimateClient};
use crate::settings::ClientSettings;
use crate::types::{ApiError, EngineEvent, EstimateRequest, EstimateResponse, RequestId};

enum EngineCommand {
    Estimate {
        request_id: RequestId,
        image_path: String,
        category: String,
        notes: String,
    },
    Health,
}

/// Command side of the engine. Requests run on a dedicated runtime thread;
/// results come back on the event receiver returned by [`EngineHandle::new`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestEstimateClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit_estimate(
        &self,
        request_id: RequestId,
        image_path: impl Into<String>,
        category: impl Into<String>,
        notes: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Estimate {
            request_id,
            image_path: image_path.into(),
            category: category.into(),
            notes: notes.into(),
        });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Health);
    }
}

async fn handle_command(
    client: &dyn EstimateApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Estimate {
            request_id,
            image_path,
            category,
            notes,
        } => {
            let result = load_and_estimate(client, &image_path, category, notes).await;
            if let Err(err) = &result {
                pricer_warn!("Estimate request {} failed: {:?}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::EstimateDone { request_id, result });
        }
        EngineCommand::Health => {
            let result = client.health().await;
            let _ = event_tx.send(EngineEvent::HealthDone { result });
        }
    }
}

async fn load_and_estimate(
    client: &dyn EstimateApi,
    image_path: &str,
    category: String,
    notes: String,
) -> Result<EstimateResponse, ApiError> {
    let bytes = tokio::fs::read(image_path)
        .await
        .map_err(|err| ApiError::FileRead(err.to_string()))?;
    let mime_type = image_mime_for_path(image_path).ok_or_else(|| {
        ApiError::UnsupportedImageType {
            extension: image_path
                .rsplit('.')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    })?;
    let file_name = image_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(image_path)
        .to_string();

    client
        .estimate(&EstimateRequest {
            file_name,
            mime_type: mime_type.to_string(),
            bytes,
            category,
            notes,
        })
        .await
}
