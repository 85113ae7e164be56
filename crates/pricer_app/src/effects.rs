use std::sync::mpsc;
use std::thread;

use pricer_core::{Comp, CompStatus, Effect, Estimate, Msg, ValueRange};
use pricer_engine::{ClientSettings, EngineEvent, EngineHandle};
use pricer_logging::{pricer_debug, pricer_info, pricer_warn};

/// Bridges the pure core to the engine: effects go out as engine commands,
/// engine events come back in as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (engine, events) = EngineHandle::new(settings);
        spawn_event_loop(events, msg_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitEstimate {
                    request_id,
                    image_path,
                    category,
                    notes,
                } => {
                    pricer_info!(
                        "SubmitEstimate request_id={} image={} category={}",
                        request_id,
                        image_path,
                        category
                    );
                    self.engine
                        .submit_estimate(request_id, image_path, category.as_str(), notes);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            match event {
                EngineEvent::EstimateDone { request_id, result } => {
                    let result = match result {
                        Ok(response) => Ok(map_estimate(response)),
                        Err(err) => {
                            pricer_warn!("Estimate request {} failed: {}", request_id, err);
                            Err(err.to_string())
                        }
                    };
                    let _ = msg_tx.send(Msg::EstimateArrived { request_id, result });
                }
                // Health checks are driven directly by the health command and
                // never go through this runner.
                EngineEvent::HealthDone { result } => {
                    pricer_debug!("Ignoring stray health event: {:?}", result);
                }
            }
        }
    });
}

fn map_estimate(response: pricer_engine::EstimateResponse) -> Estimate {
    Estimate {
        normalized_title: response.normalized_title,
        value_range: ValueRange {
            low: response.value_range.low,
            high: response.value_range.high,
            confidence: response.value_range.confidence,
        },
        pricing_rationale: response.pricing_rationale,
        top_comps_used: response.top_comps_used,
        notes: response.notes,
        suggested_keywords: response.suggested_keywords,
        comps: response.comps.into_iter().map(map_comp).collect(),
        image_url: response.image_url,
        duration_ms: response.duration_ms.round() as u64,
    }
}

fn map_comp(record: pricer_engine::CompRecord) -> Comp {
    Comp {
        title: record.title,
        price: record.price,
        url: record.url,
        currency: record.currency,
        thumbnail: record.thumbnail,
        thumb: record.thumb,
        status: match record.status {
            pricer_engine::CompStatus::Active => CompStatus::Active,
            pricer_engine::CompStatus::Sold => CompStatus::Sold,
        },
        ended_at: record.ended_at,
        sold_date: record.sold_date,
    }
}
