// ═══════════════════════════════════════════════════════════════════════
// Worker — turns request envelopes into response envelopes
//
// Every failure becomes an ERROR response carrying a message; nothing a
// request contains can take the worker down.
// ═══════════════════════════════════════════════════════════════════════

use crate::message::*;
use std::sync::Arc;
use tracing::{debug, info, warn};
use ur_advisor::{Advisor, AdvisorError};

pub struct Worker {
    advisor: Arc<dyn Advisor>,
}

impl Worker {
    pub fn new(advisor: Arc<dyn Advisor>) -> Self {
        Worker { advisor }
    }

    /// Create a worker and load its advisor straight away. Returns the
    /// announcement to send to the host (request id `init`).
    pub fn start(advisor: Arc<dyn Advisor>) -> (Self, ResponseEnvelope) {
        advisor.load();
        let announcement = ResponseEnvelope::ready(advisor.name());
        info!(advisor = advisor.name(), "worker started");
        (Worker::new(advisor), announcement)
    }

    pub fn advisor(&self) -> &dyn Advisor {
        self.advisor.as_ref()
    }

    pub fn handle(&self, request: &RequestEnvelope) -> ResponseEnvelope {
        debug!(kind = %request.kind, request_id = %request.request_id, "handling request");
        match self.process(request) {
            Ok(response) => response,
            Err(e) => {
                warn!(kind = %request.kind, request_id = %request.request_id, error = %e, "request failed");
                ResponseEnvelope::error(request.request_id.clone(), &e)
            }
        }
    }

    /// Decode one raw JSON line and handle it. Lines that are not a request
    /// envelope get an ERROR response; the request id is recovered when the
    /// line is at least a JSON object with a string `requestId`.
    pub fn handle_line(&self, line: &str) -> ResponseEnvelope {
        match serde_json::from_str::<RequestEnvelope>(line) {
            Ok(request) => self.handle(&request),
            Err(e) => {
                let request_id = serde_json::from_str::<serde_json::Value>(line)
                    .ok()
                    .and_then(|v| v.get("requestId").and_then(|id| id.as_str()).map(str::to_string))
                    .unwrap_or_default();
                let error = WorkerError::Malformed(e.to_string());
                warn!(request_id = %request_id, error = %error, "malformed request line");
                ResponseEnvelope::error(request_id, &error)
            }
        }
    }

    fn process(&self, request: &RequestEnvelope) -> Result<ResponseEnvelope, WorkerError> {
        match Request::parse(request)? {
            Request::LoadModel => {
                let info = self.advisor.load();
                Ok(ResponseEnvelope::model_loaded(request.request_id.clone(), info))
            }
            Request::Analyze(state) => {
                // A missing payload is reported even when the advisor is not loaded yet.
                let state = state.ok_or_else(AdvisorError::missing_state)?;
                let recommendation = self.advisor.recommend(&state)?;
                Ok(ResponseEnvelope::analysis(request.request_id.clone(), recommendation))
            }
        }
    }
}
