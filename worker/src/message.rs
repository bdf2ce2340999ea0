// ═══════════════════════════════════════════════════════════════════════
// Message payloads exchanged with the host
//
// Requests:  { "type": "LOAD_MODEL" | "ANALYZE", "data": {...}, "requestId": "..." }
// Responses: { "type": "MODEL_LOADED" | "ANALYSIS_COMPLETE" | "ERROR",
//              "requestId": "...", "data": {...} }
//
// Responses carry the request id back unchanged; the host correlates by
// id, never by arrival order.
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use ur_advisor::{AdvisorError, BattleRecommendation, ModelInfo};
use ur_engine::types::BattleState;

pub const LOAD_MODEL: &str = "LOAD_MODEL";
pub const ANALYZE: &str = "ANALYZE";

/// Request id used for the announcement sent when a worker starts.
pub const INIT_REQUEST_ID: &str = "init";

// ── Requests ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub request_id: String,
}

impl RequestEnvelope {
    pub fn load_model(request_id: impl Into<String>) -> Self {
        RequestEnvelope { kind: LOAD_MODEL.to_string(), data: Value::Null, request_id: request_id.into() }
    }

    pub fn analyze(request_id: impl Into<String>, state: &BattleState) -> Self {
        let data = serde_json::json!({ "battleState": state });
        RequestEnvelope { kind: ANALYZE.to_string(), data, request_id: request_id.into() }
    }
}

/// A request the worker knows how to serve.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    LoadModel,
    /// `None` when the payload has no (or a null) `battleState`.
    Analyze(Option<Box<BattleState>>),
}

impl Request {
    pub fn parse(envelope: &RequestEnvelope) -> Result<Request, WorkerError> {
        match envelope.kind.as_str() {
            LOAD_MODEL => Ok(Request::LoadModel),
            ANALYZE => {
                let state = match envelope.data.get("battleState") {
                    None | Some(Value::Null) => None,
                    Some(raw) => {
                        let state = BattleState::deserialize(raw).map_err(AdvisorError::invalid)?;
                        Some(Box::new(state))
                    }
                };
                Ok(Request::Analyze(state))
            }
            other => Err(WorkerError::UnknownMessage(other.to_string())),
        }
    }
}

// ── Errors ─────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkerError {
    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    #[error("Unknown message type: {0}")]
    UnknownMessage(String),

    #[error("Malformed request: {0}")]
    Malformed(String),
}

impl WorkerError {
    pub fn kind(&self) -> &'static str {
        match self {
            WorkerError::Advisor(e) => e.kind(),
            WorkerError::UnknownMessage(_) => "UnknownMessage",
            WorkerError::Malformed(_) => "MalformedRequest",
        }
    }
}

// ── Responses ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseKind {
    ModelLoaded,
    AnalysisComplete,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub request_id: String,
    pub data: ResponseData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Loaded(LoadedPayload),
    Analysis(Box<BattleRecommendation>),
    Error(ErrorPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedPayload {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_info: Option<ModelInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    pub message: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub kind: String,
}

impl ResponseEnvelope {
    pub fn model_loaded(request_id: impl Into<String>, info: ModelInfo) -> Self {
        ResponseEnvelope {
            kind: ResponseKind::ModelLoaded,
            request_id: request_id.into(),
            data: ResponseData::Loaded(LoadedPayload { success: true, model_info: Some(info), message: None }),
        }
    }

    pub fn ready(name: &str) -> Self {
        ResponseEnvelope {
            kind: ResponseKind::ModelLoaded,
            request_id: INIT_REQUEST_ID.to_string(),
            data: ResponseData::Loaded(LoadedPayload {
                success: true,
                model_info: None,
                message: Some(format!("{} ready", name)),
            }),
        }
    }

    pub fn analysis(request_id: impl Into<String>, recommendation: BattleRecommendation) -> Self {
        ResponseEnvelope {
            kind: ResponseKind::AnalysisComplete,
            request_id: request_id.into(),
            data: ResponseData::Analysis(Box::new(recommendation)),
        }
    }

    pub fn error(request_id: impl Into<String>, error: &WorkerError) -> Self {
        ResponseEnvelope {
            kind: ResponseKind::Error,
            request_id: request_id.into(),
            data: ResponseData::Error(ErrorPayload {
                message: error.to_string(),
                error: ErrorDetail { kind: error.kind().to_string() },
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ResponseKind::Error
    }

    pub fn to_json(&self, pretty: bool) -> String {
        let encoded = if pretty { serde_json::to_string_pretty(self) } else { serde_json::to_string(self) };
        encoded.unwrap_or_else(|e| format!(r#"{{"type":"ERROR","requestId":"","data":{{"message":"{}"}}}}"#, e))
    }
}
