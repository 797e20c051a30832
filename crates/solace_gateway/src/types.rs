use serde::{Deserialize, Serialize};
use solace_core::{EmotionLabel, Reply};
use uuid::Uuid;

/// POST /chat request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /chat response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub request_id: Uuid,
    pub response: String,
    pub emotion: EmotionLabel,
    pub is_crisis: bool,
}

impl ChatResponse {
    pub fn from_reply(request_id: Uuid, reply: Reply) -> Self {
        Self {
            request_id,
            response: reply.text,
            emotion: reply.emotion,
            is_crisis: reply.is_crisis,
        }
    }
}

/// GET /health response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub turns: usize,
    pub model_trained: bool,
}
