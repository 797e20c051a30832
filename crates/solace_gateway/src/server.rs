use crate::types::{ChatRequest, ChatResponse, HealthResponse};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use solace_engine::ResponsePipeline;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

/// Shared state for the gateway server.
#[derive(Clone)]
struct AppState {
    pipeline: Arc<ResponsePipeline>,
}

/// The gateway HTTP server.
///
/// Exposes the response pipeline over:
/// - `POST /chat` — one user message in, one reply out
/// - `GET /health` — liveness plus engine stats
pub struct GatewayServer {
    pipeline: Arc<ResponsePipeline>,
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(pipeline: Arc<ResponsePipeline>, host: &str, port: u16) -> Self {
        Self {
            pipeline,
            host: host.to_string(),
            port,
        }
    }

    /// Start the server. This spawns a background task and returns the join handle.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        let state = AppState {
            pipeline: self.pipeline,
        };

        let app = Router::new()
            .route("/health", get(health))
            .route("/chat", post(chat))
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr = format!("{}:{}", self.host, self.port);

        tokio::spawn(async move {
            let listener = match tokio::net::TcpListener::bind(&addr).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("Gateway failed to bind {}: {}", addr, e);
                    return;
                }
            };
            tracing::info!("Gateway listening on {}", addr);
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Gateway server error: {}", e);
            }
        })
    }
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        turns: state.pipeline.turn_count().await,
        model_trained: state.pipeline.model_trained_on().is_some(),
    })
}

/// POST /chat — run one utterance through the pipeline.
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    if req.message.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, "chat request received");

    let reply = state.pipeline.process(&req.message).await;
    if reply.is_crisis {
        tracing::warn!(%request_id, "crisis response issued");
    }
    Ok(Json(ChatResponse::from_reply(request_id, reply)))
}
