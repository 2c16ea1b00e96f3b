//! HTTP + WebSocket API for VibeCheckr
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /analyze - Analyze text, store in history
//! - GET /history - List (filtered) history
//! - DELETE /history - Clear history
//! - GET /history/export - Download history as JSON or CSV
//! - GET /analytics - Aggregate statistics
//! - GET /samples - Built-in sample texts
//! - WS /ws - Live analysis feed

use axum::{
    extract::{Query, State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

use crate::core::{
    export_records, AnalysisHistory, ExportFormat, HistoryFilter,
    SampleText, SentimentAnalyzer, SAMPLE_TEXTS,
};
use crate::types::{AnalysisContext, AnalysisRecord, Sentiment, SentimentStats};

/// App state
pub struct AppState {
    pub analyzer: SentimentAnalyzer<'static>,
    pub history: RwLock<AnalysisHistory>,
    pub update_tx: broadcast::Sender<AnalysisRecord>,
    /// Written after every change when set
    pub history_file: Option<PathBuf>,
}

impl AppState {
    /// Save the history if a file is attached. Failures are logged only.
    fn persist(&self, history: &AnalysisHistory) {
        if let Some(path) = &self.history_file {
            if let Err(reason) = history.save(path) {
                warn!(code = reason.code(), path = %path.display(), "history not persisted");
            }
        }
    }
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    /// Free-form tag; unknown values mean no context
    #[serde(default)]
    pub context: Option<String>,
}

/// History query parameters
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub search: Option<String>,
    pub sentiment: Option<String>,
    pub context: Option<String>,
}

impl HistoryQuery {
    fn to_filter(&self) -> HistoryFilter {
        HistoryFilter {
            search: self.search.clone(),
            sentiment: self.sentiment.as_deref().and_then(Sentiment::from_tag),
            context: self.context.as_deref().and_then(AnalysisContext::from_tag),
        }
    }
}

/// Export query parameters
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub history_size: usize,
}

/// Clear history response
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub cleared: usize,
}

/// Create the API router with an empty history
pub fn create_router() -> Router {
    create_router_with_history(AnalysisHistory::new())
}

/// Create the API router around an existing, in-memory history
pub fn create_router_with_history(history: AnalysisHistory) -> Router {
    create_router_with_store(history, None)
}

/// Create the API router around an existing history, saving it to
/// `history_file` after each analysis or clear
pub fn create_router_with_store(history: AnalysisHistory, history_file: Option<PathBuf>) -> Router {
    let (tx, _) = broadcast::channel(100);
    let state = Arc::new(AppState {
        analyzer: SentimentAnalyzer::new(),
        history: RwLock::new(history),
        update_tx: tx,
        history_file,
    });

    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze_text))
        .route("/history", get(list_history).delete(clear_history))
        .route("/history/export", get(export_history))
        .route("/analytics", get(analytics))
        .route("/samples", get(samples))
        .route("/ws", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let history = state.history.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        history_size: history.len(),
    })
}

/// Analyze text and record it
async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalysisRecord> {
    let context = req.context.as_deref().and_then(AnalysisContext::from_tag);
    if context.is_none() {
        if let Some(tag) = req.context.as_deref() {
            debug!(tag, "ignoring unknown context tag");
        }
    }

    let record = state.analyzer.analyze(&req.text, context);
    debug!(
        id = %record.id,
        sentiment = %record.sentiment,
        confidence = record.confidence,
        words = record.word_count,
        "text analyzed"
    );

    {
        let mut history = state.history.write().await;
        history.push(record.clone());
        state.persist(&history);
    }
    // No subscribers is fine
    let _ = state.update_tx.send(record.clone());

    Json(record)
}

/// List history, newest first
async fn list_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<AnalysisRecord>> {
    let filter = query.to_filter();
    let history = state.history.read().await;
    Json(history.filter(&filter).into_iter().cloned().collect())
}

/// Clear history
async fn clear_history(State(state): State<Arc<AppState>>) -> Json<ClearResponse> {
    let mut history = state.history.write().await;
    let cleared = history.clear();
    state.persist(&history);
    info!(cleared, "history cleared");
    Json(ClearResponse { cleared })
}

/// Export history as a download
async fn export_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let format = ExportFormat::parse(query.format.as_deref().unwrap_or("json")).map_err(|reason| {
        warn!(code = reason.code(), "export rejected");
        status_for(reason.is_client_error())
    })?;

    let history = state.history.read().await;
    let body = export_records(history.records(), format).map_err(|reason| {
        warn!(code = reason.code(), "export failed");
        status_for(reason.is_client_error())
    })?;

    let disposition = format!("attachment; filename=\"{}\"", format.file_name(Utc::now()));
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// Aggregate statistics over the history
async fn analytics(State(state): State<Arc<AppState>>) -> Json<SentimentStats> {
    let history = state.history.read().await;
    Json(SentimentStats::from_records(history.records()))
}

/// Built-in sample texts
async fn samples() -> Json<&'static [SampleText]> {
    Json(SAMPLE_TEXTS)
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let rx = state.update_tx.subscribe();
    ws.on_upgrade(move |socket| handle_websocket(socket, rx))
}

/// Forward every new record until either side hangs up
async fn handle_websocket(socket: WebSocket, mut rx: broadcast::Receiver<AnalysisRecord>) {
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            update = rx.recv() => {
                let record = match update {
                    Ok(record) => record,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "websocket subscriber lagging");
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                let json = serde_json::to_string(&record).unwrap_or_default();
                if sender.send(Message::Text(json)).await.is_err() {
                    break;
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }
    debug!("websocket closed");
}

fn status_for(client_error: bool) -> StatusCode {
    if client_error {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Run the API server
pub async fn run_server(
    addr: &str,
    history: AnalysisHistory,
    history_file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &history_file {
        info!(path = %path.display(), "persisting history");
    }
    let router = create_router_with_store(history, history_file);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "VibeCheckr API running");
    info!("  GET    /health          - Health check");
    info!("  POST   /analyze         - Analyze text");
    info!("  GET    /history         - List history");
    info!("  DELETE /history         - Clear history");
    info!("  GET    /history/export  - Export history");
    info!("  GET    /analytics       - Statistics");
    info!("  GET    /samples         - Sample texts");
    info!("  WS     /ws              - Live updates");
    axum::serve(listener, router).await?;
    Ok(())
}
