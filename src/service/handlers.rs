use super::corpus::TextGenerator;
use super::protocol::{
    DataSnapshot, GenerateTextParams, GenerateTextResponse, SetDataRequest, SetDataResponse,
};
use crate::coordinator::coordinator::ExecutionCoordinator;
use crate::store::memory::ResultStore;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_set_data(
    Extension(coordinator): Extension<Arc<ExecutionCoordinator>>,
    Json(req): Json<SetDataRequest>,
) -> (StatusCode, Json<SetDataResponse>) {
    match coordinator.set_data(&req.data).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SetDataResponse {
                success: true,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to process document: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SetDataResponse {
                    success: false,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

pub async fn handle_get_data(
    Extension(store): Extension<Arc<ResultStore>>,
) -> Json<DataSnapshot> {
    Json(DataSnapshot {
        entries: store.snapshot(),
    })
}

pub async fn handle_generate_text(
    Extension(generator): Extension<Arc<TextGenerator>>,
    Query(params): Query<GenerateTextParams>,
) -> Json<GenerateTextResponse> {
    Json(GenerateTextResponse {
        text: generator.generate(params.length),
    })
}
