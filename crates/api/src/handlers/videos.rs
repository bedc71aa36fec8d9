//! Handlers for the `/videos` resource.

use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use darkstudio_core::error::CoreError;
use darkstudio_core::plan::{build_plan, export_filename, generate_video_id, GenerationPlan};
use darkstudio_core::request::{validate_request, GenerationRequest};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::store::PlanSummary;

/// POST /api/v1/videos
///
/// Validate a generation request, derive the full plan, and record it in
/// the history. When `GENERATION_DELAY_MS` is configured, the handler
/// sleeps before responding; the plan derivation itself is instantaneous.
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerationRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<GenerationPlan>>)> {
    validate_request(&input)?;

    if state.config.generation_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.generation_delay_ms)).await;
    }

    let video_id = generate_video_id();
    let plan = build_plan(&input, video_id, Utc::now());

    tracing::info!(
        video_id = %plan.video_id,
        scenes = plan.script.scene_count,
        style = plan.script.style.as_str(),
        "Generated video plan"
    );

    state.store.insert(plan.clone()).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: plan })))
}

/// GET /api/v1/videos
///
/// History of generated plans as summaries, newest first.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PlanSummary>>>> {
    let summaries = state.store.list().await;
    Ok(Json(DataResponse { data: summaries }))
}

/// GET /api/v1/videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<GenerationPlan>>> {
    let plan = state
        .store
        .get(&id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id,
        }))?;
    Ok(Json(DataResponse { data: plan }))
}

/// GET /api/v1/videos/{id}/export
///
/// Download the stored plan verbatim as a pretty-printed JSON attachment.
pub async fn export(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let plan = state
        .store
        .get(&id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id,
        }))?;

    let body = serde_json::to_string_pretty(&plan)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize plan: {e}")))?;

    Ok((
        StatusCode::OK,
        [
            (axum::http::header::CONTENT_TYPE, "application/json".to_string()),
            (
                axum::http::header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export_filename(&plan.video_id)),
            ),
        ],
        body,
    ))
}
