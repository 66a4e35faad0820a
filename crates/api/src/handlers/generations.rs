//! Handlers for the calendar generation lifecycle.
//!
//! Routes:
//! - `POST   /generations`                — create a generation
//! - `GET    /generations`                — list the caller's generations
//! - `GET    /generations/{id}`           — generation + stored months
//! - `DELETE /generations/{id}`           — delete a generation
//! - `POST   /generations/{id}/preview`   — run the preview phase (synchronous)
//! - `POST   /generations/{id}/purchase`  — start the full run (background)

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use pawprints_core::error::CoreError;
use pawprints_core::types::DbId;
use pawprints_db::models::generation::{
    CreateGenerationRequest, FullRunAccepted, Generation, GenerationDetail, PreviewResponse,
};
use pawprints_db::models::status::GenerationStatus;
use pawprints_db::repositories::{CalendarRepo, GenerationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/generations
///
/// Creates the generation record in `processing_preview`. The caller follows
/// up with `POST /{id}/preview` to produce the free month-1 image.
pub async fn create_generation(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateGenerationRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let generation =
        GenerationRepo::create(&state.pool, user.user_id, &user.email, &input).await?;

    tracing::info!(
        generation_id = generation.id,
        user_id = user.user_id,
        style = %generation.artist_style,
        photos = generation.photo_urls.0.len(),
        "Generation created",
    );

    Ok(Json(DataResponse { data: generation }))
}

/// GET /api/v1/generations
pub async fn list_generations(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let generations = GenerationRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: generations }))
}

/// GET /api/v1/generations/{id}
///
/// The polling read path: status plus every month stored so far. A partial
/// result still exposes all successfully generated months.
pub async fn get_generation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(generation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let generation = load_owned(&state, &user, generation_id).await?;
    let months = CalendarRepo::list_for_generation(&state.pool, generation_id).await?;

    let status = generation.status_str();
    Ok(Json(DataResponse {
        data: GenerationDetail {
            generation,
            status,
            months,
        },
    }))
}

/// DELETE /api/v1/generations/{id}
///
/// Deleting does not cancel an in-flight full run; the run's final status
/// write simply becomes a no-op once the row is gone.
pub async fn delete_generation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(generation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    load_owned(&state, &user, generation_id).await?;
    GenerationRepo::delete(&state.pool, generation_id).await?;

    tracing::info!(generation_id, user_id = user.user_id, "Generation deleted");
    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": true }),
    }))
}

/// POST /api/v1/generations/{id}/preview
///
/// Runs the preview phase inside the request: describe the photos (once),
/// generate and store month 1, move to `awaiting_purchase`. Failures surface
/// directly as the response — preview is the interactive phase.
pub async fn start_preview(
    State(state): State<AppState>,
    user: AuthUser,
    Path(generation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    load_owned(&state, &user, generation_id).await?;

    let outcome = state.orchestrator.run_preview(generation_id).await?;

    Ok(Json(DataResponse {
        data: PreviewResponse {
            generation_id,
            status: GenerationStatus::AwaitingPurchase.as_str(),
            image_url: outcome.image_url,
        },
    }))
}

/// POST /api/v1/generations/{id}/purchase
///
/// Starts the full run as a detached background task and returns
/// immediately. Progress is observable only by polling
/// `GET /generations/{id}`.
pub async fn purchase(
    State(state): State<AppState>,
    user: AuthUser,
    Path(generation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let generation = load_owned(&state, &user, generation_id).await?;

    match generation.status() {
        Some(GenerationStatus::ProcessingFull) => {
            return Err(AppError::Core(CoreError::Conflict(
                "Full run already in progress".to_string(),
            )));
        }
        Some(status) if status.is_terminal() => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Generation is already {}",
                status.as_str()
            ))));
        }
        _ => {}
    }

    // Fire-and-forget: the handle is dropped, the task outlives this request.
    state.orchestrator.clone().spawn_full_run(generation_id);

    tracing::info!(generation_id, user_id = user.user_id, "Full run started");
    Ok(Json(DataResponse {
        data: FullRunAccepted {
            generation_id,
            status: GenerationStatus::ProcessingFull.as_str(),
        },
    }))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Load a generation and verify the caller owns it.
async fn load_owned(
    state: &AppState,
    user: &AuthUser,
    generation_id: DbId,
) -> AppResult<Generation> {
    let generation = GenerationRepo::find_by_id(&state.pool, generation_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Generation",
            id: generation_id,
        }))?;

    if generation.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Generation belongs to another user".to_string(),
        )));
    }
    Ok(generation)
}
