//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use forecast_core::error::CoreError;
use forecast_core::types::DbId;
use forecast_db::models::client::{Client, CreateClient, UpdateClient};
use forecast_db::repositories::ClientRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    input.validate()?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    input.validate()?;
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}
