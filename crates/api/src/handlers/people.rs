//! Handlers for the `/people` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use forecast_core::error::CoreError;
use forecast_core::types::DbId;
use forecast_db::models::person::{CreatePerson, Person, UpdatePerson};
use forecast_db::repositories::PersonRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/people
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    input.validate()?;
    let person = PersonRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /api/v1/people
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = PersonRepo::list(&state.pool).await?;
    Ok(Json(people))
}

/// GET /api/v1/people/departments
pub async fn departments(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let departments = PersonRepo::departments(&state.pool).await?;
    Ok(Json(departments))
}

/// GET /api/v1/people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Person>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(person))
}

/// PUT /api/v1/people/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<Person>> {
    input.validate()?;
    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(person))
}

/// DELETE /api/v1/people/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PersonRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))
    }
}
