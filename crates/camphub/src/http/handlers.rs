//! HTTP handlers for the REST API.
//!
//! Each handler validates its input, runs one storage operation and converts
//! the result to a response DTO.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use super::dto::{
    ActivitySummary, CamperDetail, CamperRequest, CamperSummary, CreateSignupRequest,
    SignupDetail,
};
use super::error::{AppError, Resource};
use super::state::AppState;
use crate::models::{NewCamper, NewSignup};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Map an unparseable id segment to a 404, as an integer-only route would.
fn path_id(path: Result<Path<i64>, PathRejection>, resource: Resource) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(resource))
}

/// GET /
pub async fn home() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// Campers
// =============================================================================

/// GET /campers
///
/// List all campers without their signups.
pub async fn list_campers(State(state): State<AppState>) -> HandlerResult<Vec<CamperSummary>> {
    let campers = state
        .with_storage(|storage| Ok(storage.list_campers()?))
        .await?;

    Ok(Json(campers.iter().map(CamperSummary::from).collect()))
}

/// POST /campers
pub async fn create_camper(
    State(state): State<AppState>,
    payload: Result<Json<CamperRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperDetail>), AppError> {
    let Json(request) = payload?;
    let camper = NewCamper::new(request.name, request.age)?;

    let created = state
        .with_storage(move |storage| Ok(storage.insert_camper(&camper)?))
        .await?;
    info!("Created camper {}", created.id());

    Ok((StatusCode::CREATED, Json(CamperDetail::new(&created, &[]))))
}

/// GET /campers/{id}
///
/// Fetch one camper with its signups.
pub async fn get_camper(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<CamperDetail> {
    let id = path_id(id, Resource::Camper)?;

    let detail = state
        .with_storage(move |storage| {
            let camper = storage
                .get_camper(id)?
                .ok_or(AppError::NotFound(Resource::Camper))?;
            let signups = storage.camper_signups(id)?;
            Ok(CamperDetail::new(&camper, &signups))
        })
        .await?;

    Ok(Json(detail))
}

/// PATCH /campers/{id}
///
/// Replace a camper's name and age. The camper must exist before the body is
/// looked at; both fields are validated before the row is written.
pub async fn update_camper(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CamperRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperSummary>), AppError> {
    let id = path_id(id, Resource::Camper)?;
    let request = payload.map(|Json(request)| request).map_err(AppError::from);

    let camper = state
        .with_storage(move |storage| {
            let mut camper = storage
                .get_camper(id)?
                .ok_or(AppError::NotFound(Resource::Camper))?;
            let request = request?;
            camper.set_name(request.name)?;
            camper.set_age(request.age)?;
            storage.update_camper(&camper)?;
            Ok(camper)
        })
        .await?;
    info!("Updated camper {}", camper.id());

    Ok((StatusCode::ACCEPTED, Json(CamperSummary::from(&camper))))
}

// =============================================================================
// Activities
// =============================================================================

/// GET /activities
///
/// List all activities without their signups.
pub async fn list_activities(
    State(state): State<AppState>,
) -> HandlerResult<Vec<ActivitySummary>> {
    let activities = state
        .with_storage(|storage| Ok(storage.list_activities()?))
        .await?;

    Ok(Json(activities.iter().map(ActivitySummary::from).collect()))
}

/// DELETE /activities/{id}
///
/// Delete an activity together with its signups.
pub async fn delete_activity(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = path_id(id, Resource::Activity)?;

    let removed = state
        .with_storage(move |storage| {
            storage
                .delete_activity(id)?
                .ok_or(AppError::NotFound(Resource::Activity))
        })
        .await?;
    info!("Deleted activity {} and {} signups", id, removed);

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Signups
// =============================================================================

/// POST /signups
///
/// The hour is validated first; the camper and the activity must then both
/// exist.
pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<CreateSignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupDetail>), AppError> {
    let Json(request) = payload?;
    let signup = NewSignup::new(request.camper_id, request.activity_id, request.time)?;

    let detail = state
        .with_storage(move |storage| {
            let camper = storage
                .get_camper(signup.camper_id())?
                .ok_or(AppError::NotFound(Resource::Camper))?;
            let activity = storage
                .get_activity(signup.activity_id())?
                .ok_or(AppError::NotFound(Resource::Activity))?;
            let created = storage.insert_signup(&signup)?;
            Ok(SignupDetail::new(&created, &camper, &activity))
        })
        .await?;
    info!(
        "Created signup {} (camper {}, activity {})",
        detail.id, detail.camper_id, detail.activity_id
    );

    Ok((StatusCode::CREATED, Json(detail)))
}
