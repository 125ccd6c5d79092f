use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::directory::ActivityDirectory;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RosterParams {
    // Unvalidated on purpose; the empty string is an accepted identifier.
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RosterMessage {
    pub message: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(params): Query<RosterParams>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<RosterMessage>, ApiError> {
    if let Err(e) = directory.enroll(&activity_name, &params.email) {
        warn!("Signup rejected for {}: {}", activity_name, e);
        return Err(e.into());
    }
    Ok(Json(RosterMessage {
        message: format!("Signed up {} for {}", params.email, activity_name),
    }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(params): Query<RosterParams>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<RosterMessage>, ApiError> {
    if let Err(e) = directory.withdraw(&activity_name, &params.email) {
        warn!("Unregister rejected for {}: {}", activity_name, e);
        return Err(e.into());
    }
    Ok(Json(RosterMessage {
        message: format!("Unregistered {} from {}", params.email, activity_name),
    }))
}
