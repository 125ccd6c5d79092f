use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;

use crate::directory::ActivityDirectory;
use crate::models::Activity;

pub async fn activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<BTreeMap<String, Activity>> {
    Json(directory.list())
}
