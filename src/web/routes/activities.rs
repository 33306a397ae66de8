use axum::{extract::State, Json};

use crate::database::activities_repo::{ActivitiesSnapshot, ActivitiesStore};
use crate::services::activities_service;

pub async fn activities_handler(State(store): State<ActivitiesStore>) -> Json<ActivitiesSnapshot> {
    Json(activities_service::list_activities(&store).await)
}
