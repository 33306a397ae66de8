use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::database::activities_repo::ActivitiesStore;
use crate::services::activities_service::{self, ActivityError};

type ApiResult = Result<Json<Value>, Response>;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    State(store): State<ActivitiesStore>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult {
    let Path(activity_name) = path.map_err(invalid_path)?;
    let Query(query) = query.map_err(invalid_query)?;

    activities_service::signup(&store, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            e.into_response()
        })
}

pub async fn activity_unregister_handler(
    path: Result<Path<String>, PathRejection>,
    State(store): State<ActivitiesStore>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult {
    let Path(activity_name) = path.map_err(invalid_path)?;
    let Query(query) = query.map_err(invalid_query)?;

    activities_service::unregister(&store, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "unregister rejected");
            e.into_response()
        })
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status = match self {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadyRegistered | ActivityError::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
        };
        detail_response(status, self.to_string())
    }
}

fn invalid_path(rejection: PathRejection) -> Response {
    detail_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

fn invalid_query(rejection: QueryRejection) -> Response {
    detail_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

fn detail_response(status: StatusCode, detail: String) -> Response {
    (status, Json(serde_json::json!({ "detail": detail }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn status_and_body(e: ActivityError) -> (StatusCode, Value) {
        let response = e.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn errors_map_to_client_statuses() {
        let (status, body) = status_and_body(ActivityError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Activity not found");

        let (status, body) = status_and_body(ActivityError::AlreadyRegistered).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("already signed up"));

        let (status, body) = status_and_body(ActivityError::NotRegistered).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("not registered"));
    }
}
