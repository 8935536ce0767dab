use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sprout_manifest::Issue;

/// Every failure the HTTP boundary reports, mapped onto the JSON error contract.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid project configuration ({} issues)", .0.len())]
    InvalidConfig(Vec<Issue>),
    #[error("invalid project id '{0}'")]
    InvalidId(String),
    #[error("project {0} not found")]
    NotFound(u64),
    #[error("failed to generate project: {0}")]
    Generation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidConfig(_) | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Box<sprout_manifest::Error>> for ApiError {
    fn from(err: Box<sprout_manifest::Error>) -> Self {
        ApiError::InvalidConfig(err.issues())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::InvalidConfig(issues) => json!({
                "message": "Invalid project configuration",
                "errors": issues,
            }),
            ApiError::InvalidId(_) => json!({ "message": "Invalid project ID" }),
            ApiError::NotFound(_) => json!({ "message": "Project not found" }),
            ApiError::Generation(cause) => {
                tracing::error!(error = %cause, "project generation failed");
                json!({
                    "message": "Failed to generate project",
                    "error": cause,
                })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use sprout_manifest::IssueCode;

    use super::*;

    #[test]
    fn test_status_mapping() {
        let invalid = ApiError::InvalidConfig(vec![Issue::new(
            "artifactId",
            IssueCode::Required,
            "missing",
        )]);
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidId("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound(7).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Generation("disk full".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_generation_failure_body() {
        use http_body_util::BodyExt;

        let response = ApiError::Generation("disk full".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({ "message": "Failed to generate project", "error": "disk full" })
        );
    }

    #[test]
    fn test_manifest_error_becomes_invalid_config() {
        let err = sprout_manifest::parse_str("{").unwrap_err();
        match ApiError::from(err) {
            ApiError::InvalidConfig(issues) => assert_eq!(issues.len(), 1),
            other => panic!("unexpected {other:?}"),
        }
    }
}
