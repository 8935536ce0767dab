use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use sprout_codegen::PreviewFile;
use sprout_codegen_spring::Generator;
use sprout_manifest::ProjectConfig;
use tracing::{info, warn};

use crate::{AppState, error::ApiError, store::ProjectRecord};

const BODY_NAME: &str = "request body";

/// Decode and validate a configuration payload, reporting every issue.
fn parse_config(body: &[u8]) -> Result<ProjectConfig, ApiError> {
    let doc: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        ApiError::InvalidConfig(vec![sprout_manifest::Issue::new(
            "",
            sprout_manifest::IssueCode::InvalidSyntax,
            format!("{BODY_NAME} is not valid JSON: {e}"),
        )])
    })?;
    Ok(sprout_manifest::from_value(doc)?)
}

/// `Content-Disposition` naming the archive after the artifact.
fn attachment(artifact_id: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&format!("attachment; filename={artifact_id}.zip")).map_err(|e| {
        ApiError::Generation(format!(
            "artifactId '{}' is not a valid file name: {e}",
            artifact_id.escape_debug()
        ))
    })
}

fn log_diagnostics(generator: &Generator<'_>) {
    for diagnostic in generator.diagnostics() {
        warn!(lint = %diagnostic.lint, "{diagnostic}");
    }
}

pub(crate) async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn generate_project(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let config = parse_config(&body)?;
    let disposition = attachment(&config.artifact_id)?;
    let record = state.store.create(config);
    let config = &record.config;

    let generator = Generator::new(config);
    log_diagnostics(&generator);
    let archive = generator
        .archive()
        .map_err(|e| ApiError::Generation(format!("{e:#}")))?;

    info!(
        id = record.id,
        artifact_id = %config.artifact_id,
        entities = config.entities.len(),
        bytes = archive.len(),
        "generated project"
    );

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/zip")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        archive,
    )
        .into_response())
}

pub(crate) async fn preview_project(body: Bytes) -> Result<Json<Vec<PreviewFile>>, ApiError> {
    let config = parse_config(&body)?;
    let generator = Generator::new(&config);
    log_diagnostics(&generator);
    Ok(Json(generator.preview()))
}

pub(crate) async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectRecord>, ApiError> {
    let id: u64 = id
        .trim()
        .parse()
        .map_err(|_| ApiError::InvalidId(id.clone()))?;
    state
        .store
        .get(id)
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_json_is_a_single_root_issue() {
        match parse_config(b"{ not json") {
            Err(ApiError::InvalidConfig(issues)) => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].path, "");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_attachment_names_the_archive() {
        let value = attachment("demo").unwrap();
        assert_eq!(value, "attachment; filename=demo.zip");
    }

    #[test]
    fn test_attachment_rejects_control_characters() {
        match attachment("demo\u{7}x") {
            Err(ApiError::Generation(cause)) => assert!(cause.contains("demo\\u{7}x")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_schema_issues_are_all_reported() {
        match parse_config(br#"{ "groupId": "com.example" }"#) {
            Err(ApiError::InvalidConfig(issues)) => {
                assert!(issues.iter().any(|i| i.path == "artifactId"));
                assert!(issues.iter().any(|i| i.path == "entities"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
