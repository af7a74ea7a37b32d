use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persistence::repositories::RepositoryError;
use persistence::StoreError;
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request body failed validation. `details` lists every failing field.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<ValidationDetail>,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    /// The upstream relay rejected or failed a submission that was stored locally.
    #[error("Bad gateway: {message}")]
    BadGateway {
        message: String,
        lead_id: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lead_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut lead_id = None;
        let mut details = None;
        let (status, error_code, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Validation {
                message,
                details: fields,
            } => {
                details = Some(fields);
                (StatusCode::BAD_REQUEST, "validation_error", message)
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
            ApiError::BadGateway {
                message,
                lead_id: id,
            } => {
                lead_id = id;
                (StatusCode::BAD_GATEWAY, "bad_gateway", message)
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details,
            lead_id,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::QuotaExceeded { key, size, limit } => ApiError::Internal(format!(
                "Storage quota exceeded for '{}' ({} > {} bytes)",
                key, size, limit
            )),
            other => ApiError::Internal(format!("Storage error: {}", other)),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Store(e) => e.into(),
            RepositoryError::SlugConflict { slug, existing_id } => ApiError::Conflict(format!(
                "Slug '{}' is already used by page {}",
                slug, existing_id
            )),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details = Vec::new();
        collect_validation_details("", &errors, &mut details);
        details.sort_by(|a, b| a.field.cmp(&b.field));

        let message = match details.len() {
            0 => "Invalid request".to_string(),
            1 => details[0].message.clone(),
            n => format!("{} validation errors", n),
        };

        ApiError::Validation { message, details }
    }
}

/// Flattens nested validation errors into dotted field paths such as
/// `contact.email`, `seo.title` or `stats[1].label`.
fn collect_validation_details(
    prefix: &str,
    errors: &ValidationErrors,
    out: &mut Vec<ValidationDetail>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| ValidationDetail {
                    field: path.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", path)),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_details(&path, nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validation_details(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::Validate;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                ApiError::Validation {
                    message: "x".into(),
                    details: vec![],
                },
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ApiError::BadGateway {
                    message: "x".into(),
                    lead_id: None,
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = ApiError::Internal("disk on fire".into()).into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn test_bad_gateway_carries_lead_id() {
        let response = ApiError::BadGateway {
            message: "Relay failed".into(),
            lead_id: Some("lead-1".into()),
        }
        .into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], "bad_gateway");
        assert_eq!(body["lead_id"], "lead-1");
    }

    #[test]
    fn test_slug_conflict_maps_to_conflict() {
        let err: ApiError = RepositoryError::SlugConflict {
            slug: "/about".into(),
            existing_id: "p1".into(),
        }
        .into();
        assert!(matches!(err, ApiError::Conflict(msg) if msg.contains("/about")));
    }

    #[test]
    fn test_quota_maps_to_internal() {
        let err: ApiError = StoreError::QuotaExceeded {
            key: "jaitea_pages".into(),
            size: 10,
            limit: 5,
        }
        .into();
        assert!(matches!(err, ApiError::Internal(msg) if msg.contains("quota")));
    }

    #[derive(Validate)]
    struct NameForm {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[derive(Validate)]
    struct ContactForm {
        #[validate(email(message = "Email is invalid"))]
        email: String,
    }

    #[derive(Validate)]
    struct ProfileForm {
        #[validate(length(min = 1, message = "Title is required"))]
        title: String,
        #[validate(nested)]
        contact: ContactForm,
    }

    #[test]
    fn test_from_validation_errors() {
        let errors = NameForm {
            name: String::new(),
        }
        .validate()
        .unwrap_err();
        let err: ApiError = errors.into();
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[tokio::test]
    async fn test_nested_validation_errors_have_dotted_paths() {
        let errors = ProfileForm {
            title: String::new(),
            contact: ContactForm {
                email: "not-an-email".into(),
            },
        }
        .validate()
        .unwrap_err();
        let err: ApiError = errors.into();

        let body = body_json(err.into_response()).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "2 validation errors");
        assert_eq!(body["details"][0]["field"], "contact.email");
        assert_eq!(body["details"][0]["message"], "Email is invalid");
        assert_eq!(body["details"][1]["field"], "title");
        assert_eq!(body["details"][1]["message"], "Title is required");
    }

    #[tokio::test]
    async fn test_non_validation_errors_omit_details() {
        let body = body_json(ApiError::NotFound("Page not found".into()).into_response()).await;
        assert!(body.get("details").is_none());
    }
}
