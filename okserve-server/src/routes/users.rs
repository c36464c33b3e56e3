//! Users endpoint
//!
//! Always answers with the same success payload. Method, headers and body
//! of the request are ignored.

use axum::Json;
use serde::Serialize;

/// Path the handler is registered on
pub const USERS_PATH: &str = "/api/v1/users";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UsersResponse {
    pub result: &'static str,
}

impl UsersResponse {
    pub const OK: Self = Self { result: "ok" };
}

pub async fn users_handler() -> Json<UsersResponse> {
    Json(UsersResponse::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::header, response::IntoResponse};

    #[test]
    fn test_payload_serializes_compact() {
        let body = serde_json::to_vec(&UsersResponse::OK).unwrap();
        assert_eq!(body, br#"{"result":"ok"}"#);
        assert_eq!(body.len(), 15);
    }

    #[tokio::test]
    async fn test_handler_sets_json_content_type() {
        let response = users_handler().await.into_response();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }
}
