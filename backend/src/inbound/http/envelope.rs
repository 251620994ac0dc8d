//! Response envelope shared by every `/api/v1` endpoint.
//!
//! Success: `{"success":true,"data":...}`.
//! Failure: `{"success":false,"error":{"code":..,"message":..}}`.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;

/// Successful response body wrapping `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// Endpoint payload.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap `data` in a success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// Render as a `200 OK` JSON response.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

/// Failed response body wrapping a domain error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// What went wrong.
    pub error: Error,
}

impl ApiErrorResponse {
    /// Wrap `error` in a failure envelope.
    pub fn new(error: Error) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

/// `200 OK` with `data` in a success envelope.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    ApiResponse::ok(data).into_response()
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    #[rstest]
    #[actix_web::test]
    async fn ok_wraps_data() {
        let response = ok(json!([1, 2]));
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body()).await.expect("body");
        let value: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(value, json!({"success": true, "data": [1, 2]}));
    }

    #[rstest]
    fn error_envelope_marks_failure() {
        let value = serde_json::to_value(ApiErrorResponse::new(Error::forbidden("denied")))
            .expect("serialise");
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"]["code"], json!("forbidden"));
        assert_eq!(value["error"]["message"], json!("denied"));
    }
}
