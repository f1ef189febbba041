use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;

use crate::shared::api::ApiResponse;

/// Largest admin payload accepted; a whole projects section fits comfortably.
pub const MAX_JSON_BYTES: usize = 512 * 1024;

/// Body errors answer in the same envelope as every other failure.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BYTES)
        .error_handler(|err, _req| {
            let response = match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    ApiResponse::error(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "PAYLOAD_TOO_LARGE",
                        &err.to_string(),
                    )
                }
                _ => ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
            };
            actix_web::error::InternalError::from_response(err, response).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{post, test, web, App, HttpResponse, Responder};
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    struct Body {
        #[allow(dead_code)]
        name: String,
    }

    #[post("/echo")]
    async fn echo(_body: web::Json<Body>) -> impl Responder {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_malformed_json_uses_error_envelope() {
        let app =
            test::init_service(App::new().app_data(custom_json_config()).service(echo)).await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_oversized_body_rejected() {
        let app =
            test::init_service(App::new().app_data(custom_json_config()).service(echo)).await;

        let name = "x".repeat(MAX_JSON_BYTES + 1);
        let req = test::TestRequest::post()
            .uri("/echo")
            .set_json(serde_json::json!({ "name": name }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 413);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }
}
