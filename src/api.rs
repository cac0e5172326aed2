//! Subscription endpoint client, shared by the exit popup and the footer
//! newsletter form.

use gloo_net::http::Request;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::dom;

#[derive(Serialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub source: &'static str,
}

#[derive(Deserialize)]
pub struct SubscribeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

const GENERIC_ERROR: &str = "Произошла ошибка. Попробуйте позже.";
const NETWORK_ERROR: &str = "Сеть недоступна. Проверьте подключение к интернету.";

/// Posts one subscription request. `Ok` carries the server message when one
/// was sent; `Err` carries user-presentable text. Non-2xx statuses,
/// `success: false` bodies and unparsable bodies are all failures. There is
/// no retry and no client-side timeout.
pub async fn subscribe(email: &str, source: &'static str) -> Result<Option<String>, String> {
    let url = format!("{}{}", config::get_backend_url(), config::SUBSCRIBE_PATH);
    let mut request = Request::post(&url);
    if let Some(token) = dom::csrf_token() {
        request = request.header("X-CSRFToken", &token);
    }
    let request = request
        .json(&SubscribeRequest {
            email: email.to_string(),
            source,
        })
        .map_err(|e| {
            warn!("failed to encode subscription request: {}", e);
            GENERIC_ERROR.to_string()
        })?;

    match request.send().await {
        Ok(response) => {
            let ok = response.ok();
            match response.json::<SubscribeResponse>().await {
                Ok(body) if ok && body.success => Ok(body.message),
                Ok(body) => Err(body.error.unwrap_or_else(|| GENERIC_ERROR.to_string())),
                Err(e) => {
                    warn!("unexpected subscription response: {}", e);
                    Err(GENERIC_ERROR.to_string())
                }
            }
        }
        Err(e) => {
            warn!("subscription request failed: {}", e);
            Err(NETWORK_ERROR.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_with_optional_fields() {
        let body: SubscribeResponse =
            serde_json::from_str(r#"{"success": true, "created": true, "message": "Спасибо за подписку!"}"#)
                .unwrap();
        assert!(body.success);
        assert_eq!(body.message.as_deref(), Some("Спасибо за подписку!"));
        assert_eq!(body.error, None);

        let body: SubscribeResponse =
            serde_json::from_str(r#"{"success": false, "error": "Email обязателен"}"#).unwrap();
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Email обязателен"));
    }

    #[test]
    fn request_serializes_email_and_source() {
        let json = serde_json::to_string(&SubscribeRequest {
            email: "user@example.com".into(),
            source: "popup",
        })
        .unwrap();
        assert_eq!(json, r#"{"email":"user@example.com","source":"popup"}"#);
    }
}
