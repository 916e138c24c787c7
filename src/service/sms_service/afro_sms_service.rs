use super::{AfroSmsServiceConfig, SmsDelivery, SmsError, SmsService};
use crate::domain::SmsStatus;
use axum::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct SendRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    sender: &'a str,
    to: &'a str,
    message: &'a str,
}

///
/// [SmsService] using Afro Message HTTP API
///
pub struct AfroSmsService {
    config: AfroSmsServiceConfig,
    client: Client,
}

impl AfroSmsService {
    pub fn new(config: AfroSmsServiceConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    async fn send_request(&self, phone: &str, message: &str) -> Result<String, SmsError> {
        let request = SendRequest {
            from: self.config.identifier_id.as_deref(),
            sender: &self.config.sender_name,
            to: phone,
            message,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SmsError::Status { status, body });
        }

        let json = serde_json::from_str::<Value>(&body).unwrap_or(Value::Null);
        match is_successful_response(status, &json) {
            true => Ok(body),
            false => Err(SmsError::Rejected(body)),
        }
    }
}

#[async_trait]
impl SmsService for AfroSmsService {
    #[tracing::instrument(name = "SMS", skip_all, fields(to = phone))]
    async fn send(&self, phone: &str, message: &str) -> SmsDelivery {
        tracing::debug!("sending sms");

        match self.send_request(phone, message).await {
            Ok(body) => {
                tracing::info!("sms sent");
                SmsDelivery {
                    status: SmsStatus::Sent,
                    provider_response: Some(body),
                }
            }
            Err(err) => {
                tracing::error!(%err, "sms delivery failed");
                let provider_response = match err {
                    SmsError::Status { body, .. } | SmsError::Rejected(body) => body,
                    err => err.to_string(),
                };

                SmsDelivery {
                    status: SmsStatus::Failed,
                    provider_response: Some(provider_response),
                }
            }
        }
    }
}

///
/// Providers do not agree on response format. Fields are checked in order
/// and the first one present decides.
///
pub fn is_successful_response(status: StatusCode, body: &Value) -> bool {
    if !status.is_success() {
        return false;
    }

    if let Some(acknowledge) = body.get("acknowledge") {
        return acknowledge.as_str() == Some("success");
    }

    if let Some(status) = body.get("status") {
        return status
            .as_str()
            .map(|status| {
                ["success", "sent", "ok"]
                    .iter()
                    .any(|ok| status.eq_ignore_ascii_case(ok))
            })
            .unwrap_or(false);
    }

    if let Some(success) = body.get("success") {
        return success.as_bool() == Some(true);
    }

    false
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{routing::post, Json, Router};
    use serde_json::json;
    use std::time::Duration;
    use tokio::net::TcpListener;

    #[test]
    fn is_successful_response_non_2xx() {
        let body = json!({ "acknowledge": "success" });

        assert!(!is_successful_response(StatusCode::BAD_GATEWAY, &body));
    }

    #[test]
    fn is_successful_response_acknowledge() {
        assert!(is_successful_response(
            StatusCode::OK,
            &json!({ "acknowledge": "success" })
        ));
        assert!(!is_successful_response(
            StatusCode::OK,
            &json!({ "acknowledge": "error", "status": "ok" })
        ));
    }

    #[test]
    fn is_successful_response_status_case_insensitive() {
        assert!(is_successful_response(StatusCode::OK, &json!({ "status": "SENT" })));
        assert!(is_successful_response(StatusCode::OK, &json!({ "status": "Ok" })));
        assert!(!is_successful_response(
            StatusCode::OK,
            &json!({ "status": "queued", "success": true })
        ));
    }

    #[test]
    fn is_successful_response_success_flag() {
        assert!(is_successful_response(StatusCode::OK, &json!({ "success": true })));
        assert!(!is_successful_response(StatusCode::OK, &json!({ "success": "true" })));
    }

    #[test]
    fn is_successful_response_unknown_body() {
        assert!(!is_successful_response(StatusCode::OK, &json!({ "id": 42 })));
        assert!(!is_successful_response(StatusCode::OK, &Value::Null));
    }

    async fn start_provider(status: StatusCode, body: Value) -> String {
        let app = Router::new().route(
            "/api/send",
            post(move |Json(request): Json<Value>| {
                let body = body.clone();
                async move {
                    assert_eq!(request["sender"], "ROCKET");
                    assert_eq!(request["to"], "+255713000222");
                    (status, Json(body))
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        format!("http://{address}/api/send")
    }

    fn service(api_url: String) -> AfroSmsService {
        AfroSmsService::new(AfroSmsServiceConfig {
            api_url,
            api_key: "test-key".to_string(),
            sender_name: "ROCKET".to_string(),
            identifier_id: None,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn send_acknowledged() {
        let api_url = start_provider(
            StatusCode::OK,
            json!({ "acknowledge": "success", "response": { "status": "Send" } }),
        )
        .await;

        let delivery = service(api_url)
            .send("+255713000222", "Ticket 1001 issued")
            .await;

        assert_eq!(delivery.status, SmsStatus::Sent);
        assert!(delivery.provider_response.unwrap().contains("success"));
    }

    #[tokio::test]
    async fn send_provider_error() {
        let api_url = start_provider(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "acknowledge": "success" }),
        )
        .await;

        let delivery = service(api_url)
            .send("+255713000222", "Ticket 1001 issued")
            .await;

        assert_eq!(delivery.status, SmsStatus::Failed);
    }

    #[tokio::test]
    async fn send_rejected_by_provider() {
        let api_url = start_provider(
            StatusCode::OK,
            json!({ "acknowledge": "error", "response": { "errors": ["invalid phone"] } }),
        )
        .await;

        let delivery = service(api_url)
            .send("+255713000222", "Ticket 1001 issued")
            .await;

        assert_eq!(delivery.status, SmsStatus::Failed);
        assert!(delivery.provider_response.unwrap().contains("invalid phone"));
    }

    #[tokio::test]
    async fn send_provider_unreachable() {
        let delivery = service("http://127.0.0.1:9/api/send".to_string())
            .send("+255713000222", "Ticket 1001 issued")
            .await;

        assert_eq!(delivery.status, SmsStatus::Failed);
    }
}
