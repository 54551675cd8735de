//! Chat transport over the Signal CLI REST API.

mod client;
mod error;
mod receiver;
mod types;

pub use client::SignalClient;
pub use error::SignalError;
pub use receiver::MessageReceiver;
pub use types::*;

use async_trait::async_trait;

/// Somewhere replies can be sent.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Answer `to` in the conversation it came from.
    async fn reply(&self, to: &ChatMessage, text: &str) -> Result<(), SignalError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> SignalClient {
        SignalClient::new(mock_server.uri(), "+15555555555", Duration::from_secs(5)).unwrap()
    }

    fn incoming(text: Option<&str>, group: Option<&str>) -> IncomingMessage {
        IncomingMessage {
            envelope: Envelope {
                source: "+14155551234".into(),
                source_name: Some("Driver".into()),
                timestamp: 1_700_000_000_000,
                data_message: Some(DataMessage {
                    message: text.map(Into::into),
                    timestamp: 1_700_000_000_000,
                    group_info: group.map(|g| GroupInfo { group_id: g.into() }),
                }),
            },
            account: "+15555555555".into(),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/health"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        assert!(create_test_client(&mock_server).health_check().await);
    }

    #[tokio::test]
    async fn test_health_check_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/health"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        assert!(!create_test_client(&mock_server).health_check().await);
    }

    #[tokio::test]
    async fn test_receive_messages() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!([
            {
                "envelope": {
                    "source": "+14155551234",
                    "sourceNumber": "+14155551234",
                    "sourceName": "Driver",
                    "timestamp": 1_700_000_000_000i64,
                    "dataMessage": {
                        "message": ";team 254",
                        "timestamp": 1_700_000_000_000i64,
                        "groupInfo": null
                    }
                },
                "account": "+15555555555"
            },
            {
                "envelope": {
                    "source": "+14155551234",
                    "timestamp": 1_700_000_000_001i64,
                    "receiptMessage": {"isDelivery": true}
                },
                "account": "+15555555555"
            }
        ]);

        // "+" is URL-encoded as %2B
        Mock::given(method("GET"))
            .and(path("/v1/receive/%2B15555555555"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let envelopes = client.receive().await.unwrap();
        assert_eq!(envelopes.len(), 2);

        let messages: Vec<_> = envelopes.iter().filter_map(ChatMessage::from_incoming).collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, ";team 254");
        assert_eq!(messages[0].author_name.as_deref(), Some("Driver"));
    }

    #[tokio::test]
    async fn test_reply_direct() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/send"))
            .and(body_json(serde_json::json!({
                "message": "pong!",
                "number": "+15555555555",
                "recipients": ["+14155551234"]
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let message = ChatMessage::direct("+14155551234", ";ping", 0);
        client.reply(&message, "pong!").await.unwrap();
    }

    #[tokio::test]
    async fn test_reply_group() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/send"))
            .and(body_json(serde_json::json!({
                "message": "pong!",
                "number": "+15555555555",
                "recipients": ["group.abc"]
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let message = ChatMessage::from_incoming(&incoming(Some(";ping"), Some("group.abc"))).unwrap();
        assert!(message.is_group());
        client.reply(&message, "pong!").await.unwrap();
    }

    #[tokio::test]
    async fn test_send_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/send"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid recipient"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.send("+1", "hello").await;
        assert!(matches!(result, Err(SignalError::SendFailed(msg)) if msg == "Invalid recipient"));
    }

    #[test]
    fn test_from_incoming_skips_empty_text() {
        assert!(ChatMessage::from_incoming(&incoming(None, None)).is_none());
        assert!(ChatMessage::from_incoming(&incoming(Some("   "), None)).is_none());
    }

    #[test]
    fn test_direct_reply_target() {
        let message = ChatMessage::from_incoming(&incoming(Some("hi"), None)).unwrap();
        assert!(!message.is_group());
        assert_eq!(message.reply_target(), "+14155551234");
        assert_eq!(message.sent_at().timestamp_millis(), 1_700_000_000_000);
    }
}
