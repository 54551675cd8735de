//! Current-conditions client for wttr.in.

mod client;
mod error;
mod types;

pub use client::{WeatherClient, DEFAULT_BASE_URL};
pub use error::WeatherError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> WeatherClient {
        WeatherClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_current_conditions() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "current_condition": [{
                "temp_C": "18",
                "temp_F": "64",
                "weatherDesc": [{"value": "Partly cloudy"}]
            }],
            "weather": []
        });

        // "+" is percent-encoded inside the path segment
        Mock::given(method("GET"))
            .and(path("/San%20Jose%2BCalifornia%2BUSA"))
            .and(query_param("format", "j1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let current = client
            .current(&["San Jose", "California", "USA"])
            .await
            .unwrap();

        assert_eq!(current.temp_c, "18");
        assert_eq!(current.description(), "Partly cloudy");
    }

    #[tokio::test]
    async fn test_empty_report() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Nowhere"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"current_condition": []})),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(matches!(
            client.current(&["Nowhere", ""]).await,
            Err(WeatherError::EmptyReport)
        ));
    }

    #[tokio::test]
    async fn test_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/Atlantis"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(matches!(
            client.current(&["Atlantis"]).await,
            Err(WeatherError::NotFound(_))
        ));
    }

    #[test]
    fn test_description_fallback() {
        let condition = CurrentCondition {
            temp_c: "3".into(),
            temp_f: None,
            weather_desc: vec![],
        };
        assert_eq!(condition.description(), "unknown");
    }
}
