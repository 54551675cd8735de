//! Client for The Blue Alliance API v3.

mod client;
mod error;
mod types;

pub use client::{TbaClient, DEFAULT_BASE_URL};
pub use error::TbaError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> TbaClient {
        TbaClient::new("test-auth-key", mock_server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_team_success() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "key": "frc254",
            "team_number": 254,
            "nickname": "The Cheesy Poofs",
            "name": "NASA Ames Research Center & Bellarmine College Preparatory",
            "school_name": "Bellarmine College Preparatory",
            "city": "San Jose",
            "state_prov": "California",
            "country": "USA",
            "website": "http://www.team254.com",
            "rookie_year": 1999,
            "postal_code": "95126"
        });

        Mock::given(method("GET"))
            .and(path("/team/frc254"))
            .and(header("X-TBA-Auth-Key", "test-auth-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let team = client.team(254).await.unwrap();

        assert_eq!(team.team_number, 254);
        assert_eq!(team.nickname.as_deref(), Some("The Cheesy Poofs"));
        assert_eq!(team.location(), "San Jose, California, USA");
        assert_eq!(team.website(), Some("http://www.team254.com"));
        assert_eq!(team.rookie_year, Some(1999));
    }

    #[tokio::test]
    async fn test_team_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/team/frc99999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "Errors": [{"team_id": "frc99999 does not exist"}]
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.team(99999).await;
        assert!(matches!(result, Err(TbaError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(matches!(client.status().await, Err(TbaError::Unauthorized)));
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn test_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/team/frc254/years_participated"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        match client.years_participated(254).await {
            Err(TbaError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_years_participated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/team/frc1678/years_participated"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([2005, 2006, 2008])),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert_eq!(
            client.years_participated(1678).await.unwrap(),
            vec![2005, 2006, 2008]
        );
    }

    #[tokio::test]
    async fn test_team_awards_with_and_without_year() {
        let mock_server = MockServer::start().await;

        let award = serde_json::json!({
            "name": "Regional Winners",
            "award_type": 1,
            "event_key": "2024casj",
            "year": 2024,
            "recipient_list": [{"team_key": "frc254", "awardee": null}]
        });

        Mock::given(method("GET"))
            .and(path("/team/frc254/awards/2024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([award])))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/team/frc254/awards"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let awards = client.team_awards(254, Some(2024)).await.unwrap();
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].name, "Regional Winners");
        assert!(client.team_awards(254, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_event_rankings_null() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/event/2024casj/rankings"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(client.event_rankings("2024casj").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_event_key_stays_in_one_segment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/team/frc254/years_participated"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([2024])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client
            .event_rankings("2024x/../../team/frc254/years_participated?")
            .await;
        assert!(matches!(result, Err(TbaError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_event_rankings() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "rankings": [
                {"rank": 1, "team_key": "frc254", "record": {"wins": 10, "losses": 2, "ties": 0}},
                {"rank": 2, "team_key": "frc1678", "record": null}
            ],
            "sort_order_info": []
        });

        Mock::given(method("GET"))
            .and(path("/event/2024casj/rankings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let rankings = client.event_rankings("2024casj").await.unwrap();
        assert_eq!(rankings.len(), 2);
        assert_eq!(team_number(&rankings[0].team_key), "254");
        assert_eq!(rankings[0].record.unwrap().matches_played(), 12);
        assert!(rankings[1].record.is_none());
    }

    #[tokio::test]
    async fn test_event_alliances() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!([
            {"name": "Alliance 1", "picks": ["frc254", "frc1678", "frc971"], "status": {"status": "won", "level": "f"}},
            {"name": "Alliance 2", "picks": ["frc604", "frc8"], "status": {"status": "eliminated", "level": "sf"}},
            {"picks": ["frc100"]}
        ]);

        Mock::given(method("GET"))
            .and(path("/event/2024casj/alliances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let alliances = client.event_alliances("2024casj").await.unwrap();
        assert_eq!(alliances.len(), 3);
        assert!(alliances[0].won());
        assert!(!alliances[1].won());
        assert!(!alliances[2].won());
    }

    #[test]
    fn test_keys() {
        assert_eq!(team_key(254), "frc254");
        assert_eq!(team_number("frc254"), "254");
        assert_eq!(team_number("254"), "254");
        assert_eq!(event_key(2024, "CASJ"), "2024casj");
    }

    #[test]
    fn test_location_skips_empty_state() {
        let team: Team = serde_json::from_value(serde_json::json!({
            "key": "frc3132",
            "team_number": 3132,
            "nickname": "Thunder Down Under",
            "city": "Sydney",
            "state_prov": "",
            "country": "Australia",
            "website": ""
        }))
        .unwrap();

        assert_eq!(team.location(), "Sydney, Australia");
        assert_eq!(team.website(), None);
    }

    #[test]
    fn test_win_rate() {
        let record = WinLossRecord { wins: 3, losses: 1, ties: 0 };
        assert_eq!(record.win_rate(), 0.75);
        assert_eq!(WinLossRecord::default().win_rate(), 0.0);
    }
}
