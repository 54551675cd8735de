//! Common test utilities for integration tests.

use otravez::commands::*;
use otravez::Bot;
use statbotics_client::StatboticsClient;
use std::sync::Arc;
use std::time::Duration;
use tba_client::TbaClient;
use weather_client::WeatherClient;
use wiremock::MockServer;

/// Mock upstreams, one server per provider.
pub struct Upstreams {
    pub tba: MockServer,
    pub statbotics: MockServer,
    pub weather: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            tba: MockServer::start().await,
            statbotics: MockServer::start().await,
            weather: MockServer::start().await,
        }
    }

    /// A bot wired exactly like `main`, pointed at the mock servers.
    pub fn bot(&self) -> Bot {
        let timeout = Duration::from_secs(5);
        let tba = Arc::new(TbaClient::new("test-auth-key", self.tba.uri(), timeout).unwrap());
        let statbotics = Arc::new(StatboticsClient::new(self.statbotics.uri(), timeout).unwrap());
        let weather = Arc::new(WeatherClient::new(self.weather.uri(), timeout).unwrap());

        let mut commands = CommandRegistry::new();
        commands.register(Arc::new(TeamHandler::new(tba.clone()))).unwrap();
        commands.register(Arc::new(CompsHandler::new(tba.clone()))).unwrap();
        commands.register(Arc::new(YearsHandler::new(tba.clone()))).unwrap();
        commands.register(Arc::new(LeaderboardHandler::new(tba.clone()))).unwrap();
        commands.register(Arc::new(AwardsHandler::new(tba.clone()))).unwrap();
        commands.register(Arc::new(AlliancesHandler::new(tba.clone()))).unwrap();
        commands.register(Arc::new(EpaHandler::new(statbotics.clone()))).unwrap();
        commands.register(Arc::new(EventHandler::new(statbotics))).unwrap();
        commands.register(Arc::new(WeatherHandler::new(tba, weather))).unwrap();
        commands.register(Arc::new(PingHandler::new())).unwrap();
        let help = HelpHandler::new(";", &commands.infos());
        commands.register(Arc::new(help)).unwrap();

        Bot::new(";", commands)
    }
}

pub fn cheesy_poofs() -> serde_json::Value {
    serde_json::json!({
        "key": "frc254",
        "team_number": 254,
        "nickname": "The Cheesy Poofs",
        "name": "NASA Ames Research Center & Bellarmine College Preparatory",
        "school_name": "Bellarmine College Preparatory",
        "city": "San Jose",
        "state_prov": "California",
        "country": "USA",
        "website": "http://www.team254.com",
        "rookie_year": 1999
    })
}
