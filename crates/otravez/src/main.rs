//! OtraVez bot - main entry point.

use anyhow::Context;
use otravez::commands::*;
use otravez::config::Config;
use otravez::error::{AppError, AppResult};
use otravez::Bot;
use secrecy::ExposeSecret;
use signal_client::{MessageReceiver, SignalClient};
use statbotics_client::StatboticsClient;
use std::sync::Arc;
use tba_client::TbaClient;
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use weather_client::WeatherClient;

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = Config::load().context("Failed to load configuration")?;

    init_logging(&config.bot.log_level);

    info!("Starting OtraVez...");

    // Initialize clients
    let tba = Arc::new(
        TbaClient::new(
            config.tba.auth_key.expose_secret().as_str(),
            &config.tba.base_url,
            config.tba.timeout,
        )
        .context("Failed to create TBA client")?,
    );

    let statbotics = Arc::new(
        StatboticsClient::new(&config.statbotics.base_url, config.statbotics.timeout)
            .context("Failed to create Statbotics client")?,
    );

    let weather = Arc::new(
        WeatherClient::new(&config.weather.base_url, config.weather.timeout)
            .context("Failed to create weather client")?,
    );

    let signal = SignalClient::new(
        &config.signal.service_url,
        &config.signal.phone_number,
        config.signal.timeout,
    )
    .context("Failed to create Signal client")?;

    // Health checks
    if tba.health_check().await {
        info!("TBA healthy");
    } else {
        warn!("TBA health check failed - check TBA__AUTH_KEY");
    }

    if !statbotics.health_check().await {
        warn!("Statbotics health check failed - EPA commands may fail");
    }

    if !signal.health_check().await {
        return Err(AppError::SignalUnreachable(config.signal.service_url.clone()));
    }
    info!("Signal API healthy");

    // Build the command table
    let mut commands = CommandRegistry::new();
    commands.register(Arc::new(TeamHandler::new(tba.clone())))?;
    commands.register(Arc::new(CompsHandler::new(tba.clone())))?;
    commands.register(Arc::new(YearsHandler::new(tba.clone())))?;
    commands.register(Arc::new(LeaderboardHandler::new(tba.clone())))?;
    commands.register(Arc::new(AwardsHandler::new(tba.clone())))?;
    commands.register(Arc::new(AlliancesHandler::new(tba.clone())))?;
    commands.register(Arc::new(EpaHandler::new(statbotics.clone())))?;
    commands.register(Arc::new(EventHandler::new(statbotics.clone())))?;
    commands.register(Arc::new(WeatherHandler::new(tba.clone(), weather.clone())))?;
    commands.register(Arc::new(PingHandler::new()))?;
    let help = HelpHandler::new(&config.bot.prefix, &commands.infos());
    commands.register(Arc::new(help))?;

    let bot = Bot::new(config.bot.prefix.clone(), commands);

    info!("Registered {} commands with prefix '{}'", bot.commands().len(), bot.prefix());
    info!("Listening for messages...");

    let receiver = MessageReceiver::new(signal.clone(), config.signal.poll_interval);
    let mut stream = Box::pin(receiver.stream());

    // Main message loop
    loop {
        tokio::select! {
            Some(message) = stream.next() => {
                bot.process(&signal, &message).await;
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
