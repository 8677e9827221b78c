//! # Gym Log Bot Main Entry Point
//!
//! Initializes logging, loads configuration, connects to MongoDB,
//! loads the workout program, and runs the Telegram bot alongside
//! the health check server.

use anyhow::Result;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod database;
mod services;
mod utils;

use crate::bot::dialogue::State;
use crate::bot::handlers;
use crate::config::Config;
use crate::database::connection::DatabaseManager;
use crate::services::health::HealthService;
use crate::services::program::ProgramService;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gym_log_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Gym Log Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Database: {}/{}, HTTP Port: {}",
        config.mongo_uri, config.mongo_db_name, config.http_port
    );

    // Initialize database
    info!("Initializing database connection...");
    let db_manager = DatabaseManager::connect(&config.mongo_uri, &config.mongo_db_name).await?;
    info!("Ensuring collection indexes...");
    db_manager.ensure_indexes().await?;
    let db = Arc::new(db_manager);
    info!("Database initialized successfully");

    // Load the workout program catalog
    let program = Arc::new(ProgramService::load(Path::new(&config.program_path))?);

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(db.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handlers::schema())
            .dependencies(dptree::deps![InMemStorage::<State>::new(), db, program])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
