//! # Gym Log Bot
//!
//! A personal Telegram bot for logging gym workouts, backed by MongoDB.
//!
//! ## Features
//! - Guided conversation to log a training session (/add)
//! - Compose a session from pre-configured workouts, one by one
//! - Activity calendar for the current month (/calendar)
//! - Detailed view of recent sessions (/view_training)
//! - Persistent storage in the MongoDB `trainings` collection

/// Bot command handlers, dialogue state, and keyboards
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database connection, models, and queries
pub mod database;
/// Workout program, set parsing, reporting, and health checks
pub mod services;
/// Utility functions for datetime, validation, and formatting
pub mod utils;
