//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the flock ledger, including all
//! slash commands, autocomplete handlers, and the shared bot context.

/// Discord command implementations (batch, log, finance, inventory, alerts, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{config::schedule::VaccineSchedule, errors::{Error, Result}};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::{error, info};

/// Shared data available to all bot commands.
/// This structure holds the database connection and the vaccine schedule
/// loaded at startup.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Vaccination program used by the alert engine
    pub schedule: VaccineSchedule,
}

impl BotData {
    /// Creates a new `BotData` instance.
    #[must_use]
    pub const fn new(database: DatabaseConnection, schedule: VaccineSchedule) -> Self {
        Self { database, schedule }
    }
}

/// Poise context used by every command
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("❌ {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Every slash command the bot registers
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::ping(),
        commands::help(),
        commands::batches(),
        commands::new_batch(),
        commands::batch_report(),
        commands::close_batch(),
        commands::delete_batch(),
        commands::log_day(),
        commands::expense(),
        commands::income(),
        commands::inventory(),
        commands::add_item(),
        commands::stock(),
        commands::set_threshold(),
        commands::remove_item(),
        commands::alerts(),
        commands::dashboard(),
    ]
}

/// Builds the poise framework, registers commands globally, and runs until the client stops.
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Registered {} commands", framework.options().commands.len());
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await?;
    Ok(())
}
