//! Alert and dashboard Discord commands.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::Context,
        core::{alerts, batch, dashboard, inventory, report},
        errors::Result,
    };
    use chrono::Utc;
    use std::fmt::Write;

    /// Shows low-stock items and vaccinations due today or tomorrow.
    ///
    /// Vaccinations are checked for the most recently placed active batch.
    #[poise::command(slash_command, prefix_command)]
    pub async fn alerts(ctx: Context<'_>) -> Result<()> {
        let db = &ctx.data().database;
        let records = batch::list_batches(db).await?;
        let items = inventory::list_inventory(db).await?;
        let active = batch::current_active_batch(&records);

        let found = alerts::compute_alerts(&items, active, &ctx.data().schedule, Utc::now());
        if found.is_empty() {
            ctx.say("✅ No alerts.").await?;
            return Ok(());
        }

        let mut text = String::from("**Alerts**");
        if let Some(record) = active {
            write!(text, " (batch '{}')", record.batch.name)?;
        }
        text.push('\n');
        for alert in &found {
            writeln!(text, "{}", report::format_alert(alert))?;
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Shows farm-wide totals across every batch and the inventory.
    #[poise::command(slash_command, prefix_command)]
    pub async fn dashboard(ctx: Context<'_>) -> Result<()> {
        let db = &ctx.data().database;
        let records = batch::list_batches(db).await?;
        let items = inventory::list_inventory(db).await?;

        let summary = dashboard::compute_dashboard(&records, &items, Utc::now());
        ctx.say(format!(
            "📊 **Farm Dashboard**\n```\n{}\n```",
            report::format_dashboard(&summary)?
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
