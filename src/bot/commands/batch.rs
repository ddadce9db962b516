//! Batch Discord commands - listing, placement, reporting, lifecycle, and daily logs.
//!
//! Commands resolve batches by name through the core modules, compute metrics with
//! the current time, and render the result.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, commands::utils, handlers::autocomplete},
        core::{alerts, batch, daily_log, metrics, report},
        entities::BatchStatus,
        errors::Result,
    };
    use chrono::Utc;
    use std::fmt::Write;

    /// How far ahead `/batch_report` looks for vaccinations
    const VACCINE_HORIZON_DAYS: i64 = 7;
    /// Transactions shown at the bottom of `/batch_report`
    const RECENT_TRANSACTIONS: usize = 5;

    /// Final state for a batch that is no longer on the farm
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum ClosingStatus {
        #[name = "completed"]
        Completed,
        #[name = "cancelled"]
        Cancelled,
    }

    impl From<ClosingStatus> for BatchStatus {
        fn from(value: ClosingStatus) -> Self {
            match value {
                ClosingStatus::Completed => Self::Completed,
                ClosingStatus::Cancelled => Self::Cancelled,
            }
        }
    }

    /// Lists every batch with its age, bird count, and status.
    #[poise::command(slash_command, prefix_command)]
    pub async fn batches(ctx: Context<'_>) -> Result<()> {
        let records = batch::list_batches(&ctx.data().database).await?;
        if records.is_empty() {
            ctx.say("🐣 No batches yet. Place one with `/new_batch`.")
                .await?;
            return Ok(());
        }

        let now = Utc::now();
        let mut text = String::from("**Batches**\n");
        for record in &records {
            let m = metrics::compute_metrics(record, now);
            writeln!(
                text,
                "• **{}** ({}) - day {}, {} birds, FCR {:.2}, {}",
                record.batch.name,
                record.batch.breed,
                m.age_days,
                m.current_count,
                m.feed_conversion_ratio,
                record.batch.status.label()
            )?;
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Places a new flock.
    #[poise::command(slash_command, prefix_command)]
    pub async fn new_batch(
        ctx: Context<'_>,
        #[description = "Unique batch name"] name: String,
        #[description = "Number of chicks placed"] count: i64,
        #[description = "Price paid per chick"] chick_price: f64,
        #[description = "Breed (e.g. Ross 308)"] breed: Option<String>,
        #[description = "Placement date YYYY-MM-DD (default today)"] start_date: Option<String>,
    ) -> Result<()> {
        let start_date = utils::parse_date_or_today(start_date.as_deref())?;
        let created = batch::create_batch(
            &ctx.data().database,
            name,
            breed.unwrap_or_default(),
            start_date,
            count,
            chick_price,
        )
        .await?;

        ctx.say(format!(
            "✅ Placed batch '{}' with {} chicks on {} (chick cost {})",
            created.name,
            created.initial_count,
            created.start_date,
            report::format_money(created.initial_cost * created.initial_count as f64)
        ))
        .await?;
        Ok(())
    }

    /// Shows the KPI report of a batch.
    #[poise::command(slash_command, prefix_command)]
    pub async fn batch_report(
        ctx: Context<'_>,
        #[description = "Batch name"]
        #[autocomplete = "autocomplete::autocomplete_batch_name"]
        batch_name: String,
    ) -> Result<()> {
        use poise::serenity_prelude as serenity;

        let record = batch::get_batch_record_by_name(&ctx.data().database, &batch_name).await?;
        let now = Utc::now();
        let batch_metrics = metrics::compute_metrics(&record, now);

        let mut body = format!(
            "```\n{}\n```",
            report::format_metrics_summary(&record.batch, &batch_metrics)?
        );

        let upcoming =
            alerts::upcoming_vaccinations(&record, &ctx.data().schedule, now, VACCINE_HORIZON_DAYS);
        if !upcoming.is_empty() {
            writeln!(body, "\n**Vaccinations (next {VACCINE_HORIZON_DAYS} days)**")?;
            for v in &upcoming {
                writeln!(body, "• day {} (in {}d): {}", v.day_offset, v.days_until, v.name)?;
            }
        }

        if !record.transactions.is_empty() {
            writeln!(body, "\n**Recent transactions**")?;
            for txn in record.transactions.iter().rev().take(RECENT_TRANSACTIONS) {
                writeln!(body, "• {}", report::format_transaction_summary(txn))?;
            }
        }

        let color = if batch_metrics.data_anomaly {
            0x00E7_4C3C
        } else {
            0x00F5_A623
        };
        let embed = serenity::CreateEmbed::default()
            .title(format!("🐔 {}", record.batch.name))
            .description(body)
            .color(color)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} logs | {} transactions | as of {}",
                record.logs.len(),
                record.transactions.len(),
                now.format("%Y-%m-%d")
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Marks a batch completed or cancelled.
    #[poise::command(slash_command, prefix_command)]
    pub async fn close_batch(
        ctx: Context<'_>,
        #[description = "Batch name"]
        #[autocomplete = "autocomplete::autocomplete_batch_name"]
        batch_name: String,
        #[description = "Final status"] status: ClosingStatus,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let record = batch::get_batch_record_by_name(db, &batch_name).await?;
        let updated = batch::update_batch_status(db, record.batch.id, status.into()).await?;

        ctx.say(format!(
            "✅ Batch '{}' is now {}",
            updated.name,
            updated.status.label()
        ))
        .await?;
        Ok(())
    }

    /// Deletes a batch together with its logs and transactions.
    #[poise::command(slash_command, prefix_command)]
    pub async fn delete_batch(
        ctx: Context<'_>,
        #[description = "Batch name"]
        #[autocomplete = "autocomplete::autocomplete_batch_name"]
        batch_name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let record = batch::get_batch_record_by_name(db, &batch_name).await?;
        batch::delete_batch(db, record.batch.id).await?;

        ctx.say(format!(
            "🗑️ Deleted batch '{}' ({} logs, {} transactions)",
            record.batch.name,
            record.logs.len(),
            record.transactions.len()
        ))
        .await?;
        Ok(())
    }

    /// Records one day's mortality, feed, and average weight.
    #[poise::command(slash_command, prefix_command)]
    pub async fn log_day(
        ctx: Context<'_>,
        #[description = "Batch name"]
        #[autocomplete = "autocomplete::autocomplete_batch_name"]
        batch_name: String,
        #[description = "Birds that died"] mortality: i64,
        #[description = "Feed consumed (kg)"] feed_kg: f64,
        #[description = "Average bird weight (g)"] avg_weight_g: f64,
        #[description = "Date YYYY-MM-DD (default today)"] date: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let date = utils::parse_date_or_today(date.as_deref())?;
        let record = batch::get_batch_record_by_name(db, &batch_name).await?;
        daily_log::add_daily_log(db, record.batch.id, date, mortality, feed_kg, avg_weight_g)
            .await?;

        let refreshed = batch::get_batch_record_by_name(db, &batch_name).await?;
        let m = metrics::compute_metrics(&refreshed, Utc::now());
        let mut reply = format!(
            "✅ Logged {date} for '{}': {} birds left, mortality {:.2}%, FCR {:.2}",
            refreshed.batch.name, m.current_count, m.mortality_rate_percent, m.feed_conversion_ratio
        );
        if m.data_anomaly {
            reply.push_str("\n⚠️ Logged deaths now exceed the birds placed. Check earlier logs.");
        }

        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
