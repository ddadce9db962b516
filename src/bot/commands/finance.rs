//! Finance Discord commands - `expense` and `income`.
//!
//! Both commands book a transaction against a batch and reply with the batch's
//! updated profit.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, commands::utils, handlers::autocomplete},
        core::{batch, metrics, report, transaction},
        entities::{TransactionCategory, TransactionKind},
        errors::Result,
    };
    use chrono::Utc;

    async fn book(
        ctx: Context<'_>,
        kind: TransactionKind,
        batch_name: &str,
        amount: f64,
        category: &str,
        notes: Option<String>,
        date: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let date = utils::parse_date_or_today(date.as_deref())?;
        let category = TransactionCategory::parse_lenient(category);
        let record = batch::get_batch_record_by_name(db, batch_name).await?;

        let created =
            transaction::add_transaction(db, record.batch.id, date, kind, category, amount, notes)
                .await?;

        let refreshed = batch::get_batch_record_by_name(db, batch_name).await?;
        let m = metrics::compute_metrics(&refreshed, Utc::now());
        ctx.say(format!(
            "✅ {} {} ({}) for '{}' - net profit now {} (Transaction ID: {})",
            match kind {
                TransactionKind::Expense => "Expense",
                TransactionKind::Income => "Income",
            },
            report::format_transaction_amount(kind, created.amount),
            category.label(),
            refreshed.batch.name,
            report::format_money(m.net_profit),
            created.id
        ))
        .await?;
        Ok(())
    }

    /// Books an expense against a batch.
    #[poise::command(slash_command, prefix_command)]
    pub async fn expense(
        ctx: Context<'_>,
        #[description = "Batch name"]
        #[autocomplete = "autocomplete::autocomplete_batch_name"]
        batch_name: String,
        #[description = "Amount spent"] amount: f64,
        #[description = "Category"]
        #[autocomplete = "autocomplete::autocomplete_transaction_category"]
        category: String,
        #[description = "Optional notes"] notes: Option<String>,
        #[description = "Date YYYY-MM-DD (default today)"] date: Option<String>,
    ) -> Result<()> {
        book(
            ctx,
            TransactionKind::Expense,
            &batch_name,
            amount,
            &category,
            notes,
            date,
        )
        .await
    }

    /// Books income against a batch.
    #[poise::command(slash_command, prefix_command)]
    pub async fn income(
        ctx: Context<'_>,
        #[description = "Batch name"]
        #[autocomplete = "autocomplete::autocomplete_batch_name"]
        batch_name: String,
        #[description = "Amount received"] amount: f64,
        #[description = "Category"]
        #[autocomplete = "autocomplete::autocomplete_transaction_category"]
        category: String,
        #[description = "Optional notes"] notes: Option<String>,
        #[description = "Date YYYY-MM-DD (default today)"] date: Option<String>,
    ) -> Result<()> {
        book(
            ctx,
            TransactionKind::Income,
            &batch_name,
            amount,
            &category,
            notes,
            date,
        )
        .await
    }
}

// Re-export all commands
pub use inner::*;
