//! General Discord commands - ping and help.
//! These commands don't touch the database.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let help_text = "**Flock Ledger Help**\n\n\
        **Batches**\n\
        • `/batches` - Lists all batches.\n\
        • `/new_batch <name> <count> <chick_price> [breed] [start_date]` - Places a new flock.\n\
        • `/batch_report <batch>` - Shows KPIs: mortality, FCR, costs, profit.\n\
        • `/close_batch <batch> <status>` - Marks a batch completed or cancelled.\n\
        • `/delete_batch <batch>` - Deletes a batch with its logs and transactions.\n\
        • `/log_day <batch> <mortality> <feed_kg> <avg_weight_g> [date]` - Records a day.\n\n\
        **Finance**\n\
        • `/expense <batch> <amount> <category> [notes] [date]` - Books an expense.\n\
        • `/income <batch> <amount> <category> [notes] [date]` - Books income.\n\n\
        **Inventory**\n\
        • `/inventory` - Lists stock with low-stock markers.\n\
        • `/add_item <name> <category> <quantity> <unit> <min_threshold>` - Adds an item.\n\
        • `/stock <item> <add|subtract|set> <quantity>` - Adjusts stock.\n\
        • `/set_threshold <item> <min_threshold>` - Changes the low-stock level.\n\
        • `/remove_item <item>` - Removes an item.\n\n\
        **Overview**\n\
        • `/alerts` - Low stock and vaccinations due today or tomorrow.\n\
        • `/dashboard` - Farm-wide totals.\n\
        • `/ping`, `/help`";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
