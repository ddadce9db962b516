//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggests batch names, inventory item names, and transaction categories as the
//! user types.

use crate::{
    bot::Context,
    core::{batch, inventory},
};

/// Discord allows at most 25 autocomplete choices
const MAX_CHOICES: usize = 25;

fn filter_names(names: impl Iterator<Item = String>, partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    let mut matching: Vec<String> = names
        .filter(|name| name.to_lowercase().contains(&partial_lower))
        .take(MAX_CHOICES)
        .collect();

    // Sort alphabetically for consistent UX
    matching.sort();
    matching
}

/// Provides autocomplete suggestions for batch names, newest batches first in the query.
pub async fn autocomplete_batch_name(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let Ok(batches) = batch::get_all_batches(&ctx.data().database).await else {
        return Vec::new();
    };
    filter_names(batches.into_iter().map(|b| b.name), partial)
}

/// Provides autocomplete suggestions for inventory item names.
pub async fn autocomplete_item_name(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let Ok(items) = inventory::list_inventory(&ctx.data().database).await else {
        return Vec::new();
    };
    filter_names(items.into_iter().map(|i| i.name), partial)
}

/// Provides autocomplete suggestions for transaction categories.
pub async fn autocomplete_transaction_category(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    let categories = [
        "feed",
        "medicine",
        "labor",
        "maintenance",
        "transport",
        "utilities",
        "chicken_sale",
        "egg_sale",
        "other",
    ];
    filter_names(categories.iter().map(|&c| c.to_string()), partial)
}
