//! Inventory Discord commands - listing, adding items, and stock adjustments.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, commands::utils, handlers::autocomplete},
        core::inventory::{self, StockOperation},
        entities::InventoryCategory,
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// What to do with the given quantity
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum StockAction {
        #[name = "add"]
        Add,
        #[name = "subtract"]
        Subtract,
        #[name = "set"]
        Set,
    }

    impl StockAction {
        const fn with_quantity(self, quantity: f64) -> StockOperation {
            match self {
                Self::Add => StockOperation::Add(quantity),
                Self::Subtract => StockOperation::Subtract(quantity),
                Self::Set => StockOperation::Set(quantity),
            }
        }
    }

    /// Lists the inventory, marking items at or below their threshold.
    #[poise::command(slash_command, prefix_command)]
    pub async fn inventory(ctx: Context<'_>) -> Result<()> {
        let items = inventory::list_inventory(&ctx.data().database).await?;
        if items.is_empty() {
            ctx.say("📦 Inventory is empty. Add items with `/add_item`.")
                .await?;
            return Ok(());
        }

        let mut text = String::from("**Inventory**\n");
        for item in &items {
            let marker = if item.is_low_stock() { "🔴" } else { "🟢" };
            write!(
                text,
                "{marker} **{}** - {} {} (min {})",
                item.name, item.quantity, item.unit, item.min_threshold
            )?;
            if let Some(expiry) = item.expiry_date {
                write!(text, ", expires {expiry}")?;
            }
            text.push('\n');
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Adds a new item to the inventory.
    #[poise::command(slash_command, prefix_command)]
    pub async fn add_item(
        ctx: Context<'_>,
        #[description = "Item name"] name: String,
        #[description = "feed, medicine, vaccine, equipment, or other"] category: String,
        #[description = "Quantity on hand"] quantity: f64,
        #[description = "Unit (kg, bag, vial, ...)"] unit: String,
        #[description = "Alert when quantity falls to this level"] min_threshold: f64,
        #[description = "Expiry date YYYY-MM-DD"] expiry_date: Option<String>,
        #[description = "Optional notes"] notes: Option<String>,
    ) -> Result<()> {
        let expiry_date = match expiry_date.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(utils::parse_date_or_today(Some(&raw))?),
            None => None,
        };
        let item = inventory::create_inventory_item(
            &ctx.data().database,
            name,
            InventoryCategory::parse_lenient(&category),
            quantity,
            unit,
            min_threshold,
            expiry_date,
            notes,
        )
        .await?;

        ctx.say(format!(
            "✅ Added '{}' to inventory: {} {} (alert at {})",
            item.name, item.quantity, item.unit, item.min_threshold
        ))
        .await?;
        Ok(())
    }

    /// Adds to, subtracts from, or sets the quantity of an item.
    #[poise::command(slash_command, prefix_command)]
    pub async fn stock(
        ctx: Context<'_>,
        #[description = "Item name"]
        #[autocomplete = "autocomplete::autocomplete_item_name"]
        item_name: String,
        #[description = "Operation"] action: StockAction,
        #[description = "Quantity"] quantity: f64,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let item = inventory::get_item_by_name(db, &item_name)
            .await?
            .ok_or_else(|| Error::InventoryItemNotFound {
                name: item_name.clone(),
            })?;

        let updated = inventory::adjust_stock(db, item.id, action.with_quantity(quantity)).await?;
        let mut reply = format!(
            "✅ '{}' stock: {} → {} {}",
            updated.name, item.quantity, updated.quantity, updated.unit
        );
        if updated.is_low_stock() {
            reply.push_str("\n⚠️ At or below the minimum threshold.");
        }

        ctx.say(reply).await?;
        Ok(())
    }

    /// Changes the low-stock threshold of an item.
    #[poise::command(slash_command, prefix_command)]
    pub async fn set_threshold(
        ctx: Context<'_>,
        #[description = "Item name"]
        #[autocomplete = "autocomplete::autocomplete_item_name"]
        item_name: String,
        #[description = "Alert when quantity falls to this level"] min_threshold: f64,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let item = inventory::get_item_by_name(db, &item_name)
            .await?
            .ok_or_else(|| Error::InventoryItemNotFound {
                name: item_name.clone(),
            })?;

        let updated = inventory::set_min_threshold(db, item.id, min_threshold).await?;
        ctx.say(format!(
            "✅ '{}' now alerts at {} {}",
            updated.name, updated.min_threshold, updated.unit
        ))
        .await?;
        Ok(())
    }

    /// Removes an item from the inventory.
    #[poise::command(slash_command, prefix_command)]
    pub async fn remove_item(
        ctx: Context<'_>,
        #[description = "Item name"]
        #[autocomplete = "autocomplete::autocomplete_item_name"]
        item_name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let item = inventory::get_item_by_name(db, &item_name)
            .await?
            .ok_or_else(|| Error::InventoryItemNotFound {
                name: item_name.clone(),
            })?;

        inventory::delete_inventory_item(db, item.id).await?;
        ctx.say(format!("🗑️ Removed '{}' from inventory", item.name))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
