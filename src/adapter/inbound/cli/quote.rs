//! Handler for `basin quote`.
//!
//! An order file is plain TOML:
//!
//! ```toml
//! store_id = "stuy"
//! store_name = "Stuyvesant Wash"
//!
//! [[items]]
//! id = 1
//! category = "wash"
//! menu_id = 1
//! name = "Wash & Fold"
//! price = "12.50"
//! count = 2
//!
//! [[items.choices]]
//! name = "Hypoallergenic"
//! price = "1.00"
//! selected = true
//! ```
//!
//! Items are added to a fresh cart in file order, so repeated lines merge.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tabled::{Table, Tabled};

use super::output::{self, Line};
use crate::adapter::outbound::LogObserver;
use crate::domain::{Cart, ItemChoice, ItemId, MenuId, OrderItem, Quantity, StoreId};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;

/// An order file as written by the user.
#[derive(Debug, Deserialize)]
pub struct OrderFile {
    pub store_id: String,
    pub store_name: String,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

/// One `[[items]]` entry.
#[derive(Debug, Deserialize)]
pub struct OrderLine {
    pub id: u64,
    pub category: String,
    pub menu_id: u64,
    pub name: String,
    pub price: Decimal,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub choices: Vec<ItemChoice>,
}

fn default_count() -> u32 {
    1
}

impl OrderLine {
    fn check_prices(&self) -> Result<()> {
        if self.price.is_sign_negative() {
            return Err(Error::Parse(format!("{}: negative price {}", self.name, self.price)));
        }
        if let Some(choice) = self.choices.iter().find(|c| c.price().is_sign_negative()) {
            return Err(Error::Parse(format!(
                "{}: choice {} has negative price {}",
                self.name,
                choice.name(),
                choice.price()
            )));
        }
        Ok(())
    }
}

impl OrderFile {
    /// Parse an order from TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the content is not a valid order.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Read and parse an order file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Parse(format!("{}: {e}", path.display())))
    }

    /// Build a cart from the order, capping each line at `max_quantity`.
    ///
    /// # Errors
    ///
    /// Returns a domain error if a line's count exceeds [`Quantity::MAX`],
    /// or [`Error::Parse`] for a negative price.
    pub fn into_cart(self, max_quantity: u32) -> Result<Cart> {
        let mut cart = Cart::new(StoreId::new(self.store_id), self.store_name)
            .with_max_quantity(max_quantity);
        cart.subscribe(Box::new(LogObserver));

        for line in self.items {
            line.check_prices()?;
            let count = Quantity::try_new(line.count)?;
            let mut item = OrderItem::new(
                ItemId::new(line.id),
                line.category,
                MenuId::new(line.menu_id),
                line.name,
                line.price,
            )
            .with_count(count)
            .with_choices(line.choices);
            if let Some(photo) = line.photo {
                item = item.with_photo(photo);
            }
            cart.add_item(item);
        }

        Ok(cart)
    }
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Choices")]
    choices: String,
    #[tabled(rename = "Unit")]
    unit: Decimal,
    #[tabled(rename = "Qty")]
    count: Quantity,
    #[tabled(rename = "Total")]
    total: Decimal,
}

fn selected_names(item: &OrderItem) -> Vec<&str> {
    item.selected_choices()
        .into_iter()
        .map(ItemChoice::name)
        .collect()
}

/// Execute `basin quote`.
///
/// # Errors
///
/// Returns an error if the order file cannot be read or is invalid.
pub fn execute(path: &Path, config: &Config) -> Result<()> {
    let cart = OrderFile::load(path)?.into_cart(config.cart.max_quantity)?;
    let priced = cart
        .lines()
        .iter()
        .map(|item| -> Result<_> { Ok((item, item.unit_price()?, item.line_total()?)) })
        .collect::<Result<Vec<_>>>()?;
    let subtotal = cart.subtotal()?;

    if output::is_json() {
        let lines: Vec<_> = priced
            .iter()
            .map(|(item, unit, total)| {
                json!({
                    "line": item.key().to_string(),
                    "name": item.name(),
                    "count": item.count().value(),
                    "unit_price": unit.to_string(),
                    "line_total": total.to_string(),
                    "choices": selected_names(item),
                })
            })
            .collect();
        output::result(
            "quote",
            json!({
                "store_id": cart.store_id().as_str(),
                "store_name": cart.store_name(),
                "currency": config.cart.currency,
                "lines": lines,
                "total_quantity": cart.total_quantity(),
                "subtotal": subtotal.to_string(),
                "purchasable": cart.is_purchasable(),
            }),
        );
        return Ok(());
    }

    output::print(Line::Section(&format!("Quote for {}", cart.store_name())));
    if cart.is_empty() {
        output::print(Line::Note("The order has no items."));
        return Ok(());
    }

    let rows: Vec<QuoteRow> = priced
        .into_iter()
        .map(|(item, unit, total)| QuoteRow {
            name: item.name().to_string(),
            category: item.category().to_string(),
            choices: selected_names(item).join(", "),
            unit,
            count: item.count(),
            total,
        })
        .collect();
    output::print(Line::Block(&Table::new(rows).to_string()));

    let currency = config.cart.currency.to_uppercase();
    output::print(Line::Field("Items", cart.total_quantity().to_string()));
    output::print(Line::Field(
        "Subtotal",
        output::accent(format!("{subtotal} {currency}")),
    ));

    for item in cart.lines() {
        for choice in item.missing_required() {
            let message = format!("{} needs a selection for {}", item.name(), choice.name());
            output::print(Line::Warning(&message));
        }
    }

    Ok(())
}
