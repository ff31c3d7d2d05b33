//! Handlers for `basin favorites`.

use std::sync::Arc;

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::FavoritesCommand;
use super::output::{self, Line};
use crate::adapter::outbound::JsonFileStore;
use crate::application::FavoritesService;
use crate::domain::LaundromatId;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct FavoriteRow {
    #[tabled(rename = "Laundromat")]
    laundromat: String,
    #[tabled(rename = "Added")]
    added: String,
}

/// Execute a `basin favorites` subcommand against the configured data dir.
///
/// # Errors
///
/// Returns an error if the data directory cannot be resolved or the
/// favorites file cannot be read or written.
pub async fn execute(command: FavoritesCommand, config: &Config) -> Result<()> {
    let store = Arc::new(JsonFileStore::new(config.storage.resolve_data_dir()?));
    let mut favorites = FavoritesService::load(store).await?;

    match command {
        FavoritesCommand::List => list(&favorites),
        FavoritesCommand::Add { id } => {
            let id = LaundromatId::new(id);
            let added = favorites.add(id.clone()).await?;
            report(&id, added, if added { "added" } else { "already a favorite" });
        }
        FavoritesCommand::Remove { id } => {
            let id = LaundromatId::new(id);
            let removed = favorites.remove(&id).await?;
            report(&id, removed, if removed { "removed" } else { "not a favorite" });
        }
        FavoritesCommand::Toggle { id } => {
            let id = LaundromatId::new(id);
            let now_favorite = favorites.toggle(id.clone()).await?;
            report(&id, now_favorite, if now_favorite { "added" } else { "removed" });
        }
    }

    Ok(())
}

fn list(favorites: &FavoritesService<JsonFileStore>) {
    let registry = favorites.registry();

    if output::is_json() {
        let entries: Vec<_> = registry
            .iter()
            .map(|favorite| {
                json!({
                    "laundromat_id": favorite.laundromat_id().as_str(),
                    "created_at": favorite.created_at().to_rfc3339(),
                })
            })
            .collect();
        output::result("favorites", json!({ "favorites": entries }));
        return;
    }

    output::print(Line::Section("Favorites"));
    if registry.is_empty() {
        output::print(Line::Note("No favorites yet."));
        return;
    }

    let rows: Vec<FavoriteRow> = registry
        .iter()
        .map(|favorite| FavoriteRow {
            laundromat: favorite.laundromat_id().to_string(),
            added: favorite.created_at().format("%Y-%m-%d %H:%M UTC").to_string(),
        })
        .collect();
    output::print(Line::Block(&Table::new(rows).to_string()));
}

fn report(id: &LaundromatId, favorite: bool, message: &str) {
    if output::is_json() {
        output::result(
            "favorite",
            json!({ "laundromat_id": id.as_str(), "favorite": favorite }),
        );
        return;
    }
    output::print(Line::Success(&format!("{} {message}", output::accent(id))));
}
