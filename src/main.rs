use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use homefinder::catalog::{Catalog, NewProperty, PropertyUpdate};
use homefinder::config::{Cli, Commands, ExportArgs, FavoritesCommand, ListingsCommand, SearchArgs};
use homefinder::export::{export, format_price};
use homefinder::favorites::{
    compare_selection, favorites_view, FavoritesSort, FavoritesStore, JsonFileStore,
};
use homefinder::query::Facets;
use homefinder::sources::{source_from_location, JsonFileSource};
use homefinder::Property;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => {
            let properties = load(&cli.source).await?;
            search(&properties, &args)
        }
        Commands::Facets => {
            let properties = load(&cli.source).await?;
            let facets = Facets::collect(&properties);
            println!("{}", serde_json::to_string_pretty(&facets)?);
            Ok(())
        }
        Commands::Favorites { store, command } => {
            let store = JsonFileStore::new(store.path);
            favorites(&cli.source, &store, command).await
        }
        Commands::Listings { command } => listings(&cli.source, command).await,
        Commands::Export(args) => {
            let properties = load(&cli.source).await?;
            export_favorites(&properties, &args).await
        }
    }
}

async fn load(location: &str) -> Result<Vec<Property>> {
    let source = source_from_location(location)?;
    info!("Loading listings from {} source", source.source_name());
    source
        .load()
        .await
        .with_context(|| format!("Failed to load properties from {}", location))
}

fn search(properties: &[Property], args: &SearchArgs) -> Result<()> {
    let state = args.to_query_state();
    let result = state.run(properties);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    info!(
        "{} {} available",
        result.total_matched,
        if result.total_matched == 1 { "property" } else { "properties" }
    );

    for (i, property) in result.items.iter().enumerate() {
        print_property(i + 1, property);
    }

    if let Some(hint) = load_more_hint(state.page_size, state.page, result.has_more) {
        println!("{}", hint);
    }
    Ok(())
}

/// Next-page hint; nothing when a larger page cannot reveal more items
fn load_more_hint(page_size: i64, page: i64, has_more: bool) -> Option<String> {
    if !has_more || page_size <= 0 {
        return None;
    }
    Some(format!(
        "… more results: rerun with --page {}",
        page.max(0).saturating_add(1)
    ))
}

async fn favorites(source: &str, store: &JsonFileStore, command: FavoritesCommand) -> Result<()> {
    let mut favorites = store.load().await?;

    match command {
        FavoritesCommand::Add { id } => {
            if !favorites.add(id.clone()) {
                info!("{} is already a favorite", id);
            }
            store.save(&favorites).await?;
        }
        FavoritesCommand::Remove { id } => {
            if !favorites.remove(&id) {
                warn!("{} was not a favorite", id);
            }
            store.save(&favorites).await?;
        }
        FavoritesCommand::Toggle { id } => {
            let now_favorite = favorites.toggle(&id);
            info!(
                "{} {}",
                id,
                if now_favorite { "added to favorites" } else { "removed from favorites" }
            );
            store.save(&favorites).await?;
        }
        FavoritesCommand::Clear => {
            favorites.clear();
            store.save(&favorites).await?;
        }
        FavoritesCommand::List { query, sort } => {
            let properties = load(source).await?;
            let saved = favorites_view(&properties, &favorites, &query, sort);
            info!("{} saved {}", saved.len(), if saved.len() == 1 { "property" } else { "properties" });
            for (i, property) in saved.iter().enumerate() {
                print_property(i + 1, property);
            }
        }
        FavoritesCommand::Compare { ids } => {
            let properties = load(source).await?;
            let picked = compare_selection(&properties, &ids)?;
            print_comparison(&picked);
        }
    }

    Ok(())
}

async fn listings(location: &str, command: ListingsCommand) -> Result<()> {
    let source = source_from_location(location)?;
    let mut catalog = Catalog::new(source.load().await?);

    match command {
        ListingsCommand::Show { id } => {
            let property = catalog
                .get(&id)
                .with_context(|| format!("No listing with id '{}'", id))?;
            println!("{}", serde_json::to_string_pretty(property)?);
            return Ok(());
        }
        _ if source.source_name() != "json-file" => {
            anyhow::bail!("Editing listings needs a JSON file source, got '{}'", location);
        }
        ListingsCommand::Add { file } => {
            let new: NewProperty = read_json(&file).await?;
            let added = catalog.add(new);
            println!("{}", added.id);
        }
        ListingsCommand::Update { id, file } => {
            let update: PropertyUpdate = read_json(&file).await?;
            catalog
                .update(&id, update)
                .with_context(|| format!("No listing with id '{}'", id))?;
        }
        ListingsCommand::Delete { id } => {
            catalog
                .delete(&id)
                .with_context(|| format!("No listing with id '{}'", id))?;
        }
    }

    JsonFileSource::new(location).save(catalog.properties()).await
}

async fn export_favorites(properties: &[Property], args: &ExportArgs) -> Result<()> {
    let store = JsonFileStore::new(&args.store.path);
    let favorites = store.load().await?;
    let saved = favorites_view(properties, &favorites, "", FavoritesSort::default());

    let content = export(&saved, args.format, args.fields(), Utc::now())?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("💾 Exported {} properties to {}", saved.len(), path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_property(position: usize, property: &Property) {
    println!("{}. {} ({})", position, property.title, format_price(property.price));
    println!(
        "   {} · {} · {}, {}",
        property.property_type,
        property.status.label(),
        property.location.neighborhood,
        property.location.city
    );
    if let Some(area) = property.area {
        println!("   {} m²", area);
    }
    if !property.amenities.is_empty() {
        println!("   Amenities: {}", property.amenities.join(", "));
    }
    println!("   ID: {}", property.id);
    println!();
}

fn print_comparison(picked: &[&Property]) {
    comparison_row(picked, "Title", |p| p.title.clone());
    comparison_row(picked, "Type", |p| p.property_type.clone());
    comparison_row(picked, "Price", |p| format_price(p.price));
    comparison_row(picked, "Status", |p| p.status.label().to_string());
    comparison_row(picked, "City", |p| p.location.city.clone());
    comparison_row(picked, "Bedrooms", |p| or_na(p.bedrooms));
    comparison_row(picked, "Bathrooms", |p| or_na(p.bathrooms));
    comparison_row(picked, "Area", |p| p.area.map_or("N/A".to_string(), |a| format!("{} m²", a)));
    comparison_row(picked, "Amenities", |p| p.amenities.join(", "));
}

fn comparison_row(picked: &[&Property], label: &str, value: impl Fn(&Property) -> String) {
    let cells: Vec<String> = picked.iter().map(|&p| value(p)).collect();
    println!("{:<12} {}", label, cells.join(" | "));
}

fn or_na(value: Option<u32>) -> String {
    value.map_or("N/A".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_points_at_next_page() {
        assert_eq!(
            load_more_hint(12, 1, true).as_deref(),
            Some("… more results: rerun with --page 2")
        );
        assert_eq!(load_more_hint(12, 3, false), None);
    }

    #[test]
    fn no_hint_without_a_positive_page_size() {
        assert_eq!(load_more_hint(0, i64::MAX, true), None);
        assert_eq!(load_more_hint(-4, 2, true), None);
    }

    #[test]
    fn hint_saturates_at_the_last_page() {
        assert_eq!(
            load_more_hint(1, i64::MAX, true).as_deref(),
            Some(format!("… more results: rerun with --page {}", i64::MAX).as_str())
        );
        assert_eq!(
            load_more_hint(5, -3, true).as_deref(),
            Some("… more results: rerun with --page 1")
        );
    }
}
